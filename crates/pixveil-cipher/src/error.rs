use thiserror::Error;

pub use base64::DecodeError as Base64Error;

#[derive(Debug, Error)]
pub enum CipherError {
    /// The envelope is not valid base64 or shorter than salt, iv, one block and tag
    #[error("Malformed envelope, not valid base64 or too short")]
    MalformedInput,

    /// The MAC did not match, either a wrong password or tampered data
    #[error("Decryption failed, invalid key or corrupted data")]
    AuthenticationFailed,

    /// Padding was broken after an authentic MAC, reported the same way as a MAC mismatch
    #[error("Decryption failed, invalid key or corrupted data")]
    PaddingInvalid,

    #[error("Operating system random source is not available")]
    RandomSourceUnavailable(#[source] rand::Error),
}

impl From<Base64Error> for CipherError {
    fn from(_: Base64Error) -> Self {
        CipherError::MalformedInput
    }
}
