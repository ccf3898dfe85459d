use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

pub use pixveil_cipher::CipherError;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a target file that would be written with a lossy or unknown format
    #[error("Target file {0:?} must be a PNG image, other formats destroy the hidden data")]
    LossyTarget(PathBuf),

    /// Represents the error of invalid UTF-8 text data found inside of a text message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents an image whose length header points beyond its own pixels
    #[error("The hidden data stream is truncated, the image is corrupted or contains no secret")]
    TruncatedStream,

    /// Represents a decoded type tag that is neither `TEXT` nor `FILE`
    #[error("Unrecognized content format, the image contains no secret")]
    UnrecognizedFormat,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(#[source] CipherError),

    /// Represents an error when decrypting the data, wrong password and tampered data look the same
    #[error("Decryption failed, invalid key or corrupted data")]
    DecryptionError(#[source] CipherError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error(
        "Capacity Error: The provided image can hold at most {capacity} bytes, but {required} bytes are required"
    )]
    ImageCapacityError { capacity: usize, required: usize },

    #[error("Payload of {0} bytes exceeds the 32 bit length header")]
    PayloadTooLarge(usize),

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Either a message or a file can be hidden, not both")]
    AmbiguousMessage,

    #[error("API Error: Missing password")]
    MissingPassword,
}
