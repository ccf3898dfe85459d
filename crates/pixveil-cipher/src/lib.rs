//! # Password based authenticated encryption
//!
//! Turns a byte buffer and a password into a printable envelope and back.
//! Two keys are stretched from the password with PBKDF2-HMAC-SHA1, the data
//! is encrypted with AES-256-CBC and the iv and ciphertext are authenticated
//! with HMAC-SHA256 (encrypt-then-MAC).
//!
//! The envelope layout is `salt (16) | iv (16) | ciphertext | tag (32)`,
//! base64 encoded.
//!
//! ```rust
//! use pixveil_cipher::{decrypt_data, encrypt_data};
//!
//! let envelope = encrypt_data("resistance is futile", b"Hello World").unwrap();
//! let plain = decrypt_data("resistance is futile", &envelope).unwrap();
//!
//! assert_eq!(plain, b"Hello World");
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, Iv, Key, KeyIvInit};
use hmac::digest::{Key as MacKey, KeyInit};
use hmac::{Hmac, Mac};
use log::debug;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroize;

pub mod error;
pub mod kdf;

pub use crate::error::CipherError;
pub use crate::kdf::{derive_keys, password_bytes, KeyMaterial};

pub const SALT_LEN: usize = 16;
pub const IV_LEN: usize = 16;
pub const BLOCK_LEN: usize = 16;
pub const TAG_LEN: usize = 32;
pub const KEY_LEN: usize = 32;
pub const DERIVED_LEN: usize = 2 * KEY_LEN;
pub const ITERATIONS: u32 = 1_000_000;
/// salt, iv, one padded block and the tag
pub const MIN_ENVELOPE_LEN: usize = SALT_LEN + IV_LEN + BLOCK_LEN + TAG_LEN;

pub type Result<T> = std::result::Result<T, CipherError>;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// encrypt data with password, returns the base64 encoded envelope
///
/// The password is keyed as described at [`password_bytes`].
pub fn encrypt_data(password: &str, plaintext: &[u8]) -> Result<String> {
    seal(password, plaintext, ITERATIONS)
}

/// decrypt a base64 envelope with password, the tag is verified before anything gets decrypted
pub fn decrypt_data(password: &str, envelope: &str) -> Result<Vec<u8>> {
    open(password, envelope, ITERATIONS)
}

pub(crate) fn seal(password: &str, plaintext: &[u8], rounds: u32) -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(CipherError::RandomSourceUnavailable)?;
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(CipherError::RandomSourceUnavailable)?;

    let keys = kdf::derive_keys_with_rounds(&kdf::password_bytes(password), &salt, rounds);

    let ciphertext = Aes256CbcEnc::new(
        Key::<Aes256CbcEnc>::from_slice(&keys.encryption),
        Iv::<Aes256CbcEnc>::from_slice(&iv),
    )
    .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let tag = authenticator(&keys.mac, &iv, &ciphertext)
        .finalize()
        .into_bytes();

    let mut envelope = Vec::with_capacity(SALT_LEN + IV_LEN + ciphertext.len() + TAG_LEN);
    envelope.extend_from_slice(&salt);
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&ciphertext);
    envelope.extend_from_slice(&tag);
    debug!(
        "sealed {} bytes into an envelope of {} bytes",
        plaintext.len(),
        envelope.len()
    );

    Ok(BASE64.encode(envelope))
}

pub(crate) fn open(password: &str, envelope: &str, rounds: u32) -> Result<Vec<u8>> {
    let data = BASE64.decode(envelope.trim())?;
    if data.len() < MIN_ENVELOPE_LEN {
        debug!("envelope of {} bytes is too short", data.len());
        return Err(CipherError::MalformedInput);
    }

    let (salt, rest) = data.split_at(SALT_LEN);
    let (iv, rest) = rest.split_at(IV_LEN);
    let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LEN);

    let keys = kdf::derive_keys_with_rounds(&kdf::password_bytes(password), salt, rounds);

    authenticator(&keys.mac, iv, ciphertext)
        .verify_slice(tag)
        .map_err(|_| CipherError::AuthenticationFailed)?;

    Aes256CbcDec::new(
        Key::<Aes256CbcDec>::from_slice(&keys.encryption),
        Iv::<Aes256CbcDec>::from_slice(iv),
    )
    .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
    .map_err(|_| CipherError::PaddingInvalid)
}

/// HMAC zero pads keys shorter than the hash block, so the 32 byte key fills a 64 byte block
fn authenticator(mac_key: &[u8; KEY_LEN], iv: &[u8], ciphertext: &[u8]) -> HmacSha256 {
    let mut block = MacKey::<HmacSha256>::default();
    block[..KEY_LEN].copy_from_slice(mac_key);
    let mut mac = <HmacSha256 as KeyInit>::new(&block);
    block.as_mut_slice().zeroize();

    mac.update(iv);
    mac.update(ciphertext);
    mac
}
