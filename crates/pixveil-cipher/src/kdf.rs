use std::fmt::{self, Debug, Formatter};

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::{Zeroize, Zeroizing};

use crate::{DERIVED_LEN, ITERATIONS, KEY_LEN};

/// the two independent keys stretched out of one password and salt
pub struct KeyMaterial {
    pub encryption: [u8; KEY_LEN],
    pub mac: [u8; KEY_LEN],
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        self.encryption.zeroize();
        self.mac.zeroize();
    }
}

impl Debug for KeyMaterial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "KeyMaterial(**)")
    }
}

/// PBKDF2-HMAC-SHA1 with 1.000.000 rounds, 64 bytes split into encryption key and mac key
pub fn derive_keys(password: &[u8], salt: &[u8]) -> KeyMaterial {
    derive_keys_with_rounds(password, salt, ITERATIONS)
}

/// Password bytes for the KDF: latin-1 when every char fits into one byte, UTF-8 otherwise.
///
/// Envelopes written by other tools key non-ASCII passwords up to U+00FF with their latin-1 bytes.
pub fn password_bytes(password: &str) -> Zeroizing<Vec<u8>> {
    let latin1: Option<Vec<u8>> = password.chars().map(|c| u8::try_from(c).ok()).collect();
    Zeroizing::new(latin1.unwrap_or_else(|| password.as_bytes().to_vec()))
}

pub(crate) fn derive_keys_with_rounds(password: &[u8], salt: &[u8], rounds: u32) -> KeyMaterial {
    let mut output_key_material = [0u8; DERIVED_LEN];
    pbkdf2_hmac::<Sha1>(password, salt, rounds, &mut output_key_material);

    let mut keys = KeyMaterial {
        encryption: [0u8; KEY_LEN],
        mac: [0u8; KEY_LEN],
    };
    keys.encryption.copy_from_slice(&output_key_material[..KEY_LEN]);
    keys.mac.copy_from_slice(&output_key_material[KEY_LEN..]);
    output_key_material.zeroize();

    keys
}
