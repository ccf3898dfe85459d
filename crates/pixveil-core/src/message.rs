use crate::media::payload::ContentKind;
use crate::result::Result;
use crate::SteganoError;

use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The secret before encryption, either a text or the bytes of a file.
#[derive(Debug, PartialEq, Eq)]
pub struct Message {
    pub kind: ContentKind,
    pub data: Vec<u8>,
}

impl Message {
    /// Creates a new message with the given text, surrounding whitespace is stripped.
    pub fn from_text(text: &str) -> Self {
        Self {
            kind: ContentKind::Text,
            data: text.trim().as_bytes().to_vec(),
        }
    }

    /// Creates a new message with the content of the given file, the file name is not kept.
    pub fn from_file<P: AsRef<Path> + ?Sized>(file: &P) -> Result<Self> {
        let mut fd = File::open(file).map_err(|source| SteganoError::ReadError { source })?;
        let mut data = Vec::new();
        fd.read_to_end(&mut data)
            .map_err(|source| SteganoError::ReadError { source })?;

        Ok(Self {
            kind: ContentKind::File,
            data,
        })
    }

    /// Encrypts the message, the result is the base64 envelope as bytes.
    pub fn to_raw_data(&self, password: &str) -> Result<Vec<u8>> {
        let envelope = pixveil_cipher::encrypt_data(password, &self.data)
            .map_err(SteganoError::EncryptionError)?;
        debug!(
            "{} bytes of {} became an envelope of {} bytes",
            self.data.len(),
            self.kind,
            envelope.len()
        );

        Ok(envelope.into_bytes())
    }

    /// Reverses [`Message::to_raw_data`], a text message must be valid UTF-8 after decryption.
    pub fn from_raw_data(kind: ContentKind, raw: &[u8], password: &str) -> Result<Self> {
        let envelope = std::str::from_utf8(raw).map_err(|_| {
            debug!("hidden data is not a base64 envelope");
            SteganoError::DecryptionError(pixveil_cipher::CipherError::MalformedInput)
        })?;
        let data = pixveil_cipher::decrypt_data(password, envelope)
            .map_err(SteganoError::DecryptionError)?;

        let data = match kind {
            ContentKind::Text => String::from_utf8(data)?.into_bytes(),
            ContentKind::File => data,
        };

        Ok(Self { kind, data })
    }

    /// the text of a text message, `None` for files
    pub fn text(&self) -> Option<&str> {
        match self.kind {
            ContentKind::Text => std::str::from_utf8(&self.data).ok(),
            ContentKind::File => None,
        }
    }
}
