use std::path::{Path, PathBuf};

use log::info;

use crate::media::types::is_png_extension;
use crate::media::{Media, Persist};
use crate::{Message, SteganoError};

use super::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.file = data_file;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password used for encrypting the data, hiding without one is refused
    pub fn with_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Encrypts the message, hides it in the image and writes the PNG to the output.
    pub fn execute(self) -> Result<(), SteganoError> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        let password = self.password.expose()?;

        let message = match (self.message, self.file) {
            (Some(text), None) => Message::from_text(&text),
            (None, Some(file)) => Message::from_file(&file)?,
            _ => return Err(SteganoError::MissingMessage),
        };

        let media = Media::from_file(&image)?;
        let raw = message.to_raw_data(password)?;
        let mut stego = media.hide_data(&raw, message.kind)?;
        stego.save_as(&output)?;
        info!("hid {} bytes of {} in {output:?}", raw.len(), message.kind);

        Ok(())
    }

    fn validate(&self) -> Result<(), SteganoError> {
        match (&self.message, &self.file) {
            (Some(_), Some(_)) => return Err(SteganoError::AmbiguousMessage),
            (None, None) => return Err(SteganoError::MissingMessage),
            (Some(text), None) if text.trim().is_empty() => {
                return Err(SteganoError::MissingMessage);
            }
            _ => {}
        }

        if let Some(output) = self.output.as_ref().filter(|o| !is_png_extension(o)) {
            return Err(SteganoError::LossyTarget(output.clone()));
        }

        Ok(())
    }
}
