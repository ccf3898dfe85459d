use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::info;

use crate::{media::Media, Message, SteganoError};

use super::Password;

/// what [`UnveilApi::execute`] recovers, see [`Message::text`] for text secrets
pub type Unveiled = Message;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    password: Password,
}

impl UnveilApi {
    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The recovered data is written to this file as well, text or binary alike
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn use_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Set the password the data was encrypted with
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<Unveiled, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let password = self.password.expose()?;

        let media = Media::from_file(&secret_media)?;
        let (kind, raw) = media.unveil_data()?;
        let message = Message::from_raw_data(kind, &raw, password)?;
        info!("unveiled {} bytes of {kind}", message.data.len());

        if let Some(output_file) = self.output_file {
            let mut target_file =
                File::create(output_file).map_err(|source| SteganoError::WriteError { source })?;

            target_file
                .write_all(message.data.as_slice())
                .map_err(|source| SteganoError::WriteError { source })?;
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::payload::ContentKind;
    use crate::test_utils::prepare_image;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let cover = temp_dir.path().join("cover.png");
        let secret = temp_dir.path().join("secret.png");
        prepare_image(64, 64).save(&cover).unwrap();

        crate::api::hide::prepare()
            .with_message("Hello World")
            .with_image(&cover)
            .with_password("Secret42")
            .with_output(&secret)
            .execute()
            .expect("Failed to hide message in image");

        let unveiled = crate::api::unveil::prepare()
            .from_secret_file(&secret)
            .using_password("Secret42")
            .into_output_file(temp_dir.path().join("secret-message.txt"))
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(unveiled.kind, ContentKind::Text);
        assert_eq!(unveiled.text(), Some("Hello World"));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("secret-message.txt")).unwrap(),
            "Hello World"
        );
    }

    #[test]
    fn should_refuse_missing_carrier_and_password() {
        assert!(matches!(
            prepare().using_password("pw").execute(),
            Err(SteganoError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().from_secret_file("secret.png").execute(),
            Err(SteganoError::MissingPassword)
        ));
    }

    #[test]
    fn should_fail_on_images_without_secret() {
        let temp_dir = tempdir().unwrap();
        let plain = temp_dir.path().join("plain.png");
        image::RgbImage::from_pixel(20, 20, image::Rgb([2, 4, 6]))
            .save(&plain)
            .unwrap();

        let result = prepare()
            .from_secret_file(&plain)
            .using_password("pw")
            .execute();
        assert!(matches!(result, Err(SteganoError::UnrecognizedFormat)));
    }
}
