use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides an encrypted message or file in an image, the result is always a PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the data, asked for when missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Cover image such as PNG, JPEG or BMP, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let password = match self.password {
            Some(password) => Some(password),
            None => crate::cli::ask_for_password(true)?,
        };

        pixveil_core::commands::hide(
            &self.media,
            &self.write_to_file,
            self.data_file,
            self.message,
            password,
        )?;
        println!("Secret hidden in {}", self.write_to_file.display());

        Ok(())
    }
}
