use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use log::error;
use pixveil_core::{ContentKind, SteganoError};

use crate::CliResult;

/// Unveils a hidden message or file from a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to encrypt the data, asked for when missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Unveiled data will be stored in that file, text is printed when missing
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let password = match self.password {
            Some(password) => Some(password),
            None => crate::cli::ask_for_password(false)?,
        };
        let has_output = self.output_file.is_some();

        let unveiled = pixveil_core::commands::unveil(&self.media, self.output_file, password)?;

        match (unveiled.kind, has_output) {
            (_, true) => Ok(()),
            (ContentKind::Text, false) => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&unveiled.data)?;
                writeln!(stdout)?;
                Ok(())
            }
            (ContentKind::File, false) => {
                error!("The image carries a file, use -o <file> to store it");
                Err(SteganoError::TargetNotSet)
            }
        }
    }
}
