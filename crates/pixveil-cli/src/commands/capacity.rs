use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how many bytes an image can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Image to inspect
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let report = pixveil_core::commands::capacity(&self.media)?;
        println!("{report}");

        Ok(())
    }
}
