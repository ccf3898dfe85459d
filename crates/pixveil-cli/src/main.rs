use clap::Parser;

use cli::{CliArgs, Commands};
use pixveil_core::SteganoError;

mod cli;
mod commands;

pub type CliResult<T> = Result<T, SteganoError>;

fn main() -> CliResult<()> {
    env_logger::init();
    let args = CliArgs::parse();

    match args.command {
        Commands::Hide(hide) => hide.run(),
        Commands::Unveil(unveil) => unveil.run(),
        Commands::Capacity(capacity) => capacity.run(),
    }
}
