use clap::{Parser, Subcommand};
use pixveil_core::SteganoError;

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}

/// Reads the password without echo, `confirm` asks a second time and compares.
pub fn ask_for_password(confirm: bool) -> CliResult<Option<String>> {
    let prompt = dialoguer::Password::new().with_prompt("Password");
    let prompt = if confirm {
        prompt.with_confirmation("Confirm password", "Passwords do not match, try again")
    } else {
        prompt
    };

    prompt
        .interact()
        .map(Some)
        .map_err(|e| SteganoError::IoError(std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_hide_with_message() {
        let args = CliArgs::try_parse_from([
            "pixveil", "hide", "-i", "cover.png", "-o", "out.png", "-m", "Hello", "-p", "pw",
        ])
        .unwrap();

        let Commands::Hide(hide) = args.command else {
            panic!("expected the hide command");
        };
        assert_eq!(hide.media, Path::new("cover.png"));
        assert_eq!(hide.write_to_file, Path::new("out.png"));
        assert_eq!(hide.message.as_deref(), Some("Hello"));
        assert_eq!(hide.data_file, None);
        assert_eq!(hide.password.as_deref(), Some("pw"));
    }

    #[test]
    fn should_refuse_hide_with_message_and_file() {
        let result = CliArgs::try_parse_from([
            "pixveil", "hide", "-i", "cover.png", "-o", "out.png", "-m", "Hello", "-d", "a.bin",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn should_require_something_to_hide() {
        let result =
            CliArgs::try_parse_from(["pixveil", "hide", "-i", "cover.png", "-o", "out.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn should_parse_unveil_without_output() {
        let args = CliArgs::try_parse_from(["pixveil", "unveil", "-i", "secret.png"]).unwrap();

        let Commands::Unveil(unveil) = args.command else {
            panic!("expected the unveil command");
        };
        assert_eq!(unveil.media, Path::new("secret.png"));
        assert_eq!(unveil.output_file, None);
        assert_eq!(unveil.password, None);
    }

    #[test]
    fn should_parse_capacity() {
        let args = CliArgs::try_parse_from(["pixveil", "capacity", "-i", "cover.png"]).unwrap();
        assert!(matches!(args.command, Commands::Capacity(_)));
    }
}
