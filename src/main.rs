//! Namaste CLI application entry point
//!
//! Writes and reads name-as-text tags on a directory.
//!
//! # Usage
//!
//! ```bash
//! # Tag the current directory
//! namaste type bagit_0.1
//! namaste who "Feynman, R."
//! namaste where Pasadena
//!
//! # Tag another directory
//! namaste -d hamlet-epub what Hamlet
//!
//! # Read tags back
//! namaste get
//! namaste get --values who
//! namaste --json gettypes
//! ```
//!
//! # Configuration
//!
//! Defaults for `--directory`, `--format` and `--quiet` live in
//! `~/.config/namaste/config.toml` on Linux and can be changed with
//! `namaste config set key=value`.
//!
//! Exits with status 0 on success and 1 on any error.

use colored::Colorize;
use namaste::{
    NamasteError,
    cli::{Action, Cli},
    commands,
    config::NamasteConfig,
    logging,
    store::TagStore,
};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, NamasteError>;

/// Dispatch the parsed command
///
/// # Errors
///
/// Returns `NamasteError` if configuration loading fails or the command fails.
fn run(cli: &Cli) -> Result<()> {
    let config = NamasteConfig::load()?;
    let mut out = io::stdout().lock();
    let settings = cli.settings(&config, io::stdout().is_terminal());
    let store = TagStore::local();

    match cli.command.action() {
        Action::Write(request) => commands::tag(&store, &request, &settings, &mut out),
        Action::Get(kinds) => commands::get(&store, kinds, &settings, &mut out),
        Action::GetTypes => commands::gettypes(&store, &settings, &mut out),
        Action::Config(command) => {
            let path = NamasteConfig::config_path()?;
            commands::config(config, &path, command, settings.quiet, &mut out)
        }
        Action::Completions(shell) => {
            namaste::cli::generate_completions(shell, &mut out);
            Ok(())
        }
    }
}

/// Main entry point for the namaste application
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too
            let failed = e.use_stderr();
            let _ = e.print();
            return if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
