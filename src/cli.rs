//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for namaste using the `clap`
//! crate, plus helpers for turning parsed arguments into store calls.
//!
//! # Commands
//!
//! - **type / who / what / when / where / note**: write one tag
//! - **set**: write a tag of an ad-hoc kind
//! - **get**: list tags (filenames, or decoded values with `--values`)
//! - **gettypes**: show parsed directory types
//! - **config**: read and change defaults
//! - **completions**: print a shell completion script
//!
//! # Examples
//!
//! ```bash
//! cd hamlet-epub
//! namaste type ePub_3
//! namaste who "Twain, Mark"
//! namaste get
//! namaste get --values who what
//! namaste -f json gettypes
//! ```

use crate::codec::TagKind;
use crate::config::NamasteConfig;
use crate::output::OutputFormat;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::Write;
use std::path::PathBuf;

/// Top-level arguments
#[derive(Parser, Debug)]
#[command(name = "namaste")]
#[command(about = "Record directory metadata as name-as-text tag files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory to tag or inspect (defaults to config, then ".")
    #[arg(short = 'd', long = "directory", value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(short = 'j', long = "json", global = true, conflicts_with = "format")]
    pub json: bool,

    /// Print decoded values instead of tag filenames
    #[arg(long = "values", global = true)]
    pub values: bool,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Set the type of a directory, e.g. bagit_0.1
    Type {
        value: Option<String>,
    },

    /// Set who created the directory contents
    Who {
        value: Option<String>,
    },

    /// Set what the directory contents are
    What {
        value: Option<String>,
    },

    /// Set when the directory contents were created
    When {
        value: Option<String>,
    },

    /// Set where the directory contents were created
    Where {
        value: Option<String>,
    },

    /// Add a free-form note
    Note {
        value: Option<String>,
    },

    /// Set a tag of any kind, e.g. `set rights CC0`
    Set {
        /// Kind name (standard names map to their prefixes)
        kind: String,
        value: Option<String>,
    },

    /// List namaste tags of a directory
    Get {
        /// Kinds to list (default: all standard kinds)
        #[arg(value_name = "KIND")]
        kinds: Vec<String>,
    },

    /// Show the parsed directory types
    #[command(name = "gettypes", visible_alias = "types")]
    GetTypes,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., format=json)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file location
    Path,
}

/// A tag write requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest<'a> {
    pub kind: TagKind,
    pub value: Option<&'a str>,
}

/// What a parsed command asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<'a> {
    Write(WriteRequest<'a>),
    Get(&'a [String]),
    GetTypes,
    Config(&'a ConfigCommands),
    Completions(Shell),
}

/// Global options after merging flags with configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub directory: PathBuf,
    pub format: OutputFormat,
    pub values: bool,
    pub quiet: bool,
    /// Whether text output may use terminal colors
    pub color: bool,
}

impl Cli {
    /// Merge flags over configuration defaults
    #[must_use]
    pub fn settings(&self, config: &NamasteConfig, color: bool) -> Settings {
        let format = if self.json {
            OutputFormat::Json
        } else {
            self.format.unwrap_or(config.format)
        };

        Settings {
            directory: self
                .directory
                .clone()
                .or_else(|| config.directory.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            format,
            values: self.values,
            quiet: self.quiet || config.quiet,
            color,
        }
    }
}

impl Commands {
    /// Resolve the command; every write verb becomes a [`WriteRequest`]
    #[must_use]
    pub fn action(&self) -> Action<'_> {
        let (kind, value) = match self {
            Self::Type { value } => (TagKind::Type, value),
            Self::Who { value } => (TagKind::Who, value),
            Self::What { value } => (TagKind::What, value),
            Self::When { value } => (TagKind::When, value),
            Self::Where { value } => (TagKind::Where, value),
            Self::Note { value } => (TagKind::Note, value),
            Self::Set { kind, value } => (TagKind::from_name(kind), value),
            Self::Get { kinds } => return Action::Get(kinds),
            Self::GetTypes => return Action::GetTypes,
            Self::Config { command } => return Action::Config(command),
            Self::Completions { shell } => return Action::Completions(*shell),
        };
        Action::Write(WriteRequest {
            kind,
            value: value.as_deref(),
        })
    }
}

/// Write a completion script for `shell`
pub fn generate_completions<W: Write>(shell: Shell, buf: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}
