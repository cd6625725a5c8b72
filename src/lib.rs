//! Namaste - name-as-text directory tagging
//!
//! Records lightweight metadata about a directory (type, who, what, when,
//! where, free-form notes) as files whose *names* carry the data, e.g. a file
//! called `0=bagit_0.1` says the directory is a BagIt 0.1 bag. The directory
//! listing is the whole metadata store.
//!
//! - [`escape`] makes values safe to use inside file names
//! - [`codec`] maps kinds to prefixes and builds/parses tag filenames
//! - [`store`] reads and writes tag files through a [`fs::Filesystem`]

use thiserror::Error;

pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod escape;
pub mod fs;
pub mod logging;
pub mod output;
pub mod store;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NamasteError {
    /// Tag store error
    #[error(transparent)]
    Store(#[from] store::StoreError),
    /// Aggregate listing stopped early
    #[error(transparent)]
    Listing(#[from] store::PartialListing),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// A write verb was given no value
    #[error("Missing argument: {0}")]
    MissingArgument(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
