//! Tag store error types
//!
//! # Error Types
//!
//! - **`NotADirectory`**: the target path is missing or is not a directory
//! - **`InvalidKind`**: a kind name that cannot be used as a filename prefix
//! - **`Filesystem`**: any other I/O failure, with the path it happened on
//!
//! [`PartialListing`] carries the filenames an aggregate query had already
//! collected when a later listing failed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Tag store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Path does not exist or is not a directory
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Kind name unusable as a filename prefix
    #[error("Invalid tag kind: {0:?}")]
    InvalidKind(String),

    /// Underlying filesystem failure
    #[error("Filesystem error on {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem { path: path.into(), source }
    }
}

/// An aggregate listing that stopped at the first failure
#[derive(Debug, Error)]
#[error("{source} (after collecting {} tag(s))", .partial.len())]
pub struct PartialListing {
    /// Filenames collected before the failure, in listing order
    pub partial: Vec<String>,
    #[source]
    pub source: StoreError,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
