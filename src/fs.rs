//! Filesystem capability used by the tag store
//!
//! The store never touches `std::fs` directly. It goes through [`Filesystem`],
//! which only needs three primitives: stat a path, list the names in a
//! directory, and write a whole file. [`LocalFs`] backs it with the local disk;
//! anything else exposing the same directory semantics can be plugged in.

use std::fs;
use std::io;
use std::path::Path;

/// What the store needs to know about a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    pub is_dir: bool,
}

/// Minimal directory and file primitives
pub trait Filesystem {
    /// Stat a path.
    ///
    /// # Errors
    /// Returns an `io::Error` with kind `NotFound` if the path does not exist,
    /// or any other I/O error reported by the backend.
    fn stat(&self, path: &Path) -> io::Result<EntryStat>;

    /// List entry names of a directory, in the backend's enumeration order.
    ///
    /// # Errors
    /// Returns an `io::Error` if the directory cannot be read.
    ///
    /// Names that are not valid UTF-8 are returned with the invalid bytes
    /// replaced by U+FFFD.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Create or replace a file with the given contents.
    ///
    /// # Errors
    /// Returns an `io::Error` if the file cannot be written.
    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// [`Filesystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn stat(&self, path: &Path) -> io::Result<EntryStat> {
        let metadata = fs::metadata(path)?;
        Ok(EntryStat { is_dir: metadata.is_dir() })
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            // Invalid UTF-8 is replaced rather than dropped so no tag goes missing
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}
