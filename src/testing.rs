//! Testing utilities for namaste
//!
//! Provides [`MemoryFs`], an in-memory [`Filesystem`] with deterministic
//! listing order and switchable failures, plus a helper for tagging a real
//! temporary directory.
//!
//! Only available when compiled with `cfg(test)`.

use crate::fs::{EntryStat, Filesystem};
use std::cell::{Cell, RefCell};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// In-memory filesystem
///
/// Entries are listed in insertion order. Rewriting an existing file keeps
/// its position.
#[derive(Debug, Default)]
pub struct MemoryFs {
    dirs: RefCell<Vec<PathBuf>>,
    files: RefCell<Vec<(PathBuf, Vec<u8>)>>,
    stat_error: Cell<Option<io::ErrorKind>>,
    write_error: Cell<Option<io::ErrorKind>>,
    /// Remaining successful listings before `list_entries` starts failing
    list_budget: Cell<Option<(usize, io::ErrorKind)>>,
}

impl MemoryFs {
    /// Filesystem containing a single empty directory
    pub fn with_dir(path: impl AsRef<Path>) -> Self {
        let fs = Self::default();
        fs.add_dir(path);
        fs
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.dirs.borrow_mut().push(path.as_ref().to_path_buf());
    }

    /// Add a file without going through [`Filesystem::write_file`]
    pub fn add_file(&self, path: impl AsRef<Path>, contents: &str) {
        self.files
            .borrow_mut()
            .push((path.as_ref().to_path_buf(), contents.as_bytes().to_vec()));
    }

    /// Contents of a file as UTF-8, if it exists
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .iter()
            .find(|(p, _)| p == path.as_ref())
            .map(|(_, data)| String::from_utf8_lossy(data).into_owned())
    }

    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }

    /// Make every `stat` fail with the given kind
    pub fn fail_stat(&self, kind: io::ErrorKind) {
        self.stat_error.set(Some(kind));
    }

    /// Make every `write_file` fail with the given kind
    pub fn fail_writes(&self, kind: io::ErrorKind) {
        self.write_error.set(Some(kind));
    }

    /// Let `successes` listings through, then fail with the given kind
    pub fn fail_listing_after(&self, successes: usize, kind: io::ErrorKind) {
        self.list_budget.set(Some((successes, kind)));
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().iter().any(|d| d == path)
    }
}

fn injected(kind: io::ErrorKind) -> io::Error {
    io::Error::new(kind, "injected failure")
}

impl Filesystem for MemoryFs {
    fn stat(&self, path: &Path) -> io::Result<EntryStat> {
        if let Some(kind) = self.stat_error.get() {
            return Err(injected(kind));
        }
        if self.is_dir(path) {
            return Ok(EntryStat { is_dir: true });
        }
        if self.files.borrow().iter().any(|(p, _)| p == path) {
            return Ok(EntryStat { is_dir: false });
        }
        Err(io::Error::new(io::ErrorKind::NotFound, "no such entry"))
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<String>> {
        if let Some((remaining, kind)) = self.list_budget.get() {
            if remaining == 0 {
                return Err(injected(kind));
            }
            self.list_budget.set(Some((remaining - 1, kind)));
        }
        if !self.is_dir(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }

        let children = |p: &PathBuf| {
            (p.parent() == Some(path))
                .then(|| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .flatten()
        };
        let mut names: Vec<String> = self.dirs.borrow().iter().filter_map(children).collect();
        names.extend(self.files.borrow().iter().filter_map(|(p, _)| children(p)));
        Ok(names)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if let Some(kind) = self.write_error.get() {
            return Err(injected(kind));
        }
        if !path.parent().is_some_and(|parent| self.is_dir(parent)) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "parent directory missing"));
        }

        let mut files = self.files.borrow_mut();
        match files.iter_mut().find(|(p, _)| p == path) {
            Some((_, data)) => *data = contents.to_vec(),
            None => files.push((path.to_path_buf(), contents.to_vec())),
        }
        Ok(())
    }
}

/// Temporary directory pre-tagged with the classic example record
///
/// `0=bagit_0.1`, `1=Feynman,R.`, `2=Particles`, `3=2018`, `4=Pasadena`.
///
/// # Panics
/// Panics if the directory or any tag file cannot be created.
pub fn tagged_temp_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["0=bagit_0.1", "1=Feynman,R.", "2=Particles", "3=2018", "4=Pasadena"] {
        let value = crate::codec::parse_value(name);
        std::fs::write(dir.path().join(name), format!("{value}\n"))
            .expect("Failed to write tag file");
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_listing_order() {
        let fs = MemoryFs::with_dir("/d");
        fs.add_file("/d/b", "");
        fs.add_dir("/d/sub");
        fs.add_file("/d/a", "");
        fs.add_file("/elsewhere/c", "");

        assert_eq!(fs.list_entries(Path::new("/d")).unwrap(), vec!["sub", "b", "a"]);
    }

    #[test]
    fn test_memory_fs_rewrite_keeps_position() {
        let fs = MemoryFs::with_dir("/d");
        fs.write_file(Path::new("/d/x"), b"1").unwrap();
        fs.write_file(Path::new("/d/y"), b"2").unwrap();
        fs.write_file(Path::new("/d/x"), b"3").unwrap();

        assert_eq!(fs.list_entries(Path::new("/d")).unwrap(), vec!["x", "y"]);
        assert_eq!(fs.contents("/d/x").as_deref(), Some("3"));
    }

    #[test]
    fn test_memory_fs_listing_budget() {
        let fs = MemoryFs::with_dir("/d");
        fs.fail_listing_after(1, io::ErrorKind::Other);
        assert!(fs.list_entries(Path::new("/d")).is_ok());
        assert!(fs.list_entries(Path::new("/d")).is_err());
    }

    #[test]
    fn test_tagged_temp_dir() {
        let dir = tagged_temp_dir();
        let content = std::fs::read_to_string(dir.path().join("1=Feynman,R.")).unwrap();
        assert_eq!(content, "Feynman,R.\n");
    }
}
