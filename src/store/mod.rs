//! Tag store: Namaste tags on a real directory
//!
//! [`TagStore`] bridges the filename codec and a directory's entries. Nothing
//! is cached: every call stats and lists the directory again, so results
//! always reflect what is on disk at that moment.
//!
//! Tag files are written as `<prefix>=<escaped-value>` with the raw value plus
//! a newline as content. Writing the same kind and value twice rewrites the
//! same file; writing a different value for the same kind adds a second file.
//! The store never deletes tag files.
//!
//! # Examples
//!
//! ```no_run
//! use namaste::store::TagStore;
//!
//! let store = TagStore::local();
//! store.set_tag("hamlet-epub", "type", "ePub_3").unwrap();
//! store.set_tag("hamlet-epub", "who", "Twain, Mark").unwrap();
//!
//! let tags = store.get_all("hamlet-epub", &[] as &[&str]).unwrap();
//! let types = store.get_types("hamlet-epub").unwrap();
//! ```

pub mod error;
pub mod types;

pub use error::{PartialListing, StoreError};
pub use types::DirectoryType;

use crate::codec::{self, STANDARD_KINDS, TagKind};
use crate::fs::{Filesystem, LocalFs};
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::Path;
use tracing::{debug, trace};

/// Characters that may not appear in a kind prefix
const FORBIDDEN_PREFIX_CHARS: [char; 4] = ['/', '\\', codec::SEPARATOR, '\0'];

/// Directory tag operations over a [`Filesystem`]
#[derive(Debug, Clone, Default)]
pub struct TagStore<F = LocalFs> {
    fs: F,
}

impl TagStore<LocalFs> {
    /// Store backed by the local filesystem
    #[must_use]
    pub const fn local() -> Self {
        Self { fs: LocalFs }
    }
}

impl<F: Filesystem> TagStore<F> {
    /// Wrap a filesystem capability
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// The underlying filesystem
    pub const fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Write a tag file for a kind name and raw value
    ///
    /// The kind name is resolved case-insensitively; unknown names are used
    /// verbatim as the prefix. Returns the filename that was written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotADirectory` if `dir` is missing or not a
    /// directory, `StoreError::InvalidKind` if the kind cannot be a filename
    /// prefix, or `StoreError::Filesystem` if the write fails. Nothing is
    /// cleaned up after a failed write.
    pub fn set_tag<P: AsRef<Path>>(
        &self,
        dir: P,
        kind_name: &str,
        value: &str,
    ) -> Result<String, StoreError> {
        self.set(dir, &TagKind::from_name(kind_name), value)
    }

    /// Write a tag file for an already resolved kind
    ///
    /// # Errors
    ///
    /// Same as [`TagStore::set_tag`].
    pub fn set<P: AsRef<Path>>(
        &self,
        dir: P,
        kind: &TagKind,
        value: &str,
    ) -> Result<String, StoreError> {
        let dir = dir.as_ref();
        validate_kind(kind)?;
        self.ensure_directory(dir)?;

        let filename = codec::compose(kind, value);
        let path = dir.join(&filename);
        let contents = format!("{value}\n");

        self.fs
            .write_file(&path, contents.as_bytes())
            .map_err(|e| StoreError::filesystem(&path, e))?;

        debug!(dir = %dir.display(), kind = %kind, file = %filename, "wrote tag");
        Ok(filename)
    }

    /// List tag filenames with the given prefix, in enumeration order
    ///
    /// `kind_prefix` is the stored prefix (`0`, `note`, ...), not the human
    /// kind name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotADirectory` if `dir` is missing or not a
    /// directory, or `StoreError::Filesystem` if listing fails.
    pub fn list_tags_by_kind<P: AsRef<Path>>(
        &self,
        dir: P,
        kind_prefix: &str,
    ) -> Result<Vec<String>, StoreError> {
        let dir = dir.as_ref();
        self.ensure_directory(dir)?;

        let wanted = format!("{kind_prefix}{}", codec::SEPARATOR);
        let entries = self
            .fs
            .list_entries(dir)
            .map_err(|e| StoreError::filesystem(dir, e))?;

        let tags: Vec<String> = entries
            .into_iter()
            .filter(|name| {
                let hit = name.starts_with(&wanted);
                trace!(entry = %name, prefix = %wanted, hit, "filter entry");
                hit
            })
            .collect();

        debug!(dir = %dir.display(), prefix = kind_prefix, count = tags.len(), "listed tags");
        Ok(tags)
    }

    /// Collect tag filenames for several kinds
    ///
    /// Kinds are human names resolved like [`TagStore::set_tag`]. An empty
    /// slice means every standard kind (`type`, `who`, `what`, `when`,
    /// `where`, `note`). Results are grouped per kind in the order given;
    /// a kind repeated under another spelling is only listed once.
    ///
    /// # Errors
    ///
    /// Stops at the first failing listing and returns a [`PartialListing`]
    /// holding the filenames collected so far.
    pub fn get_all<P, S>(&self, dir: P, kinds: &[S]) -> Result<Vec<String>, PartialListing>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let dir = dir.as_ref();
        let requested: Vec<TagKind> = if kinds.is_empty() {
            STANDARD_KINDS.to_vec()
        } else {
            kinds.iter().map(|k| TagKind::from_name(k.as_ref())).collect()
        };

        let mut seen = HashSet::new();
        let mut collected = Vec::new();
        for kind in &requested {
            if !seen.insert(kind.prefix().to_string()) {
                continue;
            }
            match self.list_tags_by_kind(dir, kind.prefix()) {
                Ok(mut tags) => collected.append(&mut tags),
                Err(source) => {
                    return Err(PartialListing {
                        partial: collected,
                        source,
                    });
                }
            }
        }
        Ok(collected)
    }

    /// Like [`TagStore::get_all`], but returns decoded values
    ///
    /// Standard prefixes are stripped before decoding; values of ad-hoc kinds
    /// keep their prefix.
    ///
    /// # Errors
    ///
    /// Same as [`TagStore::get_all`]; the partial list holds raw filenames.
    pub fn get_values<P, S>(&self, dir: P, kinds: &[S]) -> Result<Vec<String>, PartialListing>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let filenames = self.get_all(dir, kinds)?;
        Ok(filenames.iter().map(|f| codec::parse_value(f)).collect())
    }

    /// Parse every type tag of a directory
    ///
    /// Keys are type names. When two type tags share a name, the one listed
    /// later wins.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotADirectory` if `dir` is missing or not a
    /// directory, or `StoreError::Filesystem` if listing fails.
    pub fn get_types<P: AsRef<Path>>(
        &self,
        dir: P,
    ) -> Result<BTreeMap<String, DirectoryType>, StoreError> {
        let tags = self.list_tags_by_kind(dir, TagKind::Type.prefix())?;

        let mut types = BTreeMap::new();
        for tag in tags {
            let record = DirectoryType::parse(&codec::parse_value(&tag));
            if let Some(previous) = types.insert(record.name.clone(), record) {
                debug!(name = %previous.name, replaced = %previous, "duplicate type name");
            }
        }
        Ok(types)
    }

    fn ensure_directory(&self, dir: &Path) -> Result<(), StoreError> {
        match self.fs.stat(dir) {
            Ok(stat) if stat.is_dir => Ok(()),
            Ok(_) => Err(StoreError::NotADirectory(dir.to_path_buf())),
            Err(e) if is_missing(&e) => Err(StoreError::NotADirectory(dir.to_path_buf())),
            Err(e) => Err(StoreError::filesystem(dir, e)),
        }
    }
}

fn is_missing(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

fn validate_kind(kind: &TagKind) -> Result<(), StoreError> {
    if kind.is_standard() {
        return Ok(());
    }
    let prefix = kind.prefix();
    if prefix.is_empty() || prefix.contains(FORBIDDEN_PREFIX_CHARS) {
        return Err(StoreError::InvalidKind(prefix.to_string()));
    }
    Ok(())
}
