//! Get command - list the namaste tags of a directory

use crate::cli::Settings;
use crate::fs::Filesystem;
use crate::output;
use crate::store::TagStore;
use crate::NamasteError;
use std::io::Write;
use tracing::debug;

type Result<T> = std::result::Result<T, NamasteError>;

/// Execute the get command
///
/// With no kinds every standard kind is listed. `--values` switches from tag
/// filenames to decoded values.
///
/// # Errors
/// Returns the listing error if the directory cannot be read. Tags collected
/// before the failure are not printed.
pub fn execute<F: Filesystem, W: Write>(
    store: &TagStore<F>,
    kinds: &[String],
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let listing = if settings.values {
        store.get_values(&settings.directory, kinds)
    } else {
        store.get_all(&settings.directory, kinds)
    };

    let items = listing.inspect_err(|e| {
        debug!(collected = e.partial.len(), "listing stopped early");
    })?;

    let rendered = output::tag_list(&items, settings.format, settings.values, settings.color)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::store::StoreError;
    use crate::testing::MemoryFs;
    use std::path::PathBuf;

    fn store() -> TagStore<MemoryFs> {
        let store = TagStore::new(MemoryFs::with_dir("/data"));
        store.set_tag("/data", "type", "bagit_0.1").unwrap();
        store.set_tag("/data", "who", "Twain, Mark").unwrap();
        store.set_tag("/data", "note", "draft").unwrap();
        store
    }

    fn settings(format: OutputFormat, values: bool) -> Settings {
        Settings {
            directory: PathBuf::from("/data"),
            format,
            values,
            quiet: false,
            color: false,
        }
    }

    fn run(kinds: &[&str], settings: &Settings) -> Result<String> {
        let kinds: Vec<String> = kinds.iter().map(ToString::to_string).collect();
        let mut out = Vec::new();
        execute(&store(), &kinds, settings, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_all() {
        assert_eq!(
            run(&[], &settings(OutputFormat::Text, false)).unwrap(),
            "namastes: 0=bagit_0.1, 1=Twain,^20Mark, note=draft\n"
        );
    }

    #[test]
    fn test_values_selected_kinds() {
        assert_eq!(
            run(&["who", "note"], &settings(OutputFormat::Text, true)).unwrap(),
            "Twain, Mark\ndraft\n"
        );
    }

    #[test]
    fn test_json() {
        assert_eq!(
            run(&["type"], &settings(OutputFormat::Json, false)).unwrap(),
            "[\"0=bagit_0.1\"]\n"
        );
        assert_eq!(
            run(&["who"], &settings(OutputFormat::Json, true)).unwrap(),
            "[\"Twain, Mark\"]\n"
        );
    }

    #[test]
    fn test_missing_directory() {
        let mut s = settings(OutputFormat::Text, false);
        s.directory = PathBuf::from("/missing");
        match run(&[], &s) {
            Err(NamasteError::Listing(e)) => {
                assert!(matches!(e.source, StoreError::NotADirectory(_)));
            }
            other => panic!("Expected Listing error, got {other:?}"),
        }
    }
}
