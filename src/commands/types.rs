//! Gettypes command - show the parsed directory types

use crate::cli::Settings;
use crate::fs::Filesystem;
use crate::output;
use crate::store::TagStore;
use crate::NamasteError;
use std::io::Write;

type Result<T> = std::result::Result<T, NamasteError>;

/// Execute the gettypes command
///
/// # Errors
/// Returns the store error if the directory cannot be read.
pub fn execute<F: Filesystem, W: Write>(
    store: &TagStore<F>,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let types = store.get_types(&settings.directory)?;

    if types.is_empty() && settings.format == output::OutputFormat::Text {
        if !settings.quiet {
            writeln!(out, "No directory type found.")?;
        }
        return Ok(());
    }

    let rendered = output::type_list(&types, settings.format, settings.values, settings.color)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
