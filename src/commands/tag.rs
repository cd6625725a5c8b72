//! Tag command - write one namaste tag into a directory

use crate::cli::{Settings, WriteRequest};
use crate::fs::Filesystem;
use crate::output::{self, OutputFormat};
use crate::store::TagStore;
use crate::NamasteError;
use std::io::Write;

type Result<T> = std::result::Result<T, NamasteError>;

/// Execute a write verb (`type`, `who`, ..., `set`)
///
/// Prints the written filename in text mode unless quiet, and always prints
/// the `{"<kind>": "<filename>"}` object in JSON mode.
///
/// # Errors
/// Returns `NamasteError::MissingArgument` if no value was given, or the
/// store error if the directory is unusable or the write fails.
pub fn execute<F: Filesystem, W: Write>(
    store: &TagStore<F>,
    request: &WriteRequest<'_>,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let value = request
        .value
        .ok_or_else(|| NamasteError::MissingArgument(format!("{} requires a value", request.kind)))?;

    let filename = store.set(&settings.directory, &request.kind, value)?;

    match settings.format {
        OutputFormat::Json => {
            writeln!(out, "{}", output::written_tag(&request.kind, &filename, settings.format)?)?;
        }
        OutputFormat::Text if !settings.quiet => writeln!(out, "{filename}")?,
        OutputFormat::Text => {}
    }
    Ok(())
}
