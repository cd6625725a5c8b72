//! Output formatting for CLI display
//!
//! Renders command results as plain text or JSON. Rendering is kept separate
//! from printing so the exact shape of every line can be tested.

use crate::codec::TagKind;
use crate::store::DirectoryType;
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

fn label(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Confirmation for a freshly written tag file
///
/// JSON form is `{"<kind>": "<filename>"}`.
///
/// # Errors
/// Returns `serde_json::Error` if JSON serialization fails.
pub fn written_tag(
    kind: &TagKind,
    filename: &str,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(filename.to_string()),
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            object.insert(kind.name().to_string(), filename.into());
            serde_json::to_string(&object)
        }
    }
}

/// A list of tag filenames, or of decoded values when `values` is set
///
/// # Errors
/// Returns `serde_json::Error` if JSON serialization fails.
pub fn tag_list(
    items: &[String],
    format: OutputFormat,
    values: bool,
    color: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(items),
        OutputFormat::Text if values => Ok(items.join("\n")),
        OutputFormat::Text => Ok(format!("{} {}", label("namastes:", color), items.join(", "))),
    }
}

/// Parsed directory types, one per line in text form
///
/// # Errors
/// Returns `serde_json::Error` if JSON serialization fails.
pub fn type_list(
    types: &BTreeMap<String, DirectoryType>,
    format: OutputFormat,
    values: bool,
    color: bool,
) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return serde_json::to_string(types);
    }

    let lines: Vec<String> = types
        .values()
        .map(|record| {
            if values {
                return record.to_string();
            }
            let name = label(&record.name, color);
            match record.version() {
                Some(version) => format!("namaste - directory type {name} - version {version}"),
                None => format!("namaste - directory type {name}"),
            }
        })
        .collect();
    Ok(lines.join("\n"))
}
