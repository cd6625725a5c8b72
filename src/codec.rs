//! Tag kinds and the `<prefix>=<escaped-value>` filename format
//!
//! Each Namaste field is stored under a short prefix: the five standard fields
//! use single digits, free-form notes use `note`, and any other kind name is
//! used verbatim so ad-hoc kinds can be recorded without registration.
//!
//! | Kind    | Prefix |
//! |---------|--------|
//! | `type`  | `0`    |
//! | `who`   | `1`    |
//! | `what`  | `2`    |
//! | `when`  | `3`    |
//! | `where` | `4`    |
//! | `note`  | `note` |

use crate::escape;
use serde::{Serialize, Serializer};
use std::fmt;

/// Separator between the prefix and the encoded value in a tag filename
pub const SEPARATOR: char = '=';

/// Metadata category of a tag file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Directory type, e.g. `bagit_0.1`
    Type,
    /// Creator
    Who,
    /// Title or description
    What,
    /// Date
    When,
    /// Location
    Where,
    /// Free-form note
    Note,
    /// Ad-hoc kind, its name is used verbatim as the prefix
    Custom(String),
}

/// The registered kinds, in their canonical listing order
pub static STANDARD_KINDS: [TagKind; 6] = [
    TagKind::Type,
    TagKind::Who,
    TagKind::What,
    TagKind::When,
    TagKind::Where,
    TagKind::Note,
];

impl TagKind {
    /// Look up a kind by its human name (case-insensitive)
    ///
    /// Unrecognized names become [`TagKind::Custom`] and keep their original
    /// spelling.
    ///
    /// # Examples
    /// ```
    /// use namaste::codec::TagKind;
    ///
    /// assert_eq!(TagKind::from_name("TYPE"), TagKind::Type);
    /// assert_eq!(TagKind::from_name("Rights").prefix(), "Rights");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "type" => Self::Type,
            "who" => Self::Who,
            "what" => Self::What,
            "when" => Self::When,
            "where" => Self::Where,
            "note" => Self::Note,
            _ => Self::Custom(name.to_string()),
        }
    }

    /// The prefix written in front of `=` in the filename
    #[must_use]
    pub fn prefix(&self) -> &str {
        match self {
            Self::Type => "0",
            Self::Who => "1",
            Self::What => "2",
            Self::When => "3",
            Self::Where => "4",
            Self::Note => "note",
            Self::Custom(prefix) => prefix,
        }
    }

    /// Human name of the kind
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Type => "type",
            Self::Who => "who",
            Self::What => "what",
            Self::When => "when",
            Self::Where => "where",
            Self::Note => "note",
            Self::Custom(name) => name,
        }
    }

    /// Whether this is one of the registered kinds
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TagKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Build the tag filename for a kind name and a raw value
///
/// # Examples
/// ```
/// use namaste::codec::compose_filename;
///
/// assert_eq!(compose_filename("type", "bagit_0.1"), "0=bagit_0.1");
/// assert_eq!(compose_filename("who", "Twain, Mark"), "1=Twain,^20Mark");
/// ```
#[must_use]
pub fn compose_filename(kind_name: &str, value: &str) -> String {
    compose(&TagKind::from_name(kind_name), value)
}

/// Build the tag filename for an already resolved kind
#[must_use]
pub fn compose(kind: &TagKind, value: &str) -> String {
    format!("{}{SEPARATOR}{}", kind.prefix(), escape::encode(value))
}

/// Recover the raw value from a tag filename
///
/// The prefix is stripped only when it belongs to one of the registered kinds
/// (`0`..`4` or `note`). Filenames with any other prefix are decoded whole,
/// since an ad-hoc prefix cannot be told apart from value text.
///
/// # Examples
/// ```
/// use namaste::codec::parse_value;
///
/// assert_eq!(parse_value("1=Twain,^20Mark"), "Twain, Mark");
/// assert_eq!(parse_value("note=see^20README"), "see README");
/// assert_eq!(parse_value("rights=CC0"), "rights=CC0");
/// ```
#[must_use]
pub fn parse_value(filename: &str) -> String {
    escape::decode(strip_standard_prefix(filename).unwrap_or(filename))
}

/// Strip a registered `prefix=` from a filename, if present
#[must_use]
pub fn strip_standard_prefix(filename: &str) -> Option<&str> {
    STANDARD_KINDS.iter().find_map(|kind| {
        filename
            .strip_prefix(kind.prefix())
            .and_then(|rest| rest.strip_prefix(SEPARATOR))
    })
}
