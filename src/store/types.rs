//! Directory type records
//!
//! A type tag value such as `bagit_0.1` is read as `<name>_<major>.<minor>`.
//! Only the first `_` and the first `.` after it are significant:
//!
//! | Value            | name     | major  | minor   |
//! |------------------|----------|--------|---------|
//! | `bagit_0.1`      | `bagit`  | `0`    | `1`     |
//! | `dflat_34.22`    | `dflat`  | `34`   | `22`    |
//! | `ePub_3`         | `ePub`   | `3`    | absent  |
//! | `plain`          | `plain`  | absent | absent  |
//! | `a_b_1.2.3`      | `a`      | `b_1`  | `2.3`   |

use serde::{Deserialize, Serialize};
use std::fmt;

const NAME_SEPARATOR: char = '_';
const VERSION_SEPARATOR: char = '.';

/// Parsed directory type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
}

impl DirectoryType {
    /// Parse a raw type value
    ///
    /// A version without `.` is a major version only.
    ///
    /// # Examples
    /// ```
    /// use namaste::store::DirectoryType;
    ///
    /// let t = DirectoryType::parse("bagit_0.1");
    /// assert_eq!(t.name, "bagit");
    /// assert_eq!(t.major.as_deref(), Some("0"));
    /// assert_eq!(t.minor.as_deref(), Some("1"));
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let Some((name, version)) = value.split_once(NAME_SEPARATOR) else {
            return Self {
                name: value.to_string(),
                major: None,
                minor: None,
            };
        };

        let (major, minor) = match version.split_once(VERSION_SEPARATOR) {
            Some((major, minor)) => (major.to_string(), Some(minor.to_string())),
            None => (version.to_string(), None),
        };

        Self {
            name: name.to_string(),
            major: Some(major),
            minor,
        }
    }

    /// `major[.minor]`, if a version is present
    #[must_use]
    pub fn version(&self) -> Option<String> {
        let major = self.major.as_deref()?;
        Some(match self.minor.as_deref() {
            Some(minor) => format!("{major}{VERSION_SEPARATOR}{minor}"),
            None => major.to_string(),
        })
    }
}

impl fmt::Display for DirectoryType {
    /// Formats back into the `<name>_<major>.<minor>` form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version() {
            Some(version) => write!(f, "{}{NAME_SEPARATOR}{version}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
