//! Configuration module for namaste
//!
//! Holds defaults for the global command-line options. Values are read from
//! `config.toml` in the user's config directory (`~/.config/namaste/` on
//! Linux) and then from `NAMASTE_*` environment variables. Command-line flags
//! override both. A missing file simply means defaults; it is only created
//! by `namaste config set`.

use crate::output::OutputFormat;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `config get` and `config set`
pub const CONFIG_KEYS: [&str; 3] = ["directory", "format", "quiet"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct NamasteConfig {
    /// Directory to operate on when `-d` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl NamasteConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("namaste").join("config.toml"))
    }

    /// Load configuration from the default location plus the environment
    ///
    /// Without a config directory only the environment is consulted.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) => Self::load_from(Some(&path)),
            Err(_) => Self::load_from(None),
        }
    }

    /// Load configuration from an optional file plus the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        builder
            .add_source(Environment::with_prefix("NAMASTE"))
            .build()?
            .try_deserialize()
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set a configuration value from its string form
    ///
    /// An empty value clears `directory`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or an unparseable value.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "directory" => {
                self.directory = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "format" => {
                self.format = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for format: '{value}'. Use 'text' or 'json'"
                    ))
                })?;
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Get a configuration value in its string form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "directory" => Ok(self
                .directory
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_default()),
            "format" => Ok(self.format.to_string()),
            "quiet" => Ok(self.quiet.to_string()),
            _ => Err(unknown_key(key)),
        }
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}
