//! Config command - read and change stored defaults

use crate::cli::ConfigCommands;
use crate::config::NamasteConfig;
use crate::NamasteError;
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, NamasteError>;

/// Execute a config subcommand against the file at `path`
///
/// # Errors
///
/// Returns `NamasteError` if the setting is malformed, the key is unknown,
/// the value does not parse, or the configuration cannot be saved.
pub fn execute<W: Write>(
    mut config: NamasteConfig,
    path: &Path,
    command: &ConfigCommands,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                NamasteError::InvalidInput("Invalid format. Use: namaste config set key=value".into())
            })?;
            let key = key.trim();
            let value = value.trim();

            config.set_value(key, value)?;
            config.save_to(path)?;
            if !quiet {
                writeln!(out, "Set {key} = {}", config.get_value(key)?)?;
            }
        }
        ConfigCommands::Get { key } => {
            writeln!(out, "{}", config.get_value(key)?)?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use tempfile::TempDir;

    fn run(config: NamasteConfig, path: &Path, command: ConfigCommands) -> Result<String> {
        let mut out = Vec::new();
        execute(config, path, &command, false, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_set_saves_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let out = run(
            NamasteConfig::default(),
            &path,
            ConfigCommands::Set { setting: "format = json".into() },
        )
        .unwrap();
        assert_eq!(out, "Set format = json\n");

        let saved = NamasteConfig::load_from(Some(&path)).unwrap();
        assert_eq!(saved.format, OutputFormat::Json);
    }

    #[test]
    fn test_set_requires_equals() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let result = run(
            NamasteConfig::default(),
            &path,
            ConfigCommands::Set { setting: "quiet".into() },
        );
        assert!(matches!(result, Err(NamasteError::InvalidInput(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_set_unknown_key_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let result = run(
            NamasteConfig::default(),
            &path,
            ConfigCommands::Set { setting: "colour=on".into() },
        );
        assert!(matches!(result, Err(NamasteError::ConfigError(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_get_and_path() {
        let config = NamasteConfig {
            quiet: true,
            ..NamasteConfig::default()
        };
        let path = Path::new("/tmp/namaste/config.toml");
        assert_eq!(
            run(config.clone(), path, ConfigCommands::Get { key: "quiet".into() }).unwrap(),
            "true\n"
        );
        assert_eq!(
            run(config, path, ConfigCommands::Path).unwrap(),
            "/tmp/namaste/config.toml\n"
        );
    }
}
