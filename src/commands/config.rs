//! Config command - read and write configuration settings

use crate::{
    NovelhuntError, Result,
    cli::ConfigCommands,
    config::{NovelhuntConfig, SCALAR_KEYS},
};
use ::config::ConfigError;
use std::io::Write;
use std::path::Path;

/// Execute a config subcommand against the file at `path`
///
/// # Errors
/// Returns `NovelhuntError` if the key is unknown, the value does not parse,
/// or the configuration cannot be saved.
pub fn execute<W: Write>(
    mut config: NovelhuntConfig,
    command: &ConfigCommands,
    path: &Path,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let Some((key, value)) = setting.split_once('=') else {
                return Err(NovelhuntError::InvalidInput(
                    "Invalid format. Use: novelhunt config set key=value".into(),
                ));
            };
            let (key, value) = (key.trim(), value.trim());

            config.set_value(key, value).map_err(|e| unknown_key(key, e))?;
            config.save_to(path)?;
            log::info!("Updated {key} in {}", path.display());
            if !quiet {
                writeln!(out, "Set {key} = {}", config.get_value(key)?)?;
            }
        }
        ConfigCommands::Get { key } => {
            let value = config.get_value(key).map_err(|e| unknown_key(key, e))?;
            writeln!(out, "{value}")?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

fn unknown_key(key: &str, error: ConfigError) -> NovelhuntError {
    match error {
        ConfigError::NotFound(_) => NovelhuntError::InvalidInput(format!(
            "Unknown configuration key: '{key}'. Available keys: {}",
            SCALAR_KEYS.join(", ")
        )),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: NovelhuntConfig, command: &ConfigCommands, path: &Path) -> Result<String> {
        let mut out = Vec::new();
        execute(config, command, path, false, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_set_saves_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let command = ConfigCommands::Set {
            setting: "page_size = 24".to_string(),
        };

        let text = run(NovelhuntConfig::default(), &command, &path).unwrap();

        assert_eq!(text, "Set page_size = 24\n");
        let saved = NovelhuntConfig::load_from(&path).unwrap();
        assert_eq!(saved.page_size, 24);
    }

    #[test]
    fn test_get_value() {
        let dir = tempfile::tempdir().unwrap();
        let command = ConfigCommands::Get {
            key: "default_query".to_string(),
        };
        let text = run(NovelhuntConfig::default(), &command, dir.path()).unwrap();
        assert_eq!(text, "Science\n");
    }

    #[test]
    fn test_unknown_key_lists_available_keys() {
        let dir = tempfile::tempdir().unwrap();
        let command = ConfigCommands::Get {
            key: "colour".to_string(),
        };
        let Err(NovelhuntError::InvalidInput(message)) =
            run(NovelhuntConfig::default(), &command, dir.path())
        else {
            panic!("Expected InvalidInput");
        };
        assert!(message.contains("colour"));
        assert!(message.contains("fetch_policy"));
    }

    #[test]
    fn test_set_requires_key_value() {
        let dir = tempfile::tempdir().unwrap();
        let command = ConfigCommands::Set {
            setting: "page_size".to_string(),
        };
        let result = run(NovelhuntConfig::default(), &command, &dir.path().join("c.toml"));
        assert!(matches!(result, Err(NovelhuntError::InvalidInput(_))));
    }

    #[test]
    fn test_set_invalid_value_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let command = ConfigCommands::Set {
            setting: "page_size=0".to_string(),
        };
        let result = run(NovelhuntConfig::default(), &command, &path);
        assert!(matches!(result, Err(NovelhuntError::ConfigError(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_path() {
        let path = Path::new("/tmp/novelhunt/config.toml");
        let text = run(NovelhuntConfig::default(), &ConfigCommands::Path, path).unwrap();
        assert_eq!(text, "/tmp/novelhunt/config.toml\n");
    }
}
