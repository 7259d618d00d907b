//! Configuration file loading.
//!
//! Output settings are read from `travail.toml` in the current directory,
//! or from a file named on the command line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Squares joined by the separator.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TravailConfig {
    /// Text placed between squares. Defaults to a single space.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Append the move count to text output.
    #[serde(default)]
    pub show_move_count: bool,
    /// Output format. Defaults to text.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_separator() -> String {
    " ".to_string()
}

impl Default for TravailConfig {
    fn default() -> Self {
        TravailConfig {
            separator: default_separator(),
            show_move_count: false,
            format: OutputFormat::default(),
        }
    }
}

impl TravailConfig {
    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// A missing file is not an error; the defaults are returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the configuration from `path`, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Returns the default configuration file path, `travail.toml` in the
    /// working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("travail.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
separator = " -> "
show_move_count = true
format = "json"
"#;

        let config: TravailConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.separator, " -> ");
        assert!(config.show_move_count);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: TravailConfig = toml::from_str("").unwrap();
        assert_eq!(config, TravailConfig::default());
        assert_eq!(config.separator, " ");
        assert!(!config.show_move_count);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result: Result<TravailConfig, _> = toml::from_str(r#"format = "yaml""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("travail.toml");
        std::fs::write(&path, "separator = \",\"\n").unwrap();

        let config = TravailConfig::load_from(&path).unwrap();
        assert_eq!(config.separator, ",");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = TravailConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("travail.toml");
        std::fs::write(&path, "show_move_count = \"maybe\"\n").unwrap();

        let err = TravailConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn test_config_path() {
        assert_eq!(TravailConfig::config_path(), PathBuf::from("travail.toml"));
    }
}
