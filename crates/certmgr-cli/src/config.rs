//! Configuration management for the CLI
//!
//! Configuration is merged from default values, an optional YAML/JSON
//! file, and environment variables, in that order.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingSettings,

    /// Output settings
    pub output: OutputSettings,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,

    /// Emit JSON log lines instead of the compact format
    pub json: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Colorize terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Load configuration, optionally from an explicit file path.
    ///
    /// A missing explicit path is an error; with no path given the
    /// defaults are used. `CERTMGR_LOG_LEVEL` overrides the file value.
    pub fn load_with_file(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::FileNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        if let Ok(level) = std::env::var("CERTMGR_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&raw)?),
            Some("json") => Ok(serde_json::from_str(&raw)?),
            other => Err(Error::Config(format!(
                "unsupported config extension: {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.output.color);
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "logging:\n  level: debug\n  json: true").unwrap();

        let config = Config::load_with_file(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        // Unspecified sections keep their defaults
        assert!(config.output.color);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Config::load_with_file(Some(Path::new("/nonexistent/certmgr.yaml")));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }
}
