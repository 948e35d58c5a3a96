//! Error types and handling for the CLI

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error from the fixtures infrastructure
    #[error("Fixture error: {0}")]
    Fixture(#[from] certmgr_fixtures::FixtureError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Document kind missing and not inferable
    #[error(
        "Document {} carries no \"kind\" field; pass --kind to name the record type",
        path.display()
    )]
    KindMissing { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation found errors
    #[error("Validation failed: {issues} issue(s) found")]
    ValidationFailed { issues: usize },
}

impl Error {
    /// Exit code reported to the shell.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ValidationFailed { .. } => 1,
            _ => 2,
        }
    }
}

/// Format an error for terminal display.
pub fn format_error(error: &Error, colorize: bool) -> String {
    use colored::Colorize;
    if colorize {
        format!("{} {}", "error:".red().bold(), error)
    } else {
        format!("error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let validation = Error::ValidationFailed { issues: 3 };
        assert_eq!(validation.exit_code(), 1);

        let config = Error::Config("bad".to_string());
        assert_eq!(config.exit_code(), 2);
    }

    #[test]
    fn test_format_error_plain() {
        let err = Error::Config("missing file".to_string());
        assert_eq!(
            format_error(&err, false),
            "error: Configuration error: missing file"
        );
    }
}
