//! Logging setup for the CLI
//!
//! Structured logging through `tracing`, filtered by the `CERTMGR_LOG`
//! environment variable when set, otherwise by the configured level
//! adjusted for `--verbose`/`--quiet`.

use crate::config::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Returns an error string when a subscriber is already installed, which
/// callers may treat as non-fatal (tests install their own).
pub fn init(settings: &LoggingSettings, verbosity: u8) -> Result<(), String> {
    let level = effective_level(&settings.level, verbosity);
    let filter = EnvFilter::try_from_env("CERTMGR_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = if settings.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    result.map_err(|e| e.to_string())
}

/// Map the configured level and the -v/-q flags onto a filter directive.
fn effective_level(configured: &str, verbosity: u8) -> String {
    match verbosity {
        0 => "error".to_string(),
        1 => configured.to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level_scales_with_verbosity() {
        assert_eq!(effective_level("info", 0), "error");
        assert_eq!(effective_level("info", 1), "info");
        assert_eq!(effective_level("warn", 1), "warn");
        assert_eq!(effective_level("info", 2), "debug");
        assert_eq!(effective_level("info", 5), "trace");
    }
}
