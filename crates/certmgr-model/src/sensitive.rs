//! Redaction wrapper for sensitive field values
//!
//! Private-key material and export passphrases must never reach a log line
//! or a formatted record. `Sensitive<T>` stores the real value and exposes
//! it explicitly through [`Sensitive::reveal`]; every formatting path
//! (`Debug`, `Display`) prints a fixed marker instead.
//!
//! Copyright (c) 2025 Certmgr Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker rendered in place of any sensitive value.
pub const REDACTED: &str = "*** sensitive value redacted ***";

/// Transparent wrapper marking a value as sensitive.
///
/// Serialization is transparent: the wire sees the real value, because the
/// marshaller still has to send it. Only the human-facing formatting paths
/// are redacted.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a value.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Access the real value.
    ///
    /// The name is deliberately loud; call sites that reveal secrets should
    /// read as such.
    pub fn reveal(&self) -> &T {
        &self.0
    }

    /// Unwrap into the real value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts() {
        let secret = Sensitive::new("secret123".to_string());
        let rendered = format!("{:?}", secret);
        assert_eq!(rendered, REDACTED);
        assert!(!rendered.contains("secret123"));
    }

    #[test]
    fn test_display_redacts() {
        let secret = Sensitive::new("secret123".to_string());
        assert_eq!(secret.to_string(), REDACTED);
    }

    #[test]
    fn test_reveal_returns_real_value() {
        let secret = Sensitive::new("secret123".to_string());
        assert_eq!(secret.reveal(), "secret123");
        assert_eq!(secret.into_inner(), "secret123");
    }

    #[test]
    fn test_serde_is_transparent() {
        let secret = Sensitive::new("secret123".to_string());
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"secret123\"");

        let back: Sensitive<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, secret);
    }
}
