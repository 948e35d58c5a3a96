//! Primitive wire scalar types shared by the model records
//!
//! Timestamps ride on `chrono` and binary payloads on [`Blob`], which
//! travels as standard base64 text on the wire.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire timestamp. All service timestamps are UTC.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Binary payload (DER certificates, private keys, passphrases).
///
/// Serializes to a base64 string; `Debug` prints only the byte length so a
/// dumped record never embeds raw key material.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Blob(Vec<u8>);

impl Blob {
    /// Wrap raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwrap into the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for Blob {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.0.len())
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map(Blob)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_base64_round_trip() {
        let blob = Blob::new(b"-----BEGIN CERTIFICATE-----".to_vec());
        let json = serde_json::to_string(&blob).unwrap();
        let back: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(back, blob);
    }

    #[test]
    fn test_blob_serializes_as_base64_text() {
        let blob = Blob::new(vec![0u8, 1, 2, 255]);
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, format!("\"{}\"", STANDARD.encode([0u8, 1, 2, 255])));
    }

    #[test]
    fn test_blob_debug_hides_content() {
        let blob = Blob::from("top secret");
        assert_eq!(format!("{:?}", blob), "Blob(10 bytes)");
    }

    #[test]
    fn test_blob_rejects_invalid_base64() {
        let result: Result<Blob, _> = serde_json::from_str("\"not base64!!\"");
        assert!(result.is_err());
    }
}
