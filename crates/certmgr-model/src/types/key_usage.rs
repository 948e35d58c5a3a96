//! Key Usage and Extended Key Usage extension records

use crate::enums::{ExtendedKeyUsageName, KeyUsageName};
use crate::meta::{self, FieldMeta, Schema, ValueType, WireModel};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static KEY_USAGE_SCHEMA: Schema = Schema {
    type_name: "KeyUsage",
    fields: &[FieldMeta::payload("name", "Name", ValueType::Enum)],
};

pub(crate) static EXTENDED_KEY_USAGE_SCHEMA: Schema = Schema {
    type_name: "ExtendedKeyUsage",
    fields: &[
        FieldMeta::payload("name", "Name", ValueType::Enum),
        FieldMeta::payload("oid", "OID", ValueType::String),
    ],
};

/// One value of the X.509 Key Usage extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyUsage {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<KeyUsageName>,
}

impl KeyUsage {
    /// Start building a `KeyUsage`.
    pub fn builder() -> KeyUsageBuilder {
        KeyUsageBuilder::default()
    }

    /// The extension value.
    pub fn name(&self) -> Option<&KeyUsageName> {
        self.name.as_ref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> KeyUsageBuilder {
        KeyUsageBuilder {
            name: self.name.clone(),
        }
    }
}

impl WireModel for KeyUsage {
    fn schema() -> &'static Schema {
        &KEY_USAGE_SCHEMA
    }
}

impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`KeyUsage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyUsageBuilder {
    name: Option<KeyUsageName>,
}

impl KeyUsageBuilder {
    /// Set the extension value.
    pub fn name(mut self, input: impl Into<KeyUsageName>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Set or clear the extension value.
    pub fn set_name(mut self, input: Option<KeyUsageName>) -> Self {
        self.name = input;
        self
    }

    /// Snapshot the current state into a [`KeyUsage`].
    pub fn build(self) -> KeyUsage {
        KeyUsage { name: self.name }
    }
}

impl From<KeyUsageBuilder> for KeyUsage {
    fn from(builder: KeyUsageBuilder) -> Self {
        builder.build()
    }
}

/// One value of the X.509 Extended Key Usage extension, with its OID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtendedKeyUsage {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<ExtendedKeyUsageName>,
    #[serde(rename = "OID", skip_serializing_if = "Option::is_none")]
    oid: Option<String>,
}

impl ExtendedKeyUsage {
    /// Start building an `ExtendedKeyUsage`.
    pub fn builder() -> ExtendedKeyUsageBuilder {
        ExtendedKeyUsageBuilder::default()
    }

    /// The extension value.
    pub fn name(&self) -> Option<&ExtendedKeyUsageName> {
        self.name.as_ref()
    }

    /// The object identifier, dotted-decimal.
    pub fn oid(&self) -> Option<&str> {
        self.oid.as_deref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ExtendedKeyUsageBuilder {
        ExtendedKeyUsageBuilder {
            name: self.name.clone(),
            oid: self.oid.clone(),
        }
    }
}

impl WireModel for ExtendedKeyUsage {
    fn schema() -> &'static Schema {
        &EXTENDED_KEY_USAGE_SCHEMA
    }
}

impl fmt::Display for ExtendedKeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ExtendedKeyUsage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendedKeyUsageBuilder {
    name: Option<ExtendedKeyUsageName>,
    oid: Option<String>,
}

impl ExtendedKeyUsageBuilder {
    /// Set the extension value.
    pub fn name(mut self, input: impl Into<ExtendedKeyUsageName>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Set or clear the extension value.
    pub fn set_name(mut self, input: Option<ExtendedKeyUsageName>) -> Self {
        self.name = input;
        self
    }

    /// Set the object identifier.
    pub fn oid(mut self, input: impl Into<String>) -> Self {
        self.oid = Some(input.into());
        self
    }

    /// Set or clear the object identifier.
    pub fn set_oid(mut self, input: Option<String>) -> Self {
        self.oid = input;
        self
    }

    /// Snapshot the current state into an [`ExtendedKeyUsage`].
    pub fn build(self) -> ExtendedKeyUsage {
        ExtendedKeyUsage {
            name: self.name,
            oid: self.oid,
        }
    }
}

impl From<ExtendedKeyUsageBuilder> for ExtendedKeyUsage {
    fn from(builder: ExtendedKeyUsageBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_usage_name_is_carried() {
        let usage = KeyUsage::builder().name("QUANTUM_SIGNATURE").build();
        assert_eq!(
            usage.name(),
            Some(&KeyUsageName::Other("QUANTUM_SIGNATURE".to_string()))
        );
        assert_eq!(usage.name().unwrap().as_str(), "QUANTUM_SIGNATURE");
    }

    #[test]
    fn test_extended_key_usage_round_trip() {
        let usage = ExtendedKeyUsage::builder()
            .name(ExtendedKeyUsageName::CodeSigning)
            .oid("1.3.6.1.5.5.7.3.3")
            .build();
        assert_eq!(usage.to_builder().build(), usage);
        assert_eq!(usage.oid(), Some("1.3.6.1.5.5.7.3.3"));
    }
}
