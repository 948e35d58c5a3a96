//! Listing filters record

use crate::enums::{ExtendedKeyUsageName, KeyAlgorithm, KeyUsageName};
use crate::meta::{self, FieldMeta, Schema, ValueType, WireModel};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static SCHEMA: Schema = Schema {
    type_name: "Filters",
    fields: &[
        FieldMeta::payload("extended_key_usage", "ExtendedKeyUsage", ValueType::List),
        FieldMeta::payload("key_usage", "KeyUsage", ValueType::List),
        FieldMeta::payload("key_types", "KeyTypes", ValueType::List),
    ],
};

/// Narrowing criteria for certificate listings. All lists are three-state:
/// never set, explicitly empty, or populated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filters {
    #[serde(rename = "ExtendedKeyUsage", skip_serializing_if = "Option::is_none")]
    extended_key_usage: Option<Vec<ExtendedKeyUsageName>>,
    #[serde(rename = "KeyUsage", skip_serializing_if = "Option::is_none")]
    key_usage: Option<Vec<KeyUsageName>>,
    #[serde(rename = "KeyTypes", skip_serializing_if = "Option::is_none")]
    key_types: Option<Vec<KeyAlgorithm>>,
}

impl Filters {
    /// Start building a `Filters`.
    pub fn builder() -> FiltersBuilder {
        FiltersBuilder::default()
    }

    /// Extended-key-usage values to match. Empty slice when never set.
    pub fn extended_key_usage(&self) -> &[ExtendedKeyUsageName] {
        self.extended_key_usage.as_deref().unwrap_or_default()
    }

    /// True when the extended-key-usage filter was explicitly provided.
    pub fn has_extended_key_usage(&self) -> bool {
        self.extended_key_usage.is_some()
    }

    /// Key-usage values to match. Empty slice when never set.
    pub fn key_usage(&self) -> &[KeyUsageName] {
        self.key_usage.as_deref().unwrap_or_default()
    }

    /// True when the key-usage filter was explicitly provided.
    pub fn has_key_usage(&self) -> bool {
        self.key_usage.is_some()
    }

    /// Key algorithms to match. Empty slice when never set.
    pub fn key_types(&self) -> &[KeyAlgorithm] {
        self.key_types.as_deref().unwrap_or_default()
    }

    /// True when the key-algorithm filter was explicitly provided.
    pub fn has_key_types(&self) -> bool {
        self.key_types.is_some()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> FiltersBuilder {
        FiltersBuilder {
            extended_key_usage: self.extended_key_usage.clone(),
            key_usage: self.key_usage.clone(),
            key_types: self.key_types.clone(),
        }
    }
}

impl WireModel for Filters {
    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`Filters`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiltersBuilder {
    extended_key_usage: Option<Vec<ExtendedKeyUsageName>>,
    key_usage: Option<Vec<KeyUsageName>>,
    key_types: Option<Vec<KeyAlgorithm>>,
}

impl FiltersBuilder {
    /// Append one extended-key-usage value, marking the list as set.
    pub fn extended_key_usage(mut self, input: impl Into<ExtendedKeyUsageName>) -> Self {
        self.extended_key_usage
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Set or clear the extended-key-usage filter.
    pub fn set_extended_key_usage(mut self, input: Option<Vec<ExtendedKeyUsageName>>) -> Self {
        self.extended_key_usage = input;
        self
    }

    /// Append one key-usage value, marking the list as set.
    pub fn key_usage(mut self, input: impl Into<KeyUsageName>) -> Self {
        self.key_usage.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Set or clear the key-usage filter.
    pub fn set_key_usage(mut self, input: Option<Vec<KeyUsageName>>) -> Self {
        self.key_usage = input;
        self
    }

    /// Append one key algorithm, marking the list as set.
    pub fn key_types(mut self, input: impl Into<KeyAlgorithm>) -> Self {
        self.key_types.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Set or clear the key-algorithm filter.
    pub fn set_key_types(mut self, input: Option<Vec<KeyAlgorithm>>) -> Self {
        self.key_types = input;
        self
    }

    /// Snapshot the current state into a [`Filters`].
    pub fn build(self) -> Filters {
        Filters {
            extended_key_usage: self.extended_key_usage,
            key_usage: self.key_usage,
            key_types: self.key_types,
        }
    }
}

impl From<FiltersBuilder> for Filters {
    fn from(builder: FiltersBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_list_stores_typed_values() {
        let filters = Filters::builder()
            .key_types("RSA_2048")
            .key_types(KeyAlgorithm::Ed25519)
            .build();
        assert_eq!(
            filters.key_types(),
            [KeyAlgorithm::Rsa2048, KeyAlgorithm::Ed25519]
        );
    }

    #[test]
    fn test_enum_list_serializes_as_wire_strings() {
        let filters = Filters::builder()
            .key_usage(KeyUsageName::DigitalSignature)
            .build();
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json, serde_json::json!({"KeyUsage": ["DIGITAL_SIGNATURE"]}));
    }

    #[test]
    fn test_explicit_empty_differs_from_unset() {
        let unset = Filters::builder().build();
        let empty = Filters::builder().set_key_usage(Some(vec![])).build();
        assert_ne!(unset, empty);
        assert!(!unset.has_key_usage());
        assert!(empty.has_key_usage());
    }
}
