//! Tag record
//!
//! A key/value label attached to a certificate. The smallest record in the
//! model, and the reference for the record/builder shape every other type
//! follows: private optional fields, builder-only construction,
//! `to_builder()` reseeding, and metadata-driven `Display`.
//!
//! Copyright (c) 2025 Certmgr Team
//! Licensed under the Apache-2.0 license

use crate::meta::{self, FieldMeta, Schema, ValueType, WireModel};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static SCHEMA: Schema = Schema {
    type_name: "Tag",
    fields: &[
        FieldMeta::payload("key", "Key", ValueType::String),
        FieldMeta::payload("value", "Value", ValueType::String),
    ],
};

/// A key/value label attached to a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "Key", skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl Tag {
    /// Start building a `Tag`.
    pub fn builder() -> TagBuilder {
        TagBuilder::default()
    }

    /// The tag key.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The tag value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> TagBuilder {
        TagBuilder {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

impl WireModel for Tag {
    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`Tag`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBuilder {
    key: Option<String>,
    value: Option<String>,
}

impl TagBuilder {
    /// Set the tag key.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Set or clear the tag key.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Set the tag value.
    pub fn value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }

    /// Set or clear the tag value.
    pub fn set_value(mut self, input: Option<String>) -> Self {
        self.value = input;
        self
    }

    /// Snapshot the current state into a [`Tag`]. Never fails.
    pub fn build(self) -> Tag {
        Tag {
            key: self.key,
            value: self.value,
        }
    }
}

impl From<TagBuilder> for Tag {
    fn from(builder: TagBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_round_trip() {
        let tag = Tag::builder().key("Env").value("prod").build();
        assert_eq!(tag.key(), Some("Env"));
        assert_eq!(tag.value(), Some("prod"));
        assert_eq!(tag.to_builder().build(), tag);
    }

    #[test]
    fn test_display_uses_wire_names() {
        let tag = Tag::builder().key("Env").value("prod").build();
        let rendered = tag.to_string();
        assert!(rendered.contains("Key=Env"));
        assert!(rendered.contains("Value=prod"));
    }

    #[test]
    fn test_setter_order_does_not_matter() {
        let a = Tag::builder().key("Env").value("prod").build();
        let b = Tag::builder().value("prod").key("Env").build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_set_none_clears() {
        let tag = Tag::builder().key("Env").set_key(None).build();
        assert_eq!(tag.key(), None);
    }

    #[test]
    fn test_wire_serialization() {
        let tag = Tag::builder().key("Env").value("prod").build();
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json, serde_json::json!({"Key": "Env", "Value": "prod"}));
    }
}
