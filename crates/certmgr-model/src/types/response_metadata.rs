//! Shared response metadata
//!
//! Every response record embeds this struct by value instead of
//! inheriting common fields through a type hierarchy. Today it carries
//! the request id the service stamps on each reply; an empty instance
//! stays off the wire entirely.

use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static SCHEMA: Schema = Schema {
    type_name: "ResponseMetadata",
    fields: &[FieldMeta::payload("request_id", "RequestId", ValueType::String)
        .located(WireLocation::Header)],
};

/// Common fields shared by every response record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ResponseMetadata {
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
}

impl ResponseMetadata {
    /// Start building a `ResponseMetadata`.
    pub fn builder() -> ResponseMetadataBuilder {
        ResponseMetadataBuilder::default()
    }

    /// The request id the service stamped on the reply.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// True when no metadata was recorded. Used to keep empty metadata off
    /// the wire.
    pub fn is_empty(&self) -> bool {
        self.request_id.is_none()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ResponseMetadataBuilder {
        ResponseMetadataBuilder {
            request_id: self.request_id.clone(),
        }
    }
}

impl WireModel for ResponseMetadata {
    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl fmt::Display for ResponseMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ResponseMetadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadataBuilder {
    request_id: Option<String>,
}

impl ResponseMetadataBuilder {
    /// Set the request id.
    pub fn request_id(mut self, input: impl Into<String>) -> Self {
        self.request_id = Some(input.into());
        self
    }

    /// Set or clear the request id.
    pub fn set_request_id(mut self, input: Option<String>) -> Self {
        self.request_id = input;
        self
    }

    /// Snapshot the current state into a [`ResponseMetadata`].
    pub fn build(self) -> ResponseMetadata {
        ResponseMetadata {
            request_id: self.request_id,
        }
    }
}

impl From<ResponseMetadataBuilder> for ResponseMetadata {
    fn from(builder: ResponseMetadataBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metadata_is_detected() {
        assert!(ResponseMetadata::default().is_empty());
        assert!(!ResponseMetadata::builder().request_id("req-1").build().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let metadata = ResponseMetadata::builder().request_id("req-1").build();
        assert_eq!(metadata.to_builder().build(), metadata);
        assert_eq!(metadata.request_id(), Some("req-1"));
    }
}
