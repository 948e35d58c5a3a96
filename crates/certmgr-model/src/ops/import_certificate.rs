//! ImportCertificate operation records
//!
//! The private key travels as a sensitive blob: serialized for the wire,
//! redacted in every formatted rendering.
//!
//! Copyright (c) 2025 Certmgr Team
//! Licensed under the Apache-2.0 license

use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use crate::primitives::Blob;
use crate::sensitive::Sensitive;
use crate::types::response_metadata::{ResponseMetadata, SCHEMA as RESPONSE_METADATA_SCHEMA};
use crate::types::tag::{Tag, TagBuilder, SCHEMA as TAG_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static INPUT_SCHEMA: Schema = Schema {
    type_name: "ImportCertificateInput",
    fields: &[
        FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String),
        FieldMeta::payload("certificate", "Certificate", ValueType::Blob),
        FieldMeta::payload("private_key", "PrivateKey", ValueType::Blob).sensitive(),
        FieldMeta::payload("certificate_chain", "CertificateChain", ValueType::Blob),
        FieldMeta::payload("tags", "Tags", ValueType::List).nested(&TAG_SCHEMA),
    ],
};

pub(crate) static OUTPUT_SCHEMA: Schema = Schema {
    type_name: "ImportCertificateOutput",
    fields: &[
        FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String),
        FieldMeta::payload("response_metadata", "ResponseMetadata", ValueType::Structure)
            .located(WireLocation::Header)
            .nested(&RESPONSE_METADATA_SCHEMA),
    ],
};

/// Input importing an externally issued certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ImportCertificateInput {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
    #[serde(rename = "Certificate", skip_serializing_if = "Option::is_none")]
    certificate: Option<Blob>,
    #[serde(rename = "PrivateKey", skip_serializing_if = "Option::is_none")]
    private_key: Option<Sensitive<Blob>>,
    #[serde(rename = "CertificateChain", skip_serializing_if = "Option::is_none")]
    certificate_chain: Option<Blob>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl ImportCertificateInput {
    /// Start building an `ImportCertificateInput`.
    pub fn builder() -> ImportCertificateInputBuilder {
        ImportCertificateInputBuilder::default()
    }

    /// ARN of an existing certificate to reimport over, when present.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// The certificate to import.
    pub fn certificate(&self) -> Option<&Blob> {
        self.certificate.as_ref()
    }

    /// The certificate's private key. Redacted in every rendering.
    pub fn private_key(&self) -> Option<&Sensitive<Blob>> {
        self.private_key.as_ref()
    }

    /// The intermediate chain.
    pub fn certificate_chain(&self) -> Option<&Blob> {
        self.certificate_chain.as_ref()
    }

    /// Tags to attach on import. Empty slice when never set.
    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// True when the tag list was explicitly provided.
    pub fn has_tags(&self) -> bool {
        self.tags.is_some()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ImportCertificateInputBuilder {
        ImportCertificateInputBuilder {
            certificate_arn: self.certificate_arn.clone(),
            certificate: self.certificate.clone(),
            private_key: self.private_key.clone(),
            certificate_chain: self.certificate_chain.clone(),
            tags: self.tags.clone(),
        }
    }
}

impl WireModel for ImportCertificateInput {
    fn schema() -> &'static Schema {
        &INPUT_SCHEMA
    }
}

impl fmt::Display for ImportCertificateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ImportCertificateInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCertificateInputBuilder {
    certificate_arn: Option<String>,
    certificate: Option<Blob>,
    private_key: Option<Sensitive<Blob>>,
    certificate_chain: Option<Blob>,
    tags: Option<Vec<Tag>>,
}

impl ImportCertificateInputBuilder {
    /// Set the ARN to reimport over.
    pub fn certificate_arn(mut self, input: impl Into<String>) -> Self {
        self.certificate_arn = Some(input.into());
        self
    }

    /// Set or clear the ARN to reimport over.
    pub fn set_certificate_arn(mut self, input: Option<String>) -> Self {
        self.certificate_arn = input;
        self
    }

    /// Set the certificate to import.
    pub fn certificate(mut self, input: impl Into<Blob>) -> Self {
        self.certificate = Some(input.into());
        self
    }

    /// Set or clear the certificate to import.
    pub fn set_certificate(mut self, input: Option<Blob>) -> Self {
        self.certificate = input;
        self
    }

    /// Set the private key. The value is wrapped as sensitive.
    pub fn private_key(mut self, input: impl Into<Blob>) -> Self {
        self.private_key = Some(Sensitive::new(input.into()));
        self
    }

    /// Set or clear the private key.
    pub fn set_private_key(mut self, input: Option<Sensitive<Blob>>) -> Self {
        self.private_key = input;
        self
    }

    /// Set the intermediate chain.
    pub fn certificate_chain(mut self, input: impl Into<Blob>) -> Self {
        self.certificate_chain = Some(input.into());
        self
    }

    /// Set or clear the intermediate chain.
    pub fn set_certificate_chain(mut self, input: Option<Blob>) -> Self {
        self.certificate_chain = input;
        self
    }

    /// Append one tag, marking the list as set.
    pub fn tags(mut self, input: impl Into<Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Build one tag in place through a fresh builder and append it.
    pub fn tags_with(self, f: impl FnOnce(TagBuilder) -> TagBuilder) -> Self {
        let tag = f(Tag::builder()).build();
        self.tags(tag)
    }

    /// Set or clear the tag list.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Snapshot the current state into an [`ImportCertificateInput`].
    pub fn build(self) -> ImportCertificateInput {
        ImportCertificateInput {
            certificate_arn: self.certificate_arn,
            certificate: self.certificate,
            private_key: self.private_key,
            certificate_chain: self.certificate_chain,
            tags: self.tags,
        }
    }
}

impl From<ImportCertificateInputBuilder> for ImportCertificateInput {
    fn from(builder: ImportCertificateInputBuilder) -> Self {
        builder.build()
    }
}

/// Output of a successful import.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ImportCertificateOutput {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "ResponseMetadata::is_empty"
    )]
    response_metadata: ResponseMetadata,
}

impl ImportCertificateOutput {
    /// Start building an `ImportCertificateOutput`.
    pub fn builder() -> ImportCertificateOutputBuilder {
        ImportCertificateOutputBuilder::default()
    }

    /// ARN of the imported certificate.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// Shared response metadata.
    pub fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ImportCertificateOutputBuilder {
        ImportCertificateOutputBuilder {
            certificate_arn: self.certificate_arn.clone(),
            response_metadata: self.response_metadata.clone(),
        }
    }
}

impl WireModel for ImportCertificateOutput {
    fn schema() -> &'static Schema {
        &OUTPUT_SCHEMA
    }
}

impl fmt::Display for ImportCertificateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ImportCertificateOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCertificateOutputBuilder {
    certificate_arn: Option<String>,
    response_metadata: ResponseMetadata,
}

impl ImportCertificateOutputBuilder {
    /// Set the certificate ARN.
    pub fn certificate_arn(mut self, input: impl Into<String>) -> Self {
        self.certificate_arn = Some(input.into());
        self
    }

    /// Set or clear the certificate ARN.
    pub fn set_certificate_arn(mut self, input: Option<String>) -> Self {
        self.certificate_arn = input;
        self
    }

    /// Set the shared response metadata.
    pub fn response_metadata(mut self, input: impl Into<ResponseMetadata>) -> Self {
        self.response_metadata = input.into();
        self
    }

    /// Snapshot the current state into an [`ImportCertificateOutput`].
    pub fn build(self) -> ImportCertificateOutput {
        ImportCertificateOutput {
            certificate_arn: self.certificate_arn,
            response_metadata: self.response_metadata,
        }
    }
}

impl From<ImportCertificateOutputBuilder> for ImportCertificateOutput {
    fn from(builder: ImportCertificateOutputBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_key_never_renders() {
        let input = ImportCertificateInput::builder()
            .certificate(Blob::from("-----BEGIN CERTIFICATE-----"))
            .private_key(Blob::from("secret123"))
            .build();

        let display = input.to_string();
        let debug = format!("{:?}", input);
        assert!(!display.contains("secret123"));
        assert!(!debug.contains("secret123"));
        assert!(display.contains("PrivateKey=*** sensitive value redacted ***"));
    }

    #[test]
    fn test_private_key_still_reaches_the_wire() {
        let input = ImportCertificateInput::builder()
            .private_key(Blob::from("secret123"))
            .build();
        let json = serde_json::to_value(&input).unwrap();
        // base64 of "secret123"
        assert_eq!(json["PrivateKey"], "c2VjcmV0MTIz");
    }

    #[test]
    fn test_round_trip() {
        let input = ImportCertificateInput::builder()
            .certificate(Blob::from("cert"))
            .private_key(Blob::from("key"))
            .certificate_chain(Blob::from("chain"))
            .tags_with(|t| t.key("Env").value("prod"))
            .build();
        assert_eq!(input.to_builder().build(), input);
        assert_eq!(input.private_key().unwrap().reveal().as_bytes(), b"key");
    }
}
