//! RequestCertificate operation records
//!
//! Copyright (c) 2025 Certmgr Team
//! Licensed under the Apache-2.0 license

use crate::enums::{KeyAlgorithm, ValidationMethod};
use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use crate::types::domain::{DomainValidationOption, DOMAIN_VALIDATION_OPTION_SCHEMA};
use crate::types::options::{CertificateOptions, CertificateOptionsBuilder, SCHEMA as OPTIONS_SCHEMA};
use crate::types::response_metadata::{ResponseMetadata, SCHEMA as RESPONSE_METADATA_SCHEMA};
use crate::types::tag::{Tag, SCHEMA as TAG_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static INPUT_SCHEMA: Schema = Schema {
    type_name: "RequestCertificateInput",
    fields: &[
        FieldMeta::payload("domain_name", "DomainName", ValueType::String),
        FieldMeta::payload("validation_method", "ValidationMethod", ValueType::Enum),
        FieldMeta::payload(
            "subject_alternative_names",
            "SubjectAlternativeNames",
            ValueType::List,
        ),
        FieldMeta::payload("idempotency_token", "IdempotencyToken", ValueType::String)
            .located(WireLocation::Header),
        FieldMeta::payload(
            "domain_validation_options",
            "DomainValidationOptions",
            ValueType::List,
        )
        .nested(&DOMAIN_VALIDATION_OPTION_SCHEMA),
        FieldMeta::payload("options", "Options", ValueType::Structure).nested(&OPTIONS_SCHEMA),
        FieldMeta::payload("key_algorithm", "KeyAlgorithm", ValueType::Enum),
        FieldMeta::payload("tags", "Tags", ValueType::List).nested(&TAG_SCHEMA),
    ],
};

pub(crate) static OUTPUT_SCHEMA: Schema = Schema {
    type_name: "RequestCertificateOutput",
    fields: &[
        FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String),
        FieldMeta::payload("response_metadata", "ResponseMetadata", ValueType::Structure)
            .located(WireLocation::Header)
            .nested(&RESPONSE_METADATA_SCHEMA),
    ],
};

/// Input for requesting a new certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct RequestCertificateInput {
    #[serde(rename = "DomainName", skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
    #[serde(rename = "ValidationMethod", skip_serializing_if = "Option::is_none")]
    validation_method: Option<ValidationMethod>,
    #[serde(rename = "SubjectAlternativeNames", skip_serializing_if = "Option::is_none")]
    subject_alternative_names: Option<Vec<String>>,
    #[serde(rename = "IdempotencyToken", skip_serializing_if = "Option::is_none")]
    idempotency_token: Option<String>,
    #[serde(rename = "DomainValidationOptions", skip_serializing_if = "Option::is_none")]
    domain_validation_options: Option<Vec<DomainValidationOption>>,
    #[serde(rename = "Options", skip_serializing_if = "Option::is_none")]
    options: Option<CertificateOptions>,
    #[serde(rename = "KeyAlgorithm", skip_serializing_if = "Option::is_none")]
    key_algorithm: Option<KeyAlgorithm>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl RequestCertificateInput {
    /// Start building a `RequestCertificateInput`.
    pub fn builder() -> RequestCertificateInputBuilder {
        RequestCertificateInputBuilder::default()
    }

    /// Primary domain name the certificate covers.
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }

    /// How domain ownership will be proven.
    pub fn validation_method(&self) -> Option<&ValidationMethod> {
        self.validation_method.as_ref()
    }

    /// Additional names the certificate covers. Empty slice when never
    /// set.
    pub fn subject_alternative_names(&self) -> &[String] {
        self.subject_alternative_names.as_deref().unwrap_or_default()
    }

    /// True when the SAN list was explicitly provided.
    pub fn has_subject_alternative_names(&self) -> bool {
        self.subject_alternative_names.is_some()
    }

    /// Caller-chosen token making retries idempotent.
    pub fn idempotency_token(&self) -> Option<&str> {
        self.idempotency_token.as_deref()
    }

    /// Per-domain validation-email overrides. Empty slice when never set.
    pub fn domain_validation_options(&self) -> &[DomainValidationOption] {
        self.domain_validation_options.as_deref().unwrap_or_default()
    }

    /// True when the override list was explicitly provided.
    pub fn has_domain_validation_options(&self) -> bool {
        self.domain_validation_options.is_some()
    }

    /// Option settings for the new certificate.
    pub fn options(&self) -> Option<&CertificateOptions> {
        self.options.as_ref()
    }

    /// Requested key-pair algorithm.
    pub fn key_algorithm(&self) -> Option<&KeyAlgorithm> {
        self.key_algorithm.as_ref()
    }

    /// Tags to attach on creation. Empty slice when never set.
    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// True when the tag list was explicitly provided.
    pub fn has_tags(&self) -> bool {
        self.tags.is_some()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> RequestCertificateInputBuilder {
        RequestCertificateInputBuilder {
            domain_name: self.domain_name.clone(),
            validation_method: self.validation_method.clone(),
            subject_alternative_names: self.subject_alternative_names.clone(),
            idempotency_token: self.idempotency_token.clone(),
            domain_validation_options: self.domain_validation_options.clone(),
            options: self.options.clone(),
            key_algorithm: self.key_algorithm.clone(),
            tags: self.tags.clone(),
        }
    }
}

impl WireModel for RequestCertificateInput {
    fn schema() -> &'static Schema {
        &INPUT_SCHEMA
    }
}

impl fmt::Display for RequestCertificateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`RequestCertificateInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCertificateInputBuilder {
    domain_name: Option<String>,
    validation_method: Option<ValidationMethod>,
    subject_alternative_names: Option<Vec<String>>,
    idempotency_token: Option<String>,
    domain_validation_options: Option<Vec<DomainValidationOption>>,
    options: Option<CertificateOptions>,
    key_algorithm: Option<KeyAlgorithm>,
    tags: Option<Vec<Tag>>,
}

impl RequestCertificateInputBuilder {
    /// Set the primary domain name.
    pub fn domain_name(mut self, input: impl Into<String>) -> Self {
        self.domain_name = Some(input.into());
        self
    }

    /// Set or clear the primary domain name.
    pub fn set_domain_name(mut self, input: Option<String>) -> Self {
        self.domain_name = input;
        self
    }

    /// Set the validation mechanism.
    pub fn validation_method(mut self, input: impl Into<ValidationMethod>) -> Self {
        self.validation_method = Some(input.into());
        self
    }

    /// Set or clear the validation mechanism.
    pub fn set_validation_method(mut self, input: Option<ValidationMethod>) -> Self {
        self.validation_method = input;
        self
    }

    /// Append one subject alternative name, marking the list as set.
    pub fn subject_alternative_names(mut self, input: impl Into<String>) -> Self {
        self.subject_alternative_names
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Set or clear the SAN list.
    pub fn set_subject_alternative_names(mut self, input: Option<Vec<String>>) -> Self {
        self.subject_alternative_names = input;
        self
    }

    /// Set the idempotency token.
    pub fn idempotency_token(mut self, input: impl Into<String>) -> Self {
        self.idempotency_token = Some(input.into());
        self
    }

    /// Set or clear the idempotency token.
    pub fn set_idempotency_token(mut self, input: Option<String>) -> Self {
        self.idempotency_token = input;
        self
    }

    /// Append one validation-email override, marking the list as set.
    pub fn domain_validation_options(mut self, input: impl Into<DomainValidationOption>) -> Self {
        self.domain_validation_options
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Set or clear the override list.
    pub fn set_domain_validation_options(
        mut self,
        input: Option<Vec<DomainValidationOption>>,
    ) -> Self {
        self.domain_validation_options = input;
        self
    }

    /// Set the option settings.
    pub fn options(mut self, input: impl Into<CertificateOptions>) -> Self {
        self.options = Some(input.into());
        self
    }

    /// Build the option settings in place through a fresh builder.
    pub fn options_with(
        self,
        f: impl FnOnce(CertificateOptionsBuilder) -> CertificateOptionsBuilder,
    ) -> Self {
        let options = f(CertificateOptions::builder()).build();
        self.options(options)
    }

    /// Set or clear the option settings.
    pub fn set_options(mut self, input: Option<CertificateOptions>) -> Self {
        self.options = input;
        self
    }

    /// Set the requested key-pair algorithm.
    pub fn key_algorithm(mut self, input: impl Into<KeyAlgorithm>) -> Self {
        self.key_algorithm = Some(input.into());
        self
    }

    /// Set or clear the requested key-pair algorithm.
    pub fn set_key_algorithm(mut self, input: Option<KeyAlgorithm>) -> Self {
        self.key_algorithm = input;
        self
    }

    /// Append one tag, marking the list as set.
    pub fn tags(mut self, input: impl Into<Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Set or clear the tag list.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Snapshot the current state into a [`RequestCertificateInput`].
    pub fn build(self) -> RequestCertificateInput {
        RequestCertificateInput {
            domain_name: self.domain_name,
            validation_method: self.validation_method,
            subject_alternative_names: self.subject_alternative_names,
            idempotency_token: self.idempotency_token,
            domain_validation_options: self.domain_validation_options,
            options: self.options,
            key_algorithm: self.key_algorithm,
            tags: self.tags,
        }
    }
}

impl From<RequestCertificateInputBuilder> for RequestCertificateInput {
    fn from(builder: RequestCertificateInputBuilder) -> Self {
        builder.build()
    }
}

/// Output of a certificate request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct RequestCertificateOutput {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "ResponseMetadata::is_empty"
    )]
    response_metadata: ResponseMetadata,
}

impl RequestCertificateOutput {
    /// Start building a `RequestCertificateOutput`.
    pub fn builder() -> RequestCertificateOutputBuilder {
        RequestCertificateOutputBuilder::default()
    }

    /// ARN of the newly requested certificate.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// Shared response metadata.
    pub fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> RequestCertificateOutputBuilder {
        RequestCertificateOutputBuilder {
            certificate_arn: self.certificate_arn.clone(),
            response_metadata: self.response_metadata.clone(),
        }
    }
}

impl WireModel for RequestCertificateOutput {
    fn schema() -> &'static Schema {
        &OUTPUT_SCHEMA
    }
}

impl fmt::Display for RequestCertificateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`RequestCertificateOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCertificateOutputBuilder {
    certificate_arn: Option<String>,
    response_metadata: ResponseMetadata,
}

impl RequestCertificateOutputBuilder {
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

    /// Snapshot the current state into a [`RequestCertificateOutput`].
    pub fn build(self) -> RequestCertificateOutput {
        RequestCertificateOutput {
            certificate_arn: self.certificate_arn,
            response_metadata: self.response_metadata,
        }
    }
}

impl From<RequestCertificateOutputBuilder> for RequestCertificateOutput {
    fn from(builder: RequestCertificateOutputBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_request_round_trip() {
        let input = RequestCertificateInput::builder()
            .domain_name("example.com")
            .validation_method(ValidationMethod::Dns)
            .subject_alternative_names("www.example.com")
            .key_algorithm("EC_prime256v1")
            .tags(Tag::builder().key("Env").value("prod"))
            .options_with(|o| o.certificate_transparency_logging_preference("ENABLED"))
            .build();

        assert_eq!(input.to_builder().build(), input);
        assert_eq!(input.tags().len(), 1);
        assert_eq!(
            input.key_algorithm(),
            Some(&KeyAlgorithm::EcPrime256v1)
        );
    }

    #[test]
    fn test_idempotency_token_is_header_located() {
        let field = RequestCertificateInput::schema()
            .field("IdempotencyToken")
            .unwrap();
        assert_eq!(field.location, WireLocation::Header);
    }
}
