//! ResendValidationEmail operation records

use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use crate::types::response_metadata::{ResponseMetadata, SCHEMA as RESPONSE_METADATA_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static INPUT_SCHEMA: Schema = Schema {
    type_name: "ResendValidationEmailInput",
    fields: &[
        FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String),
        FieldMeta::payload("domain", "Domain", ValueType::String),
        FieldMeta::payload("validation_domain", "ValidationDomain", ValueType::String),
    ],
};

pub(crate) static OUTPUT_SCHEMA: Schema = Schema {
    type_name: "ResendValidationEmailOutput",
    fields: &[
        FieldMeta::payload("response_metadata", "ResponseMetadata", ValueType::Structure)
            .located(WireLocation::Header)
            .nested(&RESPONSE_METADATA_SCHEMA),
    ],
};

/// Input asking the service to resend the validation email for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ResendValidationEmailInput {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
    #[serde(rename = "Domain", skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    #[serde(rename = "ValidationDomain", skip_serializing_if = "Option::is_none")]
    validation_domain: Option<String>,
}

impl ResendValidationEmailInput {
    /// Start building a `ResendValidationEmailInput`.
    pub fn builder() -> ResendValidationEmailInputBuilder {
        ResendValidationEmailInputBuilder::default()
    }

    /// ARN of the pending certificate.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// The domain whose validation email should be resent.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// The domain the email is sent to.
    pub fn validation_domain(&self) -> Option<&str> {
        self.validation_domain.as_deref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ResendValidationEmailInputBuilder {
        ResendValidationEmailInputBuilder {
            certificate_arn: self.certificate_arn.clone(),
            domain: self.domain.clone(),
            validation_domain: self.validation_domain.clone(),
        }
    }
}

impl WireModel for ResendValidationEmailInput {
    fn schema() -> &'static Schema {
        &INPUT_SCHEMA
    }
}

impl fmt::Display for ResendValidationEmailInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ResendValidationEmailInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResendValidationEmailInputBuilder {
    certificate_arn: Option<String>,
    domain: Option<String>,
    validation_domain: Option<String>,
}

impl ResendValidationEmailInputBuilder {
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

    /// Set the domain.
    pub fn domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Set or clear the domain.
    pub fn set_domain(mut self, input: Option<String>) -> Self {
        self.domain = input;
        self
    }

    /// Set the validation domain.
    pub fn validation_domain(mut self, input: impl Into<String>) -> Self {
        self.validation_domain = Some(input.into());
        self
    }

    /// Set or clear the validation domain.
    pub fn set_validation_domain(mut self, input: Option<String>) -> Self {
        self.validation_domain = input;
        self
    }

    /// Snapshot the current state into a [`ResendValidationEmailInput`].
    pub fn build(self) -> ResendValidationEmailInput {
        ResendValidationEmailInput {
            certificate_arn: self.certificate_arn,
            domain: self.domain,
            validation_domain: self.validation_domain,
        }
    }
}

impl From<ResendValidationEmailInputBuilder> for ResendValidationEmailInput {
    fn from(builder: ResendValidationEmailInputBuilder) -> Self {
        builder.build()
    }
}

/// Output of a successful resend; carries only the shared metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ResendValidationEmailOutput {
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "ResponseMetadata::is_empty"
    )]
    response_metadata: ResponseMetadata,
}

impl ResendValidationEmailOutput {
    /// Start building a `ResendValidationEmailOutput`.
    pub fn builder() -> ResendValidationEmailOutputBuilder {
        ResendValidationEmailOutputBuilder::default()
    }

    /// Shared response metadata.
    pub fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ResendValidationEmailOutputBuilder {
        ResendValidationEmailOutputBuilder {
            response_metadata: self.response_metadata.clone(),
        }
    }
}

impl WireModel for ResendValidationEmailOutput {
    fn schema() -> &'static Schema {
        &OUTPUT_SCHEMA
    }
}

impl fmt::Display for ResendValidationEmailOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ResendValidationEmailOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResendValidationEmailOutputBuilder {
    response_metadata: ResponseMetadata,
}

impl ResendValidationEmailOutputBuilder {
    /// Set the shared response metadata.
    pub fn response_metadata(mut self, input: impl Into<ResponseMetadata>) -> Self {
        self.response_metadata = input.into();
        self
    }

    /// Snapshot into a [`ResendValidationEmailOutput`].
    pub fn build(self) -> ResendValidationEmailOutput {
        ResendValidationEmailOutput {
            response_metadata: self.response_metadata,
        }
    }
}

impl From<ResendValidationEmailOutputBuilder> for ResendValidationEmailOutput {
    fn from(builder: ResendValidationEmailOutputBuilder) -> Self {
        builder.build()
    }
}
