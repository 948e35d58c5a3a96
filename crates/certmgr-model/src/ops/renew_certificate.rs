//! RenewCertificate operation records

use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use crate::types::response_metadata::{ResponseMetadata, SCHEMA as RESPONSE_METADATA_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static INPUT_SCHEMA: Schema = Schema {
    type_name: "RenewCertificateInput",
    fields: &[FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String)
        .located(WireLocation::Uri)],
};

pub(crate) static OUTPUT_SCHEMA: Schema = Schema {
    type_name: "RenewCertificateOutput",
    fields: &[
        FieldMeta::payload("response_metadata", "ResponseMetadata", ValueType::Structure)
            .located(WireLocation::Header)
            .nested(&RESPONSE_METADATA_SCHEMA),
    ],
};

/// Input naming the certificate to renew.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct RenewCertificateInput {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
}

impl RenewCertificateInput {
    /// Start building a `RenewCertificateInput`.
    pub fn builder() -> RenewCertificateInputBuilder {
        RenewCertificateInputBuilder::default()
    }

    /// ARN of the certificate.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> RenewCertificateInputBuilder {
        RenewCertificateInputBuilder {
            certificate_arn: self.certificate_arn.clone(),
        }
    }
}

impl WireModel for RenewCertificateInput {
    fn schema() -> &'static Schema {
        &INPUT_SCHEMA
    }
}

impl fmt::Display for RenewCertificateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`RenewCertificateInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenewCertificateInputBuilder {
    certificate_arn: Option<String>,
}

impl RenewCertificateInputBuilder {
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

    /// Snapshot the current state into a [`RenewCertificateInput`].
    pub fn build(self) -> RenewCertificateInput {
        RenewCertificateInput {
            certificate_arn: self.certificate_arn,
        }
    }
}

impl From<RenewCertificateInputBuilder> for RenewCertificateInput {
    fn from(builder: RenewCertificateInputBuilder) -> Self {
        builder.build()
    }
}

/// Output of a successfully started renewal; carries only the shared
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct RenewCertificateOutput {
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "ResponseMetadata::is_empty"
    )]
    response_metadata: ResponseMetadata,
}

impl RenewCertificateOutput {
    /// Start building a `RenewCertificateOutput`.
    pub fn builder() -> RenewCertificateOutputBuilder {
        RenewCertificateOutputBuilder::default()
    }

    /// Shared response metadata.
    pub fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> RenewCertificateOutputBuilder {
        RenewCertificateOutputBuilder {
            response_metadata: self.response_metadata.clone(),
        }
    }
}

impl WireModel for RenewCertificateOutput {
    fn schema() -> &'static Schema {
        &OUTPUT_SCHEMA
    }
}

impl fmt::Display for RenewCertificateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`RenewCertificateOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenewCertificateOutputBuilder {
    response_metadata: ResponseMetadata,
}

impl RenewCertificateOutputBuilder {
    /// Set the shared response metadata.
    pub fn response_metadata(mut self, input: impl Into<ResponseMetadata>) -> Self {
        self.response_metadata = input.into();
        self
    }

    /// Snapshot into a [`RenewCertificateOutput`].
    pub fn build(self) -> RenewCertificateOutput {
        RenewCertificateOutput {
            response_metadata: self.response_metadata,
        }
    }
}

impl From<RenewCertificateOutputBuilder> for RenewCertificateOutput {
    fn from(builder: RenewCertificateOutputBuilder) -> Self {
        builder.build()
    }
}
