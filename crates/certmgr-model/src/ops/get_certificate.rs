//! GetCertificate operation records

use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use crate::types::response_metadata::{ResponseMetadata, SCHEMA as RESPONSE_METADATA_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static INPUT_SCHEMA: Schema = Schema {
    type_name: "GetCertificateInput",
    fields: &[FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String)
        .located(WireLocation::Uri)],
};

pub(crate) static OUTPUT_SCHEMA: Schema = Schema {
    type_name: "GetCertificateOutput",
    fields: &[
        FieldMeta::payload("certificate", "Certificate", ValueType::String),
        FieldMeta::payload("certificate_chain", "CertificateChain", ValueType::String),
        FieldMeta::payload("response_metadata", "ResponseMetadata", ValueType::Structure)
            .located(WireLocation::Header)
            .nested(&RESPONSE_METADATA_SCHEMA),
    ],
};

/// Input naming the certificate to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct GetCertificateInput {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
}

impl GetCertificateInput {
    /// Start building a `GetCertificateInput`.
    pub fn builder() -> GetCertificateInputBuilder {
        GetCertificateInputBuilder::default()
    }

    /// ARN of the certificate.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> GetCertificateInputBuilder {
        GetCertificateInputBuilder {
            certificate_arn: self.certificate_arn.clone(),
        }
    }
}

impl WireModel for GetCertificateInput {
    fn schema() -> &'static Schema {
        &INPUT_SCHEMA
    }
}

impl fmt::Display for GetCertificateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`GetCertificateInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCertificateInputBuilder {
    certificate_arn: Option<String>,
}

impl GetCertificateInputBuilder {
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

    /// Snapshot the current state into a [`GetCertificateInput`].
    pub fn build(self) -> GetCertificateInput {
        GetCertificateInput {
            certificate_arn: self.certificate_arn,
        }
    }
}

impl From<GetCertificateInputBuilder> for GetCertificateInput {
    fn from(builder: GetCertificateInputBuilder) -> Self {
        builder.build()
    }
}

/// Output carrying the certificate body and its chain, PEM encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct GetCertificateOutput {
    #[serde(rename = "Certificate", skip_serializing_if = "Option::is_none")]
    certificate: Option<String>,
    #[serde(rename = "CertificateChain", skip_serializing_if = "Option::is_none")]
    certificate_chain: Option<String>,
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "ResponseMetadata::is_empty"
    )]
    response_metadata: ResponseMetadata,
}

impl GetCertificateOutput {
    /// Start building a `GetCertificateOutput`.
    pub fn builder() -> GetCertificateOutputBuilder {
        GetCertificateOutputBuilder::default()
    }

    /// PEM-encoded leaf certificate.
    pub fn certificate(&self) -> Option<&str> {
        self.certificate.as_deref()
    }

    /// PEM-encoded intermediate chain.
    pub fn certificate_chain(&self) -> Option<&str> {
        self.certificate_chain.as_deref()
    }

    /// Shared response metadata.
    pub fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> GetCertificateOutputBuilder {
        GetCertificateOutputBuilder {
            certificate: self.certificate.clone(),
            certificate_chain: self.certificate_chain.clone(),
            response_metadata: self.response_metadata.clone(),
        }
    }
}

impl WireModel for GetCertificateOutput {
    fn schema() -> &'static Schema {
        &OUTPUT_SCHEMA
    }
}

impl fmt::Display for GetCertificateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`GetCertificateOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCertificateOutputBuilder {
    certificate: Option<String>,
    certificate_chain: Option<String>,
    response_metadata: ResponseMetadata,
}

impl GetCertificateOutputBuilder {
    /// Set the PEM-encoded leaf certificate.
    pub fn certificate(mut self, input: impl Into<String>) -> Self {
        self.certificate = Some(input.into());
        self
    }

    /// Set or clear the PEM-encoded leaf certificate.
    pub fn set_certificate(mut self, input: Option<String>) -> Self {
        self.certificate = input;
        self
    }

    /// Set the PEM-encoded chain.
    pub fn certificate_chain(mut self, input: impl Into<String>) -> Self {
        self.certificate_chain = Some(input.into());
        self
    }

    /// Set or clear the PEM-encoded chain.
    pub fn set_certificate_chain(mut self, input: Option<String>) -> Self {
        self.certificate_chain = input;
        self
    }

    /// Set the shared response metadata.
    pub fn response_metadata(mut self, input: impl Into<ResponseMetadata>) -> Self {
        self.response_metadata = input.into();
        self
    }

    /// Snapshot the current state into a [`GetCertificateOutput`].
    pub fn build(self) -> GetCertificateOutput {
        GetCertificateOutput {
            certificate: self.certificate,
            certificate_chain: self.certificate_chain,
            response_metadata: self.response_metadata,
        }
    }
}

impl From<GetCertificateOutputBuilder> for GetCertificateOutput {
    fn from(builder: GetCertificateOutputBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let output = GetCertificateOutput::builder()
            .certificate("-----BEGIN CERTIFICATE-----\n...")
            .certificate_chain("-----BEGIN CERTIFICATE-----\n...")
            .build();
        assert_eq!(output.to_builder().build(), output);
    }
}
