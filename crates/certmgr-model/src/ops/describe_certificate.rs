//! DescribeCertificate operation records

use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use crate::types::detail::{CertificateDetail, CertificateDetailBuilder, SCHEMA as DETAIL_SCHEMA};
use crate::types::response_metadata::{ResponseMetadata, SCHEMA as RESPONSE_METADATA_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static INPUT_SCHEMA: Schema = Schema {
    type_name: "DescribeCertificateInput",
    fields: &[FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String)
        .located(WireLocation::Uri)],
};

pub(crate) static OUTPUT_SCHEMA: Schema = Schema {
    type_name: "DescribeCertificateOutput",
    fields: &[
        FieldMeta::payload("certificate", "Certificate", ValueType::Structure)
            .nested(&DETAIL_SCHEMA),
        FieldMeta::payload("response_metadata", "ResponseMetadata", ValueType::Structure)
            .located(WireLocation::Header)
            .nested(&RESPONSE_METADATA_SCHEMA),
    ],
};

/// Input naming the certificate to describe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DescribeCertificateInput {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
}

impl DescribeCertificateInput {
    /// Start building a `DescribeCertificateInput`.
    pub fn builder() -> DescribeCertificateInputBuilder {
        DescribeCertificateInputBuilder::default()
    }

    /// ARN of the certificate.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> DescribeCertificateInputBuilder {
        DescribeCertificateInputBuilder {
            certificate_arn: self.certificate_arn.clone(),
        }
    }
}

impl WireModel for DescribeCertificateInput {
    fn schema() -> &'static Schema {
        &INPUT_SCHEMA
    }
}

impl fmt::Display for DescribeCertificateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`DescribeCertificateInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeCertificateInputBuilder {
    certificate_arn: Option<String>,
}

impl DescribeCertificateInputBuilder {
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

    /// Snapshot the current state into a [`DescribeCertificateInput`].
    pub fn build(self) -> DescribeCertificateInput {
        DescribeCertificateInput {
            certificate_arn: self.certificate_arn,
        }
    }
}

impl From<DescribeCertificateInputBuilder> for DescribeCertificateInput {
    fn from(builder: DescribeCertificateInputBuilder) -> Self {
        builder.build()
    }
}

/// Output carrying the full certificate description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DescribeCertificateOutput {
    #[serde(rename = "Certificate", skip_serializing_if = "Option::is_none")]
    certificate: Option<CertificateDetail>,
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "ResponseMetadata::is_empty"
    )]
    response_metadata: ResponseMetadata,
}

impl DescribeCertificateOutput {
    /// Start building a `DescribeCertificateOutput`.
    pub fn builder() -> DescribeCertificateOutputBuilder {
        DescribeCertificateOutputBuilder::default()
    }

    /// The certificate description.
    pub fn certificate(&self) -> Option<&CertificateDetail> {
        self.certificate.as_ref()
    }

    /// Shared response metadata.
    pub fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> DescribeCertificateOutputBuilder {
        DescribeCertificateOutputBuilder {
            certificate: self.certificate.clone(),
            response_metadata: self.response_metadata.clone(),
        }
    }
}

impl WireModel for DescribeCertificateOutput {
    fn schema() -> &'static Schema {
        &OUTPUT_SCHEMA
    }
}

impl fmt::Display for DescribeCertificateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`DescribeCertificateOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeCertificateOutputBuilder {
    certificate: Option<CertificateDetail>,
    response_metadata: ResponseMetadata,
}

impl DescribeCertificateOutputBuilder {
    /// Set the certificate description.
    pub fn certificate(mut self, input: impl Into<CertificateDetail>) -> Self {
        self.certificate = Some(input.into());
        self
    }

    /// Build the certificate description in place through a fresh builder.
    pub fn certificate_with(
        self,
        f: impl FnOnce(CertificateDetailBuilder) -> CertificateDetailBuilder,
    ) -> Self {
        let certificate = f(CertificateDetail::builder()).build();
        self.certificate(certificate)
    }

    /// Set or clear the certificate description.
    pub fn set_certificate(mut self, input: Option<CertificateDetail>) -> Self {
        self.certificate = input;
        self
    }

    /// Set the shared response metadata.
    pub fn response_metadata(mut self, input: impl Into<ResponseMetadata>) -> Self {
        self.response_metadata = input.into();
        self
    }

    /// Snapshot the current state into a [`DescribeCertificateOutput`].
    pub fn build(self) -> DescribeCertificateOutput {
        DescribeCertificateOutput {
            certificate: self.certificate,
            response_metadata: self.response_metadata,
        }
    }
}

impl From<DescribeCertificateOutputBuilder> for DescribeCertificateOutput {
    fn from(builder: DescribeCertificateOutputBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arn_is_uri_located() {
        let field = DescribeCertificateInput::schema().field("CertificateArn").unwrap();
        assert_eq!(field.location, WireLocation::Uri);
    }

    #[test]
    fn test_nested_detail_builder() {
        let output = DescribeCertificateOutput::builder()
            .certificate_with(|c| c.certificate_arn("arn:certmgr:cert/abc").status("ISSUED"))
            .build();
        assert_eq!(
            output.certificate().unwrap().certificate_arn(),
            Some("arn:certmgr:cert/abc")
        );
        assert_eq!(output.to_builder().build(), output);
    }
}
