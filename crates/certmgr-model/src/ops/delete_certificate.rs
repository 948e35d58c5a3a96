//! DeleteCertificate operation records

use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use crate::types::response_metadata::{ResponseMetadata, SCHEMA as RESPONSE_METADATA_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static INPUT_SCHEMA: Schema = Schema {
    type_name: "DeleteCertificateInput",
    fields: &[FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String)
        .located(WireLocation::Uri)],
};

pub(crate) static OUTPUT_SCHEMA: Schema = Schema {
    type_name: "DeleteCertificateOutput",
    fields: &[
        FieldMeta::payload("response_metadata", "ResponseMetadata", ValueType::Structure)
            .located(WireLocation::Header)
            .nested(&RESPONSE_METADATA_SCHEMA),
    ],
};

/// Input naming the certificate to delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DeleteCertificateInput {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
}

impl DeleteCertificateInput {
    /// Start building a `DeleteCertificateInput`.
    pub fn builder() -> DeleteCertificateInputBuilder {
        DeleteCertificateInputBuilder::default()
    }

    /// ARN of the certificate.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> DeleteCertificateInputBuilder {
        DeleteCertificateInputBuilder {
            certificate_arn: self.certificate_arn.clone(),
        }
    }
}

impl WireModel for DeleteCertificateInput {
    fn schema() -> &'static Schema {
        &INPUT_SCHEMA
    }
}

impl fmt::Display for DeleteCertificateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`DeleteCertificateInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteCertificateInputBuilder {
    certificate_arn: Option<String>,
}

impl DeleteCertificateInputBuilder {
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

    /// Snapshot the current state into a [`DeleteCertificateInput`].
    pub fn build(self) -> DeleteCertificateInput {
        DeleteCertificateInput {
            certificate_arn: self.certificate_arn,
        }
    }
}

impl From<DeleteCertificateInputBuilder> for DeleteCertificateInput {
    fn from(builder: DeleteCertificateInputBuilder) -> Self {
        builder.build()
    }
}

/// Output of a successful delete; carries only the shared metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DeleteCertificateOutput {
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "ResponseMetadata::is_empty"
    )]
    response_metadata: ResponseMetadata,
}

impl DeleteCertificateOutput {
    /// Start building a `DeleteCertificateOutput`.
    pub fn builder() -> DeleteCertificateOutputBuilder {
        DeleteCertificateOutputBuilder::default()
    }

    /// Shared response metadata.
    pub fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> DeleteCertificateOutputBuilder {
        DeleteCertificateOutputBuilder {
            response_metadata: self.response_metadata.clone(),
        }
    }
}

impl WireModel for DeleteCertificateOutput {
    fn schema() -> &'static Schema {
        &OUTPUT_SCHEMA
    }
}

impl fmt::Display for DeleteCertificateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`DeleteCertificateOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteCertificateOutputBuilder {
    response_metadata: ResponseMetadata,
}

impl DeleteCertificateOutputBuilder {
    /// Set the shared response metadata.
    pub fn response_metadata(mut self, input: impl Into<ResponseMetadata>) -> Self {
        self.response_metadata = input.into();
        self
    }

    /// Snapshot into a [`DeleteCertificateOutput`].
    pub fn build(self) -> DeleteCertificateOutput {
        DeleteCertificateOutput {
            response_metadata: self.response_metadata,
        }
    }
}

impl From<DeleteCertificateOutputBuilder> for DeleteCertificateOutput {
    fn from(builder: DeleteCertificateOutputBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_renders_type_name_only() {
        let output = DeleteCertificateOutput::builder().build();
        assert_eq!(output.to_string(), "DeleteCertificateOutput()");
    }
}
