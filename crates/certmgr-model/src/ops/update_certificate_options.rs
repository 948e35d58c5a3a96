//! UpdateCertificateOptions operation records

use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use crate::types::options::{CertificateOptions, CertificateOptionsBuilder, SCHEMA as OPTIONS_SCHEMA};
use crate::types::response_metadata::{ResponseMetadata, SCHEMA as RESPONSE_METADATA_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static INPUT_SCHEMA: Schema = Schema {
    type_name: "UpdateCertificateOptionsInput",
    fields: &[
        FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String)
            .located(WireLocation::Uri),
        FieldMeta::payload("options", "Options", ValueType::Structure).nested(&OPTIONS_SCHEMA),
    ],
};

pub(crate) static OUTPUT_SCHEMA: Schema = Schema {
    type_name: "UpdateCertificateOptionsOutput",
    fields: &[
        FieldMeta::payload("response_metadata", "ResponseMetadata", ValueType::Structure)
            .located(WireLocation::Header)
            .nested(&RESPONSE_METADATA_SCHEMA),
    ],
};

/// Input replacing a certificate's option settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct UpdateCertificateOptionsInput {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
    #[serde(rename = "Options", skip_serializing_if = "Option::is_none")]
    options: Option<CertificateOptions>,
}

impl UpdateCertificateOptionsInput {
    /// Start building an `UpdateCertificateOptionsInput`.
    pub fn builder() -> UpdateCertificateOptionsInputBuilder {
        UpdateCertificateOptionsInputBuilder::default()
    }

    /// ARN of the certificate.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// The replacement option settings.
    pub fn options(&self) -> Option<&CertificateOptions> {
        self.options.as_ref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> UpdateCertificateOptionsInputBuilder {
        UpdateCertificateOptionsInputBuilder {
            certificate_arn: self.certificate_arn.clone(),
            options: self.options.clone(),
        }
    }
}

impl WireModel for UpdateCertificateOptionsInput {
    fn schema() -> &'static Schema {
        &INPUT_SCHEMA
    }
}

impl fmt::Display for UpdateCertificateOptionsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`UpdateCertificateOptionsInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCertificateOptionsInputBuilder {
    certificate_arn: Option<String>,
    options: Option<CertificateOptions>,
}

impl UpdateCertificateOptionsInputBuilder {
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

    /// Set the replacement option settings.
    pub fn options(mut self, input: impl Into<CertificateOptions>) -> Self {
        self.options = Some(input.into());
        self
    }

    /// Build the replacement option settings in place through a fresh
    /// builder.
    pub fn options_with(
        self,
        f: impl FnOnce(CertificateOptionsBuilder) -> CertificateOptionsBuilder,
    ) -> Self {
        let options = f(CertificateOptions::builder()).build();
        self.options(options)
    }

    /// Set or clear the replacement option settings.
    pub fn set_options(mut self, input: Option<CertificateOptions>) -> Self {
        self.options = input;
        self
    }

    /// Snapshot the current state into an [`UpdateCertificateOptionsInput`].
    pub fn build(self) -> UpdateCertificateOptionsInput {
        UpdateCertificateOptionsInput {
            certificate_arn: self.certificate_arn,
            options: self.options,
        }
    }
}

impl From<UpdateCertificateOptionsInputBuilder> for UpdateCertificateOptionsInput {
    fn from(builder: UpdateCertificateOptionsInputBuilder) -> Self {
        builder.build()
    }
}

/// Output of a successful options update; carries only the shared
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct UpdateCertificateOptionsOutput {
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "ResponseMetadata::is_empty"
    )]
    response_metadata: ResponseMetadata,
}

impl UpdateCertificateOptionsOutput {
    /// Start building an `UpdateCertificateOptionsOutput`.
    pub fn builder() -> UpdateCertificateOptionsOutputBuilder {
        UpdateCertificateOptionsOutputBuilder::default()
    }

    /// Shared response metadata.
    pub fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> UpdateCertificateOptionsOutputBuilder {
        UpdateCertificateOptionsOutputBuilder {
            response_metadata: self.response_metadata.clone(),
        }
    }
}

impl WireModel for UpdateCertificateOptionsOutput {
    fn schema() -> &'static Schema {
        &OUTPUT_SCHEMA
    }
}

impl fmt::Display for UpdateCertificateOptionsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`UpdateCertificateOptionsOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCertificateOptionsOutputBuilder {
    response_metadata: ResponseMetadata,
}

impl UpdateCertificateOptionsOutputBuilder {
    /// Set the shared response metadata.
    pub fn response_metadata(mut self, input: impl Into<ResponseMetadata>) -> Self {
        self.response_metadata = input.into();
        self
    }

    /// Snapshot into an [`UpdateCertificateOptionsOutput`].
    pub fn build(self) -> UpdateCertificateOptionsOutput {
        UpdateCertificateOptionsOutput {
            response_metadata: self.response_metadata,
        }
    }
}

impl From<UpdateCertificateOptionsOutputBuilder> for UpdateCertificateOptionsOutput {
    fn from(builder: UpdateCertificateOptionsOutputBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_closure_setter() {
        let input = UpdateCertificateOptionsInput::builder()
            .certificate_arn("arn:certmgr:cert/abc")
            .options_with(|o| o.certificate_transparency_logging_preference("DISABLED"))
            .build();
        assert!(input.options().is_some());
        assert_eq!(input.to_builder().build(), input);
    }
}
