//! Certificate option settings

use crate::enums::{CertificateExport, CertificateTransparencyLoggingPreference};
use crate::meta::{self, FieldMeta, Schema, ValueType, WireModel};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static SCHEMA: Schema = Schema {
    type_name: "CertificateOptions",
    fields: &[
        FieldMeta::payload(
            "certificate_transparency_logging_preference",
            "CertificateTransparencyLoggingPreference",
            ValueType::Enum,
        ),
        FieldMeta::payload("export", "Export", ValueType::Enum),
    ],
};

/// Per-certificate option settings: transparency logging and key export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CertificateOptions {
    #[serde(
        rename = "CertificateTransparencyLoggingPreference",
        skip_serializing_if = "Option::is_none"
    )]
    certificate_transparency_logging_preference: Option<CertificateTransparencyLoggingPreference>,
    #[serde(rename = "Export", skip_serializing_if = "Option::is_none")]
    export: Option<CertificateExport>,
}

impl CertificateOptions {
    /// Start building a `CertificateOptions`.
    pub fn builder() -> CertificateOptionsBuilder {
        CertificateOptionsBuilder::default()
    }

    /// Whether the certificate is submitted to transparency logs.
    pub fn certificate_transparency_logging_preference(
        &self,
    ) -> Option<&CertificateTransparencyLoggingPreference> {
        self.certificate_transparency_logging_preference.as_ref()
    }

    /// Whether the private key may be exported.
    pub fn export(&self) -> Option<&CertificateExport> {
        self.export.as_ref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> CertificateOptionsBuilder {
        CertificateOptionsBuilder {
            certificate_transparency_logging_preference: self
                .certificate_transparency_logging_preference
                .clone(),
            export: self.export.clone(),
        }
    }
}

impl WireModel for CertificateOptions {
    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl fmt::Display for CertificateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`CertificateOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateOptionsBuilder {
    certificate_transparency_logging_preference: Option<CertificateTransparencyLoggingPreference>,
    export: Option<CertificateExport>,
}

impl CertificateOptionsBuilder {
    /// Set the transparency-logging preference.
    pub fn certificate_transparency_logging_preference(
        mut self,
        input: impl Into<CertificateTransparencyLoggingPreference>,
    ) -> Self {
        self.certificate_transparency_logging_preference = Some(input.into());
        self
    }

    /// Set or clear the transparency-logging preference.
    pub fn set_certificate_transparency_logging_preference(
        mut self,
        input: Option<CertificateTransparencyLoggingPreference>,
    ) -> Self {
        self.certificate_transparency_logging_preference = input;
        self
    }

    /// Set the export preference.
    pub fn export(mut self, input: impl Into<CertificateExport>) -> Self {
        self.export = Some(input.into());
        self
    }

    /// Set or clear the export preference.
    pub fn set_export(mut self, input: Option<CertificateExport>) -> Self {
        self.export = input;
        self
    }

    /// Snapshot the current state into a [`CertificateOptions`].
    pub fn build(self) -> CertificateOptions {
        CertificateOptions {
            certificate_transparency_logging_preference: self
                .certificate_transparency_logging_preference,
            export: self.export,
        }
    }
}

impl From<CertificateOptionsBuilder> for CertificateOptions {
    fn from(builder: CertificateOptionsBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_setter_accepts_wire_strings() {
        let options = CertificateOptions::builder()
            .certificate_transparency_logging_preference("ENABLED")
            .export(CertificateExport::Disabled)
            .build();
        assert_eq!(
            options.certificate_transparency_logging_preference(),
            Some(&CertificateTransparencyLoggingPreference::Enabled)
        );
        assert_eq!(options.export(), Some(&CertificateExport::Disabled));
    }

    #[test]
    fn test_round_trip() {
        let options = CertificateOptions::builder().export("ENABLED").build();
        assert_eq!(options.to_builder().build(), options);
    }
}
