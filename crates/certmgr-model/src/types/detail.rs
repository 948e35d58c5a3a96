//! Full certificate description record
//!
//! The complete view returned by the describe operation. Everything the
//! service knows about a certificate hangs off this record, so it touches
//! every shape in the model: enum fields, structure fields, structure
//! lists, string lists, and timestamps.
//!
//! Copyright (c) 2025 Certmgr Team
//! Licensed under the Apache-2.0 license

use super::domain::{DomainValidation, DOMAIN_VALIDATION_SCHEMA};
use super::key_usage::{
    ExtendedKeyUsage, KeyUsage, EXTENDED_KEY_USAGE_SCHEMA, KEY_USAGE_SCHEMA,
};
use super::options::{CertificateOptions, CertificateOptionsBuilder, SCHEMA as OPTIONS_SCHEMA};
use super::renewal::{RenewalSummary, RenewalSummaryBuilder, SCHEMA as RENEWAL_SCHEMA};
use crate::enums::{
    CertificateStatus, CertificateType, FailureReason, KeyAlgorithm, RenewalEligibility,
    RevocationReason,
};
use crate::meta::{self, FieldMeta, Schema, ValueType, WireModel};
use crate::primitives::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static SCHEMA: Schema = Schema {
    type_name: "CertificateDetail",
    fields: &[
        FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String),
        FieldMeta::payload("domain_name", "DomainName", ValueType::String),
        FieldMeta::payload(
            "subject_alternative_names",
            "SubjectAlternativeNames",
            ValueType::List,
        ),
        FieldMeta::payload(
            "domain_validation_options",
            "DomainValidationOptions",
            ValueType::List,
        )
        .nested(&DOMAIN_VALIDATION_SCHEMA),
        FieldMeta::payload("serial", "Serial", ValueType::String),
        FieldMeta::payload("subject", "Subject", ValueType::String),
        FieldMeta::payload("issuer", "Issuer", ValueType::String),
        FieldMeta::payload("created_at", "CreatedAt", ValueType::Timestamp),
        FieldMeta::payload("issued_at", "IssuedAt", ValueType::Timestamp),
        FieldMeta::payload("imported_at", "ImportedAt", ValueType::Timestamp),
        FieldMeta::payload("status", "Status", ValueType::Enum),
        FieldMeta::payload("revoked_at", "RevokedAt", ValueType::Timestamp),
        FieldMeta::payload("revocation_reason", "RevocationReason", ValueType::Enum),
        FieldMeta::payload("not_before", "NotBefore", ValueType::Timestamp),
        FieldMeta::payload("not_after", "NotAfter", ValueType::Timestamp),
        FieldMeta::payload("key_algorithm", "KeyAlgorithm", ValueType::Enum),
        FieldMeta::payload("signature_algorithm", "SignatureAlgorithm", ValueType::String),
        FieldMeta::payload("in_use_by", "InUseBy", ValueType::List),
        FieldMeta::payload("failure_reason", "FailureReason", ValueType::Enum),
        FieldMeta::payload("certificate_type", "Type", ValueType::Enum),
        FieldMeta::payload("renewal_summary", "RenewalSummary", ValueType::Structure)
            .nested(&RENEWAL_SCHEMA),
        FieldMeta::payload("key_usages", "KeyUsages", ValueType::List).nested(&KEY_USAGE_SCHEMA),
        FieldMeta::payload("extended_key_usages", "ExtendedKeyUsages", ValueType::List)
            .nested(&EXTENDED_KEY_USAGE_SCHEMA),
        FieldMeta::payload("renewal_eligibility", "RenewalEligibility", ValueType::Enum),
        FieldMeta::payload("options", "Options", ValueType::Structure).nested(&OPTIONS_SCHEMA),
    ],
};

/// Complete description of one certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CertificateDetail {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
    #[serde(rename = "DomainName", skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
    #[serde(rename = "SubjectAlternativeNames", skip_serializing_if = "Option::is_none")]
    subject_alternative_names: Option<Vec<String>>,
    #[serde(rename = "DomainValidationOptions", skip_serializing_if = "Option::is_none")]
    domain_validation_options: Option<Vec<DomainValidation>>,
    #[serde(rename = "Serial", skip_serializing_if = "Option::is_none")]
    serial: Option<String>,
    #[serde(rename = "Subject", skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(rename = "Issuer", skip_serializing_if = "Option::is_none")]
    issuer: Option<String>,
    #[serde(rename = "CreatedAt", skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime>,
    #[serde(rename = "IssuedAt", skip_serializing_if = "Option::is_none")]
    issued_at: Option<DateTime>,
    #[serde(rename = "ImportedAt", skip_serializing_if = "Option::is_none")]
    imported_at: Option<DateTime>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    status: Option<CertificateStatus>,
    #[serde(rename = "RevokedAt", skip_serializing_if = "Option::is_none")]
    revoked_at: Option<DateTime>,
    #[serde(rename = "RevocationReason", skip_serializing_if = "Option::is_none")]
    revocation_reason: Option<RevocationReason>,
    #[serde(rename = "NotBefore", skip_serializing_if = "Option::is_none")]
    not_before: Option<DateTime>,
    #[serde(rename = "NotAfter", skip_serializing_if = "Option::is_none")]
    not_after: Option<DateTime>,
    #[serde(rename = "KeyAlgorithm", skip_serializing_if = "Option::is_none")]
    key_algorithm: Option<KeyAlgorithm>,
    #[serde(rename = "SignatureAlgorithm", skip_serializing_if = "Option::is_none")]
    signature_algorithm: Option<String>,
    #[serde(rename = "InUseBy", skip_serializing_if = "Option::is_none")]
    in_use_by: Option<Vec<String>>,
    #[serde(rename = "FailureReason", skip_serializing_if = "Option::is_none")]
    failure_reason: Option<FailureReason>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    certificate_type: Option<CertificateType>,
    #[serde(rename = "RenewalSummary", skip_serializing_if = "Option::is_none")]
    renewal_summary: Option<RenewalSummary>,
    #[serde(rename = "KeyUsages", skip_serializing_if = "Option::is_none")]
    key_usages: Option<Vec<KeyUsage>>,
    #[serde(rename = "ExtendedKeyUsages", skip_serializing_if = "Option::is_none")]
    extended_key_usages: Option<Vec<ExtendedKeyUsage>>,
    #[serde(rename = "RenewalEligibility", skip_serializing_if = "Option::is_none")]
    renewal_eligibility: Option<RenewalEligibility>,
    #[serde(rename = "Options", skip_serializing_if = "Option::is_none")]
    options: Option<CertificateOptions>,
}

impl CertificateDetail {
    /// Start building a `CertificateDetail`.
    pub fn builder() -> CertificateDetailBuilder {
        CertificateDetailBuilder::default()
    }

    /// ARN of the certificate.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// Primary domain name.
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }

    /// Subject alternative names. Empty slice when never set.
    pub fn subject_alternative_names(&self) -> &[String] {
        self.subject_alternative_names.as_deref().unwrap_or_default()
    }

    /// True when the SAN list was explicitly provided.
    pub fn has_subject_alternative_names(&self) -> bool {
        self.subject_alternative_names.is_some()
    }

    /// Per-domain validation progress. Empty slice when never set.
    pub fn domain_validation_options(&self) -> &[DomainValidation] {
        self.domain_validation_options.as_deref().unwrap_or_default()
    }

    /// True when the validation list was explicitly provided.
    pub fn has_domain_validation_options(&self) -> bool {
        self.domain_validation_options.is_some()
    }

    /// Certificate serial number.
    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    /// X.500 subject name.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Name of the issuing authority.
    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    /// When the request was created.
    pub fn created_at(&self) -> Option<DateTime> {
        self.created_at
    }

    /// When the certificate was issued.
    pub fn issued_at(&self) -> Option<DateTime> {
        self.issued_at
    }

    /// When the certificate was imported.
    pub fn imported_at(&self) -> Option<DateTime> {
        self.imported_at
    }

    /// Lifecycle status.
    pub fn status(&self) -> Option<&CertificateStatus> {
        self.status.as_ref()
    }

    /// When the certificate was revoked.
    pub fn revoked_at(&self) -> Option<DateTime> {
        self.revoked_at
    }

    /// Why the certificate was revoked.
    pub fn revocation_reason(&self) -> Option<&RevocationReason> {
        self.revocation_reason.as_ref()
    }

    /// Start of the validity window.
    pub fn not_before(&self) -> Option<DateTime> {
        self.not_before
    }

    /// End of the validity window.
    pub fn not_after(&self) -> Option<DateTime> {
        self.not_after
    }

    /// Key-pair algorithm.
    pub fn key_algorithm(&self) -> Option<&KeyAlgorithm> {
        self.key_algorithm.as_ref()
    }

    /// Signature algorithm, as named by the issuer.
    pub fn signature_algorithm(&self) -> Option<&str> {
        self.signature_algorithm.as_deref()
    }

    /// ARNs of resources using the certificate. Empty slice when never
    /// set.
    pub fn in_use_by(&self) -> &[String] {
        self.in_use_by.as_deref().unwrap_or_default()
    }

    /// True when the in-use list was explicitly provided.
    pub fn has_in_use_by(&self) -> bool {
        self.in_use_by.is_some()
    }

    /// Why the request failed, when it failed.
    pub fn failure_reason(&self) -> Option<&FailureReason> {
        self.failure_reason.as_ref()
    }

    /// How the certificate entered the account.
    pub fn certificate_type(&self) -> Option<&CertificateType> {
        self.certificate_type.as_ref()
    }

    /// Progress of the most recent managed renewal.
    pub fn renewal_summary(&self) -> Option<&RenewalSummary> {
        self.renewal_summary.as_ref()
    }

    /// Key Usage extensions. Empty slice when never set.
    pub fn key_usages(&self) -> &[KeyUsage] {
        self.key_usages.as_deref().unwrap_or_default()
    }

    /// True when the Key Usage list was explicitly provided.
    pub fn has_key_usages(&self) -> bool {
        self.key_usages.is_some()
    }

    /// Extended Key Usage extensions. Empty slice when never set.
    pub fn extended_key_usages(&self) -> &[ExtendedKeyUsage] {
        self.extended_key_usages.as_deref().unwrap_or_default()
    }

    /// True when the Extended Key Usage list was explicitly provided.
    pub fn has_extended_key_usages(&self) -> bool {
        self.extended_key_usages.is_some()
    }

    /// Managed-renewal eligibility.
    pub fn renewal_eligibility(&self) -> Option<&RenewalEligibility> {
        self.renewal_eligibility.as_ref()
    }

    /// Per-certificate option settings.
    pub fn options(&self) -> Option<&CertificateOptions> {
        self.options.as_ref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> CertificateDetailBuilder {
        CertificateDetailBuilder {
            certificate_arn: self.certificate_arn.clone(),
            domain_name: self.domain_name.clone(),
            subject_alternative_names: self.subject_alternative_names.clone(),
            domain_validation_options: self.domain_validation_options.clone(),
            serial: self.serial.clone(),
            subject: self.subject.clone(),
            issuer: self.issuer.clone(),
            created_at: self.created_at,
            issued_at: self.issued_at,
            imported_at: self.imported_at,
            status: self.status.clone(),
            revoked_at: self.revoked_at,
            revocation_reason: self.revocation_reason.clone(),
            not_before: self.not_before,
            not_after: self.not_after,
            key_algorithm: self.key_algorithm.clone(),
            signature_algorithm: self.signature_algorithm.clone(),
            in_use_by: self.in_use_by.clone(),
            failure_reason: self.failure_reason.clone(),
            certificate_type: self.certificate_type.clone(),
            renewal_summary: self.renewal_summary.clone(),
            key_usages: self.key_usages.clone(),
            extended_key_usages: self.extended_key_usages.clone(),
            renewal_eligibility: self.renewal_eligibility.clone(),
            options: self.options.clone(),
        }
    }
}

impl WireModel for CertificateDetail {
    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl fmt::Display for CertificateDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`CertificateDetail`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateDetailBuilder {
    certificate_arn: Option<String>,
    domain_name: Option<String>,
    subject_alternative_names: Option<Vec<String>>,
    domain_validation_options: Option<Vec<DomainValidation>>,
    serial: Option<String>,
    subject: Option<String>,
    issuer: Option<String>,
    created_at: Option<DateTime>,
    issued_at: Option<DateTime>,
    imported_at: Option<DateTime>,
    status: Option<CertificateStatus>,
    revoked_at: Option<DateTime>,
    revocation_reason: Option<RevocationReason>,
    not_before: Option<DateTime>,
    not_after: Option<DateTime>,
    key_algorithm: Option<KeyAlgorithm>,
    signature_algorithm: Option<String>,
    in_use_by: Option<Vec<String>>,
    failure_reason: Option<FailureReason>,
    certificate_type: Option<CertificateType>,
    renewal_summary: Option<RenewalSummary>,
    key_usages: Option<Vec<KeyUsage>>,
    extended_key_usages: Option<Vec<ExtendedKeyUsage>>,
    renewal_eligibility: Option<RenewalEligibility>,
    options: Option<CertificateOptions>,
}

impl CertificateDetailBuilder {
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

    /// Append one per-domain validation entry, marking the list as set.
    pub fn domain_validation_options(mut self, input: impl Into<DomainValidation>) -> Self {
        self.domain_validation_options
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Set or clear the validation list.
    pub fn set_domain_validation_options(mut self, input: Option<Vec<DomainValidation>>) -> Self {
        self.domain_validation_options = input;
        self
    }

    /// Set the serial number.
    pub fn serial(mut self, input: impl Into<String>) -> Self {
        self.serial = Some(input.into());
        self
    }

    /// Set or clear the serial number.
    pub fn set_serial(mut self, input: Option<String>) -> Self {
        self.serial = input;
        self
    }

    /// Set the X.500 subject name.
    pub fn subject(mut self, input: impl Into<String>) -> Self {
        self.subject = Some(input.into());
        self
    }

    /// Set or clear the X.500 subject name.
    pub fn set_subject(mut self, input: Option<String>) -> Self {
        self.subject = input;
        self
    }

    /// Set the issuing authority name.
    pub fn issuer(mut self, input: impl Into<String>) -> Self {
        self.issuer = Some(input.into());
        self
    }

    /// Set or clear the issuing authority name.
    pub fn set_issuer(mut self, input: Option<String>) -> Self {
        self.issuer = input;
        self
    }

    /// Set the request-creation timestamp.
    pub fn created_at(mut self, input: DateTime) -> Self {
        self.created_at = Some(input);
        self
    }

    /// Set or clear the request-creation timestamp.
    pub fn set_created_at(mut self, input: Option<DateTime>) -> Self {
        self.created_at = input;
        self
    }

    /// Set the issuance timestamp.
    pub fn issued_at(mut self, input: DateTime) -> Self {
        self.issued_at = Some(input);
        self
    }

    /// Set or clear the issuance timestamp.
    pub fn set_issued_at(mut self, input: Option<DateTime>) -> Self {
        self.issued_at = input;
        self
    }

    /// Set the import timestamp.
    pub fn imported_at(mut self, input: DateTime) -> Self {
        self.imported_at = Some(input);
        self
    }

    /// Set or clear the import timestamp.
    pub fn set_imported_at(mut self, input: Option<DateTime>) -> Self {
        self.imported_at = input;
        self
    }

    /// Set the lifecycle status.
    pub fn status(mut self, input: impl Into<CertificateStatus>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Set or clear the lifecycle status.
    pub fn set_status(mut self, input: Option<CertificateStatus>) -> Self {
        self.status = input;
        self
    }

    /// Set the revocation timestamp.
    pub fn revoked_at(mut self, input: DateTime) -> Self {
        self.revoked_at = Some(input);
        self
    }

    /// Set or clear the revocation timestamp.
    pub fn set_revoked_at(mut self, input: Option<DateTime>) -> Self {
        self.revoked_at = input;
        self
    }

    /// Set the revocation reason.
    pub fn revocation_reason(mut self, input: impl Into<RevocationReason>) -> Self {
        self.revocation_reason = Some(input.into());
        self
    }

    /// Set or clear the revocation reason.
    pub fn set_revocation_reason(mut self, input: Option<RevocationReason>) -> Self {
        self.revocation_reason = input;
        self
    }

    /// Set the start of the validity window.
    pub fn not_before(mut self, input: DateTime) -> Self {
        self.not_before = Some(input);
        self
    }

    /// Set or clear the start of the validity window.
    pub fn set_not_before(mut self, input: Option<DateTime>) -> Self {
        self.not_before = input;
        self
    }

    /// Set the end of the validity window.
    pub fn not_after(mut self, input: DateTime) -> Self {
        self.not_after = Some(input);
        self
    }

    /// Set or clear the end of the validity window.
    pub fn set_not_after(mut self, input: Option<DateTime>) -> Self {
        self.not_after = input;
        self
    }

    /// Set the key-pair algorithm.
    pub fn key_algorithm(mut self, input: impl Into<KeyAlgorithm>) -> Self {
        self.key_algorithm = Some(input.into());
        self
    }

    /// Set or clear the key-pair algorithm.
    pub fn set_key_algorithm(mut self, input: Option<KeyAlgorithm>) -> Self {
        self.key_algorithm = input;
        self
    }

    /// Set the signature algorithm.
    pub fn signature_algorithm(mut self, input: impl Into<String>) -> Self {
        self.signature_algorithm = Some(input.into());
        self
    }

    /// Set or clear the signature algorithm.
    pub fn set_signature_algorithm(mut self, input: Option<String>) -> Self {
        self.signature_algorithm = input;
        self
    }

    /// Append one using-resource ARN, marking the list as set.
    pub fn in_use_by(mut self, input: impl Into<String>) -> Self {
        self.in_use_by.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Set or clear the using-resource list.
    pub fn set_in_use_by(mut self, input: Option<Vec<String>>) -> Self {
        self.in_use_by = input;
        self
    }

    /// Set the failure reason.
    pub fn failure_reason(mut self, input: impl Into<FailureReason>) -> Self {
        self.failure_reason = Some(input.into());
        self
    }

    /// Set or clear the failure reason.
    pub fn set_failure_reason(mut self, input: Option<FailureReason>) -> Self {
        self.failure_reason = input;
        self
    }

    /// Set the certificate type.
    pub fn certificate_type(mut self, input: impl Into<CertificateType>) -> Self {
        self.certificate_type = Some(input.into());
        self
    }

    /// Set or clear the certificate type.
    pub fn set_certificate_type(mut self, input: Option<CertificateType>) -> Self {
        self.certificate_type = input;
        self
    }

    /// Set the renewal summary.
    pub fn renewal_summary(mut self, input: impl Into<RenewalSummary>) -> Self {
        self.renewal_summary = Some(input.into());
        self
    }

    /// Build the renewal summary in place through a fresh builder.
    pub fn renewal_summary_with(
        self,
        f: impl FnOnce(RenewalSummaryBuilder) -> RenewalSummaryBuilder,
    ) -> Self {
        let summary = f(RenewalSummary::builder()).build();
        self.renewal_summary(summary)
    }

    /// Set or clear the renewal summary.
    pub fn set_renewal_summary(mut self, input: Option<RenewalSummary>) -> Self {
        self.renewal_summary = input;
        self
    }

    /// Append one Key Usage extension, marking the list as set.
    pub fn key_usages(mut self, input: impl Into<KeyUsage>) -> Self {
        self.key_usages.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Set or clear the Key Usage list.
    pub fn set_key_usages(mut self, input: Option<Vec<KeyUsage>>) -> Self {
        self.key_usages = input;
        self
    }

    /// Append one Extended Key Usage extension, marking the list as set.
    pub fn extended_key_usages(mut self, input: impl Into<ExtendedKeyUsage>) -> Self {
        self.extended_key_usages
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Set or clear the Extended Key Usage list.
    pub fn set_extended_key_usages(mut self, input: Option<Vec<ExtendedKeyUsage>>) -> Self {
        self.extended_key_usages = input;
        self
    }

    /// Set the managed-renewal eligibility.
    pub fn renewal_eligibility(mut self, input: impl Into<RenewalEligibility>) -> Self {
        self.renewal_eligibility = Some(input.into());
        self
    }

    /// Set or clear the managed-renewal eligibility.
    pub fn set_renewal_eligibility(mut self, input: Option<RenewalEligibility>) -> Self {
        self.renewal_eligibility = input;
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

    /// Snapshot the current state into a [`CertificateDetail`].
    pub fn build(self) -> CertificateDetail {
        CertificateDetail {
            certificate_arn: self.certificate_arn,
            domain_name: self.domain_name,
            subject_alternative_names: self.subject_alternative_names,
            domain_validation_options: self.domain_validation_options,
            serial: self.serial,
            subject: self.subject,
            issuer: self.issuer,
            created_at: self.created_at,
            issued_at: self.issued_at,
            imported_at: self.imported_at,
            status: self.status,
            revoked_at: self.revoked_at,
            revocation_reason: self.revocation_reason,
            not_before: self.not_before,
            not_after: self.not_after,
            key_algorithm: self.key_algorithm,
            signature_algorithm: self.signature_algorithm,
            in_use_by: self.in_use_by,
            failure_reason: self.failure_reason,
            certificate_type: self.certificate_type,
            renewal_summary: self.renewal_summary,
            key_usages: self.key_usages,
            extended_key_usages: self.extended_key_usages,
            renewal_eligibility: self.renewal_eligibility,
            options: self.options,
        }
    }
}

impl From<CertificateDetailBuilder> for CertificateDetail {
    fn from(builder: CertificateDetailBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{DomainStatus, RecordType, ValidationMethod};

    fn sample_detail() -> CertificateDetail {
        CertificateDetail::builder()
            .certificate_arn("arn:certmgr:cert/abc123")
            .domain_name("example.com")
            .subject_alternative_names("www.example.com")
            .subject_alternative_names("api.example.com")
            .status(CertificateStatus::Issued)
            .certificate_type(CertificateType::AuthorityIssued)
            .key_algorithm(KeyAlgorithm::Rsa2048)
            .signature_algorithm("SHA256WITHRSA")
            .domain_validation_options(
                DomainValidation::builder()
                    .domain_name("example.com")
                    .validation_status(DomainStatus::Success)
                    .validation_method(ValidationMethod::Dns)
                    .resource_record_with(|r| {
                        r.name("_x1.example.com")
                            .record_type(RecordType::Cname)
                            .value("_x2.certmgr-validations.net")
                    }),
            )
            .renewal_summary_with(|r| r.renewal_status("PENDING_AUTO_RENEWAL"))
            .options_with(|o| o.certificate_transparency_logging_preference("ENABLED"))
            .build()
    }

    #[test]
    fn test_round_trip_through_builder() {
        let detail = sample_detail();
        assert_eq!(detail.to_builder().build(), detail);
    }

    #[test]
    fn test_round_trip_through_json() {
        let detail = sample_detail();
        let json = serde_json::to_string(&detail).unwrap();
        let back: CertificateDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back, detail);
    }

    #[test]
    fn test_display_renders_nested_records() {
        let detail = sample_detail();
        let rendered = detail.to_string();
        assert!(rendered.starts_with("CertificateDetail("));
        assert!(rendered.contains("CertificateArn=arn:certmgr:cert/abc123"));
        assert!(rendered.contains("DomainValidation("));
        assert!(rendered.contains("ResourceRecord("));
    }

    #[test]
    fn test_unset_lists_are_empty_and_unflagged() {
        let detail = CertificateDetail::builder().build();
        assert!(detail.key_usages().is_empty());
        assert!(!detail.has_key_usages());
        assert!(detail.in_use_by().is_empty());
        assert!(!detail.has_in_use_by());
    }
}
