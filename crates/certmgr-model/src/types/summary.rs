//! Certificate listing summary record
//!
//! The abbreviated view returned by the listing operation. Enum-valued
//! lists here hold the extension names only; the full structures live on
//! [`CertificateDetail`](super::detail::CertificateDetail).

use crate::enums::{
    CertificateStatus, CertificateType, ExtendedKeyUsageName, KeyAlgorithm, KeyUsageName,
    RenewalEligibility,
};
use crate::meta::{self, FieldMeta, Schema, ValueType, WireModel};
use crate::primitives::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static SCHEMA: Schema = Schema {
    type_name: "CertificateSummary",
    fields: &[
        FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String),
        FieldMeta::payload("domain_name", "DomainName", ValueType::String),
        FieldMeta::payload(
            "subject_alternative_name_summaries",
            "SubjectAlternativeNameSummaries",
            ValueType::List,
        ),
        FieldMeta::payload(
            "has_additional_subject_alternative_names",
            "HasAdditionalSubjectAlternativeNames",
            ValueType::Boolean,
        ),
        FieldMeta::payload("status", "Status", ValueType::Enum),
        FieldMeta::payload("certificate_type", "Type", ValueType::Enum),
        FieldMeta::payload("key_algorithm", "KeyAlgorithm", ValueType::Enum),
        FieldMeta::payload("key_usages", "KeyUsages", ValueType::List),
        FieldMeta::payload("extended_key_usages", "ExtendedKeyUsages", ValueType::List),
        FieldMeta::payload("in_use", "InUse", ValueType::Boolean),
        FieldMeta::payload("exported", "Exported", ValueType::Boolean),
        FieldMeta::payload("renewal_eligibility", "RenewalEligibility", ValueType::Enum),
        FieldMeta::payload("not_before", "NotBefore", ValueType::Timestamp),
        FieldMeta::payload("not_after", "NotAfter", ValueType::Timestamp),
        FieldMeta::payload("created_at", "CreatedAt", ValueType::Timestamp),
        FieldMeta::payload("issued_at", "IssuedAt", ValueType::Timestamp),
        FieldMeta::payload("imported_at", "ImportedAt", ValueType::Timestamp),
        FieldMeta::payload("revoked_at", "RevokedAt", ValueType::Timestamp),
    ],
};

/// Abbreviated description of one certificate in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CertificateSummary {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
    #[serde(rename = "DomainName", skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
    #[serde(
        rename = "SubjectAlternativeNameSummaries",
        skip_serializing_if = "Option::is_none"
    )]
    subject_alternative_name_summaries: Option<Vec<String>>,
    #[serde(
        rename = "HasAdditionalSubjectAlternativeNames",
        skip_serializing_if = "Option::is_none"
    )]
    has_additional_subject_alternative_names: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    status: Option<CertificateStatus>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    certificate_type: Option<CertificateType>,
    #[serde(rename = "KeyAlgorithm", skip_serializing_if = "Option::is_none")]
    key_algorithm: Option<KeyAlgorithm>,
    #[serde(rename = "KeyUsages", skip_serializing_if = "Option::is_none")]
    key_usages: Option<Vec<KeyUsageName>>,
    #[serde(rename = "ExtendedKeyUsages", skip_serializing_if = "Option::is_none")]
    extended_key_usages: Option<Vec<ExtendedKeyUsageName>>,
    #[serde(rename = "InUse", skip_serializing_if = "Option::is_none")]
    in_use: Option<bool>,
    #[serde(rename = "Exported", skip_serializing_if = "Option::is_none")]
    exported: Option<bool>,
    #[serde(rename = "RenewalEligibility", skip_serializing_if = "Option::is_none")]
    renewal_eligibility: Option<RenewalEligibility>,
    #[serde(rename = "NotBefore", skip_serializing_if = "Option::is_none")]
    not_before: Option<DateTime>,
    #[serde(rename = "NotAfter", skip_serializing_if = "Option::is_none")]
    not_after: Option<DateTime>,
    #[serde(rename = "CreatedAt", skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime>,
    #[serde(rename = "IssuedAt", skip_serializing_if = "Option::is_none")]
    issued_at: Option<DateTime>,
    #[serde(rename = "ImportedAt", skip_serializing_if = "Option::is_none")]
    imported_at: Option<DateTime>,
    #[serde(rename = "RevokedAt", skip_serializing_if = "Option::is_none")]
    revoked_at: Option<DateTime>,
}

impl CertificateSummary {
    /// Start building a `CertificateSummary`.
    pub fn builder() -> CertificateSummaryBuilder {
        CertificateSummaryBuilder::default()
    }

    /// ARN of the certificate.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// Primary domain name.
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }

    /// First few subject alternative names. Empty slice when never set.
    pub fn subject_alternative_name_summaries(&self) -> &[String] {
        self.subject_alternative_name_summaries
            .as_deref()
            .unwrap_or_default()
    }

    /// True when the SAN summary list was explicitly provided.
    pub fn has_subject_alternative_name_summaries(&self) -> bool {
        self.subject_alternative_name_summaries.is_some()
    }

    /// True when the certificate carries more SANs than the summary shows.
    pub fn has_additional_subject_alternative_names(&self) -> Option<bool> {
        self.has_additional_subject_alternative_names
    }

    /// Lifecycle status.
    pub fn status(&self) -> Option<&CertificateStatus> {
        self.status.as_ref()
    }

    /// How the certificate entered the account.
    pub fn certificate_type(&self) -> Option<&CertificateType> {
        self.certificate_type.as_ref()
    }

    /// Key-pair algorithm.
    pub fn key_algorithm(&self) -> Option<&KeyAlgorithm> {
        self.key_algorithm.as_ref()
    }

    /// Key Usage extension names. Empty slice when never set.
    pub fn key_usages(&self) -> &[KeyUsageName] {
        self.key_usages.as_deref().unwrap_or_default()
    }

    /// True when the key-usage list was explicitly provided.
    pub fn has_key_usages(&self) -> bool {
        self.key_usages.is_some()
    }

    /// Extended Key Usage extension names. Empty slice when never set.
    pub fn extended_key_usages(&self) -> &[ExtendedKeyUsageName] {
        self.extended_key_usages.as_deref().unwrap_or_default()
    }

    /// True when the extended-key-usage list was explicitly provided.
    pub fn has_extended_key_usages(&self) -> bool {
        self.extended_key_usages.is_some()
    }

    /// True when any resource currently references the certificate.
    pub fn in_use(&self) -> Option<bool> {
        self.in_use
    }

    /// True when the private key has been exported.
    pub fn exported(&self) -> Option<bool> {
        self.exported
    }

    /// Managed-renewal eligibility.
    pub fn renewal_eligibility(&self) -> Option<&RenewalEligibility> {
        self.renewal_eligibility.as_ref()
    }

    /// Start of the validity window.
    pub fn not_before(&self) -> Option<DateTime> {
        self.not_before
    }

    /// End of the validity window.
    pub fn not_after(&self) -> Option<DateTime> {
        self.not_after
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

    /// When the certificate was revoked.
    pub fn revoked_at(&self) -> Option<DateTime> {
        self.revoked_at
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> CertificateSummaryBuilder {
        CertificateSummaryBuilder {
            certificate_arn: self.certificate_arn.clone(),
            domain_name: self.domain_name.clone(),
            subject_alternative_name_summaries: self.subject_alternative_name_summaries.clone(),
            has_additional_subject_alternative_names: self.has_additional_subject_alternative_names,
            status: self.status.clone(),
            certificate_type: self.certificate_type.clone(),
            key_algorithm: self.key_algorithm.clone(),
            key_usages: self.key_usages.clone(),
            extended_key_usages: self.extended_key_usages.clone(),
            in_use: self.in_use,
            exported: self.exported,
            renewal_eligibility: self.renewal_eligibility.clone(),
            not_before: self.not_before,
            not_after: self.not_after,
            created_at: self.created_at,
            issued_at: self.issued_at,
            imported_at: self.imported_at,
            revoked_at: self.revoked_at,
        }
    }
}

impl WireModel for CertificateSummary {
    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl fmt::Display for CertificateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`CertificateSummary`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateSummaryBuilder {
    certificate_arn: Option<String>,
    domain_name: Option<String>,
    subject_alternative_name_summaries: Option<Vec<String>>,
    has_additional_subject_alternative_names: Option<bool>,
    status: Option<CertificateStatus>,
    certificate_type: Option<CertificateType>,
    key_algorithm: Option<KeyAlgorithm>,
    key_usages: Option<Vec<KeyUsageName>>,
    extended_key_usages: Option<Vec<ExtendedKeyUsageName>>,
    in_use: Option<bool>,
    exported: Option<bool>,
    renewal_eligibility: Option<RenewalEligibility>,
    not_before: Option<DateTime>,
    not_after: Option<DateTime>,
    created_at: Option<DateTime>,
    issued_at: Option<DateTime>,
    imported_at: Option<DateTime>,
    revoked_at: Option<DateTime>,
}

impl CertificateSummaryBuilder {
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

    /// Append one SAN summary entry, marking the list as set.
    pub fn subject_alternative_name_summaries(mut self, input: impl Into<String>) -> Self {
        self.subject_alternative_name_summaries
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Set or clear the SAN summary list.
    pub fn set_subject_alternative_name_summaries(mut self, input: Option<Vec<String>>) -> Self {
        self.subject_alternative_name_summaries = input;
        self
    }

    /// Set the more-SANs-than-shown flag.
    pub fn has_additional_subject_alternative_names(mut self, input: bool) -> Self {
        self.has_additional_subject_alternative_names = Some(input);
        self
    }

    /// Set or clear the more-SANs-than-shown flag.
    pub fn set_has_additional_subject_alternative_names(mut self, input: Option<bool>) -> Self {
        self.has_additional_subject_alternative_names = input;
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

    /// Append one Key Usage name, marking the list as set.
    pub fn key_usages(mut self, input: impl Into<KeyUsageName>) -> Self {
        self.key_usages.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Set or clear the Key Usage list.
    pub fn set_key_usages(mut self, input: Option<Vec<KeyUsageName>>) -> Self {
        self.key_usages = input;
        self
    }

    /// Append one Extended Key Usage name, marking the list as set.
    pub fn extended_key_usages(mut self, input: impl Into<ExtendedKeyUsageName>) -> Self {
        self.extended_key_usages
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Set or clear the Extended Key Usage list.
    pub fn set_extended_key_usages(mut self, input: Option<Vec<ExtendedKeyUsageName>>) -> Self {
        self.extended_key_usages = input;
        self
    }

    /// Set the in-use flag.
    pub fn in_use(mut self, input: bool) -> Self {
        self.in_use = Some(input);
        self
    }

    /// Set or clear the in-use flag.
    pub fn set_in_use(mut self, input: Option<bool>) -> Self {
        self.in_use = input;
        self
    }

    /// Set the exported flag.
    pub fn exported(mut self, input: bool) -> Self {
        self.exported = Some(input);
        self
    }

    /// Set or clear the exported flag.
    pub fn set_exported(mut self, input: Option<bool>) -> Self {
        self.exported = input;
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

    /// Snapshot the current state into a [`CertificateSummary`].
    pub fn build(self) -> CertificateSummary {
        CertificateSummary {
            certificate_arn: self.certificate_arn,
            domain_name: self.domain_name,
            subject_alternative_name_summaries: self.subject_alternative_name_summaries,
            has_additional_subject_alternative_names: self.has_additional_subject_alternative_names,
            status: self.status,
            certificate_type: self.certificate_type,
            key_algorithm: self.key_algorithm,
            key_usages: self.key_usages,
            extended_key_usages: self.extended_key_usages,
            in_use: self.in_use,
            exported: self.exported,
            renewal_eligibility: self.renewal_eligibility,
            not_before: self.not_before,
            not_after: self.not_after,
            created_at: self.created_at,
            issued_at: self.issued_at,
            imported_at: self.imported_at,
            revoked_at: self.revoked_at,
        }
    }
}

impl From<CertificateSummaryBuilder> for CertificateSummary {
    fn from(builder: CertificateSummaryBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let summary = CertificateSummary::builder()
            .certificate_arn("arn:certmgr:cert/abc")
            .domain_name("example.com")
            .status(CertificateStatus::Issued)
            .key_usages(KeyUsageName::DigitalSignature)
            .in_use(true)
            .build();
        assert_eq!(summary.to_builder().build(), summary);
    }

    #[test]
    fn test_unrecognized_status_survives_serde() {
        let summary = CertificateSummary::builder().status("ARCHIVED").build();
        let json = serde_json::to_string(&summary).unwrap();
        let back: CertificateSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status().unwrap().as_str(), "ARCHIVED");
    }
}
