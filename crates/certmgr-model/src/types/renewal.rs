//! Managed-renewal summary record

use super::domain::{DomainValidation, DOMAIN_VALIDATION_SCHEMA};
use crate::enums::{FailureReason, RenewalStatus};
use crate::meta::{self, FieldMeta, Schema, ValueType, WireModel};
use crate::primitives::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static SCHEMA: Schema = Schema {
    type_name: "RenewalSummary",
    fields: &[
        FieldMeta::payload("renewal_status", "RenewalStatus", ValueType::Enum),
        FieldMeta::payload("domain_validation_options", "DomainValidationOptions", ValueType::List)
            .nested(&DOMAIN_VALIDATION_SCHEMA),
        FieldMeta::payload("renewal_status_reason", "RenewalStatusReason", ValueType::Enum),
        FieldMeta::payload("updated_at", "UpdatedAt", ValueType::Timestamp),
    ],
};

/// Progress of the most recent managed renewal of a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenewalSummary {
    #[serde(rename = "RenewalStatus", skip_serializing_if = "Option::is_none")]
    renewal_status: Option<RenewalStatus>,
    #[serde(rename = "DomainValidationOptions", skip_serializing_if = "Option::is_none")]
    domain_validation_options: Option<Vec<DomainValidation>>,
    #[serde(rename = "RenewalStatusReason", skip_serializing_if = "Option::is_none")]
    renewal_status_reason: Option<FailureReason>,
    #[serde(rename = "UpdatedAt", skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime>,
}

impl RenewalSummary {
    /// Start building a `RenewalSummary`.
    pub fn builder() -> RenewalSummaryBuilder {
        RenewalSummaryBuilder::default()
    }

    /// Renewal state.
    pub fn renewal_status(&self) -> Option<&RenewalStatus> {
        self.renewal_status.as_ref()
    }

    /// Per-domain validation progress for the renewal. Empty slice when
    /// never set.
    pub fn domain_validation_options(&self) -> &[DomainValidation] {
        self.domain_validation_options.as_deref().unwrap_or_default()
    }

    /// True when the per-domain list was explicitly provided.
    pub fn has_domain_validation_options(&self) -> bool {
        self.domain_validation_options.is_some()
    }

    /// Why the renewal is not progressing, when it is not.
    pub fn renewal_status_reason(&self) -> Option<&FailureReason> {
        self.renewal_status_reason.as_ref()
    }

    /// When this summary was last updated.
    pub fn updated_at(&self) -> Option<DateTime> {
        self.updated_at
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> RenewalSummaryBuilder {
        RenewalSummaryBuilder {
            renewal_status: self.renewal_status.clone(),
            domain_validation_options: self.domain_validation_options.clone(),
            renewal_status_reason: self.renewal_status_reason.clone(),
            updated_at: self.updated_at,
        }
    }
}

impl WireModel for RenewalSummary {
    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl fmt::Display for RenewalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`RenewalSummary`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenewalSummaryBuilder {
    renewal_status: Option<RenewalStatus>,
    domain_validation_options: Option<Vec<DomainValidation>>,
    renewal_status_reason: Option<FailureReason>,
    updated_at: Option<DateTime>,
}

impl RenewalSummaryBuilder {
    /// Set the renewal state.
    pub fn renewal_status(mut self, input: impl Into<RenewalStatus>) -> Self {
        self.renewal_status = Some(input.into());
        self
    }

    /// Set or clear the renewal state.
    pub fn set_renewal_status(mut self, input: Option<RenewalStatus>) -> Self {
        self.renewal_status = input;
        self
    }

    /// Append one per-domain validation entry, marking the list as set.
    pub fn domain_validation_options(mut self, input: impl Into<DomainValidation>) -> Self {
        self.domain_validation_options
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Set or clear the whole per-domain list.
    pub fn set_domain_validation_options(mut self, input: Option<Vec<DomainValidation>>) -> Self {
        self.domain_validation_options = input;
        self
    }

    /// Set the stall reason.
    pub fn renewal_status_reason(mut self, input: impl Into<FailureReason>) -> Self {
        self.renewal_status_reason = Some(input.into());
        self
    }

    /// Set or clear the stall reason.
    pub fn set_renewal_status_reason(mut self, input: Option<FailureReason>) -> Self {
        self.renewal_status_reason = input;
        self
    }

    /// Set the last-updated timestamp.
    pub fn updated_at(mut self, input: DateTime) -> Self {
        self.updated_at = Some(input);
        self
    }

    /// Set or clear the last-updated timestamp.
    pub fn set_updated_at(mut self, input: Option<DateTime>) -> Self {
        self.updated_at = input;
        self
    }

    /// Snapshot the current state into a [`RenewalSummary`].
    pub fn build(self) -> RenewalSummary {
        RenewalSummary {
            renewal_status: self.renewal_status,
            domain_validation_options: self.domain_validation_options,
            renewal_status_reason: self.renewal_status_reason,
            updated_at: self.updated_at,
        }
    }
}

impl From<RenewalSummaryBuilder> for RenewalSummary {
    fn from(builder: RenewalSummaryBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_list_appender() {
        let summary = RenewalSummary::builder()
            .renewal_status(RenewalStatus::PendingValidation)
            .domain_validation_options(DomainValidation::builder().domain_name("example.com"))
            .domain_validation_options(DomainValidation::builder().domain_name("www.example.com"))
            .build();
        assert_eq!(summary.domain_validation_options().len(), 2);
        assert!(summary.has_domain_validation_options());
        assert_eq!(summary.to_builder().build(), summary);
    }
}
