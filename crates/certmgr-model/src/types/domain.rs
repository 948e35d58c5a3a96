//! Domain-validation records
//!
//! `DomainValidation` is the fullest structure record in the model: a
//! three-state list field, a nested structure with a closure-style
//! convenience setter, and enum-typed fields all appear here.
//!
//! Copyright (c) 2025 Certmgr Team
//! Licensed under the Apache-2.0 license

use crate::enums::{DomainStatus, RecordType, ValidationMethod};
use crate::meta::{self, FieldMeta, Schema, ValueType, WireModel};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static RESOURCE_RECORD_SCHEMA: Schema = Schema {
    type_name: "ResourceRecord",
    fields: &[
        FieldMeta::payload("name", "Name", ValueType::String),
        FieldMeta::payload("record_type", "Type", ValueType::Enum),
        FieldMeta::payload("value", "Value", ValueType::String),
    ],
};

pub(crate) static DOMAIN_VALIDATION_OPTION_SCHEMA: Schema = Schema {
    type_name: "DomainValidationOption",
    fields: &[
        FieldMeta::payload("domain_name", "DomainName", ValueType::String),
        FieldMeta::payload("validation_domain", "ValidationDomain", ValueType::String),
    ],
};

pub(crate) static DOMAIN_VALIDATION_SCHEMA: Schema = Schema {
    type_name: "DomainValidation",
    fields: &[
        FieldMeta::payload("domain_name", "DomainName", ValueType::String),
        FieldMeta::payload("validation_emails", "ValidationEmails", ValueType::List),
        FieldMeta::payload("validation_domain", "ValidationDomain", ValueType::String),
        FieldMeta::payload("validation_status", "ValidationStatus", ValueType::Enum),
        FieldMeta::payload("resource_record", "ResourceRecord", ValueType::Structure)
            .nested(&RESOURCE_RECORD_SCHEMA),
        FieldMeta::payload("validation_method", "ValidationMethod", ValueType::Enum),
    ],
};

/// The DNS record a caller must publish to prove domain ownership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    record_type: Option<RecordType>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl ResourceRecord {
    /// Start building a `ResourceRecord`.
    pub fn builder() -> ResourceRecordBuilder {
        ResourceRecordBuilder::default()
    }

    /// Record name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Record type.
    pub fn record_type(&self) -> Option<&RecordType> {
        self.record_type.as_ref()
    }

    /// Record value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ResourceRecordBuilder {
        ResourceRecordBuilder {
            name: self.name.clone(),
            record_type: self.record_type.clone(),
            value: self.value.clone(),
        }
    }
}

impl WireModel for ResourceRecord {
    fn schema() -> &'static Schema {
        &RESOURCE_RECORD_SCHEMA
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ResourceRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRecordBuilder {
    name: Option<String>,
    record_type: Option<RecordType>,
    value: Option<String>,
}

impl ResourceRecordBuilder {
    /// Set the record name.
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Set or clear the record name.
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.name = input;
        self
    }

    /// Set the record type.
    pub fn record_type(mut self, input: impl Into<RecordType>) -> Self {
        self.record_type = Some(input.into());
        self
    }

    /// Set or clear the record type.
    pub fn set_record_type(mut self, input: Option<RecordType>) -> Self {
        self.record_type = input;
        self
    }

    /// Set the record value.
    pub fn value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }

    /// Set or clear the record value.
    pub fn set_value(mut self, input: Option<String>) -> Self {
        self.value = input;
        self
    }

    /// Snapshot the current state into a [`ResourceRecord`].
    pub fn build(self) -> ResourceRecord {
        ResourceRecord {
            name: self.name,
            record_type: self.record_type,
            value: self.value,
        }
    }
}

impl From<ResourceRecordBuilder> for ResourceRecord {
    fn from(builder: ResourceRecordBuilder) -> Self {
        builder.build()
    }
}

/// Caller-supplied override of where validation email is sent for one
/// domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainValidationOption {
    #[serde(rename = "DomainName", skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
    #[serde(rename = "ValidationDomain", skip_serializing_if = "Option::is_none")]
    validation_domain: Option<String>,
}

impl DomainValidationOption {
    /// Start building a `DomainValidationOption`.
    pub fn builder() -> DomainValidationOptionBuilder {
        DomainValidationOptionBuilder::default()
    }

    /// The domain being validated.
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }

    /// The domain that receives the validation email.
    pub fn validation_domain(&self) -> Option<&str> {
        self.validation_domain.as_deref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> DomainValidationOptionBuilder {
        DomainValidationOptionBuilder {
            domain_name: self.domain_name.clone(),
            validation_domain: self.validation_domain.clone(),
        }
    }
}

impl WireModel for DomainValidationOption {
    fn schema() -> &'static Schema {
        &DOMAIN_VALIDATION_OPTION_SCHEMA
    }
}

impl fmt::Display for DomainValidationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`DomainValidationOption`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainValidationOptionBuilder {
    domain_name: Option<String>,
    validation_domain: Option<String>,
}

impl DomainValidationOptionBuilder {
    /// Set the domain being validated.
    pub fn domain_name(mut self, input: impl Into<String>) -> Self {
        self.domain_name = Some(input.into());
        self
    }

    /// Set or clear the domain being validated.
    pub fn set_domain_name(mut self, input: Option<String>) -> Self {
        self.domain_name = input;
        self
    }

    /// Set the domain that receives the validation email.
    pub fn validation_domain(mut self, input: impl Into<String>) -> Self {
        self.validation_domain = Some(input.into());
        self
    }

    /// Set or clear the domain that receives the validation email.
    pub fn set_validation_domain(mut self, input: Option<String>) -> Self {
        self.validation_domain = input;
        self
    }

    /// Snapshot the current state into a [`DomainValidationOption`].
    pub fn build(self) -> DomainValidationOption {
        DomainValidationOption {
            domain_name: self.domain_name,
            validation_domain: self.validation_domain,
        }
    }
}

impl From<DomainValidationOptionBuilder> for DomainValidationOption {
    fn from(builder: DomainValidationOptionBuilder) -> Self {
        builder.build()
    }
}

/// Validation state of one domain on a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainValidation {
    #[serde(rename = "DomainName", skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
    #[serde(rename = "ValidationEmails", skip_serializing_if = "Option::is_none")]
    validation_emails: Option<Vec<String>>,
    #[serde(rename = "ValidationDomain", skip_serializing_if = "Option::is_none")]
    validation_domain: Option<String>,
    #[serde(rename = "ValidationStatus", skip_serializing_if = "Option::is_none")]
    validation_status: Option<DomainStatus>,
    #[serde(rename = "ResourceRecord", skip_serializing_if = "Option::is_none")]
    resource_record: Option<ResourceRecord>,
    #[serde(rename = "ValidationMethod", skip_serializing_if = "Option::is_none")]
    validation_method: Option<ValidationMethod>,
}

impl DomainValidation {
    /// Start building a `DomainValidation`.
    pub fn builder() -> DomainValidationBuilder {
        DomainValidationBuilder::default()
    }

    /// The domain being validated.
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }

    /// Addresses the validation email was sent to. Empty slice when the
    /// field was never set; see [`has_validation_emails`](Self::has_validation_emails).
    pub fn validation_emails(&self) -> &[String] {
        self.validation_emails.as_deref().unwrap_or_default()
    }

    /// True when the validation-email list was explicitly provided, even
    /// if it was provided empty.
    pub fn has_validation_emails(&self) -> bool {
        self.validation_emails.is_some()
    }

    /// The domain the validation email is sent to.
    pub fn validation_domain(&self) -> Option<&str> {
        self.validation_domain.as_deref()
    }

    /// Validation state of this domain.
    pub fn validation_status(&self) -> Option<&DomainStatus> {
        self.validation_status.as_ref()
    }

    /// The DNS record to publish for DNS validation.
    pub fn resource_record(&self) -> Option<&ResourceRecord> {
        self.resource_record.as_ref()
    }

    /// The validation mechanism in use.
    pub fn validation_method(&self) -> Option<&ValidationMethod> {
        self.validation_method.as_ref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> DomainValidationBuilder {
        DomainValidationBuilder {
            domain_name: self.domain_name.clone(),
            validation_emails: self.validation_emails.clone(),
            validation_domain: self.validation_domain.clone(),
            validation_status: self.validation_status.clone(),
            resource_record: self.resource_record.clone(),
            validation_method: self.validation_method.clone(),
        }
    }
}

impl WireModel for DomainValidation {
    fn schema() -> &'static Schema {
        &DOMAIN_VALIDATION_SCHEMA
    }
}

impl fmt::Display for DomainValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`DomainValidation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainValidationBuilder {
    domain_name: Option<String>,
    validation_emails: Option<Vec<String>>,
    validation_domain: Option<String>,
    validation_status: Option<DomainStatus>,
    resource_record: Option<ResourceRecord>,
    validation_method: Option<ValidationMethod>,
}

impl DomainValidationBuilder {
    /// Set the domain being validated.
    pub fn domain_name(mut self, input: impl Into<String>) -> Self {
        self.domain_name = Some(input.into());
        self
    }

    /// Set or clear the domain being validated.
    pub fn set_domain_name(mut self, input: Option<String>) -> Self {
        self.domain_name = input;
        self
    }

    /// Append one validation-email address, marking the list as set.
    pub fn validation_emails(mut self, input: impl Into<String>) -> Self {
        self.validation_emails
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Set or clear the whole validation-email list. `Some(vec![])` means
    /// explicitly empty, `None` means never set.
    pub fn set_validation_emails(mut self, input: Option<Vec<String>>) -> Self {
        self.validation_emails = input;
        self
    }

    /// Set the domain the validation email is sent to.
    pub fn validation_domain(mut self, input: impl Into<String>) -> Self {
        self.validation_domain = Some(input.into());
        self
    }

    /// Set or clear the domain the validation email is sent to.
    pub fn set_validation_domain(mut self, input: Option<String>) -> Self {
        self.validation_domain = input;
        self
    }

    /// Set the validation state.
    pub fn validation_status(mut self, input: impl Into<DomainStatus>) -> Self {
        self.validation_status = Some(input.into());
        self
    }

    /// Set or clear the validation state.
    pub fn set_validation_status(mut self, input: Option<DomainStatus>) -> Self {
        self.validation_status = input;
        self
    }

    /// Set the DNS validation record.
    pub fn resource_record(mut self, input: impl Into<ResourceRecord>) -> Self {
        self.resource_record = Some(input.into());
        self
    }

    /// Build the DNS validation record in place through a fresh builder.
    pub fn resource_record_with(
        self,
        f: impl FnOnce(ResourceRecordBuilder) -> ResourceRecordBuilder,
    ) -> Self {
        let record = f(ResourceRecord::builder()).build();
        self.resource_record(record)
    }

    /// Set or clear the DNS validation record.
    pub fn set_resource_record(mut self, input: Option<ResourceRecord>) -> Self {
        self.resource_record = input;
        self
    }

    /// Set the validation mechanism.
    pub fn validation_method(mut self, input: impl Into<ValidationMethod>) -> Self {
        self.validation_method = Some(input.into());
        self
    }

    /// Set or clear the validation mechanism.
    pub fn set_validation_method(mut self, input: Option<ValidationMethod>) -> Self {
        self.validation_method = input;
        self
    }

    /// Snapshot the current state into a [`DomainValidation`].
    pub fn build(self) -> DomainValidation {
        DomainValidation {
            domain_name: self.domain_name,
            validation_emails: self.validation_emails,
            validation_domain: self.validation_domain,
            validation_status: self.validation_status,
            resource_record: self.resource_record,
            validation_method: self.validation_method,
        }
    }
}

impl From<DomainValidationBuilder> for DomainValidation {
    fn from(builder: DomainValidationBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_three_states() {
        let unset = DomainValidation::builder().build();
        assert!(!unset.has_validation_emails());
        assert!(unset.validation_emails().is_empty());

        let empty = DomainValidation::builder()
            .set_validation_emails(Some(vec![]))
            .build();
        assert!(empty.has_validation_emails());
        assert!(empty.validation_emails().is_empty());

        let set = DomainValidation::builder()
            .validation_emails("admin@example.com")
            .build();
        assert!(set.has_validation_emails());
        assert_eq!(set.validation_emails(), ["admin@example.com".to_string()]);
    }

    #[test]
    fn test_appender_marks_list_as_set() {
        let validation = DomainValidation::builder()
            .validation_emails("a@example.com")
            .validation_emails("b@example.com")
            .build();
        assert_eq!(validation.validation_emails().len(), 2);
        assert!(validation.has_validation_emails());
    }

    #[test]
    fn test_nested_closure_setter() {
        let validation = DomainValidation::builder()
            .domain_name("example.com")
            .validation_method(ValidationMethod::Dns)
            .resource_record_with(|r| {
                r.name("_x1.example.com")
                    .record_type(RecordType::Cname)
                    .value("_x2.certmgr-validations.net")
            })
            .build();

        let record = validation.resource_record().unwrap();
        assert_eq!(record.name(), Some("_x1.example.com"));
        assert_eq!(record.record_type(), Some(&RecordType::Cname));
    }

    #[test]
    fn test_builder_accepts_nested_builder() {
        let validation = DomainValidation::builder()
            .resource_record(ResourceRecord::builder().name("_x.example.com"))
            .build();
        assert_eq!(
            validation.resource_record().unwrap().name(),
            Some("_x.example.com")
        );
    }

    #[test]
    fn test_round_trip() {
        let validation = DomainValidation::builder()
            .domain_name("example.com")
            .validation_status(DomainStatus::Success)
            .validation_emails("admin@example.com")
            .build();
        assert_eq!(validation.to_builder().build(), validation);
    }
}
