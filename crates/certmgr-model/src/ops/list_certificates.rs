//! ListCertificates operation records
//!
//! Pagination parameters travel in the query string; the status and
//! structure filters travel in the payload.

use crate::enums::{CertificateStatus, SortBy, SortOrder};
use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use crate::types::filters::{Filters, FiltersBuilder, SCHEMA as FILTERS_SCHEMA};
use crate::types::response_metadata::{ResponseMetadata, SCHEMA as RESPONSE_METADATA_SCHEMA};
use crate::types::summary::{CertificateSummary, SCHEMA as SUMMARY_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static INPUT_SCHEMA: Schema = Schema {
    type_name: "ListCertificatesInput",
    fields: &[
        FieldMeta::payload("certificate_statuses", "CertificateStatuses", ValueType::List),
        FieldMeta::payload("includes", "Includes", ValueType::Structure).nested(&FILTERS_SCHEMA),
        FieldMeta::payload("next_token", "NextToken", ValueType::String)
            .located(WireLocation::Query),
        FieldMeta::payload("max_items", "MaxItems", ValueType::Integer)
            .located(WireLocation::Query),
        FieldMeta::payload("sort_by", "SortBy", ValueType::Enum).located(WireLocation::Query),
        FieldMeta::payload("sort_order", "SortOrder", ValueType::Enum)
            .located(WireLocation::Query),
    ],
};

pub(crate) static OUTPUT_SCHEMA: Schema = Schema {
    type_name: "ListCertificatesOutput",
    fields: &[
        FieldMeta::payload("next_token", "NextToken", ValueType::String),
        FieldMeta::payload(
            "certificate_summary_list",
            "CertificateSummaryList",
            ValueType::List,
        )
        .nested(&SUMMARY_SCHEMA),
        FieldMeta::payload("response_metadata", "ResponseMetadata", ValueType::Structure)
            .located(WireLocation::Header)
            .nested(&RESPONSE_METADATA_SCHEMA),
    ],
};

/// Input selecting which certificates to list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ListCertificatesInput {
    #[serde(rename = "CertificateStatuses", skip_serializing_if = "Option::is_none")]
    certificate_statuses: Option<Vec<CertificateStatus>>,
    #[serde(rename = "Includes", skip_serializing_if = "Option::is_none")]
    includes: Option<Filters>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "MaxItems", skip_serializing_if = "Option::is_none")]
    max_items: Option<i32>,
    #[serde(rename = "SortBy", skip_serializing_if = "Option::is_none")]
    sort_by: Option<SortBy>,
    #[serde(rename = "SortOrder", skip_serializing_if = "Option::is_none")]
    sort_order: Option<SortOrder>,
}

impl ListCertificatesInput {
    /// Start building a `ListCertificatesInput`.
    pub fn builder() -> ListCertificatesInputBuilder {
        ListCertificatesInputBuilder::default()
    }

    /// Statuses to match. Empty slice when never set.
    pub fn certificate_statuses(&self) -> &[CertificateStatus] {
        self.certificate_statuses.as_deref().unwrap_or_default()
    }

    /// True when the status filter was explicitly provided.
    pub fn has_certificate_statuses(&self) -> bool {
        self.certificate_statuses.is_some()
    }

    /// Structure filters to apply.
    pub fn includes(&self) -> Option<&Filters> {
        self.includes.as_ref()
    }

    /// Continuation token from a previous page.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Page-size limit.
    pub fn max_items(&self) -> Option<i32> {
        self.max_items
    }

    /// Sort key.
    pub fn sort_by(&self) -> Option<&SortBy> {
        self.sort_by.as_ref()
    }

    /// Sort direction.
    pub fn sort_order(&self) -> Option<&SortOrder> {
        self.sort_order.as_ref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ListCertificatesInputBuilder {
        ListCertificatesInputBuilder {
            certificate_statuses: self.certificate_statuses.clone(),
            includes: self.includes.clone(),
            next_token: self.next_token.clone(),
            max_items: self.max_items,
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
        }
    }
}

impl WireModel for ListCertificatesInput {
    fn schema() -> &'static Schema {
        &INPUT_SCHEMA
    }
}

impl fmt::Display for ListCertificatesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ListCertificatesInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCertificatesInputBuilder {
    certificate_statuses: Option<Vec<CertificateStatus>>,
    includes: Option<Filters>,
    next_token: Option<String>,
    max_items: Option<i32>,
    sort_by: Option<SortBy>,
    sort_order: Option<SortOrder>,
}

impl ListCertificatesInputBuilder {
    /// Append one status to match, marking the list as set.
    pub fn certificate_statuses(mut self, input: impl Into<CertificateStatus>) -> Self {
        self.certificate_statuses
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Set or clear the status filter.
    pub fn set_certificate_statuses(mut self, input: Option<Vec<CertificateStatus>>) -> Self {
        self.certificate_statuses = input;
        self
    }

    /// Set the structure filters.
    pub fn includes(mut self, input: impl Into<Filters>) -> Self {
        self.includes = Some(input.into());
        self
    }

    /// Build the structure filters in place through a fresh builder.
    pub fn includes_with(self, f: impl FnOnce(FiltersBuilder) -> FiltersBuilder) -> Self {
        let filters = f(Filters::builder()).build();
        self.includes(filters)
    }

    /// Set or clear the structure filters.
    pub fn set_includes(mut self, input: Option<Filters>) -> Self {
        self.includes = input;
        self
    }

    /// Set the continuation token.
    pub fn next_token(mut self, input: impl Into<String>) -> Self {
        self.next_token = Some(input.into());
        self
    }

    /// Set or clear the continuation token.
    pub fn set_next_token(mut self, input: Option<String>) -> Self {
        self.next_token = input;
        self
    }

    /// Set the page-size limit.
    pub fn max_items(mut self, input: i32) -> Self {
        self.max_items = Some(input);
        self
    }

    /// Set or clear the page-size limit.
    pub fn set_max_items(mut self, input: Option<i32>) -> Self {
        self.max_items = input;
        self
    }

    /// Set the sort key.
    pub fn sort_by(mut self, input: impl Into<SortBy>) -> Self {
        self.sort_by = Some(input.into());
        self
    }

    /// Set or clear the sort key.
    pub fn set_sort_by(mut self, input: Option<SortBy>) -> Self {
        self.sort_by = input;
        self
    }

    /// Set the sort direction.
    pub fn sort_order(mut self, input: impl Into<SortOrder>) -> Self {
        self.sort_order = Some(input.into());
        self
    }

    /// Set or clear the sort direction.
    pub fn set_sort_order(mut self, input: Option<SortOrder>) -> Self {
        self.sort_order = input;
        self
    }

    /// Snapshot the current state into a [`ListCertificatesInput`].
    pub fn build(self) -> ListCertificatesInput {
        ListCertificatesInput {
            certificate_statuses: self.certificate_statuses,
            includes: self.includes,
            next_token: self.next_token,
            max_items: self.max_items,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }
}

impl From<ListCertificatesInputBuilder> for ListCertificatesInput {
    fn from(builder: ListCertificatesInputBuilder) -> Self {
        builder.build()
    }
}

/// One page of certificate summaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ListCertificatesOutput {
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "CertificateSummaryList", skip_serializing_if = "Option::is_none")]
    certificate_summary_list: Option<Vec<CertificateSummary>>,
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "ResponseMetadata::is_empty"
    )]
    response_metadata: ResponseMetadata,
}

impl ListCertificatesOutput {
    /// Start building a `ListCertificatesOutput`.
    pub fn builder() -> ListCertificatesOutputBuilder {
        ListCertificatesOutputBuilder::default()
    }

    /// Token for the next page, when more results exist.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Summaries on this page. Empty slice when never set.
    pub fn certificate_summary_list(&self) -> &[CertificateSummary] {
        self.certificate_summary_list.as_deref().unwrap_or_default()
    }

    /// True when the summary list was explicitly provided.
    pub fn has_certificate_summary_list(&self) -> bool {
        self.certificate_summary_list.is_some()
    }

    /// Shared response metadata.
    pub fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ListCertificatesOutputBuilder {
        ListCertificatesOutputBuilder {
            next_token: self.next_token.clone(),
            certificate_summary_list: self.certificate_summary_list.clone(),
            response_metadata: self.response_metadata.clone(),
        }
    }
}

impl WireModel for ListCertificatesOutput {
    fn schema() -> &'static Schema {
        &OUTPUT_SCHEMA
    }
}

impl fmt::Display for ListCertificatesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ListCertificatesOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCertificatesOutputBuilder {
    next_token: Option<String>,
    certificate_summary_list: Option<Vec<CertificateSummary>>,
    response_metadata: ResponseMetadata,
}

impl ListCertificatesOutputBuilder {
    /// Set the next-page token.
    pub fn next_token(mut self, input: impl Into<String>) -> Self {
        self.next_token = Some(input.into());
        self
    }

    /// Set or clear the next-page token.
    pub fn set_next_token(mut self, input: Option<String>) -> Self {
        self.next_token = input;
        self
    }

    /// Append one summary, marking the list as set.
    pub fn certificate_summary_list(mut self, input: impl Into<CertificateSummary>) -> Self {
        self.certificate_summary_list
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Set or clear the summary list.
    pub fn set_certificate_summary_list(
        mut self,
        input: Option<Vec<CertificateSummary>>,
    ) -> Self {
        self.certificate_summary_list = input;
        self
    }

    /// Set the shared response metadata.
    pub fn response_metadata(mut self, input: impl Into<ResponseMetadata>) -> Self {
        self.response_metadata = input.into();
        self
    }

    /// Snapshot the current state into a [`ListCertificatesOutput`].
    pub fn build(self) -> ListCertificatesOutput {
        ListCertificatesOutput {
            next_token: self.next_token,
            certificate_summary_list: self.certificate_summary_list,
            response_metadata: self.response_metadata,
        }
    }
}

impl From<ListCertificatesOutputBuilder> for ListCertificatesOutput {
    fn from(builder: ListCertificatesOutputBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::KeyAlgorithm;

    #[test]
    fn test_status_filter_accepts_wire_strings() {
        let input = ListCertificatesInput::builder()
            .certificate_statuses("ISSUED")
            .certificate_statuses(CertificateStatus::PendingValidation)
            .build();
        assert_eq!(
            input.certificate_statuses(),
            [CertificateStatus::Issued, CertificateStatus::PendingValidation]
        );
    }

    #[test]
    fn test_pagination_fields_are_query_located() {
        let schema = ListCertificatesInput::schema();
        assert_eq!(schema.field("NextToken").unwrap().location, WireLocation::Query);
        assert_eq!(schema.field("MaxItems").unwrap().location, WireLocation::Query);
        assert_eq!(
            schema.field("CertificateStatuses").unwrap().location,
            WireLocation::Payload
        );
    }

    #[test]
    fn test_includes_closure_setter() {
        let input = ListCertificatesInput::builder()
            .includes_with(|f| f.key_types(KeyAlgorithm::Rsa2048))
            .max_items(25)
            .build();
        assert_eq!(input.includes().unwrap().key_types().len(), 1);
        assert_eq!(input.to_builder().build(), input);
    }

    #[test]
    fn test_empty_page_round_trip() {
        let output = ListCertificatesOutput::builder()
            .set_certificate_summary_list(Some(vec![]))
            .build();
        assert!(output.has_certificate_summary_list());
        assert!(output.certificate_summary_list().is_empty());

        let json = serde_json::to_string(&output).unwrap();
        let back: ListCertificatesOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, output);
        assert!(back.has_certificate_summary_list());
    }
}
