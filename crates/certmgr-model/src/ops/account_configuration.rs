//! Account-configuration operation records

use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use crate::types::account::{
    ExpiryEventsConfiguration, ExpiryEventsConfigurationBuilder, SCHEMA as EXPIRY_SCHEMA,
};
use crate::types::response_metadata::{ResponseMetadata, SCHEMA as RESPONSE_METADATA_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static GET_OUTPUT_SCHEMA: Schema = Schema {
    type_name: "GetAccountConfigurationOutput",
    fields: &[
        FieldMeta::payload("expiry_events", "ExpiryEvents", ValueType::Structure)
            .nested(&EXPIRY_SCHEMA),
        FieldMeta::payload("response_metadata", "ResponseMetadata", ValueType::Structure)
            .located(WireLocation::Header)
            .nested(&RESPONSE_METADATA_SCHEMA),
    ],
};

pub(crate) static PUT_INPUT_SCHEMA: Schema = Schema {
    type_name: "PutAccountConfigurationInput",
    fields: &[
        FieldMeta::payload("expiry_events", "ExpiryEvents", ValueType::Structure)
            .nested(&EXPIRY_SCHEMA),
        FieldMeta::payload("idempotency_token", "IdempotencyToken", ValueType::String)
            .located(WireLocation::Header),
    ],
};

/// Output carrying the account-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct GetAccountConfigurationOutput {
    #[serde(rename = "ExpiryEvents", skip_serializing_if = "Option::is_none")]
    expiry_events: Option<ExpiryEventsConfiguration>,
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "ResponseMetadata::is_empty"
    )]
    response_metadata: ResponseMetadata,
}

impl GetAccountConfigurationOutput {
    /// Start building a `GetAccountConfigurationOutput`.
    pub fn builder() -> GetAccountConfigurationOutputBuilder {
        GetAccountConfigurationOutputBuilder::default()
    }

    /// Expiry-event settings for the account.
    pub fn expiry_events(&self) -> Option<&ExpiryEventsConfiguration> {
        self.expiry_events.as_ref()
    }

    /// Shared response metadata.
    pub fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> GetAccountConfigurationOutputBuilder {
        GetAccountConfigurationOutputBuilder {
            expiry_events: self.expiry_events.clone(),
            response_metadata: self.response_metadata.clone(),
        }
    }
}

impl WireModel for GetAccountConfigurationOutput {
    fn schema() -> &'static Schema {
        &GET_OUTPUT_SCHEMA
    }
}

impl fmt::Display for GetAccountConfigurationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`GetAccountConfigurationOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAccountConfigurationOutputBuilder {
    expiry_events: Option<ExpiryEventsConfiguration>,
    response_metadata: ResponseMetadata,
}

impl GetAccountConfigurationOutputBuilder {
    /// Set the expiry-event settings.
    pub fn expiry_events(mut self, input: impl Into<ExpiryEventsConfiguration>) -> Self {
        self.expiry_events = Some(input.into());
        self
    }

    /// Build the expiry-event settings in place through a fresh builder.
    pub fn expiry_events_with(
        self,
        f: impl FnOnce(ExpiryEventsConfigurationBuilder) -> ExpiryEventsConfigurationBuilder,
    ) -> Self {
        let config = f(ExpiryEventsConfiguration::builder()).build();
        self.expiry_events(config)
    }

    /// Set or clear the expiry-event settings.
    pub fn set_expiry_events(mut self, input: Option<ExpiryEventsConfiguration>) -> Self {
        self.expiry_events = input;
        self
    }

    /// Set the shared response metadata.
    pub fn response_metadata(mut self, input: impl Into<ResponseMetadata>) -> Self {
        self.response_metadata = input.into();
        self
    }

    /// Snapshot the current state into a [`GetAccountConfigurationOutput`].
    pub fn build(self) -> GetAccountConfigurationOutput {
        GetAccountConfigurationOutput {
            expiry_events: self.expiry_events,
            response_metadata: self.response_metadata,
        }
    }
}

impl From<GetAccountConfigurationOutputBuilder> for GetAccountConfigurationOutput {
    fn from(builder: GetAccountConfigurationOutputBuilder) -> Self {
        builder.build()
    }
}

/// Input replacing the account-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PutAccountConfigurationInput {
    #[serde(rename = "ExpiryEvents", skip_serializing_if = "Option::is_none")]
    expiry_events: Option<ExpiryEventsConfiguration>,
    #[serde(rename = "IdempotencyToken", skip_serializing_if = "Option::is_none")]
    idempotency_token: Option<String>,
}

impl PutAccountConfigurationInput {
    /// Start building a `PutAccountConfigurationInput`.
    pub fn builder() -> PutAccountConfigurationInputBuilder {
        PutAccountConfigurationInputBuilder::default()
    }

    /// Replacement expiry-event settings.
    pub fn expiry_events(&self) -> Option<&ExpiryEventsConfiguration> {
        self.expiry_events.as_ref()
    }

    /// Caller-chosen token making retries idempotent.
    pub fn idempotency_token(&self) -> Option<&str> {
        self.idempotency_token.as_deref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> PutAccountConfigurationInputBuilder {
        PutAccountConfigurationInputBuilder {
            expiry_events: self.expiry_events.clone(),
            idempotency_token: self.idempotency_token.clone(),
        }
    }
}

impl WireModel for PutAccountConfigurationInput {
    fn schema() -> &'static Schema {
        &PUT_INPUT_SCHEMA
    }
}

impl fmt::Display for PutAccountConfigurationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`PutAccountConfigurationInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutAccountConfigurationInputBuilder {
    expiry_events: Option<ExpiryEventsConfiguration>,
    idempotency_token: Option<String>,
}

impl PutAccountConfigurationInputBuilder {
    /// Set the replacement expiry-event settings.
    pub fn expiry_events(mut self, input: impl Into<ExpiryEventsConfiguration>) -> Self {
        self.expiry_events = Some(input.into());
        self
    }

    /// Build the replacement settings in place through a fresh builder.
    pub fn expiry_events_with(
        self,
        f: impl FnOnce(ExpiryEventsConfigurationBuilder) -> ExpiryEventsConfigurationBuilder,
    ) -> Self {
        let config = f(ExpiryEventsConfiguration::builder()).build();
        self.expiry_events(config)
    }

    /// Set or clear the replacement settings.
    pub fn set_expiry_events(mut self, input: Option<ExpiryEventsConfiguration>) -> Self {
        self.expiry_events = input;
        self
    }

    /// Set the idempotency token.
    pub fn idempotency_token(mut self, input: impl Into<String>) -> Self {
        self.idempotency_token = Some(input.into());
        self
    }

    /// Set or clear the idempotency token.
    pub fn set_idempotency_token(mut self, input: Option<String>) -> Self {
        self.idempotency_token = input;
        self
    }

    /// Snapshot the current state into a [`PutAccountConfigurationInput`].
    pub fn build(self) -> PutAccountConfigurationInput {
        PutAccountConfigurationInput {
            expiry_events: self.expiry_events,
            idempotency_token: self.idempotency_token,
        }
    }
}

impl From<PutAccountConfigurationInputBuilder> for PutAccountConfigurationInput {
    fn from(builder: PutAccountConfigurationInputBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_with_nested_config() {
        let input = PutAccountConfigurationInput::builder()
            .expiry_events_with(|e| e.days_before_expiry(30))
            .idempotency_token("token-1")
            .build();
        assert_eq!(input.to_builder().build(), input);
        assert_eq!(input.expiry_events().unwrap().days_before_expiry(), Some(30));
    }

    #[test]
    fn test_display_renders_nested_structure() {
        let output = GetAccountConfigurationOutput::builder()
            .expiry_events_with(|e| e.days_before_expiry(45))
            .build();
        assert_eq!(
            output.to_string(),
            "GetAccountConfigurationOutput(ExpiryEvents=ExpiryEventsConfiguration(DaysBeforeExpiry=45))"
        );
    }
}
