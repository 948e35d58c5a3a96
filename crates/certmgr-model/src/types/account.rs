//! Account-level configuration records

use crate::meta::{self, FieldMeta, Schema, ValueType, WireModel};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static SCHEMA: Schema = Schema {
    type_name: "ExpiryEventsConfiguration",
    fields: &[FieldMeta::payload("days_before_expiry", "DaysBeforeExpiry", ValueType::Integer)],
};

/// When the service starts emitting expiry events for certificates in the
/// account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpiryEventsConfiguration {
    #[serde(rename = "DaysBeforeExpiry", skip_serializing_if = "Option::is_none")]
    days_before_expiry: Option<i32>,
}

impl ExpiryEventsConfiguration {
    /// Start building an `ExpiryEventsConfiguration`.
    pub fn builder() -> ExpiryEventsConfigurationBuilder {
        ExpiryEventsConfigurationBuilder::default()
    }

    /// Days before expiry at which events begin.
    pub fn days_before_expiry(&self) -> Option<i32> {
        self.days_before_expiry
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ExpiryEventsConfigurationBuilder {
        ExpiryEventsConfigurationBuilder {
            days_before_expiry: self.days_before_expiry,
        }
    }
}

impl WireModel for ExpiryEventsConfiguration {
    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

impl fmt::Display for ExpiryEventsConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ExpiryEventsConfiguration`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpiryEventsConfigurationBuilder {
    days_before_expiry: Option<i32>,
}

impl ExpiryEventsConfigurationBuilder {
    /// Set the number of days before expiry.
    pub fn days_before_expiry(mut self, input: i32) -> Self {
        self.days_before_expiry = Some(input);
        self
    }

    /// Set or clear the number of days before expiry.
    pub fn set_days_before_expiry(mut self, input: Option<i32>) -> Self {
        self.days_before_expiry = input;
        self
    }

    /// Snapshot the current state into an [`ExpiryEventsConfiguration`].
    pub fn build(self) -> ExpiryEventsConfiguration {
        ExpiryEventsConfiguration {
            days_before_expiry: self.days_before_expiry,
        }
    }
}

impl From<ExpiryEventsConfigurationBuilder> for ExpiryEventsConfiguration {
    fn from(builder: ExpiryEventsConfigurationBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let config = ExpiryEventsConfiguration::builder()
            .days_before_expiry(45)
            .build();
        assert_eq!(config.days_before_expiry(), Some(45));
        assert_eq!(config.to_builder().build(), config);
    }

    #[test]
    fn test_display() {
        let config = ExpiryEventsConfiguration::builder()
            .days_before_expiry(45)
            .build();
        assert_eq!(config.to_string(), "ExpiryEventsConfiguration(DaysBeforeExpiry=45)");
    }
}
