//! Field metadata tables and the wire-name record renderer
//!
//! Every record declares a static [`Schema`]: an ordered table of
//! [`FieldMeta`] entries naming the model field, its wire name, where it
//! travels in a request, and its value-type tag. The external marshaller
//! consumes these tables to place each value; inside this crate the same
//! tables drive the `Display` rendering of records, including redaction of
//! fields flagged sensitive.
//!
//! Copyright (c) 2025 Certmgr Team
//! Licensed under the Apache-2.0 license

use crate::sensitive::REDACTED;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Where a field travels in a request or response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireLocation {
    /// Serialized into the request/response body.
    Payload,
    /// Spliced into the URI path.
    Uri,
    /// Appended to the query string.
    Query,
    /// Carried as an HTTP header.
    Header,
}

/// Value-type tag for a field, as the marshaller sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Integer,
    Long,
    Boolean,
    Timestamp,
    Blob,
    Enum,
    Structure,
    List,
    Map,
}

/// Declarative description of one record field.
#[derive(Debug, Clone, Copy)]
pub struct FieldMeta {
    /// Member name in the model.
    pub name: &'static str,
    /// Name on the wire.
    pub wire_name: &'static str,
    /// Wire location.
    pub location: WireLocation,
    /// Value-type tag.
    pub value_type: ValueType,
    /// Redact this field in every human-facing rendering.
    pub sensitive: bool,
    /// Schema of the nested structure, for `Structure` fields and lists of
    /// structures.
    pub structure: Option<&'static Schema>,
}

impl FieldMeta {
    /// Payload field with the given value type.
    pub const fn payload(name: &'static str, wire_name: &'static str, value_type: ValueType) -> Self {
        Self {
            name,
            wire_name,
            location: WireLocation::Payload,
            value_type,
            sensitive: false,
            structure: None,
        }
    }

    /// Override the wire location.
    pub const fn located(self, location: WireLocation) -> Self {
        Self { location, ..self }
    }

    /// Flag the field as sensitive.
    pub const fn sensitive(self) -> Self {
        Self {
            sensitive: true,
            ..self
        }
    }

    /// Attach the schema of the nested structure type.
    pub const fn nested(self, structure: &'static Schema) -> Self {
        Self {
            structure: Some(structure),
            ..self
        }
    }
}

/// Ordered field-metadata table for one record type.
#[derive(Debug)]
pub struct Schema {
    /// Record type name, as rendered in `Display` output.
    pub type_name: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [FieldMeta],
}

impl Schema {
    /// Look up a field by its wire name.
    pub fn field(&self, wire_name: &str) -> Option<&FieldMeta> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }
}

/// A record with a declared field-metadata table.
pub trait WireModel {
    /// The record's schema.
    fn schema() -> &'static Schema;

    /// Record type name.
    fn type_name(&self) -> &'static str
    where
        Self: Sized,
    {
        Self::schema().type_name
    }

    /// Ordered field metadata.
    fn fields(&self) -> &'static [FieldMeta]
    where
        Self: Sized,
    {
        Self::schema().fields
    }
}

/// Render a record as `TypeName(WireName=value, ...)`.
///
/// Unset fields are skipped; sensitive fields render the fixed redaction
/// marker. Nested structures recurse through their own schemas so their
/// sensitive flags hold at any depth. This is the `Display` implementation
/// shared by every record.
pub fn format_record<T>(record: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: WireModel + Serialize,
{
    match serde_json::to_value(record) {
        Ok(value) => format_with_schema(T::schema(), &value, f),
        // Serialization of these data-only records cannot fail in practice;
        // degrade to the bare type name rather than panicking in Display.
        Err(_) => write!(f, "{}(...)", T::schema().type_name),
    }
}

fn format_with_schema(schema: &Schema, value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}(", schema.type_name)?;
    let mut first = true;
    for field in schema.fields {
        let Some(v) = value.get(field.wire_name) else {
            continue;
        };
        if v.is_null() {
            continue;
        }
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        write!(f, "{}=", field.wire_name)?;
        if field.sensitive {
            f.write_str(REDACTED)?;
        } else {
            format_value(field, v, f)?;
        }
    }
    f.write_str(")")
}

fn format_value(field: &FieldMeta, value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                format_value(field, item, f)?;
            }
            f.write_str("]")
        }
        Value::Object(_) => match field.structure {
            Some(nested) => format_with_schema(nested, value, f),
            None => write!(f, "{}", value),
        },
        other => write!(f, "{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static INNER_SCHEMA: Schema = Schema {
        type_name: "Inner",
        fields: &[
            FieldMeta::payload("token", "Token", ValueType::String).sensitive(),
            FieldMeta::payload("label", "Label", ValueType::String),
        ],
    };

    static OUTER_SCHEMA: Schema = Schema {
        type_name: "Outer",
        fields: &[
            FieldMeta::payload("name", "Name", ValueType::String),
            FieldMeta::payload("inner", "Inner", ValueType::Structure).nested(&INNER_SCHEMA),
            FieldMeta::payload("count", "Count", ValueType::Integer),
        ],
    };

    #[derive(Serialize)]
    struct Outer {
        #[serde(rename = "Name")]
        name: Option<String>,
        #[serde(rename = "Inner")]
        inner: Option<Inner>,
        #[serde(rename = "Count")]
        count: Option<i32>,
    }

    #[derive(Serialize)]
    struct Inner {
        #[serde(rename = "Token")]
        token: Option<String>,
        #[serde(rename = "Label")]
        label: Option<String>,
    }

    impl WireModel for Outer {
        fn schema() -> &'static Schema {
            &OUTER_SCHEMA
        }
    }

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            format_record(self, f)
        }
    }

    #[test]
    fn test_render_skips_unset_fields() {
        let outer = Outer {
            name: Some("edge".to_string()),
            inner: None,
            count: None,
        };
        assert_eq!(outer.to_string(), "Outer(Name=edge)");
    }

    #[test]
    fn test_render_recurses_and_redacts_nested_sensitive() {
        let outer = Outer {
            name: Some("edge".to_string()),
            inner: Some(Inner {
                token: Some("secret123".to_string()),
                label: Some("ok".to_string()),
            }),
            count: Some(2),
        };
        let rendered = outer.to_string();
        assert!(!rendered.contains("secret123"));
        assert!(rendered.contains(&format!("Token={}", REDACTED)));
        assert!(rendered.contains("Label=ok"));
        assert!(rendered.contains("Count=2"));
    }

    #[test]
    fn test_schema_field_lookup() {
        assert_eq!(OUTER_SCHEMA.field("Name").unwrap().name, "name");
        assert!(OUTER_SCHEMA.field("Missing").is_none());
    }

    #[test]
    fn test_field_meta_builders_are_const() {
        const FIELD: FieldMeta =
            FieldMeta::payload("arn", "CertificateArn", ValueType::String).located(WireLocation::Uri);
        assert_eq!(FIELD.location, WireLocation::Uri);
        assert!(!FIELD.sensitive);
    }
}
