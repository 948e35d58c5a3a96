//! Integration tests for the wire-facing surface: serde naming, enum
//! forward compatibility, and field-metadata tables.

use certmgr_model::enums::{CertificateStatus, KeyAlgorithm, ValidationMethod};
use certmgr_model::ops::{
    ExportCertificateInput, ImportCertificateInput, ListCertificatesInput,
    RequestCertificateInput,
};
use certmgr_model::types::{CertificateDetail, CertificateSummary, Tag};
use certmgr_model::{ValueType, WireLocation, WireModel};
use serde_json::json;

#[test]
fn records_serialize_under_wire_names() {
    let tag = Tag::builder().key("Env").value("prod").build();
    assert_eq!(
        serde_json::to_value(&tag).unwrap(),
        json!({"Key": "Env", "Value": "prod"})
    );

    let input = RequestCertificateInput::builder()
        .domain_name("example.com")
        .validation_method(ValidationMethod::Email)
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({"DomainName": "example.com", "ValidationMethod": "EMAIL"})
    );
}

#[test]
fn unset_fields_stay_off_the_wire() {
    let summary = CertificateSummary::builder().domain_name("example.com").build();
    let value = serde_json::to_value(&summary).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("DomainName"));
}

#[test]
fn known_enum_values_round_trip() {
    for raw in CertificateStatus::values() {
        let parsed = CertificateStatus::from(*raw);
        assert_eq!(CertificateStatus::from(parsed.as_str()), parsed);
    }
    for raw in KeyAlgorithm::values() {
        let parsed = KeyAlgorithm::from(*raw);
        assert_eq!(parsed.as_str(), *raw);
    }
}

#[test]
fn unrecognized_enum_values_survive_a_full_document_cycle() {
    let document = json!({
        "CertificateArn": "arn:certmgr:cert/abc",
        "Status": "QUANTUM_PENDING",
        "KeyAlgorithm": "ML_DSA_65"
    });

    let detail: CertificateDetail = serde_json::from_value(document.clone()).unwrap();
    assert_eq!(detail.status().unwrap().as_str(), "QUANTUM_PENDING");
    assert_eq!(
        detail.status(),
        Some(&CertificateStatus::Other("QUANTUM_PENDING".to_string()))
    );

    // Re-encoding emits the original raw strings, not a sentinel marker.
    assert_eq!(serde_json::to_value(&detail).unwrap(), document);
}

#[test]
fn known_values_exclude_the_carriage_variant() {
    assert!(!CertificateStatus::values().is_empty());
    assert!(CertificateStatus::values()
        .iter()
        .all(|raw| !raw.contains("Other")));
}

#[test]
fn metadata_tables_match_declared_fields() {
    let schema = RequestCertificateInput::schema();
    assert_eq!(schema.type_name, "RequestCertificateInput");
    assert_eq!(schema.fields.len(), 8);
    assert_eq!(schema.field("DomainName").unwrap().value_type, ValueType::String);
    assert_eq!(schema.field("Tags").unwrap().value_type, ValueType::List);
    assert!(schema.field("Tags").unwrap().structure.is_some());
}

#[test]
fn wire_locations_are_declared() {
    let list = ListCertificatesInput::schema();
    assert_eq!(list.field("NextToken").unwrap().location, WireLocation::Query);
    assert_eq!(list.field("SortOrder").unwrap().location, WireLocation::Query);

    let export = ExportCertificateInput::schema();
    assert_eq!(
        export.field("CertificateArn").unwrap().location,
        WireLocation::Uri
    );
}

#[test]
fn sensitive_flags_are_declared_in_metadata() {
    let import = ImportCertificateInput::schema();
    assert!(import.field("PrivateKey").unwrap().sensitive);
    assert!(!import.field("Certificate").unwrap().sensitive);

    let export = ExportCertificateInput::schema();
    assert!(export.field("Passphrase").unwrap().sensitive);
}
