//! Integration tests for the record/builder construction contract
//!
//! These exercise the cross-cutting guarantees every record honors:
//! to-builder round trips, setter commutativity, three-state list fields,
//! and sensitive-value redaction.

use certmgr_model::enums::{CertificateStatus, KeyAlgorithm, ValidationMethod};
use certmgr_model::ops::{
    ExportCertificateOutput, ImportCertificateInput, ListCertificatesInput,
    RequestCertificateInput,
};
use certmgr_model::types::{CertificateDetail, DomainValidation, ResponseMetadata, Tag};
use certmgr_model::{Blob, REDACTED};
use pretty_assertions::assert_eq;

#[test]
fn to_builder_round_trip_is_identity() {
    let input = RequestCertificateInput::builder()
        .domain_name("example.com")
        .validation_method(ValidationMethod::Dns)
        .subject_alternative_names("www.example.com")
        .key_algorithm(KeyAlgorithm::EcPrime256v1)
        .tags(Tag::builder().key("Env").value("prod"))
        .build();

    assert_eq!(input.to_builder().build(), input);

    let detail = CertificateDetail::builder()
        .certificate_arn("arn:certmgr:cert/abc")
        .status(CertificateStatus::Issued)
        .subject_alternative_names("www.example.com")
        .build();

    assert_eq!(detail.to_builder().build(), detail);
}

#[test]
fn disjoint_setters_commute() {
    let a = RequestCertificateInput::builder()
        .domain_name("example.com")
        .idempotency_token("token-1")
        .key_algorithm("RSA_2048")
        .build();
    let b = RequestCertificateInput::builder()
        .key_algorithm("RSA_2048")
        .idempotency_token("token-1")
        .domain_name("example.com")
        .build();
    assert_eq!(a, b);
}

#[test]
fn last_setter_call_wins() {
    let input = RequestCertificateInput::builder()
        .domain_name("first.example.com")
        .domain_name("second.example.com")
        .build();
    assert_eq!(input.domain_name(), Some("second.example.com"));
}

#[test]
fn list_fields_have_three_states() {
    // Never set
    let unset = ListCertificatesInput::builder().build();
    assert!(!unset.has_certificate_statuses());
    assert!(unset.certificate_statuses().is_empty());

    // Explicitly empty
    let empty = ListCertificatesInput::builder()
        .set_certificate_statuses(Some(vec![]))
        .build();
    assert!(empty.has_certificate_statuses());
    assert!(empty.certificate_statuses().is_empty());

    // Populated
    let populated = ListCertificatesInput::builder()
        .certificate_statuses(CertificateStatus::Issued)
        .build();
    assert!(populated.has_certificate_statuses());
    assert_eq!(populated.certificate_statuses().len(), 1);

    // The three states stay distinguishable through equality
    assert_ne!(unset, empty);
    assert_ne!(empty, populated);
}

#[test]
fn clearing_a_list_restores_the_unset_state() {
    let input = ListCertificatesInput::builder()
        .certificate_statuses("ISSUED")
        .set_certificate_statuses(None)
        .build();
    assert!(!input.has_certificate_statuses());
    assert_eq!(input, ListCertificatesInput::builder().build());
}

#[test]
fn tag_scenario_renders_wire_names() {
    let tag = Tag::builder().key("Env").value("prod").build();
    let rendered = tag.to_string();
    assert!(rendered.contains("Key=Env"), "got: {rendered}");
    assert!(rendered.contains("Value=prod"), "got: {rendered}");
}

#[test]
fn sensitive_scenario_never_leaks() {
    let output = ExportCertificateOutput::builder()
        .certificate("-----BEGIN CERTIFICATE-----")
        .private_key("secret123")
        .build();

    for rendered in [output.to_string(), format!("{:?}", output)] {
        assert!(!rendered.contains("secret123"), "leaked in: {rendered}");
    }
    assert!(output.to_string().contains(REDACTED));

    let input = ImportCertificateInput::builder()
        .private_key(Blob::from("secret123"))
        .build();
    assert!(!input.to_string().contains("secret123"));
    assert!(!format!("{:?}", input).contains("secret123"));
}

#[test]
fn responses_embed_shared_metadata_by_value() {
    use certmgr_model::ops::{DeleteCertificateOutput, RequestCertificateOutput};

    let output = RequestCertificateOutput::builder()
        .certificate_arn("arn:certmgr:cert/abc")
        .response_metadata(ResponseMetadata::builder().request_id("req-42"))
        .build();
    assert_eq!(output.response_metadata().request_id(), Some("req-42"));
    assert_eq!(output.to_builder().build(), output);

    // Empty metadata stays off the wire and out of the rendering.
    let bare = DeleteCertificateOutput::builder().build();
    assert!(bare.response_metadata().is_empty());
    assert_eq!(bare.to_string(), "DeleteCertificateOutput()");
    assert_eq!(serde_json::to_value(&bare).unwrap(), serde_json::json!({}));
}

#[test]
fn nested_builders_compose() {
    let detail = CertificateDetail::builder()
        .domain_name("example.com")
        .domain_validation_options(
            DomainValidation::builder()
                .domain_name("example.com")
                .validation_method("DNS")
                .resource_record_with(|r| r.name("_a.example.com").value("_b.validations.net")),
        )
        .options_with(|o| o.certificate_transparency_logging_preference("ENABLED"))
        .build();

    assert_eq!(detail.domain_validation_options().len(), 1);
    let record = detail.domain_validation_options()[0].resource_record().unwrap();
    assert_eq!(record.name(), Some("_a.example.com"));
    assert!(detail.options().is_some());
}
