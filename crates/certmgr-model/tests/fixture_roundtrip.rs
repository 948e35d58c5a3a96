//! Fixture-driven round-trip tests
//!
//! Every document in the fixture corpus must decode into its typed record
//! and re-encode to the identical wire form.

use certmgr_fixtures::{CorpusManager, DiffOptions, FixtureKind, RoundTripRunner};
use certmgr_model::types::CertificateDetail;

#[test]
fn corpus_round_trips_cleanly() {
    let runner = RoundTripRunner::with_diff_options(DiffOptions {
        context_lines: 3,
        colorize: false,
    });
    let report = runner.run_all(&CorpusManager::builtin()).unwrap();

    for (name, diff) in &report.failed {
        eprintln!("fixture {name} drifted:\n{diff}");
    }
    assert!(report.is_clean());
    assert!(!report.passed.is_empty());
}

#[test]
fn issued_certificate_decodes_fully() {
    let fixture = CorpusManager::fixture("issued_certificate").unwrap();
    assert_eq!(fixture.kind, FixtureKind::CertificateDetail);

    let detail: CertificateDetail = serde_json::from_value(fixture.document).unwrap();
    assert_eq!(detail.domain_name(), Some("example.com"));
    assert_eq!(detail.subject_alternative_names().len(), 2);
    assert_eq!(detail.status().unwrap().as_str(), "ISSUED");
    assert_eq!(detail.in_use_by().len(), 1);
    assert!(detail.renewal_summary().is_some());
    assert_eq!(detail.key_usages().len(), 2);

    let validation = &detail.domain_validation_options()[0];
    let record = validation.resource_record().unwrap();
    assert_eq!(record.value(), Some("_90ac17ef.certmgr-validations.net"));
}

#[test]
fn forward_compat_document_keeps_unrecognized_values() {
    let fixture = CorpusManager::fixture("forward_compat_certificate").unwrap();
    let detail: CertificateDetail = serde_json::from_value(fixture.document.clone()).unwrap();

    assert_eq!(detail.status().unwrap().as_str(), "QUANTUM_PENDING");
    assert_eq!(detail.key_algorithm().unwrap().as_str(), "ML_DSA_65");
    assert_eq!(serde_json::to_value(&detail).unwrap(), fixture.document);
}
