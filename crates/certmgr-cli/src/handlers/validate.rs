//! The `validate` command: decode a document and report suspect values
//!
//! Unrecognized enum values are not decode failures (the model carries
//! them verbatim), so this is where a human learns their document uses
//! values this build does not know.

use super::load_document;
use crate::cli::ValidateArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use certmgr_fixtures::{Fixture, FixtureKind};
use certmgr_model::enums::*;
use certmgr_model::ops::{
    ExportCertificateOutput, GetAccountConfigurationOutput, ListCertificatesOutput,
    ListTagsForCertificateOutput,
};
use certmgr_model::types::{CertificateDetail, CertificateSummary, DomainValidation, Tag};

/// Severity of one finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Warning,
    Error,
}

/// One finding against a document.
#[derive(Debug)]
struct Finding {
    severity: Severity,
    message: String,
}

impl Finding {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Handle the `validate` command.
pub fn handle_validate(args: ValidateArgs, output: &OutputWriter) -> Result<()> {
    let fixture = load_document(&args.document, args.kind)?;
    tracing::info!(name = %fixture.name, kind = ?fixture.kind, "validating document");

    let mut findings = collect_findings(&fixture)?;
    if args.deny_unrecognized {
        for finding in &mut findings {
            finding.severity = Severity::Error;
        }
    }

    let mut errors = 0usize;
    for finding in &findings {
        match finding.severity {
            Severity::Warning => output.warn(&finding.message),
            Severity::Error => {
                errors += 1;
                output.error(&finding.message);
            }
        }
    }

    if errors > 0 {
        return Err(Error::ValidationFailed { issues: errors });
    }

    output.success(&format!(
        "{}: valid ({} warning(s))",
        fixture.name,
        findings.len()
    ));
    Ok(())
}

fn collect_findings(fixture: &Fixture) -> Result<Vec<Finding>> {
    let document = fixture.document.clone();
    let mut findings = Vec::new();

    match fixture.kind {
        FixtureKind::CertificateDetail => {
            let detail: CertificateDetail = serde_json::from_value(document)?;
            check_detail(&detail, &mut findings);
        }
        FixtureKind::CertificateSummaryPage => {
            let page: ListCertificatesOutput = serde_json::from_value(document)?;
            for summary in page.certificate_summary_list() {
                check_summary(summary, &mut findings);
            }
        }
        FixtureKind::TagSet => {
            let tags: ListTagsForCertificateOutput = serde_json::from_value(document)?;
            check_tags(tags.tags(), &mut findings);
        }
        FixtureKind::AccountConfiguration => {
            let config: GetAccountConfigurationOutput = serde_json::from_value(document)?;
            if let Some(expiry) = config.expiry_events() {
                if let Some(days) = expiry.days_before_expiry() {
                    if days <= 0 {
                        findings.push(Finding::error(format!(
                            "DaysBeforeExpiry must be positive, got {days}"
                        )));
                    }
                }
            }
        }
        FixtureKind::ExportBundle => {
            let bundle: ExportCertificateOutput = serde_json::from_value(document)?;
            if bundle.certificate().is_none() {
                findings.push(Finding::warning("export bundle carries no certificate"));
            }
        }
    }

    Ok(findings)
}

/// Flag a wire-enum value the current build does not recognize.
macro_rules! check_unrecognized {
    ($findings:expr, $field:literal, $value:expr) => {
        if let Some(value) = $value {
            if is_other(value) {
                $findings.push(Finding::warning(format!(
                    "unrecognized {} value: {}",
                    $field,
                    value.as_str()
                )));
            }
        }
    };
}

/// `true` when the enum value is the carriage variant. Each wire enum is
/// its own type, so this is a tiny trait rather than one match.
trait IsOther {
    fn is_raw(&self) -> bool;
}

macro_rules! impl_is_other {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IsOther for $ty {
                fn is_raw(&self) -> bool {
                    matches!(self, Self::Other(_))
                }
            }
        )+
    };
}

impl_is_other!(
    CertificateStatus,
    CertificateType,
    ValidationMethod,
    DomainStatus,
    KeyAlgorithm,
    RevocationReason,
    FailureReason,
    RenewalStatus,
    RenewalEligibility,
    KeyUsageName,
    ExtendedKeyUsageName,
    CertificateTransparencyLoggingPreference,
    CertificateExport,
    RecordType,
);

fn is_other<T: IsOther>(value: &T) -> bool {
    value.is_raw()
}

fn check_detail(detail: &CertificateDetail, findings: &mut Vec<Finding>) {
    check_unrecognized!(findings, "Status", detail.status());
    check_unrecognized!(findings, "Type", detail.certificate_type());
    check_unrecognized!(findings, "KeyAlgorithm", detail.key_algorithm());
    check_unrecognized!(findings, "RevocationReason", detail.revocation_reason());
    check_unrecognized!(findings, "FailureReason", detail.failure_reason());
    check_unrecognized!(findings, "RenewalEligibility", detail.renewal_eligibility());

    for validation in detail.domain_validation_options() {
        check_validation(validation, findings);
    }
    for usage in detail.key_usages() {
        check_unrecognized!(findings, "KeyUsages.Name", usage.name());
    }
    for usage in detail.extended_key_usages() {
        check_unrecognized!(findings, "ExtendedKeyUsages.Name", usage.name());
    }
    if let Some(options) = detail.options() {
        check_unrecognized!(
            findings,
            "Options.CertificateTransparencyLoggingPreference",
            options.certificate_transparency_logging_preference()
        );
        check_unrecognized!(findings, "Options.Export", options.export());
    }
    if let Some(summary) = detail.renewal_summary() {
        check_unrecognized!(findings, "RenewalSummary.RenewalStatus", summary.renewal_status());
        for validation in summary.domain_validation_options() {
            check_validation(validation, findings);
        }
    }
}

fn check_validation(validation: &DomainValidation, findings: &mut Vec<Finding>) {
    check_unrecognized!(findings, "ValidationStatus", validation.validation_status());
    check_unrecognized!(findings, "ValidationMethod", validation.validation_method());
    if let Some(record) = validation.resource_record() {
        check_unrecognized!(findings, "ResourceRecord.Type", record.record_type());
    }
}

fn check_summary(summary: &CertificateSummary, findings: &mut Vec<Finding>) {
    check_unrecognized!(findings, "Status", summary.status());
    check_unrecognized!(findings, "Type", summary.certificate_type());
    check_unrecognized!(findings, "KeyAlgorithm", summary.key_algorithm());
    for name in summary.key_usages() {
        check_unrecognized!(findings, "KeyUsages", Some(name));
    }
    for name in summary.extended_key_usages() {
        check_unrecognized!(findings, "ExtendedKeyUsages", Some(name));
    }
}

fn check_tags(tags: &[Tag], findings: &mut Vec<Finding>) {
    for tag in tags {
        match tag.key() {
            None | Some("") => findings.push(Finding::error("tag with no key")),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certmgr_fixtures::CorpusManager;

    #[test]
    fn test_clean_document_yields_no_findings() {
        let fixture = CorpusManager::fixture("issued_certificate").unwrap();
        let findings = collect_findings(&fixture).unwrap();
        assert!(findings.is_empty(), "unexpected: {findings:?}");
    }

    #[test]
    fn test_forward_compat_document_is_flagged() {
        let fixture = CorpusManager::fixture("forward_compat_certificate").unwrap();
        let findings = collect_findings(&fixture).unwrap();
        assert_eq!(findings.len(), 2);
        assert!(findings
            .iter()
            .any(|f| f.message.contains("QUANTUM_PENDING")));
        assert!(findings.iter().any(|f| f.message.contains("ML_DSA_65")));
        assert!(findings
            .iter()
            .all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn test_keyless_tag_is_an_error() {
        let fixture = Fixture {
            name: "bad_tags".to_string(),
            kind: FixtureKind::TagSet,
            document: serde_json::json!({"Tags": [{"Value": "orphan"}]}),
        };
        let findings = collect_findings(&fixture).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
    }
}
