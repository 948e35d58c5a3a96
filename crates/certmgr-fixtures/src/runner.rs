//! Round-trip runner
//!
//! Decodes each fixture document into its typed record, re-encodes it,
//! and verifies the wire form is preserved. Because unrecognized enum
//! values are carried verbatim by the model, round-tripping must hold for
//! forward-compatibility fixtures too.

use crate::corpus::{CorpusManager, Fixture, FixtureKind};
use crate::diff::{DiffEngine, DiffOptions};
use crate::{FixtureError, Result};
use certmgr_model::ops::{
    ExportCertificateOutput, GetAccountConfigurationOutput, ListCertificatesOutput,
    ListTagsForCertificateOutput,
};
use certmgr_model::types::CertificateDetail;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Outcome of one round-trip run.
#[derive(Debug)]
pub struct RoundTripReport {
    /// Names of fixtures that round-tripped cleanly.
    pub passed: Vec<String>,
    /// Mismatches, as (fixture name, rendered diff).
    pub failed: Vec<(String, String)>,
}

impl RoundTripReport {
    /// True when every fixture round-tripped.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs decode/encode round trips over a corpus.
pub struct RoundTripRunner {
    diff: DiffEngine,
}

impl RoundTripRunner {
    /// Runner with default diff options.
    pub fn new() -> Self {
        Self {
            diff: DiffEngine::new(),
        }
    }

    /// Runner with the given diff options.
    pub fn with_diff_options(options: DiffOptions) -> Self {
        Self {
            diff: DiffEngine::with_options(options),
        }
    }

    /// Round-trip every fixture in the corpus, collecting a report.
    pub fn run_all(&self, corpus: &CorpusManager) -> Result<RoundTripReport> {
        let mut report = RoundTripReport {
            passed: Vec::new(),
            failed: Vec::new(),
        };

        for fixture in corpus.fixtures()? {
            match self.run_one(&fixture) {
                Ok(()) => report.passed.push(fixture.name),
                Err(FixtureError::RoundTripMismatch { name, diff }) => {
                    report.failed.push((name, diff));
                }
                Err(other) => return Err(other),
            }
        }

        Ok(report)
    }

    /// Round-trip one fixture; error on decode failure or drift.
    pub fn run_one(&self, fixture: &Fixture) -> Result<()> {
        match fixture.kind {
            FixtureKind::CertificateDetail => self.round_trip::<CertificateDetail>(fixture),
            FixtureKind::CertificateSummaryPage => {
                self.round_trip::<ListCertificatesOutput>(fixture)
            }
            FixtureKind::TagSet => self.round_trip::<ListTagsForCertificateOutput>(fixture),
            FixtureKind::AccountConfiguration => {
                self.round_trip::<GetAccountConfigurationOutput>(fixture)
            }
            FixtureKind::ExportBundle => self.round_trip::<ExportCertificateOutput>(fixture),
        }
    }

    fn round_trip<T>(&self, fixture: &Fixture) -> Result<()>
    where
        T: DeserializeOwned + Serialize,
    {
        let record: T = serde_json::from_value(fixture.document.clone())?;
        let encoded: Value = serde_json::to_value(&record)?;

        if self.diff.equal(&fixture.document, &encoded) {
            Ok(())
        } else {
            Err(FixtureError::RoundTripMismatch {
                name: fixture.name.clone(),
                diff: self.diff.render(&fixture.document, &encoded),
            })
        }
    }
}

impl Default for RoundTripRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_corpus_round_trips() {
        let runner = RoundTripRunner::with_diff_options(DiffOptions {
            context_lines: 3,
            colorize: false,
        });
        let report = runner.run_all(&CorpusManager::builtin()).unwrap();
        assert!(
            report.is_clean(),
            "fixtures drifted: {:?}",
            report.failed
        );
        assert_eq!(report.passed.len(), 8);
    }

    #[test]
    fn test_forward_compat_fixture_keeps_raw_enum() {
        let fixture = CorpusManager::fixture("forward_compat_certificate").unwrap();
        let detail: CertificateDetail =
            serde_json::from_value(fixture.document.clone()).unwrap();
        assert_eq!(detail.status().unwrap().as_str(), "QUANTUM_PENDING");
    }
}
