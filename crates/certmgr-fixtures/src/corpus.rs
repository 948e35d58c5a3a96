//! Fixture corpus management
//!
//! A fixture is one wire document plus the record kind it decodes to. The
//! built-in corpus is embedded in the crate; additional documents can be
//! discovered from a directory, one `.json` file per fixture.

use crate::{FixtureError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Which typed record a fixture document decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureKind {
    /// A full `CertificateDetail` document.
    CertificateDetail,
    /// A `ListCertificatesOutput` page.
    CertificateSummaryPage,
    /// A `ListTagsForCertificateOutput` document.
    TagSet,
    /// A `GetAccountConfigurationOutput` document.
    AccountConfiguration,
    /// An `ExportCertificateOutput` bundle.
    ExportBundle,
}

impl FixtureKind {
    /// Parse a kind from its fixture-file spelling.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "certificate_detail" => Ok(Self::CertificateDetail),
            "certificate_summary_page" => Ok(Self::CertificateSummaryPage),
            "tag_set" => Ok(Self::TagSet),
            "account_configuration" => Ok(Self::AccountConfiguration),
            "export_bundle" => Ok(Self::ExportBundle),
            other => Err(FixtureError::UnknownKind(other.to_string())),
        }
    }
}

/// One wire document with its decode target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    /// Fixture name, unique within the corpus.
    pub name: String,

    /// Record kind the document decodes to.
    pub kind: FixtureKind,

    /// The wire document itself.
    pub document: Value,
}

/// Built-in corpus embedded in the crate.
static BUILTIN: &[(&str, &str)] = &[
    ("issued_certificate", include_str!("../corpus/issued_certificate.json")),
    ("pending_dns_validation", include_str!("../corpus/pending_dns_validation.json")),
    ("revoked_certificate", include_str!("../corpus/revoked_certificate.json")),
    ("summary_page", include_str!("../corpus/summary_page.json")),
    ("tag_set", include_str!("../corpus/tag_set.json")),
    ("account_configuration", include_str!("../corpus/account_configuration.json")),
    ("export_bundle", include_str!("../corpus/export_bundle.json")),
    ("forward_compat_certificate", include_str!("../corpus/forward_compat_certificate.json")),
];

/// Manages fixture discovery.
pub struct CorpusManager {
    extra_dir: Option<PathBuf>,
}

impl CorpusManager {
    /// Corpus with only the built-in fixtures.
    pub fn builtin() -> Self {
        Self { extra_dir: None }
    }

    /// Corpus with the built-in fixtures plus documents discovered under
    /// the given directory.
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            extra_dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    /// Load every fixture in the corpus.
    pub fn fixtures(&self) -> Result<Vec<Fixture>> {
        let mut fixtures = Vec::new();

        for (name, raw) in BUILTIN {
            fixtures.push(parse_fixture(name, raw)?);
        }

        if let Some(dir) = &self.extra_dir {
            if dir.exists() {
                for entry in WalkDir::new(dir)
                    .into_iter()
                    .filter_map(std::result::Result::ok)
                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
                {
                    let raw = fs::read_to_string(entry.path())?;
                    let name = entry
                        .path()
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    fixtures.push(parse_fixture(&name, &raw)?);
                }
            }
        }

        Ok(fixtures)
    }

    /// Load one built-in fixture by name.
    pub fn fixture(name: &str) -> Result<Fixture> {
        let (_, raw) = BUILTIN
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| FixtureError::UnknownKind(name.to_string()))?;
        parse_fixture(name, raw)
    }
}

fn parse_fixture(name: &str, raw: &str) -> Result<Fixture> {
    let envelope: Value = serde_json::from_str(raw)?;
    let kind_raw = envelope
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| FixtureError::UnknownKind(format!("{name}: missing kind")))?;
    let kind = FixtureKind::parse(kind_raw)?;
    let document = envelope
        .get("document")
        .cloned()
        .unwrap_or(Value::Null);
    Ok(Fixture {
        name: name.to_string(),
        kind,
        document,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_corpus_parses() {
        let fixtures = CorpusManager::builtin().fixtures().unwrap();
        assert_eq!(fixtures.len(), BUILTIN.len());
        assert!(fixtures.iter().all(|f| f.document.is_object()));
    }

    #[test]
    fn test_fixture_lookup_by_name() {
        let fixture = CorpusManager::fixture("issued_certificate").unwrap();
        assert_eq!(fixture.kind, FixtureKind::CertificateDetail);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(FixtureKind::parse("quantum_bundle").is_err());
    }
}
