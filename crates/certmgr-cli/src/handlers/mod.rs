//! Command handlers

mod inspect;
mod validate;

pub use inspect::handle_inspect;
pub use validate::handle_validate;

use crate::cli::DocKind;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use certmgr_fixtures::{Fixture, FixtureKind};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a document file into a [`Fixture`].
///
/// The file may be an envelope (`{"kind": ..., "document": ...}`) or a
/// bare document, in which case `--kind` must name the record type. YAML
/// files are accepted alongside JSON.
pub fn load_document(path: &Path, kind_override: Option<DocKind>) -> Result<Fixture> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(path)?;
    let value: Value = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)?,
        _ => serde_json::from_str(&raw)?,
    };

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    // Envelope form takes precedence; --kind still wins when given.
    let envelope_kind = value
        .get("kind")
        .and_then(Value::as_str)
        .map(FixtureKind::parse)
        .transpose()?;

    let kind = match (kind_override, envelope_kind) {
        (Some(kind), _) => kind.into(),
        (None, Some(kind)) => kind,
        (None, None) => {
            return Err(Error::KindMissing {
                path: path.to_path_buf(),
            })
        }
    };

    let document = match value.get("document") {
        Some(inner) if envelope_kind.is_some() => inner.clone(),
        _ => value,
    };

    Ok(Fixture {
        name,
        kind,
        document,
    })
}

/// Handle the `kinds` command.
pub fn handle_kinds(output: &OutputWriter) -> Result<()> {
    output.result("certificate-detail");
    output.result("summary-page");
    output.result("tag-set");
    output.result("account-configuration");
    output.result("export-bundle");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_envelope_document() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            "{}",
            r#"{"kind": "tag_set", "document": {"Tags": [{"Key": "Env"}]}}"#
        )
        .unwrap();

        let fixture = load_document(file.path(), None).unwrap();
        assert_eq!(fixture.kind, FixtureKind::TagSet);
        assert!(fixture.document.get("Tags").is_some());
    }

    #[test]
    fn test_load_bare_document_requires_kind() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{}", r#"{"Tags": []}"#).unwrap();

        assert!(matches!(
            load_document(file.path(), None),
            Err(Error::KindMissing { .. })
        ));

        let fixture = load_document(file.path(), Some(DocKind::TagSet)).unwrap();
        assert_eq!(fixture.kind, FixtureKind::TagSet);
    }

    #[test]
    fn test_load_yaml_document() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "kind: tag_set\ndocument:\n  Tags:\n    - Key: Env").unwrap();

        let fixture = load_document(file.path(), None).unwrap();
        assert_eq!(fixture.kind, FixtureKind::TagSet);
    }
}
