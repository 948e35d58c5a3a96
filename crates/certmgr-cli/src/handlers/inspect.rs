//! The `inspect` command: decode a document and print it redacted

use super::load_document;
use crate::cli::{InspectArgs, OutputFormat};
use crate::error::Result;
use crate::output::{redacted_json, OutputWriter};
use certmgr_fixtures::{Fixture, FixtureKind};
use certmgr_model::ops::{
    ExportCertificateOutput, GetAccountConfigurationOutput, ListCertificatesOutput,
    ListTagsForCertificateOutput,
};
use certmgr_model::types::CertificateDetail;

/// Handle the `inspect` command.
pub fn handle_inspect(args: InspectArgs, output: &OutputWriter) -> Result<()> {
    let fixture = load_document(&args.document, args.kind)?;
    tracing::info!(name = %fixture.name, kind = ?fixture.kind, "inspecting document");

    match output.format() {
        OutputFormat::Human => {
            output.result(&render_human(&fixture)?);
        }
        OutputFormat::Json => {
            let redacted = redacted_json(fixture.kind, &fixture.document);
            output.result(&serde_json::to_string_pretty(&redacted)?);
        }
    }

    Ok(())
}

/// Decode the document into its typed record and render its redacted
/// `Display` form. Decoding also proves the document is well-formed.
fn render_human(fixture: &Fixture) -> Result<String> {
    let document = fixture.document.clone();
    let rendered = match fixture.kind {
        FixtureKind::CertificateDetail => {
            serde_json::from_value::<CertificateDetail>(document)?.to_string()
        }
        FixtureKind::CertificateSummaryPage => {
            serde_json::from_value::<ListCertificatesOutput>(document)?.to_string()
        }
        FixtureKind::TagSet => {
            serde_json::from_value::<ListTagsForCertificateOutput>(document)?.to_string()
        }
        FixtureKind::AccountConfiguration => {
            serde_json::from_value::<GetAccountConfigurationOutput>(document)?.to_string()
        }
        FixtureKind::ExportBundle => {
            serde_json::from_value::<ExportCertificateOutput>(document)?.to_string()
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use certmgr_fixtures::CorpusManager;

    #[test]
    fn test_render_human_redacts_export_bundle() {
        let fixture = CorpusManager::fixture("export_bundle").unwrap();
        let rendered = render_human(&fixture).unwrap();
        assert!(rendered.starts_with("ExportCertificateOutput("));
        assert!(!rendered.contains("ENCRYPTED PRIVATE KEY"));
    }

    #[test]
    fn test_render_human_shows_detail_fields() {
        let fixture = CorpusManager::fixture("issued_certificate").unwrap();
        let rendered = render_human(&fixture).unwrap();
        assert!(rendered.contains("DomainName=example.com"));
        assert!(rendered.contains("Status=ISSUED"));
    }
}
