//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use certmgr_fixtures::FixtureKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Certmgr CLI - inspect and validate certificate model documents
///
/// Decodes certificate-management wire documents into their typed model
/// records, renders them with sensitive values redacted, and flags values
/// this model version does not recognize.
#[derive(Parser, Debug)]
#[command(
    name = "certmgr",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CERTMGR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a document and print a redacted rendering of the record
    Inspect(InspectArgs),

    /// Decode a document and report unrecognized or suspect values
    Validate(ValidateArgs),

    /// List the document kinds this build understands
    Kinds,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Path to the document file (JSON or YAML)
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Record kind, when the file is a bare document without an envelope
    #[arg(short, long, value_enum)]
    pub kind: Option<DocKind>,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the document file (JSON or YAML)
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Record kind, when the file is a bare document without an envelope
    #[arg(short, long, value_enum)]
    pub kind: Option<DocKind>,

    /// Treat unrecognized enum values as errors instead of warnings
    #[arg(long)]
    pub deny_unrecognized: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable redacted rendering
    Human,
    /// Redacted JSON
    Json,
}

/// Document kinds accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    /// Full certificate description
    CertificateDetail,
    /// One page of certificate summaries
    SummaryPage,
    /// A certificate's tag set
    TagSet,
    /// Account-level configuration
    AccountConfiguration,
    /// Exported certificate bundle
    ExportBundle,
}

impl From<DocKind> for FixtureKind {
    fn from(kind: DocKind) -> Self {
        match kind {
            DocKind::CertificateDetail => FixtureKind::CertificateDetail,
            DocKind::SummaryPage => FixtureKind::CertificateSummaryPage,
            DocKind::TagSet => FixtureKind::TagSet,
            DocKind::AccountConfiguration => FixtureKind::AccountConfiguration,
            DocKind::ExportBundle => FixtureKind::ExportBundle,
        }
    }
}

impl Cli {
    /// Parse arguments from the process environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether colored output should be used.
    pub fn use_color(&self) -> bool {
        !self.no_color
    }

    /// Effective verbosity level.
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["certmgr", "inspect", "doc.json", "--kind", "tag-set"])
            .unwrap();
        match cli.command {
            Commands::Inspect(args) => {
                assert_eq!(args.kind, Some(DocKind::TagSet));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["certmgr", "-q", "-v", "kinds"]).is_err());
    }

    #[test]
    fn test_doc_kind_maps_to_fixture_kind() {
        assert_eq!(
            FixtureKind::from(DocKind::CertificateDetail),
            FixtureKind::CertificateDetail
        );
    }
}
