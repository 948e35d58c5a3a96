//! Wire-document fixtures for the certmgr model
//!
//! This crate provides canned JSON wire documents plus a round-trip runner
//! that decodes each document into its typed record, re-encodes it, and
//! reports any drift as a readable diff. The model crate consumes it as a
//! dev-dependency in its integration tests.

pub mod corpus;
pub mod diff;
pub mod runner;

use thiserror::Error;

pub use corpus::{CorpusManager, Fixture, FixtureKind};
pub use diff::{DiffEngine, DiffOptions};
pub use runner::{RoundTripReport, RoundTripRunner};

/// Fixture infrastructure error types
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown fixture kind: {0}")]
    UnknownKind(String),

    #[error("round-trip mismatch for {name}:\n{diff}")]
    RoundTripMismatch { name: String, diff: String },
}

pub type Result<T> = std::result::Result<T, FixtureError>;
