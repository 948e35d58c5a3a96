//! Structure records shared across operations
//!
//! Every type here follows the same shape: an immutable record constructed
//! only through its builder, metadata-driven `Display`, and serde mapped
//! to the wire names. See [`tag`] for the annotated reference
//! implementation of the pattern.

pub mod account;
pub mod detail;
pub mod domain;
pub mod filters;
pub mod key_usage;
pub mod options;
pub mod renewal;
pub mod response_metadata;
pub mod summary;
pub mod tag;

pub use account::{ExpiryEventsConfiguration, ExpiryEventsConfigurationBuilder};
pub use detail::{CertificateDetail, CertificateDetailBuilder};
pub use domain::{
    DomainValidation, DomainValidationBuilder, DomainValidationOption,
    DomainValidationOptionBuilder, ResourceRecord, ResourceRecordBuilder,
};
pub use filters::{Filters, FiltersBuilder};
pub use key_usage::{ExtendedKeyUsage, ExtendedKeyUsageBuilder, KeyUsage, KeyUsageBuilder};
pub use options::{CertificateOptions, CertificateOptionsBuilder};
pub use renewal::{RenewalSummary, RenewalSummaryBuilder};
pub use response_metadata::{ResponseMetadata, ResponseMetadataBuilder};
pub use summary::{CertificateSummary, CertificateSummaryBuilder};
pub use tag::{Tag, TagBuilder};
