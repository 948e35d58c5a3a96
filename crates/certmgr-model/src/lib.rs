//! Certmgr Model - client model types for the certificate-management API
//!
//! This crate holds the request/response records, builders, wire enums,
//! and field-metadata tables a client of the certmgr service works with.
//!
//! # Main Components
//!
//! - **Records and Builders**: immutable value objects constructed only
//!   through chained builders, with `to_builder()` reseeding
//! - **Wire Enums**: closed known sets plus an `Other(String)` variant
//!   carrying unrecognized wire values verbatim
//! - **Field Metadata**: per-record `Schema` tables naming each field's
//!   wire name, location, and value type, consumed by the external
//!   marshaller and by the redacting `Display` renderer
//! - **Sensitive Values**: private keys and passphrases wrapped in
//!   [`Sensitive`], never rendered in `Debug` or `Display`
//!
//! Records are immutable once built and therefore freely shareable across
//! threads. Builders are single-owner staging objects; nothing in this
//! crate blocks, locks, or performs I/O.
//!
//! # Example
//!
//! ```
//! use certmgr_model::ops::RequestCertificateInput;
//! use certmgr_model::types::Tag;
//!
//! let input = RequestCertificateInput::builder()
//!     .domain_name("example.com")
//!     .validation_method("DNS")
//!     .subject_alternative_names("www.example.com")
//!     .tags(Tag::builder().key("Env").value("prod"))
//!     .build();
//!
//! assert_eq!(input.domain_name(), Some("example.com"));
//! assert_eq!(input.to_builder().build(), input);
//! ```

pub mod enums;
pub mod error;
pub mod meta;
pub mod ops;
pub mod primitives;
pub mod sensitive;
pub mod types;

#[cfg(test)]
mod proptest_strategies;

// Re-export the pattern surface for convenience
pub use enums::{
    CertificateExport, CertificateStatus, CertificateTransparencyLoggingPreference,
    CertificateType, DomainStatus, ExtendedKeyUsageName, FailureReason, KeyAlgorithm,
    KeyUsageName, RecordType, RenewalEligibility, RenewalStatus, RevocationReason, SortBy,
    SortOrder, ValidationMethod,
};
pub use error::{Result, ServiceError};
pub use meta::{FieldMeta, Schema, ValueType, WireLocation, WireModel};
pub use primitives::{Blob, DateTime};
pub use sensitive::{Sensitive, REDACTED};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_resolve() {
        let status = CertificateStatus::from("ISSUED");
        assert_eq!(status.as_str(), "ISSUED");
    }
}
