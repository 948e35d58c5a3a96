//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random but
//! well-formed instances of model records and enums for property testing.

#![cfg(test)]

use crate::enums::*;
use crate::types::*;
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

/// Strategy for generating certificate statuses, known values only.
pub fn known_status_strategy() -> impl Strategy<Value = CertificateStatus> {
    prop_oneof![
        Just(CertificateStatus::PendingValidation),
        Just(CertificateStatus::Issued),
        Just(CertificateStatus::Inactive),
        Just(CertificateStatus::Expired),
        Just(CertificateStatus::ValidationTimedOut),
        Just(CertificateStatus::Revoked),
        Just(CertificateStatus::Failed),
    ]
}

/// Strategy for generating statuses including unrecognized raw values.
pub fn any_status_strategy() -> impl Strategy<Value = CertificateStatus> {
    prop_oneof![
        known_status_strategy(),
        "[A-Z_]{3,24}".prop_map(|raw| CertificateStatus::from(raw.as_str())),
    ]
}

/// Strategy for generating key algorithms.
pub fn key_algorithm_strategy() -> impl Strategy<Value = KeyAlgorithm> {
    prop_oneof![
        Just(KeyAlgorithm::Rsa2048),
        Just(KeyAlgorithm::Rsa4096),
        Just(KeyAlgorithm::EcPrime256v1),
        Just(KeyAlgorithm::Ed25519),
    ]
}

/// Strategy for generating domain names.
pub fn domain_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{1,20}\\.(com|net|org|io)".prop_map(String::from)
}

/// Strategy for generating tags.
pub fn tag_strategy() -> impl Strategy<Value = Tag> {
    (
        "[a-zA-Z][a-zA-Z0-9_:-]{0,30}",          // key
        option::of("[a-zA-Z0-9 ._:-]{0,40}"),    // value
    )
        .prop_map(|(key, value)| {
            Tag::builder()
                .key(key)
                .set_value(value)
                .build()
        })
}

/// Strategy for generating domain validations.
pub fn domain_validation_strategy() -> impl Strategy<Value = DomainValidation> {
    (
        domain_name_strategy(),
        option::of(vec("[a-z]{2,10}@[a-z]{2,10}\\.com".prop_map(String::from), 0..4)),
        prop_oneof![
            Just(DomainStatus::PendingValidation),
            Just(DomainStatus::Success),
            Just(DomainStatus::Failed),
        ],
    )
        .prop_map(|(domain_name, emails, status)| {
            DomainValidation::builder()
                .domain_name(domain_name)
                .set_validation_emails(emails)
                .validation_status(status)
                .build()
        })
}

/// Strategy for generating certificate summaries.
pub fn certificate_summary_strategy() -> impl Strategy<Value = CertificateSummary> {
    (
        "arn:certmgr:cert/[a-f0-9]{8}",
        domain_name_strategy(),
        any_status_strategy(),
        key_algorithm_strategy(),
        option::of(any::<bool>()),
        option::of(vec(domain_name_strategy(), 0..3)),
    )
        .prop_map(|(arn, domain, status, algorithm, in_use, sans)| {
            CertificateSummary::builder()
                .certificate_arn(arn)
                .domain_name(domain)
                .status(status)
                .key_algorithm(algorithm)
                .set_in_use(in_use)
                .set_subject_alternative_name_summaries(sans)
                .build()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::WireModel;

    proptest! {
        #[test]
        fn prop_tag_round_trips_through_builder(tag in tag_strategy()) {
            prop_assert_eq!(tag.to_builder().build(), tag);
        }

        #[test]
        fn prop_summary_round_trips_through_builder(summary in certificate_summary_strategy()) {
            prop_assert_eq!(summary.to_builder().build(), summary);
        }

        #[test]
        fn prop_summary_round_trips_through_json(summary in certificate_summary_strategy()) {
            let json = serde_json::to_string(&summary).unwrap();
            let back: CertificateSummary = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, summary);
        }

        #[test]
        fn prop_status_as_str_round_trips(status in any_status_strategy()) {
            prop_assert_eq!(CertificateStatus::from(status.as_str()), status.clone());
        }

        #[test]
        fn prop_validation_list_state_is_preserved(validation in domain_validation_strategy()) {
            let json = serde_json::to_string(&validation).unwrap();
            let back: DomainValidation = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back.has_validation_emails(), validation.has_validation_emails());
        }

        #[test]
        fn prop_display_always_opens_with_type_name(summary in certificate_summary_strategy()) {
            let rendered = summary.to_string();
            prop_assert!(rendered.starts_with(summary.type_name()));
        }
    }
}
