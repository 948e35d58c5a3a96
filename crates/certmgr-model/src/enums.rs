//! Wire enums for the certmgr API
//!
//! Every enum the service speaks is a closed set of known wire strings plus
//! an `Other(String)` variant that carries an unrecognized raw value
//! verbatim, so a model built against an older service version never loses
//! data. Conversions are total: `From<&str>` cannot fail, and
//! `from(x.as_str()) == x` holds for every value including unrecognized
//! ones.
//!
//! Copyright (c) 2025 Certmgr Team
//! Licensed under the Apache-2.0 license

/// Declare a wire enum: known variants with their wire strings, plus the
/// `Other` carriage variant and the total conversion surface.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this version of the model does not recognize. The
            /// raw wire string is carried verbatim and is returned
            /// unchanged by [`as_str`](Self::as_str).
            Other(String),
        }

        impl $name {
            /// The wire string for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            /// Wire strings known to this version, excluding `Other`.
            pub fn values() -> &'static [&'static str] {
                &[$($wire),+]
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw {
                    $($wire => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(raw: String) -> Self {
                Self::from(raw.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(raw: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(raw))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(raw.as_str()))
            }
        }
    };
}

wire_enum! {
    /// Lifecycle status of a certificate.
    CertificateStatus {
        PendingValidation => "PENDING_VALIDATION",
        Issued => "ISSUED",
        Inactive => "INACTIVE",
        Expired => "EXPIRED",
        ValidationTimedOut => "VALIDATION_TIMED_OUT",
        Revoked => "REVOKED",
        Failed => "FAILED",
    }
}

wire_enum! {
    /// How a certificate entered the account.
    CertificateType {
        AuthorityIssued => "AUTHORITY_ISSUED",
        Imported => "IMPORTED",
        Private => "PRIVATE",
    }
}

wire_enum! {
    /// Mechanism used to prove domain ownership.
    ValidationMethod {
        Email => "EMAIL",
        Dns => "DNS",
    }
}

wire_enum! {
    /// Validation state of a single domain.
    DomainStatus {
        PendingValidation => "PENDING_VALIDATION",
        Success => "SUCCESS",
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Public-key algorithm of the certificate key pair.
    KeyAlgorithm {
        Rsa1024 => "RSA_1024",
        Rsa2048 => "RSA_2048",
        Rsa3072 => "RSA_3072",
        Rsa4096 => "RSA_4096",
        EcPrime256v1 => "EC_prime256v1",
        EcSecp384r1 => "EC_secp384r1",
        EcSecp521r1 => "EC_secp521r1",
        Ed25519 => "ED25519",
    }
}

wire_enum! {
    /// Reason a certificate was revoked.
    RevocationReason {
        Unspecified => "UNSPECIFIED",
        KeyCompromise => "KEY_COMPROMISE",
        CaCompromise => "CA_COMPROMISE",
        AffiliationChanged => "AFFILIATION_CHANGED",
        Superseded => "SUPERSEDED",
        CessationOfOperation => "CESSATION_OF_OPERATION",
        CertificateHold => "CERTIFICATE_HOLD",
        RemoveFromCrl => "REMOVE_FROM_CRL",
        PrivilegeWithdrawn => "PRIVILEGE_WITHDRAWN",
        AaCompromise => "A_A_COMPROMISE",
    }
}

wire_enum! {
    /// Reason a certificate request failed.
    FailureReason {
        NoAvailableContacts => "NO_AVAILABLE_CONTACTS",
        AdditionalVerificationRequired => "ADDITIONAL_VERIFICATION_REQUIRED",
        DomainNotAllowed => "DOMAIN_NOT_ALLOWED",
        InvalidPublicDomain => "INVALID_PUBLIC_DOMAIN",
        DomainValidationDenied => "DOMAIN_VALIDATION_DENIED",
        CaaError => "CAA_ERROR",
        AuthorityLimitExceeded => "AUTHORITY_LIMIT_EXCEEDED",
        AuthorityAccessDenied => "AUTHORITY_ACCESS_DENIED",
        OtherReason => "OTHER",
    }
}

wire_enum! {
    /// State of the most recent managed renewal.
    RenewalStatus {
        PendingAutoRenewal => "PENDING_AUTO_RENEWAL",
        PendingValidation => "PENDING_VALIDATION",
        Success => "SUCCESS",
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Whether a certificate qualifies for managed renewal.
    RenewalEligibility {
        Eligible => "ELIGIBLE",
        Ineligible => "INELIGIBLE",
    }
}

wire_enum! {
    /// X.509 Key Usage extension value.
    KeyUsageName {
        DigitalSignature => "DIGITAL_SIGNATURE",
        NonRepudiation => "NON_REPUDIATION",
        KeyEncipherment => "KEY_ENCIPHERMENT",
        DataEncipherment => "DATA_ENCIPHERMENT",
        KeyAgreement => "KEY_AGREEMENT",
        CertificateSigning => "CERTIFICATE_SIGNING",
        CrlSigning => "CRL_SIGNING",
        EncipherOnly => "ENCIPHER_ONLY",
        DecipherOnly => "DECIPHER_ONLY",
        Any => "ANY",
        Custom => "CUSTOM",
    }
}

wire_enum! {
    /// X.509 Extended Key Usage extension value.
    ExtendedKeyUsageName {
        TlsWebServerAuthentication => "TLS_WEB_SERVER_AUTHENTICATION",
        TlsWebClientAuthentication => "TLS_WEB_CLIENT_AUTHENTICATION",
        CodeSigning => "CODE_SIGNING",
        EmailProtection => "EMAIL_PROTECTION",
        TimeStamping => "TIME_STAMPING",
        OcspSigning => "OCSP_SIGNING",
        IpsecEndSystem => "IPSEC_END_SYSTEM",
        IpsecTunnel => "IPSEC_TUNNEL",
        IpsecUser => "IPSEC_USER",
        Any => "ANY",
        None => "NONE",
        Custom => "CUSTOM",
    }
}

wire_enum! {
    /// Opt-in state for certificate-transparency logging.
    CertificateTransparencyLoggingPreference {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

wire_enum! {
    /// Whether the certificate's private key may be exported.
    CertificateExport {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

wire_enum! {
    /// DNS record type used for validation records.
    RecordType {
        Cname => "CNAME",
    }
}

wire_enum! {
    /// Sort key for certificate listings.
    SortBy {
        CreatedAt => "CREATED_AT",
    }
}

wire_enum! {
    /// Sort direction for certificate listings.
    SortOrder {
        Ascending => "ASCENDING",
        Descending => "DESCENDING",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_round_trip() {
        for raw in CertificateStatus::values() {
            let parsed = CertificateStatus::from(*raw);
            assert!(!matches!(parsed, CertificateStatus::Other(_)), "{raw} should be known");
            assert_eq!(CertificateStatus::from(parsed.as_str()), parsed);
            assert_eq!(parsed.as_str(), *raw);
        }
    }

    #[test]
    fn test_unrecognized_value_carries_raw_string() {
        let parsed = CertificateStatus::from("QUANTUM_PENDING");
        assert_eq!(parsed, CertificateStatus::Other("QUANTUM_PENDING".to_string()));
        assert_eq!(parsed.as_str(), "QUANTUM_PENDING");
        assert_eq!(parsed.to_string(), "QUANTUM_PENDING");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(matches!(ValidationMethod::from("dns"), ValidationMethod::Other(_)));
        assert_eq!(ValidationMethod::from("DNS"), ValidationMethod::Dns);
    }

    #[test]
    fn test_values_excludes_other() {
        assert_eq!(ValidationMethod::values(), &["EMAIL", "DNS"]);
        assert_eq!(RecordType::values(), &["CNAME"]);
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&KeyAlgorithm::EcPrime256v1).unwrap();
        assert_eq!(json, "\"EC_prime256v1\"");

        let back: KeyAlgorithm = serde_json::from_str("\"RSA_2048\"").unwrap();
        assert_eq!(back, KeyAlgorithm::Rsa2048);

        let unknown: KeyAlgorithm = serde_json::from_str("\"RSA_8192\"").unwrap();
        assert_eq!(unknown, KeyAlgorithm::Other("RSA_8192".to_string()));
    }

    #[test]
    fn test_from_str_is_infallible() {
        let parsed: RenewalStatus = "SUCCESS".parse().unwrap();
        assert_eq!(parsed, RenewalStatus::Success);
    }
}
