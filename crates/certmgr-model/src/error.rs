//! Service error data carriers for the certmgr API
//!
//! These variants are inert carriers for the error code and message a
//! failed call reports; the transport layer that raises them is outside
//! this crate. Construction is infallible and there is no logic beyond
//! `Display`.
//!
//! Copyright (c) 2025 Certmgr Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure conditions reported by the certificate-management service.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceError {
    /// The requested certificate or resource does not exist.
    #[error("resource not found: {message}")]
    ResourceNotFound {
        message: String,
        resource_arn: Option<String>,
    },

    /// The certificate is associated with another resource and cannot be
    /// deleted.
    #[error("resource in use: {message}")]
    ResourceInUse {
        message: String,
        resource_arn: Option<String>,
    },

    /// The supplied ARN is malformed or names another service's resource.
    #[error("invalid ARN: {message}")]
    InvalidArn { message: String },

    /// One or more domain-validation options are invalid.
    #[error("invalid domain validation options: {message}")]
    InvalidDomainValidationOptions { message: String },

    /// A request parameter is out of range or malformed.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// The certificate is in a state that forbids the requested operation.
    #[error("invalid state: {message}")]
    InvalidState { message: String },

    /// A tag key or value is malformed.
    #[error("invalid tag: {message}")]
    InvalidTag { message: String },

    /// An account quota was exceeded.
    #[error("limit exceeded: {message}")]
    LimitExceeded { message: String },

    /// The certificate request is still being processed.
    #[error("request in progress: {message}")]
    RequestInProgress { message: String },

    /// A tag update violates the account's tag policy.
    #[error("tag policy violation: {message}")]
    TagPolicy { message: String },

    /// The caller was throttled.
    #[error("throttled: {message}")]
    Throttling { message: String },

    /// The caller lacks permission for the operation.
    #[error("access denied: {message}")]
    AccessDenied { message: String },
}

impl ServiceError {
    /// The stable error code the service uses on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::ResourceNotFound { .. } => "ResourceNotFoundException",
            ServiceError::ResourceInUse { .. } => "ResourceInUseException",
            ServiceError::InvalidArn { .. } => "InvalidArnException",
            ServiceError::InvalidDomainValidationOptions { .. } => {
                "InvalidDomainValidationOptionsException"
            }
            ServiceError::InvalidParameter { .. } => "InvalidParameterException",
            ServiceError::InvalidState { .. } => "InvalidStateException",
            ServiceError::InvalidTag { .. } => "InvalidTagException",
            ServiceError::LimitExceeded { .. } => "LimitExceededException",
            ServiceError::RequestInProgress { .. } => "RequestInProgressException",
            ServiceError::TagPolicy { .. } => "TagPolicyException",
            ServiceError::Throttling { .. } => "ThrottlingException",
            ServiceError::AccessDenied { .. } => "AccessDeniedException",
        }
    }

    /// The human-readable message carried with the error.
    pub fn message(&self) -> &str {
        match self {
            ServiceError::ResourceNotFound { message, .. }
            | ServiceError::ResourceInUse { message, .. }
            | ServiceError::InvalidArn { message }
            | ServiceError::InvalidDomainValidationOptions { message }
            | ServiceError::InvalidParameter { message }
            | ServiceError::InvalidState { message }
            | ServiceError::InvalidTag { message }
            | ServiceError::LimitExceeded { message }
            | ServiceError::RequestInProgress { message }
            | ServiceError::TagPolicy { message }
            | ServiceError::Throttling { message }
            | ServiceError::AccessDenied { message } => message,
        }
    }
}

/// Convenience alias for results carrying a [`ServiceError`].
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServiceError::ResourceNotFound {
            message: "no certificate with that ARN".to_string(),
            resource_arn: Some("arn:certmgr:cert/abc".to_string()),
        };
        assert_eq!(err.to_string(), "resource not found: no certificate with that ARN");
        assert_eq!(err.code(), "ResourceNotFoundException");
        assert_eq!(err.message(), "no certificate with that ARN");
    }

    #[test]
    fn test_error_round_trips_through_json() {
        let err = ServiceError::Throttling {
            message: "slow down".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: ServiceError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
