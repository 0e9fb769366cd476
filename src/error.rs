//! Error types for the NFT gateway.
//!
//! This module provides the unified error type [`NftError`] produced by the
//! operation-service layer and consumed by the HTTP response mapping.
//!
//! # Design
//!
//! Failures fall into exactly three structural categories:
//! - [`NftError::Validation`]: the request body violated an input-shape or
//!   business rule; carries one issue record per offending field
//! - [`NftError::Domain`]: the delegated blockchain layer already classified
//!   the failure; its own HTTP status and message must be preserved
//! - [`NftError::Unexpected`]: anything else (transport fault, programming
//!   error, unrecognized failure shape)
//!
//! Classification is purely structural: callers match on the variant, never
//! on message content.
//!
//! # Example
//!
//! ```
//! use nft_gateway::error::{NftError, NftResult};
//!
//! fn require_recipient(to: &str) -> NftResult<()> {
//!     if to.is_empty() {
//!         return Err(NftError::validation_field("to", "to must not be empty"));
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result type alias using [`NftError`].
pub type NftResult<T> = Result<T, NftError>;

/// A single field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationIssue {
    /// Name of the offending request field.
    pub field: String,
    /// What rule the field violated.
    pub message: String,
}

impl ValidationIssue {
    /// Create an issue for a named field.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Unified error type for NFT operations.
///
/// Produced by implementations of
/// [`NftOperations`](crate::service::NftOperations) and translated into an
/// HTTP response by [`ApiError`](crate::api::error::ApiError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NftError {
    /// The request failed input-shape or business-rule validation.
    Validation(Vec<ValidationIssue>),

    /// An already-classified failure from the delegated blockchain layer.
    ///
    /// Carries the upstream HTTP status, machine-readable error code and
    /// message verbatim; the gateway never re-wraps these.
    Domain {
        /// HTTP status the upstream assigned to the failure.
        status: u16,
        /// Machine-readable error code (e.g. `nft.insufficient.funds`).
        code: String,
        /// Human-readable upstream message.
        message: String,
    },

    /// Any failure that matched neither of the classified shapes.
    Unexpected {
        /// Best available description of what went wrong.
        message: String,
    },
}

impl NftError {
    /// Create a validation error from a list of issues.
    #[must_use]
    pub const fn validation(issues: Vec<ValidationIssue>) -> Self {
        Self::Validation(issues)
    }

    /// Create a validation error with a single field issue.
    ///
    /// # Example
    ///
    /// ```
    /// use nft_gateway::error::NftError;
    ///
    /// let err = NftError::validation_field("to", "to must not be empty");
    /// assert!(matches!(err, NftError::Validation(_)));
    /// ```
    #[must_use]
    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![ValidationIssue::new(field, message)])
    }

    /// Create a domain error carrying an upstream status and message.
    #[must_use]
    pub fn domain(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Domain {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create an unexpected error from whatever description is available.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Best available description of the failure.
    ///
    /// Priority order: the error's own message, else the serialized issue
    /// payload, else the debug rendering. Used by read-only endpoints, which
    /// surface every failure through the generic path.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Unexpected { message } | Self::Domain { message, .. } => message.clone(),
            Self::Validation(issues) => {
                serde_json::to_string(issues).unwrap_or_else(|_| format!("{issues:?}"))
            }
        }
    }
}

impl fmt::Display for NftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(issues) => write!(f, "validation failed: {} issue(s)", issues.len()),
            Self::Domain {
                status,
                code,
                message,
            } => {
                write!(f, "upstream error {status} ({code}): {message}")
            }
            Self::Unexpected { message } => write!(f, "unexpected error: {message}"),
        }
    }
}

impl std::error::Error for NftError {}

impl From<reqwest::Error> for NftError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unexpected {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_field() {
        let err = NftError::validation_field("to", "to must not be empty");
        match &err {
            NftError::Validation(issues) => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].field, "to");
            }
            other => panic!("wrong variant: {other:?}"),
        }
        assert_eq!(err.to_string(), "validation failed: 1 issue(s)");
    }

    #[test]
    fn test_domain_error() {
        let err = NftError::domain(403, "nft.insufficient.funds", "not enough gas");
        assert!(matches!(err, NftError::Domain { status: 403, .. }));
        assert_eq!(
            err.to_string(),
            "upstream error 403 (nft.insufficient.funds): not enough gas"
        );
    }

    #[test]
    fn test_unexpected_error() {
        let err = NftError::unexpected("timeout");
        assert!(matches!(err, NftError::Unexpected { .. }));
        assert_eq!(err.to_string(), "unexpected error: timeout");
    }

    #[test]
    fn test_reason_uses_message_when_present() {
        assert_eq!(NftError::unexpected("timeout").reason(), "timeout");
        assert_eq!(
            NftError::domain(500, "nft.error", "node unreachable").reason(),
            "node unreachable"
        );
    }

    #[test]
    fn test_reason_serializes_validation_issues() {
        let err = NftError::validation_field("to", "required");
        assert_eq!(err.reason(), r#"[{"field":"to","message":"required"}]"#);
    }

    #[test]
    fn test_error_trait() {
        let err = NftError::unexpected("x");
        let _: &dyn std::error::Error = &err;
    }
}
