//! HTTP mapping of operation-service failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::api::models::ErrorResponse;
use crate::error::{NftError, ValidationIssue};

/// Response-side error produced by the handlers.
///
/// Mirrors the three-way classification of [`NftError`]:
/// - `Validation` answers 400 with the raw issue array, unmodified
/// - `Domain` answers with the upstream's own status and message, verbatim
/// - `Unexpected` answers 500 with a generic `nft.error` body
#[derive(Debug)]
pub enum ApiError {
    /// Input-shape or business-rule failure.
    Validation(Vec<ValidationIssue>),
    /// Already-classified upstream failure, passed through.
    Domain {
        /// Upstream HTTP status.
        status: u16,
        /// Upstream error code.
        code: String,
        /// Upstream message.
        message: String,
    },
    /// Everything else; carries the best available description.
    Unexpected(String),
}

impl ApiError {
    /// Classify a mutating-endpoint failure.
    ///
    /// Structural match on the error variant; unmatched shapes fall through
    /// to the generic kind even when the underlying fault looked like a
    /// client error.
    #[must_use]
    pub fn classify(err: NftError) -> Self {
        match err {
            NftError::Validation(issues) => Self::Validation(issues),
            NftError::Domain {
                status,
                code,
                message,
            } => Self::Domain {
                status,
                code,
                message,
            },
            NftError::Unexpected { message } => Self::Unexpected(message),
        }
    }

    /// Wrap a read-only-endpoint failure.
    ///
    /// Lookups have no validation step and never pass upstream
    /// classifications through; every failure surfaces as the generic kind.
    #[must_use]
    pub fn lookup(err: NftError) -> Self {
        Self::Unexpected(err.reason())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(issues) => {
                warn!(issues = issues.len(), "Request failed validation");
                (StatusCode::BAD_REQUEST, Json(issues)).into_response()
            }
            Self::Domain {
                status,
                code,
                message,
            } => {
                warn!(status, code = %code, "Upstream rejected operation");
                let status = StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let body = ErrorResponse {
                    status_code: status.as_u16(),
                    error_code: code,
                    message,
                };
                (status, Json(body)).into_response()
            }
            Self::Unexpected(reason) => {
                error!(reason = %reason, "Unexpected failure in NFT operation");
                let body = ErrorResponse {
                    status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    error_code: "nft.error".to_string(),
                    message: format!("Unexpected error occurred. Reason: {reason}"),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::classify(NftError::validation_field("to", "required"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_domain_status_preserved() {
        let err = ApiError::classify(NftError::domain(402, "nft.payment", "payment required"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn test_unexpected_maps_to_500() {
        let err = ApiError::classify(NftError::unexpected("timeout"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_lookup_wraps_every_kind() {
        let err = ApiError::lookup(NftError::domain(403, "nft.forbidden", "denied"));
        match &err {
            ApiError::Unexpected(reason) => assert_eq!(reason, "denied"),
            other => panic!("wrong variant: {other:?}"),
        }
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_upstream_status_degrades_to_500() {
        let err = ApiError::Domain {
            status: 99,
            code: "nft.error".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
