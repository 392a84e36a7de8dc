//! Relay error types with HTTP status code mapping.
//!
//! [`RelayError`] is the central error type of the crate. Proxy handlers
//! return it directly and axum renders it as a structured JSON body. The
//! WebSocket relay only logs it: a relay peer never receives an error frame.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// ```json
/// {
///   "error": {
///     "code": 3002,
///     "message": "upstream returned 401 Unauthorized",
///     "details": "{\"error\":\"invalid_client\"}"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3000      | Server     | 500 Internal Server Error |
/// | 3001–3999 | Upstream   | 502 Bad Gateway           |
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Relay connection with the given ID is not registered.
    #[error("connection not found: {0}")]
    ConnectionNotFound(uuid::Uuid),

    /// The upstream API could not be reached or the exchange broke off.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    /// The upstream API answered with a non-success status.
    #[error("upstream returned {status}")]
    UpstreamStatus {
        /// Upstream HTTP status.
        status: StatusCode,
        /// Upstream response body, kept for diagnostics.
        body: String,
    },

    /// The upstream body did not have the expected shape.
    #[error("unexpected upstream payload: {0}")]
    UpstreamPayload(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::ConnectionNotFound(_) => 2001,
            Self::Internal(_) => 3000,
            Self::UpstreamUnavailable(_) => 3001,
            Self::UpstreamStatus { .. } => 3002,
            Self::UpstreamPayload(_) => 3003,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ConnectionNotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamUnavailable(_) | Self::UpstreamStatus { .. } | Self::UpstreamPayload(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(code = self.error_code(), error = %self, "request failed");
        }
        let details = match &self {
            Self::UpstreamStatus { body, .. } if !body.is_empty() => Some(body.clone()),
            _ => None,
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_statuses() {
        let cases = [
            (RelayError::InvalidRequest("x".into()), 1001, StatusCode::BAD_REQUEST),
            (
                RelayError::ConnectionNotFound(uuid::Uuid::nil()),
                2001,
                StatusCode::NOT_FOUND,
            ),
            (RelayError::Internal("x".into()), 3000, StatusCode::INTERNAL_SERVER_ERROR),
            (
                RelayError::UpstreamStatus {
                    status: StatusCode::UNAUTHORIZED,
                    body: String::new(),
                },
                3002,
                StatusCode::BAD_GATEWAY,
            ),
            (RelayError::UpstreamPayload("x".into()), 3003, StatusCode::BAD_GATEWAY),
        ];
        for (err, code, status) in cases {
            assert_eq!(err.error_code(), code);
            assert_eq!(err.status_code(), status);
        }
    }

    #[test]
    fn into_response_sets_status() {
        let response = RelayError::InvalidRequest("missing query".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
