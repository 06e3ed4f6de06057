//! Relay error taxonomy.
//!
//! # Responsibilities
//! - Classify every way a relay attempt can fail
//! - Map each failure onto a well-formed HTTP response
//! - Keep diagnostic detail out of caller-visible bodies (except the
//!   send-failure path, which intentionally includes a short message)
//!
//! # Design Decisions
//! - A target that responds with a non-success status is NOT an error;
//!   that case never appears here
//! - All variants convert to responses at the handler boundary; nothing
//!   propagates far enough to crash the process

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// Failure modes of a single relay attempt.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The mount prefix was invoked with nothing after it.
    #[error("no target URL supplied after mount prefix")]
    MissingTarget,

    /// The candidate target does not carry an http/https scheme.
    #[error("target URL does not start with http:// or https://")]
    InvalidScheme,

    /// The outbound request was dispatched but no usable response came
    /// back (timeout, connection refused/reset, truncated body).
    #[error("no response from target: {0}")]
    NoResponse(String),

    /// The outbound request could not be constructed or sent at all.
    #[error("failed to send request: {0}")]
    SendFailure(String),

    /// Anything escaping the relay pipeline; detail is logged, never
    /// returned to the caller.
    #[error("internal relay error")]
    Internal,
}

impl RelayError {
    /// Status code this failure maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingTarget | RelayError::InvalidScheme => StatusCode::BAD_REQUEST,
            RelayError::NoResponse(_) => StatusCode::GATEWAY_TIMEOUT,
            RelayError::SendFailure(_) | RelayError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = match &self {
            RelayError::MissingTarget => json!({
                "error": "Target URL is required. Usage: /request/{full-url-with-protocol}",
            }),
            RelayError::InvalidScheme => json!({
                "error": "Target URL must start with http:// or https://",
            }),
            RelayError::NoResponse(_) => json!({
                "error": "Gateway timeout - no response from target server",
            }),
            RelayError::SendFailure(message) => json!({
                "error": format!("Server error: {}", message),
            }),
            RelayError::Internal => json!({
                "error": "Internal Server Error",
            }),
        };
        (self.status(), Json(body)).into_response()
    }
}
