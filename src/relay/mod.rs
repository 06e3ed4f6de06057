//! Relay subsystem: the core of the service.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → target.rs (strip mount prefix, validate scheme)
//!     → headers.rs (copy headers minus origin-specific ones)
//!     → upstream.rs (one outbound call: 30s timeout, 5 redirects)
//!     → error.rs maps failures to 400/500/504 JSON
//!     → target status + body relayed verbatim to the caller
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound request per inbound request; no retries
//! - The target URL is the raw path remainder, never parsed or decoded
//! - A non-2xx target status is relayed as-is, not treated as failure
//! - Target response headers are dropped: only status and body pass
//!   through

pub mod error;
pub mod headers;
pub mod target;
pub mod upstream;

pub use error::RelayError;
pub use upstream::{TargetReply, Upstream};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::server::AppState;
use crate::http::X_REQUEST_ID;

/// Relay an inbound request to the target encoded in its path.
///
/// Mounted under `/request`; accepts any method.
pub async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    // 1. Extract and validate the target from the raw path-and-query.
    //    The router capture is not used: it would percent-decode.
    let raw_path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| request.uri().path());

    let target = match target::extract_target(raw_path) {
        Ok(t) => t.to_string(),
        Err(err) => {
            tracing::warn!(
                request_id = %request_id,
                path = %raw_path,
                error = %err,
                "Rejecting relay request"
            );
            return err.into_response();
        }
    };

    // 2. Mirror method and headers, minus the stripped set.
    let method = request.method().clone();
    let outbound_headers = headers::forwarded_headers(request.headers());

    // 3. Buffer the inbound body (bounded by the configured limit).
    let body = match axum::body::to_bytes(request.into_body(), state.config.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(
                request_id = %request_id,
                error = %err,
                "Failed to read inbound body"
            );
            return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
        }
    };

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        target = %target,
        body_bytes = body.len(),
        "Relaying request"
    );

    // 4. One outbound call; every target status is a valid reply.
    match state.upstream.send(method, &target, outbound_headers, body).await {
        Ok(reply) => {
            tracing::debug!(
                request_id = %request_id,
                target = %target,
                status = %reply.status,
                "Target responded"
            );
            let mut response = Response::new(Body::from(reply.body));
            *response.status_mut() = reply.status;
            response
        }
        Err(err) => {
            tracing::error!(
                request_id = %request_id,
                target = %target,
                error = %err,
                "Relay failed"
            );
            err.into_response()
        }
    }
}
