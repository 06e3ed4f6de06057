//! Outbound HTTP client.
//!
//! # Responsibilities
//! - Hold the process-wide reqwest client (30s timeout, 5 redirects)
//! - Issue exactly one outbound request per relay attempt
//! - Classify send failures into the relay error taxonomy
//!
//! # Design Decisions
//! - Every HTTP status the target returns (1xx-5xx) is a valid reply,
//!   never a transport failure
//! - Timeouts and post-dispatch network failures map to NoResponse
//!   (504); anything the client rejects during construction maps to
//!   SendFailure (500)
//! - Connection reuse inside reqwest is invisible to the contract

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode};
use std::time::Duration;

use crate::config::RelayConfig;
use crate::relay::error::RelayError;

/// What the target sent back: status and body, nothing else survives.
#[derive(Debug)]
pub struct TargetReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Outbound client wrapper, cheap to clone.
#[derive(Clone)]
pub struct Upstream {
    client: reqwest::Client,
}

impl Upstream {
    /// Build the outbound client from relay configuration.
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        Self::with_timeout(config.upstream_timeout, config.max_redirects)
    }

    /// Build an upstream with explicit limits (tests use short ones).
    pub fn with_timeout(timeout: Duration, max_redirects: usize) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(max_redirects))
            .build()?;
        Ok(Self { client })
    }

    /// Send one request to the target and buffer its reply.
    ///
    /// The body is attached only when non-empty, mirroring an inbound
    /// request that carried none.
    pub async fn send(
        &self,
        method: Method,
        target: &str,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<TargetReply, RelayError> {
        let mut request = self.client.request(method, target).headers(headers);
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request.send().await.map_err(classify_send_error)?;
        let status = response.status();

        // Status is already in hand; losing the body mid-read means the
        // target went away, same as never answering.
        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::NoResponse(e.to_string()))?;

        Ok(TargetReply { status, body })
    }
}

/// Map a reqwest send error onto the relay taxonomy.
fn classify_send_error(err: reqwest::Error) -> RelayError {
    if err.is_timeout() || err.is_connect() {
        RelayError::NoResponse(err.to_string())
    } else {
        RelayError::SendFailure(err.to_string())
    }
}
