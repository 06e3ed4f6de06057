//! Operational endpoints: liveness and usage.
//!
//! # Responsibilities
//! - `/health`: report service status, crate version and uptime
//! - `/`: a short HTML page describing how to call the relay
//!
//! # Design Decisions
//! - Uptime is measured from the process-start `Instant` in AppState,
//!   so it is monotonic and never negative

use axum::extract::State;
use axum::response::{Html, Json};
use serde::Serialize;

use crate::http::server::AppState;

/// Body of the `/health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    /// Seconds since process start.
    pub uptime: u64,
}

/// Liveness endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Forwarding relay is running",
        version: env!("CARGO_PKG_VERSION"),
        uptime: state.started_at.elapsed().as_secs(),
    })
}

/// Usage description served at the root.
pub async fn usage() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\
         <html>\
         <head><title>Forwarding Relay</title></head>\
         <body>\
         <h1>Forwarding Relay</h1>\
         <p>Relays any HTTP request to the absolute URL encoded in the path.</p>\
         <p>Usage: <code>/request/{full-url-with-protocol}</code></p>\
         <p>Example: <code>/request/https://example.com/api?x=1</code></p>\
         </body>\
         </html>",
    )
}
