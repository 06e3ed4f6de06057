//! Request ID middleware.
//!
//! # Responsibilities
//! - Tag every inbound request with an `x-request-id` (UUID v4)
//! - Respect an ID the caller already supplied
//! - Echo the ID back on the response
//!
//! # Design Decisions
//! - ID added as early as possible so every log line can carry it
//! - A caller-supplied ID is trusted as-is; correlation across hops
//!   matters more than uniqueness

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Attach a request ID to the request and mirror it on the response.
pub async fn request_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    let id = match request.headers().get(X_REQUEST_ID) {
        Some(existing) => existing.clone(),
        None => {
            let generated = Uuid::new_v4().to_string();
            match HeaderValue::from_str(&generated) {
                Ok(value) => {
                    request.headers_mut().insert(X_REQUEST_ID, value.clone());
                    value
                }
                // A freshly formatted UUID is always a valid header
                // value; if that ever changes, skip tagging.
                Err(_) => return next.run(request).await,
            }
        }
    };

    let mut response = next.run(request).await;
    response.headers_mut().insert(X_REQUEST_ID, id);
    response
}
