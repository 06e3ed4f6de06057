//! Target URL extraction from the inbound path.
//!
//! # Responsibilities
//! - Strip the mount prefix from the raw path-and-query string
//! - Validate that the remainder carries an explicit http/https scheme
//!
//! # Design Decisions
//! - The remainder is used VERBATIM as the outbound URL: no percent
//!   decoding, no normalization, no query re-parsing. Extraction works
//!   on the raw `path_and_query` string rather than a router capture,
//!   which would have been decoded.
//! - `http://` with nothing after it is accepted here; whether it is
//!   reachable is the upstream client's problem

use crate::relay::error::RelayError;

/// Path segment after which the target URL is expected.
pub const MOUNT_PREFIX: &str = "/request";

/// Extract the target URL from a raw path-and-query string.
///
/// Returns the byte-for-byte remainder after `/request/`, query string
/// included.
pub fn extract_target(path_and_query: &str) -> Result<&str, RelayError> {
    let candidate = path_and_query
        .strip_prefix(MOUNT_PREFIX)
        .map(|rest| rest.strip_prefix('/').unwrap_or(""))
        .unwrap_or("");

    if candidate.is_empty() {
        return Err(RelayError::MissingTarget);
    }
    if !candidate.starts_with("http://") && !candidate.starts_with("https://") {
        return Err(RelayError::InvalidScheme);
    }
    Ok(candidate)
}
