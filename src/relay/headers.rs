//! Outbound header construction.
//!
//! # Responsibilities
//! - Copy inbound headers onto the outbound request
//! - Drop headers that are wrong for a different origin
//!
//! # Design Decisions
//! - `host`, `origin` and `referer` name the relay's own origin and
//!   would break target-side virtual hosting or CORS checks
//! - `content-length` is recomputed by the outbound client when the
//!   body is re-attached; a stale value must not be forwarded
//! - Matching is case-insensitive (header names are, per HTTP spec);
//!   repeated header values are preserved in order
//! - `x-request-id` (attached by middleware before this copy runs) is
//!   deliberately forwarded so target-side logs can be correlated with
//!   relay logs

use axum::http::HeaderMap;

/// Headers never forwarded to the target.
const STRIPPED_HEADERS: [&str; 4] = ["host", "origin", "referer", "content-length"];

/// Build the header map for the outbound request.
pub fn forwarded_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut outbound = HeaderMap::with_capacity(inbound.len());
    for (name, value) in inbound {
        if is_stripped(name.as_str()) {
            continue;
        }
        outbound.append(name.clone(), value.clone());
    }
    outbound
}

fn is_stripped(name: &str) -> bool {
    STRIPPED_HEADERS
        .iter()
        .any(|stripped| name.eq_ignore_ascii_case(stripped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{HeaderName, HeaderValue};

    fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn strips_origin_specific_headers() {
        let inbound = header_map(&[
            ("host", "relay.local:3000"),
            ("origin", "http://relay.local"),
            ("referer", "http://relay.local/page"),
            ("content-length", "42"),
            ("accept", "application/json"),
            ("x-custom", "yes"),
        ]);

        let outbound = forwarded_headers(&inbound);

        assert!(outbound.get("host").is_none());
        assert!(outbound.get("origin").is_none());
        assert!(outbound.get("referer").is_none());
        assert!(outbound.get("content-length").is_none());
        assert_eq!(outbound.get("accept").unwrap(), "application/json");
        assert_eq!(outbound.get("x-custom").unwrap(), "yes");
    }

    #[test]
    fn strip_list_matches_case_insensitively() {
        assert!(is_stripped("Host"));
        assert!(is_stripped("ORIGIN"));
        assert!(is_stripped("Referer"));
        assert!(is_stripped("Content-Length"));
        assert!(!is_stripped("authorization"));
    }

    #[test]
    fn repeated_headers_survive_in_order() {
        let inbound = header_map(&[("x-tag", "one"), ("x-tag", "two")]);
        let outbound = forwarded_headers(&inbound);
        let values: Vec<_> = outbound.get_all("x-tag").iter().collect();
        assert_eq!(values, vec!["one", "two"]);
    }
}
