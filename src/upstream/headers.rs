//! Allowlisted header propagation from inbound to outbound requests.

use axum::http::HeaderMap;
use axum::http::header::HeaderName;

/// Headers copied from the inbound request to every upstream call:
/// credentials, client version and distributed-tracing context.
pub const FORWARDED_HEADERS: [&str; 9] = [
    "authorization",
    "x-version",
    // open tracing
    "x-request-id",
    "x-b3-traceid",
    "x-b3-spanid",
    "x-b3-parentspanid",
    "x-b3-sampled",
    "x-b3-flags",
    "x-ot-span-context",
];

/// Copies every allowlisted header with a non-empty value from `inbound`
/// into `outbound`, replacing any value already set there.
///
/// Only the first inbound value of a header is forwarded.
pub fn forward_headers(inbound: &HeaderMap, outbound: &mut HeaderMap) {
    for name in FORWARDED_HEADERS {
        if let Some(value) = inbound.get(name).filter(|v| !v.is_empty()) {
            outbound.insert(HeaderName::from_static(name), value.clone());
        }
    }
}
