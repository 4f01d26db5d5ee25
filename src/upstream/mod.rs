//! Outbound side: header propagation and the pooled upstream client.

pub mod client;
pub mod headers;

pub use client::{Fetched, UpstreamClient};
pub use headers::forward_headers;
