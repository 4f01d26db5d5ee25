//! Service layer: business logic orchestration.
//!
//! [`BetService`] fans out to the upstream services through the shared
//! [`crate::upstream::UpstreamClient`] and assembles the resulting bet.

pub mod bet_service;

pub use bet_service::{BetContext, BetService};
