//! Domain layer: the values exchanged with clients and upstream services.
//!
//! Nothing here outlives a single inbound request.

pub mod aggregate_error;
pub mod bet;
pub mod dependency;
pub mod match_info;

pub use aggregate_error::AggregateError;
pub use bet::Bet;
pub use dependency::Dependency;
pub use match_info::Match;
