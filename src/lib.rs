//! # bets-gateway
//!
//! HTTP gateway for bet submissions.
//!
//! Each `POST /api/bets` fans out to three upstream services (match,
//! player, championship), forwarding an allowlist of auth and tracing
//! headers, and either assembles a bet from their answers or reports the
//! status of every dependency with `503 Service Unavailable`.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── BetService (service/)       fan-out / fan-in
//!     │
//!     ├── UpstreamClient (upstream/)  header allowlist, pooled reqwest client
//!     │
//!     └── Match, Player, Championship services
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod json;
pub mod service;
pub mod upstream;
