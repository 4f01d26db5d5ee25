//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::BetService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bet service holding the pooled upstream client.
    pub bet_service: Arc<BetService>,
}

impl AppState {
    /// Wraps a [`BetService`] into shared state.
    #[must_use]
    pub fn new(bet_service: BetService) -> Self {
        Self {
            bet_service: Arc::new(bet_service),
        }
    }
}
