//! REST endpoint handlers organized by resource.

pub mod bets;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().merge(bets::routes())
}
