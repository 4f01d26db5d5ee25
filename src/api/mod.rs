//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Bet endpoints are mounted under `/api`; the health check and static
//! assets live at the root.

pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod request_log;

use std::path::Path;

use axum::Router;
use axum::http::Method;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::app_state::AppState;

/// Builds the API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
}

/// Builds the complete application: API routes, static assets served
/// from `static_dir` under `/static`, request logging, panic recovery
/// and CORS.
pub fn build_app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([
        Method::GET,
        Method::HEAD,
        Method::PUT,
        Method::PATCH,
        Method::POST,
        Method::DELETE,
    ]);

    build_router()
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(request_log::trace_layer())
                .layer(CatchPanicLayer::new())
                .layer(cors),
        )
        .with_state(state)
}
