//! OpenAPI description of the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{BetSubmission, HealthStatus};
use crate::api::handlers;
use crate::domain::{AggregateError, Bet};
use crate::error::{ErrorBody, ErrorResponse};

/// OpenAPI document for the gateway, served at `/api-docs/openapi.json`
/// when the `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "bets-gateway", description = "Bet submission gateway"),
    paths(handlers::bets::create_bet, handlers::system::health_handler),
    components(schemas(Bet, BetSubmission, AggregateError, HealthStatus, ErrorResponse, ErrorBody)),
    tags(
        (name = "Bets", description = "Bet submission"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;
