//! Bet submission handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::BetSubmission;
use crate::app_state::AppState;
use crate::domain::{AggregateError, Bet};
use crate::error::{ErrorResponse, GatewayError};
use crate::json::from_object_slice;

/// `POST /api/bets` — Submit a bet.
///
/// # Errors
///
/// Returns [`GatewayError`] when the content type is not JSON, the body
/// cannot be decoded, or any upstream dependency fails.
#[utoipa::path(
    post,
    path = "/api/bets",
    tag = "Bets",
    summary = "Submit a bet",
    description = "Validates the submission, fetches match, player and championship data from the upstream services and returns the assembled bet.",
    request_body(content = BetSubmission, content_type = "application/json"),
    responses(
        (status = 201, description = "Bet created", body = Bet),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 415, description = "Content-Type is not application/json"),
        (status = 503, description = "One or more upstream services failed", body = AggregateError),
    )
)]
pub async fn create_bet(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    if !is_json(&headers) {
        return Err(GatewayError::UnsupportedMediaType);
    }

    let submission: BetSubmission = from_object_slice(&body).map_err(|err| {
        tracing::error!(error = %err, "failed reading the request body");
        GatewayError::InvalidPayload(err.to_string())
    })?;
    tracing::debug!(?submission, "bet submission received");

    let bet = state.bet_service.create_bet(&headers).await?;
    Ok((StatusCode::CREATED, Json(bet)))
}

/// Bet routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/bets", post(create_bet))
}

/// Whether the request declares a JSON body. Media type parameters such
/// as `charset` are ignored.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn accepts_json_content_types() {
        assert!(is_json(&with_content_type("application/json")));
        assert!(is_json(&with_content_type("Application/JSON")));
        assert!(is_json(&with_content_type("application/json; charset=utf-8")));
    }

    #[test]
    fn rejects_other_content_types() {
        assert!(!is_json(&HeaderMap::new()));
        assert!(!is_json(&with_content_type("text/plain")));
        assert!(!is_json(&with_content_type("application/jsonp")));
        assert!(!is_json(&with_content_type("application/x-www-form-urlencoded")));
    }
}
