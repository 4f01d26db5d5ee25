//! Bet service: fans out to the upstream services and assembles the bet.

use std::collections::HashMap;

use axum::http::HeaderMap;

use crate::config::UpstreamEndpoints;
use crate::domain::{AggregateError, Bet, Dependency, Match};
use crate::error::UpstreamError;
use crate::upstream::{Fetched, UpstreamClient};

/// String fields returned by the player and championship services.
///
/// Any value other than a string or `null` makes the body undecodable.
type StringFields = HashMap<String, Option<String>>;

/// Everything needed to assemble a [`Bet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetContext {
    /// Match from the match service.
    pub game: Match,
    /// `email` field of the player service answer.
    pub email: String,
    /// `title` field of the championship service answer.
    pub championship: String,
}

/// Orchestrates the three upstream calls behind `POST /api/bets`.
///
/// Holds the shared [`UpstreamClient`] and the endpoint URLs; carries no
/// per-request state.
#[derive(Debug, Clone)]
pub struct BetService {
    client: UpstreamClient,
    endpoints: UpstreamEndpoints,
}

impl BetService {
    /// Creates a new `BetService`.
    #[must_use]
    pub fn new(client: UpstreamClient, endpoints: UpstreamEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Fetches match, player and championship concurrently.
    ///
    /// All three calls run to completion before the outcome is decided.
    /// Dropping the returned future cancels the calls still in flight.
    ///
    /// # Errors
    ///
    /// Returns an [`AggregateError`] listing the status of every
    /// dependency when at least one call failed.
    pub async fn gather(&self, inbound: &HeaderMap) -> Result<BetContext, AggregateError> {
        let (game, player, championship) = tokio::join!(
            self.client
                .get_json::<Match>(Dependency::Matches, &self.endpoints.match_url, inbound),
            self.client
                .get_json::<StringFields>(Dependency::Players, &self.endpoints.player_url, inbound),
            self.client.get_json::<StringFields>(
                Dependency::Championships,
                &self.endpoints.championship_url,
                inbound
            ),
        );

        match (game, player, championship) {
            (Ok(game), Ok(player), Ok(championship)) => Ok(BetContext {
                game: game.value,
                email: string_field(&player.value, "email"),
                championship: string_field(&championship.value, "title"),
            }),
            (game, player, championship) => {
                let report = AggregateError::from_statuses([
                    (Dependency::Matches, reported_status(&game)),
                    (Dependency::Players, reported_status(&player)),
                    (Dependency::Championships, reported_status(&championship)),
                ]);
                tracing::warn!(%report, "bet dependencies unavailable");
                Err(report)
            }
        }
    }

    /// Gathers the upstream data and assembles the resulting [`Bet`].
    ///
    /// # Errors
    ///
    /// Propagates the [`AggregateError`] from [`BetService::gather`].
    pub async fn create_bet(&self, inbound: &HeaderMap) -> Result<Bet, AggregateError> {
        let context = self.gather(inbound).await?;
        let bet = Bet::assemble(&context.game, context.email, context.championship);
        tracing::info!(game = %bet.match_, championship = %bet.championship, "bet created");
        Ok(bet)
    }
}

/// Status recorded for a dependency in the aggregate report.
fn reported_status<T>(result: &Result<Fetched<T>, UpstreamError>) -> u16 {
    match result {
        Ok(fetched) => fetched.status.as_u16(),
        Err(err) => {
            tracing::debug!(dependency = %err.dependency(), error = %err, "dependency failed");
            err.status_code()
        }
    }
}

/// Reads a string field, yielding an empty string when it is missing or
/// `null`.
fn string_field(fields: &StringFields, key: &str) -> String {
    fields.get(key).cloned().flatten().unwrap_or_default()
}
