//! The bet returned to the client once all dependencies answered.

use serde::Serialize;
use utoipa::ToSchema;

use super::match_info::{AWAY_TEAM_SCORE, HOME_TEAM_SCORE, Match};

/// An accepted bet.
///
/// Built once per successful submission and serialized as the response
/// body. Empty fields are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    /// Home team score, always `"2"`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub home_team_score: String,
    /// Away team score, always `"3"`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub away_team_score: String,
    /// Championship title from the championship service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub championship: String,
    /// Rendered match, e.g. `"A 2x3 B"`.
    #[serde(rename = "match", skip_serializing_if = "String::is_empty")]
    pub match_: String,
    /// Player email from the player service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
}

impl Bet {
    /// Assembles a bet from the three upstream results.
    #[must_use]
    pub fn assemble(game: &Match, email: String, championship: String) -> Self {
        Self {
            home_team_score: HOME_TEAM_SCORE.to_string(),
            away_team_score: AWAY_TEAM_SCORE.to_string(),
            championship,
            match_: game.to_string(),
            email,
        }
    }
}
