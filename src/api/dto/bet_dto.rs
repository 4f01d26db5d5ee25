//! Bet submission DTO.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /api/bets`.
///
/// Every field is optional and unknown fields are ignored. The submission
/// is validated as JSON and logged; the response is built entirely from
/// upstream data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BetSubmission {
    /// Proposed home team score.
    pub home_team_score: String,
    /// Proposed away team score.
    pub away_team_score: String,
    /// Championship name.
    pub championship: String,
    /// Match description.
    #[serde(rename = "match")]
    pub match_: String,
    /// Bettor email.
    pub email: String,
}
