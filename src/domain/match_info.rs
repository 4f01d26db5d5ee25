//! Match data returned by the match service.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Score shown for the home team in every rendered match.
pub const HOME_TEAM_SCORE: u8 = 2;

/// Score shown for the away team in every rendered match.
pub const AWAY_TEAM_SCORE: u8 = 3;

/// A match as described by the match service.
///
/// Unknown fields in the upstream payload are ignored and missing ones
/// default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    /// Home team name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub home_team: String,
    /// Away team name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub away_team: String,
    /// Championship the match belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub championship: String,
}

/// Renders `"{homeTeam} 2x3 {awayTeam}"`. The scores are fixed and never
/// taken from the upstream payload.
impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {HOME_TEAM_SCORE}x{AWAY_TEAM_SCORE} {}",
            self.home_team, self.away_team
        )
    }
}
