//! Names of the upstream services consulted for every bet.

use std::fmt;

/// One of the three services a bet submission depends on.
///
/// The string form is the key used in the `errors` map of
/// [`super::AggregateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dependency {
    /// Match service: home and away teams.
    Matches,
    /// Player service: the bettor's email.
    Players,
    /// Championship service: the championship title.
    Championships,
}

impl Dependency {
    /// Returns the wire name of this dependency.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matches => "matches",
            Self::Players => "players",
            Self::Championships => "championships",
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        let names: Vec<String> = [
            Dependency::Matches,
            Dependency::Players,
            Dependency::Championships,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(names, ["matches", "players", "championships"]);
    }
}
