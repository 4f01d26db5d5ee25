//! Failure summary of the aggregate fetch.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Dependency;

/// Per-dependency status report returned with `503 Service Unavailable`.
///
/// Every dependency appears in `errors`, including the ones that
/// succeeded. A status of `0` means no usable HTTP status was obtained
/// (transport failure or an undecodable body).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AggregateError {
    /// Dependency name to HTTP status.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, u16>,
}

impl AggregateError {
    /// Builds the report from one status per dependency.
    #[must_use]
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = (Dependency, u16)>,
    {
        Self {
            errors: statuses
                .into_iter()
                .map(|(dep, status)| (dep.as_str().to_string(), status))
                .collect(),
        }
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, status) in &self.errors {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{name}={status}")?;
            first = false;
        }
        Ok(())
    }
}
