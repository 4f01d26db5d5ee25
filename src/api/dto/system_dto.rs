//! System endpoint DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Health check response, always `{"status":"UP"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthStatus {
    /// Service status.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
}

impl HealthStatus {
    /// The only status the gateway reports.
    #[must_use]
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}
