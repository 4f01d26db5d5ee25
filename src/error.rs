//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is what handlers return; each variant maps to a status
//! code and response body. [`UpstreamError`] describes a single failed
//! call to one of the upstream services.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{AggregateError, Dependency};

/// Structured JSON error response body.
///
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid request body: expected value at line 1 column 1"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Handler-level error enum with HTTP status code mapping.
///
/// | Variant                   | HTTP status | Body             |
/// |---------------------------|-------------|------------------|
/// | `InvalidPayload`          | 400         | [`ErrorResponse`] |
/// | `UnsupportedMediaType`    | 415         | empty            |
/// | `DependenciesUnavailable` | 503         | [`AggregateError`] |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request body is not valid JSON for the expected shape.
    #[error("invalid request body: {0}")]
    InvalidPayload(String),

    /// Request did not declare `Content-Type: application/json`.
    #[error("unsupported media type, expected application/json")]
    UnsupportedMediaType,

    /// At least one upstream dependency failed.
    #[error("upstream dependencies unavailable: {0}")]
    DependenciesUnavailable(AggregateError),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidPayload(_) => 1001,
            Self::UnsupportedMediaType => 1002,
            Self::DependenciesUnavailable(_) => 5003,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::DependenciesUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<AggregateError> for GatewayError {
    fn from(report: AggregateError) -> Self {
        Self::DependenciesUnavailable(report)
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::UnsupportedMediaType => status.into_response(),
            Self::DependenciesUnavailable(report) => (status, axum::Json(report)).into_response(),
            invalid @ Self::InvalidPayload(_) => {
                let body = ErrorResponse {
                    error: ErrorBody {
                        code: invalid.error_code(),
                        message: invalid.to_string(),
                        details: None,
                    },
                };
                (status, axum::Json(body)).into_response()
            }
        }
    }
}

/// Failure of a single upstream call.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The request could not be completed: connection refused, DNS
    /// failure, timeout, invalid URL or an interrupted body.
    #[error("{dependency} request failed: {source}")]
    Transport {
        /// Service that was called.
        dependency: Dependency,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("{dependency} answered {status}")]
    Status {
        /// Service that was called.
        dependency: Dependency,
        /// Status received.
        status: StatusCode,
    },

    /// The service answered 2xx but the body is not the expected JSON.
    #[error("{dependency} body could not be decoded: {source}")]
    Decode {
        /// Service that was called.
        dependency: Dependency,
        /// Status received with the undecodable body.
        status: StatusCode,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    /// Service this error originates from.
    #[must_use]
    pub const fn dependency(&self) -> Dependency {
        match self {
            Self::Transport { dependency, .. }
            | Self::Status { dependency, .. }
            | Self::Decode { dependency, .. } => *dependency,
        }
    }

    /// Status reported to clients in [`AggregateError`].
    ///
    /// Only [`UpstreamError::Status`] carries the real code; transport and
    /// decode failures report `0`.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Status { status, .. } => status.as_u16(),
            Self::Transport { .. } | Self::Decode { .. } => 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::Value;

    use super::*;

    async fn body_of(response: Response) -> Vec<u8> {
        let Ok(bytes) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body must be readable");
        };
        bytes.to_vec()
    }

    #[tokio::test]
    async fn unsupported_media_type_has_empty_body() {
        let response = GatewayError::UnsupportedMediaType.into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn invalid_payload_uses_structured_body() {
        let response = GatewayError::InvalidPayload("eof".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let Ok(body) = serde_json::from_slice::<Value>(&body_of(response).await) else {
            panic!("body must be JSON");
        };
        assert_eq!(body["error"]["code"], 1001);
        assert_eq!(body["error"]["message"], "invalid request body: eof");
    }

    #[tokio::test]
    async fn dependencies_unavailable_returns_report() {
        let report = AggregateError::from_statuses([
            (Dependency::Matches, 0),
            (Dependency::Players, 200),
            (Dependency::Championships, 502),
        ]);
        let response = GatewayError::from(report).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let Ok(body) = serde_json::from_slice::<Value>(&body_of(response).await) else {
            panic!("body must be JSON");
        };
        assert_eq!(
            body,
            serde_json::json!({"errors": {"matches": 0, "players": 200, "championships": 502}})
        );
    }

    #[test]
    fn upstream_status_codes() {
        let status = UpstreamError::Status {
            dependency: Dependency::Players,
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(status.status_code(), 404);
        assert_eq!(status.dependency(), Dependency::Players);
        assert_eq!(status.to_string(), "players answered 404 Not Found");

        let Err(source) = serde_json::from_str::<Value>("{") else {
            panic!("truncated JSON must fail");
        };
        let decode = UpstreamError::Decode {
            dependency: Dependency::Matches,
            status: StatusCode::OK,
            source,
        };
        assert_eq!(decode.status_code(), 0);
    }
}
