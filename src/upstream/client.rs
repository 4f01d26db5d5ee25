//! Shared HTTP client for the upstream services.
//!
//! A single [`UpstreamClient`] is built at startup and reused by every
//! request so connections are pooled. Each call forwards the header
//! allowlist, logs the request and the answer, and classifies the
//! outcome into a [`Fetched`] value or an [`UpstreamError`].

use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use super::headers::forward_headers;
use crate::domain::Dependency;
use crate::error::UpstreamError;
use crate::json::from_object_slice;

/// A decoded 2xx answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    /// Decoded body.
    pub value: T,
    /// 2xx status the service answered with.
    pub status: StatusCode,
}

/// Pooled client used for every upstream call.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Creates a client with a total request timeout and a connect timeout.
    ///
    /// # Errors
    ///
    /// Returns the [`reqwest::Error`] raised when the TLS backend or the
    /// system resolver cannot be initialised.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Issues `GET url` on behalf of the inbound request whose headers are
    /// `inbound`, and decodes the JSON body as `T`.
    ///
    /// The response body is read to the end on every path, including
    /// non-2xx answers.
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::Transport`] if the request cannot be sent or the
    ///   body cannot be read (including timeouts and invalid URLs).
    /// - [`UpstreamError::Status`] for any non-2xx answer.
    /// - [`UpstreamError::Decode`] if a 2xx body is not a JSON object
    ///   matching `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        dependency: Dependency,
        url: &str,
        inbound: &HeaderMap,
    ) -> Result<Fetched<T>, UpstreamError> {
        let mut headers = HeaderMap::new();
        forward_headers(inbound, &mut headers);
        tracing::debug!(%dependency, method = "GET", url, ?headers, "calling upstream");

        let response = match self.http.get(url).headers(headers).send().await {
            Ok(response) => response,
            Err(source) => {
                tracing::error!(
                    %dependency,
                    method = "GET",
                    url,
                    timeout = source.is_timeout(),
                    error = %source,
                    "upstream request failed"
                );
                return Err(UpstreamError::Transport { dependency, source });
            }
        };

        let status = response.status();
        tracing::debug!(
            %dependency,
            method = "GET",
            url,
            %status,
            headers = ?response.headers(),
            "upstream answered"
        );

        let body = response.bytes().await;

        if !status.is_success() {
            tracing::error!(%dependency, method = "GET", url, %status, "upstream rejected request");
            return Err(UpstreamError::Status { dependency, status });
        }

        let body = body.map_err(|source| {
            tracing::error!(%dependency, method = "GET", url, %status, error = %source, "failed to read upstream body");
            UpstreamError::Transport { dependency, source }
        })?;

        match from_object_slice(&body) {
            Ok(value) => Ok(Fetched { value, status }),
            Err(source) => {
                tracing::error!(%dependency, method = "GET", url, %status, error = %source, "failed to decode upstream body");
                Err(UpstreamError::Decode {
                    dependency,
                    status,
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::http::HeaderValue;
    use serde_json::{Map, Value, json};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::domain::Match;

    fn client() -> UpstreamClient {
        let Ok(client) = UpstreamClient::new(Duration::from_secs(2), Duration::from_secs(1)) else {
            panic!("client must build");
        };
        client
    }

    async fn server_answering(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resource"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn decodes_typed_payload() {
        let server = server_answering(200, r#"{"homeTeam":"A","awayTeam":"B"}"#).await;
        let url = format!("{}/resource", server.uri());

        let result = client()
            .get_json::<Match>(Dependency::Matches, &url, &HeaderMap::new())
            .await;
        let Ok(fetched) = result else {
            panic!("expected success");
        };
        assert_eq!(fetched.status, StatusCode::OK);
        assert_eq!(fetched.value.home_team, "A");
        assert_eq!(fetched.value.away_team, "B");
    }

    #[tokio::test]
    async fn accepts_any_2xx_status() {
        let server = server_answering(203, r#"{"email":"x@y.com","id":7}"#).await;
        let url = format!("{}/resource", server.uri());

        let result = client()
            .get_json::<Map<String, Value>>(Dependency::Players, &url, &HeaderMap::new())
            .await;
        let Ok(fetched) = result else {
            panic!("expected success");
        };
        assert_eq!(fetched.status.as_u16(), 203);
        assert_eq!(fetched.value.get("email"), Some(&json!("x@y.com")));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = server_answering(503, "maintenance").await;
        let url = format!("{}/resource", server.uri());

        let result = client()
            .get_json::<Match>(Dependency::Matches, &url, &HeaderMap::new())
            .await;
        let Err(err) = result else {
            panic!("expected failure");
        };
        assert!(matches!(err, UpstreamError::Status { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(err.status_code(), 503);
    }

    #[tokio::test]
    async fn undecodable_body_reports_zero() {
        let server = server_answering(200, "<html>").await;
        let url = format!("{}/resource", server.uri());

        let result = client()
            .get_json::<Map<String, Value>>(Dependency::Championships, &url, &HeaderMap::new())
            .await;
        let Err(err) = result else {
            panic!("expected failure");
        };
        assert!(matches!(err, UpstreamError::Decode { status, .. } if status == StatusCode::OK));
        assert_eq!(err.status_code(), 0);
    }

    #[tokio::test]
    async fn array_body_is_a_decode_error() {
        let server = server_answering(200, r#"["A","B",""]"#).await;
        let url = format!("{}/resource", server.uri());

        let result = client()
            .get_json::<Match>(Dependency::Matches, &url, &HeaderMap::new())
            .await;
        let Err(err) = result else {
            panic!("arrays are not match payloads");
        };
        assert!(matches!(err, UpstreamError::Decode { .. }));
        assert_eq!(err.status_code(), 0);
    }

    #[tokio::test]
    async fn invalid_url_is_a_transport_error() {
        let result = client()
            .get_json::<Match>(Dependency::Matches, "", &HeaderMap::new())
            .await;
        let Err(err) = result else {
            panic!("expected failure");
        };
        assert!(matches!(err, UpstreamError::Transport { .. }));
        assert_eq!(err.status_code(), 0);
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let Ok(client) = UpstreamClient::new(Duration::from_millis(100), Duration::from_millis(100))
        else {
            panic!("client must build");
        };
        let result = client
            .get_json::<Match>(Dependency::Matches, &server.uri(), &HeaderMap::new())
            .await;
        let Err(UpstreamError::Transport { source, .. }) = result else {
            panic!("expected transport failure");
        };
        assert!(source.is_timeout());
    }

    #[tokio::test]
    async fn forwards_only_allowlisted_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("authorization", "Bearer t"))
            .and(header("x-b3-spanid", "a2fb4a1d1a96d312"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let mut inbound = HeaderMap::new();
        inbound.insert("authorization", HeaderValue::from_static("Bearer t"));
        inbound.insert("x-b3-spanid", HeaderValue::from_static("a2fb4a1d1a96d312"));
        inbound.insert("cookie", HeaderValue::from_static("secret=1"));

        let result = client()
            .get_json::<Match>(Dependency::Matches, &server.uri(), &inbound)
            .await;
        assert!(result.is_ok());

        let Some(requests) = server.received_requests().await else {
            panic!("request recording enabled");
        };
        assert!(requests.iter().all(|r| r.headers.get("cookie").is_none()));
    }
}
