//! Request logging: headers appear only when `DEBUG` is enabled.

#![allow(clippy::panic)]

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use bets_gateway::api::build_app;
use bets_gateway::app_state::AppState;
use bets_gateway::config::UpstreamEndpoints;
use bets_gateway::service::BetService;
use bets_gateway::upstream::UpstreamClient;

#[derive(Debug, Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let Ok(buf) = self.0.lock() else {
            panic!("log buffer poisoned");
        };
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let Ok(mut buf) = self.0.lock() else {
            return Err(io::Error::other("log buffer poisoned"));
        };
        buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn app() -> Router {
    let Ok(client) = UpstreamClient::new(Duration::from_secs(1), Duration::from_secs(1)) else {
        panic!("client must build");
    };
    let endpoints = UpstreamEndpoints {
        match_url: "http://127.0.0.1:9/matches".to_string(),
        player_url: "http://127.0.0.1:9/players".to_string(),
        championship_url: "http://127.0.0.1:9/championships".to_string(),
    };
    let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    build_app(AppState::new(BetService::new(client, endpoints)), &assets)
}

async fn health_logs(level: Level) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let Ok(request) = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-77")
        .body(Body::empty())
    else {
        panic!("request must build");
    };
    let Ok(response) = app().oneshot(request).await else {
        panic!("router is infallible");
    };
    assert_eq!(response.status(), StatusCode::OK);

    logs.contents()
}

#[tokio::test]
async fn debug_level_logs_request_and_response_headers() {
    let logs = health_logs(Level::DEBUG).await;
    assert!(logs.contains("trace-77"), "request headers missing: {logs}");
    assert!(logs.contains("application/json"), "response headers missing: {logs}");
}

#[tokio::test]
async fn info_level_omits_headers() {
    let logs = health_logs(Level::INFO).await;
    assert!(logs.contains("/health"), "request span missing: {logs}");
    assert!(!logs.contains("trace-77"), "headers leaked at info: {logs}");
}
