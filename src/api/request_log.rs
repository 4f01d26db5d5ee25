//! Request logging for the HTTP surface.
//!
//! Every request gets an `INFO` span and a completion event. Request and
//! response headers are added to them only while `DEBUG` is enabled.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, MakeSpan, OnResponse, TraceLayer,
};
use tracing::{Level, Span};

/// Opens the per-request span.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl MakeSpan<Body> for RequestSpan {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        DefaultMakeSpan::new()
            .level(Level::INFO)
            .include_headers(tracing::enabled!(Level::DEBUG))
            .make_span(request)
    }
}

/// Logs the status and latency of every response.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseLog;

impl<B> OnResponse<B> for ResponseLog {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        DefaultOnResponse::new()
            .level(Level::INFO)
            .latency_unit(LatencyUnit::Millis)
            .include_headers(tracing::enabled!(Level::DEBUG))
            .on_response(response, latency, span);
    }
}

/// Trace layer applied to the whole application.
#[must_use]
pub fn trace_layer()
-> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan, DefaultOnRequest, ResponseLog> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(ResponseLog)
}
