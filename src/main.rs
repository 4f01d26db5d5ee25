//! bets-gateway server entry point.
//!
//! Starts the Axum HTTP server with the bet and health endpoints.

use std::time::Instant;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use bets_gateway::api;
use bets_gateway::app_state::AppState;
use bets_gateway::config::{GatewayConfig, LogFormat};
use bets_gateway::service::BetService;
use bets_gateway::upstream::UpstreamClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started = Instant::now();

    // Load configuration
    let config = GatewayConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting bets-gateway");

    for key in config.endpoints.missing() {
        tracing::warn!(key, "upstream endpoint not configured; calls to it will fail");
    }

    // Build service layer
    let client = UpstreamClient::new(config.upstream_timeout, config.upstream_connect_timeout)
        .context("building upstream HTTP client")?;
    let bet_service = BetService::new(client, config.endpoints.clone());

    // Build router
    let app = api::build_app(AppState::new(bet_service), &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(
        addr = %config.listen_addr,
        elapsed = ?started.elapsed(),
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
