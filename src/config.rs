//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Default bind address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9999";

/// Errors raised while loading [`GatewayConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `LISTEN_ADDR` is set but is not a socket address.
    #[error("invalid LISTEN_ADDR {value:?}: {source}")]
    InvalidListenAddr {
        /// Raw value read from the environment.
        value: String,
        /// Parse failure.
        #[source]
        source: AddrParseError,
    },
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// URLs of the three services consulted for every bet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamEndpoints {
    /// Match service (`MATCH_SVC`).
    pub match_url: String,
    /// Player service (`PLAYER_SVC`).
    pub player_url: String,
    /// Championship service (`CHAMPIONSHIP_SVC`).
    pub championship_url: String,
}

impl UpstreamEndpoints {
    /// Returns the environment keys whose endpoint is empty.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("MATCH_SVC", &self.match_url),
            ("PLAYER_SVC", &self.player_url),
            ("CHAMPIONSHIP_SVC", &self.championship_url),
        ]
        .into_iter()
        .filter(|(_, url)| url.trim().is_empty())
        .map(|(key, _)| key)
        .collect()
    }
}

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to.
    pub listen_addr: SocketAddr,

    /// Upstream service URLs.
    pub endpoints: UpstreamEndpoints,

    /// Total timeout applied to each upstream request.
    pub upstream_timeout: Duration,

    /// Timeout for establishing an upstream connection.
    pub upstream_connect_timeout: Duration,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Log output format.
    pub log_format: LogFormat,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidListenAddr`] if `LISTEN_ADDR` is set
    /// but cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`GatewayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let endpoints = UpstreamEndpoints {
            match_url: lookup("MATCH_SVC").unwrap_or_default(),
            player_url: lookup("PLAYER_SVC").unwrap_or_default(),
            championship_url: lookup("CHAMPIONSHIP_SVC").unwrap_or_default(),
        };

        let upstream_timeout =
            Duration::from_millis(parse_value(lookup("UPSTREAM_TIMEOUT_MS"), 5_000));
        let upstream_connect_timeout =
            Duration::from_millis(parse_value(lookup("UPSTREAM_CONNECT_TIMEOUT_MS"), 2_000));

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.is_empty())
            .map_or_else(|| PathBuf::from("assets"), PathBuf::from);

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            endpoints,
            upstream_timeout,
            upstream_connect_timeout,
            static_dir,
            log_format,
        })
    }
}

/// Parses an optional raw value as `T`, returning `default` on missing
/// or invalid values.
fn parse_value<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
