//! Configuration management using environment variables
//!
//! Backend base addresses are required: a gateway with a missing or
//! malformed upstream address must fail at startup, not per request.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fmt;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Downstream service base addresses
    pub upstreams: UpstreamsConfig,

    /// Outbound HTTP client configuration
    pub http: HttpClientConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,
}

impl ServerConfig {
    /// Socket address string the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// One base address per downstream service
///
/// Addresses are kept as raw strings here; URL well-formedness is enforced
/// when the endpoint registry is built, still before the server starts.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamsConfig {
    /// Identity provider base address
    pub users_base_url: String,

    /// Routes inventory service base address
    pub routes_base_url: String,

    /// Stations directory service base address
    pub stations_base_url: String,

    /// Ticketing service base address
    pub tickets_base_url: String,
}

/// Outbound HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientConfig {
    /// Per-call deadline in seconds
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,

    /// Maximum idle pooled connections kept per backend host
    pub pool_max_idle_per_host: usize,

    /// Idle connection lifetime in seconds before the pool recycles it
    pub pool_idle_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Self {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .map_err(|e| Error::config(format!("Invalid SERVER_PORT: {}", e)))?,
            },
            upstreams: UpstreamsConfig {
                users_base_url: required("USERS_SERVICE_URL")?,
                routes_base_url: required("ROUTES_SERVICE_URL")?,
                stations_base_url: required("STATIONS_SERVICE_URL")?,
                tickets_base_url: required("TICKETS_SERVICE_URL")?,
            },
            http: HttpClientConfig {
                timeout_secs: parsed_or("UPSTREAM_TIMEOUT_SECS", 10)?,
                connect_timeout_secs: parsed_or("UPSTREAM_CONNECT_TIMEOUT_SECS", 5)?,
                pool_max_idle_per_host: parsed_or("UPSTREAM_POOL_MAX_IDLE", 10)?,
                pool_idle_timeout_secs: parsed_or("UPSTREAM_POOL_IDLE_TIMEOUT_SECS", 90)?,
            },
        };

        tracing::debug!(
            timeout_secs = config.http.timeout_secs,
            connect_timeout_secs = config.http.connect_timeout_secs,
            "configuration loaded"
        );

        Ok(config)
    }
}

/// Read a required environment variable
fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::config(format!("{} must be set", name)))
}

/// Read an optional environment variable, falling back to a default
fn parsed_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
