//! Shared library for the transit platform gateway
//!
//! This crate provides common functionality used by the gateway binary:
//! - Error handling types
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{Config, HttpClientConfig, ServerConfig, UpstreamsConfig};
pub use error::{Error, Result, TransportKind};

/// Initialize tracing subscriber for structured logging
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shared=debug,api_gateway=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
