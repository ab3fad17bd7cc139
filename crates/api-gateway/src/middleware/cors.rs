//! CORS middleware
//!
//! Environment-driven origin allowlist. Production mode (`ENVIRONMENT=production`)
//! enforces HTTPS-only origins and rejects wildcards; development falls back
//! to localhost defaults.

use actix_cors::Cors;
use actix_web::http::header;
use std::env;
use tracing::{debug, warn};

/// Create CORS middleware from the environment
///
/// `CORS_ALLOWED_ORIGINS` is a comma-separated list of exact origins. When
/// unset in production, cross-origin requests are blocked entirely.
pub fn cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let is_production = environment.to_lowercase() == "production";

    let allowed_origins_str = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| {
        if is_production {
            warn!(
                "CORS_ALLOWED_ORIGINS not set in production! CORS will be disabled. \
                 Set CORS_ALLOWED_ORIGINS to enable cross-origin requests."
            );
            String::new()
        } else {
            debug!("Using default CORS origins for development");
            "http://localhost:3000,http://localhost:8080".to_string()
        }
    });

    let allowed_origins: Vec<String> = allowed_origins_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|origin| {
            if origin == "*" {
                warn!("Wildcard (*) origin is not allowed; specify explicit origins");
                return false;
            }
            if is_production && !origin.starts_with("https://") {
                warn!("Rejecting non-HTTPS origin in production: {}", origin);
                return false;
            }
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                warn!("Invalid origin format: {}", origin);
                return false;
            }
            true
        })
        .collect();

    let mut cors = Cors::default();

    if allowed_origins.is_empty() {
        warn!("No valid CORS origins configured; cross-origin requests will be blocked");
    } else {
        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
            debug!("CORS: allowing origin {}", origin);
        }
    }

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(3600)
}
