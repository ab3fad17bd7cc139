//! Static endpoint registry for downstream services
//!
//! Loaded once at process start from configuration, read-only afterwards,
//! and shared by reference across all in-flight requests. A missing or
//! malformed base address is a startup failure, never a per-request one.

use reqwest::Url;
use shared::{Error, Result, UpstreamsConfig};

/// Downstream service identity
///
/// An enum rather than free-form names: an unknown service cannot be
/// represented past startup, so `resolve` never fails at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Users,
    Routes,
    Stations,
    Tickets,
}

impl Upstream {
    /// Short label for structured logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Upstream::Users => "users",
            Upstream::Routes => "routes",
            Upstream::Stations => "stations",
            Upstream::Tickets => "tickets",
        }
    }
}

/// Immutable service-name → base-address mapping
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    users: Url,
    routes: Url,
    stations: Url,
    tickets: Url,
}

impl EndpointRegistry {
    /// Build the registry, validating every base address
    pub fn from_config(config: &UpstreamsConfig) -> Result<Self> {
        Ok(Self {
            users: parse_base("users", &config.users_base_url)?,
            routes: parse_base("routes", &config.routes_base_url)?,
            stations: parse_base("stations", &config.stations_base_url)?,
            tickets: parse_base("tickets", &config.tickets_base_url)?,
        })
    }

    /// Base address of a downstream service
    pub fn resolve(&self, upstream: Upstream) -> &Url {
        match upstream {
            Upstream::Users => &self.users,
            Upstream::Routes => &self.routes,
            Upstream::Stations => &self.stations,
            Upstream::Tickets => &self.tickets,
        }
    }

    /// Join a backend-relative path onto a base address
    ///
    /// Plain string concatenation rather than `Url::join`, which would
    /// discard any path prefix a base address carries.
    pub fn join(base: &Url, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined)
            .map_err(|e| Error::config(format!("constructed upstream URL is invalid: {}", e)))
    }
}

fn parse_base(name: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| Error::config(format!("invalid base address for {} service: {}", name, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config(format!(
            "base address for {} service must be http(s), got '{}'",
            name,
            url.scheme()
        )));
    }
    Ok(url)
}
