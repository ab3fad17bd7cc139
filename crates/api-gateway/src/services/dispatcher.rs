//! Outbound request dispatch over a pooled HTTP transport
//!
//! The transport is a trait so handlers can be exercised without a network
//! (see the recording stub under `tests/`). The production implementation
//! wraps one pooled `reqwest::Client`. All per-call state (headers, body,
//! deadline) lives on the request builder, never on the shared client, so
//! concurrent requests cannot contaminate each other.

use async_trait::async_trait;
use reqwest::{Method, Url};
use shared::{Error, HttpClientConfig, Result, TransportKind};
use std::time::Duration;

/// Fully resolved outbound request, owned by a single inbound call
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
    /// Bearer token propagated from the inbound request, if the operation
    /// requires identity
    pub bearer: Option<String>,
    /// Correlation id forwarded to the backend as `x-request-id`
    pub request_id: Option<String>,
}

/// Raw backend response before translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Transport abstraction over the outbound HTTP call
///
/// No retries at this layer: backend operations are not guaranteed
/// idempotent, so retry policy belongs to callers that know better.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse>;
}

/// Production transport: pooled reqwest client with a bounded per-call
/// deadline
pub struct HttpDispatcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpDispatcher {
    pub fn new(config: &HttpClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }
}

#[async_trait]
impl Transport for HttpDispatcher {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .timeout(self.timeout);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(request_id) = &request.request_id {
            builder = builder.header("x-request-id", request_id);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;
        Ok(RawResponse { status, body })
    }
}

/// Map a reqwest failure onto the transport taxonomy
///
/// The detailed error (which may name hosts) stays in the server-side log;
/// clients only ever see the generic per-kind message.
fn classify(err: reqwest::Error) -> Error {
    let kind = if err.is_timeout() {
        TransportKind::Timeout
    } else if err.is_connect() {
        let detail = format!("{:?}", err).to_lowercase();
        if detail.contains("dns") {
            TransportKind::Dns
        } else {
            TransportKind::ConnectionRefused
        }
    } else {
        TransportKind::Other
    };

    tracing::warn!(kind = kind.as_str(), error = %err, "outbound call failed");
    Error::transport(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outbound_requests_compare_structurally() {
        let url = Url::parse("http://tickets.internal/GetTicket/7").unwrap();
        let a = OutboundRequest {
            method: Method::GET,
            url: url.clone(),
            query: vec![("state", "Activo".to_string())],
            body: None,
            bearer: None,
            request_id: None,
        };
        let b = OutboundRequest {
            method: Method::GET,
            url,
            query: vec![("state", "Activo".to_string())],
            body: None,
            bearer: None,
            request_id: None,
        };
        assert_eq!(a, b);

        let mut c = b.clone();
        c.body = Some(json!({"price": 1}));
        assert_ne!(a, c);
    }

    #[test]
    fn test_dispatcher_builds_from_config() {
        let dispatcher = HttpDispatcher::new(&HttpClientConfig {
            timeout_secs: 10,
            connect_timeout_secs: 5,
            pool_max_idle_per_host: 10,
            pool_idle_timeout_secs: 90,
        });
        assert!(dispatcher.is_ok());
    }
}
