//! Error types for the gateway

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of an outbound transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// The upstream did not answer within the configured deadline
    Timeout,
    /// The connection was refused or dropped before a response arrived
    ConnectionRefused,
    /// The upstream host name could not be resolved
    Dns,
    /// Any other transport-level failure
    Other,
}

impl TransportKind {
    /// Short label for structured logging
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Timeout => "timeout",
            TransportKind::ConnectionRefused => "connection_refused",
            TransportKind::Dns => "dns",
            TransportKind::Other => "other",
        }
    }

    /// Client-facing message. Never includes addresses or error chains.
    pub fn client_message(&self) -> &'static str {
        match self {
            TransportKind::Timeout => "Upstream service did not respond in time",
            TransportKind::ConnectionRefused | TransportKind::Dns | TransportKind::Other => {
                "Upstream service is unavailable"
            }
        }
    }
}

/// Application error types
///
/// Every failure a request can hit is an explicit variant propagated as a
/// value; handlers convert them into the uniform response envelope.
#[derive(Debug, Error)]
pub enum Error {
    /// Startup configuration errors (missing or malformed backend address)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request rejected before dispatch (malformed enum literal, bad date,
    /// non-positive price, missing required field)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Identity required but the inbound request carried no usable bearer token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Outbound call failed at the transport level; no backend verdict exists
    #[error("Transport failure: {}", kind.as_str())]
    Transport { kind: TransportKind },

    /// Backend answered with a non-2xx status; passed through verbatim
    #[error("Backend responded with status {status}")]
    Backend { status: u16, body: String },

    /// Backend 2xx payload did not match the declared shape
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a Validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an Unauthorized error
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Create a Transport error
    pub fn transport(kind: TransportKind) -> Self {
        Self::Transport { kind }
    }

    /// Create a Serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// HTTP status the gateway answers with for this error
    ///
    /// Backend statuses are reused verbatim; transport failures map onto the
    /// conventional bad-gateway pair.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Config(_) => 500,
            Error::Validation(_) => 400,
            Error::Unauthorized(_) => 401,
            Error::Transport {
                kind: TransportKind::Timeout,
            } => 504,
            Error::Transport { .. } => 502,
            Error::Backend { status, .. } => *status,
            Error::Serialization(_) => 502,
        }
    }

    /// Message placed in the response envelope
    ///
    /// Backend error bodies pass through unchanged; everything else is a
    /// gateway-owned message with no internal detail.
    pub fn client_message(&self) -> String {
        match self {
            Error::Config(_) => "Gateway is misconfigured".to_string(),
            Error::Validation(msg) => msg.clone(),
            Error::Unauthorized(msg) => msg.clone(),
            Error::Transport { kind } => kind.client_message().to_string(),
            Error::Backend { body, .. } => {
                if body.trim().is_empty() {
                    "Upstream service reported an error".to_string()
                } else {
                    body.clone()
                }
            }
            Error::Serialization(_) => {
                "Upstream service returned an unreadable response".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(Error::validation("bad").http_status(), 400);
        assert_eq!(Error::unauthorized("no token").http_status(), 401);
        assert_eq!(Error::transport(TransportKind::Timeout).http_status(), 504);
        assert_eq!(
            Error::transport(TransportKind::ConnectionRefused).http_status(),
            502
        );
        assert_eq!(Error::transport(TransportKind::Dns).http_status(), 502);
        assert_eq!(Error::serialization("bad shape").http_status(), 502);
        assert_eq!(Error::config("missing var").http_status(), 500);
    }

    #[test]
    fn test_backend_status_reused_verbatim() {
        let err = Error::Backend {
            status: 409,
            body: r#"{"detail":"duplicate ticket"}"#.to_string(),
        };
        assert_eq!(err.http_status(), 409);
        assert_eq!(err.client_message(), r#"{"detail":"duplicate ticket"}"#);
    }

    #[test]
    fn test_backend_empty_body_gets_generic_message() {
        let err = Error::Backend {
            status: 500,
            body: "  ".to_string(),
        };
        assert_eq!(err.client_message(), "Upstream service reported an error");
    }

    #[test]
    fn test_transport_messages_hide_detail() {
        let msg = Error::transport(TransportKind::ConnectionRefused).client_message();
        assert!(!msg.contains("http"));
        assert!(!msg.contains("://"));
        assert_eq!(
            Error::transport(TransportKind::Timeout).client_message(),
            "Upstream service did not respond in time"
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = Error::validation("price must be greater than zero");
        assert_eq!(err.client_message(), "price must be greater than zero");
    }
}
