//! Resource adapters: per-backend call construction
//!
//! One adapter per backend resource family. Adapters are pure functions from
//! gateway DTOs to an [`OutboundCall`]; they encode each backend's path
//! shape, query parameter names and body field names, and reject
//! locally-checkable invalid input before any network traffic happens.

pub mod routes;
pub mod stations;
pub mod tickets;
pub mod users;

use reqwest::Method;

/// A backend call planned by an adapter, not yet bound to a base address
#[derive(Debug, Clone)]
pub struct OutboundCall {
    pub method: Method,
    pub path: String,
    /// Ordered (name, value) pairs. Order follows field declaration order so
    /// constructed queries are deterministic.
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
    /// Whether the inbound bearer token must be propagated to this call
    pub requires_token: bool,
}

impl OutboundCall {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            requires_token: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Mark the call as needing the inbound identity token
    pub fn with_token_required(mut self) -> Self {
        self.requires_token = true;
        self
    }

    /// Append a query parameter. Callers only push parameters for filter
    /// fields that are actually present, so absent fields never produce
    /// empty-string parameters.
    pub fn push_query(&mut self, name: &'static str, value: impl Into<String>) {
        self.query.push((name, value.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_set_method_and_path() {
        let call = OutboundCall::get("/GetAllTickets");
        assert_eq!(call.method, Method::GET);
        assert_eq!(call.path, "/GetAllTickets");
        assert!(call.query.is_empty());
        assert!(call.body.is_none());
        assert!(!call.requires_token);

        let call = OutboundCall::delete("/DeleteTicket/9");
        assert_eq!(call.method, Method::DELETE);
    }

    #[test]
    fn test_token_requirement_flag() {
        let call = OutboundCall::get("/users/me").with_token_required();
        assert!(call.requires_token);
    }
}
