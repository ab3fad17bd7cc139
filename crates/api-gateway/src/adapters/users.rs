//! Identity backend adapter
//!
//! Credentials are forwarded, never stored or checked here. Session and
//! user lookups require the inbound bearer token; the identity backend is
//! the only party that inspects it.

use serde_json::json;

use super::OutboundCall;
use crate::models::{LoginRequest, RegisterRequest};

/// Exchange credentials for a token
pub fn login(req: &LoginRequest) -> OutboundCall {
    OutboundCall::post("/login").with_body(json!({
        "email": req.email,
        "password": req.password,
    }))
}

/// Create a user account
pub fn register(req: &RegisterRequest) -> OutboundCall {
    let mut body = json!({
        "email": req.email,
        "password": req.password,
    });
    if let Some(full_name) = &req.full_name {
        body["full_name"] = json!(full_name);
    }
    OutboundCall::post("/register").with_body(body)
}

/// Look up the session bound to the presented token
pub fn session() -> OutboundCall {
    OutboundCall::get("/users/me").with_token_required()
}

/// Look up a user by id
pub fn user(id: i64) -> OutboundCall {
    OutboundCall::get(format!("/users/{}", id)).with_token_required()
}
