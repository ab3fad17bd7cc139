//! HTTP middleware for the gateway

pub mod bearer;
pub mod cors;
pub mod request_id;

pub use bearer::{bearer_token, call_context};
pub use cors::cors;
pub use request_id::{get_request_id, RequestId};
