//! Dispatch and translation services
//!
//! The request pipeline lives here: endpoint registry (service name → base
//! address), dispatcher (pooled outbound transport), translator (backend
//! response → envelope material) and the gateway core tying them together.

pub mod dispatcher;
pub mod gateway;
pub mod registry;
pub mod translator;

pub use dispatcher::{HttpDispatcher, OutboundRequest, RawResponse, Transport};
pub use gateway::{CallContext, Gateway};
pub use registry::{EndpointRegistry, Upstream};
pub use translator::Forwarded;
