//! API Gateway Library
//!
//! This library module exposes the core functionality of the gateway for use
//! in integration tests, which assemble the app with a recording transport
//! in place of the network.

pub mod adapters;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
