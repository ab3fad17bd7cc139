//! API gateway for the transit ticketing platform
//!
//! Single network entry point translating client calls onto the identity,
//! routes, stations and ticketing backends.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use shared::Config;

use api_gateway::middleware;
use api_gateway::routes;
use api_gateway::services::{EndpointRegistry, Gateway, HttpDispatcher};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    shared::init_tracing();

    tracing::info!("Starting API Gateway...");

    // Load configuration; a missing or malformed backend address aborts here
    let config = Config::from_env().context("Failed to load configuration")?;

    let registry = EndpointRegistry::from_config(&config.upstreams)
        .context("Failed to build endpoint registry")?;

    let dispatcher =
        HttpDispatcher::new(&config.http).context("Failed to build outbound HTTP transport")?;

    let gateway = web::Data::new(Gateway::new(registry, Arc::new(dispatcher)));

    let server_addr = config.server.bind_address();
    tracing::info!("API Gateway listening on {}", server_addr);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            // Add logger middleware
            .wrap(Logger::default())
            // Add CORS middleware
            .wrap(middleware::cors())
            // Correlation ids, forwarded to backends on every dispatch
            .wrap(middleware::RequestId::new())
            // Store the gateway core in app state
            .app_data(gateway.clone())
            // Configure routes
            .configure(routes::configure)
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind to {}", server_addr))?
    .run()
    .await
    .context("Server error")?;

    Ok(())
}
