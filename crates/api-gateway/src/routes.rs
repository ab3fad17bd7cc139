//! Route configuration for the gateway surface

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use shared::Error;

use crate::handlers::{self, helpers::error_response};
use crate::models::ApiResponse;

/// Configure all routes
///
/// Also installs extractor error handlers so malformed bodies, query strings
/// and path parameters come back in the uniform envelope instead of the
/// framework's plain-text 400.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));

    cfg.service(
        web::scope("/api")
            // Liveness (no backend involved)
            .route("/health", web::get().to(handlers::health_check))
            // Identity endpoints
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(handlers::login))
                    .route("/register", web::post().to(handlers::register))
                    .route("/session", web::get().to(handlers::session))
                    .route("/logout", web::post().to(handlers::logout))
                    .route("/users/{id}", web::get().to(handlers::get_user)),
            )
            // Routes inventory
            .service(
                web::scope("/routes")
                    .route("", web::get().to(handlers::list_routes))
                    .route("", web::post().to(handlers::create_route))
                    .route("/{id}", web::get().to(handlers::get_route))
                    .route("/{id}", web::put().to(handlers::update_route))
                    .route("/{id}", web::delete().to(handlers::delete_route)),
            )
            // Stations directory
            .service(
                web::scope("/stations")
                    .route("", web::get().to(handlers::list_stations))
                    .route("/{id}", web::get().to(handlers::get_station)),
            )
            // Ticketing; verb-suffixed paths registered before the id catch-all
            .service(
                web::scope("/tickets")
                    .route("", web::get().to(handlers::list_tickets))
                    .route("/add", web::post().to(handlers::create_ticket))
                    .route("/update/{id}", web::put().to(handlers::update_ticket))
                    .route("/delete/{id}", web::delete().to(handlers::delete_ticket))
                    .route("/{id}", web::get().to(handlers::get_ticket)),
            ),
    );

    // Unknown paths still answer in the envelope
    cfg.default_service(web::route().to(not_found));
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<serde_json::Value>::error("Resource not found"))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(Error::validation(format!("Invalid request body: {}", err)));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(Error::validation(format!("Invalid query string: {}", err)));
    InternalError::from_response(err, response).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(Error::validation(format!("Invalid path parameter: {}", err)));
    InternalError::from_response(err, response).into()
}
