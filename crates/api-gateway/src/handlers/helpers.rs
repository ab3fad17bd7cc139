//! Common handler helpers
//!
//! Every handler funnels through these so the envelope shape and the
//! error-to-status mapping exist in exactly one place.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use shared::Error;
use validator::Validate;

use crate::models::ApiResponse;
use crate::services::Forwarded;

/// Turn a gateway dispatch outcome into the uniform envelope
///
/// Successful responses mirror the backend's status; failures go through
/// [`error_response`].
pub fn respond<T: Serialize>(outcome: Result<Forwarded<T>, Error>, message: &str) -> HttpResponse {
    match outcome {
        Ok(forwarded) => {
            HttpResponse::build(forwarded.status).json(ApiResponse::ok(message, forwarded.data))
        }
        Err(err) => error_response(err),
    }
}

/// Map an error onto its HTTP status and the uniform envelope
pub fn error_response(err: Error) -> HttpResponse {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match &err {
        Error::Backend {
            status: backend_status,
            ..
        } => {
            tracing::debug!(status = backend_status, "passing backend error through");
        }
        Error::Validation(_) | Error::Unauthorized(_) => {
            tracing::debug!(error = %err, "request rejected before dispatch");
        }
        _ => {
            tracing::error!(error = %err, "request failed");
        }
    }

    HttpResponse::build(status).json(ApiResponse::<serde_json::Value>::error(err.client_message()))
}

/// Validate a request body or return the 400 envelope
pub fn validate_request<T: Validate>(req: &T) -> Result<(), HttpResponse> {
    req.validate().map_err(|e| {
        error_response(Error::validation(format!("Validation failed: {}", e)))
    })
}
