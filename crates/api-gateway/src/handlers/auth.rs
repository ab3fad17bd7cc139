//! Authentication handlers
//!
//! Credential operations forward to the identity backend; the gateway
//! carries tokens but never issues or verifies them.

use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::{
    adapters,
    handlers::helpers::{respond, validate_request},
    middleware::call_context,
    models::{
        ApiResponse, LoginGrant, LoginRequest, RegisterRequest, SessionResponse, UserRecord,
        UserResponse,
    },
    services::{Gateway, Upstream},
};

/// Log in with email and password
///
/// POST /api/auth/login
pub async fn login(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    if let Err(resp) = validate_request(&*req) {
        return resp;
    }

    let call = adapters::users::login(&req);
    let outcome = gateway
        .dispatch::<LoginGrant>(Upstream::Users, call, &call_context(&req_http))
        .await
        .map(|forwarded| forwarded.map(SessionResponse::from));
    respond(outcome, "Login successful")
}

/// Register a new user
///
/// POST /api/auth/register
pub async fn register(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    if let Err(resp) = validate_request(&*req) {
        return resp;
    }

    let call = adapters::users::register(&req);
    let outcome = gateway
        .dispatch::<UserRecord>(Upstream::Users, call, &call_context(&req_http))
        .await
        .map(|forwarded| forwarded.map(UserResponse::from));
    respond(outcome, "User registered")
}

/// Look up the session bound to the presented token
///
/// GET /api/auth/session
pub async fn session(gateway: web::Data<Gateway>, req_http: HttpRequest) -> impl Responder {
    let outcome = gateway
        .dispatch::<UserRecord>(
            Upstream::Users,
            adapters::users::session(),
            &call_context(&req_http),
        )
        .await
        .map(|forwarded| forwarded.map(UserResponse::from));
    respond(outcome, "Session retrieved")
}

/// Close the client session
///
/// POST /api/auth/logout
///
/// Bearer sessions are stateless at the gateway, so this is a local-only
/// acknowledgement; no backend is involved.
pub async fn logout() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::<serde_json::Value>::ok_empty("Session closed"))
}

/// Look up a user by id
///
/// GET /api/auth/users/{id}
pub async fn get_user(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    let outcome = gateway
        .dispatch::<UserRecord>(
            Upstream::Users,
            adapters::users::user(path.into_inner()),
            &call_context(&req_http),
        )
        .await
        .map(|forwarded| forwarded.map(UserResponse::from));
    respond(outcome, "User retrieved")
}
