//! Route handlers
//!
//! Creation and endpoint changes are gated on the stations directory: a
//! route may only reference stations that exist and are active. The check
//! and the write are two independent backend calls; there is no
//! cross-service transaction, so the gateway simply refuses to call the
//! routes backend until the stations backend has answered success.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use shared::Error;

use crate::{
    adapters,
    handlers::helpers::{error_response, respond},
    middleware::call_context,
    models::{CreateRouteRequest, Route, Station, UpdateRouteRequest},
    services::{CallContext, Gateway, Upstream},
};

/// List all routes
///
/// GET /api/routes
pub async fn list_routes(gateway: web::Data<Gateway>, req_http: HttpRequest) -> impl Responder {
    respond(
        gateway
            .dispatch::<Vec<Route>>(
                Upstream::Routes,
                adapters::routes::list(),
                &call_context(&req_http),
            )
            .await,
        "Routes retrieved",
    )
}

/// Fetch a single route
///
/// GET /api/routes/{id}
pub async fn get_route(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    respond(
        gateway
            .dispatch::<Route>(
                Upstream::Routes,
                adapters::routes::get(path.into_inner()),
                &call_context(&req_http),
            )
            .await,
        "Route retrieved",
    )
}

/// Create a route
///
/// POST /api/routes
pub async fn create_route(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    req: web::Json<CreateRouteRequest>,
) -> impl Responder {
    let call = match adapters::routes::create(&req) {
        Ok(call) => call,
        Err(err) => return error_response(err),
    };

    let ctx = call_context(&req_http);
    if let Err(resp) = ensure_station_active(&gateway, &ctx, req.origin_station_id, "origin").await
    {
        return resp;
    }
    if let Err(resp) =
        ensure_station_active(&gateway, &ctx, req.destination_station_id, "destination").await
    {
        return resp;
    }

    respond(
        gateway.dispatch::<Route>(Upstream::Routes, call, &ctx).await,
        "Route created",
    )
}

/// Update a route
///
/// PUT /api/routes/{id}
pub async fn update_route(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    path: web::Path<i64>,
    req: web::Json<UpdateRouteRequest>,
) -> impl Responder {
    let call = match adapters::routes::update(path.into_inner(), &req) {
        Ok(call) => call,
        Err(err) => return error_response(err),
    };

    // Only re-validate the stations the update actually touches
    let ctx = call_context(&req_http);
    if let Some(origin) = req.origin_station_id {
        if let Err(resp) = ensure_station_active(&gateway, &ctx, origin, "origin").await {
            return resp;
        }
    }
    if let Some(destination) = req.destination_station_id {
        if let Err(resp) =
            ensure_station_active(&gateway, &ctx, destination, "destination").await
        {
            return resp;
        }
    }

    respond(
        gateway.dispatch::<Route>(Upstream::Routes, call, &ctx).await,
        "Route updated",
    )
}

/// Delete a route
///
/// DELETE /api/routes/{id}
pub async fn delete_route(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    respond(
        gateway
            .dispatch::<Route>(
                Upstream::Routes,
                adapters::routes::delete(path.into_inner()),
                &call_context(&req_http),
            )
            .await,
        "Route deleted",
    )
}

/// Check that a referenced station exists and is active
///
/// A missing station surfaces as the stations backend's own error (404
/// passthrough); an inactive one is rejected by the gateway since the routes
/// backend would accept the reference without looking.
async fn ensure_station_active(
    gateway: &Gateway,
    ctx: &CallContext,
    station_id: i64,
    role: &str,
) -> Result<(), HttpResponse> {
    let forwarded = gateway
        .dispatch::<Station>(Upstream::Stations, adapters::stations::get(station_id), ctx)
        .await;

    match forwarded {
        Ok(forwarded) if forwarded.data.is_active => Ok(()),
        Ok(_) => Err(error_response(Error::validation(format!(
            "{} station {} is not active",
            role, station_id
        )))),
        Err(err) => Err(error_response(err)),
    }
}
