//! Station handlers

use actix_web::{web, HttpRequest, Responder};

use crate::{
    adapters,
    handlers::helpers::respond,
    middleware::call_context,
    models::Station,
    services::{Gateway, Upstream},
};

/// List all stations
///
/// GET /api/stations
pub async fn list_stations(gateway: web::Data<Gateway>, req_http: HttpRequest) -> impl Responder {
    respond(
        gateway
            .dispatch::<Vec<Station>>(
                Upstream::Stations,
                adapters::stations::list(),
                &call_context(&req_http),
            )
            .await,
        "Stations retrieved",
    )
}

/// Fetch a single station
///
/// GET /api/stations/{id}
pub async fn get_station(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    respond(
        gateway
            .dispatch::<Station>(
                Upstream::Stations,
                adapters::stations::get(path.into_inner()),
                &call_context(&req_http),
            )
            .await,
        "Station retrieved",
    )
}
