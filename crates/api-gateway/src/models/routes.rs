//! Route DTOs
//!
//! Route records pass through from the routes backend unmodified; only
//! client request bodies are reshaped into the backend's snake_case names.

use serde::{Deserialize, Serialize};

/// Route record exactly as the routes backend returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: i64,
    pub origin_station_id: i64,
    pub destination_station_id: i64,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: f64,
}

/// Route creation request on the gateway's client surface
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    pub origin_station_id: i64,
    pub destination_station_id: i64,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: f64,
}

/// Partial route update; absent fields are left untouched by the backend
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRouteRequest {
    pub origin_station_id: Option<i64>,
    pub destination_station_id: Option<i64>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub price: Option<f64>,
}
