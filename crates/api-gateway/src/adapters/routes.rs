//! Routes backend adapter
//!
//! Plain REST paths with snake_case bodies. Schedule and price validation
//! belong to the routes backend; the gateway only refuses requests that are
//! malformed on their face, plus the station activation check handled in the
//! handler layer (two independent calls, no cross-service transaction).

use serde_json::json;
use shared::{Error, Result};

use super::OutboundCall;
use crate::models::{CreateRouteRequest, UpdateRouteRequest};

/// List all routes
pub fn list() -> OutboundCall {
    OutboundCall::get("/routes")
}

/// Fetch a single route
pub fn get(id: i64) -> OutboundCall {
    OutboundCall::get(format!("/routes/{}", id))
}

/// Create a route
pub fn create(req: &CreateRouteRequest) -> Result<OutboundCall> {
    ensure_distinct_endpoints(req.origin_station_id, req.destination_station_id)?;
    let body = json!({
        "origin_station_id": req.origin_station_id,
        "destination_station_id": req.destination_station_id,
        "departure_time": req.departure_time,
        "arrival_time": req.arrival_time,
        "price": req.price,
    });
    Ok(OutboundCall::post("/routes").with_body(body))
}

/// Update a route; only fields the client actually sent reach the backend
pub fn update(id: i64, req: &UpdateRouteRequest) -> Result<OutboundCall> {
    if let (Some(origin), Some(destination)) =
        (req.origin_station_id, req.destination_station_id)
    {
        ensure_distinct_endpoints(origin, destination)?;
    }

    let mut body = serde_json::Map::new();
    if let Some(origin) = req.origin_station_id {
        body.insert("origin_station_id".to_string(), origin.into());
    }
    if let Some(destination) = req.destination_station_id {
        body.insert("destination_station_id".to_string(), destination.into());
    }
    if let Some(departure) = &req.departure_time {
        body.insert("departure_time".to_string(), departure.clone().into());
    }
    if let Some(arrival) = &req.arrival_time {
        body.insert("arrival_time".to_string(), arrival.clone().into());
    }
    if let Some(price) = req.price {
        body.insert("price".to_string(), price.into());
    }
    if body.is_empty() {
        return Err(Error::validation("update requires at least one field"));
    }
    Ok(OutboundCall::put(format!("/routes/{}", id)).with_body(body.into()))
}

/// Delete a route
pub fn delete(id: i64) -> OutboundCall {
    OutboundCall::delete(format!("/routes/{}", id))
}

fn ensure_distinct_endpoints(origin: i64, destination: i64) -> Result<()> {
    if origin == destination {
        return Err(Error::validation(
            "origin and destination stations must differ",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn create_request() -> CreateRouteRequest {
        CreateRouteRequest {
            origin_station_id: 1,
            destination_station_id: 2,
            departure_time: "2025-03-14T08:30:00Z".to_string(),
            arrival_time: "2025-03-14T11:05:00Z".to_string(),
            price: 38.9,
        }
    }

    #[test]
    fn test_create_shapes_snake_case_body() {
        let call = create(&create_request()).unwrap();
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.path, "/routes");
        let body = call.body.unwrap();
        assert_eq!(body["origin_station_id"], 1);
        assert_eq!(body["destination_station_id"], 2);
        assert_eq!(body["departure_time"], "2025-03-14T08:30:00Z");
    }

    #[test]
    fn test_create_rejects_identical_endpoints() {
        let mut req = create_request();
        req.destination_station_id = req.origin_station_id;
        assert_eq!(create(&req).unwrap_err().http_status(), 400);
    }

    #[test]
    fn test_update_includes_only_sent_fields() {
        let req = UpdateRouteRequest {
            price: Some(42.0),
            ..Default::default()
        };
        let call = update(3, &req).unwrap();
        assert_eq!(call.path, "/routes/3");
        let body = call.body.unwrap();
        assert_eq!(body["price"], 42.0);
        assert!(body.get("origin_station_id").is_none());
    }

    #[test]
    fn test_update_rejects_empty_body() {
        assert!(update(3, &UpdateRouteRequest::default()).is_err());
    }

    #[test]
    fn test_update_rejects_identical_endpoints_when_both_sent() {
        let req = UpdateRouteRequest {
            origin_station_id: Some(5),
            destination_station_id: Some(5),
            ..Default::default()
        };
        assert!(update(3, &req).is_err());
    }

    #[test]
    fn test_rest_paths() {
        assert_eq!(list().path, "/routes");
        assert_eq!(get(3).path, "/routes/3");
        assert_eq!(delete(3).method, Method::DELETE);
    }
}
