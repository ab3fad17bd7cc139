//! Stations directory adapter
//!
//! Plain REST surface. Consumed directly for the read endpoints and by the
//! routes adapter flow to check activation state before a route is created.

use super::OutboundCall;

/// List all stations
pub fn list() -> OutboundCall {
    OutboundCall::get("/stations")
}

/// Fetch a single station
pub fn get(id: i64) -> OutboundCall {
    OutboundCall::get(format!("/stations/{}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_station_paths() {
        assert_eq!(list().path, "/stations");
        assert_eq!(list().method, Method::GET);
        assert_eq!(get(4).path, "/stations/4");
    }
}
