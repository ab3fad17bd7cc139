//! Station DTOs

use serde::{Deserialize, Serialize};

/// Station record exactly as the stations directory returns it
///
/// `is_active` is the soft activation state owned by the stations backend;
/// route creation refuses to reference an inactive station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_backend_shape() {
        let station: Station = serde_json::from_str(
            r#"{"id": 4, "name": "Atocha", "city": "Madrid", "is_active": true}"#,
        )
        .unwrap();
        assert!(station.is_active);
        assert_eq!(station.name, "Atocha");
    }
}
