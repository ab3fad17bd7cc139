//! Ticket DTOs and the domain enums mirrored at the edge
//!
//! The enums exist for request shaping only: a malformed literal is rejected
//! locally before a network round trip. The ticketing backend stays the
//! source of truth for everything else, including state transitions and the
//! one-ticket-per-(user, issueDate) uniqueness rule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::Error;
use std::fmt;
use std::str::FromStr;

/// Wire format for ticket issue dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of travel a ticket covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketType {
    Ida,
    Vuelta,
}

impl TicketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Ida => "Ida",
            TicketType::Vuelta => "Vuelta",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ida" => Ok(TicketType::Ida),
            "Vuelta" => Ok(TicketType::Vuelta),
            other => Err(Error::validation(format!(
                "unknown ticket type '{}', expected one of: Ida, Vuelta",
                other
            ))),
        }
    }
}

/// Lifecycle state of a ticket
///
/// The backend rejects reactivation of a Caducado ticket; the gateway only
/// checks that the literal itself is well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketState {
    Activo,
    Usado,
    Caducado,
}

impl TicketState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketState::Activo => "Activo",
            TicketState::Usado => "Usado",
            TicketState::Caducado => "Caducado",
        }
    }
}

impl fmt::Display for TicketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Activo" => Ok(TicketState::Activo),
            "Usado" => Ok(TicketState::Usado),
            "Caducado" => Ok(TicketState::Caducado),
            other => Err(Error::validation(format!(
                "unknown ticket state '{}', expected one of: Activo, Usado, Caducado",
                other
            ))),
        }
    }
}

/// Ticket record exactly as the ticketing backend returns it
///
/// Passed through to clients field-for-field inside the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub user_id: i64,
    pub issue_date: NaiveDate,
    pub price: f64,
    pub ticket_type: TicketType,
    pub state: TicketState,
}

/// Client-supplied filters for ticket listing
///
/// Raw strings on purpose: the adapter validates literals and formats so a
/// bad value surfaces as the gateway's own 400 envelope rather than a
/// framework-level deserialization error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketFilter {
    pub user_id: Option<String>,
    pub date: Option<String>,
    pub state: Option<String>,
}

/// Ticket creation request on the gateway's client surface
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub user_id: i64,
    pub issue_date: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub ticket_type: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// Partial ticket update; absent fields are left untouched by the backend
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketRequest {
    pub user_id: Option<i64>,
    pub issue_date: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,
    pub state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_type_literals() {
        assert_eq!("Ida".parse::<TicketType>().unwrap(), TicketType::Ida);
        assert_eq!("Vuelta".parse::<TicketType>().unwrap(), TicketType::Vuelta);
        assert!("ida".parse::<TicketType>().is_err());
        assert!("RoundTrip".parse::<TicketType>().is_err());
    }

    #[test]
    fn test_ticket_state_literals() {
        assert_eq!("Activo".parse::<TicketState>().unwrap(), TicketState::Activo);
        assert_eq!("Usado".parse::<TicketState>().unwrap(), TicketState::Usado);
        assert_eq!(
            "Caducado".parse::<TicketState>().unwrap(),
            TicketState::Caducado
        );
        assert!("Expirado".parse::<TicketState>().is_err());
    }

    #[test]
    fn test_unknown_literal_is_validation_error() {
        let err = "Expirado".parse::<TicketState>().unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert!(err.client_message().contains("Expirado"));
    }

    #[test]
    fn test_ticket_round_trips_backend_shape() {
        let json = r#"{
            "id": 7,
            "user_id": 12345,
            "issue_date": "2025-03-14",
            "price": 24.5,
            "ticket_type": "Ida",
            "state": "Activo"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.user_id, 12345);
        assert_eq!(ticket.ticket_type, TicketType::Ida);

        let out = serde_json::to_value(&ticket).unwrap();
        assert_eq!(out["issue_date"], "2025-03-14");
        assert_eq!(out["ticket_type"], "Ida");
        assert_eq!(out["state"], "Activo");
    }

    #[test]
    fn test_create_request_client_field_names() {
        let json = r#"{
            "userId": 12345,
            "issueDate": "2025-03-14",
            "price": 24.5,
            "type": "Vuelta"
        }"#;
        let req: CreateTicketRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_id, 12345);
        assert_eq!(req.issue_date, "2025-03-14");
        assert_eq!(req.ticket_type, "Vuelta");
        assert!(req.state.is_none());
    }

    #[test]
    fn test_filter_accepts_partial_query() {
        let filter: TicketFilter = serde_json::from_str(r#"{"userId":"12345"}"#).unwrap();
        assert_eq!(filter.user_id.as_deref(), Some("12345"));
        assert!(filter.date.is_none());
        assert!(filter.state.is_none());
    }
}
