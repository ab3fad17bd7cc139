//! Ticketing backend adapter
//!
//! The ticketing service exposes verb-named PascalCase paths
//! (`/GetAllTickets`, `/AddTicket`, ...) with camelCase query parameters and
//! snake_case JSON bodies. The rules it owns (price bounds, the uniqueness
//! of (user_id, issue_date), the Caducado state being terminal, soft
//! deletes) are forwarded and its verdict passed through; the gateway only
//! rejects input it can see is malformed without asking anyone.

use chrono::NaiveDate;
use serde_json::json;
use shared::{Error, Result};

use super::OutboundCall;
use crate::models::{
    CreateTicketRequest, TicketFilter, TicketState, TicketType, UpdateTicketRequest, DATE_FORMAT,
};

/// List tickets, mapping each present filter field to exactly one query
/// parameter in the backend's expected casing
pub fn list(filter: &TicketFilter) -> Result<OutboundCall> {
    let mut call = OutboundCall::get("/GetAllTickets");
    if let Some(user_id) = &filter.user_id {
        call.push_query("userId", parse_user_id(user_id)?.to_string());
    }
    if let Some(date) = &filter.date {
        call.push_query("date", parse_issue_date(date)?.format(DATE_FORMAT).to_string());
    }
    if let Some(state) = &filter.state {
        call.push_query("state", state.parse::<TicketState>()?.as_str());
    }
    Ok(call)
}

/// Fetch a single ticket
pub fn get(id: i64) -> OutboundCall {
    OutboundCall::get(format!("/GetTicket/{}", id))
}

/// Create a ticket; the collection root is not the create path on this
/// backend
pub fn create(req: &CreateTicketRequest) -> Result<OutboundCall> {
    ensure_positive_price(req.price)?;
    let issue_date = parse_issue_date(&req.issue_date)?;
    let ticket_type: TicketType = req.ticket_type.parse()?;
    let state = match &req.state {
        Some(raw) => raw.parse::<TicketState>()?,
        None => TicketState::Activo,
    };

    let body = json!({
        "user_id": req.user_id,
        "issue_date": issue_date.format(DATE_FORMAT).to_string(),
        "price": req.price,
        "ticket_type": ticket_type.as_str(),
        "state": state.as_str(),
    });
    Ok(OutboundCall::post("/AddTicket").with_body(body))
}

/// Update a ticket; only fields the client actually sent reach the backend
pub fn update(id: i64, req: &UpdateTicketRequest) -> Result<OutboundCall> {
    let mut body = serde_json::Map::new();
    if let Some(user_id) = req.user_id {
        body.insert("user_id".to_string(), user_id.into());
    }
    if let Some(date) = &req.issue_date {
        body.insert(
            "issue_date".to_string(),
            parse_issue_date(date)?.format(DATE_FORMAT).to_string().into(),
        );
    }
    if let Some(price) = req.price {
        ensure_positive_price(price)?;
        body.insert("price".to_string(), price.into());
    }
    if let Some(raw) = &req.ticket_type {
        body.insert(
            "ticket_type".to_string(),
            raw.parse::<TicketType>()?.as_str().into(),
        );
    }
    if let Some(raw) = &req.state {
        body.insert("state".to_string(), raw.parse::<TicketState>()?.as_str().into());
    }
    if body.is_empty() {
        return Err(Error::validation("update requires at least one field"));
    }
    Ok(OutboundCall::put(format!("/UpdateTicket/{}", id)).with_body(body.into()))
}

/// Soft-delete a ticket; the backend marks it inactive rather than removing
/// the record
pub fn delete(id: i64) -> OutboundCall {
    OutboundCall::delete(format!("/DeleteTicket/{}", id))
}

fn ensure_positive_price(price: f64) -> Result<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(Error::validation(format!(
            "price must be greater than zero, got {}",
            price
        )));
    }
    Ok(())
}

fn parse_issue_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| Error::validation(format!("invalid date '{}', expected yyyy-MM-dd", raw)))
}

fn parse_user_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| Error::validation(format!("invalid userId '{}'", raw)))
}
