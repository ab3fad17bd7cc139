//! Ticket handlers
//!
//! Thin forwarding layer over the ticketing adapter. The backend's verdicts,
//! including 409 on a duplicate (user, issueDate) pair and rejection of
//! Caducado reactivation, pass through untouched.

use actix_web::{web, HttpRequest, Responder};

use crate::{
    adapters,
    handlers::helpers::{error_response, respond},
    middleware::call_context,
    models::{CreateTicketRequest, Ticket, TicketFilter, UpdateTicketRequest},
    services::{Gateway, Upstream},
};

/// List tickets with optional filters
///
/// GET /api/tickets?userId=&date=&state=
pub async fn list_tickets(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    query: web::Query<TicketFilter>,
) -> impl Responder {
    let call = match adapters::tickets::list(&query) {
        Ok(call) => call,
        Err(err) => return error_response(err),
    };
    respond(
        gateway
            .dispatch::<Vec<Ticket>>(Upstream::Tickets, call, &call_context(&req_http))
            .await,
        "Tickets retrieved",
    )
}

/// Fetch a single ticket
///
/// GET /api/tickets/{id}
pub async fn get_ticket(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    respond(
        gateway
            .dispatch::<Ticket>(
                Upstream::Tickets,
                adapters::tickets::get(path.into_inner()),
                &call_context(&req_http),
            )
            .await,
        "Ticket retrieved",
    )
}

/// Create a ticket
///
/// POST /api/tickets/add
pub async fn create_ticket(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    req: web::Json<CreateTicketRequest>,
) -> impl Responder {
    let call = match adapters::tickets::create(&req) {
        Ok(call) => call,
        Err(err) => return error_response(err),
    };
    respond(
        gateway
            .dispatch::<Ticket>(Upstream::Tickets, call, &call_context(&req_http))
            .await,
        "Ticket created",
    )
}

/// Update a ticket
///
/// PUT /api/tickets/update/{id}
pub async fn update_ticket(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    path: web::Path<i64>,
    req: web::Json<UpdateTicketRequest>,
) -> impl Responder {
    let call = match adapters::tickets::update(path.into_inner(), &req) {
        Ok(call) => call,
        Err(err) => return error_response(err),
    };
    respond(
        gateway
            .dispatch::<Ticket>(Upstream::Tickets, call, &call_context(&req_http))
            .await,
        "Ticket updated",
    )
}

/// Soft-delete a ticket
///
/// DELETE /api/tickets/delete/{id}
pub async fn delete_ticket(
    gateway: web::Data<Gateway>,
    req_http: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    respond(
        gateway
            .dispatch::<Ticket>(
                Upstream::Tickets,
                adapters::tickets::delete(path.into_inner()),
                &call_context(&req_http),
            )
            .await,
        "Ticket deleted",
    )
}
