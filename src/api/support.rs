use reqwest::Method;

use crate::api::{ApiClient, ApiError};
use crate::helper_model::{NewTicketRequest, ResolveTicketRequest, TicketsEnvelope};
use crate::model::SupportTicket;

pub async fn create(api: &ApiClient, issue: String) -> Result<SupportTicket, ApiError> {
    let req = api
        .request(Method::POST, "/support")
        .json(&NewTicketRequest { issue });
    api.send(req).await
}

/// Every ticket in the system; admin only.
pub async fn all(api: &ApiClient) -> Result<Vec<SupportTicket>, ApiError> {
    let req = api.request(Method::GET, "/support");
    api.send(req).await
}

/// The signed-in customer's own tickets.
pub async fn mine(api: &ApiClient) -> Result<Vec<SupportTicket>, ApiError> {
    let req = api.request(Method::GET, "/support/tickets");
    let envelope: TicketsEnvelope = api.send(req).await?;
    Ok(envelope.tickets)
}

pub async fn resolve(
    api: &ApiClient,
    ticket_id: &str,
    resolution: String,
) -> Result<SupportTicket, ApiError> {
    let req = api
        .request(Method::PUT, &format!("/support/{ticket_id}/resolve"))
        .json(&ResolveTicketRequest { resolution });
    api.send(req).await
}
