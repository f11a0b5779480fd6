use std::path::PathBuf;

use reqwest::multipart::Form;
use reqwest::Method;

use crate::api::{file_part, ApiClient, ApiError};
use crate::helper_model::{ApprovalRequest, NewBookingRequest, PaymentRequest};
use crate::model::{Booking, ConditionReportType};

pub async fn create(api: &ApiClient, booking: &NewBookingRequest) -> Result<Booking, ApiError> {
    let req = api.request(Method::POST, "/bookings").json(booking);
    api.send(req).await
}

/// Bookings visible to the signed-in account; the backend scopes the
/// list by role (customer and owner share the route).
pub async fn mine(api: &ApiClient) -> Result<Vec<Booking>, ApiError> {
    let req = api.request(Method::GET, "/bookings");
    api.send(req).await
}

pub async fn get(api: &ApiClient, booking_id: &str) -> Result<Booking, ApiError> {
    let req = api.request(Method::GET, &format!("/bookings/{booking_id}"));
    api.send(req).await
}

pub async fn cancel(api: &ApiClient, booking_id: &str) -> Result<Booking, ApiError> {
    let req = api.request(Method::PUT, &format!("/bookings/{booking_id}/cancel"));
    api.send(req).await
}

pub async fn cancel_driver_request(
    api: &ApiClient,
    booking_id: &str,
) -> Result<Booking, ApiError> {
    let req = api.request(Method::PUT, &format!("/bookings/{booking_id}/cancel-driver"));
    api.send(req).await
}

pub async fn approve(
    api: &ApiClient,
    booking_id: &str,
    approval: bool,
) -> Result<Booking, ApiError> {
    let req = api
        .request(Method::PUT, &format!("/bookings/{booking_id}/approve"))
        .json(&ApprovalRequest { approval });
    api.send(req).await
}

/// A condition report as submitted: free text plus photos from disk.
#[derive(Debug, Clone)]
pub struct ConditionReportUpload {
    pub report_type: ConditionReportType,
    pub condition: String,
    pub images: Vec<PathBuf>,
}

pub(crate) fn condition_report_multipart(
    upload: &ConditionReportUpload,
) -> Result<Form, ApiError> {
    let type_field = match upload.report_type {
        ConditionReportType::After => "after",
        _ => "before",
    };
    let mut multipart = Form::new()
        .text("condition", upload.condition.clone())
        .text("type", type_field.to_string());
    for image in &upload.images {
        multipart = multipart.part("images", file_part(image)?);
    }
    Ok(multipart)
}

pub async fn submit_condition_report(
    api: &ApiClient,
    booking_id: &str,
    upload: &ConditionReportUpload,
) -> Result<Booking, ApiError> {
    let req = api
        .request(
            Method::POST,
            &format!("/bookings/{booking_id}/condition-report"),
        )
        .multipart(condition_report_multipart(upload)?);
    api.send(req).await
}

/// Bookings assigned to the signed-in driver.
pub async fn driver_bookings(api: &ApiClient) -> Result<Vec<Booking>, ApiError> {
    let req = api.request(Method::GET, "/drivers/bookings");
    api.send(req).await
}

pub async fn pay(api: &ApiClient, payment: &PaymentRequest) -> Result<serde_json::Value, ApiError> {
    let req = api
        .request(Method::POST, &format!("/payments/{}", payment.booking_id))
        .json(payment);
    api.send(req).await
}
