use reqwest::Method;

use crate::api::bookings::{condition_report_multipart, ConditionReportUpload};
use crate::api::{ApiClient, ApiError};
use crate::helper_model::{DriverRatingRequest, DriverUpdateRequest};
use crate::model::{Booking, DriverProfile, EarningsSummary, GeoLocation, Review};

pub async fn confirm_assignment(api: &ApiClient, booking_id: &str) -> Result<Booking, ApiError> {
    let req = api.request(Method::POST, &format!("/drivers/{booking_id}/confirm"));
    api.send(req).await
}

/// Marks the current leg done; the backend advances the booking from
/// pickup-confirmed to delivered.
pub async fn complete_trip(api: &ApiClient, booking_id: &str) -> Result<Booking, ApiError> {
    let req = api.request(Method::POST, &format!("/drivers/{booking_id}/complete"));
    api.send(req).await
}

pub async fn report_condition(
    api: &ApiClient,
    booking_id: &str,
    upload: &ConditionReportUpload,
) -> Result<Booking, ApiError> {
    let req = api
        .request(Method::POST, &format!("/drivers/{booking_id}/report"))
        .multipart(condition_report_multipart(upload)?);
    api.send(req).await
}

pub async fn rate_driver(
    api: &ApiClient,
    booking_id: &str,
    rating: &DriverRatingRequest,
) -> Result<serde_json::Value, ApiError> {
    let req = api
        .request(Method::POST, &format!("/drivers/{booking_id}/rate"))
        .json(rating);
    api.send(req).await
}

pub async fn car_location(api: &ApiClient, booking_id: &str) -> Result<GeoLocation, ApiError> {
    let req = api.request(Method::GET, &format!("/drivers/{booking_id}/location"));
    api.send(req).await
}

pub async fn update_car_location(
    api: &ApiClient,
    booking_id: &str,
    location: &GeoLocation,
) -> Result<serde_json::Value, ApiError> {
    let req = api
        .request(Method::PUT, &format!("/drivers/{booking_id}/location"))
        .json(location);
    api.send(req).await
}

pub async fn earnings(api: &ApiClient) -> Result<EarningsSummary, ApiError> {
    let req = api.request(Method::GET, "/drivers/earnings");
    api.send(req).await
}

pub async fn reviews(api: &ApiClient) -> Result<Vec<Review>, ApiError> {
    let req = api.request(Method::GET, "/drivers/reviews");
    api.send(req).await
}

pub async fn profile(api: &ApiClient) -> Result<DriverProfile, ApiError> {
    let req = api.request(Method::GET, "/drivers/profile");
    api.send(req).await
}

pub async fn update_profile(
    api: &ApiClient,
    driver_id: &str,
    update: &DriverUpdateRequest,
) -> Result<DriverProfile, ApiError> {
    let req = api
        .request(Method::PUT, &format!("/drivers/{driver_id}"))
        .json(update);
    api.send(req).await
}
