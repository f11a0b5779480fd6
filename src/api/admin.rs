use reqwest::Method;

use crate::api::{ApiClient, ApiError};
use crate::helper_model::{
    AdminConditionReport, AssignDriverRequest, AvailableDrivers, LicenseDecisionRequest,
    SuspendRequest, UserUpdateRequest,
};
use crate::model::{Booking, User, Vehicle};

pub async fn bookings(api: &ApiClient) -> Result<Vec<Booking>, ApiError> {
    let req = api.request(Method::GET, "/admin/bookings");
    api.send(req).await
}

pub async fn users(api: &ApiClient) -> Result<Vec<User>, ApiError> {
    let req = api.request(Method::GET, "/admin/users");
    api.send(req).await
}

pub async fn update_user(
    api: &ApiClient,
    user_id: &str,
    update: &UserUpdateRequest,
) -> Result<User, ApiError> {
    let req = api
        .request(Method::PUT, &format!("/admin/users/{user_id}"))
        .json(update);
    api.send(req).await
}

pub async fn suspend_user(api: &ApiClient, user_id: &str, suspend: bool) -> Result<User, ApiError> {
    let req = api
        .request(Method::PUT, &format!("/admin/users/{user_id}/suspend"))
        .json(&SuspendRequest { suspend });
    api.send(req).await
}

pub async fn fraudulent_users(api: &ApiClient) -> Result<Vec<User>, ApiError> {
    let req = api.request(Method::GET, "/admin/fraud");
    api.send(req).await
}

pub async fn unapproved_vehicles(api: &ApiClient) -> Result<Vec<Vehicle>, ApiError> {
    let req = api.request(Method::GET, "/admin/vehicles/unapproved");
    api.send(req).await
}

/// Users whose uploaded license has not been reviewed yet.
pub async fn unverified_users(api: &ApiClient) -> Result<Vec<User>, ApiError> {
    let req = api.request(Method::GET, "/admin/users/unverified");
    api.send(req).await
}

pub async fn decide_license(
    api: &ApiClient,
    user_id: &str,
    approve: bool,
) -> Result<User, ApiError> {
    let req = api
        .request(Method::PUT, &format!("/admin/users/{user_id}/license"))
        .json(&LicenseDecisionRequest { approve });
    api.send(req).await
}

pub async fn condition_reports(
    api: &ApiClient,
    booking_id: Option<&str>,
) -> Result<Vec<AdminConditionReport>, ApiError> {
    let mut req = api.request(Method::GET, "/admin/condition-reports");
    if let Some(booking_id) = booking_id {
        req = req.query(&[("bookingId", booking_id)]);
    }
    api.send(req).await
}

pub async fn available_drivers(
    api: &ApiClient,
    booking_id: &str,
) -> Result<AvailableDrivers, ApiError> {
    let req = api.request(
        Method::GET,
        &format!("/admin/bookings/{booking_id}/available-drivers"),
    );
    api.send(req).await
}

pub async fn assign_driver(
    api: &ApiClient,
    booking_id: &str,
    driver_id: String,
) -> Result<Booking, ApiError> {
    let req = api
        .request(Method::PUT, &format!("/admin/bookings/{booking_id}/assign"))
        .json(&AssignDriverRequest { driver_id });
    api.send(req).await
}
