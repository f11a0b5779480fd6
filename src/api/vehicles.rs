use std::path::PathBuf;

use reqwest::multipart::Form;
use reqwest::Method;

use crate::api::{file_part, ApiClient, ApiError};
use crate::helper_model::{ApprovalRequest, VehicleFilters, VehicleRatingRequest};
use crate::model::{Review, Vehicle};

pub async fn list(api: &ApiClient, filters: &VehicleFilters) -> Result<Vec<Vehicle>, ApiError> {
    let req = api.request(Method::GET, "/vehicles").query(filters);
    api.send(req).await
}

pub async fn get(api: &ApiClient, vehicle_id: &str) -> Result<Vehicle, ApiError> {
    let req = api.request(Method::GET, &format!("/vehicles/{vehicle_id}"));
    api.send(req).await
}

/// Fields collected by the owner's add/edit vehicle form. Images travel
/// as multipart file parts alongside the scalar fields.
#[derive(Debug, Clone)]
pub struct VehicleForm {
    pub model: String,
    pub vehicle_type: String,
    pub price: f64,
    pub fuel_type: String,
    pub category: String,
    pub seating_capacity: u32,
    pub location: String,
    pub registration: String,
    pub images: Vec<PathBuf>,
    pub insurance_image: Option<PathBuf>,
}

fn vehicle_multipart(form: &VehicleForm) -> Result<Form, ApiError> {
    let mut multipart = Form::new()
        .text("model", form.model.clone())
        .text("type", form.vehicle_type.clone())
        .text("price", form.price.to_string())
        .text("fuelType", form.fuel_type.clone())
        .text("category", form.category.clone())
        .text("seatingCapacity", form.seating_capacity.to_string())
        .text("location", form.location.clone())
        .text("registration", form.registration.clone());
    for image in &form.images {
        multipart = multipart.part("images", file_part(image)?);
    }
    if let Some(insurance) = &form.insurance_image {
        multipart = multipart.part("insuranceImage", file_part(insurance)?);
    }
    Ok(multipart)
}

pub async fn add(api: &ApiClient, form: &VehicleForm) -> Result<Vehicle, ApiError> {
    let req = api
        .request(Method::POST, "/vehicles/add")
        .multipart(vehicle_multipart(form)?);
    api.send(req).await
}

pub async fn update(
    api: &ApiClient,
    vehicle_id: &str,
    form: &VehicleForm,
) -> Result<Vehicle, ApiError> {
    let req = api
        .request(Method::PUT, &format!("/vehicles/{vehicle_id}"))
        .multipart(vehicle_multipart(form)?);
    api.send(req).await
}

pub async fn delete(api: &ApiClient, vehicle_id: &str) -> Result<serde_json::Value, ApiError> {
    let req = api.request(Method::DELETE, &format!("/vehicles/{vehicle_id}"));
    api.send(req).await
}

pub async fn owner_vehicles(api: &ApiClient) -> Result<Vec<Vehicle>, ApiError> {
    let req = api.request(Method::GET, "/vehicles/owner");
    api.send(req).await
}

pub async fn approve(
    api: &ApiClient,
    vehicle_id: &str,
    approval: bool,
) -> Result<Vehicle, ApiError> {
    let req = api
        .request(Method::PUT, &format!("/vehicles/{vehicle_id}/approve"))
        .json(&ApprovalRequest { approval });
    api.send(req).await
}

pub async fn owner_reviews(api: &ApiClient) -> Result<Vec<Review>, ApiError> {
    let req = api.request(Method::GET, "/vehicles/owner/reviews");
    api.send(req).await
}

pub async fn rate(
    api: &ApiClient,
    booking_id: &str,
    rating: &VehicleRatingRequest,
) -> Result<serde_json::Value, ApiError> {
    let req = api
        .request(Method::POST, &format!("/vehicles/{booking_id}/rate"))
        .json(rating);
    api.send(req).await
}
