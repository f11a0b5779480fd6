use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

use crate::model::Role;

/// Error payload the backend attaches to non-2xx responses.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub role: Role,
    pub user_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingRequest {
    pub vehicle_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_location: Option<String>,
    pub needs_driver: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ApprovalRequest {
    pub approval: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SuspendRequest {
    pub suspend: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LicenseDecisionRequest {
    pub approve: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub booking_id: String,
    pub amount: f64,
    pub payment_method: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRatingRequest {
    pub vehicle_rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_comment: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DriverRatingRequest {
    pub driver_rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_comment: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewTicketRequest {
    pub issue: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResolveTicketRequest {
    pub resolution: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssignDriverRequest {
    pub driver_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DriverUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub availability: bool,
}

/// Query-string filters for the vehicle catalogue.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VehicleFilters {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

/// `GET .../available-drivers` nests its list one level down.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct AvailableDrivers {
    #[serde(default)]
    pub drivers: Vec<crate::model::User>,
}

/// `GET /support/tickets` nests its list one level down.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TicketsEnvelope {
    #[serde(default)]
    pub tickets: Vec<crate::model::SupportTicket>,
}

/// Admin edit form for a user record; absent fields stay untouched.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UserUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<crate::model::Role>,
}

/// A condition report joined with its booking, as the admin review
/// screen receives it.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdminConditionReport {
    #[serde(flatten)]
    pub report: crate::model::ConditionReport,
    #[serde(default)]
    pub booking_details: Option<crate::model::Booking>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LicenseStatusResponse {
    #[serde(default)]
    pub license_status: Option<String>,
}
