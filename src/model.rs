use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Booking statuses are owned by the backend; the client only observes
// them. Older backend revisions emitted "confirmed" where newer ones emit
// "pickup-confirmed", so the legacy spelling is accepted as an alias.
// Anything unrecognized collapses to Unknown instead of failing the
// whole response.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Approved,
    Assigned,
    #[serde(alias = "confirmed")]
    PickupConfirmed,
    Delivered,
    Completed,
    Paid,
    Cancelled,
    Rejected,
    #[default]
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Assigned => "assigned",
            BookingStatus::PickupConfirmed => "pickup-confirmed",
            BookingStatus::Delivered => "delivered",
            BookingStatus::Completed => "completed",
            BookingStatus::Paid => "paid",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Owner,
    Driver,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Owner => "owner",
            Role::Driver => "driver",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConditionReportType {
    Before,
    After,
    #[serde(other)]
    Unknown,
}

impl ConditionReportType {
    fn unknown() -> Self {
        ConditionReportType::Unknown
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Bike,
    Car,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Resolved,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Unknown => "unknown",
        }
    }
}

// Populated references inside booking payloads carry only a handful of
// fields; everything defaults so a thin populate on the backend side
// still deserializes.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub registration: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionReport {
    #[serde(rename = "type", default = "ConditionReportType::unknown")]
    pub report_type: ConditionReportType,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub reported_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub needs_driver: bool,
    #[serde(default)]
    pub driver: Option<PersonSummary>,
    #[serde(default)]
    pub condition_reports: Vec<ConditionReport>,
    #[serde(default)]
    pub owner_approved: bool,
    #[serde(default)]
    pub vehicle: Option<VehicleSummary>,
    #[serde(default)]
    pub customer: Option<PersonSummary>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub drop_location: Option<String>,
    #[serde(default)]
    pub total_price: Option<f64>,
}

impl Booking {
    pub fn has_report(&self, report_type: ConditionReportType) -> bool {
        self.condition_reports
            .iter()
            .any(|r| r.report_type == report_type)
    }

    pub fn vehicle_label(&self) -> &str {
        self.vehicle
            .as_ref()
            .map(|v| v.model.as_str())
            .filter(|m| !m.is_empty())
            .unwrap_or("(unknown vehicle)")
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(rename = "type", default = "VehicleType::unknown")]
    pub vehicle_type: VehicleType,
    #[serde(default)]
    pub price: f64,
    #[serde(default = "FuelType::unknown")]
    pub fuel_type: FuelType,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub seating_capacity: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub registration: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub insurance_image: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub owner: Option<PersonSummary>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
}

impl VehicleType {
    fn unknown() -> Self {
        VehicleType::Unknown
    }
}

impl FuelType {
    fn unknown() -> Self {
        FuelType::Unknown
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "Role::unknown")]
    pub role: Role,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub license_status: Option<String>,
    #[serde(default)]
    pub fraud_score: Option<f64>,
}

impl Role {
    fn unknown() -> Self {
        Role::Unknown
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub availability: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub completed_bookings: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub reviewer: Option<PersonSummary>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_status_spellings() {
        for (raw, expected) in [
            ("\"pending\"", BookingStatus::Pending),
            ("\"approved\"", BookingStatus::Approved),
            ("\"assigned\"", BookingStatus::Assigned),
            ("\"pickup-confirmed\"", BookingStatus::PickupConfirmed),
            ("\"delivered\"", BookingStatus::Delivered),
            ("\"completed\"", BookingStatus::Completed),
            ("\"paid\"", BookingStatus::Paid),
            ("\"cancelled\"", BookingStatus::Cancelled),
            ("\"rejected\"", BookingStatus::Rejected),
        ] {
            let parsed: BookingStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed, expected, "{raw}");
        }
    }

    #[test]
    fn legacy_confirmed_is_pickup_confirmed() {
        let parsed: BookingStatus = serde_json::from_str("\"confirmed\"").unwrap();
        assert_eq!(parsed, BookingStatus::PickupConfirmed);
    }

    #[test]
    fn unrecognized_status_never_fails() {
        let parsed: BookingStatus = serde_json::from_str("\"handed-over\"").unwrap();
        assert_eq!(parsed, BookingStatus::Unknown);
    }

    #[test]
    fn booking_with_minimal_fields_deserializes() {
        let booking: Booking =
            serde_json::from_str(r#"{"_id":"b1","status":"pending"}"#).unwrap();
        assert_eq!(booking.id, "b1");
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(!booking.needs_driver);
        assert!(booking.driver.is_none());
        assert!(booking.condition_reports.is_empty());
    }

    #[test]
    fn booking_with_populated_refs_deserializes() {
        let raw = r#"{
            "_id": "b2",
            "status": "delivered",
            "needsDriver": true,
            "driver": {"_id": "d1", "name": "Asha"},
            "ownerApproved": true,
            "vehicle": {"_id": "v1", "model": "Swift", "price": 45.0},
            "customer": {"_id": "c1", "name": "Ben"},
            "startDate": "2025-06-01T09:00:00Z",
            "endDate": "2025-06-03T09:00:00Z",
            "conditionReports": [
                {"type": "before", "condition": "clean", "images": []}
            ],
            "totalPrice": 90.0
        }"#;
        let booking: Booking = serde_json::from_str(raw).unwrap();
        assert!(booking.needs_driver);
        assert!(booking.owner_approved);
        assert_eq!(booking.driver.as_ref().unwrap().name, "Asha");
        assert!(booking.has_report(ConditionReportType::Before));
        assert!(!booking.has_report(ConditionReportType::After));
        assert_eq!(booking.vehicle_label(), "Swift");
    }
}
