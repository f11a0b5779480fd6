//! Pre-submission form validation. Each `validate_*` function checks one
//! form and returns every violation it finds, so the user sees the full
//! list at once instead of fixing fields one request at a time.

use std::path::Path;

use chrono::NaiveDate;
use currency_rs::Currency;
use regex::Regex;

use crate::model::Role;

pub const MAX_CONDITION_CHARS: usize = 500;
pub const MAX_REPORT_IMAGES: usize = 10;
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

pub fn is_valid_email(email: &str) -> bool {
    if email.len() > 254 {
        return false;
    }
    lazy_static::lazy_static! {
        static ref EMAIL_REGEX: Regex = Regex::new(
            r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9-](?:[a-z0-9-]{0,61}[a-z0-9])+(?:\.[a-z0-9-](?:[a-z0-9-]{0,61}[a-z0-9])+)+$"
        ).expect("Invalid regex");
    }
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    lazy_static::lazy_static! {
        static ref MOBILE_REGEX: Regex = Regex::new(
            r"^\+?[1-9]\d{9}$" // 10 digits, optional country prefix sign
        ).expect("Invalid mobile regex");
    }
    MOBILE_REGEX.is_match(mobile)
}

/// Parse a user-entered money amount ("12", "12.50", "$1,250.00").
pub fn parse_amount(raw: &str) -> Option<f64> {
    Currency::new_string(raw, None).ok().map(|c| c.value())
}

pub fn validate_login(email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if !is_valid_email(email) {
        errors.push("Invalid email".to_string());
    }
    if password.len() < 6 {
        errors.push("Password must be at least 6 characters".to_string());
    }
    errors
}

pub fn validate_register(
    name: &str,
    email: &str,
    password: &str,
    role: Role,
    mobile: &str,
    license: Option<&Path>,
) -> Vec<String> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    if !is_valid_email(email) {
        errors.push("Invalid email".to_string());
    }
    if password.len() < 6 {
        errors.push("Password must be at least 6 characters".to_string());
    }
    if !matches!(role, Role::Customer | Role::Owner | Role::Driver) {
        errors.push("Role must be customer, owner or driver".to_string());
    }
    if !is_valid_mobile(mobile) {
        errors.push(
            "Mobile number must be exactly 10 digits (e.g., +1234567890 or 1234567890)".to_string(),
        );
    }
    if role == Role::Driver && license.is_none() {
        errors.push("License is required for drivers".to_string());
    }
    errors
}

pub fn validate_booking(
    vehicle_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Vec<String> {
    let mut errors = Vec::new();
    if vehicle_id.trim().is_empty() {
        errors.push("Vehicle ID is required".to_string());
    }
    if start < today {
        errors.push("Start date must be today or later".to_string());
    }
    if end < start {
        errors.push("End date must be after start date".to_string());
    }
    errors
}

/// Condition text bound plus image count/size limits. Sizes are checked
/// on disk before anything is uploaded.
pub fn validate_condition_report(condition: &str, images: &[std::path::PathBuf]) -> Vec<String> {
    let mut errors = Vec::new();
    if condition.chars().count() > MAX_CONDITION_CHARS {
        errors.push("Max 500 characters".to_string());
    }
    if images.len() > MAX_REPORT_IMAGES {
        errors.push("Max 10 images".to_string());
    }
    for image in images {
        match std::fs::metadata(image) {
            Ok(meta) if meta.len() > MAX_IMAGE_BYTES => {
                errors.push(format!("File too large: {}", image.display()));
            }
            Ok(_) => {}
            Err(_) => errors.push(format!("File not found: {}", image.display())),
        }
    }
    errors
}

pub fn validate_payment(amount: f64) -> Vec<String> {
    let mut errors = Vec::new();
    if !amount.is_finite() || amount <= 0.0 {
        errors.push("Amount must be positive".to_string());
    }
    errors
}

pub fn validate_rating(vehicle_rating: u8, driver_rating: Option<u8>) -> Vec<String> {
    let mut errors = Vec::new();
    if !(1..=5).contains(&vehicle_rating) {
        errors.push("Rating must be between 1 and 5".to_string());
    }
    if let Some(rating) = driver_rating {
        if !(1..=5).contains(&rating) {
            errors.push("Rating must be between 1 and 5".to_string());
        }
    }
    errors
}

pub fn validate_support_ticket(issue: &str) -> Vec<String> {
    if issue.trim().is_empty() {
        vec!["Issue description is required".to_string()]
    } else {
        vec![]
    }
}

pub fn validate_vehicle(
    model: &str,
    vehicle_type: &str,
    price: f64,
    fuel_type: &str,
    category: &str,
    seating_capacity: u32,
    location: &str,
    registration: &str,
    images: &[std::path::PathBuf],
    insurance_image: Option<&Path>,
) -> Vec<String> {
    let mut errors = Vec::new();
    if model.trim().is_empty() {
        errors.push("Model is required".to_string());
    }
    if !matches!(vehicle_type, "bike" | "car") {
        errors.push("Vehicle type must be bike or car".to_string());
    }
    if price <= 0.0 {
        errors.push("Price must be greater than 0".to_string());
    }
    if !matches!(fuel_type, "petrol" | "diesel" | "electric") {
        errors.push("Fuel type must be petrol, diesel or electric".to_string());
    }
    if category.trim().is_empty() {
        errors.push("Category is required".to_string());
    }
    if seating_capacity < 1 {
        errors.push("Seating capacity must be at least 1".to_string());
    }
    if location.trim().is_empty() {
        errors.push("Location is required".to_string());
    }
    if registration.trim().is_empty() {
        errors.push("Registration number is required".to_string());
    }
    if images.is_empty() {
        errors.push("At least one image is required".to_string());
    }
    if insurance_image.is_none() {
        errors.push("Insurance image is required".to_string());
    }
    errors
}

pub fn validate_location(latitude: f64, longitude: f64) -> Vec<String> {
    let mut errors = Vec::new();
    if !(-90.0..=90.0).contains(&latitude) {
        errors.push("Latitude must be between -90 and 90".to_string());
    }
    if !(-180.0..=180.0).contains(&longitude) {
        errors.push("Longitude must be between -180 and 180".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("ben@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.co"));
        assert!(!is_valid_email("ben@localhost"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn mobile_shapes() {
        assert!(is_valid_mobile("1234567890"));
        assert!(is_valid_mobile("+1234567890"));
        assert!(!is_valid_mobile("0123456789")); // leading zero
        assert!(!is_valid_mobile("12345"));
        assert!(!is_valid_mobile("12345678901"));
    }

    #[test]
    fn amounts_parse_with_symbols_and_separators() {
        assert_eq!(parse_amount("12.50"), Some(12.5));
        assert_eq!(parse_amount("$1,250.00"), Some(1250.0));
    }

    #[test]
    fn login_collects_both_errors() {
        let errors = validate_login("nope", "123");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn driver_registration_requires_license() {
        let errors = validate_register(
            "Asha",
            "asha@example.com",
            "secret1",
            Role::Driver,
            "1234567890",
            None,
        );
        assert_eq!(errors, vec!["License is required for drivers".to_string()]);

        let ok = validate_register(
            "Asha",
            "asha@example.com",
            "secret1",
            Role::Customer,
            "1234567890",
            None,
        );
        assert!(ok.is_empty());
    }

    #[test]
    fn booking_date_rules() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();

        assert!(validate_booking("v1", today, tomorrow, today).is_empty());
        assert!(!validate_booking("v1", yesterday, tomorrow, today).is_empty());
        assert!(!validate_booking("v1", tomorrow, today, today).is_empty());
        assert!(!validate_booking("", today, tomorrow, today).is_empty());
    }

    #[test]
    fn condition_report_limits() {
        let long = "x".repeat(501);
        assert_eq!(
            validate_condition_report(&long, &[]),
            vec!["Max 500 characters".to_string()]
        );

        let many: Vec<std::path::PathBuf> =
            (0..11).map(|i| format!("/tmp/img{i}.jpg").into()).collect();
        let errors = validate_condition_report("scratch on left door", &many);
        assert!(errors.iter().any(|e| e == "Max 10 images"));
    }

    #[test]
    fn missing_image_file_is_reported() {
        let errors =
            validate_condition_report("ok", &["/nonexistent/a.jpg".into()]);
        assert_eq!(errors, vec!["File not found: /nonexistent/a.jpg".to_string()]);
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(1, None).is_empty());
        assert!(validate_rating(5, Some(3)).is_empty());
        assert!(!validate_rating(0, None).is_empty());
        assert!(!validate_rating(6, None).is_empty());
        assert!(!validate_rating(4, Some(0)).is_empty());
    }

    #[test]
    fn payment_must_be_positive() {
        assert!(validate_payment(10.0).is_empty());
        assert!(!validate_payment(0.0).is_empty());
        assert!(!validate_payment(-3.0).is_empty());
        assert!(!validate_payment(f64::NAN).is_empty());
    }

    #[test]
    fn vehicle_form_collects_everything() {
        let errors = validate_vehicle("", "boat", 0.0, "coal", "", 0, "", "", &[], None);
        assert_eq!(errors.len(), 10);
    }

    #[test]
    fn location_bounds() {
        assert!(validate_location(41.88, -87.63).is_empty());
        assert!(!validate_location(91.0, 0.0).is_empty());
        assert!(!validate_location(0.0, -181.0).is_empty());
    }
}
