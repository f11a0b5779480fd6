//! Terminal rendering and action wiring, grouped by role the same way
//! the backend scopes its routes. Each command loads the saved session,
//! checks the role client-side (the server remains the authority),
//! fetches, and prints plain text.

pub mod admin;
pub mod auth;
pub mod customer;
pub mod driver;
pub mod owner;

use anyhow::bail;

use crate::config::AppConfig;
use crate::gate;
use crate::methods::timestamps;
use crate::model::{Booking, Review, Role, SupportTicket, User, Vehicle};
use crate::session::Session;

/// The signed-in session, or a sign-in hint as the error.
pub fn require_session(config: &AppConfig) -> anyhow::Result<Session> {
    match Session::load(&config.session_file) {
        Some(session) => Ok(session),
        None => Err(crate::api::ApiError::NotAuthenticated.into()),
    }
}

/// Role check in front of role-scoped commands. Admins pass everywhere,
/// as in the original route guard.
pub fn require_role(config: &AppConfig, role: Role) -> anyhow::Result<Session> {
    let session = require_session(config)?;
    if session.role != role && session.role != Role::Admin {
        bail!(
            "This command needs a {role} account; you are signed in as {}.",
            session.role
        );
    }
    Ok(session)
}

/// Print validation messages; true when the form must not be submitted.
pub fn print_form_errors(errors: &[String]) -> bool {
    for error in errors {
        println!("  ! {error}");
    }
    !errors.is_empty()
}

fn date_or_dash(
    instant: Option<chrono::DateTime<chrono::Utc>>,
    tz_hint: Option<&str>,
) -> String {
    instant
        .map(|d| timestamps::display_date(d, tz_hint))
        .unwrap_or_else(|| "-".to_string())
}

pub fn print_booking(booking: &Booking, tz_hint: Option<&str>) {
    println!("Booking {} — {}", booking.id, booking.vehicle_label());
    if let Some(customer) = &booking.customer {
        if !customer.name.is_empty() {
            println!("  Customer: {}", customer.name);
        }
    }
    if let Some(driver) = &booking.driver {
        if !driver.name.is_empty() {
            println!("  Driver:   {}", driver.name);
        }
    }
    println!("  Start:    {}", date_or_dash(booking.start_date, tz_hint));
    println!("  End:      {}", date_or_dash(booking.end_date, tz_hint));
    println!("  Status:   {}", booking.status);
    if let Some(price) = booking.total_price {
        println!("  Total:    {}", crate::methods::money::format_usd(price));
    }
}

/// Booking plus the customer actions it currently permits.
pub fn print_booking_with_actions(booking: &Booking, tz_hint: Option<&str>) {
    print_booking(booking, tz_hint);
    let actions = gate::permitted_actions(booking);
    if !actions.is_empty() {
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        println!("  Actions:  {}", labels.join(", "));
    }
}

/// Booking plus the driver-side actions it currently permits.
pub fn print_booking_with_driver_actions(booking: &Booking, tz_hint: Option<&str>) {
    print_booking(booking, tz_hint);
    let actions = gate::driver_actions(booking);
    if !actions.is_empty() {
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        println!("  Actions:  {}", labels.join(", "));
    }
}

pub fn print_vehicle(vehicle: &Vehicle) {
    println!("Vehicle {} — {}", vehicle.id, vehicle.model);
    println!(
        "  Type:     {:?} / {:?}, seats {}",
        vehicle.vehicle_type, vehicle.fuel_type, vehicle.seating_capacity
    );
    println!("  Category: {}", vehicle.category);
    println!("  Location: {}", vehicle.location);
    println!(
        "  Price:    {} per day",
        crate::methods::money::format_usd(vehicle.price)
    );
    if let Some(rating) = vehicle.avg_rating {
        println!("  Rating:   {rating:.1}/5");
    }
    if !vehicle.approved {
        println!("  (awaiting approval)");
    }
}

pub fn print_ticket(ticket: &SupportTicket, tz_hint: Option<&str>) {
    println!("Ticket {} [{}]", ticket.id, ticket.status.as_str());
    println!("  Issue:    {}", ticket.issue);
    if let Some(resolution) = &ticket.resolution {
        println!("  Resolved: {resolution}");
    }
    if let Some(created) = ticket.created_at {
        println!(
            "  Opened:   {}",
            timestamps::display_in_zone(created, tz_hint)
        );
    }
}

pub fn print_user(user: &User) {
    let suspended = if user.is_suspended { " (suspended)" } else { "" };
    println!("User {} — {} <{}>{}", user.id, user.name, user.email, suspended);
    println!("  Role:   {}", user.role);
    if let Some(mobile) = &user.mobile {
        println!("  Mobile: {mobile}");
    }
    if let Some(status) = &user.license_status {
        println!("  License: {status}");
    }
    if let Some(score) = user.fraud_score {
        println!("  Fraud score: {score}");
    }
}

pub fn print_review(review: &Review) {
    let reviewer = review
        .reviewer
        .as_ref()
        .map(|r| r.name.as_str())
        .unwrap_or("anonymous");
    match &review.comment {
        Some(comment) => println!("{:.0}/5 from {} — {}", review.rating, reviewer, comment),
        None => println!("{:.0}/5 from {}", review.rating, reviewer),
    }
}
