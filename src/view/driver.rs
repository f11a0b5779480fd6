use std::path::PathBuf;

use anyhow::bail;

use crate::api::bookings::ConditionReportUpload;
use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::gate::{self, DriverAction};
use crate::helper_model::DriverUpdateRequest;
use crate::methods::{money, validation};
use crate::model::{ConditionReportType, GeoLocation, Role};
use crate::session::Session;
use crate::view::{
    print_booking_with_driver_actions, print_form_errors, print_review, require_role,
};

fn client(config: &AppConfig, session: &Session) -> ApiClient {
    ApiClient::new(config, Some(session))
}

pub async fn bookings(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_role(config, Role::Driver)?;
    let api = client(config, &session);
    let bookings = api::bookings::driver_bookings(&api).await?;
    if bookings.is_empty() {
        println!("No assigned bookings.");
        return Ok(());
    }
    for booking in &bookings {
        print_booking_with_driver_actions(booking, config.display_timezone.as_deref());
        println!();
    }
    Ok(())
}

pub async fn confirm(config: &AppConfig, booking_id: String) -> anyhow::Result<()> {
    let session = require_role(config, Role::Driver)?;
    let api = client(config, &session);
    let booking = api::bookings::get(&api, &booking_id).await?;
    if !gate::driver_actions(&booking).contains(&DriverAction::ConfirmAssignment) {
        println!(
            "Booking {} is {}; there is no assignment to confirm.",
            booking.id, booking.status
        );
        return Ok(());
    }
    let updated = api::drivers::confirm_assignment(&api, &booking_id).await?;
    println!("Assignment confirmed; booking {} is {}.", updated.id, updated.status);
    Ok(())
}

pub async fn complete(config: &AppConfig, booking_id: String) -> anyhow::Result<()> {
    let session = require_role(config, Role::Driver)?;
    let api = client(config, &session);
    let booking = api::bookings::get(&api, &booking_id).await?;
    if !gate::driver_actions(&booking).contains(&DriverAction::CompleteTrip) {
        println!(
            "Booking {} is {}; nothing to complete right now.",
            booking.id, booking.status
        );
        return Ok(());
    }
    let updated = api::drivers::complete_trip(&api, &booking_id).await?;
    println!("Done; booking {} is {}.", updated.id, updated.status);
    Ok(())
}

pub async fn report(
    config: &AppConfig,
    booking_id: String,
    condition: String,
    images: Vec<PathBuf>,
) -> anyhow::Result<()> {
    let session = require_role(config, Role::Driver)?;
    let api = client(config, &session);
    let booking = api::bookings::get(&api, &booking_id).await?;

    let actions = gate::driver_actions(&booking);
    let report_type = if actions.contains(&DriverAction::ReportBefore) {
        ConditionReportType::Before
    } else if actions.contains(&DriverAction::ReportAfter) {
        ConditionReportType::After
    } else {
        println!("{}", gate::report_refusal(&booking));
        return Ok(());
    };

    let errors = validation::validate_condition_report(&condition, &images);
    if print_form_errors(&errors) {
        bail!("Report not submitted.");
    }

    let upload = ConditionReportUpload {
        report_type,
        condition,
        images,
    };
    let updated = api::drivers::report_condition(&api, &booking_id, &upload).await?;
    println!(
        "Submitted {} report; booking {} is {}.",
        match report_type {
            ConditionReportType::After => "after",
            _ => "before",
        },
        updated.id,
        updated.status
    );
    Ok(())
}

pub async fn location_show(config: &AppConfig, booking_id: String) -> anyhow::Result<()> {
    let session = require_role(config, Role::Driver)?;
    let api = client(config, &session);
    let location = api::drivers::car_location(&api, &booking_id).await?;
    println!("Latitude:  {}", location.latitude);
    println!("Longitude: {}", location.longitude);
    Ok(())
}

pub async fn location_update(
    config: &AppConfig,
    booking_id: String,
    latitude: f64,
    longitude: f64,
) -> anyhow::Result<()> {
    let session = require_role(config, Role::Driver)?;
    let errors = validation::validate_location(latitude, longitude);
    if print_form_errors(&errors) {
        bail!("Location not submitted.");
    }
    let api = client(config, &session);
    let booking = api::bookings::get(&api, &booking_id).await?;
    if !gate::driver_actions(&booking).contains(&DriverAction::UpdateLocation) {
        println!(
            "Booking {} is {}; location updates are only open during the trip.",
            booking.id, booking.status
        );
        return Ok(());
    }
    let location = GeoLocation {
        latitude,
        longitude,
    };
    api::drivers::update_car_location(&api, &booking_id, &location).await?;
    println!("Location updated.");
    Ok(())
}

pub async fn earnings(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_role(config, Role::Driver)?;
    let api = client(config, &session);
    let summary = api::drivers::earnings(&api).await?;
    println!("Total earnings:     {}", money::format_usd(summary.total_earnings));
    println!("Completed bookings: {}", summary.completed_bookings);
    Ok(())
}

pub async fn reviews(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_role(config, Role::Driver)?;
    let api = client(config, &session);
    let reviews = api::drivers::reviews(&api).await?;
    if reviews.is_empty() {
        println!("No reviews yet.");
        return Ok(());
    }
    for review in &reviews {
        print_review(review);
    }
    Ok(())
}

pub async fn profile_show(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_role(config, Role::Driver)?;
    let api = client(config, &session);
    let profile = api::drivers::profile(&api).await?;
    println!("Driver {} — {}", profile.id, profile.name);
    println!(
        "  Location:  {}",
        profile.location.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  Available: {}",
        if profile.availability { "yes" } else { "no" }
    );
    Ok(())
}

pub async fn profile_update(
    config: &AppConfig,
    location: Option<String>,
    availability: bool,
) -> anyhow::Result<()> {
    let session = require_role(config, Role::Driver)?;
    let api = client(config, &session);
    let profile = api::drivers::profile(&api).await?;
    let update = DriverUpdateRequest {
        location,
        availability,
    };
    let updated = api::drivers::update_profile(&api, &profile.id, &update).await?;
    println!(
        "Profile updated; available: {}.",
        if updated.availability { "yes" } else { "no" }
    );
    Ok(())
}
