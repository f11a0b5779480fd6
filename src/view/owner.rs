use std::path::PathBuf;

use anyhow::bail;

use crate::api::vehicles::VehicleForm;
use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::gate;
use crate::methods::{money, validation};
use crate::model::Role;
use crate::session::Session;
use crate::view::{print_booking, print_form_errors, print_review, print_vehicle, require_role};

fn client(config: &AppConfig, session: &Session) -> ApiClient {
    ApiClient::new(config, Some(session))
}

pub async fn vehicles(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_role(config, Role::Owner)?;
    let api = client(config, &session);
    let vehicles = api::vehicles::owner_vehicles(&api).await?;
    if vehicles.is_empty() {
        println!("No vehicles listed yet.");
        return Ok(());
    }
    for vehicle in &vehicles {
        print_vehicle(vehicle);
        println!();
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn vehicle_save(
    config: &AppConfig,
    vehicle_id: Option<String>,
    model: String,
    vehicle_type: String,
    price: f64,
    fuel_type: String,
    category: String,
    seating_capacity: u32,
    location: String,
    registration: String,
    images: Vec<PathBuf>,
    insurance_image: Option<PathBuf>,
) -> anyhow::Result<()> {
    let session = require_role(config, Role::Owner)?;
    let errors = validation::validate_vehicle(
        &model,
        &vehicle_type,
        price,
        &fuel_type,
        &category,
        seating_capacity,
        &location,
        &registration,
        &images,
        insurance_image.as_deref(),
    );
    if print_form_errors(&errors) {
        bail!("Vehicle not submitted.");
    }

    let api = client(config, &session);
    let form = VehicleForm {
        model,
        vehicle_type,
        price,
        fuel_type,
        category,
        seating_capacity,
        location,
        registration,
        images,
        insurance_image,
    };
    let saved = match vehicle_id {
        Some(vehicle_id) => api::vehicles::update(&api, &vehicle_id, &form).await?,
        None => api::vehicles::add(&api, &form).await?,
    };
    println!("Saved.");
    print_vehicle(&saved);
    Ok(())
}

pub async fn vehicle_delete(config: &AppConfig, vehicle_id: String) -> anyhow::Result<()> {
    let session = require_role(config, Role::Owner)?;
    let api = client(config, &session);
    api::vehicles::delete(&api, &vehicle_id).await?;
    println!("Deleted vehicle {vehicle_id}.");
    Ok(())
}

/// Bookings awaiting an approve/reject decision.
pub async fn approvals(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_role(config, Role::Owner)?;
    let api = client(config, &session);
    let bookings = api::bookings::mine(&api).await?;
    let pending: Vec<_> = bookings
        .iter()
        .filter(|b| gate::awaiting_owner_decision(b))
        .collect();
    if pending.is_empty() {
        println!("There are no bookings awaiting your approval at this time.");
        return Ok(());
    }
    for booking in pending {
        print_booking(booking, config.display_timezone.as_deref());
        println!();
    }
    Ok(())
}

pub async fn decide(config: &AppConfig, booking_id: String, approve: bool) -> anyhow::Result<()> {
    let session = require_role(config, Role::Owner)?;
    let api = client(config, &session);
    let booking = api::bookings::get(&api, &booking_id).await?;
    if !gate::awaiting_owner_decision(&booking) {
        println!(
            "Booking {} is {}; only pending bookings can be decided.",
            booking.id, booking.status
        );
        return Ok(());
    }
    let updated = api::bookings::approve(&api, &booking_id, approve).await?;
    println!(
        "Booking {} {}.",
        updated.id,
        if approve { "approved" } else { "rejected" }
    );
    Ok(())
}

pub async fn earnings(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_role(config, Role::Owner)?;
    let api = client(config, &session);
    let summary = api::owner::earnings(&api).await?;
    println!("Total earnings:     {}", money::format_usd(summary.total_earnings));
    println!("Completed bookings: {}", summary.completed_bookings);
    Ok(())
}

pub async fn reviews(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_role(config, Role::Owner)?;
    let api = client(config, &session);
    let reviews = api::vehicles::owner_reviews(&api).await?;
    if reviews.is_empty() {
        println!("No reviews yet.");
        return Ok(());
    }
    for review in &reviews {
        print_review(review);
    }
    Ok(())
}
