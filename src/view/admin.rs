use std::path::PathBuf;

use anyhow::bail;
use futures::future::join_all;

use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::gate;
use crate::helper_model::UserUpdateRequest;
use crate::methods::export;
use crate::model::Role;
use crate::session::Session;
use crate::view::{print_booking, print_ticket, print_user, print_vehicle};

fn require_admin(config: &AppConfig) -> anyhow::Result<Session> {
    crate::view::require_role(config, Role::Admin)
}

fn client(config: &AppConfig, session: &Session) -> ApiClient {
    ApiClient::new(config, Some(session))
}

pub async fn bookings(config: &AppConfig, csv: Option<PathBuf>) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let bookings = api::admin::bookings(&api).await?;
    if bookings.is_empty() {
        println!("No bookings found in the system.");
        return Ok(());
    }
    for booking in &bookings {
        print_booking(booking, config.display_timezone.as_deref());
        println!();
    }
    if let Some(path) = csv {
        export::write_bookings_csv(&path, &bookings)?;
        println!("Wrote {} bookings to {}.", bookings.len(), path.display());
    }
    Ok(())
}

/// Bookings that need a driver, each with the drivers currently free to
/// take it. The per-booking candidate fetches run concurrently.
pub async fn assignable(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let bookings = api::admin::bookings(&api).await?;
    let eligible: Vec<_> = bookings
        .iter()
        .filter(|b| gate::awaiting_driver_assignment(b))
        .collect();
    if eligible.is_empty() {
        println!("No bookings available for driver assignment.");
        return Ok(());
    }

    let candidate_lists = join_all(
        eligible
            .iter()
            .map(|b| api::admin::available_drivers(&api, &b.id)),
    )
    .await;

    for (booking, candidates) in eligible.iter().zip(candidate_lists) {
        print_booking(booking, config.display_timezone.as_deref());
        match candidates {
            Ok(available) if available.drivers.is_empty() => {
                println!("  No drivers available.");
            }
            Ok(available) => {
                for driver in &available.drivers {
                    println!("  Candidate: {} ({})", driver.name, driver.id);
                }
            }
            Err(err) => println!("  Could not load drivers: {err}"),
        }
        println!();
    }
    Ok(())
}

pub async fn assign(
    config: &AppConfig,
    booking_id: String,
    driver_id: String,
) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let booking = api::bookings::get(&api, &booking_id).await?;
    if !gate::awaiting_driver_assignment(&booking) {
        println!(
            "Booking {} is not awaiting driver assignment (status {}, driver {}).",
            booking.id,
            booking.status,
            booking
                .driver
                .as_ref()
                .map(|d| d.name.as_str())
                .unwrap_or("none")
        );
        return Ok(());
    }
    let updated = api::admin::assign_driver(&api, &booking_id, driver_id).await?;
    println!("Assigned; booking {} is {}.", updated.id, updated.status);
    Ok(())
}

pub async fn users(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let users = api::admin::users(&api).await?;
    for user in &users {
        print_user(user);
        println!();
    }
    Ok(())
}

pub async fn user_edit(
    config: &AppConfig,
    user_id: String,
    name: Option<String>,
    email: Option<String>,
    mobile: Option<String>,
    role: Option<String>,
) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    if let Some(email) = &email {
        if !crate::methods::validation::is_valid_email(email) {
            bail!("Invalid email.");
        }
    }
    if let Some(mobile) = &mobile {
        if !crate::methods::validation::is_valid_mobile(mobile) {
            bail!("Invalid mobile number.");
        }
    }
    let role = match role.as_deref() {
        Some(raw) => {
            let parsed = crate::view::auth::parse_role(raw);
            if parsed == Role::Unknown {
                bail!("Unknown role '{raw}'.");
            }
            Some(parsed)
        }
        None => None,
    };

    let api = client(config, &session);
    let update = UserUpdateRequest {
        name,
        email,
        mobile,
        role,
    };
    let updated = api::admin::update_user(&api, &user_id, &update).await?;
    println!("Updated.");
    print_user(&updated);
    Ok(())
}

pub async fn user_suspend(
    config: &AppConfig,
    user_id: String,
    suspend: bool,
) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let updated = api::admin::suspend_user(&api, &user_id, suspend).await?;
    println!(
        "User {} is now {}.",
        updated.id,
        if updated.is_suspended { "suspended" } else { "active" }
    );
    Ok(())
}

pub async fn licenses(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let users = api::admin::unverified_users(&api).await?;
    if users.is_empty() {
        println!("No users awaiting license approval.");
        return Ok(());
    }
    for user in &users {
        print_user(user);
        match &user.license {
            Some(license) => println!("  License file: {license}"),
            None => println!("  No license uploaded"),
        }
        println!();
    }
    Ok(())
}

pub async fn license_decide(
    config: &AppConfig,
    user_id: String,
    approve: bool,
) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let updated = api::admin::decide_license(&api, &user_id, approve).await?;
    println!(
        "License for {} {}.",
        updated.id,
        if approve { "approved" } else { "rejected" }
    );
    Ok(())
}

pub async fn fraud(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let users = api::admin::fraudulent_users(&api).await?;
    if users.is_empty() {
        println!("No flagged users.");
        return Ok(());
    }
    for user in &users {
        print_user(user);
        println!();
    }
    Ok(())
}

pub async fn unapproved_vehicles(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let vehicles = api::admin::unapproved_vehicles(&api).await?;
    if vehicles.is_empty() {
        println!("No vehicles awaiting approval.");
        return Ok(());
    }
    for vehicle in &vehicles {
        print_vehicle(vehicle);
        println!();
    }
    Ok(())
}

pub async fn vehicle_decide(
    config: &AppConfig,
    vehicle_id: String,
    approve: bool,
) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let updated = api::vehicles::approve(&api, &vehicle_id, approve).await?;
    println!(
        "Vehicle {} {}.",
        updated.id,
        if approve { "approved" } else { "rejected" }
    );
    Ok(())
}

pub async fn condition_reports(
    config: &AppConfig,
    booking_id: Option<String>,
) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let reports = api::admin::condition_reports(&api, booking_id.as_deref()).await?;
    if reports.is_empty() {
        println!("No condition reports.");
        return Ok(());
    }
    for entry in &reports {
        println!(
            "{:?} report — {}",
            entry.report.report_type, entry.report.condition
        );
        if let Some(booking) = &entry.booking_details {
            println!("  Booking {} ({})", booking.id, booking.status);
        }
        if !entry.report.images.is_empty() {
            println!("  Images: {}", entry.report.images.join(", "));
        }
        println!();
    }
    Ok(())
}

pub async fn support_list(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    let api = client(config, &session);
    let tickets = api::support::all(&api).await?;
    if tickets.is_empty() {
        println!("No tickets.");
        return Ok(());
    }
    for ticket in &tickets {
        print_ticket(ticket, config.display_timezone.as_deref());
        println!();
    }
    Ok(())
}

pub async fn support_resolve(
    config: &AppConfig,
    ticket_id: String,
    resolution: String,
) -> anyhow::Result<()> {
    let session = require_admin(config)?;
    if resolution.trim().is_empty() {
        bail!("Resolution is required.");
    }
    let api = client(config, &session);
    let ticket = api::support::resolve(&api, &ticket_id, resolution).await?;
    println!("Ticket {} is now {}.", ticket.id, ticket.status.as_str());
    Ok(())
}
