use std::path::PathBuf;

use anyhow::bail;
use chrono::Utc;

use crate::api::bookings::ConditionReportUpload;
use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::gate::{self, Action};
use crate::helper_model::{
    DriverRatingRequest, NewBookingRequest, PaymentRequest, VehicleFilters, VehicleRatingRequest,
};
use crate::methods::{export, money, validation};
use crate::model::{ConditionReportType, Role};
use crate::session::Session;
use crate::view::{
    print_booking_with_actions, print_form_errors, print_ticket, print_vehicle, require_role,
    require_session,
};

fn client(config: &AppConfig, session: &Session) -> ApiClient {
    ApiClient::new(config, Some(session))
}

/// The public catalogue works signed out; the token rides along when
/// present so the backend can personalize.
pub async fn vehicles(config: &AppConfig, filters: VehicleFilters) -> anyhow::Result<()> {
    let session = Session::load(&config.session_file);
    let api = ApiClient::new(config, session.as_ref());
    let vehicles = api::vehicles::list(&api, &filters).await?;
    if vehicles.is_empty() {
        println!("No vehicles match.");
        return Ok(());
    }
    for vehicle in &vehicles {
        print_vehicle(vehicle);
        println!();
    }
    Ok(())
}

pub async fn vehicle(config: &AppConfig, vehicle_id: String) -> anyhow::Result<()> {
    let session = Session::load(&config.session_file);
    let api = ApiClient::new(config, session.as_ref());
    let vehicle = api::vehicles::get(&api, &vehicle_id).await?;
    print_vehicle(&vehicle);
    Ok(())
}

pub async fn book(
    config: &AppConfig,
    vehicle_id: String,
    start: String,
    end: String,
    drop_location: Option<String>,
    needs_driver: bool,
) -> anyhow::Result<()> {
    let session = require_role(config, Role::Customer)?;
    let start = crate::methods::timestamps::parse_cli_date(&start)?;
    let end = crate::methods::timestamps::parse_cli_date(&end)?;

    let today = Utc::now().date_naive();
    let errors = validation::validate_booking(&vehicle_id, start, end, today);
    if print_form_errors(&errors) {
        bail!("Booking not submitted.");
    }

    let api = client(config, &session);
    let request = NewBookingRequest {
        vehicle_id,
        start_date: start,
        end_date: end,
        drop_location,
        needs_driver,
    };
    let booking = api::bookings::create(&api, &request).await?;
    println!("Booked.");
    print_booking_with_actions(&booking, config.display_timezone.as_deref());
    Ok(())
}

pub async fn bookings(config: &AppConfig, csv: Option<PathBuf>) -> anyhow::Result<()> {
    let session = require_role(config, Role::Customer)?;
    let api = client(config, &session);
    let bookings = api::bookings::mine(&api).await?;
    if bookings.is_empty() {
        println!("No bookings yet.");
        return Ok(());
    }
    for booking in &bookings {
        print_booking_with_actions(booking, config.display_timezone.as_deref());
        println!();
    }
    if let Some(path) = csv {
        export::write_bookings_csv(&path, &bookings)?;
        println!("Wrote {} bookings to {}.", bookings.len(), path.display());
    }
    Ok(())
}

pub async fn cancel(config: &AppConfig, booking_id: String) -> anyhow::Result<()> {
    let session = require_role(config, Role::Customer)?;
    let api = client(config, &session);
    let booking = api::bookings::get(&api, &booking_id).await?;
    if !gate::permitted_actions(&booking).contains(&Action::CancelBooking) {
        println!(
            "Booking {} is {}; only pending bookings can be cancelled.",
            booking.id, booking.status
        );
        return Ok(());
    }
    let updated = api::bookings::cancel(&api, &booking_id).await?;
    println!("Booking {} is now {}.", updated.id, updated.status);
    Ok(())
}

pub async fn cancel_driver(config: &AppConfig, booking_id: String) -> anyhow::Result<()> {
    let session = require_role(config, Role::Customer)?;
    let api = client(config, &session);
    let booking = api::bookings::get(&api, &booking_id).await?;
    if !gate::permitted_actions(&booking).contains(&Action::CancelDriverRequest) {
        println!("Booking {} has no cancellable driver request.", booking.id);
        return Ok(());
    }
    let updated = api::bookings::cancel_driver_request(&api, &booking_id).await?;
    println!(
        "Driver request cancelled; booking {} is {}.",
        updated.id, updated.status
    );
    Ok(())
}

pub async fn pay(
    config: &AppConfig,
    booking_id: String,
    amount: String,
    method: String,
) -> anyhow::Result<()> {
    let session = require_role(config, Role::Customer)?;
    let api = client(config, &session);
    let booking = api::bookings::get(&api, &booking_id).await?;
    if !gate::permitted_actions(&booking).contains(&Action::MakePayment) {
        println!(
            "Booking {} is {}; payment is only open once the trip is completed.",
            booking.id, booking.status
        );
        return Ok(());
    }

    let amount = match validation::parse_amount(&amount) {
        Some(amount) => amount,
        None => bail!("'{amount}' is not an amount."),
    };
    let errors = validation::validate_payment(amount);
    if print_form_errors(&errors) {
        bail!("Payment not submitted.");
    }

    let request = PaymentRequest {
        booking_id: booking_id.clone(),
        amount,
        payment_method: method,
    };
    api::bookings::pay(&api, &request).await?;
    println!(
        "Paid {} for booking {}.",
        money::format_usd(amount),
        booking_id
    );
    Ok(())
}

pub async fn rate(
    config: &AppConfig,
    booking_id: String,
    vehicle_rating: u8,
    vehicle_comment: Option<String>,
    driver_rating: Option<u8>,
    driver_comment: Option<String>,
) -> anyhow::Result<()> {
    let session = require_role(config, Role::Customer)?;
    let api = client(config, &session);
    let booking = api::bookings::get(&api, &booking_id).await?;
    if !gate::permitted_actions(&booking).contains(&Action::Rate) {
        println!(
            "Booking {} is {}; rating opens once the trip is completed.",
            booking.id, booking.status
        );
        return Ok(());
    }

    let errors = validation::validate_rating(vehicle_rating, driver_rating);
    if print_form_errors(&errors) {
        bail!("Rating not submitted.");
    }

    let vehicle_request = VehicleRatingRequest {
        vehicle_rating,
        vehicle_comment,
    };
    match driver_rating {
        Some(driver_rating) => {
            let driver_request = DriverRatingRequest {
                driver_rating,
                driver_comment,
            };
            tokio::try_join!(
                api::vehicles::rate(&api, &booking_id, &vehicle_request),
                api::drivers::rate_driver(&api, &booking_id, &driver_request),
            )?;
        }
        None => {
            api::vehicles::rate(&api, &booking_id, &vehicle_request).await?;
        }
    }
    println!("Thanks for the rating.");
    Ok(())
}

pub async fn report(
    config: &AppConfig,
    booking_id: String,
    condition: String,
    images: Vec<PathBuf>,
) -> anyhow::Result<()> {
    let session = require_role(config, Role::Customer)?;
    let api = client(config, &session);
    let booking = api::bookings::get(&api, &booking_id).await?;

    // The booking's stage decides whether this is the before or the
    // after report; if neither is open, say why.
    let permitted = gate::permitted_actions(&booking);
    let report_type = if permitted.contains(&Action::ReportBefore) {
        ConditionReportType::Before
    } else if permitted.contains(&Action::ReportAfter) {
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
    let updated = api::bookings::submit_condition_report(&api, &booking_id, &upload).await?;
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

pub async fn support_new(config: &AppConfig, issue: String) -> anyhow::Result<()> {
    let session = require_role(config, Role::Customer)?;
    let errors = validation::validate_support_ticket(&issue);
    if print_form_errors(&errors) {
        bail!("Ticket not submitted.");
    }
    let api = client(config, &session);
    let ticket = api::support::create(&api, issue).await?;
    println!("Opened ticket {}.", ticket.id);
    Ok(())
}

pub async fn support_list(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_role(config, Role::Customer)?;
    let api = client(config, &session);
    let tickets = api::support::mine(&api).await?;
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

pub async fn profile_update(
    config: &AppConfig,
    name: Option<String>,
    mobile: Option<String>,
    license: Option<PathBuf>,
) -> anyhow::Result<()> {
    let session = require_session(config)?;
    if let Some(mobile) = &mobile {
        if !validation::is_valid_mobile(mobile) {
            bail!("Invalid mobile number.");
        }
    }
    let api = client(config, &session);
    let update = api::users::ProfileUpdate {
        name,
        mobile,
        license,
    };
    api::users::update_profile(&api, &update).await?;
    println!("Profile updated.");
    Ok(())
}

pub async fn license_status(config: &AppConfig) -> anyhow::Result<()> {
    let session = require_session(config)?;
    let api = client(config, &session);
    let response = api::users::license_status(&api).await?;
    match response.license_status {
        Some(status) => println!("License status: {status}"),
        None => println!("No license on file."),
    }
    Ok(())
}
