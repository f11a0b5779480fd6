use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rentals_cli::config::AppConfig;
use rentals_cli::helper_model::VehicleFilters;
use rentals_cli::view;

#[derive(Parser)]
#[command(
    name = "rentals-cli",
    version,
    about = "Terminal client for the Rentals marketplace"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register, sign in and out
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Browse vehicles, book and manage your trips
    #[command(subcommand)]
    Customer(CustomerCommand),
    /// Manage listed vehicles and booking approvals
    #[command(subcommand)]
    Owner(OwnerCommand),
    /// Assigned trips, reports and earnings
    #[command(subcommand)]
    Driver(DriverCommand),
    /// Marketplace administration
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Subcommand)]
enum AuthCommand {
    /// Create an account (license file required for drivers)
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// customer, owner or driver
        #[arg(long)]
        role: String,
        #[arg(long)]
        mobile: String,
        #[arg(long)]
        license: Option<PathBuf>,
    },
    /// Sign in and save the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the saved session
    Logout,
    /// Show who is signed in
    Whoami,
}

#[derive(Subcommand)]
enum SupportCommand {
    /// Open a ticket
    New {
        #[arg(long)]
        issue: String,
    },
    /// List your tickets
    List,
}

#[derive(Subcommand)]
enum CustomerCommand {
    /// Browse the vehicle catalogue
    Vehicles {
        /// bike or car
        #[arg(long = "type")]
        vehicle_type: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        max_price: Option<f64>,
    },
    /// Show one vehicle
    Vehicle { vehicle_id: String },
    /// Create a booking
    Book {
        #[arg(long)]
        vehicle: String,
        /// YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// YYYY-MM-DD
        #[arg(long)]
        end: String,
        #[arg(long)]
        drop_location: Option<String>,
        #[arg(long)]
        needs_driver: bool,
    },
    /// List your bookings with their available actions
    Bookings {
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Cancel a pending booking
    Cancel { booking_id: String },
    /// Withdraw an unfulfilled driver request
    CancelDriver { booking_id: String },
    /// Pay for a completed booking
    Pay {
        booking_id: String,
        #[arg(long)]
        amount: String,
        /// credit_card or debit_card
        #[arg(long, default_value = "credit_card")]
        method: String,
    },
    /// Rate the vehicle (and optionally the driver)
    Rate {
        booking_id: String,
        #[arg(long)]
        vehicle_rating: u8,
        #[arg(long)]
        vehicle_comment: Option<String>,
        #[arg(long)]
        driver_rating: Option<u8>,
        #[arg(long)]
        driver_comment: Option<String>,
    },
    /// Submit the condition report the booking's stage calls for
    Report {
        booking_id: String,
        #[arg(long)]
        condition: String,
        /// Repeatable; up to 10 photos
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// Support tickets
    #[command(subcommand)]
    Support(SupportCommand),
    /// Update name, mobile or license
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
        #[arg(long)]
        license: Option<PathBuf>,
    },
    /// Check license verification state
    LicenseStatus,
}

#[derive(clap::Args)]
struct VehicleFormArgs {
    #[arg(long)]
    model: String,
    /// bike or car
    #[arg(long = "type")]
    vehicle_type: String,
    #[arg(long)]
    price: f64,
    /// petrol, diesel or electric
    #[arg(long)]
    fuel: String,
    #[arg(long)]
    category: String,
    #[arg(long)]
    seats: u32,
    #[arg(long)]
    location: String,
    #[arg(long)]
    registration: String,
    /// Repeatable; at least one photo
    #[arg(long = "image")]
    images: Vec<PathBuf>,
    #[arg(long)]
    insurance: Option<PathBuf>,
}

#[derive(Subcommand)]
enum OwnerVehicleCommand {
    /// List a new vehicle
    Add {
        #[command(flatten)]
        form: VehicleFormArgs,
    },
    /// Re-submit a vehicle's details
    Edit {
        vehicle_id: String,
        #[command(flatten)]
        form: VehicleFormArgs,
    },
    /// Remove a listing
    Delete { vehicle_id: String },
}

#[derive(Subcommand)]
enum OwnerCommand {
    /// Your listed vehicles
    Vehicles,
    #[command(subcommand)]
    Vehicle(OwnerVehicleCommand),
    /// Bookings awaiting your decision
    Approvals,
    /// Approve a pending booking
    Approve { booking_id: String },
    /// Reject a pending booking
    Reject { booking_id: String },
    /// Earnings summary
    Earnings,
    /// Reviews on your vehicles
    Reviews,
}

#[derive(Subcommand)]
enum LocationCommand {
    /// Current position on file
    Show { booking_id: String },
    /// Report a new position
    Update {
        booking_id: String,
        #[arg(long)]
        latitude: f64,
        #[arg(long)]
        longitude: f64,
    },
}

#[derive(Subcommand)]
enum DriverProfileCommand {
    Show,
    Update {
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        available: bool,
    },
}

#[derive(Subcommand)]
enum DriverCommand {
    /// Your assigned bookings with their available actions
    Bookings,
    /// Accept an assignment
    Confirm { booking_id: String },
    /// Mark the current leg done
    Complete { booking_id: String },
    /// Submit the condition report the booking's stage calls for
    Report {
        booking_id: String,
        #[arg(long)]
        condition: String,
        /// Repeatable; up to 10 photos
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    #[command(subcommand)]
    Location(LocationCommand),
    /// Earnings summary
    Earnings,
    /// Reviews left for you
    Reviews,
    #[command(subcommand)]
    Profile(DriverProfileCommand),
}

#[derive(Subcommand)]
enum AdminSupportCommand {
    /// Every ticket in the system
    List,
    /// Close a ticket with a resolution note
    Resolve {
        ticket_id: String,
        #[arg(long)]
        resolution: String,
    },
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Every booking in the system
    Bookings {
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Bookings needing a driver, with candidates
    Assignable,
    /// Assign a driver to a booking
    Assign {
        booking_id: String,
        #[arg(long)]
        driver: String,
    },
    /// Every user account
    Users,
    /// Edit a user record
    UserEdit {
        user_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Block an account
    Suspend { user_id: String },
    /// Unblock an account
    Reinstate { user_id: String },
    /// Users awaiting license review
    Licenses,
    /// Accept an uploaded license
    LicenseApprove { user_id: String },
    /// Turn down an uploaded license
    LicenseReject { user_id: String },
    /// Accounts flagged by fraud scoring
    Fraud,
    /// Vehicles awaiting approval
    Vehicles,
    /// Put a vehicle live
    VehicleApprove { vehicle_id: String },
    /// Keep a vehicle off the catalogue
    VehicleReject { vehicle_id: String },
    /// Browse condition reports, optionally for one booking
    ConditionReports {
        #[arg(long)]
        booking: Option<String>,
    },
    #[command(subcommand)]
    Support(AdminSupportCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Command::Auth(command) => match command {
            AuthCommand::Register {
                name,
                email,
                password,
                role,
                mobile,
                license,
            } => view::auth::register(&config, name, email, password, role, mobile, license).await,
            AuthCommand::Login { email, password } => {
                view::auth::login(&config, email, password).await
            }
            AuthCommand::Logout => view::auth::logout(&config).await,
            AuthCommand::Whoami => view::auth::whoami(&config).await,
        },
        Command::Customer(command) => match command {
            CustomerCommand::Vehicles {
                vehicle_type,
                category,
                location,
                max_price,
            } => {
                let filters = VehicleFilters {
                    vehicle_type,
                    category,
                    location,
                    max_price,
                };
                view::customer::vehicles(&config, filters).await
            }
            CustomerCommand::Vehicle { vehicle_id } => {
                view::customer::vehicle(&config, vehicle_id).await
            }
            CustomerCommand::Book {
                vehicle,
                start,
                end,
                drop_location,
                needs_driver,
            } => {
                view::customer::book(&config, vehicle, start, end, drop_location, needs_driver)
                    .await
            }
            CustomerCommand::Bookings { csv } => view::customer::bookings(&config, csv).await,
            CustomerCommand::Cancel { booking_id } => {
                view::customer::cancel(&config, booking_id).await
            }
            CustomerCommand::CancelDriver { booking_id } => {
                view::customer::cancel_driver(&config, booking_id).await
            }
            CustomerCommand::Pay {
                booking_id,
                amount,
                method,
            } => view::customer::pay(&config, booking_id, amount, method).await,
            CustomerCommand::Rate {
                booking_id,
                vehicle_rating,
                vehicle_comment,
                driver_rating,
                driver_comment,
            } => {
                view::customer::rate(
                    &config,
                    booking_id,
                    vehicle_rating,
                    vehicle_comment,
                    driver_rating,
                    driver_comment,
                )
                .await
            }
            CustomerCommand::Report {
                booking_id,
                condition,
                images,
            } => view::customer::report(&config, booking_id, condition, images).await,
            CustomerCommand::Support(SupportCommand::New { issue }) => {
                view::customer::support_new(&config, issue).await
            }
            CustomerCommand::Support(SupportCommand::List) => {
                view::customer::support_list(&config).await
            }
            CustomerCommand::Profile {
                name,
                mobile,
                license,
            } => view::customer::profile_update(&config, name, mobile, license).await,
            CustomerCommand::LicenseStatus => view::customer::license_status(&config).await,
        },
        Command::Owner(command) => match command {
            OwnerCommand::Vehicles => view::owner::vehicles(&config).await,
            OwnerCommand::Vehicle(OwnerVehicleCommand::Add { form }) => {
                view::owner::vehicle_save(
                    &config,
                    None,
                    form.model,
                    form.vehicle_type,
                    form.price,
                    form.fuel,
                    form.category,
                    form.seats,
                    form.location,
                    form.registration,
                    form.images,
                    form.insurance,
                )
                .await
            }
            OwnerCommand::Vehicle(OwnerVehicleCommand::Edit { vehicle_id, form }) => {
                view::owner::vehicle_save(
                    &config,
                    Some(vehicle_id),
                    form.model,
                    form.vehicle_type,
                    form.price,
                    form.fuel,
                    form.category,
                    form.seats,
                    form.location,
                    form.registration,
                    form.images,
                    form.insurance,
                )
                .await
            }
            OwnerCommand::Vehicle(OwnerVehicleCommand::Delete { vehicle_id }) => {
                view::owner::vehicle_delete(&config, vehicle_id).await
            }
            OwnerCommand::Approvals => view::owner::approvals(&config).await,
            OwnerCommand::Approve { booking_id } => {
                view::owner::decide(&config, booking_id, true).await
            }
            OwnerCommand::Reject { booking_id } => {
                view::owner::decide(&config, booking_id, false).await
            }
            OwnerCommand::Earnings => view::owner::earnings(&config).await,
            OwnerCommand::Reviews => view::owner::reviews(&config).await,
        },
        Command::Driver(command) => match command {
            DriverCommand::Bookings => view::driver::bookings(&config).await,
            DriverCommand::Confirm { booking_id } => {
                view::driver::confirm(&config, booking_id).await
            }
            DriverCommand::Complete { booking_id } => {
                view::driver::complete(&config, booking_id).await
            }
            DriverCommand::Report {
                booking_id,
                condition,
                images,
            } => view::driver::report(&config, booking_id, condition, images).await,
            DriverCommand::Location(LocationCommand::Show { booking_id }) => {
                view::driver::location_show(&config, booking_id).await
            }
            DriverCommand::Location(LocationCommand::Update {
                booking_id,
                latitude,
                longitude,
            }) => view::driver::location_update(&config, booking_id, latitude, longitude).await,
            DriverCommand::Earnings => view::driver::earnings(&config).await,
            DriverCommand::Reviews => view::driver::reviews(&config).await,
            DriverCommand::Profile(DriverProfileCommand::Show) => {
                view::driver::profile_show(&config).await
            }
            DriverCommand::Profile(DriverProfileCommand::Update {
                location,
                available,
            }) => view::driver::profile_update(&config, location, available).await,
        },
        Command::Admin(command) => match command {
            AdminCommand::Bookings { csv } => view::admin::bookings(&config, csv).await,
            AdminCommand::Assignable => view::admin::assignable(&config).await,
            AdminCommand::Assign { booking_id, driver } => {
                view::admin::assign(&config, booking_id, driver).await
            }
            AdminCommand::Users => view::admin::users(&config).await,
            AdminCommand::UserEdit {
                user_id,
                name,
                email,
                mobile,
                role,
            } => view::admin::user_edit(&config, user_id, name, email, mobile, role).await,
            AdminCommand::Suspend { user_id } => {
                view::admin::user_suspend(&config, user_id, true).await
            }
            AdminCommand::Reinstate { user_id } => {
                view::admin::user_suspend(&config, user_id, false).await
            }
            AdminCommand::Licenses => view::admin::licenses(&config).await,
            AdminCommand::LicenseApprove { user_id } => {
                view::admin::license_decide(&config, user_id, true).await
            }
            AdminCommand::LicenseReject { user_id } => {
                view::admin::license_decide(&config, user_id, false).await
            }
            AdminCommand::Fraud => view::admin::fraud(&config).await,
            AdminCommand::Vehicles => view::admin::unapproved_vehicles(&config).await,
            AdminCommand::VehicleApprove { vehicle_id } => {
                view::admin::vehicle_decide(&config, vehicle_id, true).await
            }
            AdminCommand::VehicleReject { vehicle_id } => {
                view::admin::vehicle_decide(&config, vehicle_id, false).await
            }
            AdminCommand::ConditionReports { booking } => {
                view::admin::condition_reports(&config, booking).await
            }
            AdminCommand::Support(AdminSupportCommand::List) => {
                view::admin::support_list(&config).await
            }
            AdminCommand::Support(AdminSupportCommand::Resolve {
                ticket_id,
                resolution,
            }) => view::admin::support_resolve(&config, ticket_id, resolution).await,
        },
    }
}
