use std::path::PathBuf;

use anyhow::bail;

use crate::api::users::RegisterForm;
use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::methods::validation;
use crate::model::Role;
use crate::session::Session;
use crate::view::print_form_errors;

pub fn parse_role(raw: &str) -> Role {
    match raw {
        "customer" => Role::Customer,
        "owner" => Role::Owner,
        "driver" => Role::Driver,
        "admin" => Role::Admin,
        _ => Role::Unknown,
    }
}

pub async fn register(
    config: &AppConfig,
    name: String,
    email: String,
    password: String,
    role: String,
    mobile: String,
    license: Option<PathBuf>,
) -> anyhow::Result<()> {
    let role = parse_role(&role);
    let errors = validation::validate_register(
        &name,
        &email,
        &password,
        role,
        &mobile,
        license.as_deref(),
    );
    if print_form_errors(&errors) {
        bail!("Registration not submitted.");
    }

    let api = ApiClient::new(config, None);
    let form = RegisterForm {
        name,
        email: email.clone(),
        password,
        role,
        mobile,
        license,
    };
    api::users::register(&api, &form).await?;
    println!("Registered {email}. Sign in with `rentals-cli auth login`.");
    Ok(())
}

pub async fn login(config: &AppConfig, email: String, password: String) -> anyhow::Result<()> {
    let errors = validation::validate_login(&email, &password);
    if print_form_errors(&errors) {
        bail!("Login not submitted.");
    }

    let api = ApiClient::new(config, None);
    let auth = api::users::login(&api, email, password).await?;
    let session = Session {
        token: auth.token,
        role: auth.role,
        user_id: auth.user_id,
    };
    session.save(&config.session_file)?;
    println!("Signed in as {} ({}).", session.user_id, session.role);
    Ok(())
}

pub async fn logout(config: &AppConfig) -> anyhow::Result<()> {
    Session::clear(&config.session_file)?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(config: &AppConfig) -> anyhow::Result<()> {
    match Session::load(&config.session_file) {
        Some(session) => println!("{} ({})", session.user_id, session.role),
        None => println!("Not signed in."),
    }
    Ok(())
}
