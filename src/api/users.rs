use std::path::PathBuf;

use reqwest::multipart::Form;
use reqwest::Method;

use crate::api::{file_part, ApiClient, ApiError};
use crate::helper_model::{AuthResponse, LicenseStatusResponse, LoginRequest};
use crate::model::Role;

/// Fields collected by the registration form. The license file is only
/// sent (and only required by validation) for driver accounts.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub mobile: String,
    pub license: Option<PathBuf>,
}

pub async fn register(api: &ApiClient, form: &RegisterForm) -> Result<serde_json::Value, ApiError> {
    let mut multipart = Form::new()
        .text("name", form.name.clone())
        .text("email", form.email.clone())
        .text("password", form.password.clone())
        .text("role", form.role.as_str().to_string())
        .text("mobile", form.mobile.clone());
    if let Some(license) = &form.license {
        multipart = multipart.part("license", file_part(license)?);
    }
    let req = api
        .request(Method::POST, "/users/register")
        .multipart(multipart);
    api.send(req).await
}

pub async fn login(
    api: &ApiClient,
    email: String,
    password: String,
) -> Result<AuthResponse, ApiError> {
    let req = api
        .request(Method::POST, "/users/login")
        .json(&LoginRequest { email, password });
    api.send(req).await
}

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub license: Option<PathBuf>,
}

pub async fn update_profile(
    api: &ApiClient,
    update: &ProfileUpdate,
) -> Result<serde_json::Value, ApiError> {
    let mut multipart = Form::new();
    if let Some(name) = &update.name {
        multipart = multipart.text("name", name.clone());
    }
    if let Some(mobile) = &update.mobile {
        multipart = multipart.text("mobile", mobile.clone());
    }
    if let Some(license) = &update.license {
        multipart = multipart.part("license", file_part(license)?);
    }
    let req = api
        .request(Method::PUT, "/users/profile")
        .multipart(multipart);
    api.send(req).await
}

pub async fn license_status(api: &ApiClient) -> Result<LicenseStatusResponse, ApiError> {
    let req = api.request(Method::GET, "/users/license-status");
    api.send(req).await
}
