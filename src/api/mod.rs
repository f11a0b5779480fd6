//! Thin authenticated wrappers over the backend's REST endpoints, one
//! module per resource. All state transitions happen server-side; these
//! calls only observe them.

pub mod admin;
pub mod bookings;
pub mod drivers;
pub mod owner;
pub mod support;
pub mod users;
pub mod vehicles;

use std::path::Path;

use once_cell::sync::Lazy;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::Part;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::helper_model::ErrorBody;
use crate::session::Session;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. `message` is the
    /// `msg` field of its error body when present, otherwise the HTTP
    /// reason phrase.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not read upload {path}: {source}")]
    Upload {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("not signed in; run `rentals-cli auth login` first")]
    NotAuthenticated,
}

// One connection pool for the process; clients are cheap handles on it.
static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client. The bearer token comes from the session handed in
    /// here, never from ambient state; pass `None` for the endpoints
    /// that work without one (login, register, vehicle catalogue).
    pub fn new(config: &AppConfig, session: Option<&Session>) -> ApiClient {
        ApiClient {
            base_url: config.api_base_url.clone(),
            http: HTTP.clone(),
            token: session.map(|s| s.token.clone()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        req
    }

    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = req.send().await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let url = resp.url().clone();
    let bytes = resp.bytes().await?;
    debug!("{} -> {} ({} bytes)", url, status, bytes.len());

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.msg)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request rejected")
                    .to_string()
            });
        warn!("{} failed: {} {}", url, status, message);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(serde_json::from_slice(&bytes)?)
}

/// Read a file into a multipart part, keeping its on-disk file name.
pub(crate) fn file_part(path: &Path) -> Result<Part, ApiError> {
    let data = std::fs::read(path).map_err(|source| ApiError::Upload {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(Part::bytes(data).file_name(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_error_carries_path() {
        let err = file_part(Path::new("/nonexistent/photo.jpg")).unwrap_err();
        match err {
            ApiError::Upload { path, .. } => assert_eq!(path, "/nonexistent/photo.jpg"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
