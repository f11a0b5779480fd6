use std::env;
use std::path::PathBuf;

use dotenv::dotenv;

/// Client configuration, read once at startup from the environment
/// (with `.env` support). Everything has a workable default so the CLI
/// runs against a local backend out of the box.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub display_timezone: Option<String>,
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    pub fn from_env() -> AppConfig {
        dotenv().ok();
        let api_base_url = env_or_default("API_BASE_URL", "http://localhost:5000/api")
            .trim_end_matches('/')
            .to_string();
        let session_file =
            PathBuf::from(env_or_default("SESSION_FILE", ".rentals_session.json"));
        let display_timezone = env::var("DISPLAY_TIMEZONE").ok().filter(|s| !s.is_empty());
        AppConfig {
            api_base_url,
            session_file,
            display_timezone,
        }
    }
}
