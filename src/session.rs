//! The bearer token and role returned by login, persisted between
//! invocations. The token is handed to the transport layer explicitly at
//! construction; nothing reads it from ambient globals.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::Role;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub user_id: String,
}

impl Session {
    /// Read the saved session, if any. A corrupt file is treated as
    /// "not signed in" rather than an error, matching how the original
    /// client handled a missing browser session.
    pub fn load(path: &Path) -> Option<Session> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return None,
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!("ignoring unreadable session file {}: {err}", path.display());
                None
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    pub fn clear(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rentals-cli-{}-{name}", std::process::id()))
    }

    #[test]
    fn round_trip() {
        let path = temp_path("round-trip.json");
        let session = Session {
            token: "deadbeef".into(),
            role: Role::Customer,
            user_id: "u1".into(),
        };
        session.save(&path).unwrap();
        assert_eq!(Session::load(&path), Some(session));
        Session::clear(&path).unwrap();
        assert_eq!(Session::load(&path), None);
    }

    #[test]
    fn missing_file_is_signed_out() {
        assert_eq!(Session::load(Path::new("/nonexistent/session.json")), None);
    }

    #[test]
    fn corrupt_file_is_signed_out() {
        let path = temp_path("corrupt.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(Session::load(&path), None);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn clear_tolerates_missing_file() {
        let path = temp_path("never-created.json");
        Session::clear(&path).unwrap();
    }
}
