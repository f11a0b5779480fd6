//! Helpers for rendering backend UTC instants in the terminal and for
//! parsing dates typed on the command line.
//!
//! The display zone comes from configuration (`DISPLAY_TIMEZONE`):
//! * `"America/Chicago"` → that IANA zone (DST-aware)
//! * `"-5"`              → a fixed offset in hours
//! * unset or invalid    → UTC

use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;

const DATETIME_FMT: &str = "%Y-%m-%d %H:%M %Z";
const DATE_FMT: &str = "%Y-%m-%d";

/// Format an instant in the hinted zone, falling back to UTC when the
/// hint is absent or unparsable.
pub fn display_in_zone(instant: DateTime<Utc>, tz_hint: Option<&str>) -> String {
    match tz_hint {
        Some(name) if name.contains('/') => match name.parse::<Tz>() {
            Ok(tz) => instant.with_timezone(&tz).format(DATETIME_FMT).to_string(),
            Err(_) => instant.format(DATETIME_FMT).to_string(),
        },
        Some(hours) => match hours
            .parse::<i32>()
            .ok()
            .and_then(|h| FixedOffset::east_opt(h * 3600))
        {
            Some(offset) => instant.with_timezone(&offset).format(DATETIME_FMT).to_string(),
            None => instant.format(DATETIME_FMT).to_string(),
        },
        None => instant.format(DATETIME_FMT).to_string(),
    }
}

pub fn display_date(instant: DateTime<Utc>, tz_hint: Option<&str>) -> String {
    match tz_hint {
        Some(name) if name.contains('/') => match name.parse::<Tz>() {
            Ok(tz) => instant.with_timezone(&tz).format(DATE_FMT).to_string(),
            Err(_) => instant.format(DATE_FMT).to_string(),
        },
        _ => instant.format(DATE_FMT).to_string(),
    }
}

/// Parse a date argument; ISO first, US slashes as a fallback.
pub fn parse_cli_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .map_err(|_| anyhow!("'{}' is not a date; use YYYY-MM-DD", raw))
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 13, 22, 44, 0).unwrap()
    }

    #[test]
    fn utc_by_default() {
        assert_eq!(display_in_zone(instant(), None), "2025-07-13 22:44 UTC");
    }

    #[test]
    fn iana_zone() {
        assert_eq!(
            display_in_zone(instant(), Some("America/Chicago")),
            "2025-07-13 17:44 CDT"
        );
    }

    #[test]
    fn fixed_offset_hours() {
        assert_eq!(
            display_in_zone(instant(), Some("-5")),
            "2025-07-13 17:44 -05:00"
        );
    }

    #[test]
    fn bad_hint_falls_back_to_utc() {
        assert_eq!(
            display_in_zone(instant(), Some("Mars/Olympus")),
            "2025-07-13 22:44 UTC"
        );
    }

    #[test]
    fn date_crosses_midnight_in_zone() {
        let late = Utc.with_ymd_and_hms(2025, 7, 14, 3, 0, 0).unwrap();
        assert_eq!(display_date(late, Some("America/Chicago")), "2025-07-13");
        assert_eq!(display_date(late, None), "2025-07-14");
    }

    #[test]
    fn iso_date_parses() {
        assert_eq!(
            parse_cli_date("2025-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }

    #[test]
    fn slash_date_parses() {
        assert_eq!(
            parse_cli_date("06/01/2025").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }

    #[test]
    fn garbage_date_errors() {
        let err = parse_cli_date("next tuesday").unwrap_err();
        assert!(err.to_string().contains("not a date"));
    }
}
