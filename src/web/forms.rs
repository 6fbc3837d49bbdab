//! Helpers shared by the admin form handlers.

use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

/// Splits a comma separated field, trimming entries and dropping empties.
pub fn comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Trimmed value, or `None` when the field was left blank.
pub fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Parses a `datetime-local` input value as UTC. Seconds are optional.
pub fn parse_datetime_local(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

/// Value for a `datetime-local` input.
pub fn format_datetime_local(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

/// True when `raw` parses as an absolute URL with a host.
pub fn is_valid_url(raw: &str) -> bool {
    url::Url::parse(raw.trim())
        .map(|u| u.has_host())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn comma_list_trims_and_drops_empties() {
        assert_eq!(comma_list(" Rust, Axum ,,sqlx , "), vec!["Rust", "Axum", "sqlx"]);
        assert!(comma_list("  ,  ").is_empty());
        assert!(comma_list("").is_empty());
    }

    #[test]
    fn optional_blank_is_none() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" https://demo.example ").as_deref(), Some("https://demo.example"));
    }

    #[test]
    fn datetime_local_is_read_as_utc() {
        let dt = parse_datetime_local("2025-03-14T09:30").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 3, 14));
        assert_eq!((dt.hour(), dt.minute()), (9, 30));
        assert_eq!(format_datetime_local(&dt), "2025-03-14T09:30");
        assert!(parse_datetime_local("").is_none());
        assert!(parse_datetime_local("tomorrow").is_none());
    }

    #[test]
    fn url_validation() {
        assert!(is_valid_url("https://raw.githubusercontent.com/club/blog/main/post.md"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("/relative/path.md"));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(parse_id("abc").is_none());
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()), Some(id));
    }
}
