//! Boundary input validation
//!
//! Dates arrive from callers as raw strings; the core re-validates them
//! regardless of caller discipline. Inputs must match the strict
//! `YYYY-MM-DD` / `YYYY-MM-DD HH:MM` patterns before being parsed, so a
//! lenient calendar parse never accepts a shape the pattern rejects.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::error::DomainError;

fn date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"))
}

fn date_time_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").expect("valid regex"))
}

/// Parse a strict `YYYY-MM-DD` date
pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, DomainError> {
    if !date_pattern().is_match(input) {
        return Err(DomainError::invalid("Invalid date format. Use YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| DomainError::invalid("Invalid date format. Use YYYY-MM-DD"))
}

/// Parse a strict `YYYY-MM-DD HH:MM` date-time
pub(crate) fn parse_date_time(input: &str) -> Result<NaiveDateTime, DomainError> {
    if !date_time_pattern().is_match(input) {
        return Err(DomainError::invalid(
            "Invalid date-time format. Use YYYY-MM-DD HH:MM",
        ));
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .map_err(|_| DomainError::invalid("Invalid date-time format. Use YYYY-MM-DD HH:MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strict_dates_only() {
        assert!(parse_date("2025-01-10").is_ok());
        assert!(parse_date("2025-1-10").is_err());
        assert!(parse_date("10-01-2025").is_err());
        assert!(parse_date("2025-01-10 ").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn accepts_strict_date_times_only() {
        assert!(parse_date_time("2024-12-11 14:30").is_ok());
        assert!(parse_date_time("2024-12-11T14:30").is_err());
        assert!(parse_date_time("2024-12-11 14:30:00").is_err());
        assert!(parse_date_time("2024-12-11 25:00").is_err());
    }
}
