//! Display formatting for bill records.
//!
//! Dates render as `"31 Déc. 22"` (French abbreviated month, two-digit year)
//! and statuses as their French labels. Date failures are typed so the
//! listing layer can isolate corrupted records instead of failing the batch.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// French month abbreviations, indexed by zero-based month.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Janv.", "Févr.", "Mars", "Avr.", "Mai", "Juin", "Juil.", "Août", "Sept.", "Oct.", "Nov.",
    "Déc.",
];

/// Formatting errors
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unparseable date: {0}")]
    InvalidDate(String),
}

/// Format an ISO `YYYY-MM-DD` date for display, e.g. `2022-12-31` -> `31 Déc. 22`.
pub fn format_date(iso_date: &str) -> Result<String, FormatError> {
    let date = NaiveDate::parse_from_str(iso_date, "%Y-%m-%d")
        .map_err(|_| FormatError::InvalidDate(iso_date.to_string()))?;

    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    Ok(format!("{} {} {:02}", date.day(), month, date.year() % 100))
}

/// Map a raw bill status to its display label.
///
/// Only `pending` and `accepted` have labels; any other value (including
/// `refused`) passes through unchanged until the backend contract settles.
pub fn format_status(raw_status: &str) -> String {
    match raw_status {
        "pending" => "En attente".to_string(),
        "accepted" => "Accepté".to_string(),
        other => other.to_string(),
    }
}
