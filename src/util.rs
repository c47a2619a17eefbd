use chrono::{DateTime, NaiveDateTime, Utc};

use crate::errors::{messages, AppError};

/// Wire format for match times, matching the public API contract.
pub const MATCH_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Parse a `dd/MM/yyyy HH:mm` string into a UTC timestamp.
pub fn parse_match_time(raw: &str) -> Result<DateTime<Utc>, AppError> {
    NaiveDateTime::parse_from_str(raw.trim(), MATCH_TIME_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|_| AppError::BusinessRule(messages::INVALID_DATE_FORMAT.into()))
}

pub fn format_match_time(t: DateTime<Utc>) -> String {
    t.format(MATCH_TIME_FORMAT).to_string()
}
