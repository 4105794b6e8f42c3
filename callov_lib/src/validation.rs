use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use callov_api::MAX_LIMIT;

use crate::error::CallovError;

/// Checks a caller-supplied page size against the range the API accepts.
pub fn validate_limit(limit: i64) -> Result<i64, CallovError> {
    if (1..=MAX_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(CallovError::validation(format!(
            "limit must be between 1 and {}, got {}",
            MAX_LIMIT, limit
        )))
    }
}

/// Reduces a date or date-time string to its calendar date.
///
/// Accepts `YYYY-MM-DD`, a naive `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]`, or RFC 3339.
/// Offsets are converted to UTC before the date is taken.
pub fn to_calendar_date(input: &str) -> Result<NaiveDate, CallovError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }
    Err(CallovError::validation(format!(
        "invalid date '{}', expected YYYY-MM-DD",
        input
    )))
}
