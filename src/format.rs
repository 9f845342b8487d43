//! Display formatting for dates.
//!
//! Output follows the en-US short-month style used across the app's pages:
//! `Jan 5, 2024`, or `Jan 5, 2024, 03:07 PM` when time is included.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%b %-d, %Y";
const DATE_TIME_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unrecognized date '{0}'")]
    InvalidDate(String),
}

/// Format `date`, optionally with hour and minute.
pub fn format_date(date: &NaiveDateTime, include_time: bool) -> String {
    let pattern = if include_time { DATE_TIME_FORMAT } else { DATE_FORMAT };
    date.format(pattern).to_string()
}

/// Parse an RFC 3339 timestamp, a `YYYY-MM-DDTHH:MM[:SS]` local timestamp,
/// or a bare `YYYY-MM-DD` date (midnight).
///
/// Timestamps with an offset keep the wall-clock time of that offset.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDate`] when no layout matches.
pub fn parse_date(raw: &str) -> Result<NaiveDateTime, FormatError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }
    for layout in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, layout) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| FormatError::InvalidDate(raw.to_owned()))
}

/// [`parse_date`] followed by [`format_date`].
///
/// # Errors
///
/// Returns [`FormatError::InvalidDate`] for unparseable input.
pub fn format_date_str(raw: &str, include_time: bool) -> Result<String, FormatError> {
    parse_date(raw).map(|d| format_date(&d, include_time))
}
