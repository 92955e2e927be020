//! Loose date values as passed on command lines and query strings.

use chrono::{DateTime, NaiveDate};

use crate::error::{CalendarError, CalendarResult};
use crate::instant::Instant;

/// ## Summary
/// Parses either a UNIX timestamp in seconds or a `YYYY-MM-DD` date.
///
/// Timestamps yield an instant at `+0000`; dates yield a naive midnight.
///
/// ## Errors
/// Returns `CalendarError::Parse` if the text is neither form or the
/// timestamp is out of range.
pub fn parse_date_value(text: &str) -> CalendarResult<Instant> {
    let text = text.trim();

    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        let seconds: i64 = text
            .parse()
            .map_err(|e| CalendarError::Parse(format!("invalid timestamp {text:?}: {e}")))?;
        let utc = DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| CalendarError::Parse(format!("timestamp out of range: {text}")))?;
        return Ok(Instant::from(utc));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Instant::from)
        .map_err(|e| CalendarError::Parse(format!("invalid date {text:?}: {e}")))
}
