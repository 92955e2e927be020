//! Mail-header style timestamps such as `Wed, 9 Oct 2013 00:39:59 +0200`.

use chrono::{DateTime, Timelike};

use crate::error::{CalendarError, CalendarResult};
use crate::instant::Instant;

/// ## Summary
/// Parses a `<DayName>, <D> <MonthName> <YYYY> <HH>:<MM>:<SS> <±HHMM>`
/// timestamp into an instant in the fixed zone given by its offset.
///
/// Follows RFC 2822 date syntax, so the day name must agree with the date.
///
/// ## Errors
/// Returns `CalendarError::Parse` if the text does not match the grammar or
/// any field is out of range.
pub fn parse_offset_timestamp(text: &str) -> CalendarResult<Instant> {
    let parsed = DateTime::parse_from_rfc2822(text.trim())
        .map_err(|e| CalendarError::Parse(format!("invalid timestamp {text:?}: {e}")))?;

    // chrono reads second 60 as a leap second; wall clocks here stop at 59.
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(CalendarError::Parse(format!(
            "second out of range in timestamp {text:?}"
        )));
    }

    tracing::trace!(text, parsed = %parsed, "Parsed offset timestamp");
    Ok(Instant::from(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timezone::Zone;
    use chrono::{FixedOffset, NaiveDate};

    #[test]
    fn test_parse_header_timestamp() {
        let instant = parse_offset_timestamp("Wed, 9 Oct 2013 00:39:59 +0200").unwrap();
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(
            instant.local(),
            NaiveDate::from_ymd_opt(2013, 10, 9)
                .unwrap()
                .and_hms_opt(0, 39, 59)
                .unwrap()
        );
        assert_eq!(instant.offset(), Some(offset));
        assert_eq!(instant.zone(), Some(&Zone::Fixed(offset)));
    }

    #[test]
    fn test_parse_negative_offset_two_digit_day() {
        let instant = parse_offset_timestamp("  Mon, 30 Sep 2013 18:05:00 -0700 ").unwrap();
        assert_eq!(instant.offset(), FixedOffset::west_opt(7 * 3600));
        assert_eq!(instant.to_string(), "2013-09-30 18:05:00 -0700");
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for text in [
            "",
            "2013-10-09 00:39:59",
            "Wed, 9 Foo 2013 00:39:59 +0200",
            "Wed, 32 Oct 2013 00:39:59 +0200",
            "Wed, 9 Oct 2013 24:39:59 +0200",
            "Wed, 9 Oct 2013 00:60:59 +0200",
            "Wed, 9 Oct 2013 00:39:60 +0200",
            "Thu, 9 Oct 2013 00:39:59 +0200",
        ] {
            assert!(
                matches!(parse_offset_timestamp(text), Err(CalendarError::Parse(_))),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_rejects_leap_second() {
        let err = parse_offset_timestamp("Sun, 30 Jun 2013 23:59:60 +0000").unwrap_err();
        assert!(matches!(err, CalendarError::Parse(_)));
    }
}
