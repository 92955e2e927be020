use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};

use super::database::ZoneDatabase;
use crate::error::{CalendarError, CalendarResult};

/// A zone an instant can be expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Literal offset, identical at every instant.
    Fixed(FixedOffset),
    /// Identifier resolved through a [`ZoneDatabase`], whose offset may vary
    /// with DST.
    Named(String),
}

impl Zone {
    /// ## Summary
    /// Returns the offset of this zone at `at`.
    ///
    /// Fixed zones answer without consulting `db`.
    ///
    /// ## Errors
    /// Returns `CalendarError::UnknownZone` if `db` cannot resolve a named zone.
    pub fn offset_at<D>(&self, at: &DateTime<Utc>, db: &D) -> CalendarResult<FixedOffset>
    where
        D: ZoneDatabase + ?Sized,
    {
        match self {
            Self::Fixed(offset) => Ok(*offset),
            Self::Named(name) => db.resolve_offset(name, at),
        }
    }
}

impl FromStr for Zone {
    type Err = CalendarError;

    /// `+HHMM`, `-HHMM`, `+HH:MM` and `-HH:MM` parse as fixed offsets; any
    /// other non-empty text is taken as a zone name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CalendarError::Parse("empty zone identifier".to_string()));
        }

        if s.starts_with(['+', '-']) {
            return parse_fixed_offset(s)
                .map(Self::Fixed)
                .ok_or_else(|| CalendarError::Parse(format!("invalid UTC offset: {s}")));
        }

        Ok(Self::Named(s.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(offset) => f.write_str(&format_offset(*offset)),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Formats an offset as `+HHMM`/`-HHMM`, dropping any seconds.
#[must_use]
pub fn format_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds >= 0 { '+' } else { '-' };
    let hours = seconds.abs() / 3600;
    let minutes = (seconds.abs() % 3600) / 60;
    format!("{sign}{hours:02}{minutes:02}")
}

fn parse_fixed_offset(s: &str) -> Option<FixedOffset> {
    let sign = if s.starts_with('-') { -1 } else { 1 };
    let digits = s.get(1..)?;
    let (hours, minutes) = match digits.len() {
        4 => (digits.get(..2)?, digits.get(2..)?),
        5 if digits.as_bytes().get(2) == Some(&b':') => (digits.get(..2)?, digits.get(3..)?),
        _ => return None,
    };

    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_offsets() {
        assert_eq!(
            "+0200".parse::<Zone>().unwrap(),
            Zone::Fixed(FixedOffset::east_opt(7200).unwrap())
        );
        assert_eq!(
            "-05:30".parse::<Zone>().unwrap(),
            Zone::Fixed(FixedOffset::west_opt(5 * 3600 + 1800).unwrap())
        );
    }

    #[test]
    fn test_parse_named_zone() {
        assert_eq!(
            "US/Pacific".parse::<Zone>().unwrap(),
            Zone::Named("US/Pacific".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_bad_offsets() {
        for text in ["", "  ", "+2500", "+0260", "+02", "-02:3x", "+02300"] {
            assert!(
                matches!(text.parse::<Zone>(), Err(CalendarError::Parse(_))),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["+0200", "-0930", "+0000", "Europe/Ljubljana"] {
            let zone: Zone = text.parse().unwrap();
            assert_eq!(zone.to_string(), text);
        }
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(FixedOffset::east_opt(0).unwrap()), "+0000");
        assert_eq!(format_offset(FixedOffset::west_opt(8 * 3600).unwrap()), "-0800");
        assert_eq!(format_offset(FixedOffset::east_opt(5 * 3600 + 1800).unwrap()), "+0530");
    }
}
