//! Date and instant value types.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc};

use crate::timezone::{Zone, format_offset};

/// A calendar date without time of day.
pub type CalendarDate = NaiveDate;

/// What a wall-clock reading is relative to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Context {
    /// No offset attached; the meaning is up to the caller.
    Naive,
    /// Reading in `zone`, where `offset` was in effect at that reading.
    Zoned { zone: Zone, offset: FixedOffset },
}

/// A wall-clock date-time at microsecond resolution with its zone context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instant {
    local: NaiveDateTime,
    context: Context,
}

impl Instant {
    /// Creates an instant with no offset attached.
    #[must_use]
    pub const fn naive(local: NaiveDateTime) -> Self {
        Self {
            local,
            context: Context::Naive,
        }
    }

    /// Creates an instant in a fixed-offset zone.
    #[must_use]
    pub const fn fixed(local: NaiveDateTime, offset: FixedOffset) -> Self {
        Self {
            local,
            context: Context::Zoned {
                zone: Zone::Fixed(offset),
                offset,
            },
        }
    }

    /// Creates an instant read in `zone`, with `offset` being the offset the
    /// zone had at `local`.
    #[must_use]
    pub const fn zoned(local: NaiveDateTime, zone: Zone, offset: FixedOffset) -> Self {
        Self {
            local,
            context: Context::Zoned { zone, offset },
        }
    }

    /// Wall-clock date and time.
    #[must_use]
    pub const fn local(&self) -> NaiveDateTime {
        self.local
    }

    #[must_use]
    pub fn date(&self) -> CalendarDate {
        self.local.date()
    }

    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.local.time()
    }

    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Offset of the wall-clock reading, `None` for naive instants.
    #[must_use]
    pub const fn offset(&self) -> Option<FixedOffset> {
        match &self.context {
            Context::Naive => None,
            Context::Zoned { offset, .. } => Some(*offset),
        }
    }

    #[must_use]
    pub const fn zone(&self) -> Option<&Zone> {
        match &self.context {
            Context::Naive => None,
            Context::Zoned { zone, .. } => Some(zone),
        }
    }

    #[must_use]
    pub const fn is_naive(&self) -> bool {
        matches!(self.context, Context::Naive)
    }

    /// ## Summary
    /// Returns the absolute point in time this instant denotes.
    ///
    /// Returns `None` for naive instants, and for readings whose UTC
    /// equivalent falls outside chrono's supported range.
    #[must_use]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let offset = self.offset()?;
        self.local
            .and_local_timezone(offset)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Copy with the time of day replaced; date and context unchanged.
    #[must_use]
    pub fn with_time(&self, time: NaiveTime) -> Self {
        Self {
            local: self.local.date().and_time(time),
            context: self.context.clone(),
        }
    }

    /// Copy moved to another date; time of day and context unchanged.
    #[must_use]
    pub fn with_date(&self, date: CalendarDate) -> Self {
        Self {
            local: date.and_time(self.local.time()),
            context: self.context.clone(),
        }
    }
}

impl From<NaiveDate> for Instant {
    fn from(date: NaiveDate) -> Self {
        Self::naive(date.and_time(NaiveTime::MIN))
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(local: NaiveDateTime) -> Self {
        Self::naive(local)
    }
}

impl From<DateTime<FixedOffset>> for Instant {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::fixed(dt.naive_local(), *dt.offset())
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::fixed(dt.naive_utc(), Utc.fix())
    }
}

impl From<&Instant> for Instant {
    fn from(instant: &Instant) -> Self {
        instant.clone()
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local.format("%Y-%m-%d %H:%M:%S%.f"))?;
        if let Some(offset) = self.offset() {
            write!(f, " {}", format_offset(offset))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_date_converts_to_naive_midnight() {
        let instant = Instant::from(NaiveDate::from_ymd_opt(2013, 9, 17).unwrap());
        assert!(instant.is_naive());
        assert_eq!(instant.local(), at(2013, 9, 17, 0, 0, 0));
        assert_eq!(instant.to_utc(), None);
    }

    #[test]
    fn test_fixed_instant_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let instant = Instant::fixed(at(2013, 10, 9, 0, 39, 59), offset);
        let utc = instant.to_utc().unwrap();
        assert_eq!(utc.naive_utc(), at(2013, 10, 8, 22, 39, 59));
    }

    #[test]
    fn test_with_time_keeps_context() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let instant = Instant::zoned(
            at(2013, 1, 15, 10, 0, 0),
            Zone::Named("America/New_York".to_string()),
            offset,
        );
        let noon = instant.with_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(noon.context(), instant.context());
        assert_eq!(noon.local(), at(2013, 1, 15, 12, 0, 0));
    }

    #[test]
    fn test_display() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let instant = Instant::fixed(at(2013, 10, 8, 22, 39, 59), offset);
        assert_eq!(instant.to_string(), "2013-10-08 22:39:59 +0000");

        let naive = Instant::naive(
            NaiveDate::from_ymd_opt(2013, 9, 17)
                .unwrap()
                .and_hms_micro_opt(23, 59, 59, 999_999)
                .unwrap(),
        );
        assert_eq!(naive.to_string(), "2013-09-17 23:59:59.999999");
    }
}
