//! Calendar operations bound to the week numbering and display zone chosen in
//! [`datespan_core::config::CalendarConfig`].

use datespan_core::config::CalendarConfig;
use datespan_core::types::WeekNumbering;

use crate::boundary::{Boundaries, week_boundaries_with, week_start};
use crate::error::CalendarResult;
use crate::instant::{CalendarDate, Instant};
use crate::range::week_start_dates_between_with;
use crate::timezone::{Zone, ZoneDatabase, to_zone_with};

/// Week numbering and display zone applied to reporting windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCalendar {
    week_numbering: WeekNumbering,
    default_zone: Zone,
}

impl ReportCalendar {
    #[must_use]
    pub const fn new(week_numbering: WeekNumbering, default_zone: Zone) -> Self {
        Self {
            week_numbering,
            default_zone,
        }
    }

    /// ## Summary
    /// Builds a calendar from loaded settings.
    ///
    /// ## Errors
    /// Returns `CalendarError::Parse` if `default_zone` is empty or a
    /// malformed offset.
    pub fn from_config(config: &CalendarConfig) -> CalendarResult<Self> {
        let calendar = Self::new(config.week_numbering, config.default_zone.parse()?);

        tracing::debug!(
            week_numbering = %calendar.week_numbering,
            default_zone = %calendar.default_zone,
            "Calendar configured"
        );
        Ok(calendar)
    }

    /// ## Summary
    /// Builds a calendar from raw setting values, e.g. command-line flags.
    ///
    /// ## Errors
    /// Returns `CalendarError::Core` for an unknown week numbering and
    /// `CalendarError::Parse` for an unusable zone.
    pub fn from_names(week_numbering: &str, default_zone: &str) -> CalendarResult<Self> {
        Ok(Self::new(week_numbering.parse()?, default_zone.parse()?))
    }

    #[must_use]
    pub const fn week_numbering(&self) -> WeekNumbering {
        self.week_numbering
    }

    #[must_use]
    pub const fn default_zone(&self) -> &Zone {
        &self.default_zone
    }

    #[must_use]
    pub fn week_start(&self, date: CalendarDate) -> CalendarDate {
        week_start(date, self.week_numbering)
    }

    #[must_use]
    pub fn week_boundaries(&self, instant: impl Into<Instant>) -> Boundaries {
        week_boundaries_with(instant, self.week_numbering)
    }

    /// ## Errors
    /// Returns `CalendarError::InvalidRange` if `end` is before `start`.
    pub fn week_start_dates_between(
        &self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> CalendarResult<Vec<CalendarDate>> {
        week_start_dates_between_with(start, end, self.week_numbering)
    }

    /// ## Summary
    /// Re-expresses `instant` in the configured display zone.
    ///
    /// ## Errors
    /// Same as [`to_zone_with`].
    pub fn to_default_zone<D>(&self, instant: &Instant, db: &D) -> CalendarResult<Instant>
    where
        D: ZoneDatabase + ?Sized,
    {
        to_zone_with(instant, &self.default_zone, db)
    }
}

impl Default for ReportCalendar {
    fn default() -> Self {
        Self::new(WeekNumbering::default(), Zone::Named("UTC".to_string()))
    }
}
