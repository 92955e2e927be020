//! Day, week and month boundaries.
//!
//! Every function takes `impl Into<Instant>`, so plain dates (read as naive
//! midnight) and zoned date-times are both accepted. The offset/zone context
//! of the input is carried onto the returned boundaries.

use chrono::{Datelike, Days, NaiveTime, TimeDelta};
use datespan_core::types::WeekNumbering;

use crate::instant::{CalendarDate, Instant};

/// Start and end instant of a calendar unit, both inclusive.
pub type Boundaries = (Instant, Instant);

/// 23:59:59.999999, the last time of day at microsecond resolution.
fn end_of_day() -> NaiveTime {
    NaiveTime::MIN
        .overflowing_sub_signed(TimeDelta::microseconds(1))
        .0
}

/// ## Summary
/// Returns a copy of `instant` with the time of day set to 00:00:00.000000.
#[must_use]
pub fn min_time(instant: impl Into<Instant>) -> Instant {
    instant.into().with_time(NaiveTime::MIN)
}

/// ## Summary
/// Returns a copy of `instant` with the time of day set to 23:59:59.999999.
#[must_use]
pub fn max_time(instant: impl Into<Instant>) -> Instant {
    instant.into().with_time(end_of_day())
}

/// ## Summary
/// Returns the first and last instant of the day containing `instant`.
#[must_use]
pub fn day_boundaries(instant: impl Into<Instant>) -> Boundaries {
    let instant = instant.into();
    (min_time(&instant), max_time(&instant))
}

/// ## Summary
/// Returns the Monday-to-Sunday boundaries of the week of `instant`, with the
/// week located by [`WeekNumbering::Legacy`].
#[must_use]
pub fn week_boundaries(instant: impl Into<Instant>) -> Boundaries {
    week_boundaries_with(instant, WeekNumbering::Legacy)
}

/// ## Summary
/// Returns the Monday-to-Sunday boundaries of the week of `instant` using the
/// given week numbering.
#[must_use]
pub fn week_boundaries_with(instant: impl Into<Instant>, numbering: WeekNumbering) -> Boundaries {
    let instant = instant.into();
    let monday = week_start(instant.date(), numbering);
    let sunday = monday + Days::new(6);

    (
        min_time(instant.with_date(monday)),
        max_time(instant.with_date(sunday)),
    )
}

/// ## Summary
/// Returns the Monday that starts the week of `date`.
///
/// This is the single place where week numbering is interpreted; see
/// [`WeekNumbering`] for how the two modes differ.
#[must_use]
pub fn week_start(date: CalendarDate, numbering: WeekNumbering) -> CalendarDate {
    match numbering {
        WeekNumbering::Iso => date - Days::new(u64::from(date.weekday().num_days_from_monday())),
        WeekNumbering::Legacy => {
            // `%W` numbering is one behind ISO only when 1 January falls on
            // Tuesday through Thursday; the adjustment is applied regardless.
            let week = date.iso_week().week().saturating_sub(1);
            monday_of_year_week(date, week)
        }
    }
}

/// Monday of `%W` week `week` in the calendar year of `date`.
///
/// Week 0 holds the days before the year's first Monday, so its Monday is the
/// one on or before 1 January.
fn monday_of_year_week(date: CalendarDate, week: u32) -> CalendarDate {
    let jan_first = date - Days::new(u64::from(date.ordinal0()));
    let first_weekday = i64::from(jan_first.weekday().num_days_from_monday());
    let week_zero_length = (7 - first_weekday) % 7;

    let offset = if week == 0 {
        -first_weekday
    } else {
        week_zero_length + 7 * (i64::from(week) - 1)
    };

    jan_first + TimeDelta::days(offset)
}

/// ## Summary
/// Returns the boundaries of the month containing `instant`, from the first
/// day at 00:00:00 to the last day at 23:59:59.999999.
#[must_use]
pub fn month_boundaries(instant: impl Into<Instant>) -> Boundaries {
    let instant = instant.into();
    let date = instant.date();
    let first = date - Days::new(u64::from(date.day0()));
    let last = first + Days::new(u64::from(month_length(date.year(), date.month()) - 1));

    (
        min_time(instant.with_date(first)),
        max_time(instant.with_date(last)),
    )
}

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// ## Summary
/// Number of days in `month` (1-12) of `year`, or `None` for an invalid month.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1..=12 => Some(month_length(year, month)),
        _ => None,
    }
}

const fn month_length(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timezone::Zone;
    use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Weekday};

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn start_of(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
    }

    fn end_of(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_micro_opt(23, 59, 59, 999_999).unwrap()
    }

    fn week_of(d: CalendarDate) -> (NaiveDateTime, NaiveDateTime) {
        let (start, end) = week_boundaries(d);
        (start.local(), end.local())
    }

    #[test]
    fn test_min_and_max_time_of_datetime() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let instant = Instant::fixed(
            date(2013, 9, 17).and_hms_micro_opt(14, 3, 12, 42).unwrap(),
            offset,
        );

        let min = min_time(&instant);
        assert_eq!(min.local(), start_of(2013, 9, 17));
        assert_eq!(min.offset(), Some(offset));

        let max = max_time(&instant);
        assert_eq!(max.local(), end_of(2013, 9, 17));
        assert_eq!(max.zone(), Some(&Zone::Fixed(offset)));
    }

    #[test]
    fn test_min_and_max_time_are_idempotent() {
        let instant = Instant::from(date(2013, 9, 17).and_hms_opt(8, 30, 0).unwrap());
        assert_eq!(min_time(min_time(&instant)), min_time(&instant));
        assert_eq!(max_time(max_time(&instant)), max_time(&instant));
    }

    #[test]
    fn test_day_boundaries() {
        let (start, end) = day_boundaries(date(2013, 9, 17));
        assert_eq!(start.local(), start_of(2013, 9, 17));
        assert_eq!(end.local(), end_of(2013, 9, 17));
        assert!(start.is_naive());
    }

    #[test]
    fn test_week_boundaries_2013() {
        for d in [date(2013, 9, 17), date(2013, 9, 18), date(2013, 9, 22)] {
            assert_eq!(week_of(d), (start_of(2013, 9, 16), end_of(2013, 9, 22)));
        }
        for d in [date(2013, 9, 23), date(2013, 9, 25), date(2013, 9, 29)] {
            assert_eq!(week_of(d), (start_of(2013, 9, 23), end_of(2013, 9, 29)));
        }
        for d in [date(2013, 9, 30), date(2013, 10, 2), date(2013, 10, 6)] {
            assert_eq!(week_of(d), (start_of(2013, 9, 30), end_of(2013, 10, 6)));
        }
    }

    #[test]
    fn test_week_boundaries_span_seven_days_from_monday() {
        let mut d = date(2011, 11, 20);
        while d < date(2017, 2, 1) {
            let (start, end) = week_boundaries(d);
            assert_eq!(start.date().weekday(), Weekday::Mon, "week of {d}");
            assert_eq!(end, max_time(start.date() + Days::new(6)), "week of {d}");
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_week_boundaries_year_end_regression() {
        // Legacy numbering resolves these in the calendar year of the date.
        assert_eq!(
            week_of(date(2013, 12, 29)),
            (start_of(2013, 12, 23), end_of(2013, 12, 29))
        );
        assert_eq!(
            week_of(date(2013, 12, 30)),
            (start_of(2012, 12, 31), end_of(2013, 1, 6))
        );
        assert_eq!(
            week_of(date(2013, 12, 31)),
            (start_of(2012, 12, 31), end_of(2013, 1, 6))
        );
        assert_eq!(
            week_of(date(2014, 1, 1)),
            (start_of(2013, 12, 30), end_of(2014, 1, 5))
        );
        assert_eq!(
            week_of(date(2014, 1, 2)),
            (start_of(2013, 12, 30), end_of(2014, 1, 5))
        );
    }

    #[test]
    fn test_week_boundaries_friday_year_regression() {
        // 2016 starts on a Friday, so the ISO and `%W` week numbers coincide.
        assert_eq!(
            week_of(date(2016, 1, 13)),
            (start_of(2016, 1, 4), end_of(2016, 1, 10))
        );
        assert_eq!(
            week_of(date(2016, 1, 1)),
            (start_of(2016, 12, 26), end_of(2017, 1, 1))
        );
    }

    #[test]
    fn test_iso_week_boundaries_contain_date() {
        let (start, end) = week_boundaries_with(date(2016, 1, 13), WeekNumbering::Iso);
        assert_eq!(start.local(), start_of(2016, 1, 11));
        assert_eq!(end.local(), end_of(2016, 1, 17));

        let (start, end) = week_boundaries_with(date(2013, 12, 31), WeekNumbering::Iso);
        assert_eq!(start.local(), start_of(2013, 12, 30));
        assert_eq!(end.local(), end_of(2014, 1, 5));
    }

    #[test]
    fn test_week_boundaries_keep_zone() {
        let zone = Zone::Named("Europe/Ljubljana".to_string());
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let instant = Instant::zoned(
            date(2013, 9, 18).and_hms_opt(9, 0, 0).unwrap(),
            zone.clone(),
            offset,
        );

        let (start, end) = week_boundaries(instant);
        assert_eq!(start.zone(), Some(&zone));
        assert_eq!(end.offset(), Some(offset));
    }

    #[test]
    fn test_month_boundaries() {
        let cases = [
            (date(2013, 1, 5), date(2013, 1, 1), date(2013, 1, 31)),
            (date(2013, 2, 28), date(2013, 2, 1), date(2013, 2, 28)),
            (date(2012, 2, 10), date(2012, 2, 1), date(2012, 2, 29)),
            (date(2000, 2, 10), date(2000, 2, 1), date(2000, 2, 29)),
            (date(1900, 2, 10), date(1900, 2, 1), date(1900, 2, 28)),
            (date(2013, 9, 30), date(2013, 9, 1), date(2013, 9, 30)),
            (date(2013, 12, 1), date(2013, 12, 1), date(2013, 12, 31)),
        ];

        for (input, first, last) in cases {
            let (start, end) = month_boundaries(input);
            assert_eq!(start, min_time(first), "month of {input}");
            assert_eq!(end, max_time(last), "month of {input}");
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2013, 2), Some(28));
        assert_eq!(days_in_month(2012, 2), Some(29));
        assert_eq!(days_in_month(2013, 4), Some(30));
        assert_eq!(days_in_month(2013, 12), Some(31));
        assert_eq!(days_in_month(2013, 0), None);
        assert_eq!(days_in_month(2013, 13), None);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2012));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2013));
    }
}
