//! Date-range enumeration.
//!
//! All ranges are inclusive of both endpoints unless a function says
//! otherwise, and every function rejects an `end` earlier than `start`.

use chrono::{Datelike, Days, TimeDelta};
use datespan_core::types::WeekNumbering;

use crate::boundary::week_start;
use crate::error::{CalendarError, CalendarResult};
use crate::instant::CalendarDate;

fn ensure_ordered(start: CalendarDate, end: CalendarDate) -> CalendarResult<()> {
    if end < start {
        return Err(CalendarError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}

/// ## Summary
/// Returns every date from `start` to `end`, both included, ascending unless
/// `reverse` is set.
///
/// ## Errors
/// Returns `CalendarError::InvalidRange` if `end` is before `start`.
pub fn dates_between(
    start: CalendarDate,
    end: CalendarDate,
    reverse: bool,
) -> CalendarResult<Vec<CalendarDate>> {
    ensure_ordered(start, end)?;

    let mut dates: Vec<CalendarDate> = start.iter_days().take_while(|d| *d <= end).collect();
    if reverse {
        dates.reverse();
    }

    tracing::trace!(%start, %end, reverse, count = dates.len(), "Enumerated dates");
    Ok(dates)
}

/// ## Summary
/// Returns the Monday of every whole week between the week of `start` and
/// `end`, beginning with the Monday of `start`'s own week.
///
/// Weeks are located with [`WeekNumbering::Legacy`]. The result is empty when
/// `end` falls less than 7 days after that first Monday.
///
/// ## Errors
/// Returns `CalendarError::InvalidRange` if `end` is before `start`.
pub fn week_start_dates_between(
    start: CalendarDate,
    end: CalendarDate,
) -> CalendarResult<Vec<CalendarDate>> {
    week_start_dates_between_with(start, end, WeekNumbering::Legacy)
}

/// ## Summary
/// Same as [`week_start_dates_between`] with an explicit week numbering.
///
/// ## Errors
/// Returns `CalendarError::InvalidRange` if `end` is before `start`.
pub fn week_start_dates_between_with(
    start: CalendarDate,
    end: CalendarDate,
    numbering: WeekNumbering,
) -> CalendarResult<Vec<CalendarDate>> {
    ensure_ordered(start, end)?;

    let monday = week_start(start, numbering);
    let weeks = (end - monday).num_days().div_euclid(7);
    if weeks == 0 {
        return Ok(Vec::new());
    }

    // A legacy Monday can land after `end`; it is still reported on its own.
    let mondays: Vec<CalendarDate> = (0..weeks.max(1))
        .map(|n| monday + TimeDelta::weeks(n))
        .collect();

    tracing::trace!(%start, %end, %numbering, count = mondays.len(), "Enumerated week starts");
    Ok(mondays)
}

/// ## Summary
/// Returns the first day of each month from `start`'s month up to, but not
/// including, `end`.
///
/// The result is empty when both dates share a month. When `end` is itself a
/// first of the month it is not part of the result.
///
/// ## Errors
/// Returns `CalendarError::InvalidRange` if `end` is before `start`.
pub fn month_start_dates_between(
    start: CalendarDate,
    end: CalendarDate,
) -> CalendarResult<Vec<CalendarDate>> {
    ensure_ordered(start, end)?;

    if (start.year(), start.month()) == (end.year(), end.month()) {
        return Ok(Vec::new());
    }

    let first = start - Days::new(u64::from(start.day0()));
    let dates = dates_between(first, end, false)?;
    let last = dates.len().saturating_sub(1);

    let firsts: Vec<CalendarDate> = dates
        .into_iter()
        .enumerate()
        .filter(|(index, date)| date.day() == 1 && *index < last)
        .map(|(_, date)| date)
        .collect();

    tracing::trace!(%start, %end, count = firsts.len(), "Enumerated month starts");
    Ok(firsts)
}

/// ## Summary
/// Returns every calendar year from `start`'s year to `end`'s year, both
/// included.
///
/// ## Errors
/// Returns `CalendarError::InvalidRange` if `end`'s year is before `start`'s.
pub fn years_between(start: CalendarDate, end: CalendarDate) -> CalendarResult<Vec<i32>> {
    if end.year() < start.year() {
        return Err(CalendarError::InvalidRange {
            start: start.year().to_string(),
            end: end.year().to_string(),
        });
    }

    Ok((start.year()..=end.year()).collect())
}
