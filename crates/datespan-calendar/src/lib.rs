//! Calendar boundaries, date-range enumeration and timezone conversion.
//!
//! - [`calendar`]: the above bound to configured week numbering and zone
//! - [`boundary`]: minimal/maximal instants of a day, week or month
//! - [`range`]: inclusive date, week-start, month-start and year sequences
//! - [`timezone`]: mail-header timestamp parsing and zone conversion against
//!   an injected [`timezone::ZoneDatabase`]

pub mod boundary;
pub mod calendar;
pub mod error;
pub mod instant;
pub mod range;
pub mod timezone;
pub mod value;

pub use boundary::{
    Boundaries, day_boundaries, days_in_month, is_leap_year, max_time, min_time, month_boundaries,
    week_boundaries, week_boundaries_with, week_start,
};
pub use calendar::ReportCalendar;
pub use datespan_core::types::WeekNumbering;
pub use error::{CalendarError, CalendarResult};
pub use instant::{CalendarDate, Context, Instant};
pub use range::{
    dates_between, month_start_dates_between, week_start_dates_between,
    week_start_dates_between_with, years_between,
};
pub use timezone::{
    FixedZoneTable, TzDatabase, Zone, ZoneDatabase, parse_offset_timestamp, to_utc, to_zone,
    to_zone_with,
};
pub use value::parse_date_value;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
