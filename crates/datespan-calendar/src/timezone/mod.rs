//! Fixed-offset timestamp parsing and conversion between zones.
//!
//! Zone names are resolved through an injected [`ZoneDatabase`]; the
//! production database is [`TzDatabase`] (IANA data via `chrono-tz`), and
//! [`FixedZoneTable`] serves deterministic lookups from a static table.

mod convert;
mod database;
mod header;
mod zone;

pub use convert::{to_utc, to_zone, to_zone_with};
pub use database::{FixedZoneTable, TzDatabase, ZoneDatabase};
pub use header::parse_offset_timestamp;
pub use zone::{Zone, format_offset};
