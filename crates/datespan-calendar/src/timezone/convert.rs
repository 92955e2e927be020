use chrono::FixedOffset;

use super::database::{TzDatabase, ZoneDatabase};
use super::header::parse_offset_timestamp;
use super::zone::Zone;
use crate::error::{CalendarError, CalendarResult};
use crate::instant::Instant;

/// ## Summary
/// Re-expresses `instant` in the zone named `zone_name`.
///
/// `zone_name` is either a fixed offset (`+0200`, `-05:30`) or a name
/// resolved through `db`. The returned instant denotes the same absolute
/// time; only its wall-clock fields and zone change.
///
/// ## Errors
/// Returns an error if:
/// - `zone_name` is empty or a malformed offset (`CalendarError::Parse`)
/// - `db` does not know the zone (`CalendarError::UnknownZone`)
/// - `instant` is naive (`CalendarError::NaiveInstant`)
/// - `instant` has no representable UTC equivalent (`CalendarError::OutOfRange`)
pub fn to_zone<D>(instant: &Instant, zone_name: &str, db: &D) -> CalendarResult<Instant>
where
    D: ZoneDatabase + ?Sized,
{
    let zone: Zone = zone_name.parse()?;
    to_zone_with(instant, &zone, db)
}

/// ## Summary
/// Re-expresses `instant` in an already parsed `zone`.
///
/// ## Errors
/// Returns `CalendarError::UnknownZone` if `db` cannot resolve a named zone,
/// `CalendarError::NaiveInstant` if `instant` carries no offset and
/// `CalendarError::OutOfRange` if its UTC equivalent is not representable.
pub fn to_zone_with<D>(instant: &Instant, zone: &Zone, db: &D) -> CalendarResult<Instant>
where
    D: ZoneDatabase + ?Sized,
{
    if instant.is_naive() {
        return Err(CalendarError::NaiveInstant(instant.to_string()));
    }
    let utc = instant
        .to_utc()
        .ok_or_else(|| CalendarError::OutOfRange(instant.to_string()))?;
    let offset: FixedOffset = zone.offset_at(&utc, db)?;
    let local = utc.with_timezone(&offset).naive_local();

    tracing::trace!(from = %instant, %zone, %offset, "Converted instant");
    Ok(Instant::zoned(local, zone.clone(), offset))
}

/// ## Summary
/// Parses a mail-header timestamp and converts it to UTC.
///
/// ## Errors
/// Returns `CalendarError::Parse` if the timestamp is malformed.
pub fn to_utc(text: &str) -> CalendarResult<Instant> {
    let instant = parse_offset_timestamp(text)?;
    to_zone(&instant, "UTC", &TzDatabase)
}
