//! Zone databases: the capability that maps a zone name and an absolute
//! instant to a UTC offset.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and alias
//! canonicalization before looking zones up in `chrono-tz`.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

use crate::error::{CalendarError, CalendarResult};

/// Read-only source of zone offsets.
///
/// Implementations must be safe to share between threads; nothing in this
/// crate mutates a database after construction.
pub trait ZoneDatabase: Send + Sync {
    /// ## Summary
    /// Returns the UTC offset `zone` has at the absolute instant `at`,
    /// including any DST adjustment.
    ///
    /// ## Errors
    /// Returns `CalendarError::UnknownZone` if `zone` is not known.
    fn resolve_offset(&self, zone: &str, at: &DateTime<Utc>) -> CalendarResult<FixedOffset>;
}

/// IANA timezone database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzDatabase;

impl TzDatabase {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// ## Summary
    /// Resolves a zone identifier to a `chrono_tz::Tz`.
    ///
    /// Calendar-client prefixes are stripped, Windows zone names are mapped
    /// to IANA names and IANA aliases are canonicalized before lookup.
    ///
    /// ## Errors
    /// Returns `CalendarError::UnknownZone` if the identifier cannot be resolved.
    pub fn resolve(zone: &str) -> CalendarResult<Tz> {
        let normalized = normalize_tzid(zone);

        Tz::from_str(&normalized)
            .or_else(|_e| Tz::from_str(zone.trim()))
            .map_err(|_e| CalendarError::UnknownZone(zone.to_string()))
    }
}

impl ZoneDatabase for TzDatabase {
    fn resolve_offset(&self, zone: &str, at: &DateTime<Utc>) -> CalendarResult<FixedOffset> {
        let tz = Self::resolve(zone)?;
        let offset = at.with_timezone(&tz).offset().fix();

        tracing::trace!(zone, tz = %tz.name(), %at, offset = %offset, "Resolved zone offset");
        Ok(offset)
    }
}

/// Maps `zone` to the canonical IANA name when ICU knows it under another
/// spelling; unknown text comes back trimmed.
fn normalize_tzid(zone: &str) -> String {
    let zone = zone.trim();
    let name = ["/mozilla.org/", "/softwarestudio.org/"]
        .iter()
        .find_map(|prefix| zone.strip_prefix(prefix))
        .unwrap_or(zone);

    let aliases = IanaParserExtended::new();
    let canonical = WindowsParser::new()
        .parse(name, None)
        .and_then(|windows| aliases.iter().find(|entry| entry.time_zone == windows))
        .map(|entry| entry.canonical)
        .or_else(|| {
            let entry = aliases.parse(name);
            (entry.time_zone != icu::time::TimeZone::UNKNOWN).then_some(entry.canonical)
        });

    canonical.unwrap_or(name).to_string()
}

/// A fixed table of zone offsets, for callers that ship their own zone data
/// and for deterministic tests.
///
/// Every instant resolves to the single offset recorded for a zone.
#[derive(Debug, Clone, Default)]
pub struct FixedZoneTable {
    zones: HashMap<String, FixedOffset>,
}

impl FixedZoneTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` with `offset`, replacing any previous entry.
    #[must_use]
    pub fn with_zone(mut self, name: impl Into<String>, offset: FixedOffset) -> Self {
        self.zones.insert(name.into(), offset);
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.zones.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, FixedOffset)> for FixedZoneTable {
    fn from_iter<I: IntoIterator<Item = (S, FixedOffset)>>(iter: I) -> Self {
        Self {
            zones: iter
                .into_iter()
                .map(|(name, offset)| (name.into(), offset))
                .collect(),
        }
    }
}

impl ZoneDatabase for FixedZoneTable {
    fn resolve_offset(&self, zone: &str, _at: &DateTime<Utc>) -> CalendarResult<FixedOffset> {
        self.zones
            .get(zone)
            .copied()
            .ok_or_else(|| CalendarError::UnknownZone(zone.to_string()))
    }
}
