use datespan_core::error::CoreError;
use thiserror::Error;

/// Calendar and timezone errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Timestamp, date or zone text does not match the expected grammar,
    /// or a numeric component is out of range.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown timezone: {0}")]
    UnknownZone(String),

    #[error("Invalid range: end {end} is before start {start}")]
    InvalidRange { start: String, end: String },

    /// A zone conversion needs an absolute instant, which a naive instant is not.
    #[error("Instant has no UTC offset: {0}")]
    NaiveInstant(String),

    /// The instant has an offset but its UTC equivalent is not representable.
    #[error("Instant out of range: {0}")]
    OutOfRange(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
