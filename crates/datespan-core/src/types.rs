use std::str::FromStr;

use serde::Deserialize;

use crate::error::CoreError;

/// How the Monday starting a date's week is located.
///
/// `Legacy` maps the ISO week number onto year-scoped `%W` weeks (week 0 holds
/// the days before the year's first Monday) after subtracting one. Near
/// 1 January, and in years starting on Monday or Friday through Sunday, the
/// resolved week does not always contain the date. `Iso` always yields the
/// Monday on or before the date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekNumbering {
    #[default]
    Legacy,
    Iso,
}

impl WeekNumbering {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Iso => "iso",
        }
    }
}

impl std::fmt::Display for WeekNumbering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekNumbering {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "iso" => Ok(Self::Iso),
            other => Err(CoreError::InvalidInput(format!(
                "unknown week numbering: {other}"
            ))),
        }
    }
}
