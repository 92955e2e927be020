use anyhow::Result;
use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::types::WeekNumbering;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub week_numbering: WeekNumbering,
    /// Zone name callers render instants in, e.g. `UTC` or `Europe/Berlin`.
    pub default_zone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads settings from the environment and an optional `datespan.toml`.
    /// Environment variables use the `DATESPAN_` prefix and `__` between
    /// nesting levels, e.g. `DATESPAN_CALENDAR__WEEK_NUMBERING=iso`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = with_defaults()?
            .add_source(
                config::Environment::with_prefix("DATESPAN")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("datespan.toml").required(false))
            .build()?
            .try_deserialize::<Self>()?;

        tracing::debug!(settings = ?settings, "Settings loaded");
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from inline TOML, falling back to defaults for missing keys.
    ///
    /// ## Errors
    /// Returns an error if the TOML is malformed or holds invalid values.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(with_defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("calendar.week_numbering", WeekNumbering::default().as_str())?
        .set_default("calendar.default_zone", "UTC")?
        .set_default("logging.level", "info")?)
}

/// ## Summary
/// Loads settings from `.env`, environment variables and `datespan.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
