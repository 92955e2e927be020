//! Tracing subscriber installation.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Installs a global `tracing` subscriber filtered by `level`, an
/// `EnvFilter` directive such as `info` or `datespan_calendar=trace`.
///
/// Returns `Ok(false)` when another global subscriber is already installed.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if `level` is not a valid filter directive.
pub fn init(level: &str) -> CoreResult<bool> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| CoreError::ConfigError(format!("invalid log filter {level:?}: {e}")))?;

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = level, "Tracing subscriber installed");
    }

    Ok(installed)
}

/// ## Summary
/// Installs the subscriber using `logging.level` from loaded settings.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if the configured level is invalid.
pub fn init_from_settings(settings: &Settings) -> CoreResult<bool> {
    init(&settings.logging.level)
}
