//! Shared error, configuration, logging and value types for the `datespan`
//! crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
