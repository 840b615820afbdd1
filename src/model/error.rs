//! Top-level application error.

use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::params::ParamsError;

/// Umbrella error for the reader binary.
///
/// Domain errors convert in via `From`, so `?` composes across the startup
/// path. Every variant is fatal for the binary: it reports the message and
/// exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file loading failed.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Resolved parameters failed validation.
    #[error("Invalid selection parameters: {0}")]
    Params(#[from] ParamsError),

    /// Tracing initialization failed.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
