//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file could not be read or parsed.
    #[error("Configuration error in {}: {message}", .path.display())]
    Config {
        /// Path of the offending file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// Invalid country selection.
    #[error("Invalid country: '{value}'. Use ALL or a country code such as {choices}.")]
    InvalidCountry {
        /// The rejected value.
        value: String,
        /// Suggested codes.
        choices: String,
    },

    /// Invalid map zoom.
    #[error("Invalid zoom: {0}. Must be between 0 and 20.")]
    InvalidZoom(f64),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
