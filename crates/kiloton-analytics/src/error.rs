//! Error types for the analytics engine.

use thiserror::Error;

/// Unified error type for all analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// The operation needs at least one record and received none.
    #[error("{operation} requires at least one test record")]
    EmptyInput {
        /// Name of the operation that was given no input.
        operation: &'static str,
    },

    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AnalyticsError {
    /// Creates an empty input error for the named operation.
    #[must_use]
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<kiloton_core::KilotonError> for AnalyticsError {
    fn from(err: kiloton_core::KilotonError) -> Self {
        AnalyticsError::InvalidInput(err.to_string())
    }
}
