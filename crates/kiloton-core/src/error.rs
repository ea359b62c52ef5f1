//! Error types for the Kiloton library.
//!
//! Domain values are validated at construction; these errors describe
//! what was rejected.

use thiserror::Error;

/// A specialized Result type for Kiloton core operations.
pub type KilotonResult<T> = Result<T, KilotonError>;

/// The main error type for Kiloton domain values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KilotonError {
    /// Calendar date does not exist.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Latitude or longitude outside the valid range.
    #[error("Invalid coordinate: {axis} {value} is outside [{min}, {max}]")]
    InvalidCoordinate {
        /// Which axis was rejected ("latitude" or "longitude").
        axis: &'static str,
        /// The rejected value.
        value: f64,
        /// Lower bound of the axis.
        min: f64,
        /// Upper bound of the axis.
        max: f64,
    },

    /// Country label is blank.
    #[error("Invalid country: {reason}")]
    InvalidCountry {
        /// Description of the problem.
        reason: String,
    },
}

impl KilotonError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid country error.
    #[must_use]
    pub fn invalid_country(reason: impl Into<String>) -> Self {
        Self::InvalidCountry {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KilotonError::invalid_date("1962-02-30");
        assert!(err.to_string().contains("Invalid date"));
        assert!(err.to_string().contains("1962-02-30"));
    }

    #[test]
    fn test_coordinate_error_display() {
        let err = KilotonError::InvalidCoordinate {
            axis: "latitude",
            value: 91.5,
            min: -90.0,
            max: 90.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid coordinate: latitude 91.5 is outside [-90, 90]"
        );
    }
}
