//! Date a test was conducted.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{KilotonError, KilotonResult};

/// Calendar date of a test.
///
/// Newtype over `chrono::NaiveDate`. The dataset stores year, month and day
/// in separate columns; [`TestDate::from_ymd`] combines them.
///
/// # Example
///
/// ```rust
/// use kiloton_core::types::TestDate;
///
/// let date = TestDate::from_ymd(1961, 10, 30).unwrap();
/// assert_eq!(date.year(), 1961);
/// assert_eq!(date.to_string(), "1961-10-30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestDate(NaiveDate);

impl TestDate {
    /// Creates a date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `KilotonError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> KilotonResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(TestDate)
            .ok_or_else(|| KilotonError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `KilotonError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> KilotonResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(TestDate)
            .map_err(|_| KilotonError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for TestDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for TestDate {
    fn from(date: NaiveDate) -> Self {
        TestDate(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd() {
        let date = TestDate::from_ymd(1945, 7, 16).unwrap();
        assert_eq!(date.year(), 1945);
        assert_eq!(date.month(), 7);
        assert_eq!(date.day(), 16);
    }

    #[test]
    fn test_invalid_date() {
        let err = TestDate::from_ymd(1962, 2, 30).unwrap_err();
        assert!(err.to_string().contains("1962-02-30"));
        assert!(TestDate::from_ymd(1962, 13, 1).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let date = TestDate::parse("1998-05-28").unwrap();
        assert_eq!(date.to_string(), "1998-05-28");
        assert!(TestDate::parse("28/05/1998").is_err());
    }

    #[test]
    fn test_ordering() {
        let a = TestDate::from_ymd(1949, 8, 29).unwrap();
        let b = TestDate::from_ymd(1952, 10, 3).unwrap();
        assert!(a < b);
    }
}
