//! Smallest and largest test by yield.
//!
//! The smallest test is the one with the lowest lower-bound yield; the
//! largest is the one with the highest upper-bound yield. Rows whose
//! upper-bound yield is not strictly positive are unknown or invalid and do
//! not compete, with one exception: the first row always seeds both running
//! extremes, valid or not.
//!
//! Comparisons are strict, so on ties the earlier row is kept. The input is
//! never reordered.
//!
//! # Example
//!
//! ```rust
//! use kiloton_analytics::extremes::find_yield_extremes;
//! use kiloton_core::{Country, TestRecord};
//!
//! let records = vec![
//!     TestRecord::new("A", Country::new("X").unwrap(), 5.0, 10.0),
//!     TestRecord::new("B", Country::new("Y").unwrap(), 1.0, 50.0),
//!     TestRecord::new("C", Country::new("Z").unwrap(), -1.0, -1.0),
//! ];
//!
//! let extremes = find_yield_extremes(&records).unwrap();
//! assert_eq!(extremes.min.weapon, "B");
//! assert_eq!(extremes.max.yield_kt, 50.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use kiloton_core::YieldSample;

use crate::error::{AnalyticsError, AnalyticsResult};

/// One end of the yield range together with the test that holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldExtreme {
    /// Yield in kilotons (lower bound for the minimum, upper bound for the maximum).
    pub yield_kt: f64,
    /// Name of the device or test.
    pub weapon: String,
    /// Country credited with the test.
    pub country: String,
}

impl fmt::Display for YieldExtreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with a yield of {:.1} kilotons, conducted by {}",
            self.weapon, self.yield_kt, self.country
        )
    }
}

/// Smallest and largest test in a record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremesResult {
    /// Test with the smallest lower-bound yield.
    pub min: YieldExtreme,
    /// Test with the largest upper-bound yield.
    pub max: YieldExtreme,
}

impl ExtremesResult {
    /// Flattens into `(min_yield, min_weapon, min_country, max_yield, max_weapon, max_country)`.
    #[must_use]
    pub fn into_tuple(self) -> (f64, String, String, f64, String, String) {
        (
            self.min.yield_kt,
            self.min.weapon,
            self.min.country,
            self.max.yield_kt,
            self.max.weapon,
            self.max.country,
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    yield_kt: f64,
    weapon: &'a str,
    country: &'a str,
}

impl Candidate<'_> {
    fn to_extreme(self) -> YieldExtreme {
        YieldExtreme {
            yield_kt: self.yield_kt,
            weapon: self.weapon.to_string(),
            country: self.country.to_string(),
        }
    }
}

/// Running state of a yield extremes scan.
///
/// Borrows names from the scanned rows and only allocates in
/// [`finish`](Self::finish). Use [`YieldExtremesFinder::scan`] for a slice;
/// use [`seed`](Self::seed) and [`observe`](Self::observe) directly when
/// rows arrive one at a time.
#[derive(Debug, Clone)]
pub struct YieldExtremesFinder<'a> {
    min: Candidate<'a>,
    max: Candidate<'a>,
    observed: usize,
    skipped: usize,
}

impl<'a> YieldExtremesFinder<'a> {
    /// Starts a scan from the first row.
    ///
    /// The seed row is taken as both the minimum and maximum candidate even
    /// if its upper-bound yield is not positive.
    pub fn seed<R: YieldSample + ?Sized>(first: &'a R) -> Self {
        Self {
            min: Candidate {
                yield_kt: first.yield_lower(),
                weapon: first.weapon_name(),
                country: first.source_country(),
            },
            max: Candidate {
                yield_kt: first.yield_upper(),
                weapon: first.weapon_name(),
                country: first.source_country(),
            },
            observed: 1,
            skipped: 0,
        }
    }

    /// Feeds the next row in sequence order.
    pub fn observe<R: YieldSample + ?Sized>(&mut self, record: &'a R) {
        self.observed += 1;

        let upper = record.yield_upper();
        if !record.has_valid_yield() {
            self.skipped += 1;
            return;
        }

        let lower = record.yield_lower();
        if lower < self.min.yield_kt {
            self.min = Candidate {
                yield_kt: lower,
                weapon: record.weapon_name(),
                country: record.source_country(),
            };
        }

        if upper > self.max.yield_kt {
            self.max = Candidate {
                yield_kt: upper,
                weapon: record.weapon_name(),
                country: record.source_country(),
            };
        }
    }

    /// Number of rows seen so far, seed included.
    #[must_use]
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Number of rows skipped for a non-positive upper-bound yield.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Ends the scan.
    #[must_use]
    pub fn finish(self) -> ExtremesResult {
        log::debug!(
            "yield extremes: {} rows, {} skipped, min {} kt ({}), max {} kt ({})",
            self.observed,
            self.skipped,
            self.min.yield_kt,
            self.min.weapon,
            self.max.yield_kt,
            self.max.weapon
        );
        ExtremesResult {
            min: self.min.to_extreme(),
            max: self.max.to_extreme(),
        }
    }

    /// Scans a slice in order.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::EmptyInput` if `records` is empty.
    pub fn scan<R: YieldSample>(records: &'a [R]) -> AnalyticsResult<ExtremesResult> {
        let (first, rest) = records
            .split_first()
            .ok_or_else(|| AnalyticsError::empty_input("yield extremes"))?;

        let mut finder = Self::seed(first);
        for record in rest {
            finder.observe(record);
        }
        Ok(finder.finish())
    }
}

/// Finds the smallest and largest test in `records`.
///
/// Yields must be numeric. A NaN yield never wins a comparison, so it can
/// only surface in the result through the seed row.
///
/// # Errors
///
/// Returns `AnalyticsError::EmptyInput` if `records` is empty.
pub fn find_yield_extremes<R: YieldSample>(records: &[R]) -> AnalyticsResult<ExtremesResult> {
    YieldExtremesFinder::scan(records)
}
