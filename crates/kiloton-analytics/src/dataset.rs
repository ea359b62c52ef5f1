//! Prepared test dataset.
//!
//! Every dashboard view starts from the same table: the loaded rows sorted
//! by upper-bound yield, largest first. The sort is stable, so rows with
//! equal upper bounds keep their file order. Rows with missing fields are
//! dropped earlier, by the source.

use std::collections::HashSet;

use kiloton_core::{Country, TestRecord};

use crate::error::AnalyticsResult;
use crate::extremes::{find_yield_extremes, ExtremesResult};
use crate::filter::CountryFilter;

/// Test records in presentation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<TestRecord>,
}

/// Sorts `records` by upper-bound yield, descending.
///
/// NaN upper bounds sort last, so they never seed the extremes scan.
#[must_use]
pub fn prepare(mut records: Vec<TestRecord>) -> Dataset {
    records.sort_by(|a, b| match (a.yield_upper.is_nan(), b.yield_upper.is_nan()) {
        (false, false) => b.yield_upper.total_cmp(&a.yield_upper),
        (nan_a, nan_b) => nan_a.cmp(&nan_b),
    });
    log::debug!("prepared dataset with {} records", records.len());
    Dataset { records }
}

impl Dataset {
    /// Returns the records in presentation order.
    #[must_use]
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct countries, in order of first appearance.
    #[must_use]
    pub fn countries(&self) -> Vec<Country> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(&r.country))
            .map(|r| r.country.clone())
            .collect()
    }

    /// Records passing `filter`, in presentation order.
    #[must_use]
    pub fn filter_country(&self, filter: &CountryFilter) -> Vec<&TestRecord> {
        self.records.iter().filter(|r| filter.matches(*r)).collect()
    }

    /// Smallest and largest test in presentation order.
    ///
    /// Because the dataset is sorted, the seed row is the test with the
    /// largest upper-bound yield.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::EmptyInput` if the dataset is empty.
    pub fn extremes(&self) -> AnalyticsResult<ExtremesResult> {
        find_yield_extremes(&self.records)
    }
}

impl From<Vec<TestRecord>> for Dataset {
    fn from(records: Vec<TestRecord>) -> Self {
        prepare(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;

    fn rec(name: &str, country: &str, lower: f64, upper: f64) -> TestRecord {
        TestRecord::new(name, Country::new(country).unwrap(), lower, upper)
    }

    fn sample() -> Dataset {
        prepare(vec![
            rec("Hurricane", "UK", 25.0, 25.0),
            rec("Ivy Mike", "USA", 10_400.0, 10_400.0),
            rec("RDS-1", "USSR", 22.0, 22.0),
            rec("Unknown", "USSR", 0.0, 0.0),
            rec("Baker", "USA", 21.0, 25.0),
        ])
    }

    #[test]
    fn test_sorted_by_upper_desc_stable() {
        let ds = sample();
        let names: Vec<_> = ds.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Ivy Mike", "Hurricane", "Baker", "RDS-1", "Unknown"]);
    }

    #[test]
    fn test_nan_upper_sorts_last() {
        let ds = prepare(vec![
            rec("Ghost", "USA", 1.0, f64::NAN),
            rec("Tsar", "USSR", 50_000.0, 58_000.0),
            rec("Small", "USA", 0.5, 1.0),
        ]);

        let names: Vec<_> = ds.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Tsar", "Small", "Ghost"]);

        let result = ds.extremes().unwrap();
        assert_eq!(result.max.weapon, "Tsar");
        assert_eq!(result.min.weapon, "Small");
    }

    #[test]
    fn test_countries_first_seen() {
        let ds = sample();
        let countries: Vec<_> = ds.countries().into_iter().map(String::from).collect();
        assert_eq!(countries, ["USA", "UK", "USSR"]);
    }

    #[test]
    fn test_filter_country() {
        let ds = sample();
        let ussr = ds.filter_country(&"USSR".parse().unwrap());
        assert_eq!(ussr.len(), 2);
        assert_eq!(ds.filter_country(&CountryFilter::All).len(), 5);
    }

    #[test]
    fn test_extremes_on_prepared() {
        let result = sample().extremes().unwrap();
        // Seed is Ivy Mike; the zero-yield row is skipped.
        assert_eq!(result.max.weapon, "Ivy Mike");
        assert_eq!(result.min.weapon, "Baker");
        assert_eq!(result.min.yield_kt, 21.0);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert!(matches!(ds.extremes(), Err(AnalyticsError::EmptyInput { .. })));
    }
}
