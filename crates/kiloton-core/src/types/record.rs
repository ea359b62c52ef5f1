//! A single row of the historical test dataset.

use serde::{Deserialize, Serialize};

use crate::traits::YieldSample;
use crate::types::{Coordinates, Country, TestDate};

/// One historical nuclear test.
///
/// The four yield fields are always present. Date, location and the
/// descriptive labels are optional because analytics that only look at
/// yields do not need them; the CSV source fills them in when the columns
/// are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Name of the device or test.
    pub name: String,
    /// Country credited with the test.
    pub country: Country,
    /// Lower-bound yield in kilotons.
    pub yield_lower: f64,
    /// Upper-bound yield in kilotons.
    pub yield_upper: f64,
    /// Date the test was conducted.
    pub date: Option<TestDate>,
    /// Test site coordinates.
    pub location: Option<Coordinates>,
    /// Deployment site label (e.g. "Nts", "Semi Kazakh").
    pub deployment_location: Option<String>,
    /// Stated purpose (e.g. "Wr", "Combat").
    pub purpose: Option<String>,
    /// Deployment type (e.g. "Tower", "Shaft", "Airdrop").
    pub test_type: Option<String>,
}

impl TestRecord {
    /// Creates a record with the yield fields set and everything else empty.
    pub fn new(name: impl Into<String>, country: Country, yield_lower: f64, yield_upper: f64) -> Self {
        Self {
            name: name.into(),
            country,
            yield_lower,
            yield_upper,
            date: None,
            location: None,
            deployment_location: None,
            purpose: None,
            test_type: None,
        }
    }

    /// Sets the test date.
    pub fn with_date(mut self, date: TestDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the test site coordinates.
    pub fn with_location(mut self, location: Coordinates) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the deployment site label.
    pub fn with_deployment_location(mut self, label: impl Into<String>) -> Self {
        self.deployment_location = Some(label.into());
        self
    }

    /// Sets the stated purpose.
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Sets the deployment type.
    pub fn with_test_type(mut self, test_type: impl Into<String>) -> Self {
        self.test_type = Some(test_type.into());
        self
    }

    /// Returns the year of the test, if dated.
    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    /// Returns true if date and location are both present.
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.location.is_some()
    }
}

impl YieldSample for TestRecord {
    fn yield_lower(&self) -> f64 {
        self.yield_lower
    }

    fn yield_upper(&self) -> f64 {
        self.yield_upper
    }

    fn weapon_name(&self) -> &str {
        &self.name
    }

    fn source_country(&self) -> &str {
        self.country.as_str()
    }
}
