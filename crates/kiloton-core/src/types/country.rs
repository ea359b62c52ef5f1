//! Country credited with a test.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{KilotonError, KilotonResult};

/// Country label as it appears in the dataset.
///
/// Labels are trimmed and upper-cased on construction so that `"usa"` and
/// `"USA "` compare equal. The dataset uses short upstream codes (`"UK"`,
/// `"USSR"`, `"PAKIST"`); [`Country::full_name`] expands the known ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Country(String);

impl Country {
    /// Countries offered by the dashboard's country selector, in display order.
    pub const DASHBOARD_CHOICES: [&'static str; 5] = ["USA", "USSR", "FRANCE", "UK", "CHINA"];

    /// Creates a country from a dataset label.
    ///
    /// # Errors
    ///
    /// Returns `KilotonError::InvalidCountry` if the label is blank.
    pub fn new(label: impl AsRef<str>) -> KilotonResult<Self> {
        let normalized = label.as_ref().trim().to_uppercase();
        if normalized.is_empty() {
            return Err(KilotonError::invalid_country("label is empty"));
        }
        Ok(Country(normalized))
    }

    /// Returns the normalized label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a readable name for known dataset codes, or the label itself.
    #[must_use]
    pub fn full_name(&self) -> &str {
        match self.0.as_str() {
            "USA" => "United States",
            "USSR" => "Soviet Union",
            "UK" => "United Kingdom",
            "FRANCE" => "France",
            "CHINA" => "China",
            "INDIA" => "India",
            "PAKIST" | "PAKISTAN" => "Pakistan",
            other => other,
        }
    }

    /// Returns the dashboard selector entries as countries.
    #[must_use]
    pub fn dashboard_choices() -> Vec<Country> {
        Self::DASHBOARD_CHOICES
            .iter()
            .map(|c| Country((*c).to_string()))
            .collect()
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Country {
    type Err = KilotonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::new(s)
    }
}

impl TryFrom<String> for Country {
    type Error = KilotonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Country::new(value)
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.0
    }
}

impl AsRef<str> for Country {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let a = Country::new(" usa ").unwrap();
        let b = Country::new("USA").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "USA");
    }

    #[test]
    fn test_blank_rejected() {
        assert!(Country::new("   ").is_err());
        assert!("".parse::<Country>().is_err());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Country::new("USSR").unwrap().full_name(), "Soviet Union");
        assert_eq!(Country::new("PAKIST").unwrap().full_name(), "Pakistan");
        assert_eq!(Country::new("ATLANTIS").unwrap().full_name(), "ATLANTIS");
    }

    #[test]
    fn test_dashboard_choices() {
        let choices = Country::dashboard_choices();
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[0].as_str(), "USA");
        assert_eq!(choices[4].as_str(), "CHINA");
    }

    #[test]
    fn test_serde_roundtrip_normalizes() {
        let country: Country = serde_json::from_str("\"france\"").unwrap();
        assert_eq!(country.as_str(), "FRANCE");
        assert_eq!(serde_json::to_string(&country).unwrap(), "\"FRANCE\"");
        assert!(serde_json::from_str::<Country>("\"\"").is_err());
    }
}
