//! Country selection shared by the dataset views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use kiloton_core::{Country, YieldSample};

use crate::error::AnalyticsError;

/// Which countries a view covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CountryFilter {
    /// Every country in the dataset.
    #[default]
    All,
    /// A single country.
    Only(Country),
}

impl CountryFilter {
    /// Keyword that selects every country.
    pub const ALL_KEYWORD: &'static str = "ALL";

    /// Returns true if `record` passes the filter.
    pub fn matches<R: YieldSample + ?Sized>(&self, record: &R) -> bool {
        match self {
            Self::All => true,
            Self::Only(country) => record.source_country() == country.as_str(),
        }
    }

    /// Returns the selected country, or `None` for [`CountryFilter::All`].
    #[must_use]
    pub fn country(&self) -> Option<&Country> {
        match self {
            Self::All => None,
            Self::Only(country) => Some(country),
        }
    }

    /// Returns the selector label (`"ALL"` or the country code).
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL_KEYWORD,
            Self::Only(country) => country.as_str(),
        }
    }
}

impl fmt::Display for CountryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All Countries"),
            Self::Only(country) => write!(f, "{country}"),
        }
    }
}

impl FromStr for CountryFilter {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_KEYWORD) {
            return Ok(Self::All);
        }
        Ok(Self::Only(Country::new(s)?))
    }
}

impl TryFrom<String> for CountryFilter {
    type Error = AnalyticsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CountryFilter> for String {
    fn from(filter: CountryFilter) -> Self {
        filter.label().to_string()
    }
}

impl From<Country> for CountryFilter {
    fn from(country: Country) -> Self {
        Self::Only(country)
    }
}
