//! # Kiloton Analytics
//!
//! Summaries over historical nuclear test records.
//!
//! - **Extremes**: smallest test by lower-bound yield, largest by upper-bound yield
//! - **Dataset**: the prepared table every view starts from
//! - **Timeline**: explosions per year, for all countries or one
//! - **Distribution**: explosions per country with percentage shares
//! - **Map**: site points, mean-centered view, GeoJSON export
//!
//! ## Usage
//!
//! ```rust
//! use kiloton_analytics::prelude::*;
//! use kiloton_core::{Country, TestDate, TestRecord};
//!
//! let records = vec![
//!     TestRecord::new("Trinity", Country::new("USA").unwrap(), 18.0, 20.0)
//!         .with_date(TestDate::from_ymd(1945, 7, 16).unwrap()),
//!     TestRecord::new("RDS-1", Country::new("USSR").unwrap(), 22.0, 22.0)
//!         .with_date(TestDate::from_ymd(1949, 8, 29).unwrap()),
//! ];
//!
//! let dataset = prepare(records);
//! let extremes = dataset.extremes().unwrap();
//! assert_eq!(extremes.max.weapon, "RDS-1");
//!
//! let timeline = explosions_per_year(dataset.records(), &CountryFilter::All);
//! assert_eq!(timeline.total(), 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::{AnalyticsError, AnalyticsResult};

pub mod dataset;
pub mod distribution;
pub mod extremes;
pub mod filter;
pub mod map;
pub mod timeline;

/// Prelude module for convenient imports.
///
/// ```rust
/// use kiloton_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    pub use crate::dataset::{prepare, Dataset};
    pub use crate::distribution::{by_country, CountryDistribution, CountryShare};
    pub use crate::extremes::{find_yield_extremes, ExtremesResult, YieldExtreme, YieldExtremesFinder};
    pub use crate::filter::CountryFilter;
    pub use crate::map::{MapPoint, MapView, DEFAULT_ZOOM};
    pub use crate::timeline::{explosions_per_year, Timeline, YearCount};
}
