//! Domain types for nuclear test records.
//!
//! - [`TestRecord`]: One row of the historical test dataset
//! - [`Country`]: Country credited with a test
//! - [`TestDate`]: Calendar date a test was conducted
//! - [`Coordinates`]: Latitude/longitude of the test site

mod country;
mod date;
mod location;
mod record;

pub use country::Country;
pub use date::TestDate;
pub use location::Coordinates;
pub use record::TestRecord;
