//! Core traits.
//!
//! Analytics are written against these traits rather than the concrete
//! [`TestRecord`](crate::types::TestRecord), so callers can feed their own
//! row types without converting.

/// The fields of a test row that yield analytics read.
///
/// Yields are in kilotons of TNT equivalent. Implementations must return
/// numeric values; callers are responsible for rejecting or dropping rows
/// whose yields were missing at the source.
pub trait YieldSample {
    /// Lower-bound explosive yield in kilotons.
    fn yield_lower(&self) -> f64;

    /// Upper-bound explosive yield in kilotons.
    fn yield_upper(&self) -> f64;

    /// Name of the device or test.
    fn weapon_name(&self) -> &str;

    /// Country credited with the test.
    fn source_country(&self) -> &str;

    /// Returns true if the upper-bound yield is strictly positive.
    ///
    /// Rows failing this are kept in the dataset but skipped by the
    /// extremes scan.
    fn has_valid_yield(&self) -> bool {
        self.yield_upper() > 0.0
    }
}

impl<T: YieldSample + ?Sized> YieldSample for &T {
    fn yield_lower(&self) -> f64 {
        (**self).yield_lower()
    }

    fn yield_upper(&self) -> f64 {
        (**self).yield_upper()
    }

    fn weapon_name(&self) -> &str {
        (**self).weapon_name()
    }

    fn source_country(&self) -> &str {
        (**self).source_country()
    }

    fn has_valid_yield(&self) -> bool {
        (**self).has_valid_yield()
    }
}
