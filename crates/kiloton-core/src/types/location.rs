//! Geographic location of a test site.

use serde::{Deserialize, Serialize};

use crate::error::{KilotonError, KilotonResult};

/// Latitude/longitude pair in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, -90 to 90.
    pub lat: f64,
    /// Longitude in degrees, -180 to 180.
    pub lon: f64,
}

impl Coordinates {
    /// Creates validated coordinates.
    ///
    /// # Errors
    ///
    /// Returns `KilotonError::InvalidCoordinate` if either axis is out of
    /// range or not finite.
    pub fn new(lat: f64, lon: f64) -> KilotonResult<Self> {
        check_axis("latitude", lat, 90.0)?;
        check_axis("longitude", lon, 180.0)?;
        Ok(Self { lat, lon })
    }

    /// Returns the pair in GeoJSON order (`[lon, lat]`).
    #[must_use]
    pub fn to_lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

fn check_axis(axis: &'static str, value: f64, bound: f64) -> KilotonResult<()> {
    if value.is_finite() && (-bound..=bound).contains(&value) {
        Ok(())
    } else {
        Err(KilotonError::InvalidCoordinate {
            axis,
            value,
            min: -bound,
            max: bound,
        })
    }
}
