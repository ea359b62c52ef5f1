//! Map of explosion sites.
//!
//! Builds the data behind the site map: one point per located test, a view
//! centered on the mean latitude and longitude, and a GeoJSON export whose
//! `name` property carries the tooltip text.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use kiloton_core::{Coordinates, TestRecord};

/// Initial zoom of the site map.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// One explosion site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Name of the device or test.
    pub name: String,
    /// Country credited with the test.
    pub country: String,
    /// Upper-bound yield in kilotons.
    pub yield_upper: f64,
}

/// Site map view state and points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Mean position of all points; `None` when there are no points.
    pub center: Option<Coordinates>,
    /// Initial zoom level.
    pub zoom: f64,
    /// Camera pitch in degrees.
    pub pitch: f64,
    /// Explosion sites in record order.
    pub points: Vec<MapPoint>,
}

impl MapView {
    /// Builds a view over the located records. Records without coordinates
    /// are left off the map.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_records<'a, I>(records: I, zoom: f64) -> Self
    where
        I: IntoIterator<Item = &'a TestRecord>,
    {
        let points: Vec<MapPoint> = records
            .into_iter()
            .filter_map(|r| {
                let at = r.location?;
                Some(MapPoint {
                    lat: at.lat,
                    lon: at.lon,
                    name: r.name.clone(),
                    country: r.country.to_string(),
                    yield_upper: r.yield_upper,
                })
            })
            .collect();

        let center = if points.is_empty() {
            None
        } else {
            let n = points.len() as f64;
            Some(Coordinates {
                lat: points.iter().map(|p| p.lat).sum::<f64>() / n,
                lon: points.iter().map(|p| p.lon).sum::<f64>() / n,
            })
        };

        Self {
            center,
            zoom,
            pitch: 0.0,
            points,
        }
    }

    /// Exports the points as a GeoJSON `FeatureCollection`.
    #[must_use]
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .points
            .iter()
            .map(|p| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [p.lon, p.lat],
                    },
                    "properties": {
                        "name": p.name,
                        "country": p.country,
                        "yield_upper_kt": p.yield_upper,
                    },
                })
            })
            .collect();

        let mut collection = json!({
            "type": "FeatureCollection",
            "features": features,
        });

        if let Some(center) = self.center {
            collection["view"] = json!({
                "latitude": center.lat,
                "longitude": center.lon,
                "zoom": self.zoom,
                "pitch": self.pitch,
            });
        }

        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kiloton_core::Country;

    fn located(name: &str, lat: f64, lon: f64) -> TestRecord {
        TestRecord::new(name, Country::new("USA").unwrap(), 1.0, 2.0)
            .with_location(Coordinates::new(lat, lon).unwrap())
    }

    #[test]
    fn test_center_is_mean() {
        let records = vec![
            located("a", 10.0, 100.0),
            located("b", 30.0, -20.0),
            TestRecord::new("nowhere", Country::new("USA").unwrap(), 1.0, 2.0),
        ];

        let view = MapView::from_records(&records, DEFAULT_ZOOM);
        assert_eq!(view.points.len(), 2);
        let center = view.center.unwrap();
        assert_relative_eq!(center.lat, 20.0);
        assert_relative_eq!(center.lon, 40.0);
        assert_relative_eq!(view.pitch, 0.0);
    }

    #[test]
    fn test_empty_has_no_center() {
        let view = MapView::from_records(&Vec::<TestRecord>::new(), 3.0);
        assert!(view.center.is_none());
        assert_eq!(view.to_geojson()["features"], json!([]));
        assert!(view.to_geojson().get("view").is_none());
    }

    #[test]
    fn test_geojson_lon_lat_order() {
        let records = vec![located("Trinity", 33.68, -106.48)];
        let geo = MapView::from_records(&records, DEFAULT_ZOOM).to_geojson();

        assert_eq!(geo["type"], "FeatureCollection");
        let feature = &geo["features"][0];
        assert_eq!(feature["geometry"]["coordinates"], json!([-106.48, 33.68]));
        assert_eq!(feature["properties"]["name"], "Trinity");
        assert_eq!(geo["view"]["zoom"], json!(1.0));
    }
}
