//! Map command implementation.
//!
//! With `--format json` the output is a GeoJSON `FeatureCollection` that any
//! map viewer can load. Table output summarizes the view; CSV lists the points.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use kiloton_analytics::map::{MapPoint, MapView};

use crate::cli::OutputFormat;
use crate::commands::{validate_zoom, Context};
use crate::output::{print_header, print_output, print_single, KeyValue};

/// Arguments for the map command.
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Initial zoom level, 0 to 20 (defaults to the config value)
    #[arg(short, long)]
    pub zoom: Option<f64>,
}

/// One explosion site.
#[derive(Debug, Serialize, Tabled)]
pub struct PointRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Latitude")]
    pub lat: f64,
    #[tabled(rename = "Longitude")]
    pub lon: f64,
    #[tabled(rename = "Upper (kt)")]
    pub yield_upper: f64,
}

impl From<&MapPoint> for PointRow {
    fn from(point: &MapPoint) -> Self {
        Self {
            name: point.name.clone(),
            country: point.country.clone(),
            lat: point.lat,
            lon: point.lon,
            yield_upper: point.yield_upper,
        }
    }
}

/// Execute the map command.
pub fn execute(args: MapArgs, ctx: &Context) -> Result<()> {
    let zoom = validate_zoom(args.zoom.unwrap_or(ctx.config.map_zoom))?;

    let dataset = ctx.load_dataset()?;
    let view = MapView::from_records(dataset.records(), zoom);
    tracing::debug!(points = view.points.len(), "built map view");

    match ctx.format {
        OutputFormat::Json => print_single(&view.to_geojson()),
        OutputFormat::Csv | OutputFormat::Minimal => {
            let rows: Vec<PointRow> = view.points.iter().map(PointRow::from).collect();
            print_output(&rows, ctx.format)
        }
        OutputFormat::Table => {
            print_header("Explosion Sites", ctx.quiet);
            print_output(&summary(&view), ctx.format)
        }
    }
}

fn summary(view: &MapView) -> Vec<KeyValue> {
    let mut rows = vec![KeyValue::new("Sites", view.points.len().to_string())];

    if let Some(center) = view.center {
        rows.push(KeyValue::new("Center Latitude", format!("{:.4}", center.lat)));
        rows.push(KeyValue::new("Center Longitude", format!("{:.4}", center.lon)));
    }
    rows.push(KeyValue::new("Zoom", view.zoom.to_string()));
    rows.push(KeyValue::new("Pitch", view.pitch.to_string()));

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiloton_core::{Coordinates, Country, TestRecord};

    #[test]
    fn test_summary_centers_on_mean() {
        let usa = Country::new("USA").unwrap();
        let records = vec![
            TestRecord::new("A", usa.clone(), 1.0, 1.0).with_location(Coordinates::new(10.0, 20.0).unwrap()),
            TestRecord::new("B", usa, 1.0, 1.0).with_location(Coordinates::new(30.0, 40.0).unwrap()),
        ];

        let view = MapView::from_records(&records, 1.0);
        let rows = summary(&view);
        assert_eq!(rows[0].value, "2");
        assert_eq!(rows[1].value, "20.0000");
        assert_eq!(rows[2].value, "30.0000");
        assert_eq!(rows[3].value, "1");
    }
}
