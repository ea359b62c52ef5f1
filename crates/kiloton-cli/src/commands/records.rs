//! Records command implementation.
//!
//! Lists the prepared dataset, largest upper-bound yield first.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use kiloton_analytics::filter::CountryFilter;
use kiloton_core::TestRecord;

use crate::cli::OutputFormat;
use crate::commands::{parse_country, Context};
use crate::output::{print_header, print_output};

/// Arguments for the records command.
#[derive(Args, Debug)]
pub struct RecordsArgs {
    /// Show at most this many records
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only show tests by this country (ALL for every country)
    #[arg(long)]
    pub country: Option<String>,
}

/// One row of the records listing.
#[derive(Debug, Serialize, Tabled)]
pub struct RecordRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Lower (kt)")]
    pub yield_lower: f64,
    #[tabled(rename = "Upper (kt)")]
    pub yield_upper: f64,
    #[tabled(rename = "Site")]
    pub site: String,
    #[tabled(rename = "Type")]
    pub test_type: String,
}

impl From<&TestRecord> for RecordRow {
    fn from(record: &TestRecord) -> Self {
        Self {
            name: record.name.clone(),
            country: record.country.to_string(),
            date: record.date.map(|d| d.to_string()).unwrap_or_default(),
            yield_lower: record.yield_lower,
            yield_upper: record.yield_upper,
            site: record.deployment_location.clone().unwrap_or_default(),
            test_type: record.test_type.clone().unwrap_or_default(),
        }
    }
}

/// Execute the records command.
pub fn execute(args: RecordsArgs, ctx: &Context) -> Result<()> {
    let filter = match args.country.as_deref() {
        Some(s) => parse_country(s)?,
        None => CountryFilter::All,
    };

    let dataset = ctx.load_dataset()?;
    let selected = dataset.filter_country(&filter);
    let limit = args.limit.unwrap_or(selected.len());

    let rows: Vec<RecordRow> = selected
        .into_iter()
        .take(limit)
        .map(RecordRow::from)
        .collect();

    print_header(
        &format!("Nuclear Tests ({} of {})", rows.len(), dataset.len()),
        ctx.quiet || ctx.format != OutputFormat::Table,
    );
    print_output(&rows, ctx.format)
}
