//! Timeline command implementation.
//!
//! Counts explosions per year, for every country or a single one.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use kiloton_analytics::filter::CountryFilter;
use kiloton_analytics::timeline::{explosions_per_year, Timeline, YearCount};

use crate::cli::OutputFormat;
use crate::commands::{parse_country, Context};
use crate::output::{print_header, print_info, print_output, print_single, KeyValue};

/// Arguments for the timeline command.
#[derive(Args, Debug)]
pub struct TimelineArgs {
    /// ALL or a country code such as USA, USSR, FRANCE, UK, CHINA
    #[arg(long)]
    pub country: Option<String>,
}

/// One year of the timeline listing.
#[derive(Debug, Serialize, Tabled)]
pub struct YearRow {
    #[tabled(rename = "Year")]
    pub year: i32,
    #[tabled(rename = "Explosions")]
    pub count: usize,
}

impl From<YearCount> for YearRow {
    fn from(point: YearCount) -> Self {
        Self {
            year: point.year,
            count: point.count,
        }
    }
}

/// Execute the timeline command.
///
/// In table mode a single-country timeline is followed by the all-countries
/// timeline for comparison.
pub fn execute(args: TimelineArgs, ctx: &Context) -> Result<()> {
    let filter = match args.country.as_deref() {
        Some(s) => parse_country(s)?,
        None => ctx.config.default_country.clone(),
    };

    let dataset = ctx.load_dataset()?;
    let timeline = explosions_per_year(dataset.records(), &filter);
    tracing::debug!(country = filter.label(), years = timeline.points.len(), "built timeline");

    match ctx.format {
        OutputFormat::Table => {
            print_timeline(&timeline, ctx)?;
            if timeline.is_empty() {
                let known: Vec<String> = dataset.countries().into_iter().map(String::from).collect();
                print_info(
                    &format!(
                        "No explosions recorded for {}. Countries in the data: {}",
                        filter.label(),
                        known.join(", ")
                    ),
                    ctx.quiet,
                );
            }
            if filter != CountryFilter::All {
                print_timeline(&explosions_per_year(dataset.records(), &CountryFilter::All), ctx)?;
            }
            Ok(())
        }
        OutputFormat::Json => print_single(&timeline),
        OutputFormat::Csv | OutputFormat::Minimal => print_output(&rows(&timeline), ctx.format),
    }
}

fn rows(timeline: &Timeline) -> Vec<YearRow> {
    timeline.points.iter().copied().map(YearRow::from).collect()
}

fn print_timeline(timeline: &Timeline, ctx: &Context) -> Result<()> {
    print_header(&timeline.title(), ctx.quiet);
    print_output(&rows(timeline), ctx.format)?;
    if !ctx.quiet {
        print_output(&summary(timeline), ctx.format)?;
        println!("{}", timeline.caption());
    }
    Ok(())
}

fn summary(timeline: &Timeline) -> Vec<KeyValue> {
    let mut rows = vec![KeyValue::new("Total", timeline.total().to_string())];

    if let Some((first, last)) = timeline.span() {
        rows.push(KeyValue::new("Years", format!("{first}-{last}")));
    }
    if let Some(YearCount { year, count }) = timeline.peak() {
        rows.push(KeyValue::new("Peak", format!("{year} ({count})")));
    }

    rows
}
