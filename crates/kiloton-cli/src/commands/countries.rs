//! Countries command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use kiloton_analytics::distribution::{by_country, CountryShare};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_share, print_header, print_output, print_single};

/// Arguments for the countries command.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Print full country names instead of dataset codes
    #[arg(long)]
    pub full_names: bool,
}

/// One country of the distribution listing.
#[derive(Debug, Serialize, Tabled)]
pub struct ShareRow {
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Explosions")]
    pub count: usize,
    #[tabled(rename = "Share")]
    pub share: String,
}

impl ShareRow {
    fn new(share: &CountryShare, full_names: bool) -> Self {
        let country = if full_names {
            share.country.full_name().to_string()
        } else {
            share.country.to_string()
        };

        Self {
            country,
            count: share.count,
            share: format_share(share.share_pct),
        }
    }
}

/// Execute the countries command.
pub fn execute(args: CountriesArgs, ctx: &Context) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let distribution = by_country(dataset.records());

    if ctx.format == OutputFormat::Json {
        return print_single(&distribution);
    }

    let rows: Vec<ShareRow> = distribution
        .shares
        .iter()
        .map(|s| ShareRow::new(s, args.full_names))
        .collect();

    print_header(
        &format!("Explosions by Country ({} total)", distribution.total),
        ctx.quiet || ctx.format != OutputFormat::Table,
    );
    print_output(&rows, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiloton_core::Country;

    #[test]
    fn test_share_row() {
        let share = CountryShare {
            country: Country::new("USSR").unwrap(),
            count: 715,
            share_pct: 35.045,
        };

        let row = ShareRow::new(&share, false);
        assert_eq!(row.country, "USSR");
        assert_eq!(row.share, "35.0%");

        let row = ShareRow::new(&share, true);
        assert_eq!(row.country, "Soviet Union");
    }
}
