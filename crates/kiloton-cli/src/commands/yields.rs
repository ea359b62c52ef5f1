//! Yields command implementation.
//!
//! Reports the smallest test by lower-bound yield and the largest by
//! upper-bound yield.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use kiloton_analytics::extremes::{ExtremesResult, YieldExtreme};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_kilotons, print_output, print_single};

const KILOTON_NOTE: &str = "A kiloton is a unit of explosive energy, not a unit of mass. \
It's defined as the amount of energy released by 1,000 tons of TNT when detonated.";

/// Arguments for the yields command.
#[derive(Args, Debug)]
pub struct YieldsArgs {
    /// Omit the kiloton definition from text output
    #[arg(long)]
    pub no_note: bool,
}

/// One end of the yield range.
#[derive(Debug, Serialize, Tabled)]
pub struct ExtremeRow {
    #[tabled(rename = "Extreme")]
    pub extreme: &'static str,
    #[tabled(rename = "Name")]
    pub weapon: String,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Yield (kt)")]
    pub yield_kt: f64,
}

impl ExtremeRow {
    fn new(extreme: &'static str, value: &YieldExtreme) -> Self {
        Self {
            extreme,
            weapon: value.weapon.clone(),
            country: value.country.clone(),
            yield_kt: value.yield_kt,
        }
    }
}

/// Execute the yields command.
pub fn execute(args: YieldsArgs, ctx: &Context) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let result = dataset.extremes()?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", sentence("smallest", &result.min));
            println!("{}", sentence("largest", &result.max));
            if !(args.no_note || ctx.quiet) {
                println!();
                println!("{KILOTON_NOTE}");
            }
            Ok(())
        }
        OutputFormat::Json => print_single(&result),
        OutputFormat::Csv | OutputFormat::Minimal => print_output(&rows(&result), ctx.format),
    }
}

fn rows(result: &ExtremesResult) -> Vec<ExtremeRow> {
    vec![
        ExtremeRow::new("min", &result.min),
        ExtremeRow::new("max", &result.max),
    ]
}

fn sentence(which: &str, value: &YieldExtreme) -> String {
    format!(
        "The {which} nuclear test was {} with a yield of {}, conducted by {}.",
        value.weapon,
        format_kilotons(value.yield_kt).bold(),
        value.country
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extreme(weapon: &str, country: &str, yield_kt: f64) -> YieldExtreme {
        YieldExtreme {
            yield_kt,
            weapon: weapon.to_string(),
            country: country.to_string(),
        }
    }

    #[test]
    fn test_sentence() {
        colored::control::set_override(false);
        let text = sentence("largest", &extreme("Tsar Bomba", "USSR", 50_000.0));
        assert_eq!(
            text,
            "The largest nuclear test was Tsar Bomba with a yield of 50000.0 kilotons, conducted by USSR."
        );
    }

    #[test]
    fn test_rows() {
        let result = ExtremesResult {
            min: extreme("A", "USA", 0.0),
            max: extreme("B", "USSR", 50_000.0),
        };

        let rows = rows(&result);
        assert_eq!(rows[0].extreme, "min");
        assert_eq!(rows[1].weapon, "B");
    }
}
