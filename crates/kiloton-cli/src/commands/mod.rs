//! CLI command implementations.

pub mod config;
pub mod countries;
pub mod map;
pub mod records;
pub mod timeline;
pub mod yields;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use countries::CountriesArgs;
pub use map::MapArgs;
pub use records::RecordsArgs;
pub use timeline::TimelineArgs;
pub use yields::YieldsArgs;

use std::path::PathBuf;

use kiloton_analytics::dataset::{prepare, Dataset};
use kiloton_analytics::filter::CountryFilter;
use kiloton_core::Country;
use kiloton_ext_file::CsvTestSource;

use crate::cli::OutputFormat;
use crate::config::KilotonConfig;
use crate::error::{CliError, CliResult};
use crate::output::print_info;

/// Settings shared by every command, after flags and config are merged.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective output format.
    pub format: OutputFormat,
    /// Effective data file.
    pub data_file: PathBuf,
    /// Resolved configuration.
    pub config: KilotonConfig,
    /// File the configuration came from, if any.
    pub config_source: Option<PathBuf>,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl Context {
    /// Loads the data file and prepares it for analysis.
    pub fn load_dataset(&self) -> anyhow::Result<Dataset> {
        let report = CsvTestSource::new(&self.data_file)
            .drop_incomplete(self.config.drop_incomplete)
            .load()?;

        tracing::info!(
            records = report.records.len(),
            dropped = report.dropped,
            "loaded {}",
            self.data_file.display()
        );

        if report.dropped > 0 && self.format == OutputFormat::Table {
            print_info(
                &format!("Dropped {} incomplete rows", report.dropped),
                self.quiet,
            );
        }

        Ok(prepare(report.records))
    }
}

/// Parses a `--country` value.
pub fn parse_country(s: &str) -> CliResult<CountryFilter> {
    s.parse().map_err(|_| {
        let choices: Vec<String> = Country::dashboard_choices().into_iter().map(String::from).collect();
        CliError::InvalidCountry {
            value: s.to_string(),
            choices: choices.join(", "),
        }
    })
}

/// Validates a map zoom level.
pub fn validate_zoom(zoom: f64) -> CliResult<f64> {
    if !(0.0..=20.0).contains(&zoom) {
        return Err(CliError::InvalidZoom(zoom));
    }
    Ok(zoom)
}
