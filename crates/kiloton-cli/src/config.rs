//! CLI configuration.
//!
//! Loaded from a TOML file. Lookup order: `--config`, then
//! `<config dir>/kiloton/config.toml` if it exists, then built-in defaults.
//! Command-line flags override file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use kiloton_analytics::filter::CountryFilter;
use kiloton_analytics::map::DEFAULT_ZOOM;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KilotonConfig {
    /// Nuclear explosions CSV
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Drop rows with empty required fields instead of failing
    #[serde(default = "default_true")]
    pub drop_incomplete: bool,

    /// Country selection for `timeline` when `--country` is not given
    #[serde(default)]
    pub default_country: CountryFilter,

    /// Initial zoom for `map`
    #[serde(default = "default_zoom")]
    pub map_zoom: f64,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("nuclear_explosions.csv")
}

fn default_true() -> bool {
    true
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

impl Default for KilotonConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            format: OutputFormat::default(),
            drop_incomplete: true,
            default_country: CountryFilter::All,
            map_zoom: default_zoom(),
        }
    }
}

impl KilotonConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let config_error = |message: String| CliError::Config {
            path: path.to_path_buf(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        toml::from_str(&content).map_err(|e| config_error(e.to_string()))
    }

    /// Default config file location, whether or not it exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join("kiloton").join("config.toml"))
    }

    /// Resolves the effective configuration.
    ///
    /// An explicit path must exist. The default path is used only if present.
    /// Returns the config and the file it came from, if any.
    pub fn resolve(explicit: Option<&Path>) -> CliResult<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        match Self::default_path().filter(|p| p.is_file()) {
            Some(path) => Ok((Self::from_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }
}
