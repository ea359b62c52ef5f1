//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{ConfigArgs, CountriesArgs, MapArgs, RecordsArgs, TimelineArgs, YieldsArgs};

/// Kiloton - Historical nuclear test analytics CLI
#[derive(Parser)]
#[command(name = "kiloton")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the config file's format, then table)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to the nuclear explosions CSV
    #[arg(short, long, env = "KILOTON_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long, env = "KILOTON_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the prepared dataset, largest upper-bound yield first
    Records(RecordsArgs),

    /// Count explosions per year, for all countries or one
    Timeline(TimelineArgs),

    /// Show each country's share of all explosions
    Countries(CountriesArgs),

    /// Show explosion sites (GeoJSON with --format json)
    Map(MapArgs),

    /// Report the smallest and largest test by yield
    Yields(YieldsArgs),

    /// Inspect configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
