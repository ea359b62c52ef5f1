//! Kiloton CLI - Command-line interface for historical nuclear test analytics.
//!
//! # Usage
//!
//! ```bash
//! # Smallest and largest test by yield
//! kiloton --data nuclear_explosions.csv yields
//!
//! # Explosions per year for one country
//! kiloton timeline --country USSR
//!
//! # Share of explosions by country, as JSON
//! kiloton countries --format json
//!
//! # Explosion sites as GeoJSON
//! kiloton map --format json > sites.geojson
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::KilotonConfig;

const LOG_TARGETS: [&str; 4] = ["kiloton", "kiloton_core", "kiloton_analytics", "kiloton_ext_file"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries command output only
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = LOG_TARGETS.iter().map(|t| format!("{t}={level}")).collect();
        EnvFilter::new(format!("warn,{}", directives.join(",")))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (config, config_source) = KilotonConfig::resolve(cli.config.as_deref())?;
    if let Some(path) = &config_source {
        tracing::debug!("using config {}", path.display());
    }

    let ctx = Context {
        format: cli.format.unwrap_or(config.format),
        data_file: cli.data.clone().unwrap_or_else(|| config.data_file.clone()),
        config,
        config_source,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Records(args) => commands::records::execute(args, &ctx)?,
        Commands::Timeline(args) => commands::timeline::execute(args, &ctx)?,
        Commands::Countries(args) => commands::countries::execute(args, &ctx)?,
        Commands::Map(args) => commands::map::execute(args, &ctx)?,
        Commands::Yields(args) => commands::yields::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
