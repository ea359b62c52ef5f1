//! Config command implementation.
//!
//! Shows the effective configuration and where it is read from.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::config::KilotonConfig;
use crate::output::{print_header, print_info, print_output, print_single, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Path => path(ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let mut effective = ctx.config.clone();
    effective.data_file.clone_from(&ctx.data_file);
    effective.format = ctx.format;

    match ctx.format {
        OutputFormat::Json => print_single(&effective),
        OutputFormat::Table => {
            print_header("Configuration", ctx.quiet);
            print_output(&settings(&effective), ctx.format)?;
            match &ctx.config_source {
                Some(path) => print_info(&format!("Loaded from {}", path.display()), ctx.quiet),
                None => print_info("Using built-in defaults", ctx.quiet),
            }
            Ok(())
        }
        OutputFormat::Csv | OutputFormat::Minimal => print_output(&settings(&effective), ctx.format),
    }
}

fn path(ctx: &Context) -> Result<()> {
    let path = ctx
        .config_source
        .clone()
        .or_else(KilotonConfig::default_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({
            "path": path,
            "exists": path.is_file(),
        })),
        _ => {
            println!("{}", path.display());
            if !path.is_file() {
                print_info("File does not exist; built-in defaults apply", ctx.quiet);
            }
            Ok(())
        }
    }
}

fn settings(config: &KilotonConfig) -> Vec<KeyValue> {
    vec![
        KeyValue::new("data_file", config.data_file.display().to_string()),
        KeyValue::new("format", format!("{:?}", config.format).to_lowercase()),
        KeyValue::new("drop_incomplete", config.drop_incomplete.to_string()),
        KeyValue::new("default_country", config.default_country.label()),
        KeyValue::new("map_zoom", config.map_zoom.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let rows = settings(&KilotonConfig::default());
        let get = |key: &str| rows.iter().find(|r| r.key == key).map(|r| r.value.clone());

        assert_eq!(get("data_file").as_deref(), Some("nuclear_explosions.csv"));
        assert_eq!(get("format").as_deref(), Some("table"));
        assert_eq!(get("default_country").as_deref(), Some("ALL"));
        assert_eq!(get("map_zoom").as_deref(), Some("1"));
    }
}
