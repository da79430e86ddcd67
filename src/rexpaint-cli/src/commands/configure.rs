//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting rexpaint CLI defaults.

use crate::config::Config;
use anyhow::Result;
use rexpaint::Format;

/// Handle the configure command
pub fn handle(format: Option<Format>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if let Some(format) = format {
        config.set_format(format);
        config.save()?;
        tracing::debug!(%format, "saved default format");
        println!("Default format configured: {}", format);
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match config.format {
        Some(format) => println!("Format: {}", format),
        None => println!("Format: {} (default)", Format::default()),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn show_usage() {
    println!("Usage: rexpaint configure --format <legacy|versioned|detect>");
    println!("       rexpaint configure --show");
}
