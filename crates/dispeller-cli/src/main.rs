use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command};
use dispeller_core::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("dispeller={}", level).parse()?)
                .add_directive(format!("dispeller_core={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Scan {
            wardrobe,
            catalog,
            format,
            weapons_only,
            clothing_only,
        } => {
            let mut config = load_config(&resolve_config_path(cli.config)?);
            config.display.show_only_weapons |= weapons_only;
            config.display.show_only_clothing |= clothing_only;
            commands::scan::run(&wardrobe, &catalog, format, &config)
        }
        Command::Decode { raw } => commands::decode::run(&raw),
        Command::Shared { catalog, item_id } => commands::shared::run(&catalog, item_id),
        Command::Config { action } => {
            commands::config::run(action, &resolve_config_path(cli.config)?)
        }
    }
}

/// Only commands that read the config need the user config directory
fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default_config_path(),
    }
}

fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(dir.join("dispeller").join("config.toml"))
}

/// Broken configs are reported and replaced by defaults
fn load_config(path: &Path) -> Config {
    match Config::load_or_default(path) {
        Ok(config) => {
            debug!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}
