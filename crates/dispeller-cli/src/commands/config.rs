//! Config command: inspect or create the config file.

use std::path::Path;

use anyhow::{Context, Result};
use dispeller_core::Config;

use crate::cli::ConfigAction;

pub fn run(action: ConfigAction, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            println!("# {}", path.display());
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init => {
            if path.exists() {
                println!("Config already exists: {}", path.display());
                return Ok(());
            }
            Config::default()
                .save(path)
                .with_context(|| format!("Failed to write config {}", path.display()))?;
            println!("Config written to: {}", path.display());
        }
    }
    Ok(())
}
