//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "dispeller")]
#[command(about = "Find wardrobe items that share a visual model")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true, env = "DISPELLER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a saved wardrobe read for shared models
    Scan {
        /// Wardrobe dump (JSON)
        #[arg(short, long)]
        wardrobe: PathBuf,

        /// Item catalog (JSON)
        #[arg(long)]
        catalog: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Only show weapon groups
        #[arg(long)]
        weapons_only: bool,

        /// Only show clothing groups
        #[arg(long)]
        clothing_only: bool,
    },
    /// Decode a raw model value (decimal or 0x-prefixed hex)
    Decode { raw: String },
    /// List catalog items sharing a model with the given item
    Shared {
        /// Item catalog (JSON)
        #[arg(long)]
        catalog: PathBuf,

        item_id: u32,
    },
    /// Show or initialize the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration if none exists
    Init,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
