//! Scan command: group a saved wardrobe read by shared model.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use dispeller_core::{
    Config, ScanOutcome, Scanner, SharedModelGroup, SnapshotStore, StaticCatalog, WardrobeDump,
};
use tracing::error;

use crate::cli::OutputFormat;

pub fn run(wardrobe: &Path, catalog: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let outcome = scan_files(wardrobe, catalog, config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => print!("{}", render_text(&outcome)),
    }
    Ok(())
}

/// Load both files and run one scan over them
pub fn scan_files(wardrobe: &Path, catalog: &Path, config: &Config) -> Result<ScanOutcome> {
    let dump = WardrobeDump::load(wardrobe)
        .with_context(|| format!("Failed to load wardrobe dump {}", wardrobe.display()))?;
    let catalog = StaticCatalog::load(catalog)
        .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;

    let scanner =
        Scanner::new(Arc::new(SnapshotStore::new()), catalog).with_filter(config.display);

    match scanner.scan(&dump) {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            error!("Error during wardrobe scan: {}", e);
            Err(e).context("Scan failed")
        }
    }
}

/// Human-readable listing: one section per slot, a blank line between models
pub fn render_text(outcome: &ScanOutcome) -> String {
    let mut out = format!("{}\n", outcome.message());

    if let Some(report) = outcome.report() {
        for group in &report.groups {
            out.push('\n');
            out.push_str(&render_group(group));
        }
    }
    out
}

fn render_group(group: &SharedModelGroup) -> String {
    let mut out = format!(
        "{} ({} items) [{}]\n",
        group.slot_category,
        group.len(),
        group.slot_category.kind()
    );

    for (i, cluster) in group.clusters().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "  model {} - {} matching items\n",
            cluster[0].model_id,
            cluster.len()
        ));
        for item in cluster {
            let mut notes = Vec::new();
            if item.dye_count > 0 {
                let plural = if item.dye_count > 1 { "s" } else { "" };
                notes.push(format!("{} dye slot{}", item.dye_count, plural));
            }
            if item.can_go_in_armoire {
                notes.push("armoire".to_string());
            }

            out.push_str(&format!("    #{:<6} {}", item.item_id, item.name));
            if !notes.is_empty() {
                out.push_str(&format!(" ({})", notes.join(", ")));
            }
            out.push('\n');
        }
    }
    out
}
