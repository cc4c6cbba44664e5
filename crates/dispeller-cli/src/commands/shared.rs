//! Shared command: list every catalog item that looks like a given item.

use std::path::Path;

use anyhow::{Context, Result, bail};
use dispeller_core::{
    ItemMetadataLookup, ModelDescriptor, StaticCatalog, find_shared_model_items,
};

pub fn run(catalog: &Path, item_id: u32) -> Result<()> {
    let catalog = StaticCatalog::load(catalog)
        .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;

    let Some(target) = catalog.get(item_id) else {
        bail!("Item {} is not in the catalog", item_id);
    };

    let model = ModelDescriptor::decode(target.model_main);
    let slot = catalog.slot_category(item_id)?;
    println!("{} [{}] model {}", target.name, slot, model.id_string());

    let shared = find_shared_model_items(&catalog, item_id);
    for row in shared.iter().filter(|row| row.id != item_id) {
        println!("  #{:<6} {}", row.id, row.name);
    }
    if shared.len() <= 1 {
        println!("  (no other item shares this model)");
    }
    Ok(())
}
