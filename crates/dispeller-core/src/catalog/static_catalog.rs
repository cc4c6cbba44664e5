use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{ItemMetadataLookup, UNKNOWN_ITEM_NAME};
use crate::error::Result;
use crate::slot::CategoryFlags;

/// One row of the item sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub icon: u32,
    #[serde(default)]
    pub model_main: u64,
    #[serde(default)]
    pub dye_count: u8,
    /// Missing when the item has no valid equip slot category
    #[serde(default)]
    pub equip_slot: Option<CategoryFlags>,
}

/// Serialized catalog: item rows plus the ids storable in the armoire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub items: Vec<ItemRow>,
    #[serde(default)]
    pub armoire: Vec<u32>,
}

/// In-memory catalog backed by a JSON export of the item and cabinet sheets
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: HashMap<u32, ItemRow>,
    armoire: HashSet<u32>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(file: CatalogFile) -> Self {
        let mut catalog = Self::new();
        for row in file.items {
            catalog.insert(row);
        }
        catalog.armoire.extend(file.armoire);
        catalog
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&content)?;
        debug!(
            "Loaded catalog from {}: {} items, {} armoire entries",
            path.as_ref().display(),
            catalog.len(),
            catalog.armoire.len()
        );
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::from_file(file))
    }

    pub fn insert(&mut self, row: ItemRow) {
        self.items.insert(row.id, row);
    }

    pub fn mark_armoire(&mut self, item_id: u32) {
        self.armoire.insert(item_id);
    }

    pub fn get(&self, item_id: u32) -> Option<&ItemRow> {
        self.items.get(&item_id)
    }

    pub fn rows(&self) -> impl Iterator<Item = &ItemRow> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemMetadataLookup for StaticCatalog {
    fn model_main(&self, item_id: u32) -> Result<u64> {
        Ok(self.get(item_id).map_or(0, |row| row.model_main))
    }

    fn name(&self, item_id: u32) -> Result<String> {
        Ok(self
            .get(item_id)
            .map_or_else(|| UNKNOWN_ITEM_NAME.to_string(), |row| row.name.clone()))
    }

    fn icon(&self, item_id: u32) -> Result<u32> {
        Ok(self.get(item_id).map_or(0, |row| row.icon))
    }

    fn dye_count(&self, item_id: u32) -> Result<u8> {
        Ok(self.get(item_id).map_or(0, |row| row.dye_count))
    }

    fn slot_category_flags(&self, item_id: u32) -> Result<Option<CategoryFlags>> {
        Ok(self.get(item_id).and_then(|row| row.equip_slot))
    }

    fn is_armoire_eligible(&self, item_id: u32) -> Result<bool> {
        Ok(item_id != 0 && self.armoire.contains(&item_id))
    }
}
