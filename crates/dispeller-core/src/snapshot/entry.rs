use serde::{Deserialize, Serialize};

/// One occupied wardrobe slot, as read from game memory.
///
/// The in-memory name field is stale after the wardrobe is rearranged, so it
/// is not captured; names come from the item catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawWardrobeEntry {
    pub slot: u32,
    pub item_id: u32,
    #[serde(default)]
    pub icon_id: u32,
    #[serde(default)]
    pub dye1: u8,
    #[serde(default)]
    pub dye2: u8,
}

impl RawWardrobeEntry {
    pub fn new(slot: u32, item_id: u32) -> Self {
        Self {
            slot,
            item_id,
            ..Default::default()
        }
    }

    /// Deduplication identity
    pub fn key(&self) -> (u32, u32) {
        (self.slot, self.item_id)
    }

    /// Empty wardrobe slots carry item id 0
    pub fn is_empty_slot(&self) -> bool {
        self.item_id == 0
    }
}
