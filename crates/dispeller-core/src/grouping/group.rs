use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::slot::SlotCategory;

/// A wardrobe item that survived grouping, joined with catalog metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedItem {
    pub item_id: u32,
    pub name: String,
    pub icon_id: u32,
    /// Wardrobe slot index the item was read from
    pub slot: u32,
    pub model_id: String,
    pub dye_count: u8,
    pub can_go_in_armoire: bool,
}

/// All shared-model items of one equipment slot.
///
/// Items are sorted by model id, so each shared model forms a contiguous run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedModelGroup {
    pub slot_category: SlotCategory,
    pub items: Vec<EnrichedItem>,
}

impl SharedModelGroup {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in this group rendering with `model_id`
    pub fn matching_count(&self, model_id: &str) -> usize {
        self.items
            .iter()
            .filter(|item| item.model_id == model_id)
            .count()
    }

    /// Contiguous runs of items sharing one model
    pub fn clusters(&self) -> impl Iterator<Item = &[EnrichedItem]> {
        self.items.chunk_by(|a, b| a.model_id == b.model_id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub total_items: usize,
    pub group_count: usize,
}

impl ScanSummary {
    pub fn from_groups(groups: &[SharedModelGroup]) -> Self {
        Self {
            total_items: groups.iter().map(SharedModelGroup::len).sum(),
            group_count: groups.len(),
        }
    }
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found {} items with shared models across {} slot categories",
            self.total_items, self.group_count
        )
    }
}

/// Result of one completed scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub groups: Vec<SharedModelGroup>,
    pub summary: ScanSummary,
    /// Whether the wardrobe was re-read for this scan, or the cache was used
    pub refreshed: bool,
    pub scanned_at: DateTime<Local>,
}

impl ScanReport {
    pub fn new(groups: Vec<SharedModelGroup>, refreshed: bool) -> Self {
        Self {
            summary: ScanSummary::from_groups(&groups),
            groups,
            refreshed,
            scanned_at: Local::now(),
        }
    }
}
