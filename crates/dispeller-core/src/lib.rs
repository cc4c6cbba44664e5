//! # dispeller-core
//!
//! Core library for finding wardrobe items that share a visual model.
//!
//! This crate provides:
//! - Packed model descriptor decoding and equivalence
//! - Equipment slot classification from catalog flags
//! - A thread-safe snapshot cache of wardrobe contents
//! - Shared-model grouping with catalog enrichment
//! - Scan orchestration and display filters

pub mod catalog;
pub mod config;
pub mod error;
pub mod grouping;
pub mod model;
pub mod scanner;
pub mod slot;
pub mod snapshot;

pub use catalog::{
    CatalogFile, ItemMetadataLookup, ItemRow, StaticCatalog, UNKNOWN_ITEM_NAME,
    find_shared_model_items,
};
pub use config::Config;
pub use error::{Error, Result};
pub use grouping::{
    DisplayFilter, EnrichedItem, GroupKey, GroupingEngine, ScanReport, ScanSummary,
    SharedModelGroup, dedup_entries,
};
pub use model::ModelDescriptor;
pub use scanner::{ScanOutcome, Scanner};
pub use slot::{CategoryFlags, SlotCategory, SlotKind};
pub use snapshot::{
    RawWardrobeEntry, SnapshotStore, SourceState, Unavailable, WardrobeDump, WardrobeSource,
};
