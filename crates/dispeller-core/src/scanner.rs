//! User-triggered wardrobe scan.
//!
//! A scan refreshes the snapshot from the wardrobe if it is open, falls back
//! to the cached snapshot otherwise, and groups the result. Outcomes that
//! found nothing are reported separately from failures: a catalog failure is
//! an `Err`, never an empty report.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::ItemMetadataLookup;
use crate::error::Result;
use crate::grouping::{DisplayFilter, GroupingEngine, ScanReport};
use crate::snapshot::{SnapshotStore, WardrobeSource};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// Nothing cached and the wardrobe is not open
    NeverOpened,
    /// The wardrobe could not be re-read and the cached snapshot is empty
    CachedButEmpty,
    /// The wardrobe was read and holds no items
    ConfirmedEmpty,
    Completed(ScanReport),
}

impl ScanOutcome {
    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            Self::Completed(report) => Some(report),
            _ => None,
        }
    }

    /// One-line status for display
    pub fn message(&self) -> String {
        match self {
            Self::NeverOpened => {
                "The wardrobe hasn't been opened yet. Open it at least once, then scan again."
                    .to_string()
            }
            Self::CachedButEmpty => {
                "Using cached data, but the wardrobe appears empty. Open the wardrobe to refresh."
                    .to_string()
            }
            Self::ConfirmedEmpty => "The wardrobe is empty.".to_string(),
            Self::Completed(report) => format!("{}!", report.summary),
        }
    }
}

pub struct Scanner<L> {
    store: Arc<SnapshotStore>,
    engine: GroupingEngine<L>,
    filter: DisplayFilter,
}

impl<L: ItemMetadataLookup> Scanner<L> {
    pub fn new(store: Arc<SnapshotStore>, lookup: L) -> Self {
        Self {
            store,
            engine: GroupingEngine::new(lookup),
            filter: DisplayFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: DisplayFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    pub fn scan<S: WardrobeSource + ?Sized>(&self, source: &S) -> Result<ScanOutcome> {
        let cached_before = self.store.cached_item_count();
        info!(
            "Starting scan - cached items before refresh: {}",
            cached_before
        );

        let refreshed = self.store.force_refresh(source);
        let entries = self.store.snapshot();

        info!(
            "Scan: {} items (cached before: {}, refreshed: {})",
            entries.len(),
            cached_before,
            refreshed
        );

        if entries.is_empty() {
            let outcome = if refreshed {
                ScanOutcome::ConfirmedEmpty
            } else if self.store.change_token().is_none() {
                ScanOutcome::NeverOpened
            } else {
                ScanOutcome::CachedButEmpty
            };
            warn!("Scan found no items: {:?}", outcome);
            return Ok(outcome);
        }

        let groups = self.filter.apply(self.engine.group(&entries)?);
        let report = ScanReport::new(groups, refreshed);
        info!("{}", report.summary);
        Ok(ScanOutcome::Completed(report))
    }
}
