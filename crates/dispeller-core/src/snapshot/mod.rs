//! Wardrobe snapshot cache.
//!
//! The wardrobe lives in game memory that the host may tear down or rewrite
//! at any time. This module keeps the last complete read of it:
//!
//! - **Source**: [`WardrobeSource`] probes availability and reads raw entries
//! - **Store**: [`SnapshotStore`] holds the cached entries and change token
//!   behind a single lock and hands out copies
//!
//! A periodic driver calls [`SnapshotStore::poll`]; a user-triggered scan calls
//! [`SnapshotStore::force_refresh`] and then [`SnapshotStore::snapshot`].
//! [`WardrobeDump`] replays a wardrobe read saved to JSON.

mod dump;
mod entry;
mod source;
mod store;

#[cfg(test)]
pub mod mock;

pub use dump::*;
pub use entry::*;
pub use source::*;
pub use store::*;

#[cfg(test)]
pub use mock::MockWardrobeSource;
