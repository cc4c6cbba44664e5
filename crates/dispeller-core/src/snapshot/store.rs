use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::snapshot::{RawWardrobeEntry, SourceState, WardrobeSource};

#[derive(Debug, Default)]
struct Cache {
    entries: Vec<RawWardrobeEntry>,
    change_token: Option<u64>,
    /// Bumped on every replacement
    generation: u64,
}

/// Last complete read of the wardrobe.
///
/// One writer (the periodic tick or an explicit refresh) and any number of
/// readers share it through an `Arc`. The lock is only held while entries are
/// copied in or out, never while the source is being read.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    cache: Mutex<Cache>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Cache> {
        // Cache writes are single assignments, so a poisoned guard is still consistent
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether `observe` with this token would replace the cache
    pub fn needs_update(&self, change_token: u64) -> bool {
        let cache = self.lock();
        cache.entries.is_empty() || cache.change_token != Some(change_token)
    }

    /// Store a periodic observation.
    ///
    /// Replaces the cache when the token changed or the cache is empty.
    /// Returns whether a replacement happened.
    pub fn observe(&self, entries: Vec<RawWardrobeEntry>, change_token: u64) -> bool {
        let mut cache = self.lock();
        if !cache.entries.is_empty() && cache.change_token == Some(change_token) {
            return false;
        }

        let was_empty = cache.entries.is_empty();
        let count = Self::replace_locked(&mut cache, entries, change_token);
        drop(cache);

        if count > 0 {
            info!(
                "Cached {} items from wardrobe (cache was empty: {})",
                count, was_empty
            );
        }
        true
    }

    /// Periodic tick: probe the source and observe it if it changed.
    ///
    /// Never blocks on anything but the cache lock. Read failures are logged
    /// and leave the cache as it was.
    pub fn poll<S: WardrobeSource + ?Sized>(&self, source: &S) -> bool {
        let change_token = match source.probe() {
            SourceState::Unavailable(reason) => {
                debug!("poll: {}", reason);
                return false;
            }
            SourceState::Empty { change_token } => return self.clear_if_changed(change_token),
            SourceState::Populated { change_token } => change_token,
        };

        if !self.needs_update(change_token) {
            return false;
        }

        match source.read_entries() {
            Ok(entries) => self.observe(entries, change_token),
            Err(e) => {
                warn!("poll: failed to read wardrobe entries: {}", e);
                false
            }
        }
    }

    /// Record a confirmed-empty wardrobe. An unchanged token is a no-op.
    fn clear_if_changed(&self, change_token: u64) -> bool {
        let mut cache = self.lock();
        if cache.change_token == Some(change_token) {
            return false;
        }

        let had_items = !cache.entries.is_empty();
        Self::replace_locked(&mut cache, Vec::new(), change_token);
        drop(cache);

        if had_items {
            info!("Wardrobe is now empty, cleared cached items");
        }
        true
    }

    /// Explicit refresh for a user-triggered scan.
    ///
    /// Returns false, leaving the cache untouched, when the source is not
    /// available or cannot be read. A confirmed-empty wardrobe replaces the
    /// cache and returns true.
    pub fn force_refresh<S: WardrobeSource + ?Sized>(&self, source: &S) -> bool {
        let change_token = match source.probe() {
            SourceState::Unavailable(reason) => {
                debug!("force_refresh: {}", reason);
                return false;
            }
            SourceState::Empty { change_token } => {
                self.replace(Vec::new(), change_token);
                info!("force_refresh: wardrobe is empty");
                return true;
            }
            SourceState::Populated { change_token } => change_token,
        };

        match source.read_entries() {
            Ok(entries) => {
                let count = self.replace(entries, change_token);
                info!("force_refresh: loaded {} items from wardrobe", count);
                true
            }
            Err(e) => {
                warn!("force_refresh: failed to read wardrobe entries: {}", e);
                false
            }
        }
    }

    /// Unconditionally replace the cache; returns the number of stored entries
    pub fn replace(&self, entries: Vec<RawWardrobeEntry>, change_token: u64) -> usize {
        let mut cache = self.lock();
        Self::replace_locked(&mut cache, entries, change_token)
    }

    fn replace_locked(
        cache: &mut Cache,
        mut entries: Vec<RawWardrobeEntry>,
        change_token: u64,
    ) -> usize {
        entries.retain(|entry| !entry.is_empty_slot());
        cache.entries = entries;
        cache.change_token = Some(change_token);
        cache.generation += 1;
        cache.entries.len()
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> Vec<RawWardrobeEntry> {
        self.lock().entries.clone()
    }

    pub fn has_cached_data(&self) -> bool {
        !self.lock().entries.is_empty()
    }

    pub fn cached_item_count(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn change_token(&self) -> Option<u64> {
        self.lock().change_token
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }
}
