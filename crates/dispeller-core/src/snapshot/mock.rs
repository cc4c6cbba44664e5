//! In-memory wardrobe source for tests

use std::cell::{Cell, RefCell};

use crate::error::{Error, Result};
use crate::snapshot::{RawWardrobeEntry, SourceState, Unavailable, WardrobeSource};

pub struct MockWardrobeSource {
    state: Cell<SourceState>,
    entries: RefCell<Vec<RawWardrobeEntry>>,
    fail_reads: Cell<bool>,
    reads: Cell<usize>,
}

impl MockWardrobeSource {
    pub fn unavailable(reason: Unavailable) -> Self {
        Self {
            state: Cell::new(SourceState::Unavailable(reason)),
            entries: RefCell::new(Vec::new()),
            fail_reads: Cell::new(false),
            reads: Cell::new(0),
        }
    }

    pub fn with_entries(entries: Vec<RawWardrobeEntry>, change_token: u64) -> Self {
        let source = Self::unavailable(Unavailable::NotOpen);
        source.set_entries(entries, change_token);
        source
    }

    pub fn set_entries(&self, entries: Vec<RawWardrobeEntry>, change_token: u64) {
        let state = if entries.is_empty() {
            SourceState::Empty { change_token }
        } else {
            SourceState::Populated { change_token }
        };
        self.state.set(state);
        *self.entries.borrow_mut() = entries;
    }

    pub fn close(&self, reason: Unavailable) {
        self.state.set(SourceState::Unavailable(reason));
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Number of `read_entries` calls so far
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl WardrobeSource for MockWardrobeSource {
    fn probe(&self) -> SourceState {
        self.state.get()
    }

    fn read_entries(&self) -> Result<Vec<RawWardrobeEntry>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_reads.get() {
            return Err(Error::SourceUnavailable("mock read failure".to_string()));
        }
        Ok(self.entries.borrow().clone())
    }
}
