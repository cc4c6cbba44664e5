use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::snapshot::{RawWardrobeEntry, SourceState, Unavailable, WardrobeSource};

/// Wardrobe contents captured to a JSON file.
///
/// Lets a scan run outside the game client against a saved wardrobe read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WardrobeDump {
    /// Used-slot counter at capture time
    pub change_token: u64,
    /// Whether the wardrobe was readable at capture time
    #[serde(default = "default_ready")]
    pub ready: bool,
    #[serde(default)]
    pub entries: Vec<RawWardrobeEntry>,
}

fn default_ready() -> bool {
    true
}

impl WardrobeDump {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl WardrobeSource for WardrobeDump {
    fn probe(&self) -> SourceState {
        if !self.ready {
            return SourceState::Unavailable(Unavailable::NotReady);
        }
        let change_token = self.change_token;
        if self.entries.iter().all(RawWardrobeEntry::is_empty_slot) {
            SourceState::Empty { change_token }
        } else {
            SourceState::Populated { change_token }
        }
    }

    fn read_entries(&self) -> Result<Vec<RawWardrobeEntry>> {
        Ok(self.entries.clone())
    }
}
