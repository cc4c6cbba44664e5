use std::fmt;

use crate::error::Result;
use crate::snapshot::RawWardrobeEntry;

/// Why the wardrobe cannot be read right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    /// The wardrobe window has never been opened in this session
    NotOpen,
    /// The window exists but is not ready to be read
    NotReady,
    /// The window is ready but its backing data is not initialized
    NoData,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::NotOpen => "wardrobe not open",
            Self::NotReady => "wardrobe not ready",
            Self::NoData => "wardrobe data not initialized",
        };
        f.write_str(reason)
    }
}

/// Result of probing the wardrobe source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    Unavailable(Unavailable),
    /// Readable and confirmed to hold no items
    Empty { change_token: u64 },
    Populated { change_token: u64 },
}

impl SourceState {
    pub fn change_token(&self) -> Option<u64> {
        match self {
            Self::Unavailable(_) => None,
            Self::Empty { change_token } | Self::Populated { change_token } => Some(*change_token),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable(_))
    }
}

/// Narrow boundary to the externally-owned wardrobe memory.
///
/// Implementations must be cheap and non-blocking: the probe runs on every
/// framework tick.
pub trait WardrobeSource {
    /// Check availability and report the current change token
    fn probe(&self) -> SourceState;

    /// Read every slot. Only called after a probe reported the source available.
    fn read_entries(&self) -> Result<Vec<RawWardrobeEntry>>;
}

impl<T: WardrobeSource + ?Sized> WardrobeSource for &T {
    fn probe(&self) -> SourceState {
        (**self).probe()
    }

    fn read_entries(&self) -> Result<Vec<RawWardrobeEntry>> {
        (**self).read_entries()
    }
}
