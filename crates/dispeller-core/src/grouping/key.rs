use std::fmt;

use serde::Serialize;

use crate::model::ModelDescriptor;
use crate::slot::SlotCategory;

/// Bucket key for shared-model detection.
///
/// Ordered by slot display order first, then by model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GroupKey {
    pub slot: SlotCategory,
    pub model: ModelDescriptor,
}

impl GroupKey {
    pub fn new(slot: SlotCategory, model: ModelDescriptor) -> Self {
        Self {
            slot,
            model: model.normalized(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.slot, self.model)
    }
}
