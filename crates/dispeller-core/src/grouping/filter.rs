use serde::{Deserialize, Serialize};

use crate::grouping::SharedModelGroup;
use crate::slot::SlotKind;

/// Which slot groups to show.
///
/// With both flags set, weapons and clothing are shown and accessories hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFilter {
    pub show_only_weapons: bool,
    pub show_only_clothing: bool,
}

impl DisplayFilter {
    pub fn is_active(&self) -> bool {
        self.show_only_weapons || self.show_only_clothing
    }

    pub fn allows(&self, kind: SlotKind) -> bool {
        if !self.is_active() {
            return true;
        }
        (self.show_only_weapons && kind == SlotKind::Weapon)
            || (self.show_only_clothing && kind == SlotKind::Armor)
    }

    pub fn apply(&self, groups: Vec<SharedModelGroup>) -> Vec<SharedModelGroup> {
        groups
            .into_iter()
            .filter(|group| self.allows(group.slot_category.kind()))
            .collect()
    }
}
