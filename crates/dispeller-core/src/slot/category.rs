use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Canonical equipment slot. The discriminant is the display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum SlotCategory {
    #[strum(serialize = "Main Hand")]
    MainHand = 1,
    #[strum(serialize = "Off Hand")]
    OffHand = 2,
    Head = 3,
    Body = 4,
    Gloves = 5,
    Legs = 6,
    Feet = 7,
    Ears = 8,
    Neck = 9,
    Wrists = 10,
    Ring = 11,
    #[default]
    #[strum(serialize = "Unknown Slot")]
    Unknown = 99,
}

/// Coarse grouping of slots, used by the display filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, Display)]
pub enum SlotKind {
    Weapon,
    Armor,
    Accessory,
    Unknown,
}

impl SlotCategory {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Display order (lower first, Unknown last)
    pub fn order(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }

    pub fn kind(&self) -> SlotKind {
        match self {
            Self::MainHand | Self::OffHand => SlotKind::Weapon,
            Self::Head | Self::Body | Self::Gloves | Self::Legs | Self::Feet => SlotKind::Armor,
            Self::Ears | Self::Neck | Self::Wrists | Self::Ring => SlotKind::Accessory,
            Self::Unknown => SlotKind::Unknown,
        }
    }
}

/// Per-item equip slot flags, as stored in the catalog's slot category row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryFlags {
    pub main_hand: bool,
    pub off_hand: bool,
    pub head: bool,
    pub body: bool,
    pub gloves: bool,
    pub legs: bool,
    pub feet: bool,
    pub ears: bool,
    pub neck: bool,
    pub wrists: bool,
    pub finger_right: bool,
    pub finger_left: bool,
}

impl CategoryFlags {
    /// Flags with only the given slot set
    pub fn only(category: SlotCategory) -> Self {
        let mut flags = Self::default();
        match category {
            SlotCategory::MainHand => flags.main_hand = true,
            SlotCategory::OffHand => flags.off_hand = true,
            SlotCategory::Head => flags.head = true,
            SlotCategory::Body => flags.body = true,
            SlotCategory::Gloves => flags.gloves = true,
            SlotCategory::Legs => flags.legs = true,
            SlotCategory::Feet => flags.feet = true,
            SlotCategory::Ears => flags.ears = true,
            SlotCategory::Neck => flags.neck = true,
            SlotCategory::Wrists => flags.wrists = true,
            SlotCategory::Ring => flags.finger_right = true,
            SlotCategory::Unknown => {}
        }
        flags
    }

    /// Resolve to a single slot. Earlier entries win when several flags are set.
    pub fn classify(&self) -> SlotCategory {
        let priority = [
            (self.main_hand, SlotCategory::MainHand),
            (self.off_hand, SlotCategory::OffHand),
            (self.head, SlotCategory::Head),
            (self.body, SlotCategory::Body),
            (self.gloves, SlotCategory::Gloves),
            (self.legs, SlotCategory::Legs),
            (self.feet, SlotCategory::Feet),
            (self.ears, SlotCategory::Ears),
            (self.neck, SlotCategory::Neck),
            (self.wrists, SlotCategory::Wrists),
            (self.finger_right || self.finger_left, SlotCategory::Ring),
        ];

        priority
            .into_iter()
            .find_map(|(set, category)| set.then_some(category))
            .unwrap_or(SlotCategory::Unknown)
    }
}

/// Classify an optional category row; a missing row is Unknown
pub fn classify(flags: Option<&CategoryFlags>) -> SlotCategory {
    flags.map_or(SlotCategory::Unknown, CategoryFlags::classify)
}

pub fn order(category: SlotCategory) -> u8 {
    category.order()
}
