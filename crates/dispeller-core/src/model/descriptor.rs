use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Bit layout of the packed model value
pub mod layout {
    pub const PRIMARY_SHIFT: u32 = 0;
    pub const SECONDARY_SHIFT: u32 = 16;
    pub const VARIANT_SHIFT: u32 = 32;
    pub const DYE_SHIFT: u32 = 48;
    pub const FIELD_MASK: u64 = 0xFFFF;
}

/// Decoded model identifier.
///
/// Weapons (`variant != 0`) are identified by all four fields. Other gear is
/// identified by `primary_key` alone; the remaining fields are zeroed on decode.
///
/// `decode`, `new` and deserialization always produce normalized values, for
/// which `==`, `Hash` and `Ord` agree with [`ModelDescriptor::equivalent`]. A
/// struct literal is compared field by field; call `normalized()` first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "DescriptorFields")]
pub struct ModelDescriptor {
    pub primary_key: u16,
    pub secondary_key: u16,
    pub variant: u16,
    pub dye_channel: u16,
}

/// Wire form, normalized on the way in
#[derive(Deserialize)]
struct DescriptorFields {
    primary_key: u16,
    #[serde(default)]
    secondary_key: u16,
    #[serde(default)]
    variant: u16,
    #[serde(default)]
    dye_channel: u16,
}

impl From<DescriptorFields> for ModelDescriptor {
    fn from(f: DescriptorFields) -> Self {
        Self::new(f.primary_key, f.secondary_key, f.variant, f.dye_channel)
    }
}

impl ModelDescriptor {
    /// Build a descriptor, applying the weapon/non-weapon normalization
    pub fn new(primary_key: u16, secondary_key: u16, variant: u16, dye_channel: u16) -> Self {
        if variant != 0 {
            Self {
                primary_key,
                secondary_key,
                variant,
                dye_channel,
            }
        } else {
            Self {
                primary_key,
                ..Default::default()
            }
        }
    }

    /// Decode a raw `ModelMain` value. Every input is valid.
    pub fn decode(raw: u64) -> Self {
        let field = |shift: u32| ((raw >> shift) & layout::FIELD_MASK) as u16;
        Self::new(
            field(layout::PRIMARY_SHIFT),
            field(layout::SECONDARY_SHIFT),
            field(layout::VARIANT_SHIFT),
            field(layout::DYE_SHIFT),
        )
    }

    /// Pack the descriptor back into the 64-bit layout
    pub fn to_raw(&self) -> u64 {
        let d = self.normalized();
        (d.primary_key as u64) << layout::PRIMARY_SHIFT
            | (d.secondary_key as u64) << layout::SECONDARY_SHIFT
            | (d.variant as u64) << layout::VARIANT_SHIFT
            | (d.dye_channel as u64) << layout::DYE_SHIFT
    }

    pub fn normalized(&self) -> Self {
        Self::new(
            self.primary_key,
            self.secondary_key,
            self.variant,
            self.dye_channel,
        )
    }

    pub fn is_weapon(&self) -> bool {
        self.variant != 0
    }

    /// Two items share a model iff their normalized descriptors match
    pub fn equivalent(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }

    /// Canonical `"{primary}-{secondary}-{variant}-{dye}"` form
    pub fn id_string(&self) -> String {
        self.normalized().to_string()
    }
}

impl fmt::Display for ModelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.primary_key, self.secondary_key, self.variant, self.dye_channel
        )
    }
}

impl FromStr for ModelDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 4 {
            return Err(Error::InvalidModelId(s.to_string()));
        }

        let mut fields = [0u16; 4];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| Error::InvalidModelId(s.to_string()))?;
        }

        Ok(Self::new(fields[0], fields[1], fields[2], fields[3]))
    }
}

/// Decode a raw `ModelMain` value
pub fn decode(raw: u64) -> ModelDescriptor {
    ModelDescriptor::decode(raw)
}

pub fn equivalent(a: &ModelDescriptor, b: &ModelDescriptor) -> bool {
    a.equivalent(b)
}

pub fn id_string(descriptor: &ModelDescriptor) -> String {
    descriptor.id_string()
}
