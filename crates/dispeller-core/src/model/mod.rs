//! Packed model descriptors.
//!
//! Every equippable item carries a 64-bit `ModelMain` value describing the
//! mesh it renders with. Two items look identical in-game when their decoded
//! descriptors are equivalent.

mod descriptor;

pub use descriptor::*;
