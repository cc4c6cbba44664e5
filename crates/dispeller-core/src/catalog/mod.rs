//! Item metadata catalog.
//!
//! The grouping engine never trusts names or slots stored alongside wardrobe
//! entries; everything it displays is resolved here by item id.

mod lookup;
mod shared;
mod static_catalog;

pub use lookup::*;
pub use shared::*;
pub use static_catalog::*;
