//! Shared-model grouping.
//!
//! Turns a wardrobe snapshot into per-slot groups of items that render with
//! the same model:
//!
//! - **Key**: [`GroupKey`] pairs a slot with a normalized model descriptor
//! - **Engine**: [`GroupingEngine`] deduplicates, classifies, buckets, drops
//!   singletons, sorts and enriches
//! - **Filter**: [`DisplayFilter`] narrows the result to weapons or clothing

mod engine;
mod filter;
mod group;
mod key;

pub use engine::*;
pub use filter::*;
pub use group::*;
pub use key::*;
