//! Equipment slot classification.

mod category;

pub use category::*;
