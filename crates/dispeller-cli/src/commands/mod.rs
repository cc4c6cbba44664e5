//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod config;
pub mod decode;
pub mod scan;
pub mod shared;
