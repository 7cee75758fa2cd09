// src/core/mod.rs

pub mod compare;
pub mod format;
pub mod selection;
pub mod sequence;

pub use selection::{SelectionError, SelectionSet, Toggle};
