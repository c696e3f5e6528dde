// Pocket Battle Schema - Shared definition records
// This crate contains the immutable records (moves, species templates, items)
// that are shared between the battle engine and the roster data files.

// Re-export the main types
pub use definitions::*;
pub use element_types::*;

pub mod definitions;
pub mod element_types;
