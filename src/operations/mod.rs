//! High-level operations for the Deconflict CLI

pub mod clean;
