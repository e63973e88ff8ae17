//! Command implementations for the Deconflict CLI

pub mod clean;
pub mod completions;
pub mod version;
