//! Utility modules shared across the CreateX crates.
//!
//! # Modules
//!
//! - [`ids`]: module id, chapter prefix, and slug derivation
//! - [`text`]: HTML escaping and character-safe truncation

pub mod ids;
pub mod text;
