//! CreateX Core: shared errors, configuration, and id utilities.
//!
//! This crate has no internal CreateX dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`config`]: TOML guide configuration
//! - [`util`]: Module id, slug, and text helpers

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::GuideConfig;
pub use error::{Error, Result};

pub use util::ids::{module_id_from_path, slugify, split_chapter_prefix, track_slug};
pub use util::text::{escape_html, truncate_chars};
