//! Static HTML site builder for the CreateX Facilitator Guide.
//!
//! Consumes a [`ContentManager`](createx_content::ContentManager) catalog
//! and writes a self-contained site per language: an index page, a page per
//! module and per track, a stylesheet, a search script, and the JSON index
//! that script queries.
//!
//! # Modules
//!
//! - [`builder`]: The build stages and output layout
//! - [`templates`]: Page and fragment templates
//! - [`toc`]: In-page table of contents
//! - [`assets`]: Stylesheet, search script, search index
//! - [`labels`]: Page chrome strings per language

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod assets;
pub mod builder;
pub mod labels;
pub mod templates;
pub mod toc;

pub use assets::SearchIndexEntry;
pub use builder::{BuildStage, SiteBuilder};
pub use labels::SiteLabels;
