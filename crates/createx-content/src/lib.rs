//! Module parsing, metadata extraction, rendering, and catalog management.
//!
//! This crate turns a directory of `{NN}-{slug}.md` module files into a typed
//! catalog and answers every question the site builder and the content API
//! ask about it.
//!
//! # Modules
//!
//! - [`markdown`]: Front-matter, heading, and marker-line parsing
//! - [`extract`]: Heuristic metadata extraction with per-field defaults
//! - [`render`]: GFM Markdown to HTML with a line-break fallback
//! - [`model`]: `ModuleContent`, `NavEntry`, `ModuleStats`, `Section`
//! - [`manager`]: The [`ContentManager`]
//! - [`query`]: Search, navigation, and stats over a loaded catalog
//! - [`cache`]: The [`ModuleCache`] seam
//! - [`sections`]: Splitting modules into UI sections
//! - [`translation`]: Translation records and their storage layout
//! - [`validate`]: Structural and catalog validation
//!
//! # Example
//!
//! ```rust
//! use createx_content::extract::extract_metadata;
//!
//! let meta = extract_metadata("# Welcome\n\n**Track:** Foundations");
//! assert_eq!(meta.title, "Welcome");
//! assert_eq!(meta.track, "Foundations");
//! assert_eq!(meta.duration, "30 minutes");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cache;
pub mod extract;
pub mod manager;
pub mod markdown;
pub mod model;
pub mod query;
pub mod render;
pub mod sections;
pub mod translation;
pub mod validate;

pub use cache::{MemoryCache, ModuleCache, NoCache};
pub use manager::ContentManager;
pub use model::{Metadata, ModuleContent, ModuleStats, ModuleSummary, NavEntry, Section, SectionKind};
pub use render::{MarkdownRenderer, RenderOptions};
pub use sections::{KeywordClassifier, SectionClassifier};
pub use translation::{TranslationPayload, TranslationRecord};
pub use validate::{CatalogReport, ContentValidator, StructuralValidator, ValidationReport};
