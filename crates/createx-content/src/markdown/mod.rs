//! Markdown parsing and front-matter extraction.
//!
//! - [`frontmatter`]: optional YAML front-matter
//! - [`parser`]: headings and first paragraph via `pulldown-cmark`
//! - [`helpers`]: marker lines, named sections, bullet lists, `## ` blocks

pub mod frontmatter;
pub mod helpers;
pub mod parser;

pub use frontmatter::{extract_frontmatter, Frontmatter, MODELED_KEYS};
pub use helpers::{
    extract_list_items, extract_marker_value, extract_section_content, parse_comma_list,
    split_h2_blocks, H2Block,
};
pub use parser::{extract_first_paragraph, extract_headings, Heading};
