//! Markdown structure parsing.
//!
//! Walks the `pulldown-cmark` event stream to pull out headings (for the
//! in-page table of contents) and the first paragraph (for module summaries
//! on index and track pages). Inline formatting is stripped from both.
//!
//! # Example
//!
//! ```rust
//! use createx_content::markdown::parser::{extract_headings, extract_first_paragraph};
//!
//! let content = "# Ideation\n\nGenerate many ideas.\n\n## Crazy Eights";
//!
//! let headings = extract_headings(content);
//! assert_eq!(headings[1].text, "Crazy Eights");
//! assert_eq!(headings[1].anchor, "crazy-eights");
//!
//! let summary = extract_first_paragraph(content, 100).unwrap();
//! assert_eq!(summary, "Generate many ideas.");
//! ```

use createx_core::{slugify, truncate_chars};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use serde::Serialize;

use crate::render::gfm_options;

/// A heading found in a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Heading level, 1 through 6.
    pub level: u8,
    /// Heading text with inline formatting removed.
    pub text: String,
    /// Anchor id derived from the text with [`slugify`].
    pub anchor: String,
}

/// Extract every heading (levels 1–6) in document order.
///
/// Parsed with the renderer's extension set, so each anchor equals the id
/// the renderer gives that heading. Headings inside fenced code blocks are
/// not headings and are skipped.
pub fn extract_headings(content: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new_ext(content, gfm_options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((level as u8, String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    let text = text.trim().to_string();
                    if !text.is_empty() {
                        headings.push(Heading {
                            level,
                            anchor: slugify(&text),
                            text,
                        });
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    headings
}

/// Extract the first paragraph from Markdown content.
///
/// Skips headings and marker lines such as `**Track:** Foundations` (a
/// paragraph that is nothing but a bold label and value). Content is
/// truncated to `max_chars` with `...` if needed.
pub fn extract_first_paragraph(content: &str, max_chars: usize) -> Option<String> {
    let mut in_paragraph = false;
    let mut in_heading = false;
    let mut paragraph_text = String::new();
    let mut starts_with_label = false;

    for event in Parser::new_ext(content, gfm_options()) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => in_heading = false,

            Event::Start(Tag::Paragraph) if !in_heading => {
                in_paragraph = true;
                starts_with_label = false;
                paragraph_text.clear();
            }
            Event::Start(Tag::Strong) if in_paragraph && paragraph_text.is_empty() => {
                starts_with_label = true;
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                in_paragraph = false;
                let trimmed = paragraph_text.trim();
                let is_marker = starts_with_label && trimmed.contains(':');
                if !trimmed.is_empty() && !is_marker {
                    return Some(truncate_text(&normalize_whitespace(trimmed), max_chars));
                }
            }

            Event::Text(text) | Event::Code(text) if in_paragraph => {
                paragraph_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_paragraph => {
                paragraph_text.push(' ');
            }

            _ => {}
        }
    }

    None
}

/// Truncate text to a maximum number of characters, adding "..." if truncated.
fn truncate_text(text: &str, max_chars: usize) -> String {
    let head = truncate_chars(text, max_chars);
    if head.len() == text.len() {
        return text.to_string();
    }

    // Prefer a word boundary near the cut
    let cut = head
        .rfind(char::is_whitespace)
        .map_or(head, |idx| &head[..idx]);
    format!("{}...", cut.trim())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Tests
// ============================================================================
