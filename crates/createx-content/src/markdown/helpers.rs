//! Line-oriented content extraction helpers.
//!
//! Module files follow a few authoring conventions that are easier to read
//! line by line than through a Markdown parser:
//!
//! - `**Label:** value` marker lines (`Track`, `Duration`, `Difficulty`,
//!   `Prerequisites`)
//! - bullet lists under a named `## ` heading (`Learning Objectives`)
//! - `## ` headings that split a module into sections
//!
//! # Example
//!
//! ```rust
//! use createx_content::markdown::helpers::{extract_list_items, extract_marker_value, extract_section_content};
//!
//! let content = "**Track:** Foundations\n\n## Learning Objectives\n- Listen\n- Observe\n\n## Activity\n";
//!
//! assert_eq!(extract_marker_value(content, "Track").as_deref(), Some("Foundations"));
//!
//! let section = extract_section_content(content, "Learning Objectives").unwrap();
//! assert_eq!(extract_list_items(&section), vec!["Listen", "Observe"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

static SECTION_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+?)\s*#*\s*$").expect("Invalid section heading regex"));

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // `**Label:** value` and `**Label**: value`, optionally as a list item
    Regex::new(r"^\s*(?:[-*]\s+)?\*\*([^*:]+?)(?::\*\*|\*\*:)\s*(.*?)\s*$")
        .expect("Invalid marker regex")
});

/// Extract all content under a heading until the next heading of the same
/// or higher level.
///
/// The heading match ignores case and surrounding whitespace. End of
/// document closes the section, so a trailing section is still found.
/// Fenced code blocks are skipped when looking for headings.
///
/// Returns `None` if the heading is not present.
pub fn extract_section_content(content: &str, section_heading: &str) -> Option<String> {
    let heading_lower = section_heading.trim().to_lowercase();

    let mut in_section = false;
    let mut in_fence = false;
    let mut section_level = 0;
    let mut section_lines = Vec::new();

    for line in content.lines() {
        if is_fence(line) {
            in_fence = !in_fence;
        }

        if !in_fence {
            if let Some(caps) = SECTION_HEADING_RE.captures(line) {
                let level = caps.get(1).map_or(0, |m| m.as_str().len());
                let text = caps.get(2).map_or("", |m| m.as_str());

                if in_section && level <= section_level {
                    break;
                }
                if !in_section && text.trim().to_lowercase() == heading_lower {
                    in_section = true;
                    section_level = level;
                    continue;
                }
            }
        }

        if in_section {
            section_lines.push(line);
        }
    }

    in_section.then(|| section_lines.join("\n"))
}

/// Collect the `-` bullet items of a block, in order.
///
/// Only lines whose first non-blank character is `-` count; the dash and
/// surrounding whitespace are stripped and empty items are dropped.
pub fn extract_list_items(block: &str) -> Vec<String> {
    block
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix('-'))
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Find the value of the first `**Label:** value` marker line.
///
/// The label match ignores case. An empty value counts as absent.
pub fn extract_marker_value(content: &str, label: &str) -> Option<String> {
    let label_lower = label.trim().to_lowercase();

    content.lines().find_map(|line| {
        let caps = MARKER_RE.captures(line)?;
        let line_label = caps.get(1)?.as_str().trim().to_lowercase();
        let value = caps.get(2)?.as_str().trim();
        (line_label == label_lower && !value.is_empty()).then(|| value.to_string())
    })
}

/// Split a comma-separated list into trimmed, non-empty items.
///
/// # Example
///
/// ```rust
/// use createx_content::markdown::helpers::parse_comma_list;
///
/// assert_eq!(parse_comma_list("Welcome, Mindsets, "), vec!["Welcome", "Mindsets"]);
/// ```
pub fn parse_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// A block of a document that starts at a `## ` heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct H2Block {
    /// Heading text, or `None` for the preamble before the first `## `.
    pub heading: Option<String>,
    /// Lines between this heading and the next `## ` heading.
    pub body: String,
}

/// Split a document at every `## ` heading.
///
/// The preamble (anything before the first `## `, including the `# ` title)
/// is returned first with `heading: None` when it has non-blank content.
/// `###` and deeper headings stay inside their parent block.
pub fn split_h2_blocks(content: &str) -> Vec<H2Block> {
    let mut blocks = Vec::new();
    let mut heading: Option<String> = None;
    let mut lines: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for line in content.lines() {
        if is_fence(line) {
            in_fence = !in_fence;
        }

        let h2 = if in_fence {
            None
        } else {
            line.strip_prefix("## ").map(|t| t.trim().to_string())
        };

        match h2 {
            Some(text) => {
                push_block(&mut blocks, heading.take(), &lines);
                lines.clear();
                heading = Some(text);
            }
            None => lines.push(line),
        }
    }
    push_block(&mut blocks, heading, &lines);

    blocks
}

fn push_block(blocks: &mut Vec<H2Block>, heading: Option<String>, lines: &[&str]) {
    let body = lines.join("\n").trim().to_string();
    if heading.is_none() && body.is_empty() {
        return;
    }
    blocks.push(H2Block { heading, body });
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

// ============================================================================
// Tests
// ============================================================================
