//! Heuristic metadata extraction from module bodies.
//!
//! Each field has its own narrow extractor and its own default, so a
//! missing marker for one field never affects another:
//!
//! | Field | Convention | Default |
//! |---|---|---|
//! | title | first `# ` line | `Untitled Module` |
//! | track | `**Track:** value` | `Unknown` |
//! | duration | `**Duration:** value` | `30 minutes` |
//! | difficulty | `**Difficulty:** value` | `Beginner` |
//! | prerequisites | `**Prerequisites:** a, b` | empty |
//! | learning objectives | `-` bullets under `## Learning Objectives` | empty |
//!
//! The objectives block ends at the next `## ` heading or at the end of the
//! document, whichever comes first.

use crate::markdown::helpers::{
    extract_list_items, extract_marker_value, extract_section_content, parse_comma_list,
};

/// Title used when a module has neither front-matter nor an H1.
pub const DEFAULT_TITLE: &str = "Untitled Module";
/// Track used when no marker is present.
pub const DEFAULT_TRACK: &str = "Unknown";
/// Duration used when no marker is present.
pub const DEFAULT_DURATION: &str = "30 minutes";
/// Difficulty used when no marker is present.
pub const DEFAULT_DIFFICULTY: &str = "Beginner";

/// Headings that open the learning objectives block. The Chinese heading
/// covers module files authored directly in Chinese.
pub const LEARNING_OBJECTIVES_HEADINGS: &[&str] = &["Learning Objectives", "学习目标"];

/// The six derived fields of a module body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMetadata {
    /// Title from the first H1.
    pub title: String,
    /// Track marker value.
    pub track: String,
    /// Duration marker value.
    pub duration: String,
    /// Difficulty marker value.
    pub difficulty: String,
    /// Prerequisites marker, split on commas.
    pub prerequisites: Vec<String>,
    /// Learning objective bullets.
    pub learning_objectives: Vec<String>,
}

/// Run every extractor over a body.
pub fn extract_metadata(body: &str) -> ExtractedMetadata {
    ExtractedMetadata {
        title: extract_title(body),
        track: extract_track(body),
        duration: extract_duration(body),
        difficulty: extract_difficulty(body),
        prerequisites: extract_prerequisites(body),
        learning_objectives: extract_learning_objectives(body),
    }
}

/// Text of the first `# ` heading line, or [`DEFAULT_TITLE`].
///
/// Lines inside fenced code blocks are ignored.
pub fn extract_title(body: &str) -> String {
    find_h1(body).unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// The first `# ` heading, if any.
pub fn find_h1(body: &str) -> Option<String> {
    let mut in_fence = false;
    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(title) = line.strip_prefix("# ") {
            let title = title.trim();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }
    None
}

/// `**Track:**` value, or [`DEFAULT_TRACK`].
pub fn extract_track(body: &str) -> String {
    extract_marker_value(body, "Track").unwrap_or_else(|| DEFAULT_TRACK.to_string())
}

/// `**Duration:**` value, or [`DEFAULT_DURATION`].
pub fn extract_duration(body: &str) -> String {
    extract_marker_value(body, "Duration").unwrap_or_else(|| DEFAULT_DURATION.to_string())
}

/// `**Difficulty:**` value, or [`DEFAULT_DIFFICULTY`].
pub fn extract_difficulty(body: &str) -> String {
    extract_marker_value(body, "Difficulty").unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string())
}

/// `**Prerequisites:**` value split on commas; empty if absent.
pub fn extract_prerequisites(body: &str) -> Vec<String> {
    extract_marker_value(body, "Prerequisites")
        .map(|value| parse_comma_list(&value))
        .unwrap_or_default()
}

/// `-` bullets under the learning objectives heading; empty if absent.
pub fn extract_learning_objectives(body: &str) -> Vec<String> {
    LEARNING_OBJECTIVES_HEADINGS
        .iter()
        .find_map(|heading| extract_section_content(body, heading))
        .map(|section| extract_list_items(&section))
        .unwrap_or_default()
}

/// Whether the body has a learning objectives heading at all.
pub fn has_learning_objectives_section(body: &str) -> bool {
    LEARNING_OBJECTIVES_HEADINGS
        .iter()
        .any(|heading| extract_section_content(body, heading).is_some())
}

// ============================================================================
// Tests
// ============================================================================
