//! Content validation.
//!
//! Two levels of checking:
//!
//! - [`ContentValidator`] looks at one piece of content. The built-in
//!   [`StructuralValidator`] only checks structure: a title, a learning
//!   objectives section, a minimum length, and a duration marker. Only empty
//!   content is an error; everything else is a warning or suggestion.
//! - [`validate_catalog`] runs a validator over every module file and adds
//!   catalog-wide checks (duplicate ids, chapter numbers that disagree with
//!   filename order).

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::extract::{find_h1, has_learning_objectives_section};
use crate::markdown::extract_marker_value;
use crate::model::ModuleContent;

/// Content shorter than this (in characters) draws a warning.
pub const MIN_CONTENT_LENGTH: usize = 100;

/// Error reported for blank content.
pub const EMPTY_CONTENT_ERROR: &str = "Content cannot be empty";

/// Outcome of validating one piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True when there are no errors.
    pub is_valid: bool,
    /// Problems that block publishing.
    pub errors: Vec<String>,
    /// Problems worth fixing.
    pub warnings: Vec<String>,
    /// Optional improvements.
    pub suggestions: Vec<String>,
}

impl ValidationReport {
    fn finish(mut self) -> Self {
        self.is_valid = self.errors.is_empty();
        self
    }
}

/// Checks one piece of content.
///
/// `content_type` is the caller's label for what is being checked
/// (`"module"`, `"section"`, ...); validators may ignore it.
pub trait ContentValidator: Send + Sync {
    /// Validate `content`.
    fn validate(&self, content: &str, content_type: &str) -> ValidationReport;
}

/// Hard-coded structural checks for module Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl ContentValidator for StructuralValidator {
    fn validate(&self, content: &str, content_type: &str) -> ValidationReport {
        let mut report = ValidationReport::default();

        if content.trim().is_empty() {
            report.errors.push(EMPTY_CONTENT_ERROR.to_string());
            return report.finish();
        }

        if find_h1(content).is_none() {
            report
                .warnings
                .push("Content should have a main title (# heading)".to_string());
        }

        if !has_learning_objectives_section(content) {
            report
                .warnings
                .push("Content should include a Learning Objectives section".to_string());
            report.suggestions.push(
                "Add a '## Learning Objectives' section with bullet points".to_string(),
            );
        }

        let length = content.trim().chars().count();
        if length < MIN_CONTENT_LENGTH {
            report.warnings.push(format!(
                "Content seems too short for a {content_type} ({length} characters, minimum {MIN_CONTENT_LENGTH})"
            ));
        }

        if extract_marker_value(content, "Duration").is_none() {
            report
                .suggestions
                .push("Add a '**Duration:**' line with the estimated time".to_string());
        }

        report.finish()
    }
}

/// Validation result for one module file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReport {
    /// Module id.
    pub id: String,
    /// File the module was read from.
    pub path: PathBuf,
    /// Structural findings.
    pub report: ValidationReport,
}

/// Validation result for the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReport {
    /// Per-module findings, in filename order.
    pub modules: Vec<ModuleReport>,
    /// Catalog-wide errors.
    pub errors: Vec<String>,
    /// Catalog-wide warnings.
    pub warnings: Vec<String>,
}

impl CatalogReport {
    /// Whether any module or catalog-wide check reported an error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.modules.iter().any(|m| !m.report.errors.is_empty())
    }

    /// Total errors across modules and the catalog.
    pub fn error_count(&self) -> usize {
        self.errors.len()
            + self
                .modules
                .iter()
                .map(|m| m.report.errors.len())
                .sum::<usize>()
    }

    /// Total warnings across modules and the catalog.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
            + self
                .modules
                .iter()
                .map(|m| m.report.warnings.len())
                .sum::<usize>()
    }
}

/// Validate modules given as `(path, module)` pairs in filename order.
pub fn validate_catalog(
    entries: &[(PathBuf, ModuleContent)],
    validator: &dyn ContentValidator,
) -> CatalogReport {
    let mut report = CatalogReport::default();

    for (path, module) in entries {
        report.modules.push(ModuleReport {
            id: module.id.clone(),
            path: path.clone(),
            report: validator.validate(&module.content, "module"),
        });
    }

    let mut first_seen: HashMap<&str, &PathBuf> = HashMap::new();
    for (path, module) in entries {
        if let Some(previous) = first_seen.insert(module.id.as_str(), path) {
            report.errors.push(format!(
                "Duplicate module id '{}' in {} and {}",
                module.id,
                previous.display(),
                path.display()
            ));
        }
    }

    for pair in entries.windows(2) {
        let (prev_path, prev) = &pair[0];
        let (path, module) = &pair[1];
        if module.chapter < prev.chapter {
            report.warnings.push(format!(
                "{} (chapter {}) sorts after {} (chapter {}); reading order follows chapter numbers",
                path.display(),
                module.chapter,
                prev_path.display(),
                prev.chapter
            ));
        } else if module.chapter == prev.chapter {
            report.warnings.push(format!(
                "{} and {} share chapter {}",
                prev_path.display(),
                path.display(),
                module.chapter
            ));
        }
    }

    report
}

// ============================================================================
// Tests
// ============================================================================
