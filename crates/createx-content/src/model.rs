//! The typed content model.
//!
//! All types serialize with camelCase field names, which is the shape the
//! hosted app and the generated search script consume.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form front-matter fields carried through unmodeled.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// One parsed module of the guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleContent {
    /// Slug from the filename with the chapter prefix stripped.
    pub id: String,
    /// Ordering key from the filename's numeric prefix (0 if absent).
    pub chapter: u32,
    /// Display title.
    pub title: String,
    /// Grouping label such as "Foundations".
    pub track: String,
    /// Human duration such as "45 minutes".
    pub duration: String,
    /// Conventionally Beginner, Intermediate, or Advanced.
    pub difficulty: String,
    /// Modules or skills expected beforehand.
    pub prerequisites: Vec<String>,
    /// Bullet items from the Learning Objectives section.
    pub learning_objectives: Vec<String>,
    /// Markdown body with front-matter stripped.
    pub content: String,
    /// Rendered HTML of `content`.
    pub html: String,
    /// Front-matter fields not otherwise modeled.
    #[serde(default)]
    pub metadata: Metadata,
}

impl ModuleContent {
    /// Reduced projection used by module listings.
    pub fn summary(&self) -> ModuleSummary {
        ModuleSummary {
            id: self.id.clone(),
            chapter: self.chapter,
            title: self.title.clone(),
            track: self.track.clone(),
            duration: self.duration.clone(),
            difficulty: self.difficulty.clone(),
            prerequisites: self.prerequisites.clone(),
            learning_objectives: self.learning_objectives.clone(),
        }
    }
}

/// Listing projection of a module (no body, no HTML).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSummary {
    /// Module id.
    pub id: String,
    /// Chapter number.
    pub chapter: u32,
    /// Title.
    pub title: String,
    /// Track label.
    pub track: String,
    /// Duration.
    pub duration: String,
    /// Difficulty.
    pub difficulty: String,
    /// Prerequisites.
    pub prerequisites: Vec<String>,
    /// Learning objectives.
    pub learning_objectives: Vec<String>,
}

/// Previous/next links for one module in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    /// Module id.
    pub id: String,
    /// Chapter number.
    pub chapter: u32,
    /// Title.
    pub title: String,
    /// Track label.
    pub track: String,
    /// Id of the preceding module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Id of the following module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Aggregate catalog statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStats {
    /// Number of modules in the catalog.
    pub total_modules: usize,
    /// Modules per track.
    pub track_counts: BTreeMap<String, usize>,
    /// Modules per difficulty.
    pub difficulty_counts: BTreeMap<String, usize>,
    /// Mean duration, e.g. "42 minutes".
    pub average_duration: String,
}

/// Kind of a section, which decides how the UI presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Reading material.
    Content,
    /// An activity the facilitator runs with the group.
    Interactive,
}

/// One navigable section of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor-style id, unique within the module.
    pub id: String,
    /// Section heading.
    pub title: String,
    /// Markdown body of the section.
    pub content: String,
    /// Content or interactive.
    #[serde(rename = "type")]
    pub kind: SectionKind,
}
