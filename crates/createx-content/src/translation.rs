//! Translation records.
//!
//! A module's human-translatable fields travel as a flat JSON object so
//! translators and tools never see nested structure. List fields are
//! joined: learning objectives with newlines, prerequisites with commas.
//! Records are stored one file per module and language at
//! `{translations_dir}/{lang}/{module_id}.json`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use createx_core::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::markdown::parse_comma_list;
use crate::model::ModuleContent;
use crate::render::MarkdownRenderer;

/// The translatable fields of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationPayload {
    /// Module title.
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Learning objectives, one per line.
    #[serde(default)]
    pub learning_objectives: String,
    /// Prerequisites, comma separated.
    #[serde(default)]
    pub prerequisites: String,
}

impl TranslationPayload {
    /// Flatten a module into its translatable fields.
    pub fn from_module(module: &ModuleContent) -> Self {
        Self {
            title: module.title.clone(),
            content: module.content.clone(),
            learning_objectives: module.learning_objectives.join("\n"),
            prerequisites: module.prerequisites.join(", "),
        }
    }

    /// Learning objectives split back into a list.
    pub fn objectives(&self) -> Vec<String> {
        self.learning_objectives
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }

    /// Prerequisites split back into a list.
    pub fn prerequisite_list(&self) -> Vec<String> {
        parse_comma_list(&self.prerequisites)
    }
}

/// A stored translation: the payload plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    /// Translated fields.
    #[serde(flatten)]
    pub payload: TranslationPayload,
    /// Id of the source module.
    pub original_id: String,
    /// Language code of the translation.
    pub language: String,
    /// When the record was written.
    ///
    /// Hand-edited records may carry a plain date (`2024-03-01`) or a
    /// timestamp without offset; both are read as UTC.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub last_updated: DateTime<Utc>,
}

impl TranslationRecord {
    /// Stamp a payload for storage.
    pub fn new(original_id: &str, language: &str, payload: TranslationPayload) -> Self {
        Self {
            payload,
            original_id: original_id.to_string(),
            language: language.to_string(),
            last_updated: Utc::now(),
        }
    }

    /// Apply the translated fields to the source module.
    ///
    /// Structural fields (chapter, track, duration, difficulty, metadata)
    /// come from `base`; the HTML is rendered from the translated body.
    pub fn apply_to(&self, base: &ModuleContent, renderer: &MarkdownRenderer) -> ModuleContent {
        ModuleContent {
            id: base.id.clone(),
            chapter: base.chapter,
            title: self.payload.title.clone(),
            track: base.track.clone(),
            duration: base.duration.clone(),
            difficulty: base.difficulty.clone(),
            prerequisites: self.payload.prerequisite_list(),
            learning_objectives: self.payload.objectives(),
            html: renderer.render(&self.payload.content),
            content: self.payload.content.clone(),
            metadata: base.metadata.clone(),
        }
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid lastUpdated value {raw:?}")))
}

/// RFC 3339, then `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS`, then a
/// bare date at midnight.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Path of the record for one module and language.
pub fn translation_path(translations_dir: &Path, language: &str, module_id: &str) -> Result<PathBuf> {
    check_path_segment("language", language)?;
    check_path_segment("module id", module_id)?;
    Ok(translations_dir
        .join(language)
        .join(format!("{module_id}.json")))
}

/// Reject values that would escape the translations directory.
pub fn check_path_segment(what: &str, value: &str) -> Result<()> {
    let bad = value.is_empty()
        || value == "."
        || value == ".."
        || value.contains(['/', '\\'])
        || value.chars().any(char::is_control);
    if bad {
        return Err(Error::parse(format!("Invalid {what}: {value:?}")));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
