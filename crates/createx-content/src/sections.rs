//! Splitting modules into UI sections.
//!
//! The interactive guide pages step through a module one [`Section`] at a
//! time. Sections are cut at `## ` headings; whatever precedes the first
//! `## ` (minus the `# ` title line) becomes an `overview` section.
//!
//! Whether a section is `interactive` is decided by a [`SectionClassifier`].
//! The default [`KeywordClassifier`] is a plain keyword match and can be
//! replaced per manager.

use std::collections::HashSet;

use createx_core::slugify;

use crate::markdown::helpers::split_h2_blocks;
use crate::model::{Section, SectionKind};

/// Id and title of the section built from a module's preamble.
pub const OVERVIEW_ID: &str = "overview";
const OVERVIEW_TITLE: &str = "Overview";

/// Decides the kind of a section from its title and body.
pub trait SectionClassifier: Send + Sync {
    /// Classify one section.
    fn classify(&self, title: &str, content: &str) -> SectionKind;
}

/// Marks a section interactive when its title or body mentions one of a set
/// of activity keywords.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new([
            "activity",
            "exercise",
            "workshop",
            "practice",
            "quiz",
            "reflection",
            "discussion",
            "hands-on",
            "活动",
            "练习",
            "讨论",
        ])
    }
}

impl KeywordClassifier {
    /// A classifier over a custom keyword set (matched case-insensitively).
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl SectionClassifier for KeywordClassifier {
    fn classify(&self, title: &str, content: &str) -> SectionKind {
        let haystack = format!("{title}\n{content}").to_lowercase();
        if self.keywords.iter().any(|k| haystack.contains(k.as_str())) {
            SectionKind::Interactive
        } else {
            SectionKind::Content
        }
    }
}

/// Split a module body into sections.
pub fn split_sections(body: &str, classifier: &dyn SectionClassifier) -> Vec<Section> {
    let mut used_ids = HashSet::new();
    let mut sections = Vec::new();

    for block in split_h2_blocks(body) {
        let (title, content) = match block.heading {
            Some(heading) => (heading, block.body),
            None => {
                let content = strip_title_line(&block.body);
                if content.is_empty() {
                    continue;
                }
                (OVERVIEW_TITLE.to_string(), content)
            }
        };

        let base = if sections.is_empty() && title == OVERVIEW_TITLE {
            OVERVIEW_ID.to_string()
        } else {
            slugify(&title)
        };
        let id = unique_id(&base, &mut used_ids);
        let kind = classifier.classify(&title, &content);

        sections.push(Section {
            id,
            title,
            content,
            kind,
        });
    }

    sections
}

fn strip_title_line(preamble: &str) -> String {
    preamble
        .lines()
        .filter(|line| !line.starts_with("# "))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn unique_id(base: &str, used: &mut HashSet<String>) -> String {
    let base = if base.is_empty() { "section" } else { base };
    let mut candidate = base.to_string();
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{base}-{n}");
        n += 1;
    }
    candidate
}

// ============================================================================
// Tests
// ============================================================================
