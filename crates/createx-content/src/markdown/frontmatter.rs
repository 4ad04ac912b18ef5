//! Optional YAML front-matter on module files.
//!
//! A module file may open with a `---` fenced YAML block:
//!
//! ```markdown
//! ---
//! track: Design Process
//! difficulty: Advanced
//! facilitator_notes: Bring sticky notes.
//! ---
//!
//! # Research & Empathy
//! ```
//!
//! The keys in [`MODELED_KEYS`] override the matching body markers
//! (`**Track:** ...`). Any other key ends up in `ModuleContent.metadata`.
//!
//! ```rust
//! use createx_content::markdown::extract_frontmatter;
//!
//! let fm = extract_frontmatter("---\ntrack: Foundations\nchapter: 3\n---\n\n# Welcome");
//! assert_eq!(fm.get_scalar("track").as_deref(), Some("Foundations"));
//! assert_eq!(fm.get_u32("chapter"), Some(3));
//! assert_eq!(fm.body().trim(), "# Welcome");
//! ```

use serde_yaml::{Mapping, Value};

use crate::model::Metadata;

/// Front-matter keys that map onto `ModuleContent` fields.
pub const MODELED_KEYS: &[&str] = &[
    "title",
    "track",
    "duration",
    "difficulty",
    "prerequisites",
    "chapter",
];

/// Front-matter fields of one module file plus the Markdown after them.
///
/// A file without front-matter, or with YAML that is not a mapping, has no
/// fields; every lookup returns `None`.
#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    fields: Mapping,
    body: &'a str,
}

impl<'a> Frontmatter<'a> {
    /// The Markdown body, front-matter removed.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Whether no front-matter fields were found.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// A scalar as text. `duration: 45` reads as `"45"`.
    pub fn get_scalar(&self, key: &str) -> Option<String> {
        match self.field(key)? {
            Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// A non-negative integer, written as a number or a numeric string.
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        match self.field(key)? {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// A list, written as a YAML sequence or one comma-separated string.
    /// Blank items are dropped.
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        let items: Vec<String> = match self.field(key)? {
            Value::Sequence(seq) => seq
                .iter()
                .filter_map(Value::as_str)
                .map(|s| s.trim().to_string())
                .collect(),
            Value::String(s) => s.split(',').map(|s| s.trim().to_string()).collect(),
            _ => return None,
        };
        Some(items.into_iter().filter(|s| !s.is_empty()).collect())
    }

    /// Every string-keyed field outside [`MODELED_KEYS`], as JSON.
    pub fn extra_fields(&self) -> Metadata {
        let mut extra = Metadata::new();
        for (key, value) in &self.fields {
            let Some(key) = key.as_str() else { continue };
            if MODELED_KEYS.contains(&key) {
                continue;
            }
            match serde_json::to_value(value) {
                Ok(json) => {
                    extra.insert(key.to_string(), json);
                }
                Err(e) => log::warn!("Skipping front-matter field '{key}': {e}"),
            }
        }
        extra
    }
}

/// Split `content` into its YAML block and body.
///
/// Returns `None` for the YAML when the file does not open with `---` or
/// the block is never closed; the body is then the whole file.
fn split_block(content: &str) -> (Option<&str>, &str) {
    let text = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = text.strip_prefix("---") else {
        return (None, content);
    };
    // The opening fence must be alone on its line.
    let Some((opening, after_open)) = rest.split_once('\n') else {
        return (None, content);
    };
    if !opening.trim().is_empty() {
        return (None, content);
    }

    let (yaml, after_close) = if let Some(after) = after_open.strip_prefix("---") {
        ("", after)
    } else if let Some(pos) = after_open.find("\n---") {
        (&after_open[..pos], &after_open[pos + 4..])
    } else {
        log::warn!("Front-matter opened with '---' but never closed");
        return (None, content);
    };

    let body = match after_close.split_once('\n') {
        Some((_, body)) => body,
        None => "",
    };
    (Some(yaml), body)
}

/// Read the front-matter of a module file.
///
/// Never fails. YAML that does not parse, or parses to something other than
/// a mapping, is logged and treated as no fields; the body still starts
/// after the closing fence.
pub fn extract_frontmatter(content: &str) -> Frontmatter<'_> {
    let (yaml, body) = split_block(content);
    let fields = match yaml.map(serde_yaml::from_str::<Value>) {
        None => Mapping::new(),
        Some(Ok(Value::Mapping(fields))) => fields,
        Some(Ok(Value::Null)) => Mapping::new(),
        Some(Ok(other)) => {
            log::warn!("Front-matter is not a mapping, ignoring it: {other:?}");
            Mapping::new()
        }
        Some(Err(e)) => {
            log::warn!("Failed to parse front-matter YAML: {e}");
            Mapping::new()
        }
    };
    Frontmatter { fields, body }
}
