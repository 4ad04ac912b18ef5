//! Identifier and slug utilities.
//!
//! Module ids come from filenames (`07-research-empathy.md` becomes
//! `research-empathy`, chapter 7). Anchor slugs for headings and URL slugs
//! for tracks are derived here so the content, site, and API crates agree
//! on every generated link.

use std::path::Path;

/// Split a file stem into its leading chapter number and the remaining id.
///
/// A stem without a numeric prefix is chapter 0. The separator after the
/// number (`-` or `_`) is dropped.
///
/// # Examples
///
/// ```
/// use createx_core::util::ids::split_chapter_prefix;
///
/// assert_eq!(split_chapter_prefix("07-research-empathy"), (7, "research-empathy".to_string()));
/// assert_eq!(split_chapter_prefix("welcome"), (0, "welcome".to_string()));
/// ```
pub fn split_chapter_prefix(stem: &str) -> (u32, String) {
    let digits: String = stem.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return (0, stem.to_string());
    }

    let rest = &stem[digits.len()..];
    let rest = rest
        .strip_prefix('-')
        .or_else(|| rest.strip_prefix('_'))
        .unwrap_or(rest);

    let chapter = digits.parse().unwrap_or(0);
    if rest.is_empty() {
        (chapter, stem.to_string())
    } else {
        (chapter, rest.to_string())
    }
}

/// Compute `(chapter, id)` from a module file path.
///
/// Returns `None` if the path has no UTF-8 file stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use createx_core::util::ids::module_id_from_path;
///
/// assert_eq!(
///     module_id_from_path(Path::new("content/modules/12-ai-integration.md")),
///     Some((12, "ai-integration".to_string()))
/// );
/// ```
pub fn module_id_from_path(path: &Path) -> Option<(u32, String)> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(split_chapter_prefix)
}

/// Slugify heading text into an HTML anchor id.
///
/// Lower-cases, strips everything that is not a word character, whitespace,
/// or hyphen, and replaces whitespace runs with a single hyphen.
///
/// # Examples
///
/// ```
/// use createx_core::util::ids::slugify;
///
/// assert_eq!(slugify("Research & Empathy"), "research-empathy");
/// assert_eq!(slugify("Step 1: Observe!"), "step-1-observe");
/// ```
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Slugify a track label for use in a URL path segment.
///
/// Unlike [`slugify`], runs of hyphens collapse and edge hyphens are trimmed.
///
/// # Examples
///
/// ```
/// use createx_core::util::ids::track_slug;
///
/// assert_eq!(track_slug("Design Process"), "design-process");
/// assert_eq!(track_slug("AI & Society"), "ai-society");
/// ```
pub fn track_slug(track: &str) -> String {
    slugify(track)
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
