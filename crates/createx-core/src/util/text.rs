//! Small text helpers used by the site templates and search index.

/// Escape text for safe inclusion in HTML element content or attributes.
///
/// Uses the same escaper as the Markdown renderer, so `&`, `<`, `>`, `"`
/// and `'` come out identically in templates and rendered bodies.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String is infallible.
    let _ = pulldown_cmark_escape::escape_html(&mut out, text);
    out
}

/// Take at most `max_chars` characters from `text`.
///
/// Counts Unicode scalar values, so Chinese content is never split inside a
/// character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
