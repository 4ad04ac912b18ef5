//! In-page table of contents.
//!
//! Entries come from every heading in the module body (levels 1 to 6).
//! Anchors are produced by the same slug function the renderer uses for
//! heading ids, so each entry links to its heading.

use createx_content::markdown::{extract_headings, Heading};
use createx_core::escape_html;

use crate::labels::SiteLabels;

/// Headings of a Markdown body, in document order.
pub fn table_of_contents(markdown: &str) -> Vec<Heading> {
    extract_headings(markdown)
}

/// The TOC sidebar, or an empty string when there are no headings.
pub fn render_toc(headings: &[Heading], labels: &SiteLabels) -> String {
    if headings.is_empty() {
        return String::new();
    }

    let items: String = headings
        .iter()
        .map(|h| {
            format!(
                r##"<li class="toc-level-{level}"><a href="#{anchor}">{text}</a></li>"##,
                level = h.level,
                anchor = escape_html(&h.anchor),
                text = escape_html(&h.text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<nav class="toc" aria-label="{title}">
    <h2 class="toc-title">{title}</h2>
    <ul>
      {items}
    </ul>
  </nav>"#,
        title = escape_html(labels.on_this_page),
    )
}
