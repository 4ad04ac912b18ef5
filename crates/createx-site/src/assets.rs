//! Generated static assets: the stylesheet, the search script, and the
//! search index it queries.

use createx_content::ModuleContent;
use createx_core::truncate_chars;
use serde::{Deserialize, Serialize};

/// Characters of module body kept in each search index entry.
pub const SEARCH_EXCERPT_CHARS: usize = 500;

/// Maximum results the search dropdown shows.
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// One entry of `assets/search-index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndexEntry {
    /// Module id.
    pub id: String,
    /// Module title.
    pub title: String,
    /// Track label.
    pub track: String,
    /// Leading excerpt of the Markdown body.
    pub content: String,
    /// Page path relative to the language root.
    pub url: String,
}

/// Build the search index for a catalog.
pub fn search_index(modules: &[ModuleContent]) -> Vec<SearchIndexEntry> {
    modules
        .iter()
        .map(|m| SearchIndexEntry {
            id: m.id.clone(),
            title: m.title.clone(),
            track: m.track.clone(),
            content: truncate_chars(&m.content, SEARCH_EXCERPT_CHARS).to_string(),
            url: format!("modules/{}.html", m.id),
        })
        .collect()
}

/// The client-side search script.
///
/// Reads its base path from the `data-base` attribute of its own `<script>`
/// tag, so one script serves pages at any depth.
pub fn search_js() -> String {
    SEARCH_JS.replace("__LIMIT__", &SEARCH_RESULT_LIMIT.to_string())
}

const SEARCH_JS: &str = r##"(function () {
  'use strict';

  var script = document.currentScript;
  var base = (script && script.getAttribute('data-base')) || '';
  var input = document.getElementById('search-input');
  var results = document.getElementById('search-results');
  if (!input || !results) {
    return;
  }

  var emptyText = results.getAttribute('data-empty') || 'No results';
  var index = null;

  function loadIndex() {
    if (index) {
      return Promise.resolve(index);
    }
    return fetch(base + 'assets/search-index.json')
      .then(function (response) { return response.json(); })
      .then(function (data) { index = data; return data; });
  }

  function escapeHtml(text) {
    return String(text)
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;')
      .replace(/"/g, '&quot;');
  }

  function matches(entry, query) {
    return entry.title.toLowerCase().indexOf(query) !== -1 ||
      entry.track.toLowerCase().indexOf(query) !== -1 ||
      entry.content.toLowerCase().indexOf(query) !== -1;
  }

  function rank(entry, query) {
    return entry.title.toLowerCase().indexOf(query) !== -1 ? 0 : 1;
  }

  function render(hits) {
    if (hits.length === 0) {
      results.innerHTML = '<div class="search-empty">' + escapeHtml(emptyText) + '</div>';
    } else {
      results.innerHTML = hits.map(function (entry) {
        return '<a class="search-hit" href="' + base + escapeHtml(entry.url) + '">' +
          '<span class="search-hit-title">' + escapeHtml(entry.title) + '</span>' +
          '<span class="search-hit-track">' + escapeHtml(entry.track) + '</span></a>';
      }).join('');
    }
    results.hidden = false;
  }

  input.addEventListener('input', function () {
    var query = input.value.trim().toLowerCase();
    if (query.length === 0) {
      results.hidden = true;
      results.innerHTML = '';
      return;
    }
    loadIndex().then(function (entries) {
      var hits = entries
        .filter(function (entry) { return matches(entry, query); })
        .sort(function (a, b) { return rank(a, query) - rank(b, query); })
        .slice(0, __LIMIT__);
      render(hits);
    });
  });

  document.addEventListener('click', function (event) {
    if (!results.contains(event.target) && event.target !== input) {
      results.hidden = true;
    }
  });
})();
"##;

/// The site stylesheet.
pub const STYLES_CSS: &str = r#":root {
  --color-bg: #f8fafc;
  --color-surface: #ffffff;
  --color-text: #0f172a;
  --color-muted: #64748b;
  --color-border: #e2e8f0;
  --color-primary: #4f46e5;
  --color-primary-soft: #eef2ff;
  --color-accent: #f59e0b;
  --radius: 12px;
  --shadow: 0 1px 3px rgba(15, 23, 42, 0.08), 0 8px 24px rgba(15, 23, 42, 0.06);
  --font-body: 'Inter', system-ui, -apple-system, 'Segoe UI', Roboto, 'PingFang SC', 'Noto Sans SC', sans-serif;
  --font-mono: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
}

* { box-sizing: border-box; }
html { scroll-behavior: smooth; scroll-padding-top: 80px; }
body { margin: 0; font-family: var(--font-body); background: var(--color-bg); color: var(--color-text); line-height: 1.6; }
a { color: var(--color-primary); text-decoration: none; }
a:hover { text-decoration: underline; }

.site-header { position: sticky; top: 0; z-index: 10; display: flex; align-items: center; gap: 1.5rem; padding: 0.75rem 2rem; background: var(--color-surface); border-bottom: 1px solid var(--color-border); }
.site-title { font-weight: 700; color: var(--color-text); }
.search { position: relative; margin-left: auto; width: min(360px, 50vw); }
.search input { width: 100%; padding: 0.5rem 0.75rem; border: 1px solid var(--color-border); border-radius: 999px; font: inherit; }
.search-results { position: absolute; top: calc(100% + 4px); left: 0; right: 0; background: var(--color-surface); border: 1px solid var(--color-border); border-radius: var(--radius); box-shadow: var(--shadow); overflow: hidden; }
.search-hit { display: flex; justify-content: space-between; gap: 1rem; padding: 0.5rem 0.75rem; color: var(--color-text); }
.search-hit:hover { background: var(--color-primary-soft); text-decoration: none; }
.search-hit-track, .search-empty { color: var(--color-muted); font-size: 0.85rem; }
.search-empty { padding: 0.5rem 0.75rem; }

main { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.breadcrumb { font-size: 0.9rem; color: var(--color-muted); margin-bottom: 1rem; }
.breadcrumb a { color: var(--color-muted); }

.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; margin: 1.5rem 0 2.5rem; }
.stat { background: var(--color-surface); border-radius: var(--radius); box-shadow: var(--shadow); padding: 1.25rem; }
.stat-value { display: block; font-size: 2rem; font-weight: 700; color: var(--color-primary); }
.stat-label { color: var(--color-muted); }

.track-grid, .module-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; margin-bottom: 2.5rem; }
.card { background: var(--color-surface); border: 1px solid var(--color-border); border-radius: var(--radius); padding: 1.25rem; }
.card h3 { margin: 0 0 0.5rem; font-size: 1.1rem; }
.card p { margin: 0.5rem 0 0; color: var(--color-muted); font-size: 0.95rem; }
.card ul { margin: 0.5rem 0 0; padding-left: 1.1rem; }
.more { color: var(--color-muted); font-size: 0.85rem; }

.chips { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 0.5rem 0 1rem; }
.chip { background: var(--color-primary-soft); color: var(--color-primary); border-radius: 999px; padding: 0.15rem 0.75rem; font-size: 0.85rem; }

.module-layout { display: grid; grid-template-columns: 240px minmax(0, 1fr); gap: 2.5rem; align-items: start; }
.toc { position: sticky; top: 80px; font-size: 0.9rem; }
.toc-title { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.05em; color: var(--color-muted); }
.toc ul { list-style: none; margin: 0; padding: 0; }
.toc li { margin: 0.25rem 0; }
.toc-level-2 { padding-left: 0.75rem; }
.toc-level-3 { padding-left: 1.5rem; }
.toc-level-4, .toc-level-5, .toc-level-6 { padding-left: 2.25rem; }

.callout { background: var(--color-surface); border-left: 4px solid var(--color-accent); border-radius: var(--radius); padding: 1rem 1.25rem; margin: 1rem 0; }
.callout h2 { margin: 0 0 0.5rem; font-size: 1rem; }
.callout.objectives { border-left-color: var(--color-primary); }

.content table { border-collapse: collapse; width: 100%; }
.content th, .content td { border: 1px solid var(--color-border); padding: 0.5rem; text-align: left; }
.content pre { background: #0f172a; color: #e2e8f0; padding: 1rem; border-radius: var(--radius); overflow-x: auto; }
.content code { font-family: var(--font-mono); font-size: 0.9em; }

.pager { display: flex; justify-content: space-between; gap: 1rem; margin-top: 3rem; padding-top: 1.5rem; border-top: 1px solid var(--color-border); }
.pager a { display: block; max-width: 45%; }
.pager .next { margin-left: auto; text-align: right; }
.pager small { display: block; color: var(--color-muted); }

@media (max-width: 800px) {
  .module-layout { grid-template-columns: 1fr; }
  .toc { position: static; }
  .site-header { flex-wrap: wrap; }
  .search { width: 100%; }
}
"#;
