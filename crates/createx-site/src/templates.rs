//! HTML page templates.
//!
//! Pages are assembled with `format!` from small fragment functions. Every
//! piece of module text is escaped except `ModuleContent.html`, which is
//! the renderer's output and inserted as is.
//!
//! Links are relative so the built tree works from any base path: pages at
//! the language root use an empty `root` prefix, pages one level down use
//! `"../"`.

use std::collections::{HashMap, HashSet};

use createx_content::extract::find_h1;
use createx_content::markdown::extract_first_paragraph;
use createx_content::{ModuleContent, ModuleStats};
use createx_core::{escape_html, track_slug};

use crate::labels::SiteLabels;
use crate::toc::{render_toc, table_of_contents};

/// Modules shown on each track card of the index page.
pub const TRACK_PREVIEW_COUNT: usize = 3;

const SUMMARY_CHARS: usize = 160;

/// File stem of a track's page under `tracks/`.
pub fn track_file_stem(track: &str) -> String {
    let slug = track_slug(track);
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

/// Page stems for the tracks of one build.
///
/// Two track names can slug to the same stem ("Design Process" and
/// "design-process"). The first track keeps the plain stem and later ones
/// get `-2`, `-3`, and so on, so every track has its own page.
#[derive(Debug, Clone, Default)]
pub struct TrackPages {
    stems: HashMap<String, String>,
}

impl TrackPages {
    /// Assign stems to `tracks` in the given order.
    pub fn new<'a>(tracks: impl IntoIterator<Item = &'a str>) -> Self {
        let mut stems = HashMap::new();
        let mut taken = HashSet::new();
        for track in tracks {
            if stems.contains_key(track) {
                continue;
            }
            let base = track_file_stem(track);
            let mut stem = base.clone();
            let mut n = 2;
            while !taken.insert(stem.clone()) {
                stem = format!("{base}-{n}");
                n += 1;
            }
            if stem != base {
                log::warn!("Track '{track}' collides with another track on tracks/{base}.html; using tracks/{stem}.html");
            }
            stems.insert(track.to_string(), stem);
        }
        Self { stems }
    }

    /// Stem of `track`'s page. Tracks not seen at construction fall back
    /// to [`track_file_stem`].
    pub fn stem(&self, track: &str) -> String {
        self.stems
            .get(track)
            .cloned()
            .unwrap_or_else(|| track_file_stem(track))
    }
}

/// Wrap a page body in the shared document shell.
pub fn layout(title: &str, body: &str, root: &str, language: &str, labels: &SiteLabels) -> String {
    let page_title = if title == labels.site_title {
        escape_html(title)
    } else {
        format!("{} · {}", escape_html(title), escape_html(labels.site_title))
    };

    format!(
        r#"<!doctype html>
<html lang="{lang}">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{page_title}</title>
  <link rel="stylesheet" href="{root}assets/styles.css" />
</head>
<body>
  <header class="site-header">
    <a class="site-title" href="{root}index.html">{site_title}</a>
    <div class="search">
      <input id="search-input" type="search" placeholder="{placeholder}" autocomplete="off" />
      <div id="search-results" class="search-results" data-empty="{no_results}" hidden></div>
    </div>
  </header>
  <main>
{body}
  </main>
  <script src="{root}assets/search.js" data-base="{root}"></script>
</body>
</html>
"#,
        lang = escape_html(language),
        site_title = escape_html(labels.site_title),
        placeholder = escape_html(labels.search_placeholder),
        no_results = escape_html(labels.no_results),
    )
}

/// Breadcrumb trail; the last item is the current page and is not linked.
pub fn breadcrumb(items: &[(&str, Option<String>)]) -> String {
    let parts: Vec<String> = items
        .iter()
        .map(|(label, href)| match href {
            Some(href) => format!(r#"<a href="{}">{}</a>"#, escape_html(href), escape_html(label)),
            None => format!(r#"<span aria-current="page">{}</span>"#, escape_html(label)),
        })
        .collect();
    format!(r#"<nav class="breadcrumb">{}</nav>"#, parts.join(" › "))
}

/// Chapter, track, duration, and difficulty chips.
pub fn chips(module: &ModuleContent, labels: &SiteLabels) -> String {
    format!(
        r#"<div class="chips">
      <span class="chip">{chapter} {n}</span>
      <span class="chip">{track}: {track_value}</span>
      <span class="chip">{duration}: {duration_value}</span>
      <span class="chip">{difficulty}: {difficulty_value}</span>
    </div>"#,
        chapter = escape_html(labels.chapter),
        n = module.chapter,
        track = escape_html(labels.track),
        track_value = escape_html(&module.track),
        duration = escape_html(labels.duration),
        duration_value = escape_html(&module.duration),
        difficulty = escape_html(labels.difficulty),
        difficulty_value = escape_html(&module.difficulty),
    )
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect::<Vec<_>>()
        .join("")
}

/// Prerequisites callout; empty when there are none.
pub fn prerequisites_block(module: &ModuleContent, labels: &SiteLabels) -> String {
    if module.prerequisites.is_empty() {
        return String::new();
    }
    format!(
        r#"<section class="callout prerequisites"><h2>{}</h2><ul>{}</ul></section>"#,
        escape_html(labels.prerequisites),
        list_items(&module.prerequisites)
    )
}

/// Learning objectives callout; empty when there are none.
pub fn objectives_block(module: &ModuleContent, labels: &SiteLabels) -> String {
    if module.learning_objectives.is_empty() {
        return String::new();
    }
    format!(
        r#"<section class="callout objectives"><h2>{}</h2><ul>{}</ul></section>"#,
        escape_html(labels.learning_objectives),
        list_items(&module.learning_objectives)
    )
}

/// Previous/next links. `prev` and `next` are `(id, title)` pairs.
pub fn pager(
    prev: Option<(&str, &str)>,
    next: Option<(&str, &str)>,
    labels: &SiteLabels,
) -> String {
    if prev.is_none() && next.is_none() {
        return String::new();
    }
    let link = |class: &str, label: &str, (id, title): (&str, &str)| {
        format!(
            r#"<a class="{class}" href="{id}.html"><small>{label}</small>{title}</a>"#,
            id = escape_html(id),
            label = escape_html(label),
            title = escape_html(title),
        )
    };
    format!(
        r#"<nav class="pager">{}{}</nav>"#,
        prev.map(|p| link("prev", labels.previous, p)).unwrap_or_default(),
        next.map(|n| link("next", labels.next, n)).unwrap_or_default(),
    )
}

/// A module card linking to its page.
pub fn module_card(module: &ModuleContent, root: &str, labels: &SiteLabels) -> String {
    let summary = extract_first_paragraph(&module.content, SUMMARY_CHARS)
        .map(|p| format!("<p>{}</p>", escape_html(&p)))
        .unwrap_or_default();
    format!(
        r#"<article class="card module-card">
      <h3><a href="{root}modules/{id}.html">{title}</a></h3>
      <div class="chips"><span class="chip">{chapter} {n}</span><span class="chip">{duration}</span><span class="chip">{difficulty}</span></div>
      {summary}
    </article>"#,
        id = escape_html(&module.id),
        title = escape_html(&module.title),
        chapter = escape_html(labels.chapter),
        n = module.chapter,
        duration = escape_html(&module.duration),
        difficulty = escape_html(&module.difficulty),
    )
}

/// Modules grouped by track, tracks in order of first appearance.
pub fn group_by_track(modules: &[ModuleContent]) -> Vec<(String, Vec<&ModuleContent>)> {
    let mut groups: Vec<(String, Vec<&ModuleContent>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for module in modules {
        match positions.get(module.track.as_str()) {
            Some(&i) => groups[i].1.push(module),
            None => {
                positions.insert(module.track.as_str(), groups.len());
                groups.push((module.track.clone(), vec![module]));
            }
        }
    }
    for (_, members) in &mut groups {
        members.sort_by_key(|m| m.chapter);
    }
    groups
}

fn track_card(
    track: &str,
    members: &[&ModuleContent],
    pages: &TrackPages,
    labels: &SiteLabels,
) -> String {
    let preview: String = members
        .iter()
        .take(TRACK_PREVIEW_COUNT)
        .map(|m| {
            format!(
                r#"<li><a href="modules/{}.html">{}</a></li>"#,
                escape_html(&m.id),
                escape_html(&m.title)
            )
        })
        .collect();
    let overflow = members.len().saturating_sub(TRACK_PREVIEW_COUNT);
    let more = if overflow > 0 {
        format!(r#"<p class="more">{}</p>"#, escape_html(&labels.more(overflow)))
    } else {
        String::new()
    };
    format!(
        r#"<article class="card track-card">
      <h3><a href="tracks/{stem}.html">{track}</a> <span class="more">({count})</span></h3>
      <ul>{preview}</ul>
      {more}
    </article>"#,
        stem = escape_html(&pages.stem(track)),
        track = escape_html(track),
        count = members.len(),
    )
}

/// Body of `index.html`.
pub fn index_page(
    modules: &[ModuleContent],
    stats: &ModuleStats,
    pages: &TrackPages,
    labels: &SiteLabels,
) -> String {
    let groups = group_by_track(modules);
    let track_cards: Vec<String> = groups
        .iter()
        .map(|(track, members)| track_card(track, members, pages, labels))
        .collect();
    let module_cards: Vec<String> = modules
        .iter()
        .map(|m| module_card(m, "", labels))
        .collect();

    format!(
        r#"    <h1>{site_title}</h1>
    <section class="stats">
      <div class="stat"><span class="stat-value">{total}</span><span class="stat-label">{total_label}</span></div>
      <div class="stat"><span class="stat-value">{track_count}</span><span class="stat-label">{tracks_label}</span></div>
      <div class="stat"><span class="stat-value">{average}</span><span class="stat-label">{average_label}</span></div>
    </section>
    <h2>{tracks_heading}</h2>
    <section class="track-grid">
    {track_cards}
    </section>
    <h2>{all_modules}</h2>
    <section class="module-grid">
    {module_cards}
    </section>"#,
        site_title = escape_html(labels.site_title),
        total = stats.total_modules,
        total_label = escape_html(labels.total_modules),
        track_count = stats.track_counts.len(),
        tracks_label = escape_html(labels.total_tracks),
        average = escape_html(&stats.average_duration),
        average_label = escape_html(labels.average_duration),
        tracks_heading = escape_html(labels.tracks),
        track_cards = track_cards.join("\n    "),
        all_modules = escape_html(labels.all_modules),
        module_cards = module_cards.join("\n    "),
    )
}

/// Body of `modules/{id}.html`.
pub fn module_page(
    module: &ModuleContent,
    prev: Option<(&str, &str)>,
    next: Option<(&str, &str)>,
    pages: &TrackPages,
    labels: &SiteLabels,
) -> String {
    let crumbs = breadcrumb(&[
        (labels.home, Some("../index.html".to_string())),
        (
            module.track.as_str(),
            Some(format!("../tracks/{}.html", pages.stem(&module.track))),
        ),
        (module.title.as_str(), None),
    ]);
    // The body usually opens with its own H1; only add one when it does not.
    let title = if find_h1(&module.content).is_none() {
        format!("<h1>{}</h1>", escape_html(&module.title))
    } else {
        String::new()
    };
    let toc = render_toc(&table_of_contents(&module.content), labels);

    format!(
        r#"    {crumbs}
    <div class="module-layout">
  {toc}
  <article class="module">
    {title}
    {chips}
    {prerequisites}
    {objectives}
    <div class="content">
{html}
    </div>
    {pager}
  </article>
    </div>"#,
        chips = chips(module, labels),
        prerequisites = prerequisites_block(module, labels),
        objectives = objectives_block(module, labels),
        html = module.html,
        pager = pager(prev, next, labels),
    )
}

/// Body of `tracks/{slug}.html`.
pub fn track_page(track: &str, members: &[&ModuleContent], labels: &SiteLabels) -> String {
    let crumbs = breadcrumb(&[
        (labels.home, Some("../index.html".to_string())),
        (track, None),
    ]);
    let cards: Vec<String> = members
        .iter()
        .map(|m| module_card(m, "../", labels))
        .collect();
    format!(
        r#"    {crumbs}
    <h1>{title}</h1>
    <section class="module-grid">
    {cards}
    </section>"#,
        title = escape_html(track),
        cards = cards.join("\n    "),
    )
}

// ============================================================================
// Tests
// ============================================================================
