//! Markdown to HTML rendering.
//!
//! Wraps `pulldown-cmark` with the GitHub-flavored extensions module files
//! use (tables, strikethrough, task lists, footnotes, bare-URL autolinks)
//! plus two optional passes over the event stream:
//!
//! - `heading_ids`: stamps each heading with the same anchor the table of
//!   contents links to
//! - `sanitize`: raw HTML is emitted as escaped text and `javascript:` links
//!   are neutralized
//!
//! Rendering never fails from the caller's point of view. If the renderer
//! panics on some input, [`MarkdownRenderer::render`] logs the failure and
//! returns [`fallback_html`] (text with newlines turned into `<br/>`), so a
//! content error can never blank a page.
//!
//! # Example
//!
//! ```rust
//! use createx_content::render::{MarkdownRenderer, RenderOptions};
//!
//! let renderer = MarkdownRenderer::new(RenderOptions::default());
//! let html = renderer.render("# Hello\n\n~~old~~ new");
//! assert!(html.contains("<h1 id=\"hello\">Hello</h1>"));
//! assert!(html.contains("<del>old</del>"));
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::LazyLock;

use createx_core::{escape_html, slugify, Error, Result};
use pulldown_cmark::{html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd};
use regex::Regex;

static BARE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[^\s<>。，、；：！？）」』】《》“”]+").expect("Invalid bare URL regex")
});

/// Punctuation that ends a sentence around a URL rather than belonging to it.
const URL_TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', '\'', '"'];

/// Options for one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape raw HTML instead of passing it through.
    pub sanitize: bool,
    /// Add slug `id` attributes to headings.
    pub heading_ids: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sanitize: false,
            heading_ids: true,
        }
    }
}

/// Markdown renderer with fixed options.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Create a renderer that only toggles sanitization.
    pub fn with_sanitize(sanitize: bool) -> Self {
        Self::new(RenderOptions {
            sanitize,
            ..RenderOptions::default()
        })
    }

    /// The options this renderer applies.
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render Markdown to HTML, degrading to [`fallback_html`] on failure.
    pub fn render(&self, markdown: &str) -> String {
        self.render_with(markdown, render_events)
    }

    /// [`render`](Self::render) with the event pipeline supplied by the
    /// caller.
    pub(crate) fn render_with<F>(&self, markdown: &str, stage: F) -> String
    where
        F: FnOnce(&str, RenderOptions) -> String,
    {
        match catch_render(markdown, self.options, stage) {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Markdown rendering failed, using line-break fallback: {e}");
                fallback_html(markdown, self.options.sanitize)
            }
        }
    }
}

/// Render Markdown to HTML, reporting a renderer panic as [`Error::Render`].
pub fn try_render(markdown: &str, options: RenderOptions) -> Result<String> {
    catch_render(markdown, options, render_events)
}

fn catch_render<F>(markdown: &str, options: RenderOptions, stage: F) -> Result<String>
where
    F: FnOnce(&str, RenderOptions) -> String,
{
    panic::catch_unwind(AssertUnwindSafe(|| stage(markdown, options))).map_err(|payload| {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Error::Render(detail)
    })
}

/// Degraded rendering: the text unrendered, with newlines as `<br/>`.
///
/// When `sanitize` is set the text is HTML-escaped first.
pub fn fallback_html(markdown: &str, sanitize: bool) -> String {
    let text = if sanitize {
        escape_html(markdown)
    } else {
        markdown.to_string()
    };
    text.replace("\r\n", "\n").replace('\n', "<br/>")
}

/// The GitHub-flavored extension set.
pub fn gfm_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_GFM
}

fn render_events(markdown: &str, options: RenderOptions) -> String {
    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, gfm_options()).collect();

    if options.heading_ids {
        assign_heading_ids(&mut events);
    }
    let mut events = autolink_bare_urls(events);
    if options.sanitize {
        events = events.into_iter().map(sanitize_event).collect();
    }

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

fn assign_heading_ids(events: &mut [Event<'_>]) {
    let mut i = 0;
    while i < events.len() {
        let needs_id = matches!(&events[i], Event::Start(Tag::Heading { id: None, .. }));
        if !needs_id {
            i += 1;
            continue;
        }

        let mut text = String::new();
        let mut j = i + 1;
        while j < events.len() {
            match &events[j] {
                Event::End(TagEnd::Heading(_)) => break,
                Event::Text(t) | Event::Code(t) => text.push_str(t),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                _ => {}
            }
            j += 1;
        }

        let anchor = slugify(text.trim());
        if !anchor.is_empty() {
            if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
                *id = Some(CowStr::from(anchor));
            }
        }
        i = j + 1;
    }
}

/// Join adjacent text events; the parser may split one run of text at
/// characters that could have started inline markup.
fn merge_text_events(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out: Vec<Event<'_>> = Vec::with_capacity(events.len());
    for event in events {
        if let Event::Text(next) = &event {
            if let Some(Event::Text(prev)) = out.last_mut() {
                let mut joined = String::from(&**prev);
                joined.push_str(next);
                *prev = CowStr::from(joined);
                continue;
            }
        }
        out.push(event);
    }
    out
}

fn autolink_bare_urls(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let events = merge_text_events(events);
    let mut out = Vec::with_capacity(events.len());
    let mut link_depth = 0usize;
    let mut in_code_block = false;

    for event in events {
        match &event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. }) => link_depth += 1,
            Event::End(TagEnd::Link | TagEnd::Image) => link_depth = link_depth.saturating_sub(1),
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            _ => {}
        }

        match event {
            Event::Text(text) if link_depth == 0 && !in_code_block && BARE_URL_RE.is_match(&text) => {
                split_urls(&text, &mut out);
            }
            other => out.push(other),
        }
    }

    out
}

fn split_urls<'a>(text: &str, out: &mut Vec<Event<'a>>) {
    let mut last = 0;
    for m in BARE_URL_RE.find_iter(text) {
        let url = m
            .as_str()
            .trim_end_matches(URL_TRAILING_PUNCTUATION);
        let start = m.start();
        let end = start + url.len();

        if start > last {
            out.push(Event::Text(CowStr::from(text[last..start].to_string())));
        }
        out.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: CowStr::from(url.to_string()),
            title: CowStr::from(""),
            id: CowStr::from(""),
        }));
        out.push(Event::Text(CowStr::from(url.to_string())));
        out.push(Event::End(TagEnd::Link));
        last = end;
    }
    if last < text.len() {
        out.push(Event::Text(CowStr::from(text[last..].to_string())));
    }
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if is_script_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::from("#"),
            title,
            id,
        }),
        other => other,
    }
}

fn is_script_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("javascript:") || lower.starts_with("vbscript:") || lower.starts_with("data:text/html")
}

// ============================================================================
// Tests
// ============================================================================
