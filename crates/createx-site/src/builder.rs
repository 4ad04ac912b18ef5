//! The static site build.
//!
//! One build writes the site for one language:
//!
//! ```text
//! {output}/{lang}/index.html
//! {output}/{lang}/modules/{id}.html
//! {output}/{lang}/tracks/{track-slug}.html
//! {output}/{lang}/assets/styles.css
//! {output}/{lang}/assets/search.js
//! {output}/{lang}/assets/search-index.json
//! ```
//!
//! Stages run strictly in order (see [`BuildStage`]). Files are overwritten
//! in place; a failed build leaves whatever was written so far, and
//! rebuilding is the recovery.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use createx_content::translation::check_path_segment;
use createx_content::{query, ContentManager};
use createx_core::{Error, Result};
use tokio::fs;

use crate::assets::{search_index, search_js, STYLES_CSS};
use crate::labels::SiteLabels;
use crate::templates::{self, group_by_track, TrackPages};

/// Stages of one build, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    /// Create the output directories.
    Init,
    /// Load the catalog and compute stats and navigation.
    Load,
    /// Write `index.html`.
    Index,
    /// Write one page per module.
    Modules,
    /// Write one page per track.
    Tracks,
    /// Write the stylesheet and search script.
    Assets,
    /// Write the search index.
    SearchIndex,
    /// Build finished.
    Done,
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Load => "load",
            Self::Index => "index",
            Self::Modules => "modules",
            Self::Tracks => "tracks",
            Self::Assets => "assets",
            Self::SearchIndex => "search-index",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Builds the static site from a content manager's catalog.
pub struct SiteBuilder {
    manager: Arc<ContentManager>,
    output_dir: PathBuf,
}

impl SiteBuilder {
    /// Create a builder writing under `output_dir`.
    pub fn new(manager: Arc<ContentManager>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            manager,
            output_dir: output_dir.into(),
        }
    }

    /// Root of all language trees.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the site for `language` is written.
    pub fn language_dir(&self, language: &str) -> PathBuf {
        self.output_dir.join(language)
    }

    /// Build the site for `language` and return its directory.
    ///
    /// The catalog is re-read from disk. For languages other than the
    /// source language each module is replaced by its translation when one
    /// exists.
    pub async fn build(&self, language: &str) -> Result<PathBuf> {
        check_path_segment("language", language)?;
        let labels = SiteLabels::for_language(language);

        enter(BuildStage::Init, language);
        let out = self.language_dir(language);
        for dir in ["modules", "tracks", "assets"] {
            let path = out.join(dir);
            fs::create_dir_all(&path)
                .await
                .map_err(|e| Error::io_with_path(e, &path))?;
        }

        enter(BuildStage::Load, language);
        self.manager.load_all_modules().await?;
        let modules = self.manager.load_localized(language).await?;
        let stats = query::stats(&modules);
        let navigation = query::navigation(&modules);
        let titles: HashMap<&str, &str> = modules
            .iter()
            .map(|m| (m.id.as_str(), m.title.as_str()))
            .collect();
        let groups = group_by_track(&modules);
        let pages = TrackPages::new(groups.iter().map(|(track, _)| track.as_str()));

        enter(BuildStage::Index, language);
        let body = templates::index_page(&modules, &stats, &pages, labels);
        let page = templates::layout(labels.site_title, &body, "", language, labels);
        write_file(&out.join("index.html"), &page).await?;

        enter(BuildStage::Modules, language);
        for (module, nav) in modules.iter().zip(&navigation) {
            let body = templates::module_page(
                module,
                neighbor(&titles, nav.prev.as_deref()),
                neighbor(&titles, nav.next.as_deref()),
                &pages,
                labels,
            );
            let page = templates::layout(&module.title, &body, "../", language, labels);
            write_file(&out.join("modules").join(format!("{}.html", module.id)), &page).await?;
        }

        enter(BuildStage::Tracks, language);
        for (track, members) in &groups {
            let stem = pages.stem(track);
            let body = templates::track_page(track, members, labels);
            let page = templates::layout(track, &body, "../", language, labels);
            write_file(&out.join("tracks").join(format!("{stem}.html")), &page).await?;
        }

        enter(BuildStage::Assets, language);
        write_file(&out.join("assets").join("styles.css"), STYLES_CSS).await?;
        write_file(&out.join("assets").join("search.js"), &search_js()).await?;

        enter(BuildStage::SearchIndex, language);
        let index = serde_json::to_string_pretty(&search_index(&modules))?;
        write_file(&out.join("assets").join("search-index.json"), &index).await?;

        enter(BuildStage::Done, language);
        log::info!(
            "Built '{language}' site: {} modules, {} tracks at {}",
            modules.len(),
            groups.len(),
            out.display()
        );
        Ok(out)
    }

    /// [`build`](Self::build) under an optional wall-clock limit.
    pub async fn build_with_timeout(
        &self,
        language: &str,
        timeout: Option<Duration>,
    ) -> Result<PathBuf> {
        match timeout {
            None => self.build(language).await,
            Some(limit) => tokio::time::timeout(limit, self.build(language))
                .await
                .map_err(|_| Error::Timeout {
                    seconds: limit.as_secs(),
                })?,
        }
    }

    /// Build every language in `languages`, returning their directories.
    pub async fn build_all(&self, languages: &[String]) -> Result<Vec<PathBuf>> {
        let mut built = Vec::with_capacity(languages.len());
        for language in languages {
            built.push(self.build(language).await?);
        }
        Ok(built)
    }
}

fn enter(stage: BuildStage, language: &str) {
    log::debug!("Site build [{language}]: {stage}");
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// `(id, title)` of a navigation neighbor.
fn neighbor<'m>(titles: &HashMap<&'m str, &'m str>, id: Option<&str>) -> Option<(&'m str, &'m str)> {
    let (id, title) = titles.get_key_value(id?)?;
    Some((*id, *title))
}
