//! The content manager: loading, caching, and querying guide modules.
//!
//! Module files live flat in one directory as `{NN}-{slug}.md`. Each file is
//! parsed (front-matter, metadata extraction, Markdown rendering) into a
//! [`ModuleContent`] and cached by id. Files are read one at a time in
//! filename order; the loaded catalog is then ordered by chapter number.
//!
//! Catalog-wide operations (`load_all_modules` and everything built on it)
//! fail on I/O errors, since nothing useful can be said about a catalog that
//! could not be read. Single-module lookups log the failure and report the
//! module as absent instead.
//!
//! # Example
//!
//! ```rust,no_run
//! use createx_content::ContentManager;
//!
//! # async fn example() -> createx_core::Result<()> {
//! let manager = ContentManager::new("content/modules", "content/translations");
//! for module in manager.load_all_modules().await? {
//!     println!("{:>2} {}", module.chapter, module.title);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use createx_core::{module_id_from_path, Error, GuideConfig, Result};
use tokio::fs;

use crate::cache::{MemoryCache, ModuleCache};
use crate::extract::extract_metadata;
use crate::markdown::extract_frontmatter;
use crate::model::{ModuleContent, ModuleStats, NavEntry, Section};
use crate::query;
use crate::render::MarkdownRenderer;
use crate::sections::{split_sections, KeywordClassifier, SectionClassifier};
use crate::translation::{translation_path, TranslationPayload, TranslationRecord};
use crate::validate::{validate_catalog, CatalogReport, ContentValidator};

const MODULE_EXTENSION: &str = "md";

/// Owns the module catalog and answers queries over it.
pub struct ContentManager {
    modules_dir: PathBuf,
    translations_dir: PathBuf,
    source_language: String,
    renderer: MarkdownRenderer,
    cache: Box<dyn ModuleCache>,
    classifier: Box<dyn SectionClassifier>,
    /// Module ids of the last full load, in reading order.
    order: RwLock<Option<Vec<String>>>,
}

impl ContentManager {
    /// Create a manager over a modules directory and a translations
    /// directory, with an unbounded in-memory cache.
    pub fn new(modules_dir: impl Into<PathBuf>, translations_dir: impl Into<PathBuf>) -> Self {
        Self {
            modules_dir: modules_dir.into(),
            translations_dir: translations_dir.into(),
            source_language: "en".to_string(),
            renderer: MarkdownRenderer::default(),
            cache: Box::new(MemoryCache::new()),
            classifier: Box::new(KeywordClassifier::default()),
            order: RwLock::new(None),
        }
    }

    /// Create a manager from the content paths and render settings in
    /// `config`.
    pub fn from_config(config: &GuideConfig) -> Self {
        Self::new(config.modules_dir(), config.translations_dir())
            .with_source_language(config.default_language.clone())
            .with_renderer(MarkdownRenderer::with_sanitize(config.render.sanitize))
    }

    /// Replace the cache.
    pub fn with_cache(mut self, cache: impl ModuleCache + 'static) -> Self {
        self.cache = Box::new(cache);
        self
    }

    /// Replace the renderer.
    pub fn with_renderer(mut self, renderer: MarkdownRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the section classifier.
    pub fn with_classifier(mut self, classifier: impl SectionClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Set the language module files are written in.
    pub fn with_source_language(mut self, language: impl Into<String>) -> Self {
        self.source_language = language.into();
        self
    }

    /// Directory module files are read from.
    pub fn modules_dir(&self) -> &Path {
        &self.modules_dir
    }

    /// Directory translation records are stored under.
    pub fn translations_dir(&self) -> &Path {
        &self.translations_dir
    }

    /// Language module files are written in.
    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// The renderer applied to module bodies.
    pub fn renderer(&self) -> &MarkdownRenderer {
        &self.renderer
    }

    /// Drop every cached module; the next query reloads from disk.
    pub fn clear_cache(&self) {
        self.cache.clear();
        *self.order.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    // ------------------------------------------------------------------------
    // Parsing
    // ------------------------------------------------------------------------

    /// Build a module from raw file content.
    ///
    /// Front-matter values win over body markers; unmodeled front-matter
    /// keys are kept in `metadata`. A front-matter `chapter` overrides the
    /// one taken from the filename.
    pub fn parse_module(&self, id: &str, chapter: u32, raw: &str) -> ModuleContent {
        let frontmatter = extract_frontmatter(raw);
        let body = frontmatter.body();
        let extracted = extract_metadata(body);

        ModuleContent {
            id: id.to_string(),
            chapter: frontmatter.get_u32("chapter").unwrap_or(chapter),
            title: frontmatter.get_scalar("title").unwrap_or(extracted.title),
            track: frontmatter.get_scalar("track").unwrap_or(extracted.track),
            duration: frontmatter
                .get_scalar("duration")
                .unwrap_or(extracted.duration),
            difficulty: frontmatter
                .get_scalar("difficulty")
                .unwrap_or(extracted.difficulty),
            prerequisites: frontmatter
                .get_list("prerequisites")
                .unwrap_or(extracted.prerequisites),
            learning_objectives: extracted.learning_objectives,
            content: body.to_string(),
            html: self.renderer.render(body),
            metadata: frontmatter.extra_fields(),
        }
    }

    async fn read_module(&self, path: &Path) -> Result<ModuleContent> {
        let (chapter, id) = module_id_from_path(path)
            .ok_or_else(|| Error::parse(format!("Cannot derive module id from {}", path.display())))?;
        let bytes = fs::read(path)
            .await
            .map_err(|e| Error::io_with_path(e, path))?;
        let raw = match String::from_utf8(bytes) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(
                    "{} is not valid UTF-8; invalid bytes replaced with U+FFFD",
                    path.display()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        log::debug!("Parsed module '{id}' from {}", path.display());
        Ok(self.parse_module(&id, chapter, &raw))
    }

    /// Module files in the modules directory, sorted by filename.
    ///
    /// A missing directory is an empty catalog.
    pub async fn list_module_files(&self) -> Result<Vec<PathBuf>> {
        let dir = &self.modules_dir;
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("Modules directory {} does not exist", dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::io_with_path(e, dir)),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io_with_path(e, dir))?
        {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == MODULE_EXTENSION) {
                continue;
            }
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::io_with_path(e, &path))?;
            if file_type.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Parse every module file, in filename order, without touching the
    /// cache.
    ///
    /// A file that cannot be read is logged and left out; only a failure to
    /// list the directory fails the load.
    pub async fn load_sources(&self) -> Result<Vec<(PathBuf, ModuleContent)>> {
        let mut sources = Vec::new();
        for path in self.list_module_files().await? {
            match self.read_module(&path).await {
                Ok(module) => sources.push((path, module)),
                Err(e) => log::warn!("Skipping module file {}: {e}", path.display()),
            }
        }
        Ok(sources)
    }

    // ------------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------------

    /// Re-read every module file, refill the cache, and return the catalog
    /// in reading order (by chapter, ties in filename order).
    ///
    /// When two files produce the same id the later file wins.
    pub async fn load_all_modules(&self) -> Result<Vec<ModuleContent>> {
        let sources = self.load_sources().await?;

        self.cache.clear();
        let mut seen = HashSet::new();
        let mut modules: Vec<ModuleContent> = Vec::with_capacity(sources.len());
        for (path, module) in sources {
            if !seen.insert(module.id.clone()) {
                log::warn!(
                    "Module id '{}' from {} replaces an earlier module with the same id",
                    module.id,
                    path.display()
                );
                modules.retain(|m| m.id != module.id);
            }
            self.cache.put(module.clone());
            modules.push(module);
        }
        modules.sort_by_key(|m| m.chapter);

        *self.order.write().unwrap_or_else(|e| e.into_inner()) =
            Some(modules.iter().map(|m| m.id.clone()).collect());
        log::info!(
            "Loaded {} modules from {}",
            modules.len(),
            self.modules_dir.display()
        );
        Ok(modules)
    }

    /// The catalog, from cache when the last full load is still cached.
    pub async fn catalog(&self) -> Result<Vec<ModuleContent>> {
        if let Some(modules) = self.cached_catalog() {
            return Ok(modules);
        }
        self.load_all_modules().await
    }

    fn cached_catalog(&self) -> Option<Vec<ModuleContent>> {
        let order = self.order.read().unwrap_or_else(|e| e.into_inner());
        order.as_ref()?.iter().map(|id| self.cache.get(id)).collect()
    }

    /// Look up one module.
    ///
    /// Served from cache when possible. Otherwise the module file whose id
    /// equals `id` is read; failing that, the first file (by name) whose
    /// stem contains `id`. Unreadable files are logged and reported as
    /// absent.
    pub async fn get_module(&self, id: &str) -> Option<ModuleContent> {
        if id.is_empty() {
            return None;
        }
        if let Some(module) = self.cache.get(id) {
            return Some(module);
        }

        let files = match self.list_module_files().await {
            Ok(files) => files,
            Err(e) => {
                log::warn!("Cannot list modules while looking up '{id}': {e}");
                return None;
            }
        };

        let path = files
            .iter()
            .find(|p| module_id_from_path(p).is_some_and(|(_, file_id)| file_id == id))
            .or_else(|| {
                files.iter().find(|p| {
                    p.file_stem()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.contains(id))
                })
            })?;

        match self.read_module(path).await {
            Ok(module) => {
                self.cache.put(module.clone());
                Some(module)
            }
            Err(e) => {
                log::warn!("Failed to read module '{id}': {e}");
                None
            }
        }
    }

    /// Modules whose track equals `track`, ignoring case.
    pub async fn get_modules_by_track(&self, track: &str) -> Result<Vec<ModuleContent>> {
        Ok(query::filter_by_track(&self.catalog().await?, track))
    }

    /// Keyword search; title matches first, then by chapter.
    pub async fn search_modules(&self, query: &str) -> Result<Vec<ModuleContent>> {
        Ok(query::search(&self.catalog().await?, query))
    }

    /// Distinct tracks in reading order.
    pub async fn get_tracks(&self) -> Result<Vec<String>> {
        Ok(query::tracks(&self.catalog().await?))
    }

    /// Prev/next links over the catalog in reading order.
    pub async fn generate_navigation(&self) -> Result<Vec<NavEntry>> {
        Ok(query::navigation(&self.catalog().await?))
    }

    /// Counts per track and difficulty plus the mean duration.
    pub async fn get_module_stats(&self) -> Result<ModuleStats> {
        Ok(query::stats(&self.catalog().await?))
    }

    /// A module split into UI sections.
    pub async fn get_sections(&self, id: &str) -> Option<Vec<Section>> {
        let module = self.get_module(id).await?;
        Some(split_sections(&module.content, self.classifier.as_ref()))
    }

    /// Run `validator` over every module file plus the catalog-wide checks.
    pub async fn validate_catalog(&self, validator: &dyn ContentValidator) -> Result<CatalogReport> {
        let sources = self.load_sources().await?;
        Ok(validate_catalog(&sources, validator))
    }

    // ------------------------------------------------------------------------
    // Translations
    // ------------------------------------------------------------------------

    /// The translatable fields of a module.
    ///
    /// Unlike lookups, a missing module is an error here.
    pub async fn export_for_translation(&self, id: &str) -> Result<TranslationPayload> {
        let module = self
            .get_module(id)
            .await
            .ok_or_else(|| Error::not_found("module", id))?;
        Ok(TranslationPayload::from_module(&module))
    }

    /// Store a translation at `{translations_dir}/{language}/{id}.json`.
    pub async fn import_translation(
        &self,
        id: &str,
        language: &str,
        payload: TranslationPayload,
    ) -> Result<TranslationRecord> {
        let path = translation_path(&self.translations_dir, language, id)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io_with_path(e, parent))?;
        }

        let record = TranslationRecord::new(id, language, payload);
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&path, json)
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;

        log::info!("Stored '{language}' translation of '{id}' at {}", path.display());
        Ok(record)
    }

    /// Languages a module has translations for, sorted.
    pub async fn get_module_translations(&self, id: &str) -> Vec<String> {
        let dir = &self.translations_dir;
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    log::warn!("Cannot list translations in {}: {e}", dir.display());
                }
                return Vec::new();
            }
        };

        let mut languages = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    log::warn!("Error while listing {}: {e}", dir.display());
                    break;
                }
            };
            let Some(language) = entry.file_name().to_str().map(String::from) else {
                continue;
            };
            let Ok(path) = translation_path(dir, &language, id) else {
                continue;
            };
            if fs::try_exists(&path).await.unwrap_or(false) {
                languages.push(language);
            }
        }
        languages.sort();
        languages
    }

    /// A module with its translatable fields replaced by the stored
    /// translation for `language`.
    ///
    /// The source language returns the module itself. A missing or
    /// unreadable record is reported as absent.
    pub async fn get_translated_module(&self, id: &str, language: &str) -> Option<ModuleContent> {
        if language == self.source_language {
            return self.get_module(id).await;
        }

        let path = translation_path(&self.translations_dir, language, id).ok()?;
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    log::warn!("Cannot read translation {}: {e}", path.display());
                }
                return None;
            }
        };
        let record: TranslationRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Malformed translation {}: {e}", path.display());
                return None;
            }
        };

        let base = match self.get_module(id).await {
            Some(module) => module,
            None => self.parse_module(id, 0, &record.payload.content),
        };
        Some(record.apply_to(&base, &self.renderer))
    }

    /// The catalog in `language`, falling back to the source module where
    /// no translation exists.
    pub async fn load_localized(&self, language: &str) -> Result<Vec<ModuleContent>> {
        let modules = self.catalog().await?;
        if language == self.source_language {
            return Ok(modules);
        }

        let mut localized = Vec::with_capacity(modules.len());
        for module in modules {
            match self.get_translated_module(&module.id, language).await {
                Some(translated) => localized.push(translated),
                None => localized.push(module),
            }
        }
        Ok(localized)
    }
}

// ============================================================================
// Tests
// ============================================================================
