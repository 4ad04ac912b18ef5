//! Command implementations.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use createx_api::{serve, site_router, AppState};
use createx_content::{
    CatalogReport, ContentManager, ModuleStats, StructuralValidator, TranslationPayload,
};
use createx_core::GuideConfig;
use createx_site::SiteBuilder;

use crate::cli::TranslationAction;

/// Effective configuration plus the manager built from it.
pub struct Session {
    /// Configuration after CLI overrides.
    pub config: GuideConfig,
    /// Catalog access.
    pub manager: Arc<ContentManager>,
}

impl Session {
    /// Load configuration, then apply a `--content-dir` override.
    pub fn load(config_path: Option<&str>, content_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = GuideConfig::load(config_path)?;
        if let Some(dir) = content_dir {
            config.content_dir = dir;
        }
        Ok(Self::new(config))
    }

    /// Session over an already resolved configuration.
    pub fn new(config: GuideConfig) -> Self {
        let manager = Arc::new(ContentManager::from_config(&config));
        Self { config, manager }
    }

    fn builder(&self, output: Option<PathBuf>) -> SiteBuilder {
        let output = output.unwrap_or_else(|| self.config.output_dir.clone());
        SiteBuilder::new(Arc::clone(&self.manager), output)
    }

    fn build_timeout(&self) -> Option<Duration> {
        self.config.build.timeout_secs.map(Duration::from_secs)
    }
}

// ============================================================================
// build / serve
// ============================================================================

/// `createx build`
pub async fn build(
    session: &Session,
    language: Option<String>,
    output: Option<PathBuf>,
    all: bool,
) -> Result<Vec<PathBuf>> {
    let builder = session.builder(output);
    let languages = if all {
        session.config.languages.clone()
    } else {
        vec![language.unwrap_or_else(|| session.config.default_language.clone())]
    };

    let mut built = Vec::with_capacity(languages.len());
    for language in &languages {
        let dir = builder
            .build_with_timeout(language, session.build_timeout())
            .await
            .with_context(|| format!("Failed to build the '{language}' site"))?;
        tracing::info!(%language, dir = %dir.display(), "Site built");
        built.push(dir);
    }
    Ok(built)
}

/// `createx serve`
pub async fn serve_site(
    session: &Session,
    host: Option<String>,
    port: Option<u16>,
    language: Option<String>,
) -> Result<()> {
    let language = language.unwrap_or_else(|| session.config.default_language.clone());
    let site_dir = build(session, Some(language), None, false)
        .await?
        .pop()
        .context("Build produced no site")?;

    let host = host.unwrap_or_else(|| session.config.server.host.clone());
    let port = port.unwrap_or(session.config.server.port);
    let addr = tokio::net::lookup_host((host.as_str(), port))
        .await
        .with_context(|| format!("Cannot resolve {host}:{port}"))?
        .next()
        .with_context(|| format!("No address for {host}:{port}"))?;

    let app = site_router(AppState::new(Arc::clone(&session.manager)), &site_dir);
    println!("Serving {} at http://{addr}/", site_dir.display());
    serve(app, addr)
        .await
        .with_context(|| format!("Server on {addr} failed"))
}

// ============================================================================
// validate / stats
// ============================================================================

/// `createx validate`: print the report and return it so the caller can
/// set the exit status.
pub async fn validate(session: &Session, json: bool) -> Result<CatalogReport> {
    let report = session.manager.validate_catalog(&StructuralValidator).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(report)
}

/// Human-readable validation report.
pub fn format_report(report: &CatalogReport) -> String {
    let mut out = String::new();
    for module in &report.modules {
        let findings = &module.report;
        if findings.errors.is_empty() && findings.warnings.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{} ({})", module.id, module.path.display());
        for error in &findings.errors {
            let _ = writeln!(out, "  error: {error}");
        }
        for warning in &findings.warnings {
            let _ = writeln!(out, "  warning: {warning}");
        }
    }
    for error in &report.errors {
        let _ = writeln!(out, "error: {error}");
    }
    for warning in &report.warnings {
        let _ = writeln!(out, "warning: {warning}");
    }
    let _ = writeln!(
        out,
        "{} modules checked: {} errors, {} warnings",
        report.modules.len(),
        report.error_count(),
        report.warning_count()
    );
    out
}

/// `createx stats`
pub async fn stats(session: &Session, json: bool) -> Result<()> {
    let stats = session.manager.get_module_stats().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", format_stats(&stats));
    }
    Ok(())
}

/// Human-readable statistics.
pub fn format_stats(stats: &ModuleStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Modules:          {}", stats.total_modules);
    let _ = writeln!(out, "Average duration: {}", stats.average_duration);
    let _ = writeln!(out, "Tracks:");
    for (track, count) in &stats.track_counts {
        let _ = writeln!(out, "  {track}: {count}");
    }
    let _ = writeln!(out, "Difficulty:");
    for (difficulty, count) in &stats.difficulty_counts {
        let _ = writeln!(out, "  {difficulty}: {count}");
    }
    out
}

// ============================================================================
// translations
// ============================================================================

/// `createx translations ...`
pub async fn translations(session: &Session, action: TranslationAction) -> Result<()> {
    match action {
        TranslationAction::Export { id } => {
            let payload = session.manager.export_for_translation(&id).await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        TranslationAction::Import { id, language, file } => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Cannot read {}", file.display()))?;
            let payload: TranslationPayload = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a translation payload", file.display()))?;
            session
                .manager
                .import_translation(&id, &language, payload)
                .await?;
            println!("Imported '{language}' translation of '{id}'");
        }
        TranslationAction::List { id } => {
            for language in session.manager.get_module_translations(&id).await {
                println!("{language}");
            }
        }
    }
    Ok(())
}
