//! Route table and handlers for the content API.
//!
//! Read endpoints are projections over [`ContentManager`] queries. The
//! three POST endpoints delegate to the providers and validator in
//! [`AppState`].
//!
//! [`ContentManager`]: createx_content::ContentManager

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use createx_content::{ModuleContent, ModuleSummary};
use serde::Deserialize;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Build the content API router.
///
/// Paths are rooted at `/content`; mount the router under a prefix with
/// [`Router::nest`] when serving it next to other content.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/content/modules", get(list_modules))
        .route("/content/modules/{id}", get(get_module))
        .route("/content/modules/{id}/sections", get(get_sections))
        .route("/content/modules/{id}/translations", get(list_translations))
        .route(
            "/content/modules/{id}/translations/{lang}",
            get(get_translation),
        )
        .route("/content/tracks", get(list_tracks))
        .route("/content/tracks/{track}", get(modules_by_track))
        .route("/content/search", get(search))
        .route("/content/navigation", get(navigation))
        .route("/content/stats", get(stats))
        .route("/content/generate", post(generate))
        .route("/content/translate", post(translate))
        .route("/content/validate", post(validate))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

// ============================================================================
// Request bodies
// ============================================================================

/// Query string for `GET /content/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Search keyword.
    pub q: Option<String>,
}

/// Body of `POST /content/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// What to generate ("module", "activity", "objectives", ...).
    #[serde(rename = "type", default = "default_content_type")]
    pub content_type: String,
    /// What the content is about.
    #[serde(default)]
    pub prompt: String,
    /// Optional hints such as track or duration.
    #[serde(default)]
    pub context: Value,
}

/// Body of `POST /content/translate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// Text to translate.
    #[serde(default)]
    pub content: String,
    /// Language to translate into.
    pub target_language: String,
    /// Language the text is written in.
    #[serde(default = "default_source_language")]
    pub source_language: String,
}

/// Body of `POST /content/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    /// Content to check; missing means empty.
    #[serde(default)]
    pub content: String,
    /// Label for what is being checked.
    #[serde(rename = "type", default = "default_content_type")]
    pub content_type: String,
}

fn default_content_type() -> String {
    "module".to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

// ============================================================================
// Read handlers
// ============================================================================

async fn list_modules(State(state): State<AppState>) -> Result<Json<Value>> {
    let modules = state.manager.catalog().await?;
    let summaries: Vec<ModuleSummary> = modules.iter().map(ModuleContent::summary).collect();
    Ok(Json(json!({ "modules": summaries })))
}

async fn get_module(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let module = state
        .manager
        .get_module(&id)
        .await
        .ok_or_else(|| ApiError::not_found("module", &id))?;
    Ok(Json(json!({ "module": module })))
}

async fn get_sections(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let sections = state
        .manager
        .get_sections(&id)
        .await
        .ok_or_else(|| ApiError::not_found("module", &id))?;
    Ok(Json(json!({ "sections": sections })))
}

async fn list_translations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    if state.manager.get_module(&id).await.is_none() {
        return Err(ApiError::not_found("module", id));
    }
    let languages = state.manager.get_module_translations(&id).await;
    Ok(Json(json!({ "languages": languages })))
}

async fn get_translation(
    State(state): State<AppState>,
    Path((id, lang)): Path<(String, String)>,
) -> Result<Json<Value>> {
    let module = state
        .manager
        .get_translated_module(&id, &lang)
        .await
        .ok_or_else(|| ApiError::not_found("translation", format!("{id} ({lang})")))?;
    Ok(Json(json!({ "module": module })))
}

async fn list_tracks(State(state): State<AppState>) -> Result<Json<Value>> {
    let tracks = state.manager.get_tracks().await?;
    Ok(Json(json!({ "tracks": tracks })))
}

async fn modules_by_track(
    State(state): State<AppState>,
    Path(track): Path<String>,
) -> Result<Json<Value>> {
    let modules = state.manager.get_modules_by_track(&track).await?;
    Ok(Json(json!({ "modules": modules })))
}

async fn search(
    State(state): State<AppState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>> {
    let Query(params) = params?;
    let q = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Query parameter 'q' is required"))?;
    let results = state.manager.search_modules(&q).await?;
    Ok(Json(json!({ "results": results })))
}

async fn navigation(State(state): State<AppState>) -> Result<Json<Value>> {
    let navigation = state.manager.generate_navigation().await?;
    Ok(Json(json!({ "navigation": navigation })))
}

async fn stats(State(state): State<AppState>) -> Result<Json<Value>> {
    let stats = state.manager.get_module_stats().await?;
    Ok(Json(json!({ "stats": stats })))
}

// ============================================================================
// Write-style handlers
// ============================================================================

async fn generate(
    State(state): State<AppState>,
    body: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(request) = body?;
    if request.prompt.trim().is_empty() {
        return Err(ApiError::bad_request("Field 'prompt' is required"));
    }

    let generated = state
        .generator
        .generate(&request.content_type, &request.prompt, &request.context)
        .await?;
    tracing::debug!(
        content_type = %request.content_type,
        provider = state.generator.name(),
        "Generated content"
    );

    Ok(Json(json!({
        "generated": generated,
        "metadata": {
            "type": request.content_type,
            "prompt": request.prompt,
            "provider": state.generator.name(),
            "generatedAt": Utc::now().to_rfc3339(),
        }
    })))
}

async fn translate(
    State(state): State<AppState>,
    body: std::result::Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(request) = body?;
    if request.content.trim().is_empty() {
        return Err(ApiError::bad_request("Field 'content' is required"));
    }

    let translated = state
        .translator
        .translate(
            &request.content,
            &request.source_language,
            &request.target_language,
        )
        .await?;

    Ok(Json(json!({
        "translatedContent": translated,
        "metadata": {
            "sourceLanguage": request.source_language,
            "targetLanguage": request.target_language,
            "provider": state.translator.name(),
            "translatedAt": Utc::now().to_rfc3339(),
        }
    })))
}

async fn validate(
    State(state): State<AppState>,
    body: std::result::Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(request) = body?;
    let report = state
        .validator
        .validate(&request.content, &request.content_type);
    Ok(Json(json!({ "validation": report })))
}
