//! Generation, translation, and validation endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use createx_api::{router, AppState, TranslationProvider};

use crate::common::{post_json, ApiFixture};

#[tokio::test]
async fn test_validate_empty_content() {
    let fixture = ApiFixture::new();
    let (status, body) = post_json(
        fixture.app(),
        "/content/validate",
        r#"{"content": "", "type": "module"}"#,
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["validation"]["isValid"], false);
    assert_eq!(
        body["validation"]["errors"],
        serde_json::json!(["Content cannot be empty"])
    );
}

#[tokio::test]
async fn test_validate_missing_content_counts_as_empty() {
    let fixture = ApiFixture::new();
    let (status, body) = post_json(fixture.app(), "/content/validate", "{}").await;

    assert_eq!(status, 200);
    assert_eq!(body["validation"]["isValid"], false);
}

#[tokio::test]
async fn test_validate_well_formed_module() {
    let fixture = ApiFixture::new();
    let request = serde_json::json!({ "content": crate::common::RESEARCH_EMPATHY }).to_string();
    let (status, body) = post_json(fixture.app(), "/content/validate", &request).await;

    assert_eq!(status, 200);
    assert_eq!(body["validation"]["isValid"], true);
    assert_eq!(body["validation"]["warnings"], serde_json::json!([]));
}

#[tokio::test]
async fn test_generate_module() {
    let fixture = ApiFixture::new();
    let (status, body) = post_json(
        fixture.app(),
        "/content/generate",
        r#"{"type": "module", "prompt": "Rapid Prototyping", "context": {"track": "Design Process"}}"#,
    )
    .await;

    assert_eq!(status, 200);
    let generated = body["generated"].as_str().unwrap();
    assert!(generated.starts_with("# Rapid Prototyping"));
    assert!(generated.contains("**Track:** Design Process"));
    assert_eq!(body["metadata"]["type"], "module");
    assert_eq!(body["metadata"]["provider"], "simulated");
    assert!(body["metadata"]["generatedAt"].is_string());
}

#[tokio::test]
async fn test_generate_requires_prompt() {
    let fixture = ApiFixture::new();
    let (status, _) = post_json(fixture.app(), "/content/generate", r#"{"type": "module"}"#).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_translate_glossary_terms() {
    let fixture = ApiFixture::new();
    let (status, body) = post_json(
        fixture.app(),
        "/content/translate",
        r###"{"content": "## Learning Objectives", "targetLanguage": "zh"}"###,
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["translatedContent"], "## 学习目标");
    assert_eq!(body["metadata"]["sourceLanguage"], "en");
    assert_eq!(body["metadata"]["targetLanguage"], "zh");
}

struct Shouting;

#[async_trait]
impl TranslationProvider for Shouting {
    async fn translate(&self, content: &str, _source: &str, _target: &str) -> createx_core::Result<String> {
        Ok(content.to_uppercase())
    }

    fn name(&self) -> &str {
        "shouting"
    }
}

#[tokio::test]
async fn test_translation_provider_is_pluggable() {
    let fixture = ApiFixture::new();
    let state = AppState::new(Arc::clone(&fixture.manager)).with_translator(Shouting);
    let (status, body) = post_json(
        router(state),
        "/content/translate",
        r#"{"content": "hello", "targetLanguage": "fr"}"#,
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["translatedContent"], "HELLO");
    assert_eq!(body["metadata"]["provider"], "shouting");
}
