//! Error responses.

use crate::common::{get, post_json, ApiFixture};

#[tokio::test]
async fn test_missing_module_is_404() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/modules/no-such-module").await;

    assert_eq!(status, 404);
    assert_eq!(body["error"]["category"], "not_found");
    assert_eq!(body["error"]["message"], "module not found: no-such-module");
}

#[tokio::test]
async fn test_missing_module_sections_is_404() {
    let fixture = ApiFixture::new();
    let (status, _) = get(fixture.app(), "/content/modules/nope/sections").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_translations_of_missing_module_is_404() {
    let fixture = ApiFixture::new();
    let (status, _) = get(fixture.app(), "/content/modules/nope/translations").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_missing_translation_is_404() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/modules/welcome/translations/fr").await;

    assert_eq!(status, 404);
    assert_eq!(body["error"]["category"], "not_found");
}

#[tokio::test]
async fn test_search_without_query_is_400() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/search").await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["category"], "bad_request");
}

#[tokio::test]
async fn test_search_blank_query_is_400() {
    let fixture = ApiFixture::new();
    let (status, _) = get(fixture.app(), "/content/search?q=%20%20").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let fixture = ApiFixture::new();
    let (status, body) = post_json(fixture.app(), "/content/validate", "not json").await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["category"], "bad_request");
}

#[tokio::test]
async fn test_missing_required_field_is_400() {
    let fixture = ApiFixture::new();
    let (status, _) = post_json(
        fixture.app(),
        "/content/translate",
        r#"{"content": "Welcome"}"#,
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_unreadable_catalog_is_generic_500() {
    let fixture = ApiFixture::new();
    let modules_dir = fixture.manager.modules_dir().to_path_buf();
    std::fs::remove_dir_all(&modules_dir).unwrap();
    std::fs::write(&modules_dir, "not a directory").unwrap();

    let (status, body) = get(fixture.app(), "/content/modules").await;

    assert_eq!(status, 500);
    assert_eq!(body["error"]["category"], "internal");
    assert_eq!(body["error"]["message"], "Internal server error");
}
