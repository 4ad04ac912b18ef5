//! Read endpoints over the catalog.

use createx_content::TranslationPayload;

use crate::common::{get, ApiFixture};

#[tokio::test]
async fn test_list_modules_returns_summaries() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/modules").await;

    assert_eq!(status, 200);
    let modules = body["modules"].as_array().unwrap();
    let ids: Vec<&str> = modules.iter().map(|m| m["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["welcome", "design-mindsets", "research-empathy"]);
    assert_eq!(modules[0]["learningObjectives"][0], "Meet the cohort");
    assert!(modules[0].get("content").is_none());
    assert!(modules[0].get("html").is_none());
}

#[tokio::test]
async fn test_get_module_in_full() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/modules/design-mindsets").await;

    assert_eq!(status, 200);
    assert_eq!(body["module"]["title"], "Design Mindsets");
    assert_eq!(body["module"]["chapter"], 2);
    assert_eq!(body["module"]["prerequisites"][0], "Welcome to CreateX");
    assert!(body["module"]["html"].as_str().unwrap().contains("<h2"));
}

#[tokio::test]
async fn test_get_sections() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/modules/welcome/sections").await;

    assert_eq!(status, 200);
    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections[0]["id"], "overview");
    let icebreaker = sections
        .iter()
        .find(|s| s["title"] == "Icebreaker Activity")
        .unwrap();
    assert_eq!(icebreaker["type"], "interactive");
}

#[tokio::test]
async fn test_tracks_in_reading_order() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/tracks").await;

    assert_eq!(status, 200);
    assert_eq!(body["tracks"], serde_json::json!(["Foundations", "Design Process"]));
}

#[tokio::test]
async fn test_modules_by_track_decodes_path() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/tracks/design%20process").await;

    assert_eq!(status, 200);
    let modules = body["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0]["id"], "research-empathy");
}

#[tokio::test]
async fn test_unknown_track_is_empty_list() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/tracks/Robotics").await;

    assert_eq!(status, 200);
    assert_eq!(body["modules"], serde_json::json!([]));
}

#[tokio::test]
async fn test_search() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/search?q=interviews").await;

    assert_eq!(status, 200);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "research-empathy");
}

#[tokio::test]
async fn test_navigation_links() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/navigation").await;

    assert_eq!(status, 200);
    let nav = body["navigation"].as_array().unwrap();
    assert_eq!(nav.len(), 3);
    assert!(nav[0].get("prev").is_none());
    assert_eq!(nav[0]["next"], "design-mindsets");
    assert_eq!(nav[1]["prev"], "welcome");
    assert!(nav[2].get("next").is_none());
}

#[tokio::test]
async fn test_stats() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/stats").await;

    assert_eq!(status, 200);
    assert_eq!(body["stats"]["totalModules"], 3);
    assert_eq!(body["stats"]["trackCounts"]["Foundations"], 2);
    assert_eq!(body["stats"]["averageDuration"], "45 minutes");
}

#[tokio::test]
async fn test_translation_listing_and_lookup() {
    let fixture = ApiFixture::new();
    fixture
        .manager
        .import_translation(
            "research-empathy",
            "zh",
            TranslationPayload {
                title: "研究与共情".to_string(),
                content: "# 研究与共情\n\n## 学习目标\n- 进行访谈\n".to_string(),
                learning_objectives: "进行访谈\n应用 AEIOU".to_string(),
                prerequisites: String::new(),
            },
        )
        .await
        .unwrap();

    let (status, body) = get(
        fixture.app(),
        "/content/modules/research-empathy/translations",
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["languages"], serde_json::json!(["zh"]));

    let (status, body) = get(
        fixture.app(),
        "/content/modules/research-empathy/translations/zh",
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["module"]["title"], "研究与共情");
    assert_eq!(
        body["module"]["learningObjectives"],
        serde_json::json!(["进行访谈", "应用 AEIOU"])
    );
    assert_eq!(body["module"]["track"], "Design Process");
    assert!(body["module"]["html"].as_str().unwrap().contains("学习目标"));
}

#[tokio::test]
async fn test_module_without_translations_lists_none() {
    let fixture = ApiFixture::new();
    let (status, body) = get(fixture.app(), "/content/modules/welcome/translations").await;

    assert_eq!(status, 200);
    assert_eq!(body["languages"], serde_json::json!([]));
}
