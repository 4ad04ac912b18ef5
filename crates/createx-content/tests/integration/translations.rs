//! Translation export, import, listing, and localized loading.

use createx_content::TranslationPayload;

use crate::common::ContentFixture;

fn chinese_payload() -> TranslationPayload {
    TranslationPayload {
        title: "研究与共情".to_string(),
        content: "# 研究与共情\n\n**Track:** Design Process\n\n## 学习目标\n- 进行访谈\n".to_string(),
        learning_objectives: "进行访谈\n应用 AEIOU".to_string(),
        prerequisites: "欢迎, 设计思维".to_string(),
    }
}

#[tokio::test]
async fn test_export_for_translation() {
    let fixture = ContentFixture::sample();
    let payload = fixture
        .manager()
        .export_for_translation("research-empathy")
        .await
        .unwrap();
    assert_eq!(payload.title, "Research & Empathy");
    assert_eq!(payload.learning_objectives, "Conduct interviews\nApply AEIOU");
}

#[tokio::test]
async fn test_export_missing_module_is_error() {
    let fixture = ContentFixture::sample();
    let err = fixture
        .manager()
        .export_for_translation("blockchain")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_translation_round_trip() {
    let fixture = ContentFixture::sample();
    let manager = fixture.manager();

    manager
        .import_translation("research-empathy", "zh", chinese_payload())
        .await
        .unwrap();
    let stored = fixture.translations_dir().join("zh").join("research-empathy.json");
    assert!(stored.exists());

    let translated = manager
        .get_translated_module("research-empathy", "zh")
        .await
        .unwrap();
    assert_eq!(translated.title, "研究与共情");
    assert!(translated.content.contains("进行访谈"));
    assert_eq!(translated.learning_objectives, vec!["进行访谈", "应用 AEIOU"]);
    assert_eq!(translated.prerequisites, vec!["欢迎", "设计思维"]);
    assert!(translated.html.contains("<h1 id=\"研究与共情\">研究与共情</h1>"));
    assert_eq!(translated.chapter, 7);
    assert_eq!(translated.duration, "50 minutes");
}

#[tokio::test]
async fn test_stored_record_fields() {
    let fixture = ContentFixture::sample();
    fixture
        .manager()
        .import_translation("welcome", "zh", chinese_payload())
        .await
        .unwrap();

    let raw = std::fs::read_to_string(fixture.translations_dir().join("zh/welcome.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["originalId"], "welcome");
    assert_eq!(json["language"], "zh");
    assert!(json["lastUpdated"].is_string());
    assert_eq!(json["prerequisites"], "欢迎, 设计思维");
}

#[tokio::test]
async fn test_list_translations() {
    let fixture = ContentFixture::sample();
    let manager = fixture.manager();
    assert!(manager.get_module_translations("welcome").await.is_empty());

    manager
        .import_translation("welcome", "zh", chinese_payload())
        .await
        .unwrap();
    manager
        .import_translation("welcome", "es", chinese_payload())
        .await
        .unwrap();
    manager
        .import_translation("team-norms", "fr", chinese_payload())
        .await
        .unwrap();

    assert_eq!(manager.get_module_translations("welcome").await, vec!["es", "zh"]);
}

#[tokio::test]
async fn test_missing_translation_is_none() {
    let fixture = ContentFixture::sample();
    assert!(
        fixture
            .manager()
            .get_translated_module("welcome", "zh")
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_source_language_returns_module() {
    let fixture = ContentFixture::sample();
    let module = fixture
        .manager()
        .get_translated_module("welcome", "en")
        .await
        .unwrap();
    assert_eq!(module.title, "Welcome to CreateX");
}

#[tokio::test]
async fn test_malformed_translation_is_none() {
    let fixture = ContentFixture::sample();
    let dir = fixture.translations_dir().join("zh");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("welcome.json"), "{ not json").unwrap();

    assert!(
        fixture
            .manager()
            .get_translated_module("welcome", "zh")
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_import_rejects_path_traversal() {
    let fixture = ContentFixture::sample();
    let result = fixture
        .manager()
        .import_translation("welcome", "../zh", chinese_payload())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_localized_falls_back_per_module() {
    let fixture = ContentFixture::sample();
    let manager = fixture.manager();
    manager
        .import_translation("research-empathy", "zh", chinese_payload())
        .await
        .unwrap();

    let localized = manager.load_localized("zh").await.unwrap();
    assert_eq!(localized.len(), 5);
    assert_eq!(localized[0].title, "Welcome to CreateX");
    assert_eq!(localized[3].title, "研究与共情");
}

#[tokio::test]
async fn test_hand_edited_record_with_plain_date() {
    let fixture = ContentFixture::sample();
    let dir = fixture.translations_dir().join("zh");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("welcome.json"),
        r##"{"title": "欢迎来到 CreateX", "content": "# 欢迎", "originalId": "welcome", "language": "zh", "lastUpdated": "2024-03-01"}"##,
    )
    .unwrap();

    let module = fixture
        .manager()
        .get_translated_module("welcome", "zh")
        .await
        .expect("plain-date record should load");
    assert_eq!(module.title, "欢迎来到 CreateX");
}
