//! Track, search, navigation, and stats queries over the sample catalog.

use crate::common::ContentFixture;

#[tokio::test]
async fn test_search_title_match_first() {
    let fixture = ContentFixture::sample();
    let results = fixture.manager().search_modules("AI").await.unwrap();

    let ids: Vec<&str> = results.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["ai-integration", "design-mindsets", "team-norms", "research-empathy"]
    );
}

#[tokio::test]
async fn test_modules_by_track_case_insensitive() {
    let fixture = ContentFixture::sample();
    let manager = fixture.manager();

    let design = manager.get_modules_by_track("design process").await.unwrap();
    assert_eq!(design.len(), 2);
    assert!(manager.get_modules_by_track("Nope").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_tracks_in_reading_order() {
    let fixture = ContentFixture::sample();
    let tracks = fixture.manager().get_tracks().await.unwrap();
    assert_eq!(tracks, vec!["Foundations", "Design Process"]);
}

#[tokio::test]
async fn test_navigation_symmetry() {
    let fixture = ContentFixture::sample();
    let manager = fixture.manager();
    let modules = manager.load_all_modules().await.unwrap();
    let nav = manager.generate_navigation().await.unwrap();

    assert_eq!(nav.len(), modules.len());
    assert!(nav[0].prev.is_none());
    assert!(nav[nav.len() - 1].next.is_none());
    for i in 0..modules.len() - 1 {
        assert_eq!(nav[i].next.as_deref(), Some(modules[i + 1].id.as_str()));
        assert_eq!(nav[i + 1].prev.as_deref(), Some(modules[i].id.as_str()));
    }
}

#[tokio::test]
async fn test_module_stats() {
    let fixture = ContentFixture::sample();
    let stats = fixture.manager().get_module_stats().await.unwrap();

    assert_eq!(stats.total_modules, 5);
    assert_eq!(stats.track_counts["Foundations"], 3);
    assert_eq!(stats.track_counts["Design Process"], 2);
    assert_eq!(stats.difficulty_counts["Beginner"], 4);
    assert_eq!(stats.difficulty_counts["Advanced"], 1);
    assert_eq!(stats.average_duration, "45 minutes");
}

#[tokio::test]
async fn test_empty_catalog_queries() {
    let fixture = ContentFixture::new();
    let manager = fixture.manager();
    assert!(manager.search_modules("anything").await.unwrap().is_empty());
    assert!(manager.get_tracks().await.unwrap().is_empty());
    let stats = manager.get_module_stats().await.unwrap();
    assert_eq!(stats.total_modules, 0);
    assert_eq!(stats.average_duration, "45 minutes");
}
