//! Loading, ordering, caching, and validating the module catalog.

use createx_content::{NoCache, StructuralValidator};

use crate::common::{ContentFixture, RESEARCH_EMPATHY, WELCOME};

#[tokio::test]
async fn test_load_all_modules_in_chapter_order() {
    let fixture = ContentFixture::sample();
    let modules = fixture.manager().load_all_modules().await.unwrap();

    let ids: Vec<&str> = modules.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "welcome",
            "design-mindsets",
            "team-norms",
            "research-empathy",
            "ai-integration"
        ]
    );
    let chapters: Vec<u32> = modules.iter().map(|m| m.chapter).collect();
    assert_eq!(chapters, vec![1, 2, 3, 7, 12]);
}

#[tokio::test]
async fn test_research_empathy_scenario() {
    let fixture = ContentFixture::new();
    fixture.write_module(
        "07-research-empathy.md",
        "# Research & Empathy\n\n**Track:** Design Process\n\n**Duration:** 50 minutes\n\n## Learning Objectives\n- Conduct interviews\n- Apply AEIOU\n\n## Next",
    );
    let module = fixture
        .manager()
        .get_module("research-empathy")
        .await
        .expect("module should load");

    assert_eq!(module.title, "Research & Empathy");
    assert_eq!(module.track, "Design Process");
    assert_eq!(module.duration, "50 minutes");
    assert_eq!(module.chapter, 7);
    assert_eq!(
        module.learning_objectives,
        vec!["Conduct interviews", "Apply AEIOU"]
    );
}

#[tokio::test]
async fn test_chapter_order_wins_over_filename_order() {
    let fixture = ContentFixture::new();
    fixture.write_module("a-intro.md", "---\nchapter: 2\n---\n# Intro");
    fixture.write_module("b-kickoff.md", "---\nchapter: 1\n---\n# Kickoff");
    let manager = fixture.manager();

    let ids: Vec<String> = manager
        .load_all_modules()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec!["b-kickoff", "a-intro"]);

    let nav = manager.generate_navigation().await.unwrap();
    assert_eq!(nav[0].next.as_deref(), Some("a-intro"));
    assert_eq!(nav[1].prev.as_deref(), Some("b-kickoff"));
}

#[tokio::test]
async fn test_non_markdown_files_and_subdirectories_ignored() {
    let fixture = ContentFixture::new();
    fixture.write_module("01-welcome.md", WELCOME);
    fixture.write_module("README.txt", "not a module");
    std::fs::create_dir_all(fixture.modules_dir().join("drafts.md")).unwrap();

    let modules = fixture.manager().load_all_modules().await.unwrap();
    assert_eq!(modules.len(), 1);
}

#[tokio::test]
async fn test_duplicate_ids_last_write_wins() {
    let fixture = ContentFixture::new();
    fixture.write_module("01-welcome.md", "# First Welcome");
    fixture.write_module("02-welcome.md", "# Second Welcome");
    let manager = fixture.manager();

    let modules = manager.load_all_modules().await.unwrap();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].title, "Second Welcome");
    assert_eq!(
        manager.get_module("welcome").await.unwrap().title,
        "Second Welcome"
    );
}

#[tokio::test]
async fn test_get_module_cache_miss_reads_single_file() {
    let fixture = ContentFixture::sample();
    let manager = fixture.manager();

    let module = manager.get_module("team-norms").await.unwrap();
    assert_eq!(module.title, "Team Norms");
    assert_eq!(module.duration, "1 hour");
}

#[tokio::test]
async fn test_get_module_substring_match() {
    let fixture = ContentFixture::sample();
    let module = fixture.manager().get_module("empathy").await.unwrap();
    assert_eq!(module.id, "research-empathy");
}

#[tokio::test]
async fn test_get_module_substring_ignores_extension() {
    let fixture = ContentFixture::sample();
    let manager = fixture.manager();
    assert!(manager.get_module("md").await.is_none());
    assert!(manager.get_module(".").await.is_none());
}

#[tokio::test]
async fn test_get_module_absent() {
    let fixture = ContentFixture::sample();
    assert!(fixture.manager().get_module("blockchain").await.is_none());
}

#[tokio::test]
async fn test_reload_picks_up_new_files() {
    let fixture = ContentFixture::new();
    fixture.write_module("01-welcome.md", WELCOME);
    let manager = fixture.manager();
    assert_eq!(manager.catalog().await.unwrap().len(), 1);

    fixture.write_module("07-research-empathy.md", RESEARCH_EMPATHY);
    assert_eq!(manager.catalog().await.unwrap().len(), 1);
    assert_eq!(manager.load_all_modules().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_no_cache_always_reads_disk() {
    let fixture = ContentFixture::new();
    fixture.write_module("01-welcome.md", WELCOME);
    let manager = fixture.manager().with_cache(NoCache);
    assert_eq!(manager.catalog().await.unwrap().len(), 1);

    fixture.write_module("07-research-empathy.md", RESEARCH_EMPATHY);
    assert_eq!(manager.catalog().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_frontmatter_metadata_carried_through() {
    let fixture = ContentFixture::sample();
    let module = fixture.manager().get_module("ai-integration").await.unwrap();
    assert_eq!(module.difficulty, "Advanced");
    assert_eq!(module.metadata["facilitator_notes"], "Requires laptops");
    assert!(module.content.starts_with("# AI Integration"));
}

#[tokio::test]
async fn test_get_sections() {
    let fixture = ContentFixture::sample();
    let sections = fixture.manager().get_sections("welcome").await.unwrap();
    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["overview", "learning-objectives", "icebreaker-activity"]);
    assert_eq!(
        sections[2].kind,
        createx_content::SectionKind::Interactive
    );
}

#[tokio::test]
async fn test_validate_catalog_reports_duplicates() {
    let fixture = ContentFixture::new();
    fixture.write_module("01-welcome.md", WELCOME);
    fixture.write_module("05-welcome.md", WELCOME);
    fixture.write_module("03-empty.md", "");

    let report = fixture
        .manager()
        .validate_catalog(&StructuralValidator)
        .await
        .unwrap();
    assert!(report.has_errors());
    assert_eq!(report.modules.len(), 3);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.error_count(), 2);
}

#[tokio::test]
async fn test_validate_clean_catalog() {
    let fixture = ContentFixture::sample();
    let report = fixture
        .manager()
        .validate_catalog(&StructuralValidator)
        .await
        .unwrap();
    assert!(!report.has_errors());
}

#[tokio::test]
async fn test_invalid_utf8_file_does_not_break_catalog() {
    let fixture = ContentFixture::new();
    fixture.write_module("01-welcome.md", WELCOME);
    std::fs::write(
        fixture.modules_dir().join("02-broken.md"),
        b"# Broken\n\n\xff caf\xe9\n",
    )
    .unwrap();

    let modules = fixture.manager().load_all_modules().await.unwrap();
    let ids: Vec<&str> = modules.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["welcome", "broken"]);
    assert_eq!(modules[1].title, "Broken");
    assert!(modules[1].content.contains('\u{FFFD}'));
}
