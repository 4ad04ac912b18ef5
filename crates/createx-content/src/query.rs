//! Pure queries over a loaded catalog.
//!
//! The content manager loads and caches modules; everything it answers
//! about the catalog as a whole is computed here from a slice in reading
//! order, so the rules can be tested without touching the filesystem.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{ModuleContent, ModuleStats, NavEntry};

/// Average reported when no module duration can be parsed.
pub const DEFAULT_AVERAGE_DURATION: &str = "45 minutes";

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d+(?:\.\d+)?)(?:\s*[-–~]\s*(\d+(?:\.\d+)?))?\s*(hours?|hrs?|h\b|小时|minutes?|mins?|m\b|分钟)?",
    )
    .expect("Invalid duration regex")
});

/// Modules whose track equals `track`, ignoring case.
pub fn filter_by_track(modules: &[ModuleContent], track: &str) -> Vec<ModuleContent> {
    let wanted = track.to_lowercase();
    modules
        .iter()
        .filter(|m| m.track.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Case-insensitive keyword search.
///
/// A module matches when the query occurs in its title, track, body,
/// learning objectives, or prerequisites. Title matches rank first; within
/// each group modules are ordered by ascending chapter.
pub fn search(modules: &[ModuleContent], query: &str) -> Vec<ModuleContent> {
    let needle = query.trim().to_lowercase();

    let mut hits: Vec<(bool, &ModuleContent)> = modules
        .iter()
        .filter(|m| searchable_text(m).contains(&needle))
        .map(|m| (m.title.to_lowercase().contains(&needle), m))
        .collect();

    hits.sort_by(|(a_title, a), (b_title, b)| {
        b_title.cmp(a_title).then(a.chapter.cmp(&b.chapter))
    });
    hits.into_iter().map(|(_, m)| m.clone()).collect()
}

fn searchable_text(module: &ModuleContent) -> String {
    format!(
        "{} {} {} {} {}",
        module.title,
        module.track,
        module.content,
        module.learning_objectives.join(" "),
        module.prerequisites.join(" ")
    )
    .to_lowercase()
}

/// Distinct tracks in order of first appearance.
pub fn tracks(modules: &[ModuleContent]) -> Vec<String> {
    let mut seen = HashSet::new();
    modules
        .iter()
        .filter(|m| seen.insert(m.track.as_str()))
        .map(|m| m.track.clone())
        .collect()
}

/// Prev/next links from position in `modules`.
pub fn navigation(modules: &[ModuleContent]) -> Vec<NavEntry> {
    modules
        .iter()
        .enumerate()
        .map(|(i, m)| NavEntry {
            id: m.id.clone(),
            chapter: m.chapter,
            title: m.title.clone(),
            track: m.track.clone(),
            prev: i.checked_sub(1).map(|p| modules[p].id.clone()),
            next: modules.get(i + 1).map(|n| n.id.clone()),
        })
        .collect()
}

/// Aggregate counts and the mean duration.
pub fn stats(modules: &[ModuleContent]) -> ModuleStats {
    let mut track_counts = BTreeMap::new();
    let mut difficulty_counts = BTreeMap::new();
    for module in modules {
        *track_counts.entry(module.track.clone()).or_insert(0) += 1;
        *difficulty_counts.entry(module.difficulty.clone()).or_insert(0) += 1;
    }

    ModuleStats {
        total_modules: modules.len(),
        track_counts,
        difficulty_counts,
        average_duration: average_duration(modules),
    }
}

/// Rounded mean of every parseable duration, as `"{n} minutes"`.
pub fn average_duration(modules: &[ModuleContent]) -> String {
    let minutes: Vec<f64> = modules
        .iter()
        .filter_map(|m| parse_duration_minutes(&m.duration))
        .collect();

    if minutes.is_empty() {
        return DEFAULT_AVERAGE_DURATION.to_string();
    }
    let mean = minutes.iter().sum::<f64>() / minutes.len() as f64;
    format!("{} minutes", mean.round() as u64)
}

/// Minutes described by a human duration string.
///
/// Hours are converted. A range such as `60-90 minutes` counts as its
/// midpoint, and compound forms such as `1 hour 30 minutes` are summed.
/// Numbers without a unit are ignored when some number carries one, so
/// `Session 2: 45 minutes` is 45; otherwise the first bare number is taken
/// as minutes. Returns `None` when no number is found.
pub fn parse_duration_minutes(duration: &str) -> Option<f64> {
    let mut with_unit = None;
    let mut first_bare = None;
    for caps in DURATION_RE.captures_iter(duration) {
        let Some(low) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) else {
            continue;
        };
        let value = match caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok()) {
            Some(high) => (low + high) / 2.0,
            None => low,
        };
        match caps.get(3).map(|unit| unit.as_str().to_lowercase()) {
            Some(unit) => {
                let is_hours = unit.starts_with('h') || unit == "小时";
                let minutes = if is_hours { value * 60.0 } else { value };
                *with_unit.get_or_insert(0.0) += minutes;
            }
            None => {
                first_bare.get_or_insert(value);
            }
        }
    }
    with_unit.or(first_bare)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metadata;

    fn module(id: &str, chapter: u32, title: &str, track: &str, content: &str) -> ModuleContent {
        ModuleContent {
            id: id.to_string(),
            chapter,
            title: title.to_string(),
            track: track.to_string(),
            duration: "30 minutes".to_string(),
            difficulty: "Beginner".to_string(),
            prerequisites: vec![],
            learning_objectives: vec![],
            content: content.to_string(),
            html: String::new(),
            metadata: Metadata::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Search tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_search_title_match_ranks_first() {
        let catalog = vec![
            module("a", 1, "Welcome", "Foundations", "We discuss AI tools."),
            module("b", 2, "Mindsets", "Foundations", "AI is a helper."),
            module("c", 3, "Research", "Design Process", "Ask AI for interview prompts."),
            module("d", 12, "AI Integration", "Advanced", "Using models."),
        ];
        let results = search(&catalog, "AI");
        let ids: Vec<&str> = results.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_covers_lists() {
        let mut m = module("a", 1, "Welcome", "Foundations", "");
        m.prerequisites = vec!["Curiosity".to_string()];
        let other = module("b", 2, "Other", "Foundations", "");
        assert_eq!(search(&[m, other], "CURIOSITY").len(), 1);
    }

    #[test]
    fn test_search_no_match() {
        let catalog = vec![module("a", 1, "Welcome", "Foundations", "Hello")];
        assert!(search(&catalog, "blockchain").is_empty());
    }

    // ------------------------------------------------------------------------
    // Track and navigation tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_filter_by_track_ignores_case() {
        let catalog = vec![
            module("a", 1, "A", "Design Process", ""),
            module("b", 2, "B", "Foundations", ""),
        ];
        let found = filter_by_track(&catalog, "design process");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "a");
        assert!(filter_by_track(&catalog, "design").is_empty());
    }

    #[test]
    fn test_tracks_first_appearance_order() {
        let catalog = vec![
            module("a", 1, "A", "Foundations", ""),
            module("b", 2, "B", "Design Process", ""),
            module("c", 3, "C", "Foundations", ""),
        ];
        assert_eq!(tracks(&catalog), vec!["Foundations", "Design Process"]);
    }

    #[test]
    fn test_navigation_symmetry() {
        let catalog = vec![
            module("a", 1, "A", "T", ""),
            module("b", 2, "B", "T", ""),
            module("c", 3, "C", "T", ""),
        ];
        let nav = navigation(&catalog);
        assert_eq!(nav[0].prev, None);
        for i in 0..nav.len() - 1 {
            assert_eq!(nav[i].next.as_deref(), Some(catalog[i + 1].id.as_str()));
            assert_eq!(nav[i + 1].prev.as_deref(), Some(catalog[i].id.as_str()));
        }
        assert_eq!(nav[2].next, None);
    }

    // ------------------------------------------------------------------------
    // Stats tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_stats_track_counts() {
        let catalog = vec![
            module("a", 1, "A", "Foundations", ""),
            module("b", 2, "B", "Foundations", ""),
            module("c", 3, "C", "Foundations", ""),
            module("d", 4, "D", "Design Process", ""),
            module("e", 5, "E", "Design Process", ""),
        ];
        let stats = stats(&catalog);
        assert_eq!(stats.total_modules, 5);
        assert_eq!(stats.track_counts["Foundations"], 3);
        assert_eq!(stats.track_counts["Design Process"], 2);
        assert_eq!(stats.difficulty_counts["Beginner"], 5);
        assert_eq!(stats.average_duration, "30 minutes");
    }

    #[test]
    fn test_average_duration_mixed_units() {
        let mut a = module("a", 1, "A", "T", "");
        a.duration = "45 minutes".to_string();
        let mut b = module("b", 2, "B", "T", "");
        b.duration = "1 hour".to_string();
        let mut c = module("c", 3, "C", "T", "");
        c.duration = "TBD".to_string();
        assert_eq!(average_duration(&[a, b, c]), "53 minutes");
    }

    #[test]
    fn test_average_duration_falls_back_to_constant() {
        let mut a = module("a", 1, "A", "T", "");
        a.duration = "varies".to_string();
        assert_eq!(average_duration(&[a]), DEFAULT_AVERAGE_DURATION);
        assert_eq!(average_duration(&[]), DEFAULT_AVERAGE_DURATION);
    }

    #[test]
    fn test_parse_duration_ignores_unitless_numbers_beside_units() {
        assert_eq!(parse_duration_minutes("Session 2: 45 minutes"), Some(45.0));
        assert_eq!(parse_duration_minutes("Part 3 of 4, 1 hour"), Some(60.0));
    }

    #[test]
    fn test_parse_duration_forms() {
        assert_eq!(parse_duration_minutes("50 minutes"), Some(50.0));
        assert_eq!(parse_duration_minutes("1.5 hours"), Some(90.0));
        assert_eq!(parse_duration_minutes("60-90 minutes"), Some(75.0));
        assert_eq!(parse_duration_minutes("1 hour 30 minutes"), Some(90.0));
        assert_eq!(parse_duration_minutes("45分钟"), Some(45.0));
        assert_eq!(parse_duration_minutes("2小时"), Some(120.0));
        assert_eq!(parse_duration_minutes("a while"), None);
        assert_eq!(parse_duration_minutes("40"), Some(40.0));
    }
}
