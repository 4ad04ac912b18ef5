//! Page chrome labels per language.

/// Fixed strings the page templates print around module content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteLabels {
    /// Site name in the header and page titles.
    pub site_title: &'static str,
    /// Breadcrumb root.
    pub home: &'static str,
    /// Heading of the module grid.
    pub all_modules: &'static str,
    /// Heading of the track summary.
    pub tracks: &'static str,
    /// Stat card: module count.
    pub total_modules: &'static str,
    /// Stat card: track count.
    pub total_tracks: &'static str,
    /// Stat card: mean duration.
    pub average_duration: &'static str,
    /// Chip prefix for the chapter number.
    pub chapter: &'static str,
    /// Chip prefix for the track.
    pub track: &'static str,
    /// Chip prefix for the duration.
    pub duration: &'static str,
    /// Chip prefix for the difficulty.
    pub difficulty: &'static str,
    /// Prerequisites block heading.
    pub prerequisites: &'static str,
    /// Learning objectives block heading.
    pub learning_objectives: &'static str,
    /// Table of contents heading.
    pub on_this_page: &'static str,
    /// Previous-module link.
    pub previous: &'static str,
    /// Next-module link.
    pub next: &'static str,
    /// Overflow note on track cards; `{n}` is replaced by the count.
    pub more_modules: &'static str,
    /// Search box placeholder.
    pub search_placeholder: &'static str,
    /// Shown when a search has no results.
    pub no_results: &'static str,
}

/// English labels.
pub const EN: SiteLabels = SiteLabels {
    site_title: "CreateX Facilitator Guide",
    home: "Home",
    all_modules: "All Modules",
    tracks: "Tracks",
    total_modules: "Modules",
    total_tracks: "Tracks",
    average_duration: "Average Duration",
    chapter: "Chapter",
    track: "Track",
    duration: "Duration",
    difficulty: "Difficulty",
    prerequisites: "Prerequisites",
    learning_objectives: "Learning Objectives",
    on_this_page: "On this page",
    previous: "Previous",
    next: "Next",
    more_modules: "+{n} more",
    search_placeholder: "Search modules...",
    no_results: "No matching modules",
};

/// Simplified Chinese labels.
pub const ZH: SiteLabels = SiteLabels {
    site_title: "CreateX 引导师指南",
    home: "首页",
    all_modules: "全部模块",
    tracks: "学习路径",
    total_modules: "模块",
    total_tracks: "路径",
    average_duration: "平均时长",
    chapter: "章节",
    track: "路径",
    duration: "时长",
    difficulty: "难度",
    prerequisites: "先修要求",
    learning_objectives: "学习目标",
    on_this_page: "本页内容",
    previous: "上一个",
    next: "下一个",
    more_modules: "还有 {n} 个",
    search_placeholder: "搜索模块...",
    no_results: "没有匹配的模块",
};

impl SiteLabels {
    /// Labels for `language`; unknown languages get English.
    pub fn for_language(language: &str) -> &'static SiteLabels {
        let primary = language.split(['-', '_']).next().unwrap_or(language);
        match primary.to_ascii_lowercase().as_str() {
            "zh" => &ZH,
            _ => &EN,
        }
    }

    /// The overflow note for `n` hidden modules.
    pub fn more(&self, n: usize) -> String {
        self.more_modules.replace("{n}", &n.to_string())
    }
}
