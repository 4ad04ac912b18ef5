//! Pluggable generation and translation backends.
//!
//! The `/content/generate` and `/content/translate` endpoints call through
//! these traits. The built-in implementations are simulated: generation
//! fills Markdown templates and translation substitutes a fixed glossary of
//! guide terms. A real backend implements the same trait and is handed to
//! [`AppState`](crate::AppState).

use async_trait::async_trait;
use createx_core::Result;
use serde_json::Value;

/// Produces new content from a prompt.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate content of `content_type` ("module", "activity",
    /// "objectives", ...) for `prompt`. `context` carries optional hints.
    async fn generate(&self, content_type: &str, prompt: &str, context: &Value) -> Result<String>;

    /// Provider name for response metadata.
    fn name(&self) -> &str;
}

/// Translates content between languages.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `content` from `source` to `target`.
    async fn translate(&self, content: &str, source: &str, target: &str) -> Result<String>;

    /// Provider name for response metadata.
    fn name(&self) -> &str;
}

// ============================================================================
// Simulated generation
// ============================================================================

/// Template-based generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedGenerator;

impl SimulatedGenerator {
    fn hint<'a>(context: &'a Value, key: &str, default: &'a str) -> &'a str {
        context
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(default)
    }

    fn module(prompt: &str, context: &Value) -> String {
        let track = Self::hint(context, "track", "Foundations");
        let duration = Self::hint(context, "duration", "45 minutes");
        let difficulty = Self::hint(context, "difficulty", "Beginner");
        format!(
            "# {prompt}\n\n\
             **Track:** {track}\n\n\
             **Duration:** {duration}\n\n\
             **Difficulty:** {difficulty}\n\n\
             ## Learning Objectives\n\
             - Explain the key ideas behind {prompt}\n\
             - Apply {prompt} in a team exercise\n\
             - Reflect on how {prompt} changes your design practice\n\n\
             ## Overview\n\n\
             This module introduces {prompt} through short input and hands-on practice.\n\n\
             ## Activity\n\n\
             In small groups, spend 15 minutes applying {prompt} to a real challenge, \
             then share one insight with the room.\n"
        )
    }

    fn activity(prompt: &str, context: &Value) -> String {
        let duration = Self::hint(context, "duration", "15 minutes");
        format!(
            "## Activity: {prompt}\n\n\
             **Duration:** {duration}\n\n\
             ### Instructions\n\
             1. Form groups of three or four.\n\
             2. Discuss {prompt} and capture ideas on sticky notes.\n\
             3. Cluster the notes and pick the strongest idea.\n\
             4. Present it to another group for feedback.\n\n\
             ### Debrief\n\
             - What surprised you?\n\
             - What would you try differently next time?\n"
        )
    }

    fn objectives(prompt: &str) -> String {
        format!(
            "## Learning Objectives\n\
             - Describe the core concepts of {prompt}\n\
             - Apply {prompt} to a guided exercise\n\
             - Evaluate outcomes using peer feedback\n"
        )
    }
}

#[async_trait]
impl GenerationProvider for SimulatedGenerator {
    async fn generate(&self, content_type: &str, prompt: &str, context: &Value) -> Result<String> {
        let prompt = prompt.trim();
        let generated = match content_type.to_lowercase().as_str() {
            "module" => Self::module(prompt, context),
            "activity" => Self::activity(prompt, context),
            "objectives" | "learning-objectives" => Self::objectives(prompt),
            _ => format!("Generated {content_type} content for: {prompt}\n"),
        };
        Ok(generated)
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

// ============================================================================
// Simulated translation
// ============================================================================

/// English/Chinese guide glossary, `(en, zh)`.
const GLOSSARY: &[(&str, &str)] = &[
    ("Learning Objectives", "学习目标"),
    ("Design Thinking", "设计思维"),
    ("Design Process", "设计流程"),
    ("Prerequisites", "先修要求"),
    ("Facilitator", "引导者"),
    ("Foundations", "基础"),
    ("Difficulty", "难度"),
    ("Duration", "时长"),
    ("Chapter", "章节"),
    ("Track", "学习路径"),
    ("Module", "模块"),
    ("Activity", "活动"),
    ("Exercise", "练习"),
    ("Discussion", "讨论"),
    ("Reflection", "反思"),
    ("Workshop", "工作坊"),
    ("Overview", "概述"),
    ("Research", "研究"),
    ("Empathy", "同理心"),
    ("Prototype", "原型"),
    ("Team", "团队"),
    ("Welcome", "欢迎"),
    ("Beginner", "初级"),
    ("Intermediate", "中级"),
    ("Advanced", "高级"),
    ("minutes", "分钟"),
    ("hours", "小时"),
    ("hour", "小时"),
];

/// Glossary substitution between English and Chinese.
///
/// Longer phrases are replaced first. Language pairs other than en/zh
/// return the content unchanged.
#[derive(Debug, Clone)]
pub struct SimulatedTranslator {
    en_to_zh: Vec<(&'static str, &'static str)>,
    zh_to_en: Vec<(&'static str, &'static str)>,
}

impl Default for SimulatedTranslator {
    fn default() -> Self {
        let mut en_to_zh = GLOSSARY.to_vec();
        en_to_zh.sort_by_key(|(en, _)| std::cmp::Reverse(en.chars().count()));

        let mut zh_to_en: Vec<(&'static str, &'static str)> = Vec::new();
        for (en, zh) in GLOSSARY {
            if !zh_to_en.iter().any(|(seen, _)| seen == zh) {
                zh_to_en.push((*zh, *en));
            }
        }
        zh_to_en.sort_by_key(|(zh, _)| std::cmp::Reverse(zh.chars().count()));

        Self { en_to_zh, zh_to_en }
    }
}

impl SimulatedTranslator {
    /// Create a translator with the built-in glossary.
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, source: &str, target: &str) -> Option<&[(&'static str, &'static str)]> {
        match (primary_subtag(source).as_str(), primary_subtag(target).as_str()) {
            ("en", "zh") => Some(self.en_to_zh.as_slice()),
            ("zh", "en") => Some(self.zh_to_en.as_slice()),
            _ => None,
        }
    }

    /// Apply the glossary for `source` → `target`.
    pub fn substitute(&self, content: &str, source: &str, target: &str) -> String {
        let Some(table) = self.table(source, target) else {
            return content.to_string();
        };
        table
            .iter()
            .fold(content.to_string(), |text, (from, to)| replace_term(&text, from, to))
    }
}

#[async_trait]
impl TranslationProvider for SimulatedTranslator {
    async fn translate(&self, content: &str, source: &str, target: &str) -> Result<String> {
        Ok(self.substitute(content, source, target))
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

fn primary_subtag(language: &str) -> String {
    language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Replace whole-word occurrences of `from`; a match glued to ASCII letters
/// or digits on either side is left alone.
fn replace_term(text: &str, from: &str, to: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, matched) in text.match_indices(from) {
        let end = start + matched.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        let glued = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
        if glued(before) || glued(after) {
            continue;
        }
        out.push_str(&text[last..start]);
        out.push_str(to);
        last = end;
    }
    out.push_str(&text[last..]);
    out
}

// ============================================================================
// Tests
// ============================================================================
