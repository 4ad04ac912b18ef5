//! Fixture content trees for content manager tests.

use std::path::Path;

use createx_content::ContentManager;
use tempfile::TempDir;

/// A temporary `content/` directory with `modules/` and `translations/`.
pub struct ContentFixture {
    /// Keeps the directory alive for the duration of the test.
    pub dir: TempDir,
}

impl ContentFixture {
    /// An empty content tree.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("modules")).expect("create modules dir");
        Self { dir }
    }

    /// A content tree holding the five-module sample catalog.
    pub fn sample() -> Self {
        let fixture = Self::new();
        fixture.write_module("01-welcome.md", WELCOME);
        fixture.write_module("02-design-mindsets.md", MINDSETS);
        fixture.write_module("03-team-norms.md", TEAM_NORMS);
        fixture.write_module("07-research-empathy.md", RESEARCH_EMPATHY);
        fixture.write_module("12-ai-integration.md", AI_INTEGRATION);
        fixture
    }

    /// Write one module file.
    pub fn write_module(&self, file_name: &str, body: &str) {
        std::fs::write(self.modules_dir().join(file_name), body).expect("write module");
    }

    pub fn modules_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("modules")
    }

    pub fn translations_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("translations")
    }

    /// A manager over this tree.
    pub fn manager(&self) -> ContentManager {
        ContentManager::new(self.modules_dir(), self.translations_dir())
    }

    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

pub const WELCOME: &str = "# Welcome to CreateX\n\n**Track:** Foundations\n\n**Duration:** 30 minutes\n\n**Difficulty:** Beginner\n\n## Learning Objectives\n- Meet the cohort\n- Understand the program arc\n\n## Icebreaker Activity\n\nEveryone shares one thing they made by hand.\n";

pub const MINDSETS: &str = "# Design Mindsets\n\n**Track:** Foundations\n\n**Duration:** 45 minutes\n\n**Prerequisites:** Welcome to CreateX\n\n## Learning Objectives\n- Embrace ambiguity\n\n## Discussion\n\nWhen did a failure teach you something? Some teams ask AI tools for prompts.\n";

pub const TEAM_NORMS: &str = "# Team Norms\n\n**Track:** Foundations\n\n**Duration:** 1 hour\n\n## Learning Objectives\n- Agree on working agreements\n\n## Notes\n\nRevisit norms after each sprint. AI assistants can draft a first version.\n";

pub const RESEARCH_EMPATHY: &str = "# Research & Empathy\n\n**Track:** Design Process\n\n**Duration:** 50 minutes\n\n## Learning Objectives\n- Conduct interviews\n- Apply AEIOU\n\n## Next\n\nSynthesis comes after. Record interviews, then let AI transcribe.\n";

pub const AI_INTEGRATION: &str = "---\ndifficulty: Advanced\nfacilitator_notes: Requires laptops\n---\n# AI Integration\n\n**Track:** Design Process\n\n**Duration:** 40 minutes\n\n## Learning Objectives\n- Prompt responsibly\n";
