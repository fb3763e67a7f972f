use crate::config::Config;
use crate::error::{AgentOsError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const AGENT_OS_DIR: &str = "agent-os";
pub const APP_DIR: &str = "app";
pub const DESIGN_DIR: &str = "design-system";
pub const PRODUCT_PLAN_DIR: &str = "product-plan";

pub const CONFIG_FILE: &str = "control-center.yaml";

pub const SPECS_DIR: &str = "specs";
pub const SPEC_FILE: &str = "spec.md";
pub const TASKS_FILE: &str = "tasks.md";

// Product documents: (primary, legacy fallback), relative to agent-os/.
pub const MISSION_MD: (&str, &str) = ("product/mission.md", "product/product-overview.md");
pub const ROADMAP_MD: (&str, &str) = ("product/roadmap.md", "product/product-roadmap.md");
pub const TECH_STACK_MD: (&str, &str) = ("product/tech-stack.md", "product/tech_stack.md");

// Design markers, relative to design-system/.
pub const DESIGN_OVERVIEW: &str = "product/product-overview.md";
pub const DESIGN_MISSION: &str = "product/mission.md";
pub const DESIGN_TOKENS: &str = "product/design-system/colors.json";
pub const DESIGN_SHELL: &str = "product/shell/spec.md";
pub const QA_AUDIT: &str = "QA/audit-report.md";
pub const QA_POLISH: &str = "QA/polish-report.md";

// Export markers, relative to product-plan/.
pub const ONE_SHOT_PROMPT: &str = "prompts/one-shot-prompt.md";
pub const SECTION_PROMPT: &str = "prompts/section-prompt.md";

// Implementation markers, relative to app/.
pub const SCAFFOLD_MARKER: &str = "src/lib/utils.ts";
pub const COVERAGE_SUMMARY: &str = "coverage/coverage-summary.json";

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// ProjectLayout
// ---------------------------------------------------------------------------

/// Absolute locations of every directory the engine inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub agent_os: PathBuf,
    pub app: PathBuf,
    pub design: PathBuf,
    pub product_plan: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        let root = root.into();
        Self {
            agent_os: root.join(&config.paths.agent_os),
            app: root.join(&config.paths.app),
            design: root.join(&config.paths.design),
            product_plan: root.join(&config.paths.product_plan),
            root,
        }
    }

    /// The file-access sandbox.
    pub fn sandbox(&self) -> &Path {
        &self.agent_os
    }

    pub fn specs_dir(&self) -> PathBuf {
        self.agent_os.join(SPECS_DIR)
    }

    pub fn spec_dir(&self, name: &str) -> PathBuf {
        self.specs_dir().join(name)
    }

    pub fn agent_os_file(&self, rel: &str) -> PathBuf {
        self.agent_os.join(rel)
    }
}

// ---------------------------------------------------------------------------
// Spec name validation
// ---------------------------------------------------------------------------

static SPEC_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn spec_name_re() -> &'static Regex {
    SPEC_NAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap())
}

/// Spec names become directory names under `specs/`, so anything beyond
/// letters, digits, `-` and `_` is refused.
pub fn validate_spec_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AgentOsError::MissingField("spec name"));
    }
    if !spec_name_re().is_match(name) {
        return Err(AgentOsError::InvalidSpecName(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
