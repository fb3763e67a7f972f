//! Aggregated project snapshot.
//!
//! Everything in here is recomputed from disk on every call. Nothing fails:
//! a file that cannot be read is reported as absent.

use crate::checklist::{self, ChecklistStatus};
use crate::insights::{self, GitStatus, TestsSummary};
use crate::paths::{self, ProjectLayout};
use crate::recommend::{self, NextAction};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStatus {
    pub mission: ChecklistStatus,
    pub roadmap: ChecklistStatus,
    pub tech_stack: ChecklistStatus,
}

impl ProductStatus {
    /// All three documents exist and have been written by the team.
    pub fn is_complete(&self) -> bool {
        self.mission.is_authored() && self.roadmap.is_authored() && self.tech_stack.is_authored()
    }
}

pub fn product_status(layout: &ProjectLayout) -> ProductStatus {
    let resolve = |(primary, legacy): (&str, &str)| {
        checklist::parse_with_fallback(
            &layout.agent_os_file(primary),
            &layout.agent_os_file(legacy),
        )
    };
    ProductStatus {
        mission: resolve(paths::MISSION_MD),
        roadmap: resolve(paths::ROADMAP_MD),
        tech_stack: resolve(paths::TECH_STACK_MD),
    }
}

// ---------------------------------------------------------------------------
// Design
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPrompts {
    pub one_shot: bool,
    pub section: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaStatus {
    pub audit: bool,
    pub polish: bool,
}

/// Design phase progress. Existence of a marker file is the whole truth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignStatus {
    pub exists: bool,
    pub initialized: bool,
    pub tokens: bool,
    pub shell: bool,
    pub exported: bool,
    pub export_prompts: ExportPrompts,
    pub qa: QaStatus,
}

pub fn design_status(layout: &ProjectLayout) -> DesignStatus {
    let design = |rel: &str| layout.design.join(rel).exists();
    let plan = |rel: &str| layout.product_plan.join(rel).exists();

    let tokens = design(paths::DESIGN_TOKENS);
    DesignStatus {
        exists: tokens,
        initialized: design(paths::DESIGN_OVERVIEW) || design(paths::DESIGN_MISSION),
        tokens,
        shell: design(paths::DESIGN_SHELL),
        exported: layout.product_plan.exists(),
        export_prompts: ExportPrompts {
            one_shot: plan(paths::ONE_SHOT_PROMPT),
            section: plan(paths::SECTION_PROMPT),
        },
        qa: QaStatus {
            audit: design(paths::QA_AUDIT),
            polish: design(paths::QA_POLISH),
        },
    }
}

// ---------------------------------------------------------------------------
// Specs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    pub name: String,
    pub spec: ChecklistStatus,
    pub tasks: ChecklistStatus,
}

impl Spec {
    /// Tasks are absent or have unticked boxes.
    pub fn needs_work(&self) -> bool {
        !self.tasks.is_complete()
    }
}

/// One entry per directory directly under `specs/`, sorted by name.
pub fn list_specs(layout: &ProjectLayout) -> Vec<Spec> {
    spec_names(layout)
        .into_iter()
        .map(|name| {
            let dir = layout.spec_dir(&name);
            Spec {
                spec: checklist::parse_file(&dir.join(paths::SPEC_FILE)),
                tasks: checklist::parse_file(&dir.join(paths::TASKS_FILE)),
                name,
            }
        })
        .collect()
}

/// Names of the spec directories, sorted. Hidden directories are skipped;
/// a missing `specs/` is empty.
pub fn spec_names(layout: &ProjectLayout) -> Vec<String> {
    let specs_dir = layout.specs_dir();
    let entries = match std::fs::read_dir(&specs_dir) {
        Ok(entries) => entries,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %specs_dir.display(), error = %e, "cannot list specs");
            }
            return Vec::new();
        }
    };
    let mut names: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// Implementation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecTotals {
    pub total: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImplementationStatus {
    pub scaffolded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<TestsSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<SpecTotals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitStatus>,
}

pub fn implementation_status(layout: &ProjectLayout, specs: &[Spec]) -> ImplementationStatus {
    ImplementationStatus {
        scaffolded: layout.app.join(paths::SCAFFOLD_MARKER).exists(),
        tests: insights::count_tests(&layout.app),
        coverage: insights::read_coverage(&layout.app),
        specs: Some(SpecTotals {
            total: specs.len(),
            completed: specs.iter().filter(|s| !s.needs_work()).count(),
        }),
        git: insights::read_git(&layout.root),
    }
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// Reachability of the processes around the engine. `api` is this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub api: bool,
    pub design: bool,
    pub app: bool,
}

impl ServiceHealth {
    pub fn new(design: bool, app: bool) -> Self {
        Self {
            api: true,
            design,
            app,
        }
    }
}

impl Default for ServiceHealth {
    fn default() -> Self {
        Self::new(false, false)
    }
}

// ---------------------------------------------------------------------------
// ProjectState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    pub product: ProductStatus,
    pub design: DesignStatus,
    pub implementation: ImplementationStatus,
    pub specs: Vec<Spec>,
    pub services: ServiceHealth,
    pub project_root: String,
}

impl ProjectState {
    /// Read the whole project. `services` comes from the caller because
    /// probing is async and bounded separately.
    pub fn collect(layout: &ProjectLayout, services: ServiceHealth) -> Self {
        let specs = list_specs(layout);
        Self {
            product: product_status(layout),
            design: design_status(layout),
            implementation: implementation_status(layout, &specs),
            specs,
            services,
            project_root: layout.root.display().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// StatusReport
// ---------------------------------------------------------------------------

/// Snapshot plus the recommendation derived from it: one poll answers both
/// "where are we" and "what next".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(flatten)]
    pub state: ProjectState,
    pub next: NextAction,
}

impl StatusReport {
    pub fn new(state: ProjectState) -> Self {
        let next = recommend::recommend(&state);
        Self { state, next }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
