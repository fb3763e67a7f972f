use crate::checklist;
use crate::status::ProjectState;
use serde::{Deserialize, Serialize};

pub const PHASE_PRODUCT: &str = "Phase 1: Product Strategy";
pub const PHASE_DESIGN: &str = "Phase 2: Design System";
pub const PHASE_IMPLEMENTATION: &str = "Phase 3: Implementation";
pub const PHASE_SPECS: &str = "Phase 4: Feature Specs";

// ---------------------------------------------------------------------------
// NextAction (output)
// ---------------------------------------------------------------------------

/// Client-side actions that cannot be expressed as a copyable prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAction {
    OpenDesign,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    pub phase: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ClientAction>,
}

impl NextAction {
    fn prompt(phase: &str, title: impl Into<String>, description: &str, prompt: String) -> Self {
        Self {
            phase: phase.to_string(),
            title: title.into(),
            description: description.to_string(),
            prompt: Some(prompt),
            action_label: None,
            action: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// One branch of the decision tree.
pub struct Rule {
    pub id: &'static str,
    pub condition: fn(&ProjectState) -> bool,
    pub build: fn(&ProjectState) -> NextAction,
}

// ---------------------------------------------------------------------------
// Recommender
// ---------------------------------------------------------------------------

/// Evaluates rules top to bottom; the first match wins.
pub struct Recommender {
    rules: Vec<Rule>,
}

impl Recommender {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id).collect()
    }

    pub fn recommend(&self, state: &ProjectState) -> NextAction {
        for rule in &self.rules {
            if (rule.condition)(state) {
                return (rule.build)(state);
            }
        }
        verify_or_plan_next()
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

/// Shorthand for `Recommender::default().recommend(state)`.
pub fn recommend(state: &ProjectState) -> NextAction {
    Recommender::default().recommend(state)
}

// ---------------------------------------------------------------------------
// Default rule table
// ---------------------------------------------------------------------------

pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "plan_product",
            condition: |s| !s.product.is_complete(),
            build: |_| {
                NextAction::prompt(
                    PHASE_PRODUCT,
                    "Plan Your Product",
                    "Define your Mission, Roadmap, and Tech Stack to build a solid foundation.",
                    "Let's start Phase 1: Product Planning. Please read \
                     'agent-os/commands/plan-product/plan-product.md' and guide me."
                        .to_string(),
                )
            },
        },
        Rule {
            id: "sync_design",
            condition: |s| !s.design.initialized,
            build: |_| {
                NextAction::prompt(
                    PHASE_DESIGN,
                    "Sync Product to Design OS",
                    "Transfer your Product Mission and Roadmap to Design OS to automate the setup.",
                    "Please sync my product plan to Design OS. Read \
                     'agent-os/commands/initialize-design/initialize-design.md'."
                        .to_string(),
                )
            },
        },
        Rule {
            id: "export_design",
            condition: |s| !s.design.exported,
            build: |_| NextAction {
                phase: PHASE_DESIGN.to_string(),
                title: "Define Your Visuals".to_string(),
                description: "Defining the visuals now prevents generic UI later. \
                              Export your system when ready."
                    .to_string(),
                prompt: None,
                action_label: Some("Open Design OS".to_string()),
                action: Some(ClientAction::OpenDesign),
            },
        },
        Rule {
            id: "scaffold_app",
            condition: |s| !s.implementation.scaffolded,
            build: |_| {
                NextAction::prompt(
                    PHASE_IMPLEMENTATION,
                    "Scaffold Application",
                    "Your design is exported. Now, scaffold the production app with the design system.",
                    "Scaffold the implementation. Read \
                     'agent-os/commands/scaffold-implementation/scaffold-implementation.md'."
                        .to_string(),
                )
            },
        },
        Rule {
            id: "first_spec",
            condition: |s| s.specs.is_empty(),
            build: |_| {
                NextAction::prompt(
                    PHASE_SPECS,
                    "Shape Your First Spec",
                    "Your app is ready! Create a spec for the first feature in your roadmap.",
                    "Let's shape the spec for a new feature. Please read \
                     'agent-os/commands/shape-spec/shape-spec.md'."
                        .to_string(),
                )
            },
        },
        Rule {
            id: "implement_spec",
            condition: |s| s.specs.iter().any(|spec| spec.needs_work()),
            build: |s| {
                let Some(spec) = s.specs.iter().find(|spec| spec.needs_work()) else {
                    return verify_or_plan_next();
                };
                NextAction::prompt(
                    PHASE_SPECS,
                    format!("Implement '{}'", spec.name),
                    "Active spec detected. Write the code!",
                    format!(
                        "Implement the tasks for '{}'. Read commands/implement-tasks/implement-tasks.md.",
                        spec.name
                    ),
                )
            },
        },
        Rule {
            id: "shape_roadmap_item",
            condition: |s| roadmap_next_item(s).is_some(),
            build: |s| {
                let Some(item) = roadmap_next_item(s) else {
                    return verify_or_plan_next();
                };
                NextAction::prompt(
                    PHASE_SPECS,
                    format!("Shape '{item}'"),
                    "Ready to start the next feature? Shape the spec now.",
                    format!(
                        "Let's shape the spec for '{item}'. Please read \
                         'agent-os/commands/shape-spec/shape-spec.md'."
                    ),
                )
            },
        },
    ]
}

/// Roadmap's next unchecked item, cleaned to a single display line.
fn roadmap_next_item(state: &ProjectState) -> Option<String> {
    let roadmap = &state.product.roadmap;
    if roadmap.is_boilerplate {
        return None;
    }
    let raw = roadmap.next_item.as_deref()?;
    let first_line = raw.lines().next().unwrap_or_default();
    let clean = checklist::clean_item_text(first_line);
    if clean.is_empty() {
        None
    } else {
        Some(clean)
    }
}

fn verify_or_plan_next() -> NextAction {
    NextAction::prompt(
        PHASE_SPECS,
        "Verify or Plan Next",
        "Verify implementation or start a new feature.",
        "Let's verify the implementation. Read \
         'agent-os/commands/implement-tasks/3-verify-implementation.md'."
            .to_string(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
