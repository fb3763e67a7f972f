//! Markdown checklist parsing.
//!
//! A checklist line is `- [ ] text` or `- [x] text`, optionally indented and
//! with loose spacing around the dash and brackets. Everything else in the
//! document is ignored for counting purposes but still feeds the boilerplate
//! check.

use crate::boilerplate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    pub completed: bool,
}

/// Progress of a single markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistStatus {
    pub exists: bool,
    pub completed: usize,
    pub total: usize,
    pub next_item: Option<String>,
    pub items: Vec<ChecklistItem>,
    pub is_boilerplate: bool,
}

impl ChecklistStatus {
    /// Status of a file that is not on disk (or could not be read).
    pub fn missing() -> Self {
        Self::default()
    }

    /// Exists, is not template text.
    pub fn is_authored(&self) -> bool {
        self.exists && !self.is_boilerplate
    }

    /// Exists with no unticked boxes. A file without checkboxes counts as
    /// complete.
    pub fn is_complete(&self) -> bool {
        self.exists && self.completed == self.total
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

static CHECKBOX_RE: OnceLock<Regex> = OnceLock::new();
static ORDINAL_RE: OnceLock<Regex> = OnceLock::new();

fn checkbox_re() -> &'static Regex {
    CHECKBOX_RE.get_or_init(|| Regex::new(r"^\s*-\s*\[([ xX])\]\s*(\S.*)$").unwrap())
}

fn ordinal_re() -> &'static Regex {
    ORDINAL_RE.get_or_init(|| Regex::new(r"^\d+\.\s*").unwrap())
}

/// Strip bold markers and a leading `1. ` style ordinal for display.
pub fn clean_item_text(raw: &str) -> String {
    let unbolded = raw.replace("**", "");
    let trimmed = unbolded.trim();
    ordinal_re().replace(trimmed, "").trim().to_string()
}

/// Parse checklist content that is known to exist.
pub fn parse_str(content: &str) -> ChecklistStatus {
    let mut items = Vec::new();
    for line in content.lines() {
        let Some(caps) = checkbox_re().captures(line) else {
            continue;
        };
        let completed = !caps[1].trim().is_empty();
        items.push(ChecklistItem {
            name: clean_item_text(&caps[2]),
            completed,
        });
    }

    let completed = items.iter().filter(|i| i.completed).count();
    let next_item = items.iter().find(|i| !i.completed).map(|i| i.name.clone());

    ChecklistStatus {
        exists: true,
        completed,
        total: items.len(),
        next_item,
        items,
        is_boilerplate: boilerplate::is_boilerplate(content),
    }
}

/// Parse the markdown file at `path`. Absent or unreadable files yield
/// [`ChecklistStatus::missing`].
pub fn parse_file(path: &Path) -> ChecklistStatus {
    match crate::io::read_optional(path) {
        Some(content) => parse_str(&content),
        None => ChecklistStatus::missing(),
    }
}

/// Parse `primary`, falling back to `legacy` when the primary is absent.
pub fn parse_with_fallback(primary: &Path, legacy: &Path) -> ChecklistStatus {
    let status = parse_file(primary);
    if status.exists {
        status
    } else {
        parse_file(legacy)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn counts_checked_and_unchecked() {
        let status = parse_str("# Tasks\n- [x] one\n- [ ] two\n- [x] three\nprose\n");
        assert!(status.exists);
        assert_eq!(status.total, 3);
        assert_eq!(status.completed, 2);
        assert_eq!(status.next_item.as_deref(), Some("two"));
        assert_eq!(
            status.items,
            vec![
                ChecklistItem {
                    name: "one".into(),
                    completed: true,
                },
                ChecklistItem {
                    name: "two".into(),
                    completed: false,
                },
                ChecklistItem {
                    name: "three".into(),
                    completed: true,
                },
            ]
        );
    }

    #[test]
    fn tolerates_indent_spacing_and_uppercase() {
        let status = parse_str("  - [X] nested\n-[ ]tight\n\t-   [ ]   loose  \r\n");
        assert_eq!(status.total, 3);
        assert_eq!(status.completed, 1);
        assert_eq!(status.next_item.as_deref(), Some("tight"));
        assert_eq!(status.items[2].name, "loose");
    }

    #[test]
    fn ignores_non_checkbox_lines() {
        let status = parse_str("* [ ] star bullet\n- [ ]\n- [y] odd\n1. [ ] numbered\n");
        assert!(status.exists);
        assert_eq!(status.total, 0);
        assert_eq!(status.completed, 0);
        assert!(status.next_item.is_none());
    }

    #[test]
    fn cleans_bold_and_ordinals() {
        let status = parse_str("- [ ] **1. User Auth** - login flow\n- [ ] 12.Billing\n");
        assert_eq!(status.items[0].name, "User Auth - login flow");
        assert_eq!(status.items[1].name, "Billing");
        assert_eq!(status.next_item.as_deref(), Some("User Auth - login flow"));
    }

    #[test]
    fn all_checked_has_no_next_item() {
        let status = parse_str("- [x] a\n- [x] b");
        assert_eq!(status.completed, 2);
        assert_eq!(status.total, 2);
        assert!(status.next_item.is_none());
        assert!(status.is_complete());
    }

    #[test]
    fn zero_checkboxes_is_complete() {
        let status = parse_str("# Mission\nBuild a great app.");
        assert!(status.exists);
        assert!(status.is_complete());
        assert!(!ChecklistStatus::missing().is_complete());
        assert!(status.is_authored());
    }

    #[test]
    fn completed_never_exceeds_total() {
        let content = (0..50)
            .map(|i| if i % 3 == 0 { "- [x] done" } else { "- [ ] todo" })
            .collect::<Vec<_>>()
            .join("\n");
        let status = parse_str(&content);
        assert_eq!(status.total, 50);
        assert_eq!(status.completed, 17);
        assert!(status.completed <= status.total);
    }

    #[test]
    fn boilerplate_flag_is_set() {
        let status = parse_str("# Roadmap\n- [ ] MVP Launch\n");
        assert!(status.is_boilerplate);
        assert!(!status.is_authored());
    }

    #[test]
    fn missing_file_is_empty_status() {
        let dir = TempDir::new().unwrap();
        let status = parse_file(&dir.path().join("absent.md"));
        assert_eq!(status, ChecklistStatus::missing());
        assert!(!status.exists);
        assert_eq!(status.total, 0);
        assert!(status.items.is_empty());
        assert!(status.next_item.is_none());
    }

    #[test]
    fn missing_file_serializes_null_next_item() {
        let json = serde_json::to_value(ChecklistStatus::missing()).unwrap();
        assert_eq!(json["exists"], false);
        assert!(json["nextItem"].is_null());
        assert_eq!(json["isBoilerplate"], false);
        assert_eq!(json["items"], serde_json::json!([]));
    }

    #[test]
    fn fallback_used_only_when_primary_absent() {
        let dir = TempDir::new().unwrap();
        let primary = dir.path().join("mission.md");
        let legacy = dir.path().join("product-overview.md");
        std::fs::write(&legacy, "- [ ] legacy").unwrap();

        let status = parse_with_fallback(&primary, &legacy);
        assert_eq!(status.next_item.as_deref(), Some("legacy"));

        std::fs::write(&primary, "- [x] primary").unwrap();
        let status = parse_with_fallback(&primary, &legacy);
        assert_eq!(status.completed, 1);
        assert!(status.next_item.is_none());
    }

    #[test]
    fn clean_item_text_trims() {
        assert_eq!(clean_item_text("  **3.  Search**  "), "Search");
        assert_eq!(clean_item_text("Plain"), "Plain");
    }
}
