//! Best-effort implementation insights: test files, coverage and git state.
//!
//! Every probe here returns `None` (or a zeroed value) instead of failing;
//! these fields decorate the status snapshot and must never break it.

use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;

const SKIP_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "coverage"];
const TEST_MARKERS: &[&str] = &[".test.", ".spec."];
const TEST_ROOTS: &[&str] = &["src", "tests", "__tests__"];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestsSummary {
    pub count: usize,
    pub has_tests: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitStatus {
    pub initialized: bool,
    pub branch: Option<String>,
    pub uncommitted: usize,
    pub last_commit: Option<DateTime<Utc>>,
}

impl GitStatus {
    fn uninitialized() -> Self {
        Self {
            initialized: false,
            branch: None,
            uncommitted: 0,
            last_commit: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Count test files under the app's source and test directories.
pub fn count_tests(app_dir: &Path) -> Option<TestsSummary> {
    if !app_dir.is_dir() {
        return None;
    }
    let count = TEST_ROOTS
        .iter()
        .map(|dir| count_test_files(&app_dir.join(dir)))
        .sum();
    Some(TestsSummary {
        count,
        has_tests: count > 0,
    })
}

fn count_test_files(dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    let mut count = 0;
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            if !SKIP_DIRS.contains(&name.as_ref()) {
                count += count_test_files(&entry.path());
            }
        } else if TEST_MARKERS.iter().any(|m| name.contains(m)) {
            count += 1;
        }
    }
    count
}

// ---------------------------------------------------------------------------
// Coverage
// ---------------------------------------------------------------------------

/// Line coverage percentage from an istanbul `coverage-summary.json`.
pub fn read_coverage(app_dir: &Path) -> Option<f64> {
    let content = crate::io::read_optional(&app_dir.join(paths::COVERAGE_SUMMARY))?;
    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed coverage summary");
            return None;
        }
    };
    value
        .get("total")?
        .get("lines")?
        .get("pct")?
        .as_f64()
}

// ---------------------------------------------------------------------------
// Git
// ---------------------------------------------------------------------------

/// Repository state of the project root. `None` when git is not installed.
pub fn read_git(root: &Path) -> Option<GitStatus> {
    which::which("git").ok()?;

    let inside = run_git(root, &["rev-parse", "--is-inside-work-tree"]);
    if inside.as_deref() != Some("true") {
        return Some(GitStatus::uninitialized());
    }

    let branch = run_git(root, &["rev-parse", "--abbrev-ref", "HEAD"]).filter(|b| b != "HEAD");
    let uncommitted = run_git(root, &["status", "--porcelain"])
        .map(|out| out.lines().filter(|l| !l.trim().is_empty()).count())
        .unwrap_or(0);
    let last_commit = run_git(root, &["log", "-1", "--format=%cI"])
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc));

    Some(GitStatus {
        initialized: true,
        branch,
        uncommitted,
        last_commit,
    })
}

/// Read-only git invocation. Must not refresh `.git/index` or take
/// `index.lock`; status is polled while the user commits.
fn git_command(root: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.arg("--no-optional-locks")
        .args(args)
        .current_dir(root)
        .env("GIT_OPTIONAL_LOCKS", "0");
    cmd
}

/// Run git in `root`, returning trimmed stdout on success.
fn run_git(root: &Path, args: &[&str]) -> Option<String> {
    let output = git_command(root, args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
