use crate::error::{AgentOsError, Result};
use crate::paths::{self, ProjectLayout};
use crate::status::Spec;
use std::path::PathBuf;

/// Seed checklist for a new spec: exactly one unchecked item.
pub const SEED_TASKS: &str = "# Tasks\n\n- [ ] Initial task";

pub fn seed_spec(name: &str) -> String {
    format!("# Spec: {name}")
}

/// Prompt a client can hand to an agent to start shaping `name`.
pub fn shape_prompt(name: &str) -> String {
    format!("Let's shape the spec for '{name}'. Read commands/shape-spec/shape-spec.md.")
}

/// Create `specs/<name>/` with a stub spec and a one-item task list.
/// Never overwrites an existing spec.
pub fn create(layout: &ProjectLayout, name: &str) -> Result<PathBuf> {
    let name = name.trim();
    paths::validate_spec_name(name)?;

    let dir = layout.spec_dir(name);
    if dir.exists() {
        return Err(AgentOsError::SpecExists(name.to_string()));
    }

    crate::io::ensure_dir(&dir)?;
    crate::io::atomic_write(&dir.join(paths::SPEC_FILE), seed_spec(name).as_bytes())?;
    crate::io::atomic_write(&dir.join(paths::TASKS_FILE), SEED_TASKS.as_bytes())?;

    tracing::info!(spec = name, path = %dir.display(), "created spec");
    Ok(dir)
}

/// Remove `specs/<name>/` and everything in it. There is no undo.
pub fn delete(layout: &ProjectLayout, name: &str) -> Result<()> {
    // Validate before touching the filesystem.
    paths::validate_spec_name(name)?;

    let dir = layout.spec_dir(name);
    if !dir.is_dir() {
        return Err(AgentOsError::SpecNotFound(name.to_string()));
    }
    std::fs::remove_dir_all(&dir)?;

    tracing::info!(spec = name, "deleted spec");
    Ok(())
}

/// Every spec with its parsed documents, in listing order.
pub fn list(layout: &ProjectLayout) -> Vec<Spec> {
    crate::status::list_specs(layout)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist;
    use crate::config::Config;
    use tempfile::TempDir;

    fn layout(dir: &TempDir) -> ProjectLayout {
        ProjectLayout::new(dir.path(), &Config::default())
    }

    #[test]
    fn create_seeds_two_files() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);
        let path = create(&layout, "feature-one").unwrap();

        assert_eq!(path, layout.spec_dir("feature-one"));
        assert_eq!(
            std::fs::read_to_string(path.join("spec.md")).unwrap(),
            "# Spec: feature-one"
        );
        let tasks = checklist::parse_file(&path.join("tasks.md"));
        assert_eq!(tasks.total, 1);
        assert_eq!(tasks.completed, 0);
        assert_eq!(tasks.next_item.as_deref(), Some("Initial task"));
    }

    #[test]
    fn create_twice_fails_without_overwrite() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);
        let path = create(&layout, "feature-one").unwrap();
        std::fs::write(path.join("tasks.md"), "- [x] edited").unwrap();

        let err = create(&layout, "feature-one").unwrap_err();
        assert!(matches!(err, AgentOsError::SpecExists(_)));
        assert!(err.is_invalid_input());
        assert_eq!(
            std::fs::read_to_string(path.join("tasks.md")).unwrap(),
            "- [x] edited"
        );
    }

    #[test]
    fn create_rejects_empty_and_unsafe_names() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);
        assert!(matches!(
            create(&layout, "   "),
            Err(AgentOsError::MissingField(_))
        ));
        assert!(matches!(
            create(&layout, "../escape"),
            Err(AgentOsError::InvalidSpecName(_))
        ));
        assert!(!dir.path().join("agent-os/escape").exists());
    }

    #[test]
    fn create_trims_name() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);
        create(&layout, "  padded  ").unwrap();
        assert_eq!(list(&layout)[0].name, "padded");
    }

    #[test]
    fn delete_removes_directory() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);
        let path = create(&layout, "gone").unwrap();
        std::fs::create_dir_all(path.join("assets")).unwrap();
        std::fs::write(path.join("assets/x.png"), b"x").unwrap();

        delete(&layout, "gone").unwrap();
        assert!(!path.exists());
        assert!(list(&layout).is_empty());
    }

    #[test]
    fn delete_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = delete(&layout(&dir), "nope").unwrap_err();
        assert!(matches!(err, AgentOsError::SpecNotFound(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn delete_traversal_fails_validation_first() {
        let dir = TempDir::new().unwrap();
        // A real directory the traversal would reach.
        std::fs::create_dir_all(dir.path().join("agent-os/etc")).unwrap();
        std::fs::create_dir_all(dir.path().join("agent-os/specs")).unwrap();

        let err = delete(&layout(&dir), "../etc").unwrap_err();
        assert!(matches!(err, AgentOsError::InvalidSpecName(_)));
        assert!(dir.path().join("agent-os/etc").exists());
    }

    #[test]
    fn delete_refuses_plain_file() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("agent-os/specs")).unwrap();
        std::fs::write(dir.path().join("agent-os/specs/notes"), "x").unwrap();
        assert!(matches!(
            delete(&layout(&dir), "notes"),
            Err(AgentOsError::SpecNotFound(_))
        ));
    }
}
