//! Sandboxed file access.
//!
//! Callers hand in paths relative to the sandbox root. A path is normalized
//! lexically first; anything that would climb above the root (leading `..`,
//! absolute paths, drive prefixes) is refused as a security violation, not
//! reported as a missing file. Existing files are additionally checked after
//! symlink resolution.

use crate::error::{AgentOsError, Result};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileGateway {
    root: PathBuf,
}

impl FileGateway {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a caller path to an absolute path inside the sandbox.
    pub fn resolve(&self, rel: &str) -> Result<PathBuf> {
        if rel.trim().is_empty() {
            return Err(AgentOsError::MissingField("path"));
        }

        let mut parts: Vec<&OsStr> = Vec::new();
        for component in Path::new(rel).components() {
            match component {
                Component::CurDir => {}
                Component::Normal(part) => parts.push(part),
                Component::ParentDir => {
                    if parts.pop().is_none() {
                        return Err(self.deny(rel));
                    }
                }
                Component::RootDir | Component::Prefix(_) => return Err(self.deny(rel)),
            }
        }

        let resolved = parts
            .iter()
            .fold(self.root.clone(), |acc, part| acc.join(part));
        if !resolved.starts_with(&self.root) {
            return Err(self.deny(rel));
        }
        self.check_real_path(&resolved, rel)?;
        Ok(resolved)
    }

    /// Read a whole file as UTF-8.
    pub fn read(&self, rel: &str) -> Result<String> {
        let path = self.resolve(rel)?;
        if !path.is_file() {
            return Err(AgentOsError::FileNotFound(rel.to_string()));
        }
        Ok(std::fs::read_to_string(&path)?)
    }

    /// Replace the file's content, creating parent directories as needed.
    pub fn write(&self, rel: &str, content: &str) -> Result<()> {
        let path = self.resolve(rel)?;
        crate::io::atomic_write(&path, content.as_bytes())?;
        tracing::info!(path = rel, bytes = content.len(), "wrote file");
        Ok(())
    }

    /// Follow symlinks on the deepest existing ancestor of `resolved` and
    /// make sure it still lands under the real sandbox root.
    fn check_real_path(&self, resolved: &Path, rel: &str) -> Result<()> {
        let Ok(real_root) = self.root.canonicalize() else {
            return Ok(());
        };
        let mut probe = resolved;
        loop {
            if let Ok(real) = probe.canonicalize() {
                if real.starts_with(&real_root) {
                    return Ok(());
                }
                return Err(self.deny(rel));
            }
            match probe.parent() {
                Some(parent) if parent.starts_with(&self.root) => probe = parent,
                _ => return Ok(()),
            }
        }
    }

    fn deny(&self, rel: &str) -> AgentOsError {
        tracing::warn!(
            path = rel,
            sandbox = %self.root.display(),
            "rejected file access outside sandbox"
        );
        AgentOsError::AccessDenied(rel.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
