//! Thin wrapper over the system `git` binary.
//!
//! Every call is one blocking subprocess. Checkout mutates the shared working
//! tree, so it takes `&mut self`.

use std::path::{Path, PathBuf};

use crate::errors::BiospackError;
use crate::process::CommandBuilder;

/// A git working tree on disk.
#[derive(Debug)]
pub struct GitRepo {
    work_tree: PathBuf,
}

impl GitRepo {
    /// Wrap an existing working tree without touching it.
    pub fn open(work_tree: impl Into<PathBuf>) -> Self {
        Self {
            work_tree: work_tree.into(),
        }
    }

    /// Clone `url` into `dest` and return a handle on the new working tree.
    pub fn clone_from(url: &str, dest: &Path) -> Result<Self, BiospackError> {
        tracing::debug!(url, dest = %dest.display(), "cloning repository");
        let output = CommandBuilder::new("git")
            .args(["clone", "--quiet", url])
            .arg(dest.to_string_lossy())
            .env("GIT_TERMINAL_PROMPT", "0")
            .exec()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BiospackError::Git {
                message: format!("git clone {url} failed: {}", stderr.trim()),
            });
        }
        Ok(Self::open(dest))
    }

    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    /// Force-checkout `rev` (a branch, tag or commit).
    pub fn checkout(&mut self, rev: &str) -> Result<(), BiospackError> {
        let output = self
            .git()
            .args(["checkout", "--quiet", "--force", rev])
            .exec()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BiospackError::Checkout {
                tag: rev.to_string(),
                message: stderr.trim().to_string(),
            });
        }
        Ok(())
    }

    /// SHA of the commit currently checked out.
    pub fn head_commit(&self) -> Result<String, BiospackError> {
        let output = self.git().args(["rev-parse", "HEAD"]).exec()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BiospackError::Git {
                message: format!("git rev-parse HEAD failed: {}", stderr.trim()),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn git(&self) -> CommandBuilder {
        CommandBuilder::new("git")
            .cwd(self.work_tree.to_string_lossy())
            .env("GIT_TERMINAL_PROMPT", "0")
    }
}
