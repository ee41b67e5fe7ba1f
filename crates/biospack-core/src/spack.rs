//! Spack naming rules and package repository layout.

use std::path::{Path, PathBuf};

/// File marking the root of a Spack package repository.
pub const REPO_MARKER: &str = "repo.yaml";

/// Spack package name for an R package: `GO.db` becomes `r-go-db`.
pub fn spack_name(r_package: &str) -> String {
    format!("r-{}", r_package.to_lowercase().replace('.', "-"))
}

/// Python class name for a Spack package name: `r-go-db` becomes `RGoDb`.
pub fn class_name(spack_name: &str) -> String {
    spack_name
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// A Spack package repository on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpackRepo {
    root: PathBuf,
}

impl SpackRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find the repository containing `start` by walking up to `repo.yaml`.
    pub fn discover(start: &Path) -> Option<Self> {
        biospack_util::fs::find_ancestor_with(start, REPO_MARKER).map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/packages/<name>/package.py`
    pub fn recipe_path(&self, spack_name: &str) -> PathBuf {
        self.root
            .join("packages")
            .join(spack_name)
            .join("package.py")
    }

    /// Whether a recipe for `spack_name` is already registered.
    pub fn name_exists(&self, spack_name: &str) -> bool {
        self.recipe_path(spack_name).is_file()
    }
}
