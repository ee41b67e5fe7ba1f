//! Per-release snapshots of a package's DESCRIPTION.
//!
//! Extraction needs exclusive access to the working tree: checkout moves the
//! tree to another commit, so [`extract`] takes the tree by `&mut`.

use biospack_util::errors::BiospackError;
use biospack_util::git::GitRepo;

use crate::constraint::ConstraintTable;
use crate::description::{Description, MANIFEST_FILE};
use crate::release::Release;
use crate::version::VersionKey;

/// A working tree that can be moved between releases and inspected.
pub trait SourceTree {
    /// Move the tree to `tag`. Failure is [`BiospackError::Checkout`].
    fn checkout(&mut self, tag: &str) -> Result<(), BiospackError>;

    /// Commit currently checked out.
    fn current_commit(&self) -> Result<String, BiospackError>;

    /// Raw text of the manifest. A missing or unreadable file is
    /// [`BiospackError::ManifestUnreadable`].
    fn read_manifest(&self) -> Result<String, BiospackError>;
}

impl SourceTree for GitRepo {
    fn checkout(&mut self, tag: &str) -> Result<(), BiospackError> {
        GitRepo::checkout(self, tag)
    }

    fn current_commit(&self) -> Result<String, BiospackError> {
        self.head_commit()
    }

    fn read_manifest(&self) -> Result<String, BiospackError> {
        let path = self.work_tree().join(MANIFEST_FILE);
        std::fs::read_to_string(&path).map_err(|e| BiospackError::ManifestUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Everything biospack keeps about one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSnapshot {
    pub release_tag: String,
    pub version: String,
    /// Empty when the manifest has no `Title`.
    pub title: String,
    /// Empty when the manifest has no `Description`.
    pub description: String,
    pub commit: String,
    pub r_constraint: String,
    pub deps: ConstraintTable,
}

/// Check out `release` and read its snapshot.
///
/// Checkout failures, an unreadable manifest and a missing `Version` are
/// recoverable (see [`BiospackError::is_recoverable`]). A malformed
/// dependency minimum or R version is not.
pub fn extract<T: SourceTree + ?Sized>(
    tree: &mut T,
    release: &Release,
) -> Result<ReleaseSnapshot, BiospackError> {
    tracing::debug!(tag = %release.tag, "checking out release");
    tree.checkout(&release.tag)?;

    let manifest = Description::parse(&tree.read_manifest()?);
    let version = manifest
        .version()
        .ok_or_else(|| BiospackError::MissingVersion {
            path: format!("{}:{MANIFEST_FILE}", release.tag),
        })?
        .to_string();

    VersionKey::parse(Some(&release.r_constraint))?;
    let deps = ConstraintTable::from_constraints(manifest.dependencies())?;
    let commit = tree.current_commit()?;

    tracing::debug!(
        tag = %release.tag,
        version = %version,
        commit = %commit,
        deps = deps.len(),
        "extracted snapshot"
    );

    Ok(ReleaseSnapshot {
        release_tag: release.tag.clone(),
        version,
        title: manifest.title().unwrap_or_default().to_string(),
        description: manifest.description().unwrap_or_default().to_string(),
        commit,
        r_constraint: release.r_constraint.clone(),
        deps,
    })
}
