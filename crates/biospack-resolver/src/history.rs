//! Assembly of a package's release history.
//!
//! Releases are visited newest first. The first snapshot seen for a version
//! string is authoritative; older releases reporting the same version are
//! dropped. A release that cannot be read is skipped without aborting the run.

use std::collections::HashSet;

use biospack_core::release::Release;
use biospack_core::snapshot::{self, ReleaseSnapshot, SourceTree};
use biospack_util::errors::BiospackError;

use crate::skipped::{SkipReason, SkipReport};

/// Retained snapshots in newest-first order, one per distinct version.
#[derive(Debug, Clone, Default)]
pub struct ReleaseHistory {
    snapshots: Vec<ReleaseSnapshot>,
    versions: HashSet<String>,
    title: Option<String>,
    description: Option<String>,
    skipped: SkipReport,
}

impl ReleaseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain `snapshot` unless its version is already present.
    ///
    /// Returns `false` for a duplicate, which is recorded as skipped. The
    /// first non-empty title and description seen across retained
    /// snapshots become the package metadata.
    pub fn retain(&mut self, snapshot: ReleaseSnapshot) -> bool {
        if !self.versions.insert(snapshot.version.clone()) {
            self.skipped.add(
                snapshot.release_tag,
                SkipReason::DuplicateVersion(snapshot.version),
            );
            return false;
        }
        if self.title.is_none() && !snapshot.title.is_empty() {
            self.title = Some(snapshot.title.clone());
        }
        if self.description.is_none() && !snapshot.description.is_empty() {
            self.description = Some(snapshot.description.clone());
        }
        self.snapshots.push(snapshot);
        true
    }

    /// Record a release that produced no snapshot.
    pub fn skip(&mut self, tag: impl Into<String>, message: impl Into<String>) {
        self.skipped.add(tag, SkipReason::Unavailable(message.into()));
    }

    /// Retained snapshots, newest first.
    pub fn snapshots(&self) -> &[ReleaseSnapshot] {
        &self.snapshots
    }

    /// Retained versions in the order they were first retained.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.snapshots.iter().map(|s| s.version.as_str())
    }

    pub fn get(&self, version: &str) -> Option<&ReleaseSnapshot> {
        self.snapshots.iter().find(|s| s.version == version)
    }

    pub fn contains(&self, version: &str) -> bool {
        self.versions.contains(version)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn skipped(&self) -> &SkipReport {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// Build the history of `package` by visiting `releases` newest first.
pub fn assemble<T: SourceTree + ?Sized>(
    package: &str,
    tree: &mut T,
    releases: &[Release],
) -> Result<ReleaseHistory, BiospackError> {
    assemble_with(package, tree, releases, |_| {})
}

/// Like [`assemble`], calling `on_release` before each release is visited.
pub fn assemble_with<T, F>(
    package: &str,
    tree: &mut T,
    releases: &[Release],
    mut on_release: F,
) -> Result<ReleaseHistory, BiospackError>
where
    T: SourceTree + ?Sized,
    F: FnMut(&Release),
{
    let mut history = ReleaseHistory::new();

    for release in releases {
        on_release(release);
        let snapshot = match snapshot::extract(tree, release) {
            Ok(snapshot) => snapshot,
            Err(e) if e.is_recoverable() => {
                tracing::warn!(tag = %release.tag, error = %e, "skipping release");
                history.skip(&release.tag, e.to_string());
                continue;
            }
            Err(e) => return Err(e),
        };

        let version = snapshot.version.clone();
        if history.retain(snapshot) {
            tracing::info!(tag = %release.tag, version = %version, "retained release");
        } else {
            tracing::debug!(
                tag = %release.tag,
                version = %version,
                "version already retained from a newer release"
            );
        }
    }

    if history.title.is_none() || history.description.is_none() {
        return Err(BiospackError::NoPackageMetadata {
            package: package.to_string(),
        });
    }
    Ok(history)
}
