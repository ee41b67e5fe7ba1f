//! The reconciled, render-ready view of a package history.

use serde::Serialize;

use biospack_util::errors::BiospackError;

use crate::history::ReleaseHistory;
use crate::reconcile::{self, Emission};
use crate::skipped::SkipReport;

/// One retained version and the commit it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedVersion {
    pub version: String,
    pub commit: String,
    pub release_tag: String,
}

/// Everything a recipe writer needs, in emission order.
#[derive(Debug, Clone, Serialize)]
pub struct RecipePlan {
    pub package: String,
    pub title: String,
    pub description: String,
    /// Newest first.
    pub versions: Vec<PlannedVersion>,
    /// R runtime requirement lines, oldest release first.
    pub runtime: Vec<Emission>,
    /// Package dependency lines, oldest release first.
    pub dependencies: Vec<Emission>,
    pub skipped: SkipReport,
}

impl RecipePlan {
    /// Reconcile `history` into a plan.
    pub fn build(package: &str, history: &ReleaseHistory) -> Result<Self, BiospackError> {
        let no_metadata = || BiospackError::NoPackageMetadata {
            package: package.to_string(),
        };
        let title = history.title().ok_or_else(no_metadata)?.to_string();
        let description = history.description().ok_or_else(no_metadata)?.to_string();

        let versions = history
            .snapshots()
            .iter()
            .map(|s| PlannedVersion {
                version: s.version.clone(),
                commit: s.commit.clone(),
                release_tag: s.release_tag.clone(),
            })
            .collect();

        Ok(Self {
            package: package.to_string(),
            title,
            description,
            versions,
            runtime: reconcile::reconcile_runtime(history)?,
            dependencies: reconcile::reconcile(history)?,
            skipped: history.skipped().clone(),
        })
    }
}
