//! Cross-release reconciliation of dependency constraints.
//!
//! A recipe line `depends_on("r-x@M:", when="@V:")` applies to release `V`
//! and everything newer. Walking retained versions from oldest to newest, a
//! line is emitted only when a release's minimum for a dependency is strictly
//! newer than the minimum already guaranteed by an earlier line.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use biospack_core::snapshot::ReleaseSnapshot;
use biospack_core::version;
use biospack_util::errors::BiospackError;

use crate::history::ReleaseHistory;

/// Dependency name used for the R runtime requirement.
pub const R_RUNTIME: &str = "r";

/// One dependency line, applying from `version` onward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emission {
    pub version: String,
    pub name: String,
    pub min_version: Option<String>,
}

/// Strongest minimum already emitted per dependency.
#[derive(Debug, Default)]
struct EmissionLedger {
    guaranteed: HashMap<String, Option<String>>,
}

impl EmissionLedger {
    /// Record `min` for `name` unless the ledger already covers it.
    fn admit(&mut self, name: &str, min: Option<&str>) -> Result<bool, BiospackError> {
        if let Some(current) = self.guaranteed.get(name) {
            if version::compare(current.as_deref(), min)? != Ordering::Less {
                return Ok(false);
            }
        }
        self.guaranteed
            .insert(name.to_string(), min.map(str::to_string));
        Ok(true)
    }
}

/// Reconcile package dependencies across the history.
///
/// Within a release, dependencies are visited in case-insensitive name
/// order. Emissions come back in processing order: oldest release first.
pub fn reconcile(history: &ReleaseHistory) -> Result<Vec<Emission>, BiospackError> {
    reconcile_with(history, |snapshot| {
        snapshot
            .deps
            .sorted()
            .into_iter()
            .map(|c| (c.name.as_str(), c.min_version()))
            .collect()
    })
}

/// Reconcile the per-release R requirement into `R` emissions.
pub fn reconcile_runtime(history: &ReleaseHistory) -> Result<Vec<Emission>, BiospackError> {
    reconcile_with(history, |snapshot| {
        vec![(R_RUNTIME, Some(snapshot.r_constraint.as_str()))]
    })
}

fn reconcile_with<'a, F>(
    history: &'a ReleaseHistory,
    mut constraints: F,
) -> Result<Vec<Emission>, BiospackError>
where
    F: FnMut(&'a ReleaseSnapshot) -> Vec<(&'a str, Option<&'a str>)>,
{
    let mut ledger = EmissionLedger::default();
    let mut emissions = Vec::new();

    for snapshot in history.snapshots().iter().rev() {
        for (name, min) in constraints(snapshot) {
            if ledger.admit(name, min)? {
                tracing::debug!(
                    version = %snapshot.version,
                    dependency = name,
                    min = min.unwrap_or("*"),
                    "emitting constraint"
                );
                emissions.push(Emission {
                    version: snapshot.version.clone(),
                    name: name.to_string(),
                    min_version: min.map(str::to_string),
                });
            }
        }
    }
    Ok(emissions)
}
