//! Release history assembly and cross-release reconciliation of dependency
//! constraints.

pub mod history;
pub mod plan;
pub mod reconcile;
pub mod skipped;
