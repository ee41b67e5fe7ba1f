//! Core data types for biospack.
//!
//! This crate defines how a single Bioconductor release is read: version
//! ordering, dependency constraints, DESCRIPTION parsing, the release
//! catalog, per-release snapshots, Spack naming, and user configuration.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod config;
pub mod constraint;
pub mod description;
pub mod release;
pub mod snapshot;
pub mod spack;
pub mod version;
