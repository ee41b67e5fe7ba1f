//! Shared utilities for biospack.
//!
//! This crate provides cross-cutting concerns used by all other biospack crates:
//! the error type, filesystem helpers, process spawning, a thin system-git
//! wrapper, and terminal status output.

pub mod errors;
pub mod fs;
pub mod git;
pub mod process;
pub mod progress;
