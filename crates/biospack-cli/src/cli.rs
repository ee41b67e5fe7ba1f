//! CLI argument definitions for biospack.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "biospack",
    version,
    about = "Generate Spack recipes for Bioconductor packages",
    long_about = "biospack reads a Bioconductor package's DESCRIPTION at every release branch \
                  and reconciles the per-release dependency constraints into a minimal, \
                  version-ordered Spack package.py."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate package.py for a Bioconductor package
    Create {
        /// Bioconductor package name, e.g. BiocGenerics
        package: String,
        /// Spack package repository (the directory holding repo.yaml)
        #[arg(long, env = "BIOSPACK_SPACK_REPO")]
        spack_repo: Option<PathBuf>,
        /// Clone from this URL instead of git.bioconductor.org
        #[arg(long)]
        git_url: Option<String>,
        /// Overwrite an existing recipe
        #[arg(long)]
        force: bool,
        /// Print the recipe instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show retained versions and reconciled dependency lines
    Plan {
        /// Bioconductor package name
        package: String,
        /// Clone from this URL instead of git.bioconductor.org
        #[arg(long)]
        git_url: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a recipe already exists in the Spack repository
    Exists {
        /// Bioconductor package name
        package: String,
        /// Spack package repository (the directory holding repo.yaml)
        #[arg(long, env = "BIOSPACK_SPACK_REPO")]
        spack_repo: Option<PathBuf>,
    },

    /// List the Bioconductor releases that are visited
    Releases,
}

pub fn parse() -> Cli {
    Cli::parse()
}
