//! Command dispatch and handler modules.

mod create;
mod exists;
mod plan;
mod releases;

use miette::Result;

use biospack_core::config::GlobalConfig;
use biospack_util::errors::BiospackError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Create {
            package,
            spack_repo,
            git_url,
            force,
            dry_run,
        } => create::exec(&package, spack_repo, git_url, force, dry_run),
        Command::Plan {
            package,
            git_url,
            json,
        } => plan::exec(&package, git_url, json),
        Command::Exists {
            package,
            spack_repo,
        } => exists::exec(&package, spack_repo.as_deref()),
        Command::Releases => releases::exec(),
    }
}

fn load_config() -> Result<GlobalConfig> {
    Ok(GlobalConfig::load()?)
}

fn current_dir() -> Result<std::path::PathBuf> {
    Ok(std::env::current_dir().map_err(BiospackError::Io)?)
}
