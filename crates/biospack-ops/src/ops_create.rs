//! Operation: generate a Spack recipe for a Bioconductor package.

use std::path::{Path, PathBuf};

use biospack_core::config::GlobalConfig;
use biospack_core::spack::{self, SpackRepo};
use biospack_util::errors::BiospackError;
use biospack_util::fs::write_atomic;
use biospack_util::progress::{status, status_info};

use crate::ops_plan::build_plan;
use crate::recipe;

/// Options for `biospack create`.
#[derive(Default)]
pub struct CreateOptions {
    /// Target Spack repository; falls back to the config, then discovery.
    pub spack_repo: Option<PathBuf>,
    pub git_url: Option<String>,
    /// Overwrite an existing recipe.
    pub force: bool,
    /// Print the recipe instead of writing it.
    pub dry_run: bool,
}

/// Result of a create operation.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateResult {
    Written(PathBuf),
    Printed,
}

/// Pick the Spack repository: explicit option, configured path, then the
/// nearest ancestor of `cwd` containing `repo.yaml`.
pub fn resolve_spack_repo(
    explicit: Option<&Path>,
    config: &GlobalConfig,
    cwd: &Path,
) -> Result<SpackRepo, BiospackError> {
    if let Some(path) = explicit.or(config.spack_repo.as_deref()) {
        return Ok(SpackRepo::new(path));
    }
    SpackRepo::discover(cwd).ok_or_else(|| BiospackError::Config {
        message: format!(
            "no Spack repository given and none found above {}; pass --spack-repo or set spack-repo in the config",
            cwd.display()
        ),
    })
}

/// Build and render the recipe for `package`, then write or print it.
///
/// Nothing is written unless every release was processed without a fatal
/// error.
pub fn create(
    package: &str,
    config: &GlobalConfig,
    cwd: &Path,
    opts: &CreateOptions,
) -> miette::Result<CreateResult> {
    let spack_name = spack::spack_name(package);

    let target = if opts.dry_run {
        None
    } else {
        let repo = resolve_spack_repo(opts.spack_repo.as_deref(), config, cwd)?;
        if repo.name_exists(&spack_name) && !opts.force {
            return Err(BiospackError::Recipe {
                message: format!(
                    "{spack_name} already exists at {}; use --force to overwrite",
                    repo.recipe_path(&spack_name).display()
                ),
            }
            .into());
        }
        Some(repo.recipe_path(&spack_name))
    };

    let plan = build_plan(package, config, opts.git_url.as_deref())?;
    let text = recipe::render(&plan);

    match target {
        None => {
            print!("{text}");
            Ok(CreateResult::Printed)
        }
        Some(path) => {
            write_atomic(&path, &text).map_err(BiospackError::Io)?;
            status(
                "Created",
                &format!("{spack_name} ({} versions)", plan.versions.len()),
            );
            status_info("Wrote", &path.display().to_string());
            Ok(CreateResult::Written(path))
        }
    }
}
