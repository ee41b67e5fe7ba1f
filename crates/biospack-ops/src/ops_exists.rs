//! Operation: check whether a recipe is already registered.

use std::path::Path;

use biospack_core::config::GlobalConfig;
use biospack_core::spack;

use crate::ops_create::resolve_spack_repo;

/// Whether the Spack repository already has a recipe for `package`.
pub fn exists(
    package: &str,
    spack_repo: Option<&Path>,
    config: &GlobalConfig,
    cwd: &Path,
) -> miette::Result<bool> {
    let repo = resolve_spack_repo(spack_repo, config, cwd)?;
    let name = spack::spack_name(package);
    let found = repo.name_exists(&name);
    tracing::debug!(name = %name, root = %repo.root().display(), found, "recipe lookup");
    Ok(found)
}
