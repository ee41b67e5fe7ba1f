use std::path::PathBuf;

use miette::Result;

use biospack_ops::ops_create::{self, CreateOptions, CreateResult};

pub fn exec(
    package: &str,
    spack_repo: Option<PathBuf>,
    git_url: Option<String>,
    force: bool,
    dry_run: bool,
) -> Result<()> {
    let config = super::load_config()?;
    let cwd = super::current_dir()?;
    let opts = CreateOptions {
        spack_repo,
        git_url,
        force,
        dry_run,
    };
    match ops_create::create(package, &config, &cwd, &opts)? {
        CreateResult::Written(path) => tracing::debug!(path = %path.display(), "recipe written"),
        CreateResult::Printed => {}
    }
    Ok(())
}
