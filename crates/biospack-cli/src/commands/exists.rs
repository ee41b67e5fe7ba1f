use std::path::Path;

use console::Style;
use miette::Result;

use biospack_core::spack;
use biospack_ops::ops_exists;

pub fn exec(package: &str, spack_repo: Option<&Path>) -> Result<()> {
    let config = super::load_config()?;
    let cwd = super::current_dir()?;
    let name = spack::spack_name(package);

    if ops_exists::exists(package, spack_repo, &config, &cwd)? {
        println!("{name}: {}", Style::new().yellow().apply_to("already present"));
    } else {
        println!("{name}: {}", Style::new().green().apply_to("not present"));
    }
    Ok(())
}
