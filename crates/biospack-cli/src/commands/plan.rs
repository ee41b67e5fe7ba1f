use miette::Result;

use biospack_ops::ops_plan::{self, PlanOptions};

pub fn exec(package: &str, git_url: Option<String>, json: bool) -> Result<()> {
    let config = super::load_config()?;
    ops_plan::plan(package, &config, &PlanOptions { git_url, json })
}
