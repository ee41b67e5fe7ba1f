//! Operation: read a package's release history and reconcile it into a plan.

use biospack_core::config::GlobalConfig;
use biospack_resolver::history;
use biospack_resolver::plan::RecipePlan;
use biospack_util::errors::BiospackError;
use biospack_util::git::GitRepo;
use biospack_util::progress::{release_bar, spinner, status, status_warn};

/// Options for `biospack plan`.
#[derive(Default)]
pub struct PlanOptions {
    /// Clone from this URL instead of the configured Bioconductor mirror.
    pub git_url: Option<String>,
    /// Print the plan as JSON instead of recipe-style lines.
    pub json: bool,
}

/// Clone `package`, visit every configured release and reconcile the result.
///
/// The clone lives in a temporary directory that is removed on return.
pub fn build_plan(
    package: &str,
    config: &GlobalConfig,
    git_url: Option<&str>,
) -> miette::Result<RecipePlan> {
    let url = git_url
        .map(str::to_string)
        .unwrap_or_else(|| config.git_url(package));

    let checkout_dir = tempfile::Builder::new()
        .prefix("biospack-")
        .tempdir()
        .map_err(BiospackError::Io)?;
    let dest = checkout_dir.path().join(package);

    let sp = spinner(&format!("Cloning {url}..."));
    let cloned = GitRepo::clone_from(&url, &dest);
    sp.finish_and_clear();
    let mut repo = cloned?;
    status("Cloned", &url);

    let bar = release_bar(config.releases.len() as u64);
    let assembled = history::assemble_with(package, &mut repo, &config.releases, |release| {
        bar.set_message(release.tag.clone());
        bar.inc(1);
    });
    bar.finish_and_clear();
    let history = assembled?;

    for skipped in history.skipped().unavailable() {
        status_warn("Skipped", &skipped.to_string());
    }
    tracing::info!(
        package,
        retained = history.len(),
        skipped = history.skipped().len(),
        "release history assembled"
    );

    Ok(RecipePlan::build(package, &history)?)
}

/// Build the plan for `package` and print it to stdout.
pub fn plan(package: &str, config: &GlobalConfig, opts: &PlanOptions) -> miette::Result<()> {
    let plan = build_plan(package, config, opts.git_url.as_deref())?;

    if opts.json {
        let json = serde_json::to_string_pretty(&plan).map_err(|e| BiospackError::Generic {
            message: format!("Failed to serialize plan: {e}"),
        })?;
        println!("{json}");
    } else {
        print!("{}", summarize(&plan));
    }
    Ok(())
}

/// Human-readable plan: versions, then dependency lines.
pub fn summarize(plan: &RecipePlan) -> String {
    let mut out = format!("{}: {}\n", plan.package, plan.title);
    out.push_str("\nVersions:\n");
    for v in &plan.versions {
        out.push_str(&format!("  {:<12} {} ({})\n", v.version, v.commit, v.release_tag));
    }
    out.push_str("\nDependencies:\n");
    for emission in plan.runtime.iter().chain(&plan.dependencies) {
        out.push_str(&format!("  {}\n", crate::recipe::depends_on(emission)));
    }
    if !plan.skipped.is_empty() {
        out.push('\n');
        out.push_str(&plan.skipped.to_string());
    }
    out
}
