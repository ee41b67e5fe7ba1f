use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn biospack_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("biospack").unwrap();
    cmd.env("BIOSPACK_HOME", home.path())
        .env_remove("BIOSPACK_SPACK_REPO");
    cmd
}

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "biospack")
        .env("GIT_AUTHOR_EMAIL", "biospack@example.com")
        .env("GIT_COMMITTER_NAME", "biospack")
        .env("GIT_COMMITTER_EMAIL", "biospack@example.com")
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

/// Upstream with two release branches and a config naming them.
fn fixture() -> (TempDir, TempDir) {
    let upstream = TempDir::new().unwrap();
    let dir = upstream.path();
    git(dir, &["init", "--quiet"]);
    for (branch, version, imports) in [
        ("RELEASE_3_6", "1.0.0", "Rcpp"),
        ("RELEASE_3_7", "1.1.0", "Rcpp (>= 1.0.5)"),
    ] {
        fs::write(
            dir.join("DESCRIPTION"),
            format!(
                "Package: Foo\nVersion: {version}\nTitle: Foo Tools.\n\
                 Description: Tools for foo.\nImports: {imports}\n"
            ),
        )
        .unwrap();
        git(dir, &["add", "DESCRIPTION"]);
        git(dir, &["commit", "--quiet", "-m", branch]);
        git(dir, &["branch", branch]);
    }

    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "[[releases]]\ntag = \"RELEASE_3_7\"\nr = \"3.5.0\"\n\n\
         [[releases]]\ntag = \"RELEASE_3_6\"\nr = \"3.4.0\"\n",
    )
    .unwrap();
    (upstream, home)
}

#[test]
fn test_create_dry_run_prints_recipe() {
    if !git_available() {
        return;
    }
    let (upstream, home) = fixture();

    biospack_cmd(&home)
        .args(["create", "Foo", "--dry-run", "--git-url"])
        .arg(upstream.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("class RFoo(RPackage):"))
        .stdout(predicate::str::contains("\"\"\"Foo Tools.\n"))
        .stdout(predicate::str::contains(
            r#"depends_on("r-rcpp", type=("build", "run"), when="@1.0.0:")"#,
        ))
        .stdout(predicate::str::contains(
            r#"depends_on("r-rcpp@1.0.5:", type=("build", "run"), when="@1.1.0:")"#,
        ));
}

#[test]
fn test_create_writes_then_refuses_overwrite() {
    if !git_available() {
        return;
    }
    let (upstream, home) = fixture();
    let spack = TempDir::new().unwrap();

    biospack_cmd(&home)
        .args(["create", "Foo", "--spack-repo"])
        .arg(spack.path())
        .arg("--git-url")
        .arg(upstream.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Created"));
    let recipe = spack.path().join("packages/r-foo/package.py");
    assert!(recipe.is_file());

    biospack_cmd(&home)
        .args(["create", "Foo", "--spack-repo"])
        .arg(spack.path())
        .arg("--git-url")
        .arg(upstream.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe error"));

    biospack_cmd(&home)
        .args(["create", "Foo", "--force", "--spack-repo"])
        .arg(spack.path())
        .arg("--git-url")
        .arg(upstream.path())
        .assert()
        .success();
}

#[test]
fn test_create_unreachable_upstream_fails() {
    let home = TempDir::new().unwrap();
    let spack = TempDir::new().unwrap();

    biospack_cmd(&home)
        .args(["create", "Foo", "--spack-repo"])
        .arg(spack.path())
        .arg("--git-url")
        .arg(home.path().join("missing"))
        .assert()
        .failure();
    assert!(!spack.path().join("packages").exists());
}

#[test]
fn test_plan_json() {
    if !git_available() {
        return;
    }
    let (upstream, home) = fixture();

    biospack_cmd(&home)
        .args(["plan", "Foo", "--json", "--git-url"])
        .arg(upstream.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"package\": \"Foo\""))
        .stdout(predicate::str::contains("\"min_version\": \"1.0.5\""));
}
