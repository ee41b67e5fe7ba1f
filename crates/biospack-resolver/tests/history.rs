use std::collections::HashMap;

use biospack_core::release::Release;
use biospack_core::snapshot::SourceTree;
use biospack_resolver::history::{assemble, assemble_with};
use biospack_resolver::reconcile::{reconcile, Emission};
use biospack_resolver::skipped::SkipReason;
use biospack_util::errors::BiospackError;

/// In-memory working tree: tag -> (DESCRIPTION, commit). Tags missing from
/// the map fail to check out.
#[derive(Default)]
struct MemoryTree {
    tags: HashMap<String, (String, String)>,
    head: Option<String>,
    checkouts: Vec<String>,
}

impl MemoryTree {
    fn with(mut self, tag: &str, manifest: &str) -> Self {
        let commit = format!("{:0>40}", tag.len() * 7 + self.tags.len());
        self.tags
            .insert(tag.to_string(), (manifest.to_string(), commit));
        self
    }
}

impl SourceTree for MemoryTree {
    fn checkout(&mut self, tag: &str) -> Result<(), BiospackError> {
        self.checkouts.push(tag.to_string());
        if self.tags.contains_key(tag) {
            self.head = Some(tag.to_string());
            Ok(())
        } else {
            Err(BiospackError::Checkout {
                tag: tag.to_string(),
                message: format!("pathspec '{tag}' did not match"),
            })
        }
    }

    fn current_commit(&self) -> Result<String, BiospackError> {
        let head = self.head.as_ref().expect("checked out");
        Ok(self.tags[head].1.clone())
    }

    fn read_manifest(&self) -> Result<String, BiospackError> {
        let head = self.head.as_ref().expect("checked out");
        Ok(self.tags[head].0.clone())
    }
}

fn manifest(version: &str, title: &str, imports: &str) -> String {
    let mut text = format!("Package: foo\nVersion: {version}\n");
    if !title.is_empty() {
        text.push_str(&format!("Title: {title}\nDescription: About {title}.\n"));
    }
    if !imports.is_empty() {
        text.push_str(&format!("Imports: {imports}\n"));
    }
    text
}

fn releases(tags: &[&str]) -> Vec<Release> {
    tags.iter().map(|t| Release::new(*t, "3.5.0")).collect()
}

fn emission(version: &str, name: &str, min: Option<&str>) -> Emission {
    Emission {
        version: version.to_string(),
        name: name.to_string(),
        min_version: min.map(str::to_string),
    }
}

#[test]
fn three_release_scenario_emits_two_lines() {
    let mut tree = MemoryTree::default()
        .with("RELEASE_3", &manifest("1.2.0", "Foo", "foo (>= 2.0)"))
        .with("RELEASE_2", &manifest("1.1.0", "Foo", "foo (>= 1.0)"))
        .with("RELEASE_1", &manifest("1.0.0", "Foo", "foo (>= 1.0)"));

    let history = assemble(
        "foo",
        &mut tree,
        &releases(&["RELEASE_3", "RELEASE_2", "RELEASE_1"]),
    )
    .unwrap();

    assert_eq!(
        history.versions().collect::<Vec<_>>(),
        ["1.2.0", "1.1.0", "1.0.0"]
    );
    assert_eq!(
        reconcile(&history).unwrap(),
        vec![
            emission("1.0.0", "foo", Some("1.0")),
            emission("1.2.0", "foo", Some("2.0")),
        ]
    );
}

#[test]
fn duplicate_version_keeps_newest_release() {
    let mut tree = MemoryTree::default()
        .with("RELEASE_3_8", &manifest("1.0.0", "Newer", "bar (>= 2.0)"))
        .with("RELEASE_3_7", &manifest("1.0.0", "Older", "bar (>= 1.0)"));

    let history = assemble(
        "foo",
        &mut tree,
        &releases(&["RELEASE_3_8", "RELEASE_3_7"]),
    )
    .unwrap();

    assert_eq!(history.len(), 1);
    let snap = history.get("1.0.0").unwrap();
    assert_eq!(snap.release_tag, "RELEASE_3_8");
    assert_eq!(snap.deps.get("bar").unwrap().min_version(), Some("2.0"));
    assert_eq!(history.title(), Some("Newer"));
    assert_eq!(
        history.skipped().releases[0].reason,
        SkipReason::DuplicateVersion("1.0.0".to_string())
    );
}

#[test]
fn failed_checkout_is_skipped_without_side_effects() {
    let mut tree = MemoryTree::default()
        .with("RELEASE_3", &manifest("1.2.0", "Foo", "foo (>= 2.0)"))
        .with("RELEASE_1", &manifest("1.0.0", "Foo", "foo (>= 1.0)"));

    let history = assemble(
        "foo",
        &mut tree,
        &releases(&["RELEASE_3", "RELEASE_2", "RELEASE_1"]),
    )
    .unwrap();

    assert_eq!(history.versions().collect::<Vec<_>>(), ["1.2.0", "1.0.0"]);
    assert_eq!(history.title(), Some("Foo"));
    assert_eq!(history.skipped().unavailable().count(), 1);
    assert_eq!(history.skipped().releases[0].tag, "RELEASE_2");
    assert_eq!(
        reconcile(&history).unwrap(),
        vec![
            emission("1.0.0", "foo", Some("1.0")),
            emission("1.2.0", "foo", Some("2.0")),
        ]
    );
    assert_eq!(tree.checkouts, ["RELEASE_3", "RELEASE_2", "RELEASE_1"]);
}

#[test]
fn missing_version_is_skipped() {
    let mut tree = MemoryTree::default()
        .with("RELEASE_2", "Package: foo\nTitle: Foo\n")
        .with("RELEASE_1", &manifest("1.0.0", "Foo", ""));

    let history = assemble("foo", &mut tree, &releases(&["RELEASE_2", "RELEASE_1"])).unwrap();
    assert_eq!(history.len(), 1);
    assert!(history.contains("1.0.0"));
}

#[test]
fn title_comes_from_newest_release_that_has_one() {
    let mut tree = MemoryTree::default()
        .with("RELEASE_3", &manifest("1.2.0", "", ""))
        .with("RELEASE_2", &manifest("1.1.0", "Middle", ""))
        .with("RELEASE_1", &manifest("1.0.0", "Oldest", ""));

    let history = assemble(
        "foo",
        &mut tree,
        &releases(&["RELEASE_3", "RELEASE_2", "RELEASE_1"]),
    )
    .unwrap();
    assert_eq!(history.title(), Some("Middle"));
    assert_eq!(history.description(), Some("About Middle."));
}

#[test]
fn all_checkouts_failing_is_no_package_metadata() {
    let mut tree = MemoryTree::default();
    let err = assemble("foo", &mut tree, &releases(&["RELEASE_2", "RELEASE_1"])).unwrap_err();
    assert!(matches!(err, BiospackError::NoPackageMetadata { ref package } if package == "foo"));
}

#[test]
fn no_title_anywhere_is_no_package_metadata() {
    let mut tree = MemoryTree::default().with("RELEASE_1", &manifest("1.0.0", "", "bar"));
    let err = assemble("foo", &mut tree, &releases(&["RELEASE_1"])).unwrap_err();
    assert!(matches!(err, BiospackError::NoPackageMetadata { .. }));
}

#[test]
fn malformed_dependency_version_aborts_the_run() {
    let mut tree = MemoryTree::default()
        .with("RELEASE_2", &manifest("1.1.0", "Foo", "bar (>= 1.x)"))
        .with("RELEASE_1", &manifest("1.0.0", "Foo", ""));

    let err = assemble("foo", &mut tree, &releases(&["RELEASE_2", "RELEASE_1"])).unwrap_err();
    assert!(matches!(err, BiospackError::MalformedVersion { .. }));
    assert_eq!(tree.checkouts, ["RELEASE_2"]);
}

#[test]
fn callback_sees_every_release_in_order() {
    let mut tree = MemoryTree::default().with("RELEASE_1", &manifest("1.0.0", "Foo", ""));
    let mut seen = Vec::new();
    assemble_with(
        "foo",
        &mut tree,
        &releases(&["RELEASE_2", "RELEASE_1"]),
        |release| seen.push(release.tag.clone()),
    )
    .unwrap();
    assert_eq!(seen, ["RELEASE_2", "RELEASE_1"]);
}

#[test]
fn base_packages_never_reach_the_history() {
    let mut tree = MemoryTree::default().with(
        "RELEASE_1",
        &manifest("1.0.0", "Foo", "methods, stats, utils (>= 3.0), limma"),
    );
    let history = assemble("foo", &mut tree, &releases(&["RELEASE_1"])).unwrap();
    let deps = &history.snapshots()[0].deps;
    assert_eq!(deps.len(), 1);
    assert!(deps.contains("limma"));
}
