//! Dependency constraints parsed from DESCRIPTION dependency fields.
//!
//! An entry looks like `limma (>= 3.40.0)` or just `methods`. Only the
//! `>=` lower bound is understood; any other clause leaves the entry
//! unbounded.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use biospack_util::errors::BiospackError;

use crate::version::{self, VersionKey};

/// Packages shipped with R itself. They are provided by the runtime and
/// never become explicit dependencies.
pub const BASE_PACKAGES: &[&str] = &[
    "R",
    "base",
    "compiler",
    "datasets",
    "grDevices",
    "graphics",
    "grid",
    "methods",
    "parallel",
    "splines",
    "stats",
    "stats4",
    "tcltk",
    "tools",
    "utils",
];

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.\-]+").expect("Invalid package name regex"));

static MIN_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*>=\s*([^()\s]+)\s*\)\s*$").expect("Invalid minimum version regex")
});

/// A dependency name with an optional minimum version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub name: String,
    pub min_version: Option<String>,
}

impl Constraint {
    pub fn new(name: impl Into<String>, min_version: Option<&str>) -> Self {
        Self {
            name: name.into(),
            min_version: min_version.map(str::to_string),
        }
    }

    /// Parse one dependency entry.
    ///
    /// Returns `None` when the entry has no leading package identifier;
    /// such entries are dropped rather than reported.
    pub fn parse(raw: &str) -> Option<Self> {
        let entry = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        let name = NAME_REGEX.find(&entry)?.as_str();
        let min_version = MIN_VERSION_REGEX
            .captures(&entry[name.len()..])
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        Some(Self::new(name, min_version))
    }

    /// True iff the constraint names a member of `exclusions`.
    pub fn is_excluded(&self, exclusions: &[&str]) -> bool {
        exclusions.contains(&self.name.as_str())
    }

    pub fn min_version(&self) -> Option<&str> {
        self.min_version.as_deref()
    }
}

/// Parse a comma-separated dependency field into constraints, in field order.
pub fn parse_list(field: &str) -> Vec<Constraint> {
    field.split(',').filter_map(Constraint::parse).collect()
}

/// The strongest constraint per dependency name within one release.
///
/// Base packages are never stored, and every stored minimum version is a
/// well-formed [`VersionKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintTable {
    entries: BTreeMap<String, Constraint>,
}

impl ConstraintTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `constraints` into a table, keeping the newest minimum per name.
    pub fn from_constraints(
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Result<Self, BiospackError> {
        let mut table = Self::new();
        for constraint in constraints {
            table.insert(constraint)?;
        }
        Ok(table)
    }

    /// Merge one constraint into the table.
    ///
    /// Returns `false` when the constraint names a base package and was
    /// dropped. On a repeated name the stored constraint is replaced only by
    /// a strictly newer minimum.
    pub fn insert(&mut self, constraint: Constraint) -> Result<bool, BiospackError> {
        if constraint.is_excluded(BASE_PACKAGES) {
            return Ok(false);
        }
        VersionKey::parse(constraint.min_version())?;

        match self.entries.get_mut(&constraint.name) {
            Some(existing) => {
                let kept = version::newest(existing.min_version(), constraint.min_version())?
                    .map(str::to_string);
                existing.min_version = kept;
            }
            None => {
                self.entries.insert(constraint.name.clone(), constraint);
            }
        }
        Ok(true)
    }

    pub fn get(&self, name: &str) -> Option<&Constraint> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Constraints in byte order of their names.
    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.entries.values()
    }

    /// Constraints sorted by name case-insensitively, exact name breaking ties.
    pub fn sorted(&self) -> Vec<&Constraint> {
        let mut sorted: Vec<&Constraint> = self.entries.values().collect();
        sorted.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        sorted
    }
}
