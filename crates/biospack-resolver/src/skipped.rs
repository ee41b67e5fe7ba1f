//! Releases left out of the history and why.

use std::fmt;

use serde::Serialize;

/// A report of every release that contributed no snapshot.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct SkipReport {
    pub releases: Vec<SkippedRelease>,
}

/// A single release that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRelease {
    pub tag: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "kebab-case")]
pub enum SkipReason {
    /// Checkout or manifest extraction failed.
    Unavailable(String),
    /// A newer release already provided this version.
    DuplicateVersion(String),
}

impl SkipReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tag: impl Into<String>, reason: SkipReason) {
        self.releases.push(SkippedRelease {
            tag: tag.into(),
            reason,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Releases skipped because they could not be read.
    pub fn unavailable(&self) -> impl Iterator<Item = &SkippedRelease> {
        self.releases
            .iter()
            .filter(|r| matches!(r.reason, SkipReason::Unavailable(_)))
    }
}

impl fmt::Display for SkipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.releases.is_empty() {
            return write!(f, "No skipped releases.");
        }
        writeln!(f, "Skipped releases ({}):", self.releases.len())?;
        for release in &self.releases {
            writeln!(f, "  {release}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SkippedRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::Unavailable(message) => write!(f, "{}: {message}", self.tag),
            SkipReason::DuplicateVersion(version) => {
                write!(f, "{}: version {version} already seen", self.tag)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report() {
        let report = SkipReport::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "No skipped releases.");
    }

    #[test]
    fn report_with_skips() {
        let mut report = SkipReport::new();
        report.add(
            "RELEASE_3_5",
            SkipReason::Unavailable("pathspec 'RELEASE_3_5' did not match".to_string()),
        );
        report.add("RELEASE_3_6", SkipReason::DuplicateVersion("1.0.0".to_string()));
        assert_eq!(report.len(), 2);
        assert_eq!(report.unavailable().count(), 1);
        let s = report.to_string();
        assert!(s.contains("Skipped releases (2):"));
        assert!(s.contains("RELEASE_3_5: pathspec"));
        assert!(s.contains("RELEASE_3_6: version 1.0.0 already seen"));
    }
}
