use serde::{Deserialize, Serialize};

/// One Bioconductor release branch and the minimum R version it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub tag: String,
    #[serde(rename = "r")]
    pub r_constraint: String,
}

impl Release {
    pub fn new(tag: impl Into<String>, r_constraint: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            r_constraint: r_constraint.into(),
        }
    }
}

/// Built-in release list, newest first.
pub fn default_catalog() -> Vec<Release> {
    [
        ("RELEASE_3_18", "4.3.0"),
        ("RELEASE_3_17", "4.3.0"),
        ("RELEASE_3_16", "4.2.0"),
        ("RELEASE_3_15", "4.2.0"),
        ("RELEASE_3_14", "4.1.0"),
        ("RELEASE_3_13", "4.1.0"),
        ("RELEASE_3_12", "4.0.0"),
        ("RELEASE_3_11", "4.0.0"),
        ("RELEASE_3_10", "3.6.0"),
        ("RELEASE_3_9", "3.6.0"),
        ("RELEASE_3_8", "3.5.0"),
        ("RELEASE_3_7", "3.5.0"),
        ("RELEASE_3_6", "3.4.0"),
        ("RELEASE_3_5", "3.4.0"),
    ]
    .into_iter()
    .map(|(tag, r)| Release::new(tag, r))
    .collect()
}
