//! Operation: list the release catalog.

use biospack_core::config::GlobalConfig;

/// One line per release, newest first: tag and minimum R version.
pub fn list_releases(config: &GlobalConfig) -> Vec<String> {
    config
        .releases
        .iter()
        .map(|r| format!("{:<14} R >= {}", r.tag, r.r_constraint))
        .collect()
}
