use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use biospack_util::errors::BiospackError;

use crate::release::{self, Release};

/// Default remote hosting Bioconductor package repositories.
pub const DEFAULT_GIT_BASE_URL: &str = "https://git.bioconductor.org/packages";

/// Global user configuration loaded from `~/.biospack/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Root of the Spack package repository recipes are written into.
    #[serde(default, rename = "spack-repo")]
    pub spack_repo: Option<PathBuf>,

    #[serde(default = "default_git_base_url", rename = "git-base-url")]
    pub git_base_url: String,

    /// Release branches to inspect, newest first.
    #[serde(default = "release::default_catalog")]
    pub releases: Vec<Release>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            spack_repo: None,
            git_base_url: default_git_base_url(),
            releases: release::default_catalog(),
        }
    }
}

fn default_git_base_url() -> String {
    DEFAULT_GIT_BASE_URL.to_string()
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> Result<Self, BiospackError> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, or defaults if it is absent.
    pub fn load_from(path: &Path) -> Result<Self, BiospackError> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| BiospackError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content).map_err(|e| match e {
            BiospackError::Config { message } => BiospackError::Config {
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })
    }

    /// Parse configuration text and validate it.
    pub fn parse_toml(content: &str) -> Result<Self, BiospackError> {
        let config: Self = toml::from_str(content).map_err(|e| BiospackError::Config {
            message: format!("Failed to parse config: {e}"),
        })?;
        if config.releases.is_empty() {
            return Err(BiospackError::Config {
                message: "release list is empty".to_string(),
            });
        }
        Ok(config)
    }

    /// Remote URL of the git repository for `package`.
    pub fn git_url(&self, package: &str) -> String {
        format!("{}/{package}", self.git_base_url.trim_end_matches('/'))
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the biospack data directory.
///
/// `BIOSPACK_HOME` wins; otherwise `~/.biospack/`.
pub fn dirs_path() -> PathBuf {
    if let Ok(home) = std::env::var("BIOSPACK_HOME") {
        return PathBuf::from(home);
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".biospack")
}
