use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all biospack operations.
#[derive(Debug, Error, Diagnostic)]
pub enum BiospackError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A version string contains a segment that is not a non-negative integer.
    #[error("Malformed version '{version}': segment '{segment}' is not numeric")]
    #[diagnostic(help("Versions must be dot- or dash-separated integers, e.g. 1.2.3"))]
    MalformedVersion { version: String, segment: String },

    /// The release's DESCRIPTION file is missing or could not be read.
    #[error("Cannot read manifest {path}: {message}")]
    ManifestUnreadable { path: String, message: String },

    /// The DESCRIPTION file has no `Version` field.
    #[error("Manifest {path} has no Version field")]
    MissingVersion { path: String },

    /// Checking out a release tag failed.
    #[error("Failed to check out '{tag}': {message}")]
    Checkout { tag: String, message: String },

    /// No release yielded a title and description.
    #[error("No release of '{package}' provided a Title and Description")]
    #[diagnostic(help("Check that the package name and git URL are correct"))]
    NoPackageMetadata { package: String },

    /// A git command other than checkout failed.
    #[error("Git error: {message}")]
    Git { message: String },

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check ~/.biospack/config.toml for syntax errors"))]
    Config { message: String },

    /// Rendering or writing the recipe failed.
    #[error("Recipe error: {message}")]
    Recipe { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl BiospackError {
    /// Whether the error only invalidates the current release.
    ///
    /// History assembly skips a release on recoverable errors and aborts the
    /// run on everything else.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ManifestUnreadable { .. } | Self::MissingVersion { .. } | Self::Checkout { .. }
        )
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type BiospackResult<T> = miette::Result<T>;
