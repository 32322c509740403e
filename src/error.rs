use thiserror::Error;

/// Unified error type for gitversion operations
#[derive(Error, Debug)]
pub enum GitVersionError {
    #[error("missing input detail")]
    MissingInput,

    #[error("missing semver detail")]
    MissingSemver,

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository inspection failed: {0}")]
    Inspect(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gitversion
pub type Result<T> = std::result::Result<T, GitVersionError>;

impl GitVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitVersionError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitVersionError::Version(msg.into())
    }

    /// Create an inspection error with context
    pub fn inspect(msg: impl Into<String>) -> Self {
        GitVersionError::Inspect(msg.into())
    }
}
