//! The tool's own version, as reported by `gitversion --version`.
//!
//! Built once at process start and handed to the CLI; release builds can set
//! `GITVERSION_PRERELEASE` and `GITVERSION_METADATA` at compile time.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersion {
    pub core: String,
    pub prerelease: Option<String>,
    pub metadata: Option<String>,
}

impl ToolVersion {
    /// Empty labels are treated as absent.
    pub fn new(core: impl Into<String>, prerelease: Option<&str>, metadata: Option<&str>) -> Self {
        let label = |value: Option<&str>| value.filter(|s| !s.is_empty()).map(str::to_string);

        ToolVersion {
            core: core.into(),
            prerelease: label(prerelease),
            metadata: label(metadata),
        }
    }

    /// Version of this binary from Cargo metadata and optional build-time labels
    pub fn from_build_env() -> Self {
        Self::new(
            env!("CARGO_PKG_VERSION"),
            option_env!("GITVERSION_PRERELEASE"),
            option_env!("GITVERSION_METADATA"),
        )
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.core)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(meta) = &self.metadata {
            write!(f, "+{}", meta)?;
        }
        Ok(())
    }
}
