use crate::error::{GitVersionError, Result};
use semver::{BuildMetadata, Prerelease};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation (semver 2.0.0)
///
/// Ordering and equality ignore build metadata, so `1.0.0+a == 1.0.0+b`.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Prerelease,
    build: BuildMetadata,
}

impl SemanticVersion {
    /// Create a release version without pre-release or metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre: Prerelease::EMPTY,
            build: BuildMetadata::EMPTY,
        }
    }

    /// Parse the canonical `MAJOR.MINOR.PATCH[-PRERELEASE][+METADATA]` grammar.
    ///
    /// Leading zeros in numeric components are rejected, as is any prefix.
    pub fn parse(input: &str) -> Result<Self> {
        let parsed = semver::Version::parse(input).map_err(|e| {
            GitVersionError::version(format!("Invalid semantic version '{}': {}", input, e))
        })?;

        Ok(SemanticVersion {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            pre: parsed.pre,
            build: parsed.build,
        })
    }

    /// Parse a version that may carry a single leading `v` or `V` (e.g. "v1.2.3").
    ///
    /// The prefix is not part of the canonical form.
    pub fn parse_lenient(input: &str) -> Result<Self> {
        let trimmed = input
            .strip_prefix('v')
            .or_else(|| input.strip_prefix('V'))
            .unwrap_or(input);
        Self::parse(trimmed)
    }

    /// Validate a dot-separated pre-release label such as "dev" or "rc.1"
    pub fn prerelease_label(label: &str) -> Result<Prerelease> {
        Prerelease::new(label).map_err(|e| {
            GitVersionError::version(format!("Invalid pre-release label '{}': {}", label, e))
        })
    }

    /// Replace the pre-release label. Only used when synthesizing a default version.
    pub fn set_prerelease(&mut self, pre: Prerelease) {
        self.pre = pre;
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release label, empty if none
    pub fn prerelease(&self) -> &str {
        self.pre.as_str()
    }

    /// Build metadata, empty if none
    pub fn metadata(&self) -> &str {
        self.build.as_str()
    }

    /// The `MAJOR.MINOR.PATCH` part only
    pub fn core(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = GitVersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Prerelease orders an empty label above any non-empty one.
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| self.pre.cmp(&other.pre))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}
