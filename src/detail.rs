//! The derived version together with the commit it describes.

use serde::{Serialize, Serializer};

use crate::domain::SemanticVersion;
use crate::error::{GitVersionError, Result};

/// Length of the abbreviated commit hash
pub const SHORT_SHA_LEN: usize = 7;

/// Which derivation rule produced the version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// A semver tag on HEAD
    Tag,
    /// The name of a release branch
    ReleaseBranch,
    /// Nothing matched; the default development version
    Default,
}

/// Raw material for a [`VersionDetail`]
#[derive(Debug, Clone, PartialEq)]
pub struct VersionDetailInput {
    pub semver: Option<SemanticVersion>,
    pub source: VersionSource,
    pub sha: String,
    pub branch_name: String,
}

/// A derived version plus the commit and branch it was derived from
#[derive(Debug, Clone, PartialEq)]
pub struct VersionDetail {
    pub semver: SemanticVersion,
    pub source: VersionSource,
    pub is_default: bool,
    pub sha: String,
    pub short_sha: String,
    pub branch_name: String,
}

impl VersionDetail {
    /// Build a detail from its input.
    ///
    /// # Errors
    /// * [`GitVersionError::MissingInput`] - no input given
    /// * [`GitVersionError::MissingSemver`] - input has no version
    pub fn new(input: Option<&VersionDetailInput>) -> Result<Self> {
        let input = input.ok_or(GitVersionError::MissingInput)?;
        let semver = input
            .semver
            .clone()
            .ok_or(GitVersionError::MissingSemver)?;

        Ok(VersionDetail {
            semver,
            source: input.source,
            is_default: input.source == VersionSource::Default,
            sha: input.sha.clone(),
            short_sha: short_sha(&input.sha),
            branch_name: input.branch_name.clone(),
        })
    }
}

/// First seven characters of `sha`, or empty when it is shorter than that
pub fn short_sha(sha: &str) -> String {
    sha.get(..SHORT_SHA_LEN).unwrap_or_default().to_string()
}

#[derive(Serialize)]
struct VersionDetailRecord<'a> {
    major: u64,
    minor: u64,
    patch: u64,
    core: String,
    #[serde(rename = "isDefault")]
    is_default: bool,
    #[serde(rename = "preRelease")]
    pre_release: &'a str,
    metadata: &'a str,
    semver: String,
    sha: &'a str,
    #[serde(rename = "shortSha")]
    short_sha: &'a str,
    #[serde(rename = "branchName")]
    branch_name: &'a str,
}

impl Serialize for VersionDetail {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        VersionDetailRecord {
            major: self.semver.major(),
            minor: self.semver.minor(),
            patch: self.semver.patch(),
            core: self.semver.core(),
            is_default: self.is_default,
            pre_release: self.semver.prerelease(),
            metadata: self.semver.metadata(),
            semver: self.semver.to_string(),
            sha: &self.sha,
            short_sha: &self.short_sha,
            branch_name: &self.branch_name,
        }
        .serialize(serializer)
    }
}
