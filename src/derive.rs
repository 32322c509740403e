//! Version derivation - tags on HEAD, then release branch, then default.
//!
//! Everything here is pure: the same [`RepositorySnapshot`] and
//! [`DerivePolicy`] always produce the same [`VersionDetail`].

use semver::Prerelease;

use crate::detail::{VersionDetail, VersionDetailInput, VersionSource};
use crate::domain::branch::{DEFAULT_MAINLINE_BRANCHES, DEFAULT_RELEASE_PREFIXES};
use crate::domain::{BranchContext, SemanticVersion, Tag};
use crate::error::{GitVersionError, Result};

/// What the repository looks like at HEAD
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepositorySnapshot {
    /// Full commit hash of HEAD
    pub sha: String,
    /// Current branch, empty when detached
    pub branch_name: String,
    /// Tags pointing at HEAD, in the order the repository reported them
    pub tags: Vec<String>,
}

impl RepositorySnapshot {
    pub fn new(sha: impl Into<String>, branch_name: impl Into<String>, tags: Vec<String>) -> Self {
        RepositorySnapshot {
            sha: sha.into(),
            branch_name: branch_name.into(),
            tags,
        }
    }
}

/// Parameters of the derivation rules
#[derive(Debug, Clone, PartialEq)]
pub struct DerivePolicy {
    pub default_version: SemanticVersion,
    pub dev_prerelease: Prerelease,
    pub mainline_branches: Vec<String>,
    pub release_prefixes: Vec<String>,
    pub allow_v_prefix: bool,
}

impl Default for DerivePolicy {
    fn default() -> Self {
        DerivePolicy {
            default_version: SemanticVersion::new(0, 1, 0),
            dev_prerelease: Prerelease::new("dev").unwrap_or(Prerelease::EMPTY),
            mainline_branches: DEFAULT_MAINLINE_BRANCHES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            release_prefixes: DEFAULT_RELEASE_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            allow_v_prefix: true,
        }
    }
}

/// Derive a version with the default policy
pub fn derive(snapshot: Option<&RepositorySnapshot>) -> Result<VersionDetail> {
    derive_version(snapshot, &DerivePolicy::default())
}

/// Derive a version for `snapshot`.
///
/// Fails only with [`GitVersionError::MissingInput`] when no snapshot is
/// given. Unparseable tags and non-release branches are not errors.
pub fn derive_version(
    snapshot: Option<&RepositorySnapshot>,
    policy: &DerivePolicy,
) -> Result<VersionDetail> {
    let snapshot = snapshot.ok_or(GitVersionError::MissingInput)?;
    let (semver, source) = select_version(snapshot, policy);

    VersionDetail::new(Some(&VersionDetailInput {
        semver: Some(semver),
        source,
        sha: snapshot.sha.clone(),
        branch_name: snapshot.branch_name.clone(),
    }))
}

/// Apply the precedence rules; the first rule with a result wins.
pub fn select_version(
    snapshot: &RepositorySnapshot,
    policy: &DerivePolicy,
) -> (SemanticVersion, VersionSource) {
    for name in &snapshot.tags {
        let version = match Tag::new(name.as_str()).version(policy.allow_v_prefix) {
            Some(version) => version,
            None => continue,
        };
        return (version, VersionSource::Tag);
    }

    let branch = BranchContext::with_mainline(
        snapshot.branch_name.as_str(),
        &policy.mainline_branches,
    );

    if let Some(version) = branch.release_version(&policy.release_prefixes, policy.allow_v_prefix)
    {
        return (version, VersionSource::ReleaseBranch);
    }

    let mut version = policy.default_version.clone();
    if !branch.is_main {
        version.set_prerelease(policy.dev_prerelease.clone());
    }
    (version, VersionSource::Default)
}
