//! Derive workflow orchestration
//!
//! Ties the repository inspector, the deriver and the presenter together.
//! Kept apart from the clap definitions so the workflow can be driven
//! programmatically.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{load_config, Config};
use crate::derive::{derive_version, DerivePolicy, RepositorySnapshot};
use crate::detail::VersionDetail;
use crate::domain::BranchContext;
use crate::git::{Git2Repository, Repository};
use crate::ui;

/// Arguments for the derive workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeriveWorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Directory inside the repository to inspect
    pub repo_path: Option<String>,

    /// Indent the JSON output
    pub pretty: bool,
}

/// Main derive workflow
///
/// 1. Load configuration and build the derivation policy
/// 2. Open the repository
/// 3. Inspect HEAD and derive the version
/// 4. Write the JSON output to `out`
pub fn run_derive_workflow<W: Write>(
    args: &DeriveWorkflowArgs,
    out: &mut W,
) -> Result<VersionDetail> {
    let config =
        load_config(args.config_path.as_deref()).context("unable to load configuration")?;
    let policy = policy_from(&config)?;

    let repo_path = args.repo_path.as_deref().unwrap_or(".");
    let repo = Git2Repository::open(repo_path).context("unable to open the git repository")?;

    let detail = derive_from_repository(&repo, &policy)?;

    ui::write_detail(out, &detail, args.pretty).context("unable to output version detail")?;

    Ok(detail)
}

fn policy_from(config: &Config) -> Result<DerivePolicy> {
    config
        .derive_policy()
        .context("invalid derive configuration")
}

/// Inspect `repo` and derive its version under `policy`
pub fn derive_from_repository<R: Repository>(
    repo: &R,
    policy: &DerivePolicy,
) -> Result<VersionDetail> {
    let branch_name = repo
        .current_branch()
        .context("unable to retrieve the current branch name")?;
    let sha = repo
        .head_sha()
        .context("unable to retrieve the current commit SHA")?;
    let tags = repo
        .head_tags()
        .context("unable to retrieve the current commit tags")?;

    debug!(%sha, branch = %branch_name, ?tags, "inspected repository");
    let branch = BranchContext::with_mainline(branch_name.as_str(), &policy.mainline_branches);
    if branch.is_detached() {
        debug!("HEAD is detached; release branch rule cannot apply");
    }

    let snapshot = RepositorySnapshot {
        sha,
        branch_name,
        tags,
    };
    let detail =
        derive_version(Some(&snapshot), policy).context("unable to create version detail")?;

    info!(
        version = %detail.semver,
        source = ?detail.source,
        is_default = detail.is_default,
        "derived version"
    );

    Ok(detail)
}
