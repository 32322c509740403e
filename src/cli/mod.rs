//! Command-line surface: argument definitions and command dispatch.

pub mod orchestration;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use crate::build_info::ToolVersion;
use orchestration::{run_derive_workflow, DeriveWorkflowArgs};

#[derive(Debug, Parser)]
#[command(
    name = "gitversion",
    version,
    about = "Derive a semantic version from the current git commit or branch"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Derives a semantic version (SemVer) from Git.
    ///
    /// Uses the first semver tag on the current commit, then a `release/` or
    /// `release-` branch name. Otherwise defaults to 0.1.0 flagged as
    /// 'isDefault', with a 'dev' pre-release unless on 'main' or 'master'.
    Derive(DeriveArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct DeriveArgs {
    #[arg(long, help = "Format the output in pretty print JSON")]
    pub pretty: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(short, long, help = "Path inside the repository to inspect (default: current directory)")]
    pub repo: Option<String>,
}

impl From<DeriveArgs> for DeriveWorkflowArgs {
    fn from(args: DeriveArgs) -> Self {
        DeriveWorkflowArgs {
            config_path: args.config,
            repo_path: args.repo,
            pretty: args.pretty,
        }
    }
}

/// Parse process arguments, reporting `tool_version` for `--version`.
///
/// Exits the process on usage errors, like `Parser::parse`.
pub fn parse_with_version(tool_version: &ToolVersion) -> Cli {
    let matches = Cli::command()
        .version(tool_version.to_string())
        .get_matches();

    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

impl Cli {
    /// Run the selected command, writing its output to stdout
    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Derive(args) => {
                run_derive_workflow(&args.into(), &mut out)?;
            }
        }
        Ok(())
    }
}
