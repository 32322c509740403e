pub mod build_info;
pub mod cli;
pub mod config;
pub mod derive;
pub mod detail;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use derive::{derive, derive_version, DerivePolicy, RepositorySnapshot};
pub use detail::{VersionDetail, VersionDetailInput, VersionSource};
pub use domain::SemanticVersion;
pub use error::{GitVersionError, Result};
