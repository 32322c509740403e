//! Repository inspection layer
//!
//! This module provides a trait-based abstraction over the few git queries
//! gitversion needs, allowing derivation to run against a real repository
//! or against an in-memory mock in tests.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use gitversion::git::{MockRepository, Repository};
//! # fn main() -> gitversion::Result<()> {
//! let repo = MockRepository::new()
//!     .with_sha("0b85e68c13650b5ba793c681defe1dc12f03fb50")
//!     .with_branch("develop")
//!     .with_tag("1.2.3");
//! let snapshot = repo.snapshot()?;
//! let detail = gitversion::derive(Some(&snapshot))?;
//! assert_eq!(detail.semver.to_string(), "1.2.3");
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::derive::RepositorySnapshot;
use crate::error::Result;

/// Read-only view of the commit currently checked out
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::GitVersionError] variants.
pub trait Repository {
    /// Full hash of the HEAD commit
    ///
    /// # Returns
    /// * `Ok(String)` - 40 hex characters for SHA-1 repositories
    /// * `Err` - If HEAD does not point at a commit yet
    fn head_sha(&self) -> Result<String>;

    /// Short name of the checked-out branch
    ///
    /// # Returns
    /// * `Ok(String)` - Branch name such as "release/1.2.3", or an empty
    ///   string when HEAD is detached
    /// * `Err` - If HEAD cannot be read
    fn current_branch(&self) -> Result<String>;

    /// Names of all tags whose target peels to the HEAD commit
    ///
    /// Both lightweight and annotated tags are reported, in the order git
    /// decorates the commit with them. Callers preserve that order.
    fn head_tags(&self) -> Result<Vec<String>>;

    /// Gather everything derivation needs in one snapshot
    fn snapshot(&self) -> Result<RepositorySnapshot> {
        Ok(RepositorySnapshot {
            sha: self.head_sha()?,
            branch_name: self.current_branch()?,
            tags: self.head_tags()?,
        })
    }
}
