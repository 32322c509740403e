use crate::error::{GitVersionError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    sha: String,
    branch: String,
    tags: Vec<String>,
    failure: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository (detached, no tags, empty hash)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HEAD commit hash
    pub fn with_sha(mut self, sha: impl Into<String>) -> Self {
        self.sha = sha.into();
        self
    }

    /// Set the checked-out branch
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Add a tag on HEAD; tags are reported in insertion order
    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(name.into());
        self
    }

    /// Make every query fail with an inspection error
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(GitVersionError::inspect(message.clone())),
            None => Ok(()),
        }
    }
}

impl Repository for MockRepository {
    fn head_sha(&self) -> Result<String> {
        self.check()?;
        Ok(self.sha.clone())
    }

    fn current_branch(&self) -> Result<String> {
        self.check()?;
        Ok(self.branch.clone())
    }

    fn head_tags(&self) -> Result<Vec<String>> {
        self.check()?;
        Ok(self.tags.clone())
    }
}
