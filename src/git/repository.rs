use crate::error::{GitVersionError, Result};
use git2::{ErrorCode, Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository containing `path`, searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref()).map_err(|e| {
            GitVersionError::inspect(format!(
                "Not in a git repository ({}): {}",
                path.as_ref().display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    fn head_commit_id(&self) -> Result<Oid> {
        let head = self.repo.head().map_err(|e| match e.code() {
            ErrorCode::UnbornBranch | ErrorCode::NotFound => {
                GitVersionError::inspect("HEAD does not point at a commit yet")
            }
            _ => GitVersionError::Git(e),
        })?;

        Ok(head.peel_to_commit()?.id())
    }
}

impl super::Repository for Git2Repository {
    fn head_sha(&self) -> Result<String> {
        Ok(self.head_commit_id()?.to_string())
    }

    fn current_branch(&self) -> Result<String> {
        if self.repo.head_detached()? {
            return Ok(String::new());
        }

        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch => return Ok(String::new()),
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Ok(String::new());
        }

        Ok(head.shorthand().unwrap_or_default().to_string())
    }

    fn head_tags(&self) -> Result<Vec<String>> {
        let head_id = self.head_commit_id()?;
        let names = self.repo.tag_names(None)?;

        let mut tags = Vec::new();
        for name in names.iter().flatten() {
            let reference = match self.repo.find_reference(&format!("refs/tags/{}", name)) {
                Ok(reference) => reference,
                Err(_) => continue,
            };

            // Tags on trees or blobs never peel to a commit.
            let target = match reference.peel_to_commit() {
                Ok(commit) => commit.id(),
                Err(_) => continue,
            };

            if target == head_id {
                tags.push(name.to_string());
            }
        }

        // Match `git log --format=%D`, which decorates tags in reverse name order.
        tags.sort_by(|a, b| b.cmp(a));

        Ok(tags)
    }
}
