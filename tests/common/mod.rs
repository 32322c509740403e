#![allow(dead_code)]

use git2::{Commit, Oid, Repository, RepositoryInitOptions, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Throwaway git repository whose first commit lands on `main`
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Initialize an empty repository with HEAD on an unborn `main`
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(dir.path(), &opts).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        TestRepo { dir, repo }
    }

    /// Initialize a repository with one commit on `main`
    pub fn init() -> Self {
        let test_repo = Self::empty();
        test_repo.commit("Initial commit");
        test_repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(&self) -> Signature<'static> {
        Signature::now("Test User", "test@example.com").expect("Could not create signature")
    }

    /// Commit a change to README.md on the current HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let content_path = self.path().join("README.md");
        fs::write(&content_path, format!("{}\n", message)).expect("Could not write file");

        let mut index = self.repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&Commit> = parent.iter().collect();

        let sig = self.signature();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
    }

    pub fn head_sha(&self) -> String {
        self.repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map(|commit| commit.id().to_string())
            .expect("Could not read HEAD")
    }

    pub fn tag_lightweight(&self, name: &str) {
        let object = self
            .repo
            .revparse_single("HEAD")
            .expect("Could not resolve HEAD");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn tag_annotated(&self, name: &str) {
        let object = self
            .repo
            .revparse_single("HEAD")
            .expect("Could not resolve HEAD");
        self.repo
            .tag(name, &object, &self.signature(), name, false)
            .expect("Could not create annotated tag");
    }

    /// Create a branch at HEAD and switch to it
    pub fn checkout_new_branch(&self, name: &str) {
        let commit = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .expect("Could not read HEAD");
        self.repo
            .branch(name, &commit, false)
            .expect("Could not create branch");
        self.repo
            .set_head(&format!("refs/heads/{}", name))
            .expect("Could not switch branch");
    }

    /// Point HEAD directly at the current commit
    pub fn detach(&self) {
        let oid = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.target())
            .expect("Could not read HEAD");
        self.repo.set_head_detached(oid).expect("Could not detach HEAD");
    }
}
