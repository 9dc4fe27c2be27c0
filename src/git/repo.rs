// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! libgit2-backed repository access.

use crate::error::{GitError, Result};
use git2::{ConfigLevel, ErrorCode, Repository, Signature, Status, StatusOptions};
use std::path::{Path, PathBuf};

use super::backend::{Author, HeadState, PartialIdentity, VcsBackend};

const HEADS_PREFIX: &str = "refs/heads/";
const TAGS_PREFIX: &str = "refs/tags/";

/// Wrapper around `git2::Repository` implementing [`VcsBackend`].
pub struct Git2Backend {
    inner: Repository,
    workdir: PathBuf,
}

impl Git2Backend {
    /// Open the repository containing the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| GitError::OpenFailed {
            message: format!("Failed to get current directory: {}", e),
        })?;
        Self::open(&current_dir)
    }

    /// Open the repository at or above `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                GitError::NotARepository {
                    path: path.to_path_buf(),
                }
            } else {
                GitError::OpenFailed {
                    message: e.message().to_string(),
                }
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or(GitError::BareRepository)?
            .to_path_buf();

        tracing::debug!("Opened repository with worktree at {:?}", workdir);

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    fn local_identity(&self) -> Result<PartialIdentity> {
        let config = self
            .inner
            .config()
            .and_then(|c| c.open_level(ConfigLevel::Local))
            .map_err(|e| GitError::IdentityFailed {
                scope: "local".to_string(),
                message: e.message().to_string(),
            })?;
        Ok(read_identity(&config))
    }

    fn global_identity(&self) -> Result<PartialIdentity> {
        let global = git2::Config::open_default().and_then(|c| c.open_level(ConfigLevel::Global));
        let config = match global {
            Ok(config) => config,
            // No global config file is the same as an empty one.
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(PartialIdentity::default()),
            Err(e) => {
                return Err(GitError::IdentityFailed {
                    scope: "global".to_string(),
                    message: e.message().to_string(),
                }
                .into())
            }
        };
        Ok(read_identity(&config))
    }
}

fn read_identity(config: &git2::Config) -> PartialIdentity {
    PartialIdentity {
        name: config.get_string("user.name").ok(),
        email: config.get_string("user.email").ok(),
    }
}

/// Map the raw target of a symbolic HEAD to a [`HeadState`].
fn symbolic_head_state(raw: &[u8]) -> Result<HeadState> {
    let target = std::str::from_utf8(raw).map_err(|_| GitError::HeadFailed {
        message: format!(
            "HEAD target is not valid UTF-8: '{}'",
            String::from_utf8_lossy(raw)
        ),
    })?;

    if let Some(branch) = target.strip_prefix(HEADS_PREFIX) {
        return Ok(HeadState::Branch(branch.to_string()));
    }
    if let Some(tag) = target.strip_prefix(TAGS_PREFIX) {
        return Ok(HeadState::Tag(tag.to_string()));
    }
    Err(GitError::HeadFailed {
        message: format!("unexpected HEAD target '{}'", target),
    }
    .into())
}

fn head_failed(e: git2::Error) -> GitError {
    GitError::HeadFailed {
        message: e.message().to_string(),
    }
}

fn commit_failed(what: &str) -> impl Fn(git2::Error) -> GitError + '_ {
    move |e| GitError::CommitFailed {
        message: format!("{}: {}", what, e.message()),
    }
}

impl VcsBackend for Git2Backend {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn head(&self) -> Result<HeadState> {
        // Read HEAD without peeling so unborn branches still report their name.
        let head = self.inner.find_reference("HEAD").map_err(head_failed)?;

        if let Some(raw) = head.symbolic_target_bytes() {
            return symbolic_head_state(raw);
        }

        head.target()
            .map(|oid| HeadState::Detached(oid.to_string()))
            .ok_or_else(|| {
                GitError::HeadFailed {
                    message: "HEAD has no target".to_string(),
                }
                .into()
            })
    }

    fn has_staged_changes(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options.include_untracked(false).include_ignored(false);

        let statuses = self
            .inner
            .statuses(Some(&mut options))
            .map_err(|e| GitError::StatusFailed {
                message: e.message().to_string(),
            })?;

        let staged = Status::INDEX_NEW
            | Status::INDEX_MODIFIED
            | Status::INDEX_DELETED
            | Status::INDEX_RENAMED
            | Status::INDEX_TYPECHANGE;

        Ok(statuses.iter().any(|entry| entry.status().intersects(staged)))
    }

    fn author(&self) -> Result<Author> {
        Author::resolve(self.local_identity()?, self.global_identity()?)
    }

    fn commit(&self, message: &str, author: &Author) -> Result<String> {
        let sig = Signature::now(&author.name, &author.email)
            .map_err(commit_failed("Failed to create signature"))?;

        let mut index = self
            .inner
            .index()
            .map_err(commit_failed("Failed to get index"))?;
        // The handle caches the index; pick up whatever was staged since.
        index
            .read(true)
            .map_err(commit_failed("Failed to read index"))?;
        let tree_id = index
            .write_tree()
            .map_err(commit_failed("Failed to write tree"))?;
        let tree = self
            .inner
            .find_tree(tree_id)
            .map_err(commit_failed("Failed to find tree"))?;

        let parent = match self.inner.head() {
            Ok(head) => Some(
                head.peel_to_commit()
                    .map_err(commit_failed("Failed to read HEAD commit"))?,
            ),
            Err(e) if e.code() == ErrorCode::UnbornBranch => None,
            Err(e) => return Err(commit_failed("Failed to read HEAD")(e).into()),
        };
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .inner
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .map_err(commit_failed("Failed to create commit"))?;

        tracing::debug!("Created commit {}", oid);
        Ok(oid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        repo.set_head("refs/heads/main").unwrap();
        (dir, repo)
    }

    fn stage(repo: &Repository, dir: &Path, file: &str, content: &str) {
        fs::write(dir.join(file), content).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(file)).unwrap();
        index.write().unwrap();
    }

    fn blob_at_head(repo: &Repository, file: &str) -> Vec<u8> {
        let tree = repo.head().unwrap().peel_to_tree().unwrap();
        let entry = tree.get_path(Path::new(file)).unwrap();
        let blob = entry.to_object(repo).unwrap().peel_to_blob().unwrap();
        blob.content().to_vec()
    }

    fn backend(dir: &TempDir) -> Git2Backend {
        Git2Backend::open(dir.path()).unwrap()
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Git2Backend::open(dir.path());
        assert!(matches!(
            result,
            Err(Error::Git(GitError::NotARepository { .. }))
        ));
    }

    #[test]
    fn test_bare_repo_rejected() {
        let dir = TempDir::new().unwrap();
        Repository::init_bare(dir.path()).unwrap();
        let result = Git2Backend::open(dir.path());
        assert!(matches!(result, Err(Error::Git(GitError::BareRepository))));
    }

    #[test]
    fn test_discovers_from_subdirectory() {
        let (dir, _repo) = init_repo();
        let nested = dir.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let backend = Git2Backend::open(&nested).unwrap();
        assert_eq!(
            backend.workdir().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_unborn_branch_reports_name() {
        let (dir, _repo) = init_repo();
        assert_eq!(
            backend(&dir).head().unwrap(),
            HeadState::Branch("main".to_string())
        );
    }

    #[test]
    fn test_branch_with_slashes() {
        let (dir, repo) = init_repo();
        repo.set_head("refs/heads/feature/CD-13-login").unwrap();
        assert_eq!(
            backend(&dir).head().unwrap(),
            HeadState::Branch("feature/CD-13-login".to_string())
        );
    }

    #[test]
    fn test_no_staged_changes_in_fresh_repo() {
        let (dir, _repo) = init_repo();
        fs::write(dir.path().join("untracked.txt"), "hello").unwrap();
        assert!(!backend(&dir).has_staged_changes().unwrap());
    }

    #[test]
    fn test_staged_file_detected() {
        let (dir, repo) = init_repo();
        stage(&repo, dir.path(), "a.txt", "hello");
        assert!(backend(&dir).has_staged_changes().unwrap());
    }

    #[test]
    fn test_author_from_local_config() {
        let (dir, _repo) = init_repo();
        let author = backend(&dir).author().unwrap();
        assert_eq!(author.name, "Test User");
        assert_eq!(author.email, "test@example.com");
    }

    #[test]
    fn test_commit_initial_and_follow_up() {
        let (dir, repo) = init_repo();
        let backend = backend(&dir);
        let author = backend.author().unwrap();

        stage(&repo, dir.path(), "a.txt", "one");
        let first = backend.commit("#1: First", &author).unwrap();

        stage(&repo, dir.path(), "a.txt", "two");
        let second = backend.commit("#2: Second", &author).unwrap();

        let head = repo.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.id().to_string(), second);
        assert_eq!(head.message(), Some("#2: Second"));
        assert_eq!(head.author().name(), Some("Test User"));
        assert_eq!(head.parent_count(), 1);
        assert_eq!(head.parent_id(0).unwrap().to_string(), first);
        assert_eq!(blob_at_head(&repo, "a.txt"), b"two");
        assert!(!backend.has_staged_changes().unwrap());
    }

    #[test]
    fn test_reused_backend_commits_latest_index() {
        let (dir, repo) = init_repo();
        let backend = backend(&dir);
        let author = backend.author().unwrap();

        stage(&repo, dir.path(), "a.txt", "first content");
        backend.commit("One", &author).unwrap();

        stage(&repo, dir.path(), "b.txt", "added later");
        stage(&repo, dir.path(), "a.txt", "second content");
        backend.commit("Two", &author).unwrap();

        assert_eq!(blob_at_head(&repo, "a.txt"), b"second content");
        assert_eq!(blob_at_head(&repo, "b.txt"), b"added later");

        let fresh = Git2Backend::open(dir.path()).unwrap();
        assert!(!fresh.has_staged_changes().unwrap());
    }

    #[test]
    fn test_tag_head() {
        let (dir, repo) = init_repo();
        repo.reference_symbolic("HEAD", "refs/tags/v1.0", true, "point HEAD at a tag")
            .unwrap();
        assert_eq!(
            backend(&dir).head().unwrap(),
            HeadState::Tag("v1.0".to_string())
        );
    }

    #[test]
    fn test_symbolic_head_state() {
        assert_eq!(
            symbolic_head_state(b"refs/heads/feature/x").unwrap(),
            HeadState::Branch("feature/x".to_string())
        );
        assert_eq!(
            symbolic_head_state(b"refs/tags/v2").unwrap(),
            HeadState::Tag("v2".to_string())
        );
        assert!(symbolic_head_state(b"refs/remotes/origin/main").is_err());
    }

    #[test]
    fn test_non_utf8_head_target_is_encoding_error() {
        let result = symbolic_head_state(b"refs/heads/caf\xe9");
        match result {
            Err(Error::Git(GitError::HeadFailed { message })) => {
                assert!(message.contains("not valid UTF-8"), "{}", message);
            }
            other => panic!("Expected HeadFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_detached_head() {
        let (dir, repo) = init_repo();
        let backend = backend(&dir);
        stage(&repo, dir.path(), "a.txt", "one");
        let id = backend.commit("First", &backend.author().unwrap()).unwrap();

        repo.set_head_detached(git2::Oid::from_str(&id).unwrap())
            .unwrap();
        assert_eq!(backend.head().unwrap(), HeadState::Detached(id));
    }
}
