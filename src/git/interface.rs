//! git::interface
//!
//! Repository interface implementation using git2.
//!
//! This module provides the single doorway to repository state in Capstan.
//! All repository interactions flow through this interface, which provides
//! structured results and normalizes errors into typed failure categories.
//!
//! # Error Handling
//!
//! Repository errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a git repository
//! - [`GitError::DetachedHead`]: HEAD does not point at a branch
//! - [`GitError::UnbornBranch`]: HEAD points at a branch with no commits
//! - [`GitError::RemoteNotFound`]: Named remote is not configured

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from repository operations.
///
/// The categorization lets the transport layer report failures that
/// originate on the local side (for example pushing from a detached HEAD)
/// distinctly from network failures.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// HEAD is detached; there is no current branch to push.
    #[error("HEAD is detached; no current branch to push")]
    DetachedHead,

    /// HEAD points at a branch that has no commits yet.
    #[error("current branch has no commits to push")]
    UnbornBranch,

    /// Named remote does not exist in the repository configuration.
    #[error("remote not found: {name}")]
    RemoteNotFound {
        /// The remote name that was looked up
        name: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        match err.code() {
            git2::ErrorCode::UnbornBranch => GitError::UnbornBranch,
            _ => GitError::Internal {
                message: err.message().to_string(),
            },
        }
    }
}

/// Interface to a git repository.
///
/// Wraps a `git2::Repository` opened via discovery. The handle is read-only
/// from the task's perspective; the push transport borrows the raw
/// repository to build its push command.
pub struct Git {
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("git_dir", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open a repository by discovering it from `path`.
    ///
    /// Searches upward from `path` like `git` itself does, so the task can
    /// run from any subdirectory. Bare repositories are accepted: pipelines
    /// frequently push from bare mirrors that have no working tree.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepo`] if no repository is found at or above
    /// `path`.
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;
        Ok(Self { repo })
    }

    /// Name of the branch HEAD currently points at (e.g. `"main"`).
    ///
    /// # Errors
    ///
    /// Returns [`GitError::DetachedHead`] if HEAD is not a symbolic ref to
    /// a branch, or [`GitError::UnbornBranch`] if the branch has no commits.
    pub fn current_branch(&self) -> Result<String, GitError> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                // An unborn HEAD is still symbolic; read the target directly.
                let reference = self.repo.find_reference("HEAD")?;
                return match reference.symbolic_target() {
                    Some(target) => match target.strip_prefix("refs/heads/") {
                        Some(_) => Err(GitError::UnbornBranch),
                        None => Err(GitError::DetachedHead),
                    },
                    None => Err(GitError::DetachedHead),
                };
            }
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Err(GitError::DetachedHead);
        }

        match head.shorthand() {
            Some(name) => Ok(name.to_string()),
            None => Err(GitError::Internal {
                message: "branch name is not valid UTF-8".to_string(),
            }),
        }
    }

    /// URL of the named remote, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RemoteNotFound`] if the remote does not exist.
    pub fn remote_url(&self, name: &str) -> Result<Option<String>, GitError> {
        let remote = self.repo.find_remote(name).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::RemoteNotFound {
                    name: name.to_string(),
                }
            } else {
                e.into()
            }
        })?;
        Ok(remote.url().map(|u| u.to_string()))
    }

    /// Path to the `.git` directory (or the repository itself when bare).
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Path to the working directory, if the repository is not bare.
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Whether the repository is bare.
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Raw repository handle for the push transport.
    pub(crate) fn raw(&self) -> &git2::Repository {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn run_git(dir: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .expect("git command failed");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    fn init_repo(dir: &Path) {
        run_git(dir, &["init", "-b", "main"]);
        run_git(dir, &["config", "user.email", "test@example.com"]);
        run_git(dir, &["config", "user.name", "Test User"]);
        std::fs::write(dir.join("README.md"), "# test\n").unwrap();
        run_git(dir, &["add", "README.md"]);
        run_git(dir, &["commit", "-m", "initial"]);
    }

    #[test]
    fn open_non_repository_fails() {
        let dir = TempDir::new().unwrap();
        let result = Git::open(dir.path());
        assert!(matches!(result, Err(GitError::NotARepo { .. })));
    }

    #[test]
    fn current_branch_on_fresh_repo() {
        let dir = TempDir::new().unwrap();
        init_repo(dir.path());
        let git = Git::open(dir.path()).unwrap();
        assert_eq!(git.current_branch().unwrap(), "main");
    }

    #[test]
    fn current_branch_unborn() {
        let dir = TempDir::new().unwrap();
        run_git(dir.path(), &["init", "-b", "main"]);
        let git = Git::open(dir.path()).unwrap();
        assert!(matches!(
            git.current_branch(),
            Err(GitError::UnbornBranch)
        ));
    }

    #[test]
    fn current_branch_detached() {
        let dir = TempDir::new().unwrap();
        init_repo(dir.path());
        run_git(dir.path(), &["checkout", "--detach"]);
        let git = Git::open(dir.path()).unwrap();
        assert!(matches!(git.current_branch(), Err(GitError::DetachedHead)));
    }

    #[test]
    fn remote_url_missing_remote() {
        let dir = TempDir::new().unwrap();
        init_repo(dir.path());
        let git = Git::open(dir.path()).unwrap();
        assert!(matches!(
            git.remote_url("origin"),
            Err(GitError::RemoteNotFound { .. })
        ));
    }

    #[test]
    fn bare_repository_opens() {
        let dir = TempDir::new().unwrap();
        run_git(dir.path(), &["init", "--bare", "-b", "main"]);
        let git = Git::open(dir.path()).unwrap();
        assert!(git.is_bare());
        assert!(git.workdir().is_none());
    }
}
