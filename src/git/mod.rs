//! Git operations
//!
//! Cloning shells out to the `git` CLI; inspecting the result uses git2.

use crate::util::{CommandError, CommandRunner, CommandSpec};
use git2::Repository;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Name of the metadata directory removed after cloning
pub const GIT_DIR: &str = ".git";

/// Errors that can occur during git operations
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Not a git repository: {0}")]
    NotARepo(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Open a git repository at the given path
pub fn open_repo<P: AsRef<Path>>(path: P) -> Result<Repository, GitError> {
    Repository::open(path.as_ref())
        .map_err(|e| GitError::NotARepo(format!("{}: {}", path.as_ref().display(), e)))
}

/// Check if a path is a git repository
pub fn is_git_repo<P: AsRef<Path>>(path: P) -> bool {
    Repository::open(path.as_ref()).is_ok()
}

/// Short id of the commit HEAD points at
pub fn head_commit(repo: &Repository) -> Result<String, GitError> {
    let oid = repo
        .head()?
        .target()
        .ok_or_else(|| GitError::OperationFailed("HEAD has no target".to_string()))?;
    Ok(oid.to_string()[..7].to_string())
}

/// Clone `url` into `path` with `git clone`
pub async fn clone_repo(
    runner: &dyn CommandRunner,
    url: &str,
    path: &Path,
) -> Result<(), GitError> {
    let spec = CommandSpec::new("git")
        .arg("clone")
        .arg(url)
        .arg(path.to_string_lossy());

    let output = runner.run(&spec).await.map_err(|e| match e {
        CommandError::NotFound { .. } => {
            GitError::OperationFailed("git is not installed or not on PATH".to_string())
        }
        CommandError::Spawn { source, .. } => GitError::Io(source),
    })?;

    if !output.success {
        return Err(GitError::OperationFailed(format!(
            "git clone failed: {}",
            output.stderr.trim()
        )));
    }

    Ok(())
}

/// Remove the repository metadata under `path`, leaving a plain directory tree.
///
/// A missing `.git` is not an error. A `.git` file (as left by worktrees and
/// submodules) is removed as well.
pub async fn strip_git_metadata(path: &Path) -> Result<(), GitError> {
    let git_dir = path.join(GIT_DIR);

    let metadata = match tokio::fs::symlink_metadata(&git_dir).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %git_dir.display(), "no git metadata to remove");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        tokio::fs::remove_dir_all(&git_dir).await?;
    } else {
        tokio::fs::remove_file(&git_dir).await?;
    }
    debug!(path = %git_dir.display(), "removed git metadata");

    Ok(())
}
