//! The project being created: its name and where it lands on disk.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that stop a project from being created
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Project name is required")]
    EmptyName,

    #[error("Project already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// Name of the new project and the directory it is created in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    base_dir: PathBuf,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            base_dir: base_dir.into(),
        }
    }

    /// A project created under the process working directory
    pub fn in_current_dir(name: impl Into<String>) -> std::io::Result<Self> {
        Ok(Self::new(name, std::env::current_dir()?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Target directory: `<base_dir>/<name>`
    pub fn path(&self) -> PathBuf {
        self.base_dir.join(&self.name)
    }

    /// Check that the project can be created without touching anything.
    ///
    /// The name must be non-empty and nothing (file, directory, or dangling
    /// symlink) may exist at the target path yet.
    pub fn ensure_creatable(&self) -> Result<(), ProjectError> {
        if self.name.is_empty() {
            return Err(ProjectError::EmptyName);
        }

        let path = self.path();
        if path.symlink_metadata().is_ok() {
            return Err(ProjectError::AlreadyExists(path));
        }

        Ok(())
    }
}
