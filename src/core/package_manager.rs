//! Package managers offered for installing the project's dependencies

use crate::util::{CommandError, CommandRunner, CommandSpec};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while installing dependencies
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("{0} is not installed or not on PATH")]
    ManagerNotFound(PackageManager),

    #[error("{manager} install failed: {stderr}")]
    Failed {
        manager: PackageManager,
        stderr: String,
    },

    #[error("Failed to run {manager}: {source}")]
    Spawn {
        manager: PackageManager,
        #[source]
        source: std::io::Error,
    },
}

/// A supported JavaScript package manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Yarn,
    Npm,
    Pnpm,
}

impl PackageManager {
    /// All managers, in menu order
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Yarn,
        PackageManager::Npm,
        PackageManager::Pnpm,
    ];

    /// Executable name looked up on `PATH`
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// The install command, scoped to `project_dir`
    pub fn install_command(&self, project_dir: &Path) -> CommandSpec {
        CommandSpec::new(self.program())
            .arg("install")
            .current_dir(project_dir)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// One entry of the install menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallChoice {
    Install(PackageManager),
    Skip,
}

impl InstallChoice {
    /// Text shown in the menu
    pub fn label(&self) -> &'static str {
        match self {
            InstallChoice::Install(manager) => manager.program(),
            InstallChoice::Skip => "Don't install",
        }
    }
}

impl fmt::Display for InstallChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Run `<manager> install` inside `project_dir`
pub async fn install(
    runner: &dyn CommandRunner,
    manager: PackageManager,
    project_dir: &Path,
) -> Result<(), InstallError> {
    let spec = manager.install_command(project_dir);
    debug!(%manager, dir = %project_dir.display(), "installing dependencies");

    let output = runner.run(&spec).await.map_err(|e| match e {
        CommandError::NotFound { .. } => InstallError::ManagerNotFound(manager),
        CommandError::Spawn { source, .. } => InstallError::Spawn { manager, source },
    })?;

    if !output.success {
        return Err(InstallError::Failed {
            manager,
            stderr: output.stderr.trim().to_string(),
        });
    }

    Ok(())
}
