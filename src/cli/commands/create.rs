//! Create command implementation
//!
//! Clones the boilerplate, turns it into a fresh project, and optionally
//! installs its dependencies. Steps run strictly in order; the first failure
//! stops the run and leaves whatever was already done on disk.

use crate::cli::output::{Output, Status};
use crate::cli::prompt::InstallPrompt;
use crate::core::package_manager::{self, InstallChoice};
use crate::core::{
    InstallError, ManifestError, PackageManifest, ProjectError, ProjectSpec, ScaffoldConfig,
};
use crate::git::{self, GitError};
use crate::util::CommandRunner;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Errors that abort a create run
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Install(#[from] InstallError),

    #[error("Package manager selection failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid package manager selection: {0}")]
    InvalidSelection(usize),
}

/// Clone the template into the project directory.
///
/// Fails before touching the filesystem if the name is empty or the target
/// path already exists.
#[instrument(skip_all, fields(project = %project.name()))]
pub async fn clone_template(
    runner: &dyn CommandRunner,
    config: &ScaffoldConfig,
    project: &ProjectSpec,
) -> Result<(), ScaffoldError> {
    project.ensure_creatable()?;

    let path = project.path();
    info!(url = %config.template_url, path = %path.display(), "cloning template");
    git::clone_repo(runner, &config.template_url, &path).await?;

    // Only used for the log line; a template without commits is still usable
    match git::open_repo(&path).and_then(|repo| git::head_commit(&repo)) {
        Ok(commit) => debug!(%commit, "template checked out"),
        Err(e) => warn!(error = %e, "could not read template HEAD"),
    }

    Ok(())
}

/// Strip the template's history and rename the manifest to the project name.
///
/// Returns the manifest as written to disk.
#[instrument(skip_all, fields(project = %project.name()))]
pub async fn finalize_project(
    config: &ScaffoldConfig,
    project: &ProjectSpec,
) -> Result<PackageManifest, ScaffoldError> {
    let path = project.path();
    git::strip_git_metadata(&path).await?;

    let mut manifest = PackageManifest::load(path.join(&config.manifest_file)).await?;
    debug!(from = ?manifest.name(), to = project.name(), "renaming manifest");
    manifest.set_name(project.name());
    manifest.save().await?;

    Ok(manifest)
}

/// Ask which package manager to install with
pub fn choose_install(
    prompt: &dyn InstallPrompt,
    config: &ScaffoldConfig,
) -> Result<InstallChoice, ScaffoldError> {
    let labels = config.menu_labels();
    let index = prompt.select("Select a package manager", &labels, config.default_choice)?;

    config
        .install_choices
        .get(index)
        .copied()
        .ok_or(ScaffoldError::InvalidSelection(index))
}

/// Run the chosen install, if any. Returns whether anything was installed.
#[instrument(skip_all, fields(project = %project.name(), choice = %choice))]
pub async fn install_dependencies(
    runner: &dyn CommandRunner,
    choice: InstallChoice,
    project: &ProjectSpec,
) -> Result<bool, ScaffoldError> {
    match choice {
        InstallChoice::Skip => {
            debug!("skipping dependency install");
            Ok(false)
        }
        InstallChoice::Install(manager) => {
            package_manager::install(runner, manager, &project.path()).await?;
            Ok(true)
        }
    }
}

/// Run the create command: clone, finalize, install
pub async fn run_create(
    config: &ScaffoldConfig,
    project: &ProjectSpec,
    runner: &dyn CommandRunner,
    prompt: &dyn InstallPrompt,
) -> Result<(), ScaffoldError> {
    let mut status = Status::new();

    let result = run_steps(config, project, runner, prompt, &mut status).await;
    if let Err(ref e) = result {
        status.fail(&e.to_string());
    }

    result
}

async fn run_steps(
    config: &ScaffoldConfig,
    project: &ProjectSpec,
    runner: &dyn CommandRunner,
    prompt: &dyn InstallPrompt,
    status: &mut Status,
) -> Result<(), ScaffoldError> {
    status.start("Creating project");
    clone_template(runner, config, project).await?;
    status.succeed("Project created");

    status.start("Finalizing project");
    finalize_project(config, project).await?;
    status.succeed("Finalizing project");

    // The menu needs the terminal to itself
    status.start("Installing dependencies");
    status.stop();
    let choice = choose_install(prompt, config)?;

    status.start("Installing dependencies");
    if install_dependencies(runner, choice, project).await? {
        status.succeed("Dependencies installed");
    } else {
        status.succeed("Dependencies not installed");
    }

    Output::info(&format!(
        "Created {} at {}",
        Output::project_name(project.name()),
        project.path().display()
    ));

    Ok(())
}
