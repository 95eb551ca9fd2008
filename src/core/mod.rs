//! Core types for scaffolding a project

pub mod config;
pub mod manifest;
pub mod package_manager;
pub mod project;

pub use config::ScaffoldConfig;
pub use manifest::{ManifestError, PackageManifest};
pub use package_manager::{InstallChoice, InstallError, PackageManager};
pub use project::{ProjectError, ProjectSpec};
