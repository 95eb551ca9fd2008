//! Test fixtures for a local boilerplate repository.
//!
//! Provides a `TemplateBuilder` that publishes files to a bare remote so the
//! create flow can clone over `file://` -- all offline.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_helpers;

pub const TEMPLATE_PACKAGE_JSON: &str = r#"{
  "name": "tauri-react-tailwind-shadcn-boilerplate",
  "private": true,
  "version": "0.0.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "tsc && vite build",
    "tauri": "tauri"
  }
}
"#;

/// A published template plus a scratch directory to create projects in.
pub struct TemplateFixture {
    /// Kept alive for the lifetime of the fixture.
    pub _temp: TempDir,
    /// Path to the bare remote.
    pub remote_path: PathBuf,
    /// Directory new projects are created under.
    pub work_dir: PathBuf,
}

impl TemplateFixture {
    /// The file:// URL for the bare remote.
    pub fn url(&self) -> String {
        format!("file://{}", self.remote_path.display())
    }

    /// Path a project with `name` would be created at.
    pub fn project_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }
}

/// Builder for a template repository.
pub struct TemplateBuilder {
    files: Vec<(String, String)>,
}

impl TemplateBuilder {
    /// A template with the boilerplate's `package.json`.
    pub fn new() -> Self {
        Self {
            files: vec![(
                "package.json".to_string(),
                TEMPLATE_PACKAGE_JSON.to_string(),
            )],
        }
    }

    /// A template with no files committed yet.
    pub fn empty() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a file to the template.
    pub fn add_file(mut self, path: &str, content: &str) -> Self {
        self.files.push((path.to_string(), content.to_string()));
        self
    }

    /// Commit all files and push them to a fresh bare remote.
    pub fn build(self) -> TemplateFixture {
        let temp = TempDir::new().unwrap();
        let remote_path = temp.path().join("template.git");
        let staging = temp.path().join("staging");
        let work_dir = temp.path().join("work");
        std::fs::create_dir_all(&work_dir).unwrap();

        git_helpers::init_bare_repo(&remote_path);
        git_helpers::init_repo(&staging);

        let files = if self.files.is_empty() {
            vec![("README.md".to_string(), "# template\n".to_string())]
        } else {
            self.files
        };
        for (path, content) in &files {
            git_helpers::commit_file(&staging, path, content, &format!("Add {}", path));
        }

        git_helpers::add_remote(&staging, "origin", &format!("file://{}", remote_path.display()));
        git_helpers::push_upstream(&staging, "origin", "main");

        TemplateFixture {
            _temp: temp,
            remote_path,
            work_dir,
        }
    }
}

/// True if `path` contains `.git` in any form.
pub fn has_git_metadata(path: &Path) -> bool {
    path.join(".git").symlink_metadata().is_ok()
}
