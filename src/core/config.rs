//! Scaffolding configuration

use super::package_manager::{InstallChoice, PackageManager};

/// Boilerplate repository cloned for every new project
pub const TEMPLATE_URL: &str = "https://github.com/Kazte/tauri-react-tailwind-shadcn-boilerplate";

/// Manifest whose `name` field is rewritten
pub const MANIFEST_FILE: &str = "package.json";

/// Settings for one scaffolding run.
///
/// The binary always uses [`ScaffoldConfig::default`]; tests point
/// `template_url` at a local bare repository instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Repository to clone
    pub template_url: String,
    /// Manifest file, relative to the project root
    pub manifest_file: String,
    /// Entries of the install menu, in display order
    pub install_choices: Vec<InstallChoice>,
    /// Index into `install_choices` selected by default
    pub default_choice: usize,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        let mut install_choices: Vec<_> = PackageManager::ALL
            .into_iter()
            .map(InstallChoice::Install)
            .collect();
        install_choices.push(InstallChoice::Skip);

        Self {
            template_url: TEMPLATE_URL.to_string(),
            manifest_file: MANIFEST_FILE.to_string(),
            install_choices,
            default_choice: 0,
        }
    }
}

impl ScaffoldConfig {
    /// Clone from `url` instead of the default boilerplate
    pub fn with_template_url(mut self, url: impl Into<String>) -> Self {
        self.template_url = url.into();
        self
    }

    /// Menu labels, in display order
    pub fn menu_labels(&self) -> Vec<&'static str> {
        self.install_choices.iter().map(InstallChoice::label).collect()
    }
}
