//! Interactive selection

use dialoguer::{theme::ColorfulTheme, Select};

/// Asks the user to pick one item from a list
pub trait InstallPrompt: Send + Sync {
    /// Returns the index of the chosen item
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> dialoguer::Result<usize>;
}

/// Terminal menu driven by dialoguer
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompt;

impl InstallPrompt for DialoguerPrompt {
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> dialoguer::Result<usize> {
        let theme = ColorfulTheme::default();
        Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
    }
}
