//! CLI output formatting
//!
//! Provides colored status lines and the step spinner.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Output helper for consistent CLI formatting
pub struct Output;

impl Output {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Create a spinner with a message
    pub fn spinner(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded template must be valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }

    /// Format a project name consistently
    pub fn project_name(name: &str) -> String {
        name.cyan().bold().to_string()
    }
}

/// A single status line that spins while a step runs and then resolves to
/// a success or failure mark.
#[derive(Default)]
pub struct Status {
    spinner: Option<ProgressBar>,
}

impl Status {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start spinning with `message`, or change the message if already spinning
    pub fn start(&mut self, message: &str) {
        if let Some(ref pb) = self.spinner {
            pb.set_message(message.to_string());
        } else {
            self.spinner = Some(Output::spinner(message));
        }
    }

    /// Clear the spinner without printing anything
    pub fn stop(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spinner.is_some()
    }

    /// Replace the spinner with a success line
    pub fn succeed(&mut self, message: &str) {
        self.stop();
        Output::success(message);
    }

    /// Replace the spinner with a failure line
    pub fn fail(&mut self, message: &str) {
        self.stop();
        Output::error(message);
    }
}

impl Drop for Status {
    fn drop(&mut self) {
        self.stop();
    }
}
