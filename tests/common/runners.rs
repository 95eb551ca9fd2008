//! Command runners and prompts for driving the create flow in tests.

use async_trait::async_trait;
use std::sync::Mutex;

use tauri_kickstart::cli::InstallPrompt;
use tauri_kickstart::util::{
    CommandError, CommandOutput, CommandRunner, CommandSpec, SystemRunner,
};

/// Runs `git` for real and records everything else (package managers)
/// without executing it.
pub struct GitOnlyRunner {
    recorded: Mutex<Vec<CommandSpec>>,
    output: CommandOutput,
}

impl GitOnlyRunner {
    pub fn new() -> Self {
        Self::with_install_output(CommandOutput::ok())
    }

    /// Answer every non-git command with `output`.
    pub fn with_install_output(output: CommandOutput) -> Self {
        Self {
            recorded: Mutex::new(Vec::new()),
            output,
        }
    }

    /// Non-git commands that were requested, in order.
    pub fn recorded(&self) -> Vec<CommandSpec> {
        self.recorded.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for GitOnlyRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        if spec.program == "git" {
            return SystemRunner.run(spec).await;
        }
        self.recorded.lock().unwrap().push(spec.clone());
        Ok(self.output.clone())
    }
}

/// Picks a fixed menu entry.
pub struct ScriptedPrompt {
    answer: usize,
    asked: Mutex<usize>,
}

impl ScriptedPrompt {
    pub fn choosing(answer: usize) -> Self {
        Self {
            answer,
            asked: Mutex::new(0),
        }
    }

    /// How many times the menu was shown.
    pub fn times_asked(&self) -> usize {
        *self.asked.lock().unwrap()
    }
}

impl InstallPrompt for ScriptedPrompt {
    fn select(&self, _prompt: &str, _items: &[&str], _default: usize) -> dialoguer::Result<usize> {
        *self.asked.lock().unwrap() += 1;
        Ok(self.answer)
    }
}
