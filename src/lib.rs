//! tauri-kickstart - scaffold a Tauri + React + Tailwind + shadcn project
//!
//! Clones the boilerplate repository, drops its git history, renames the
//! package, and optionally installs dependencies with yarn, npm, or pnpm.

pub mod cli;
pub mod core;
pub mod git;
pub mod telemetry;
pub mod util;

pub use crate::cli::commands::{run_create, ScaffoldError};
pub use crate::core::{ProjectSpec, ScaffoldConfig};
