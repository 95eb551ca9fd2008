//! Utility functions and helpers

pub mod cmd;

pub use cmd::{log_cmd, CommandError, CommandOutput, CommandRunner, CommandSpec, SystemRunner};
