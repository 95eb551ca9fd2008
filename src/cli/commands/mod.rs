//! CLI command implementations

pub mod create;

pub use create::{run_create, ScaffoldError};
