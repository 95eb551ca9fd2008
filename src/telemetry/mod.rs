//! Structured logging via the `tracing` crate.
//!
//! # Feature Flags
//!
//! - `release-logs`: Strip debug/trace at compile time

mod init;

pub use init::{init_telemetry, TelemetryConfig};
