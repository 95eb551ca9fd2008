//! tauri-kickstart CLI entry point

use clap::Parser;
use std::process::ExitCode;
use tauri_kickstart::cli::{DialoguerPrompt, Output};
use tauri_kickstart::telemetry::{init_telemetry, TelemetryConfig};
use tauri_kickstart::util::SystemRunner;
use tauri_kickstart::{run_create, ProjectSpec, ScaffoldConfig};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "tauri-kickstart")]
#[command(
    version,
    about = "Scaffold a Tauri + React + Tailwind + shadcn project",
    long_about = None
)]
struct Cli {
    /// Name of the project
    #[arg(short, long)]
    name: String,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_telemetry(&TelemetryConfig::for_verbosity(cli.verbose)) {
        Output::error(&format!("Failed to initialize logging: {e}"));
        return ExitCode::FAILURE;
    }
    debug!(?cli, "parsed arguments");

    let project = match ProjectSpec::in_current_dir(cli.name) {
        Ok(project) => project,
        Err(e) => {
            Output::error(&format!("Failed to read current directory: {e}"));
            return ExitCode::FAILURE;
        }
    };

    // run_create has already reported the failure on the status line
    match run_create(
        &ScaffoldConfig::default(),
        &project,
        &SystemRunner,
        &DialoguerPrompt,
    )
    .await
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
