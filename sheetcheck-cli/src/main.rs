//! Sheetcheck CLI
//!
//! Smoke tester for the sheet-backed stats API: one read-only request,
//! one pass/fail verdict, and an exit code to match.

mod check;
mod config;

use std::process::ExitCode;

use clap::Parser;
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::check::{CheckOutcome, run_check};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "sheetcheck")]
#[command(about = "Single-endpoint smoke test for the sheet stats API", long_about = None)]
struct Cli {
    /// Base URL of the deployed sheet web app
    #[arg(long, env = "APP_SHEET_URL")]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging; stdout is reserved for the transcript.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetcheck=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Missing configuration is fatal before any network activity.
    let Some(config) = Config::from_base_url(cli.url) else {
        println!("Error: APP_SHEET_URL is missing.");
        return ExitCode::FAILURE;
    };

    match run_check(&config).await {
        CheckOutcome::Passed => {
            println!("\n{}", "SMOKE TEST PASSED".green().bold());
            ExitCode::SUCCESS
        }
        CheckOutcome::Failed => {
            println!("\n{}", "TEST FAILED".red().bold());
            ExitCode::FAILURE
        }
    }
}
