//! The smoke check
//!
//! One request, one verdict. Every failure category converges here to
//! [`CheckOutcome::Failed`]; `main` maps the outcome to the exit code.

use colored::*;
use serde_json::Value;
use sheetcheck_client::{ClientError, SheetClient, StatsEnvelope};

use crate::config::Config;

/// Outcome of a single smoke check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The API answered 200 with a successful envelope
    Passed,
    /// Any failure: transport, protocol, parse or logical
    Failed,
}

/// Run the smoke check once against the configured API
///
/// Issues `GET {base}?action=getStats` and prints one transcript line per
/// outcome. The configuration is injected, so the function can be driven
/// against a mock server without touching process environment state.
pub async fn run_check(config: &Config) -> CheckOutcome {
    println!("Testing API Connection...");

    let client = match SheetClient::new(&config.sheet_url) {
        Ok(client) => client,
        Err(err) => {
            println!("{} {}", "Connection Failed:".red(), err);
            return CheckOutcome::Failed;
        }
    };

    match client.get_stats().await {
        Ok(envelope) if envelope.is_success() => {
            println!("{}", "API responded with success.".green());
            println!("Stats received: {}", payload(&envelope));
            CheckOutcome::Passed
        }
        Ok(envelope) => {
            // 200 on the wire, failure in the body: show everything.
            println!("{} {}", "API Logic Error:".yellow(), envelope);
            CheckOutcome::Failed
        }
        Err(ClientError::Status { status, .. }) => {
            println!("{} {}", "HTTP Error:".red(), status);
            CheckOutcome::Failed
        }
        Err(ClientError::Parse(desc)) => {
            println!("{} {}", "Invalid JSON Response:".red(), desc);
            CheckOutcome::Failed
        }
        Err(ClientError::Request(err)) => {
            println!("{} {}", "Connection Failed:".red(), err);
            CheckOutcome::Failed
        }
    }
}

/// The stats payload rendered for display; JSON `null` when absent
fn payload(envelope: &StatsEnvelope) -> Value {
    envelope.data.clone().unwrap_or(Value::Null)
}
