//! Sheet API HTTP Client
//!
//! A small, type-safe HTTP client for the sheet-backed stats API.
//!
//! The client wraps the single read-only endpoint behind an explicit
//! `Result`-returning API, so callers match on failure categories
//! (transport, protocol, parse) instead of intercepting errors thrown by
//! the transport layer.
//!
//! # Example
//!
//! ```no_run
//! use sheetcheck_client::SheetClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sheetcheck_client::ClientError> {
//!     let client = SheetClient::new("https://script.example.com/exec")?;
//!
//!     let envelope = client.get_stats().await?;
//!     if envelope.is_success() {
//!         println!("stats: {:?}", envelope.data);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod stats;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use stats::StatsEnvelope;

use std::time::Duration;

use reqwest::{Client, StatusCode, redirect};
use serde::de::DeserializeOwned;

/// Request timeout applied by [`SheetClient::new`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Redirect hops followed before the transport gives up
const MAX_REDIRECTS: usize = 10;

/// HTTP client for the sheet stats API
///
/// The base URL is stored exactly as configured; request URLs are built by
/// appending the action query string to it (see [`SheetClient::stats_url`]).
#[derive(Debug, Clone)]
pub struct SheetClient {
    /// Base URL of the deployed sheet web app
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl SheetClient {
    /// Create a new client with the default transport settings
    ///
    /// The underlying `reqwest::Client` is configured with the 15 second
    /// request timeout and automatic redirect following, bounded at 10
    /// hops. Building the transport can fail if no TLS backend is
    /// available.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self::with_client(base_url, client))
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use sheetcheck_client::SheetClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(5))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = SheetClient::with_client("https://script.example.com/exec", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize the JSON body
    ///
    /// Any status other than 200 is a protocol error carrying the status
    /// code and body text; a 200 body that fails to deserialize is a
    /// parse error.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::status(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}
