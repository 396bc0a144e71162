//! Configuration module
//!
//! Handles CLI configuration, i.e. the target API URL.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the sheet web app under test
    pub sheet_url: String,
}

impl Config {
    /// Build a configuration from an optional base URL
    ///
    /// Returns `None` when the URL is absent or blank; the caller treats
    /// that as a fatal configuration error, before any network activity.
    pub fn from_base_url(url: Option<String>) -> Option<Self> {
        let url = url?;
        if url.trim().is_empty() {
            return None;
        }
        Some(Self { sheet_url: url })
    }
}
