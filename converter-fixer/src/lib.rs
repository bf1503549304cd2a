//! # Converter Fixer
//!
//! Outbound adapter for the Fixer.io exchange-rate API.
//! This crate provides `FixerClient`, the `RateProvider` port implementation
//! used in production.

mod client;
mod envelope;


use std::time::Duration;

pub use client::FixerClient;

/// Default endpoint for the latest rates.
pub const DEFAULT_LATEST_URL: &str = "http://data.fixer.io/api/latest";
/// Default endpoint for the supported symbols.
pub const DEFAULT_SYMBOLS_URL: &str = "http://data.fixer.io/api/symbols";
/// Default HTTP timeout for a single provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the Fixer API.
#[derive(Debug, Clone)]
pub struct FixerConfig {
    pub api_key: String,
    pub latest_url: String,
    pub symbols_url: String,
    pub timeout: Duration,
}

impl FixerConfig {
    /// Creates a configuration pointing at the public Fixer endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            latest_url: DEFAULT_LATEST_URL.to_string(),
            symbols_url: DEFAULT_SYMBOLS_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Points both endpoints at `base_url` (`{base}/latest`, `{base}/symbols`).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        self.latest_url = format!("{}/latest", base);
        self.symbols_url = format!("{}/symbols", base);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Build a ready-to-use Fixer client.
///
/// # Examples
///
/// ```ignore
/// let provider = build_provider(FixerConfig::new(api_key))?;
/// ```
pub fn build_provider(config: FixerConfig) -> Result<FixerClient, reqwest::Error> {
    FixerClient::new(config)
}
