//! Configuration loading from environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use converter_fixer::{DEFAULT_LATEST_URL, DEFAULT_SYMBOLS_URL, FixerConfig};
use converter_hex::inbound::DEFAULT_REQUESTS_PER_MINUTE;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub requests_per_minute: u32,
    /// Key rate limiting on `X-Forwarded-For` (reverse proxy deployments)
    pub trust_proxy: bool,
    pub otlp_endpoint: Option<String>,
    pub fixer: FixerConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = lookup("FIXER_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow::anyhow!("FIXER_API_KEY environment variable is required"))?;

        let port = parse_or(&lookup, "PORT", 3000)?;
        let requests_per_minute =
            parse_or(&lookup, "RATE_LIMIT_PER_MINUTE", DEFAULT_REQUESTS_PER_MINUTE)?;
        let trust_proxy = parse_or(&lookup, "RATE_LIMIT_TRUST_PROXY", false)?;
        let timeout_secs = parse_or(&lookup, "FIXER_TIMEOUT_SECS", 10u64)?;

        let mut fixer = FixerConfig::new(api_key).with_timeout(Duration::from_secs(timeout_secs));
        fixer.latest_url = lookup("FIXER_LATEST_URL").unwrap_or_else(|| DEFAULT_LATEST_URL.into());
        fixer.symbols_url =
            lookup("FIXER_SUPPORTED_URL").unwrap_or_else(|| DEFAULT_SYMBOLS_URL.into());

        Ok(Self {
            port,
            requests_per_minute,
            trust_proxy,
            otlp_endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.is_empty()),
            fixer,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {key}={raw}: {e}")),
        None => Ok(default),
    }
}
