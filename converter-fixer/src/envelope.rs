//! Wire format of Fixer responses.
//!
//! Every Fixer endpoint answers `200` with a `success` flag; the payload or
//! the error object sits next to it depending on that flag.

use std::collections::BTreeMap;
use std::str::FromStr;

use converter_types::{CurrencyCode, ProviderError, RawRates, SupportedSymbols};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub error: Option<ErrorBody>,
    #[serde(default)]
    pub symbols: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub rates: Option<BTreeMap<String, serde_json::Number>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: i64,
    #[serde(default)]
    pub info: String,
}

impl Envelope {
    /// Parses a response body and turns `success: false` into an error.
    pub fn parse(url: &str, body: &[u8]) -> Result<Self, ProviderError> {
        let envelope: Envelope =
            serde_json::from_slice(body).map_err(|e| malformed(url, e.to_string()))?;

        if envelope.success {
            return Ok(envelope);
        }

        match envelope.error {
            Some(ErrorBody { code, info }) => Err(ProviderError::Api {
                url: url.to_string(),
                code,
                info,
            }),
            None => Err(malformed(url, "success is false but no error object")),
        }
    }

    pub fn into_symbols(self, url: &str) -> Result<SupportedSymbols, ProviderError> {
        let symbols = self
            .symbols
            .ok_or_else(|| malformed(url, "missing field `symbols`"))?;

        Ok(symbols
            .into_iter()
            .map(|(code, name)| (CurrencyCode::new(code), name))
            .collect())
    }

    pub fn into_rates(self, url: &str) -> Result<RawRates, ProviderError> {
        let rates = self
            .rates
            .ok_or_else(|| malformed(url, "missing field `rates`"))?;

        rates
            .into_iter()
            .map(|(code, rate)| {
                let rate = parse_decimal(&rate)
                    .ok_or_else(|| malformed(url, format!("rate {rate} for {code} is not a decimal")))?;
                Ok((CurrencyCode::new(code), rate))
            })
            .collect()
    }
}

/// Reads a JSON number through its textual form so that `1.138` becomes
/// exactly `1.138`, not the nearest binary fraction.
fn parse_decimal(number: &serde_json::Number) -> Option<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

pub(crate) fn malformed(url: &str, message: impl Into<String>) -> ProviderError {
    ProviderError::Malformed {
        url: url.to_string(),
        message: message.into(),
    }
}
