//! Currency identifiers and the provider's supported set.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// A currency code such as `USD`.
///
/// Codes are opaque: nothing is validated at construction time. Whether a
/// code is usable is decided by looking it up in [`SupportedSymbols`], so an
/// arbitrary string typed by a client survives intact into the error that
/// rejects it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CurrencyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Every currency the provider recognizes, keyed by code, valued by display
/// name (`"CZK" -> "Czech Republic Koruna"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedSymbols(BTreeMap<CurrencyCode, String>);

impl SupportedSymbols {
    pub fn new(symbols: BTreeMap<CurrencyCode, String>) -> Self {
        Self(symbols)
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.0.contains_key(code)
    }

    pub fn name(&self, code: &CurrencyCode) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, &str)> {
        self.0.iter().map(|(code, name)| (code, name.as_str()))
    }
}

impl FromIterator<(CurrencyCode, String)> for SupportedSymbols {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols() -> SupportedSymbols {
        [("USD", "United States Dollar"), ("CZK", "Czech Crown")]
            .into_iter()
            .map(|(c, n)| (CurrencyCode::new(c), n.to_string()))
            .collect()
    }

    #[test]
    fn test_currency_code_is_opaque() {
        let code = CurrencyCode::new("INVALID_CURRENCY");
        assert_eq!(code.as_str(), "INVALID_CURRENCY");
        assert_eq!(code.to_string(), "INVALID_CURRENCY");
    }

    #[test]
    fn test_supported_lookup() {
        let symbols = symbols();
        assert!(symbols.contains(&CurrencyCode::new("USD")));
        assert!(!symbols.contains(&CurrencyCode::new("usd")));
        assert_eq!(symbols.name(&"CZK".into()), Some("Czech Crown"));
        assert_eq!(symbols.len(), 2);
    }

    #[test]
    fn test_supported_serializes_as_plain_object() {
        let json = serde_json::to_value(symbols()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"CZK": "Czech Crown", "USD": "United States Dollar"})
        );
    }
}
