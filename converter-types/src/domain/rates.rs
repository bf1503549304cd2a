//! Exchange rate sets and conversion results.
//!
//! All values are `rust_decimal::Decimal`. Binary floating point never
//! touches a rate or an amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::CurrencyCode;

/// Rates as returned by the provider, every one relative to the provider's
/// own fixed base currency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRates(BTreeMap<CurrencyCode, Decimal>);

impl RawRates {
    pub fn new(rates: BTreeMap<CurrencyCode, Decimal>) -> Self {
        Self(rates)
    }

    pub fn get(&self, code: &CurrencyCode) -> Option<Decimal> {
        self.0.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, Decimal)> {
        self.0.iter().map(|(code, rate)| (code, *rate))
    }
}

impl FromIterator<(CurrencyCode, Decimal)> for RawRates {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Rates re-based on the request's input currency:
/// `1 input = rate output`. Never contains the input currency itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedRates(BTreeMap<CurrencyCode, Decimal>);

impl ResolvedRates {
    pub fn get(&self, code: &CurrencyCode) -> Option<Decimal> {
        self.0.get(code).copied()
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.0.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, Decimal)> {
        self.0.iter().map(|(code, rate)| (code, *rate))
    }
}

impl FromIterator<(CurrencyCode, Decimal)> for ResolvedRates {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Converted amounts keyed by output currency, rounded to two decimals.
pub type ConversionResult = BTreeMap<CurrencyCode, Decimal>;
