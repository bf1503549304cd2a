//! Converter Application Service
//!
//! Orchestrates the symbol cache, rate resolution and amount conversion
//! through the provider port.
//! Contains NO infrastructure logic - pure business orchestration.

mod converter;
mod resolver;
mod symbol_cache;

use std::sync::Arc;

use rust_decimal::Decimal;

use converter_types::{
    ConversionResult, ConverterError, CurrencyCode, RateProvider, ResolvedRates, SupportedSymbols,
};

pub use converter::{AMOUNT_DECIMALS, convert_amount};
pub use resolver::{cross_rates, get_currency_rates, query_set};
pub use symbol_cache::SymbolCache;

/// Application service for currency conversion.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping the upstream provider without code changes
/// - Testing with a scripted in-memory provider
/// - Compile-time checks for port implementation
pub struct ConverterService<P: RateProvider> {
    provider: P,
    cache: SymbolCache,
}

impl<P: RateProvider> ConverterService<P> {
    /// Creates a new service with an empty symbol cache.
    pub fn new(provider: P) -> Self {
        Self::with_cache(provider, SymbolCache::new())
    }

    pub fn with_cache(provider: P, cache: SymbolCache) -> Self {
        Self { provider, cache }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &SymbolCache {
        &self.cache
    }

    /// Lists every currency the provider supports.
    #[tracing::instrument(skip(self))]
    pub async fn supported_currencies(&self) -> Result<Arc<SupportedSymbols>, ConverterError> {
        self.cache.get_supported_currencies(&self.provider).await
    }

    /// Resolves exchange rates from `input` to each of `outputs`.
    #[tracing::instrument(skip(self), fields(input = %input))]
    pub async fn currency_rates(
        &self,
        input: &CurrencyCode,
        outputs: &[CurrencyCode],
    ) -> Result<ResolvedRates, ConverterError> {
        get_currency_rates(&self.provider, &self.cache, input, outputs).await
    }

    /// Converts `amount` of `input` into each of `outputs`.
    #[tracing::instrument(skip(self), fields(input = %input, amount = %amount))]
    pub async fn convert(
        &self,
        amount: Decimal,
        input: &CurrencyCode,
        outputs: &[CurrencyCode],
    ) -> Result<ConversionResult, ConverterError> {
        let rates = self.currency_rates(input, outputs).await?;
        convert_amount(amount, &rates)
    }

    /// Drops the cached symbol set and its validator.
    pub async fn reset_cache(&self) {
        self.cache.reset().await;
    }
}
