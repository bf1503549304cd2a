//! Exchange rate provider port.
//!
//! This trait defines the interface for the upstream rate service.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::{CacheValidator, CurrencyCode, RawRates, SupportedSymbols};
use crate::error::ProviderError;

/// Outcome of a conditional symbols request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolsFetch {
    /// `200`: a new symbol set together with the tokens to replay next time.
    Fresh {
        symbols: SupportedSymbols,
        validator: CacheValidator,
    },
    /// `304`: whatever the caller has cached is still current.
    Unchanged,
}

/// Port trait for the upstream rate provider.
///
/// Implementations are stateless request/response mappers. They never retry.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the supported currency set, conditionally when a validator
    /// is supplied.
    async fn fetch_supported_symbols(
        &self,
        validator: Option<&CacheValidator>,
    ) -> Result<SymbolsFetch, ProviderError>;

    /// Fetches rates relative to the provider's fixed base currency.
    /// An empty `symbols` slice asks for every supported currency.
    async fn fetch_rates(&self, symbols: &[CurrencyCode]) -> Result<RawRates, ProviderError>;
}
