//! Supported-symbols cache driven by conditional requests.
//!
//! The cache has no TTL. Every read asks the provider, replaying the tokens
//! of the last `200`; the provider decides freshness by answering `200` (new
//! set, replace everything) or `304` (keep what we have).

use std::sync::Arc;

use tokio::sync::RwLock;

use converter_types::{
    CacheValidator, ConverterError, ProviderError, RateProvider, SupportedSymbols, SymbolsFetch,
};

/// One `200` response worth of state. Symbols and validator are always
/// swapped together, never one without the other.
#[derive(Debug)]
struct CachedSymbols {
    symbols: Arc<SupportedSymbols>,
    validator: CacheValidator,
}

/// Process-wide symbol cache, owned by the service and injected at startup.
#[derive(Debug, Default)]
pub struct SymbolCache {
    state: RwLock<Option<Arc<CachedSymbols>>>,
}

impl SymbolCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current supported set, refreshing it through `provider`.
    ///
    /// The lock is never held across the network call. Concurrent refreshes
    /// race and the last `200` wins; both carry the same upstream data.
    pub async fn get_supported_currencies<P: RateProvider>(
        &self,
        provider: &P,
    ) -> Result<Arc<SupportedSymbols>, ConverterError> {
        let snapshot = self.state.read().await.clone();
        let validator = snapshot.as_deref().map(|cached| &cached.validator);

        match provider.fetch_supported_symbols(validator).await? {
            SymbolsFetch::Fresh { symbols, validator } => {
                let fresh = Arc::new(CachedSymbols {
                    symbols: Arc::new(symbols),
                    validator,
                });
                *self.state.write().await = Some(Arc::clone(&fresh));
                tracing::debug!(
                    count = fresh.symbols.len(),
                    etag = ?fresh.validator.etag,
                    "Symbols cache refreshed"
                );
                Ok(Arc::clone(&fresh.symbols))
            }
            SymbolsFetch::Unchanged => match snapshot {
                Some(cached) => {
                    tracing::debug!("Symbols unchanged, serving cached set");
                    Ok(Arc::clone(&cached.symbols))
                }
                None => Err(ProviderError::Contract(
                    "304 Not Modified for an unconditional symbols request".into(),
                )
                .into()),
            },
        }
    }

    /// The validator that the next refresh will send, if any.
    pub async fn validator(&self) -> Option<CacheValidator> {
        self.state
            .read()
            .await
            .as_ref()
            .map(|cached| cached.validator.clone())
    }

    /// The cached set without contacting the provider.
    pub async fn cached_symbols(&self) -> Option<Arc<SupportedSymbols>> {
        self.state
            .read()
            .await
            .as_ref()
            .map(|cached| Arc::clone(&cached.symbols))
    }

    /// Forgets everything; the next read is unconditional.
    pub async fn reset(&self) {
        *self.state.write().await = None;
    }
}
