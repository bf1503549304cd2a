//! Rate resolution: validation, fetch and cross-rate derivation.
//!
//! The provider only quotes rates against its own fixed base currency, so
//! every `input -> output` rate is derived as `raw[output] / raw[input]`.

use converter_types::{
    ConverterError, CurrencyCode, ProviderError, RateProvider, RawRates, ResolvedRates,
    SupportedSymbols,
};

use super::SymbolCache;

/// Resolves `1 input = rate output` for every requested output.
///
/// An empty `outputs` slice means "every currency the provider knows"; in
/// that case only `input` is validated and the rates call carries no filter.
pub async fn get_currency_rates<P: RateProvider>(
    provider: &P,
    cache: &SymbolCache,
    input: &CurrencyCode,
    outputs: &[CurrencyCode],
) -> Result<ResolvedRates, ConverterError> {
    let supported = cache.get_supported_currencies(provider).await?;

    let query = if outputs.is_empty() {
        ensure_supported(&supported, input)?;
        Vec::new()
    } else {
        let query = query_set(input, outputs);
        ensure_supported(&supported, input)?;
        for code in &query {
            ensure_supported(&supported, code)?;
        }
        query
    };

    let raw = provider.fetch_rates(&query).await?;
    cross_rates(&raw, input)
}

/// Deduplicated outputs in request order, followed by `input`.
pub fn query_set(input: &CurrencyCode, outputs: &[CurrencyCode]) -> Vec<CurrencyCode> {
    let mut query: Vec<CurrencyCode> = Vec::with_capacity(outputs.len() + 1);
    for code in outputs.iter().chain(std::iter::once(input)) {
        if !query.contains(code) {
            query.push(code.clone());
        }
    }
    query
}

fn ensure_supported(
    supported: &SupportedSymbols,
    code: &CurrencyCode,
) -> Result<(), ConverterError> {
    if supported.contains(code) {
        Ok(())
    } else {
        Err(ConverterError::UnknownCurrency(code.clone()))
    }
}

/// Re-bases `raw` on `input`. Full precision, no rounding.
pub fn cross_rates(raw: &RawRates, input: &CurrencyCode) -> Result<ResolvedRates, ConverterError> {
    let base = raw
        .get(input)
        .filter(|rate| !rate.is_zero())
        .ok_or_else(|| ProviderError::Contract(format!("no usable rate for {input}")))?;

    raw.iter()
        .filter(|(code, _)| *code != input)
        .map(|(code, rate)| {
            rate.checked_div(base)
                .map(|cross| (code.clone(), cross))
                .ok_or_else(|| {
                    ConverterError::from(ProviderError::Contract(format!(
                        "rate {rate} / {base} for {code} overflows"
                    )))
                })
        })
        .collect()
}
