//! Amount conversion with fixed two-decimal rounding.

use rust_decimal::{Decimal, RoundingStrategy};

use converter_types::{ConversionResult, ConverterError, ResolvedRates};

/// Fractional digits of every converted amount.
pub const AMOUNT_DECIMALS: u32 = 2;

/// Multiplies `amount` by each resolved rate and rounds the product
/// half-up to two decimals. Rates themselves are never rounded.
pub fn convert_amount(
    amount: Decimal,
    rates: &ResolvedRates,
) -> Result<ConversionResult, ConverterError> {
    rates
        .iter()
        .map(|(code, rate)| {
            amount
                .checked_mul(rate)
                .map(|product| {
                    let rounded = product.round_dp_with_strategy(
                        AMOUNT_DECIMALS,
                        RoundingStrategy::MidpointAwayFromZero,
                    );
                    (code.clone(), rounded)
                })
                .ok_or_else(|| ConverterError::AmountOutOfRange {
                    amount,
                    currency: code.clone(),
                })
        })
        .collect()
}
