//! Query parameter parsing for the conversion endpoint.

use std::str::FromStr;

use rust_decimal::Decimal;

use converter_types::{AppError, ConvertParams, CurrencyCode};

pub const DEFAULT_AMOUNT: Decimal = Decimal::ONE;
pub const DEFAULT_INPUT_CURRENCY: &str = "CZK";

/// Collects the conversion parameters from raw query pairs. A repeated key
/// keeps its first value; unknown keys are ignored.
pub fn convert_params(pairs: Vec<(String, String)>) -> ConvertParams {
    let mut params = ConvertParams::default();
    for (key, value) in pairs {
        let slot = match key.as_str() {
            "amount" => &mut params.amount,
            "input_currency" => &mut params.input_currency,
            "output_currency" => &mut params.output_currency,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }
    params
}

/// Parses `amount`, accepting plain and scientific notation.
pub fn parse_amount(raw: Option<&str>) -> Result<Decimal, AppError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_AMOUNT);
    };

    let text = raw.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| AppError::InvalidAmount(raw.to_string()))
}

/// Translates a single code-or-symbol into a currency code.
pub fn parse_currency(raw: &str) -> Result<CurrencyCode, AppError> {
    currency_symbols::translate(raw)
        .map(CurrencyCode::new)
        .map_err(|e| AppError::UnknownSymbol(e.symbol))
}

pub fn parse_input_currency(raw: Option<&str>) -> Result<CurrencyCode, AppError> {
    parse_currency(raw.unwrap_or(DEFAULT_INPUT_CURRENCY))
}

/// Splits the comma-separated output list. Empty segments are dropped, so a
/// missing or empty parameter yields an empty list ("all currencies").
pub fn parse_output_currencies(raw: Option<&str>) -> Result<Vec<CurrencyCode>, AppError> {
    raw.unwrap_or_default()
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(parse_currency)
        .collect()
}
