//! Data Transfer Objects (DTOs) for requests and responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ConversionResult, CurrencyCode};

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters of `GET /currency_converter`.
///
/// Every field is kept as raw text: parsing and symbol translation happen in
/// the handler so that bad input produces the service's own error messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertParams {
    /// Amount to convert. Defaults to 1.
    #[param(example = "10.5")]
    pub amount: Option<String>,
    /// Input currency code or single-character symbol. Defaults to CZK.
    #[param(example = "£")]
    pub input_currency: Option<String>,
    /// Comma-separated output codes or symbols. Empty means all currencies.
    #[param(example = "EUR,USD,¥")]
    pub output_currency: Option<String>,
}

/// The echoed request half of a conversion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionInput {
    #[schema(value_type = f64, example = 10.5)]
    pub amount: Decimal,
    #[schema(value_type = String, example = "GBP")]
    pub currency: CurrencyCode,
}

/// Response of `GET /currency_converter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResponse {
    pub input: ConversionInput,
    /// Converted amounts, rounded half-up to two decimals.
    #[schema(value_type = std::collections::BTreeMap<String, f64>, example = json!({"EUR": 11.72, "CZK": 297.85}))]
    pub output: ConversionResult,
}

/// Error body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    #[schema(example = "Unknown currency XYZ. Please, revisit your request (or visit `/supported_currencies` for list of supported currencies).")]
    pub error: String,
    /// HTTP status code
    #[schema(example = 400)]
    pub code: u16,
}
