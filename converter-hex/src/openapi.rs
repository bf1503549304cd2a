//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use converter_types::dto::{ConversionInput, ConversionResponse, ConvertParams, ErrorResponse};
use currency_symbols::CurrencySymbol;
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List supported currencies
#[utoipa::path(
    get,
    path = "/supported_currencies",
    tag = "currencies",
    responses(
        (status = 200, description = "Currency code to display name", body = inline(std::collections::BTreeMap<String, String>), example = json!({"CZK": "Czech Republic Koruna", "EUR": "Euro"})),
        (status = 500, description = "Rate provider failure", body = ErrorResponse)
    )
)]
async fn supported_currencies() {}

/// Convert an amount between currencies
#[utoipa::path(
    get,
    path = "/currency_converter",
    tag = "currencies",
    params(ConvertParams),
    responses(
        (status = 200, description = "Converted amounts", body = ConversionResponse),
        (status = 400, description = "Unknown currency or symbol, or invalid amount", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "Rate provider failure", body = ErrorResponse)
    )
)]
async fn convert() {}

/// OpenAPI documentation for the Currency Converter API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Converter API",
        version = "1.0.0",
        description = "Converts amounts between currencies using Fixer.io exchange rates.\n\nCurrencies may be given as three-letter codes (`GBP`) or single-character symbols (`£`).",
        license(name = "MIT"),
    ),
    paths(health, supported_currencies, convert),
    components(schemas(ConversionInput, ConversionResponse, ErrorResponse, CurrencySymbol)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "currencies", description = "Currency listing and conversion"),
    )
)]
pub struct ApiDoc;
