//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use converter_types::{
    AppError, ConversionInput, ConversionResponse, ConverterError, ErrorResponse,
    RateProvider, SupportedSymbols,
};

use super::params::{
    convert_params, parse_amount, parse_input_currency, parse_output_currencies,
};
use crate::ConverterService;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: ConverterService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<ConverterError> for ApiError {
    fn from(err: ConverterError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            tracing::warn!("{}", self.0);
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!("{}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = ErrorResponse {
            error: self.0.display_message(),
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List every currency the provider supports.
#[tracing::instrument(skip(state))]
pub async fn supported_currencies<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<Json<SupportedSymbols>, ApiError> {
    let symbols = state.service.supported_currencies().await?;
    Ok(Json(SupportedSymbols::clone(&symbols)))
}

/// Convert an amount from one currency into one or more others.
/// A repeated query parameter resolves to its first value.
#[tracing::instrument(skip(state))]
pub async fn convert<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ConversionResponse>, ApiError> {
    let params = convert_params(pairs);
    let amount = parse_amount(params.amount.as_deref())?;
    let input = parse_input_currency(params.input_currency.as_deref())?;
    let outputs = parse_output_currencies(params.output_currency.as_deref())?;

    let output = state.service.convert(amount, &input, &outputs).await?;
    tracing::debug!(outputs = output.len(), "Conversion complete");

    Ok(Json(ConversionResponse {
        input: ConversionInput {
            amount,
            currency: input,
        },
        output,
    }))
}
