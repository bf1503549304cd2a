//! # Converter Client SDK
//!
//! A typed Rust client for the Currency Converter API.

use converter_types::{ConversionResponse, SupportedSymbols};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Currency Converter API client.
pub struct ConverterClient {
    base_url: String,
    http: Client,
}

impl ConverterClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists every supported currency code with its display name.
    pub async fn supported_currencies(&self) -> Result<SupportedSymbols, ClientError> {
        self.get("/supported_currencies", &[]).await
    }

    /// Converts `amount` of `from` into each of `to`.
    ///
    /// Currencies may be codes or single-character symbols. An empty `to`
    /// converts into every supported currency.
    pub async fn convert(
        &self,
        amount: Decimal,
        from: &str,
        to: &[&str],
    ) -> Result<ConversionResponse, ClientError> {
        let amount = amount.to_string();
        let outputs = to.join(",");
        let mut query = vec![("amount", amount.as_str()), ("input_currency", from)];
        if !outputs.is_empty() {
            query.push(("output_currency", outputs.as_str()));
        }
        self.get("/currency_converter", &query).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
