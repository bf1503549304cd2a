//! Fixer HTTP client.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, header};

use converter_types::{
    CacheValidator, CurrencyCode, ProviderError, RateProvider, RawRates, SymbolsFetch,
};

use crate::FixerConfig;
use crate::envelope::Envelope;

/// Stateless Fixer API client.
///
/// Attaches the access key to every call and maps Fixer's HTTP and envelope
/// semantics onto `SymbolsFetch` / `ProviderError`. Never retries.
pub struct FixerClient {
    config: FixerConfig,
    http: Client,
}

impl FixerClient {
    /// Creates a new client with the configured timeout.
    pub fn new(config: FixerConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &FixerConfig {
        &self.config
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.http
            .get(url)
            .query(&[("access_key", self.config.api_key.as_str())])
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> Result<Response, ProviderError> {
        request.send().await.map_err(|e| ProviderError::Transport {
            url: url.to_string(),
            message: e.without_url().to_string(),
        })
    }

    async fn read_envelope(&self, url: &str, response: Response) -> Result<Envelope, ProviderError> {
        let body = response.bytes().await.map_err(|e| ProviderError::Transport {
            url: url.to_string(),
            message: e.without_url().to_string(),
        })?;
        Envelope::parse(url, &body)
    }
}

fn unexpected_status(url: &str, status: StatusCode) -> ProviderError {
    ProviderError::Http {
        url: url.to_string(),
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

fn header_value(response: &Response, name: header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

#[async_trait]
impl RateProvider for FixerClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_supported_symbols(
        &self,
        validator: Option<&CacheValidator>,
    ) -> Result<SymbolsFetch, ProviderError> {
        let url = self.config.symbols_url.as_str();

        let mut request = self.get(url);
        if let Some(validator) = validator {
            if let Some(etag) = &validator.etag {
                request = request.header(header::IF_NONE_MATCH, etag);
            }
            if let Some(last_modified) = &validator.last_modified {
                request = request.header(header::IF_MODIFIED_SINCE, last_modified);
            }
        }

        let response = self.send(url, request).await?;
        match response.status() {
            StatusCode::OK => {
                let validator = CacheValidator::new(
                    header_value(&response, header::ETAG),
                    header_value(&response, header::DATE),
                );
                let symbols = self.read_envelope(url, response).await?.into_symbols(url)?;
                tracing::debug!(count = symbols.len(), "Fetched supported symbols");
                Ok(SymbolsFetch::Fresh { symbols, validator })
            }
            StatusCode::NOT_MODIFIED => Ok(SymbolsFetch::Unchanged),
            status => Err(unexpected_status(url, status)),
        }
    }

    #[tracing::instrument(skip(self), fields(count = symbols.len()))]
    async fn fetch_rates(&self, symbols: &[CurrencyCode]) -> Result<RawRates, ProviderError> {
        let url = self.config.latest_url.as_str();

        let mut request = self.get(url);
        if !symbols.is_empty() {
            let joined = symbols
                .iter()
                .map(CurrencyCode::as_str)
                .collect::<Vec<_>>()
                .join(",");
            request = request.query(&[("symbols", joined)]);
        }

        let response = self.send(url, request).await?;
        match response.status() {
            StatusCode::OK => self.read_envelope(url, response).await?.into_rates(url),
            status => Err(unexpected_status(url, status)),
        }
    }
}

