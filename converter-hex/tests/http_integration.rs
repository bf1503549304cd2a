//! Integration tests for the HTTP adapter.
//!
//! These tests drive the full router (metrics, rate limiting, tracing) with
//! an in-process provider so no network access is needed.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::connect_info::MockConnectInfo,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use tower::ServiceExt;

use converter_hex::{ConverterService, inbound::HttpServer};
use converter_types::{
    CacheValidator, CurrencyCode, ProviderError, RateProvider, RawRates, SupportedSymbols,
    SymbolsFetch,
};

/// Provider backed by fixed data, optionally failing every call.
#[derive(Clone, Default)]
struct StaticProvider {
    failing: bool,
    rates_calls: Arc<Mutex<Vec<Vec<CurrencyCode>>>>,
}

impl StaticProvider {
    fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn failure() -> ProviderError {
        ProviderError::Api {
            url: "http://fixer.test/latest".into(),
            code: 101,
            info: "No API Key was specified".into(),
        }
    }
}

#[async_trait]
impl RateProvider for StaticProvider {
    async fn fetch_supported_symbols(
        &self,
        _validator: Option<&CacheValidator>,
    ) -> Result<SymbolsFetch, ProviderError> {
        if self.failing {
            return Err(Self::failure());
        }
        let symbols: SupportedSymbols = [
            ("USD", "United States Dollar"),
            ("CZK", "Czech Republic Koruna"),
            ("GBP", "British Pound Sterling"),
            ("EUR", "Euro"),
        ]
        .into_iter()
        .map(|(c, n)| (CurrencyCode::from(c), n.to_string()))
        .collect();
        Ok(SymbolsFetch::Fresh {
            symbols,
            validator: CacheValidator::new(Some("etag-1".into()), None),
        })
    }

    async fn fetch_rates(&self, symbols: &[CurrencyCode]) -> Result<RawRates, ProviderError> {
        self.rates_calls.lock().unwrap().push(symbols.to_vec());
        if self.failing {
            return Err(Self::failure());
        }
        Ok([
            ("USD", dec!(1.138)),
            ("CZK", dec!(25.4183)),
            ("GBP", dec!(0.896032)),
            ("EUR", dec!(1)),
        ]
        .into_iter()
        .map(|(c, r)| (CurrencyCode::from(c), r))
        .collect())
    }
}

fn app(provider: StaticProvider) -> axum::Router {
    HttpServer::new(ConverterService::new(provider)).router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app.oneshot(get(uri)).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = send(app(StaticProvider::default()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_supported_currencies() {
    let (status, body) = send(app(StaticProvider::default()), "/supported_currencies").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["EUR"], "Euro");
    assert_eq!(body["CZK"], "Czech Republic Koruna");
    assert_eq!(body.as_object().unwrap().len(), 4);
}

#[tokio::test]
async fn test_convert_to_selected_outputs() {
    let provider = StaticProvider::default();
    let calls = provider.rates_calls.clone();

    let (status, body) = send(
        app(provider),
        "/currency_converter?amount=10&input_currency=EUR&output_currency=USD,GBP,CZK",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"], json!({ "amount": 10.0, "currency": "EUR" }));
    assert_eq!(
        body["output"],
        json!({ "USD": 11.38, "GBP": 8.96, "CZK": 254.18 })
    );

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let queried: Vec<&str> = calls[0].iter().map(CurrencyCode::as_str).collect();
    assert_eq!(queried, ["USD", "GBP", "CZK", "EUR"]);
}

#[tokio::test]
async fn test_convert_accepts_symbols() {
    // € -> EUR, $ -> USD
    let (status, body) = send(
        app(StaticProvider::default()),
        "/currency_converter?amount=10&input_currency=%E2%82%AC&output_currency=%24",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"]["currency"], "EUR");
    assert_eq!(body["output"], json!({ "USD": 11.38 }));
}

#[tokio::test]
async fn test_convert_defaults_to_one_czk_into_everything() {
    let provider = StaticProvider::default();
    let calls = provider.rates_calls.clone();

    let (status, body) = send(app(provider), "/currency_converter").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"], json!({ "amount": 1.0, "currency": "CZK" }));

    let output = body["output"].as_object().unwrap();
    assert_eq!(output.len(), 3);
    assert!(!output.contains_key("CZK"));
    assert_eq!(body["output"]["EUR"], json!(0.04));

    // No filter is sent when every currency is wanted
    assert!(calls.lock().unwrap()[0].is_empty());
}

#[tokio::test]
async fn test_duplicate_outputs_collapse() {
    let (status, body) = send(
        app(StaticProvider::default()),
        "/currency_converter?amount=10&input_currency=EUR&output_currency=USD,USD",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], json!({ "USD": 11.38 }));
}

#[tokio::test]
async fn test_unknown_currency_is_bad_request() {
    let provider = StaticProvider::default();
    let calls = provider.rates_calls.clone();

    let (status, body) = send(
        app(provider),
        "/currency_converter?input_currency=EUR&output_currency=USD,XYZ",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(
        body["error"],
        "Unknown currency XYZ. Please, revisit your request (or visit \
         `/supported_currencies` for list of supported currencies)."
    );
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_symbol_is_bad_request() {
    let (status, body) = send(
        app(StaticProvider::default()),
        "/currency_converter?input_currency=%25",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Unknown currency symbol %. Please, revisit your request."
    );
}

#[tokio::test]
async fn test_invalid_amount_is_bad_request() {
    let (status, body) = send(
        app(StaticProvider::default()),
        "/currency_converter?amount=aasdfcxzcv",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid parameter `amount`. aasdfcxzcv is not a number"
    );
}

#[tokio::test]
async fn test_repeated_parameter_uses_first_value() {
    let (status, body) = send(
        app(StaticProvider::default()),
        "/currency_converter?amount=1&amount=2&input_currency=EUR&output_currency=USD",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"], json!({ "amount": 1.0, "currency": "EUR" }));
    assert_eq!(body["output"], json!({ "USD": 1.14 }));
}

#[tokio::test]
async fn test_amount_too_large_is_bad_request() {
    let (status, body) = send(
        app(StaticProvider::default()),
        "/currency_converter?amount=79228162514264337593543950335&input_currency=EUR&output_currency=CZK",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(
        body["error"],
        "Invalid parameter `amount`. 79228162514264337593543950335 is too large to convert"
    );
}

#[tokio::test]
async fn test_provider_failure_is_server_error() {
    let (status, body) = send(app(StaticProvider::failing()), "/supported_currencies").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 500);
    assert_eq!(
        body["error"],
        "An error occurred when processing your request. Please, try it later."
    );

    let (status, _) = send(app(StaticProvider::failing()), "/currency_converter").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) = send(app(StaticProvider::default()), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/currency_converter"].is_object());
}

#[tokio::test]
async fn test_rate_limit_returns_429() {
    let app = HttpServer::with_rate_limit(ConverterService::new(StaticProvider::default()), 2)
        .router();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(get("/supported_currencies"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let (status, body) = send(app, "/supported_currencies").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], 429);
    assert_eq!(body["retry_after_seconds"], 60);
}

fn forwarded(uri: &str, client: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("X-Forwarded-For", client)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_rotating_forwarded_header_does_not_raise_allowance() {
    let app = HttpServer::with_rate_limit(ConverterService::new(StaticProvider::default()), 1)
        .router()
        .layer(MockConnectInfo(SocketAddr::from(([198, 51, 100, 4], 40000))));

    let mut allowed = 0;
    for i in 0..20 {
        let response = app
            .clone()
            .oneshot(forwarded("/supported_currencies", &format!("10.0.0.{i}")))
            .await
            .unwrap();
        if response.status() == StatusCode::OK {
            allowed += 1;
        }
    }

    assert_eq!(allowed, 1);
}

#[tokio::test]
async fn test_rate_limit_is_per_peer_address() {
    let app = HttpServer::with_rate_limit(ConverterService::new(StaticProvider::default()), 1)
        .router();
    let first = app
        .clone()
        .layer(MockConnectInfo(SocketAddr::from(([198, 51, 100, 4], 40000))));
    let second = app.layer(MockConnectInfo(SocketAddr::from(([198, 51, 100, 5], 40000))));

    let response = first.clone().oneshot(get("/supported_currencies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = first.oneshot(get("/supported_currencies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let response = second.oneshot(get("/supported_currencies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_trusted_proxy_keys_on_forwarded_client() {
    let app = HttpServer::with_rate_limit(ConverterService::new(StaticProvider::default()), 1)
        .trust_forwarded_for(true)
        .router()
        .layer(MockConnectInfo(SocketAddr::from(([10, 0, 0, 2], 40000))));

    for client in ["203.0.113.7", "203.0.113.8"] {
        let response = app
            .clone()
            .oneshot(forwarded("/supported_currencies", client))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(forwarded("/supported_currencies", "203.0.113.7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_health_bypasses_rate_limit() {
    let app = HttpServer::with_rate_limit(ConverterService::new(StaticProvider::default()), 1)
        .router();

    for _ in 0..5 {
        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
