//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

pub(crate) mod handlers;
mod params;
mod rate_limit;
mod server;

pub use params::{DEFAULT_AMOUNT, DEFAULT_INPUT_CURRENCY};
pub use rate_limit::DEFAULT_REQUESTS_PER_MINUTE;
pub use server::HttpServer;
