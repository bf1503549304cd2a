//! # Converter Hex
//!
//! Application service layer and HTTP adapter for the currency converter.
//!
//! ## Architecture
//!
//! - `service/` - Symbol cache, rate resolution and amount conversion
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi` - Generated API description
//!
//! The service is generic over `P: RateProvider`, allowing
//! different upstream providers to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::{ConverterService, SymbolCache};
