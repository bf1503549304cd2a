//! # Converter Types
//!
//! Domain types and port traits for the currency converter service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, symbol and rate sets)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Provider, core and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CacheValidator, ConversionResult, CurrencyCode, RawRates, ResolvedRates, SupportedSymbols,
};
pub use dto::*;
pub use error::{AppError, ConverterError, ProviderError};
pub use ports::{RateProvider, SymbolsFetch};
