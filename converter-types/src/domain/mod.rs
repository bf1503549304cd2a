//! Domain models for the converter service.

pub mod currency;
pub mod rates;
pub mod validator;

pub use currency::{CurrencyCode, SupportedSymbols};
pub use rates::{ConversionResult, RawRates, ResolvedRates};
pub use validator::CacheValidator;
