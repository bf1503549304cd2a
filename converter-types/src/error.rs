//! Error types for the converter service.

use rust_decimal::Decimal;

use crate::domain::CurrencyCode;

/// Upstream rate provider failures.
///
/// The `Display` text is the operator-facing log line. Clients never see it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered `200` with `success: false`.
    #[error("An error occurred when requesting the Fixer API. URL: {url}, CODE: {code}, INFO: {info}")]
    Api { url: String, code: i64, info: String },

    /// The provider answered with an unexpected HTTP status.
    #[error("An error occurred when requesting the Fixer API. URL: {url}, STATUS: {status}, REASON: {reason}")]
    Http {
        url: String,
        status: u16,
        reason: String,
    },

    /// The request never produced a response (connect error, timeout).
    #[error("Could not reach the Fixer API. URL: {url}, ERROR: {message}")]
    Transport { url: String, message: String },

    /// The provider broke its own response contract.
    #[error("Malformed response from the Fixer API. URL: {url}, ERROR: {message}")]
    Malformed { url: String, message: String },

    /// A well-formed response that is impossible given the request.
    #[error("The Fixer API violated its contract: {0}")]
    Contract(String),
}

/// Errors produced by the rate resolution core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConverterError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(CurrencyCode),

    #[error("Amount {amount} converted to {currency} does not fit a decimal")]
    AmountOutOfRange {
        amount: Decimal,
        currency: CurrencyCode,
    },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes: everything but `Provider` is the
/// client's fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Unknown currency symbol: {0}")]
    UnknownSymbol(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(CurrencyCode),

    #[error("Could not convert string {0} to a number")]
    InvalidAmount(String),

    #[error("Amount {amount} converted to {currency} is out of range")]
    AmountOutOfRange {
        amount: Decimal,
        currency: CurrencyCode,
    },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AppError {
    /// Message shown to the API caller.
    pub fn display_message(&self) -> String {
        match self {
            AppError::UnknownSymbol(symbol) => {
                format!("Unknown currency symbol {symbol}. Please, revisit your request.")
            }
            AppError::UnknownCurrency(code) => format!(
                "Unknown currency {code}. Please, revisit your request (or visit \
                 `/supported_currencies` for list of supported currencies)."
            ),
            AppError::InvalidAmount(amount) => {
                format!("Invalid parameter `amount`. {amount} is not a number")
            }
            AppError::AmountOutOfRange { amount, .. } => {
                format!("Invalid parameter `amount`. {amount} is too large to convert")
            }
            AppError::Provider(_) => {
                "An error occurred when processing your request. Please, try it later.".into()
            }
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, AppError::Provider(_))
    }
}

impl From<ConverterError> for AppError {
    fn from(err: ConverterError) -> Self {
        match err {
            ConverterError::UnknownCurrency(code) => AppError::UnknownCurrency(code),
            ConverterError::AmountOutOfRange { amount, currency } => {
                AppError::AmountOutOfRange { amount, currency }
            }
            ConverterError::Provider(e) => AppError::Provider(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_api_log_line() {
        let err = ProviderError::Api {
            url: "http://data.fixer.io/api/symbols".into(),
            code: 123,
            info: "Testing error info".into(),
        };
        assert_eq!(
            err.to_string(),
            "An error occurred when requesting the Fixer API. URL: http://data.fixer.io/api/symbols, CODE: 123, INFO: Testing error info"
        );
    }

    #[test]
    fn test_unknown_currency_display_message() {
        let err = AppError::from(ConverterError::UnknownCurrency("INVALID_CURRENCY".into()));
        assert!(err.is_client_error());
        assert_eq!(
            err.display_message(),
            "Unknown currency INVALID_CURRENCY. Please, revisit your request (or visit \
             `/supported_currencies` for list of supported currencies)."
        );
        assert_eq!(err.to_string(), "Unknown currency: INVALID_CURRENCY");
    }

    #[test]
    fn test_provider_error_hides_details_from_client() {
        let err = AppError::from(ConverterError::Provider(ProviderError::Http {
            url: "http://x".into(),
            status: 502,
            reason: "Bad Gateway".into(),
        }));
        assert!(!err.is_client_error());
        assert!(!err.display_message().contains("502"));
        assert!(err.to_string().contains("STATUS: 502"));
    }

    #[test]
    fn test_amount_out_of_range_message() {
        let err = AppError::from(ConverterError::AmountOutOfRange {
            amount: Decimal::MAX,
            currency: "CZK".into(),
        });
        assert!(err.is_client_error());
        assert_eq!(
            err.display_message(),
            format!("Invalid parameter `amount`. {} is too large to convert", Decimal::MAX)
        );
    }

    #[test]
    fn test_invalid_amount_message() {
        let err = AppError::InvalidAmount("aasdfcxzcv".into());
        assert_eq!(
            err.display_message(),
            "Invalid parameter `amount`. aasdfcxzcv is not a number"
        );
    }
}
