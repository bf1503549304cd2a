//! Currency Symbol Translation Table
//!
//! Maps single-character currency glyphs (`£`, `€`, `$`, ...) to the
//! three-letter codes the rate provider understands. The table is declared
//! with a macro that generates the `CurrencySymbol` enum together with its
//! lookup functions, so the glyph and the code of an entry can never drift
//! apart.
//!
//! # Adding a New Symbol
//! Add a line to the `define_symbols!` invocation:
//! ```ignore
//! define_symbols! {
//!     // ... existing symbols ...
//!     Franc => ("₣", "CHF"),
//! }
//! ```
//!
//! # Example
//! ```
//! use currency_symbols::{CurrencySymbol, translate};
//!
//! assert_eq!(CurrencySymbol::from_glyph("£"), Some(CurrencySymbol::Pound));
//! assert_eq!(translate("€").unwrap(), "EUR");
//! // Anything that is not a single character passes through untouched.
//! assert_eq!(translate("CZK").unwrap(), "CZK");
//! ```

/// A single-character input that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency symbol: {symbol}")]
pub struct UnknownSymbol {
    pub symbol: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the symbol enum and its runtime lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define currency glyphs and the codes they stand for.
///
/// # Syntax
/// ```ignore
/// define_symbols! {
///     VariantName => ("GLYPH", "CODE"),
/// }
/// ```
#[macro_export]
macro_rules! define_symbols {
    (
        $(
            $name:ident => ($glyph:literal, $code:literal)
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
        pub enum CurrencySymbol {
            $(
                #[serde(rename = $glyph)]
                $name
            ),*
        }

        impl CurrencySymbol {
            pub fn glyph(&self) -> &'static str {
                match self {
                    $(CurrencySymbol::$name => $glyph),*
                }
            }

            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencySymbol::$name => $code),*
                }
            }

            pub fn from_glyph(glyph: &str) -> Option<CurrencySymbol> {
                match glyph {
                    $($glyph => Some(CurrencySymbol::$name),)*
                    _ => None,
                }
            }

            pub fn all() -> &'static [CurrencySymbol] {
                &[$(CurrencySymbol::$name),*]
            }
        }

        impl std::fmt::Display for CurrencySymbol {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.glyph())
            }
        }

        impl std::str::FromStr for CurrencySymbol {
            type Err = UnknownSymbol;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                CurrencySymbol::from_glyph(s).ok_or_else(|| UnknownSymbol {
                    symbol: s.to_string(),
                })
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// SYMBOL DEFINITIONS - Add new glyphs here!
// ─────────────────────────────────────────────────────────────────────────────

define_symbols! {
    Euro => ("€", "EUR"),
    Pound => ("£", "GBP"),
    Ruble => ("₽", "RUB"),
    Lira => ("₺", "TRY"),
    Hryvnia => ("₴", "UAH"),
    Shekel => ("₪", "ILS"),
    Naira => ("₦", "NGN"),
    Dollar => ("$", "USD"),
    Taka => ("৳", "BDT"),
    Yuan => ("元", "CNY"),
    Rupee => ("₹", "INR"),
    Yen => ("¥", "JPY"),
    Peso => ("₱", "PHP"),
    Won => ("₩", "KRW"),
    Baht => ("฿", "THB"),
    Dong => ("₫", "VND"),
    Bitcoin => ("₿", "BTC"),
}

/// Translates a raw currency parameter into a currency code.
///
/// Only single-character input is treated as a glyph. Anything longer (or
/// empty) is returned as-is and left for the caller to validate.
pub fn translate(raw: &str) -> Result<String, UnknownSymbol> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(_), None) => raw
            .parse::<CurrencySymbol>()
            .map(|symbol| symbol.code().to_string()),
        _ => Ok(raw.to_string()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
