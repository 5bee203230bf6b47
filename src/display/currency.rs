//! Currency display symbols
//!
//! Currency is a label only. No conversion happens anywhere in the crate.

use serde::{Deserialize, Serialize};

/// Symbol used for any code outside the supported set
pub const DEFAULT_SYMBOL: &str = "$";

/// Supported display currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Inr,
}

impl Currency {
    /// Look up a currency by its exact ISO code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "INR" => Some(Currency::Inr),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Inr => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Inr => "₹",
        }
    }
}

/// Display glyph for a currency code, `$` when the code is not recognized
pub fn currency_symbol(code: &str) -> &'static str {
    Currency::from_code(code)
        .map(|c| c.symbol())
        .unwrap_or(DEFAULT_SYMBOL)
}

/// Format an amount with its currency symbol and two decimals, e.g. `€1234.50`
pub fn format_amount(code: &str, value: f64) -> String {
    format!("{}{}", currency_symbol(code), to_fixed_2(value))
}

/// Two-decimal rendering as a browser's `toFixed(2)` shows it
///
/// Exact halves round away from zero (`0.125` -> `0.13`), non-finite values
/// print as `Infinity`/`-Infinity`/`NaN`, and negative zero prints as `0.00`.
pub fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0.00".to_string();
    }

    // A tie at the third decimal is only representable for multiples of 1/8,
    // where `value * 100` is exact
    let scaled = value.abs() * 100.0;
    if (value * 8.0).fract() == 0.0 && scaled.fract() == 0.5 {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{:.2}", sign, (scaled.floor() + 1.0) / 100.0);
    }

    format!("{:.2}", value)
}

/// Headline line shown above the charts
pub fn headline(code: &str, total_projected_return: f64) -> String {
    format!("Projected Returns: {}", format_amount(code, total_projected_return))
}
