//! Display-ready quote and history types.
//!
//! A `Quote` carries formatted strings rather than raw numbers so that the
//! presentation layer can render it without further processing. Numbers are
//! formatted with two decimals; the percent change also gets a trailing `%`.

use serde::{Deserialize, Serialize};

/// Formatted value used for every numeric field of an unknown quote.
pub const ZERO_VALUE: &str = "0.00";
/// Formatted percent change of an unknown quote.
pub const ZERO_PERCENT: &str = "0.00%";

/// Point-in-time snapshot of price and change for one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Upper-cased ticker symbol.
    pub symbol: String,
    /// Current price, 2 decimals.
    pub price: String,
    /// Absolute change, 2 decimals, may be negative.
    pub change: String,
    /// Percent change, 2 decimals followed by `%`.
    pub change_percent: String,
}

impl Quote {
    /// Builds a quote from raw provider numbers.
    pub fn from_values(symbol: &str, price: f64, change: f64, change_percent: f64) -> Self {
        Quote {
            symbol: symbol.to_uppercase(),
            price: format!("{:.2}", price),
            change: format!("{:.2}", change),
            change_percent: format!("{:.2}%", change_percent),
        }
    }

    /// Zeroed quote used whenever data could not be obtained.
    pub fn unknown(symbol: &str) -> Self {
        Quote {
            symbol: symbol.to_uppercase(),
            price: ZERO_VALUE.to_string(),
            change: ZERO_VALUE.to_string(),
            change_percent: ZERO_PERCENT.to_string(),
        }
    }

    /// `true` if every numeric field is zero, i.e. the fallback quote.
    pub fn is_unknown(&self) -> bool {
        self.price == ZERO_VALUE && self.change == ZERO_VALUE && self.change_percent == ZERO_PERCENT
    }

    /// `true` when the change is below zero. Unparsable values count as non-negative.
    pub fn is_negative(&self) -> bool {
        self.change.parse::<f64>().map(|v| v < 0.0).unwrap_or(false)
    }
}

/// One close price of a historical series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPoint {
    /// Unix epoch seconds.
    pub timestamp_seconds: i64,
    /// Close price.
    pub close: f64,
}

impl HistoricalPoint {
    /// Creates a point from a unix timestamp and a close price.
    pub fn new(timestamp_seconds: i64, close: f64) -> Self {
        Self {
            timestamp_seconds,
            close,
        }
    }
}
