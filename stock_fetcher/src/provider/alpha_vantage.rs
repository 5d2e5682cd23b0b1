//! Alpha Vantage adapter.
//!
//! Quotes come from `function=GLOBAL_QUOTE`, a nested object keyed by numbered
//! labels (`"05. price"`, `"09. change"`, `"10. change percent"`) whose values
//! are strings. Errors and throttling arrive as HTTP 200 with an
//! `"Error Message"`, `"Note"` or `"Information"` field instead of the quote.
//!
//! Free-tier keys allow very few calls per minute; there is no time-series
//! support here.
use std::sync::Arc;

use log::warn;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::ProviderError;
use crate::provider::{MarketDataProvider, ProviderKind, ProviderResponse, RawQuote};
use crate::transport::HttpTransport;

/// Production API root.
pub const BASE_URL: &str = "https://www.alphavantage.co/query";

#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "09. change")]
    change: Option<String>,
    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

impl GlobalQuoteResponse {
    /// First provider-signalled problem, if any.
    fn api_message(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }
}

/// Alpha Vantage market-data provider.
pub struct AlphaVantageProvider {
    transport: Arc<dyn HttpTransport>,
    api_key: SecretString,
    base_url: String,
}

impl AlphaVantageProvider {
    /// Creates a provider pointed at the production API.
    pub fn new(transport: Arc<dyn HttpTransport>, api_key: SecretString) -> Self {
        Self {
            transport,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Overrides the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Decodes a `GLOBAL_QUOTE` body.
    pub fn decode_quote(body: &str) -> Result<ProviderResponse, ProviderError> {
        let response: GlobalQuoteResponse = serde_json::from_str(body)?;

        if let Some(message) = response.api_message() {
            return Ok(ProviderResponse::Rejected(message.to_string()));
        }

        let Some(quote) = response.global_quote else {
            return Ok(ProviderResponse::Empty);
        };
        let Some(price) = quote.price.as_deref() else {
            return Ok(ProviderResponse::Empty);
        };

        let parsed = (
            parse_number(price),
            parse_number(quote.change.as_deref().unwrap_or("0")),
            parse_number(quote.change_percent.as_deref().unwrap_or("0%")),
        );
        match parsed {
            (Some(price), Some(change), Some(change_percent)) if price > 0.0 => {
                Ok(ProviderResponse::Success(RawQuote {
                    price,
                    change,
                    change_percent,
                }))
            }
            (Some(_), Some(_), Some(_)) => Ok(ProviderResponse::Empty),
            _ => {
                warn!("Alpha Vantage returned unreadable numbers: {:?}", quote);
                Ok(ProviderResponse::Rejected(format!(
                    "unreadable quote values (price {:?})",
                    price
                )))
            }
        }
    }
}

/// Parses `"123.4500"` or `"-0.9741%"`. `inf` and `NaN` count as unreadable.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .trim_end_matches('%')
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
}

impl MarketDataProvider for AlphaVantageProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::AlphaVantage
    }

    fn fetch_quote(&self, symbol: &str) -> Result<ProviderResponse, ProviderError> {
        let query = [
            ("function", "GLOBAL_QUOTE"),
            ("symbol", symbol),
            ("apikey", self.api_key.expose_secret()),
        ];
        let body = self.transport.get(&self.base_url, &query)?;
        Self::decode_quote(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_quote_is_success() {
        let body = r#"{
            "Global Quote": {
                "01. symbol": "IBM",
                "05. price": "231.2300",
                "07. latest trading day": "2024-10-15",
                "09. change": "-2.2500",
                "10. change percent": "-0.9636%"
            }
        }"#;
        assert_eq!(
            AlphaVantageProvider::decode_quote(body).unwrap(),
            ProviderResponse::Success(RawQuote {
                price: 231.23,
                change: -2.25,
                change_percent: -0.9636,
            })
        );
    }

    #[test]
    fn rate_limit_note_is_rejected() {
        let body = r#"{"Note":"Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."}"#;
        assert!(matches!(
            AlphaVantageProvider::decode_quote(body).unwrap(),
            ProviderResponse::Rejected(message) if message.contains("call frequency")
        ));
    }

    #[test]
    fn information_and_error_message_are_rejected() {
        for body in [
            r#"{"Information":"The **demo** API key is for demo purposes only."}"#,
            r#"{"Error Message":"Invalid API call."}"#,
        ] {
            assert!(matches!(
                AlphaVantageProvider::decode_quote(body).unwrap(),
                ProviderResponse::Rejected(_)
            ));
        }
    }

    #[test]
    fn empty_global_quote_is_empty() {
        assert_eq!(
            AlphaVantageProvider::decode_quote(r#"{"Global Quote": {}}"#).unwrap(),
            ProviderResponse::Empty
        );
        assert_eq!(
            AlphaVantageProvider::decode_quote("{}").unwrap(),
            ProviderResponse::Empty
        );
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        for body in [
            r#"{"Global Quote": {"05. price": "inf", "09. change": "NaN", "10. change percent": "1%"}}"#,
            r#"{"Global Quote": {"05. price": "12.5", "09. change": "-infinity", "10. change percent": "1%"}}"#,
            r#"{"Global Quote": {"05. price": "12.5", "09. change": "0.1", "10. change percent": "NaN%"}}"#,
        ] {
            assert!(matches!(
                AlphaVantageProvider::decode_quote(body).unwrap(),
                ProviderResponse::Rejected(_)
            ));
        }
    }

    #[test]
    fn garbage_numbers_are_rejected() {
        let body = r#"{"Global Quote": {"05. price": "n/a", "09. change": "1", "10. change percent": "1%"}}"#;
        assert!(matches!(
            AlphaVantageProvider::decode_quote(body).unwrap(),
            ProviderResponse::Rejected(_)
        ));
    }
}
