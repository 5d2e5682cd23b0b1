//! Finnhub adapter.
//!
//! - quotes via `/quote`, fields `c` (price), `d` (change), `dp` (percent change)
//! - history via `/stock/candle`, parallel arrays `t` and `c` plus status `s`
//!
//! Finnhub answers unknown symbols with a zero price rather than an error, so a
//! non-positive `c` is treated as "no data".
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use stock_common::Resolution;

use crate::error::ProviderError;
use crate::provider::{CandleSeries, MarketDataProvider, ProviderKind, ProviderResponse, RawQuote};
use crate::transport::HttpTransport;

/// Production API root.
pub const BASE_URL: &str = "https://finnhub.io/api/v1";

/// Response from `/quote`. Other fields (`h`, `l`, `o`, `pc`, `t`) are ignored.
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    c: Option<f64>,
    d: Option<f64>,
    dp: Option<f64>,
    error: Option<String>,
}

/// Response from `/stock/candle`. Only status, timestamps and closes are kept.
#[derive(Debug, Deserialize)]
struct CandleResponse {
    s: String,
    #[serde(default)]
    t: Vec<i64>,
    #[serde(default)]
    c: Vec<f64>,
}

/// Finnhub market-data provider.
pub struct FinnhubProvider {
    transport: Arc<dyn HttpTransport>,
    api_key: SecretString,
    base_url: String,
}

impl FinnhubProvider {
    /// Creates a provider pointed at the production API.
    pub fn new(transport: Arc<dyn HttpTransport>, api_key: SecretString) -> Self {
        Self {
            transport,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Overrides the API root (e.g., for a proxy or a test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Decodes a `/quote` body.
    pub fn decode_quote(body: &str) -> Result<ProviderResponse, ProviderError> {
        let response: QuoteResponse = serde_json::from_str(body)?;

        if let Some(message) = response.error {
            return Ok(ProviderResponse::Rejected(message));
        }

        match response.c {
            Some(price) if price.is_finite() && price > 0.0 => {
                Ok(ProviderResponse::Success(RawQuote {
                    price,
                    change: finite_or_zero(response.d),
                    change_percent: finite_or_zero(response.dp),
                }))
            }
            _ => Ok(ProviderResponse::Empty),
        }
    }

    /// Decodes a `/stock/candle` body.
    pub fn decode_candles(body: &str) -> Result<CandleSeries, ProviderError> {
        let response: CandleResponse = serde_json::from_str(body)?;
        Ok(CandleSeries {
            status: response.s,
            timestamps: response.t,
            closes: response.c,
        })
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

impl MarketDataProvider for FinnhubProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Finnhub
    }

    fn fetch_quote(&self, symbol: &str) -> Result<ProviderResponse, ProviderError> {
        let query = [("symbol", symbol), ("token", self.api_key.expose_secret())];
        let body = self.transport.get(&self.endpoint("/quote"), &query)?;
        Self::decode_quote(&body)
    }

    fn fetch_candles(
        &self,
        symbol: &str,
        resolution: Resolution,
        from: i64,
        to: i64,
    ) -> Result<CandleSeries, ProviderError> {
        let resolution = resolution.to_string();
        let from = from.to_string();
        let to = to.to_string();
        let query = [
            ("symbol", symbol),
            ("resolution", resolution.as_str()),
            ("from", from.as_str()),
            ("to", to.as_str()),
            ("token", self.api_key.expose_secret()),
        ];
        let body = self.transport.get(&self.endpoint("/stock/candle"), &query)?;
        Self::decode_candles(&body)
    }
}
