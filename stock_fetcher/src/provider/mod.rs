//! Market-data provider abstraction.
//!
//! Each provider adapter turns its vendor-specific payload into the shapes
//! below; the quote and history clients never look at vendor JSON. Exactly one
//! provider is active per process, selected with [`ProviderKind`].
pub mod alpha_vantage;
pub mod finnhub;

use std::sync::Arc;
use std::time::Duration;

use clap::ValueEnum;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use stock_common::Resolution;
use strum_macros::{Display, EnumString};

use crate::error::ProviderError;
use crate::transport::HttpTransport;

pub use alpha_vantage::AlphaVantageProvider;
pub use finnhub::FinnhubProvider;

/// Status value of a successful time-series response.
pub const SUCCESS_STATUS: &str = "ok";

/// Supported providers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ProviderKind {
    /// Finnhub: `/quote` and `/stock/candle`.
    Finnhub,
    /// Alpha Vantage: `GLOBAL_QUOTE` only.
    AlphaVantage,
}

impl ProviderKind {
    /// Production endpoint root.
    pub fn default_base_url(self) -> &'static str {
        match self {
            ProviderKind::Finnhub => finnhub::BASE_URL,
            ProviderKind::AlphaVantage => alpha_vantage::BASE_URL,
        }
    }

    /// Delay between consecutive requests that keeps free-tier keys under the limit.
    pub fn default_pacing(self) -> Duration {
        match self {
            ProviderKind::Finnhub => Duration::from_millis(200),
            ProviderKind::AlphaVantage => Duration::from_millis(1000),
        }
    }

    /// Builds the adapter for this provider.
    pub fn build(
        self,
        transport: Arc<dyn HttpTransport>,
        api_key: SecretString,
        base_url: Option<String>,
    ) -> Arc<dyn MarketDataProvider> {
        let base_url = base_url.unwrap_or_else(|| self.default_base_url().to_string());
        match self {
            ProviderKind::Finnhub => {
                Arc::new(FinnhubProvider::new(transport, api_key).with_base_url(base_url))
            }
            ProviderKind::AlphaVantage => {
                Arc::new(AlphaVantageProvider::new(transport, api_key).with_base_url(base_url))
            }
        }
    }
}

/// Provider numbers for one symbol, before formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawQuote {
    /// Current price.
    pub price: f64,
    /// Absolute change since previous close.
    pub change: f64,
    /// Percent change since previous close, without the `%`.
    pub change_percent: f64,
}

impl RawQuote {
    /// `true` when every number can be formatted as a price.
    pub fn is_finite(&self) -> bool {
        self.price.is_finite() && self.change.is_finite() && self.change_percent.is_finite()
    }
}

/// Decoded outcome of a quote request.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResponse {
    /// Usable quote.
    Success(RawQuote),
    /// The provider answered but signalled an error, a rate-limit note, or
    /// returned values that could not be read.
    Rejected(String),
    /// The provider had no data (unknown symbol, zero price, empty object).
    Empty,
}

/// Parallel time-series arrays as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandleSeries {
    /// Provider status field.
    pub status: String,
    /// Unix seconds, provider order.
    pub timestamps: Vec<i64>,
    /// Close prices, provider order.
    pub closes: Vec<f64>,
}

impl CandleSeries {
    /// `true` when the status is the provider's success sentinel.
    pub fn is_ok(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// A market-data vendor behind a blocking interface.
pub trait MarketDataProvider: Send + Sync {
    /// Which vendor this is.
    fn kind(&self) -> ProviderKind;

    /// Fetches and decodes a quote for an already upper-cased symbol.
    fn fetch_quote(&self, symbol: &str) -> Result<ProviderResponse, ProviderError>;

    /// Fetches a close-price series. Providers without a time-series endpoint
    /// keep the default.
    fn fetch_candles(
        &self,
        _symbol: &str,
        _resolution: Resolution,
        _from: i64,
        _to: i64,
    ) -> Result<CandleSeries, ProviderError> {
        Err(ProviderError::Unsupported("historical data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_from_cli_names() {
        assert_eq!("finnhub".parse::<ProviderKind>().unwrap(), ProviderKind::Finnhub);
        assert_eq!(
            "alpha-vantage".parse::<ProviderKind>().unwrap(),
            ProviderKind::AlphaVantage
        );
        assert_eq!(ProviderKind::AlphaVantage.to_string(), "alpha-vantage");
    }

    #[test]
    fn pacing_reflects_rate_limits() {
        assert_eq!(ProviderKind::Finnhub.default_pacing(), Duration::from_millis(200));
        assert_eq!(
            ProviderKind::AlphaVantage.default_pacing(),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn candle_status_sentinel() {
        let series = CandleSeries {
            status: "no_data".to_string(),
            ..Default::default()
        };
        assert!(!series.is_ok());
    }
}
