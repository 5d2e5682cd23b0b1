//! Historical close-price retrieval for a single symbol.
//!
//! Any failure (transport, decode, non-"ok" status, provider without a
//! time-series endpoint) produces an empty series; callers treat that as
//! "no data". Timestamps and closes are paired by index in provider order and
//! truncated to the shorter array.
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, error, warn};
use stock_common::{HistoricalPoint, Resolution, TimeRange};

use crate::provider::MarketDataProvider;

/// Single-shot time-series fetcher. No pacing, no retry.
pub struct HistoricalClient {
    provider: Arc<dyn MarketDataProvider>,
}

impl HistoricalClient {
    /// Creates a client on top of the active provider.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Close prices for `symbol` between `from` and `to` (unix seconds).
    pub fn get_historical_data(
        &self,
        symbol: &str,
        resolution: Resolution,
        from: i64,
        to: i64,
    ) -> Vec<HistoricalPoint> {
        let symbol = symbol.to_uppercase();

        let series = match self.provider.fetch_candles(&symbol, resolution, from, to) {
            Ok(series) => series,
            Err(e) => {
                error!("Error fetching historical data for {}: {}", symbol, e);
                return Vec::new();
            }
        };

        if !series.is_ok() {
            warn!(
                "Historical data for {} unavailable: status {:?}",
                symbol, series.status
            );
            return Vec::new();
        }

        if series.timestamps.len() != series.closes.len() {
            warn!(
                "Historical data for {} has {} timestamps but {} closes; truncating",
                symbol,
                series.timestamps.len(),
                series.closes.len()
            );
        }

        let points: Vec<HistoricalPoint> = series
            .timestamps
            .into_iter()
            .zip(series.closes)
            .map(|(timestamp, close)| HistoricalPoint::new(timestamp, close))
            .collect();
        debug!("{} historical points for {} ({})", points.len(), symbol, resolution);
        points
    }

    /// Series for a chart window ending at `now`.
    pub fn get_history_for_range(
        &self,
        symbol: &str,
        range: TimeRange,
        now: DateTime<Utc>,
    ) -> Vec<HistoricalPoint> {
        self.get_historical_data(
            symbol,
            range.resolution(),
            range.from_timestamp(now),
            now.timestamp(),
        )
    }
}
