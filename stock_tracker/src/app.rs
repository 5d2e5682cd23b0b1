//! The tracker: resolver plus quote and history clients on one provider.
//!
//! This is the surface a UI would call. Every operation resolves user text to
//! tickers first and then delegates to the fetcher, which never fails.
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;
use stock_common::{HistoricalPoint, Quote, SymbolResolver, TimeRange};
use stock_fetcher::{
    BlockingTransport, FixedDelay, HistoricalClient, MarketDataProvider, Pacer, QuoteClient,
};

use crate::config::TrackerConfig;
use crate::error::AppError;

/// Resolver and clients wired to the active provider.
pub struct Tracker {
    resolver: SymbolResolver,
    quotes: QuoteClient,
    history: HistoricalClient,
}

impl Tracker {
    /// Connects to the configured provider over HTTP.
    pub fn connect(config: TrackerConfig, resolver: SymbolResolver) -> Result<Self, AppError> {
        let api_key = config
            .api_key
            .ok_or(AppError::MissingApiKey(config.provider))?;
        let transport = Arc::new(BlockingTransport::new()?);
        let provider = config.provider.build(transport, api_key, config.base_url);

        let quotes = match config.pacing_ms {
            Some(millis) => {
                info!("Using {} with {} ms between quote requests", config.provider, millis);
                QuoteClient::with_pacer(
                    Arc::clone(&provider),
                    Box::new(FixedDelay::from_millis(millis)),
                )
            }
            None => {
                info!(
                    "Using {} with its default {} ms between quote requests",
                    config.provider,
                    config.provider.default_pacing().as_millis()
                );
                QuoteClient::new(Arc::clone(&provider))
            }
        };

        Ok(Self {
            resolver,
            quotes,
            history: HistoricalClient::new(provider),
        })
    }

    /// Wires the tracker to an existing provider and pacing policy.
    pub fn with_provider(
        provider: Arc<dyn MarketDataProvider>,
        pacer: Box<dyn Pacer>,
        resolver: SymbolResolver,
    ) -> Self {
        Self {
            resolver,
            quotes: QuoteClient::with_pacer(Arc::clone(&provider), pacer),
            history: HistoricalClient::new(provider),
        }
    }

    /// Resolves inputs to tickers, dropping blanks and repeats but keeping order.
    pub fn resolve_selection<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<String> {
        let mut symbols: Vec<String> = Vec::with_capacity(inputs.len());
        for symbol in self.resolver.resolve_all(inputs) {
            if !symbol.is_empty() && !symbols.contains(&symbol) {
                symbols.push(symbol);
            }
        }
        symbols
    }

    /// Quotes for already-resolved tickers.
    pub fn quotes(&self, symbols: &[String]) -> Vec<Quote> {
        self.quotes.get_quotes(symbols)
    }

    /// History of one ticker over a chart window ending at `now`.
    pub fn history(
        &self,
        symbol: &str,
        range: TimeRange,
        now: DateTime<Utc>,
    ) -> Vec<HistoricalPoint> {
        self.history.get_history_for_range(symbol, range, now)
    }
}
