//! Batch quote retrieval.
//!
//! `QuoteClient::get_quotes` always returns one `Quote` per requested symbol,
//! in request order. Anything that goes wrong for a symbol (transport error,
//! malformed body, provider error or rate-limit note, no data) yields a zeroed
//! quote for that symbol and a log line; the batch itself never fails.
//!
//! Requests are strictly sequential and the pacer runs after every request,
//! failed or not.
use std::sync::Arc;

use log::{debug, error, warn};
use stock_common::Quote;

use crate::pacing::{FixedDelay, Pacer};
use crate::provider::{MarketDataProvider, ProviderResponse};

/// Sequential, paced quote fetcher.
pub struct QuoteClient {
    provider: Arc<dyn MarketDataProvider>,
    pacer: Box<dyn Pacer>,
}

impl QuoteClient {
    /// Creates a client paced with the provider's default delay.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        let pacer = FixedDelay::new(provider.kind().default_pacing());
        Self::with_pacer(provider, Box::new(pacer))
    }

    /// Creates a client with an explicit pacing policy.
    pub fn with_pacer(provider: Arc<dyn MarketDataProvider>, pacer: Box<dyn Pacer>) -> Self {
        Self { provider, pacer }
    }

    /// Fetches quotes for every symbol, preserving order and length.
    pub fn get_quotes<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<Quote> {
        symbols
            .iter()
            .map(|symbol| {
                let quote = self.get_quote(symbol.as_ref());
                self.pacer.pause();
                quote
            })
            .collect()
    }

    /// Fetches a single quote without pacing.
    pub fn get_quote(&self, symbol: &str) -> Quote {
        let symbol = symbol.to_uppercase();

        match self.provider.fetch_quote(&symbol) {
            Ok(ProviderResponse::Success(raw)) if !raw.is_finite() => {
                warn!(
                    "Non-finite quote for {} from {}: {:?}",
                    symbol,
                    self.provider.kind(),
                    raw
                );
                Quote::unknown(&symbol)
            }
            Ok(ProviderResponse::Success(raw)) => {
                debug!("Quote for {}: {:?}", symbol, raw);
                Quote::from_values(&symbol, raw.price, raw.change, raw.change_percent)
            }
            Ok(ProviderResponse::Rejected(reason)) => {
                error!(
                    "Error fetching stock quote for {} from {}: {}",
                    symbol,
                    self.provider.kind(),
                    reason
                );
                Quote::unknown(&symbol)
            }
            Ok(ProviderResponse::Empty) => {
                warn!("No quote data for {} from {}", symbol, self.provider.kind());
                Quote::unknown(&symbol)
            }
            Err(e) => {
                error!("Error fetching stock quote for {}: {}", symbol, e);
                Quote::unknown(&symbol)
            }
        }
    }
}
