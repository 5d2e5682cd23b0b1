//! Market-data retrieval on top of a single, pluggable provider.
//!
//! - `transport`: blocking HTTP seam (`HttpTransport`) and its reqwest implementation.
//! - `pacing`: delay policy applied between quote requests.
//! - `provider`: the `MarketDataProvider` trait plus Finnhub and Alpha Vantage adapters.
//! - `quotes`: `QuoteClient`, batch quotes with fallback to zeroed quotes.
//! - `historical`: `HistoricalClient`, close-price series for charting.
//! - `error`: `ProviderError`, never exposed by the clients' public operations.
//!
//! Everything here is blocking; callers run it on whatever thread drives their UI.
#![warn(missing_docs)]
pub mod error;
pub mod historical;
pub mod pacing;
pub mod provider;
pub mod quotes;
pub mod transport;

pub use error::ProviderError;
pub use historical::HistoricalClient;
pub use pacing::{FixedDelay, NoDelay, Pacer};
pub use provider::{MarketDataProvider, ProviderKind, ProviderResponse};
pub use quotes::QuoteClient;
pub use transport::{BlockingTransport, HttpTransport};
