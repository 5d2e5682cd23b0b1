//! Error types of the tracker binary.
//!
//! Only start-up problems end up here (configuration, watchlist files, signal
//! setup). Quote and history failures are absorbed by the fetcher.
use std::io;

use stock_common::TrackerError;
use stock_fetcher::{ProviderError, ProviderKind};
use thiserror::Error;

/// Unified error type for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Watchlist parsing or other shared-library failure.
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// HTTP client construction failure.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// I/O error (watchlist file, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON output failure.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A network command was requested without an API key.
    #[error("Missing API key for {0}: pass --api-key or set STOCK_API_KEY")]
    MissingApiKey(ProviderKind),

    /// A command ended up with no symbol to query.
    #[error("No symbol to query: pass company names/tickers or --path")]
    NoSymbols,

    /// The Ctrl+C handler could not be installed.
    #[error("Failed to set Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}
