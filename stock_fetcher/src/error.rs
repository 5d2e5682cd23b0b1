//! Errors raised while talking to a market-data provider.
//!
//! These never cross the public quote/history operations: the clients turn
//! them into default output and a log line. They do surface from provider
//! adapters and transports so the clients can report the reason.
use thiserror::Error;

/// Errors that can occur within a `MarketDataProvider` or `HttpTransport`.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during the HTTP request (e.g., network failure, TLS, body read).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The active provider has no endpoint for the requested data.
    #[error("Not supported by provider: {0}")]
    Unsupported(&'static str),
}
