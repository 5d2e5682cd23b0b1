//! Error types shared across the workspace.
//!
//! The `TrackerError` enum covers the failures that can surface outside the
//! network core: reading watchlists and parsing user tokens. Network and
//! provider failures never reach callers of the quote/history operations; they
//! are folded into default output instead.
use std::io;

use thiserror::Error;

/// Unified error type for the shared library.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// I/O error originating from the standard library (watchlist files, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The watchlist source contained no usable entries.
    #[error("Watchlist is empty")]
    EmptyWatchlist,

    /// A time-range token outside of `1D, 1W, 1M, 1Y, 2Y, 5Y, 10Y, MAX`.
    #[error("Unknown time range: {0}")]
    UnknownTimeRange(String),
}
