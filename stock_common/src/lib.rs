//!
//! Common types and lookups shared by the fetcher and the tracker binary.
//!
//! This crate aggregates:
//! - `error`: unified error type `TrackerError` used across the workspace.
//! - `result`: handy `Result<T, TrackerError>` alias.
//! - `symbols`: the immutable company-name/ticker directory and its search.
//! - `resolver`: free text to ticker resolution on top of the directory.
//! - `quote`: display-ready `Quote` and `HistoricalPoint` values.
//! - `time_range`: chart window tokens and their sampling resolution.
//! - `watchlist`: parsing of plain-text watchlists.
#![warn(missing_docs)]
pub mod error;
pub mod quote;
pub mod resolver;
pub mod result;
pub mod symbols;
pub mod time_range;
pub mod watchlist;

pub use error::TrackerError;
pub use quote::{HistoricalPoint, Quote};
pub use resolver::SymbolResolver;
pub use result::Result;
pub use symbols::{SymbolDirectory, SymbolEntry};
pub use time_range::{Resolution, TimeRange};
