//! Watchlist files: the user's list of companies or tickers to track.
//!
//! Entries are separated by new lines or commas. Blank entries and lines
//! starting with `#` are ignored. Entries are kept as raw text; mapping them to
//! ticker symbols is the resolver's job.
use std::io::BufRead;

use crate::error::TrackerError;
use crate::result::Result;

/// Trait providing watchlist parsing from any buffered source.
pub trait WatchlistParser {
    /// Parses watchlist entries from a buffered reader.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<String>>;
}

/// Marker type implementing [`WatchlistParser`] for plain-text watchlists.
pub struct Watchlist;

impl WatchlistParser for Watchlist {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<String>> {
        let mut entries = Vec::new();

        for line_result in reader.lines() {
            let line = line_result?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }

            entries.extend(
                trimmed_line
                    .split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(String::from),
            );
        }

        if entries.is_empty() {
            return Err(TrackerError::EmptyWatchlist);
        }
        Ok(entries)
    }
}
