//! Stock Tracker: a terminal front end for the quote and history fetchers.
//!
//! It resolves company names or tickers through the built-in directory, asks the
//! configured market-data provider for quotes and close-price history, and prints
//! the results. Building blocks:
//!
//! - `SymbolResolver` (from `stock_common`): free text to ticker symbols.
//! - `Tracker`: resolver plus `QuoteClient` and `HistoricalClient` on one provider.
//! - `watch`: a `crossbeam_channel` timer loop that refreshes quotes until Ctrl+C.
//! - `render`: plain-text tables and history summaries.
//!
//! Usage example (CLI):
//! ```bash
//! export STOCK_API_KEY=...            # or put it in .env
//! stock_tracker quotes Tesla apple MSFT
//! stock_tracker history nvidia --range 1Y
//! stock_tracker --provider alpha-vantage watch --path ./watchlist.txt --interval-secs 60
//! stock_tracker search air
//! ```
//!
//! Provider failures never abort a command: affected symbols show zeroed quotes or an
//! empty history and the reason is logged.
#![warn(missing_docs)]
mod app;
mod args;
mod config;
mod error;
mod render;
mod watch;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use log::{info, warn};
use stock_common::watchlist::{Watchlist, WatchlistParser};
use stock_common::{SymbolDirectory, SymbolResolver};

use crate::app::Tracker;
use crate::args::{Args, Command};
use crate::config::TrackerConfig;
use crate::error::AppError;
use crate::watch::WatchOptions;

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logger();
    let args = Args::parse();

    let directory = Arc::new(SymbolDirectory::default());
    let resolver = SymbolResolver::new(Arc::clone(&directory));
    let config = TrackerConfig::from_args(&args);
    let json = args.json;

    match args.command {
        Command::Search { query } => {
            let hits = directory.search(query.as_deref().unwrap_or_default());
            if json {
                println!("{}", serde_json::to_string(&hits)?);
            } else {
                hits.iter().for_each(|hit| println!("{}", hit));
            }
        }
        Command::Resolve { inputs } => {
            for input in &inputs {
                println!("{} -> {}", input, resolver.resolve(input));
            }
        }
        Command::Quotes { inputs } => {
            let tracker = Tracker::connect(config, resolver)?;
            let symbols = tracker.resolve_selection(&inputs);
            let quotes = tracker.quotes(&symbols);
            if json {
                println!("{}", serde_json::to_string(&quotes)?);
            } else {
                println!("{}", render::quote_table(&quotes));
            }
        }
        Command::History { input, range } => {
            let tracker = Tracker::connect(config, resolver)?;
            let symbol = tracker
                .resolve_selection(&[input])
                .pop()
                .ok_or(AppError::NoSymbols)?;
            let points = tracker.history(&symbol, range, Utc::now());
            if json {
                println!("{}", serde_json::to_string(&points)?);
            } else {
                println!("{}", render::history_summary(&symbol, range, &points));
                if !points.is_empty() {
                    println!("{}", render::history_rows(&points));
                }
            }
        }
        Command::Watch {
            mut inputs,
            path,
            range,
            interval_secs,
        } => {
            if let Some(raw) = path {
                inputs.extend(read_watchlist(&normalize_path(&raw))?);
            }
            let tracker = Tracker::connect(config, resolver)?;
            let symbols = tracker.resolve_selection(&inputs);
            info!("Symbols: {:?}", symbols);

            let options = WatchOptions {
                range,
                interval: Duration::from_secs(interval_secs.max(1)),
                json,
            };
            watch::run(&tracker, &symbols, options, watch::shutdown_channel()?)?;
        }
    }

    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Reads a watchlist file; a missing file is reported and treated as empty.
fn read_watchlist(path: &PathBuf) -> Result<Vec<String>, AppError> {
    if !is_file_exist(path) {
        warn!("Watchlist {} not found", path.display());
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    Ok(Watchlist::parse_from_file(BufReader::new(file))?)
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
