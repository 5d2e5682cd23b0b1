//! Timer-driven quote polling.
//!
//! The loop multiplexes a `crossbeam_channel::tick` timer with a shutdown
//! channel fed by the Ctrl+C handler. Each tick performs one blocking quote
//! batch on this thread, so a refresh in progress always completes before the
//! shutdown signal is seen.
use std::time::Duration;

use chrono::{Local, Utc};
use crossbeam_channel::{Receiver, bounded, select, tick};
use log::{info, warn};
use stock_common::TimeRange;

use crate::app::Tracker;
use crate::error::AppError;
use crate::render;

/// Polling settings.
#[derive(Debug, Clone, Copy)]
pub struct WatchOptions {
    /// Window of the history summary printed at start.
    pub range: TimeRange,
    /// Time between refreshes.
    pub interval: Duration,
    /// Print JSON instead of tables.
    pub json: bool,
}

/// Installs the Ctrl+C handler and returns the channel it signals on.
pub fn shutdown_channel() -> Result<Receiver<()>, AppError> {
    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down tracker...");
        let _ = shutdown_tx.try_send(());
    })?;
    Ok(shutdown_rx)
}

/// Polls quotes for `symbols` every `options.interval` until `shutdown` fires.
///
/// The first symbol is treated as the selected one: its history over
/// `options.range` is printed once before polling starts.
pub fn run(
    tracker: &Tracker,
    symbols: &[String],
    options: WatchOptions,
    shutdown: Receiver<()>,
) -> Result<(), AppError> {
    let Some(selected) = symbols.first() else {
        return Err(AppError::NoSymbols);
    };

    let points = tracker.history(selected, options.range, Utc::now());
    if options.json {
        println!("{}", serde_json::to_string(&points)?);
    } else {
        println!("{}", render::history_summary(selected, options.range, &points));
    }

    info!(
        "Watching {} symbol(s) every {}s. Press Ctrl+C to exit.",
        symbols.len(),
        options.interval.as_secs()
    );
    refresh(tracker, symbols, options.json)?;

    let ticker = tick(options.interval);
    loop {
        select! {
            recv(shutdown) -> _ => break,
            recv(ticker) -> msg => match msg {
                Ok(_) => refresh(tracker, symbols, options.json)?,
                Err(e) => {
                    warn!("Refresh timer stopped: {}", e);
                    break;
                }
            },
        }
    }

    info!("Watch loop stopping...");
    Ok(())
}

fn refresh(tracker: &Tracker, symbols: &[String], json: bool) -> Result<(), AppError> {
    let quotes = tracker.quotes(symbols);
    if json {
        println!("{}", serde_json::to_string(&quotes)?);
    } else {
        println!("{}", render::quote_table(&quotes));
        println!("{}\n", render::last_updated(&Local::now()));
    }
    Ok(())
}
