//! Command-line arguments for the stock tracker.
//!
//! Provider settings can also come from the environment (or a `.env` file);
//! see `main` for end-to-end usage.
use clap::{Parser, Subcommand};
use stock_common::TimeRange;
use stock_fetcher::ProviderKind;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Market-data provider to query.
    #[arg(long, value_enum, env = "STOCK_PROVIDER", default_value_t = ProviderKind::Finnhub)]
    pub provider: ProviderKind,

    /// API key for the selected provider. Not needed for `search` and `resolve`.
    #[arg(long, env = "STOCK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override of the provider's API root.
    #[arg(long, env = "STOCK_BASE_URL")]
    pub base_url: Option<String>,

    /// Delay between quote requests in milliseconds. Defaults to the provider's limit.
    #[arg(long, env = "STOCK_PACING_MS")]
    pub pacing_ms: Option<u64>,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch quotes once for company names or tickers.
    Quotes {
        /// Company names or ticker symbols (e.g. 'Tesla' or 'TSLA').
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Fetch the close-price history of one company or ticker.
    History {
        /// Company name or ticker symbol.
        input: String,
        /// Chart window.
        #[arg(long, value_enum, default_value_t = TimeRange::OneMonth)]
        range: TimeRange,
    },
    /// Search the built-in company directory.
    Search {
        /// Part of a company name or symbol. Lists everything when omitted.
        query: Option<String>,
    },
    /// Show which ticker each input resolves to.
    Resolve {
        /// Company names or ticker symbols.
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Poll quotes on a timer until Ctrl+C.
    Watch {
        /// Company names or ticker symbols, added to the watchlist file entries.
        inputs: Vec<String>,
        /// Watchlist file; entries separated by commas or new lines.
        #[arg(long)]
        path: Option<String>,
        /// Chart window for the first symbol's history.
        #[arg(long, value_enum, default_value_t = TimeRange::OneMonth)]
        range: TimeRange,
        /// Seconds between quote refreshes.
        #[arg(long, default_value_t = 60)]
        interval_secs: u64,
    },
}
