//! Company-name and ticker-symbol directory.
//!
//! The directory is built once from a fixed table and never changes afterwards,
//! so it can be shared across threads behind an `Arc` without locking. It keeps
//! two insertion-ordered maps derived from the same entry sequence:
//!
//! - lower-cased company name -> entry
//! - lower-cased symbol -> entry
//!
//! Re-inserting an existing key overwrites the value but keeps the key's
//! original position, so iteration order is the first-appearance order of the
//! table. Both maps are last-write-wins, independently of each other.
use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Separator used in `"SYMBOL - Name"` labels.
pub const LABEL_SEPARATOR: &str = " - ";

/// Built-in company table, grouped by sector. Duplicate names are kept on purpose.
pub const DEFAULT_TABLE: &[(&str, &str)] = &[
    // Technology
    ("Apple", "AAPL"),
    ("Microsoft", "MSFT"),
    ("Amazon", "AMZN"),
    ("Alphabet (Google)", "GOOGL"),
    ("NVIDIA", "NVDA"),
    ("Tesla", "TSLA"),
    ("Meta Platforms", "META"),
    ("Taiwan Semiconductor", "TSM"),
    ("Broadcom", "AVGO"),
    ("Oracle", "ORCL"),
    ("Cisco", "CSCO"),
    ("Adobe", "ADBE"),
    ("Netflix", "NFLX"),
    ("Intel", "INTC"),
    ("Salesforce", "CRM"),
    ("Advanced Micro Devices", "AMD"),
    ("Qualcomm", "QCOM"),
    ("IBM", "IBM"),
    // Finance
    ("JPMorgan Chase", "JPM"),
    ("Visa", "V"),
    ("Mastercard", "MA"),
    ("Bank of America", "BAC"),
    ("Wells Fargo", "WFC"),
    ("Morgan Stanley", "MS"),
    ("Goldman Sachs", "GS"),
    ("Charles Schwab", "SCHW"),
    // Healthcare
    ("UnitedHealth", "UNH"),
    ("Johnson & Johnson", "JNJ"),
    ("Eli Lilly", "LLY"),
    ("Pfizer", "PFE"),
    ("Merck", "MRK"),
    ("AbbVie", "ABBV"),
    ("Thermo Fisher Scientific", "TMO"),
    ("Abbott Laboratories", "ABT"),
    // Consumer
    ("Walmart", "WMT"),
    ("Procter & Gamble", "PG"),
    ("Coca-Cola", "KO"),
    ("PepsiCo", "PEP"),
    ("McDonald's", "MCD"),
    ("Nike", "NKE"),
    ("Starbucks", "SBUX"),
    ("Disney", "DIS"),
    ("Home Depot", "HD"),
    ("Target", "TGT"),
    // Energy
    ("Exxon Mobil", "XOM"),
    ("Chevron", "CVX"),
    ("Shell", "SHEL"),
    ("BP", "BP"),
    ("ConocoPhillips", "COP"),
    // Telecommunications
    ("Verizon", "VZ"),
    ("AT&T", "T"),
    ("T-Mobile", "TMUS"),
    // Automotive
    ("Ford", "F"),
    ("General Motors", "GM"),
    ("Toyota", "TM"),
    ("Honda", "HMC"),
    ("Volkswagen", "VWAGY"),
    ("BMW", "BMWYY"),
    ("Mercedes-Benz", "MBG.DE"),
    // Airlines
    ("Delta Air Lines", "DAL"),
    ("United Airlines", "UAL"),
    ("American Airlines", "AAL"),
    ("Southwest Airlines", "LUV"),
    // Entertainment
    ("Netflix", "NFLX"),
    ("Sony", "SONY"),
    ("Warner Bros Discovery", "WBD"),
    ("Paramount", "PARA"),
    // Social media
    ("Pinterest", "PINS"),
    ("Snap", "SNAP"),
    ("X (Twitter)", "TWTR"),
    // E-commerce
    ("eBay", "EBAY"),
    ("Shopify", "SHOP"),
    ("Etsy", "ETSY"),
    ("Alibaba", "BABA"),
    // Gaming
    ("Electronic Arts", "EA"),
    ("Activision Blizzard", "ATVI"),
    ("Take-Two Interactive", "TTWO"),
    ("Roblox", "RBLX"),
    // Chinese tech
    ("Alibaba", "BABA"),
    ("Baidu", "BIDU"),
    ("JD.com", "JD"),
    ("NetEase", "NTES"),
    ("Tencent", "TCEHY"),
    // European tech
    ("SAP", "SAP"),
    ("ASML Holding", "ASML"),
    ("Adyen", "ADYEY"),
    ("Spotify", "SPOT"),
    // Crypto and fintech
    ("Coinbase", "COIN"),
    ("Block (Square)", "SQ"),
    ("PayPal", "PYPL"),
    ("Robinhood", "HOOD"),
];

/// A single company/ticker pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolEntry {
    /// Company name as written in the table (e.g., `Alphabet (Google)`).
    pub canonical_name: String,
    /// Ticker symbol (e.g., `GOOGL`).
    pub symbol: String,
}

impl SymbolEntry {
    /// Creates a new entry.
    pub fn new(canonical_name: &str, symbol: &str) -> Self {
        Self {
            canonical_name: canonical_name.to_string(),
            symbol: symbol.to_string(),
        }
    }

    /// Display label in the `"SYMBOL - Name"` form.
    pub fn label(&self) -> String {
        format!("{}{}{}", self.symbol, LABEL_SEPARATOR, self.canonical_name)
    }
}

/// Immutable bidirectional name/symbol directory.
#[derive(Debug, Clone)]
pub struct SymbolDirectory {
    by_name: IndexMap<String, SymbolEntry>,
    by_symbol: IndexMap<String, SymbolEntry>,
}

impl SymbolDirectory {
    /// Builds a directory from an ordered sequence of entries.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SymbolEntry>,
    {
        let mut by_name = IndexMap::new();
        let mut by_symbol = IndexMap::new();
        for entry in entries {
            by_name.insert(entry.canonical_name.to_lowercase(), entry.clone());
            by_symbol.insert(entry.symbol.to_lowercase(), entry);
        }
        Self { by_name, by_symbol }
    }

    /// Builds a directory from `(name, symbol)` pairs.
    pub fn from_table(table: &[(&str, &str)]) -> Self {
        Self::new(
            table
                .iter()
                .map(|(name, symbol)| SymbolEntry::new(name, symbol)),
        )
    }

    /// Number of distinct company names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// `true` when the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Entries keyed by company name, in table order.
    pub fn entries(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.by_name.values()
    }

    /// Exact, case-insensitive company-name lookup.
    pub fn symbol_for_name(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|entry| entry.symbol.as_str())
    }

    /// Exact, case-insensitive symbol lookup.
    pub fn name_for_symbol(&self, symbol: &str) -> Option<&str> {
        self.by_symbol
            .get(&symbol.to_lowercase())
            .map(|entry| entry.canonical_name.as_str())
    }

    /// First entry (in table order) whose lower-cased name contains `fragment`.
    ///
    /// `fragment` is expected to be lower-cased already. An empty fragment never
    /// matches.
    pub fn find_by_name_fragment(&self, fragment: &str) -> Option<&SymbolEntry> {
        if fragment.is_empty() {
            return None;
        }
        self.by_name
            .iter()
            .find(|(name, _)| name.contains(fragment))
            .map(|(_, entry)| entry)
    }

    /// All entries as sorted `"SYMBOL - Name"` labels.
    pub fn list_all(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.by_name.values().map(SymbolEntry::label).collect();
        labels.sort();
        labels
    }

    /// Substring search over both company names and symbols.
    ///
    /// A blank query returns the whole directory. Results are deduplicated and
    /// sorted lexicographically.
    pub fn search(&self, query: &str) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.list_all();
        }

        let mut results = BTreeSet::new();
        for (name, entry) in &self.by_name {
            if name.contains(&needle) {
                results.insert(entry.label());
            }
        }
        for (symbol, entry) in &self.by_symbol {
            if symbol.contains(&needle) {
                results.insert(entry.label());
            }
        }
        results.into_iter().collect()
    }
}

impl Default for SymbolDirectory {
    fn default() -> Self {
        Self::from_table(DEFAULT_TABLE)
    }
}

/// Extracts the symbol part of a `"SYMBOL - Name"` label.
///
/// Text without a separator is returned trimmed, as-is.
pub fn label_symbol(label: &str) -> &str {
    label
        .split_once(LABEL_SEPARATOR)
        .map_or(label, |(symbol, _)| symbol)
        .trim()
}
