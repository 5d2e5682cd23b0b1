//! Free-text to ticker-symbol resolution.
//!
//! Resolution never fails: when nothing in the directory matches, the trimmed
//! input is upper-cased and treated as a literal ticker.
use std::sync::Arc;

use crate::symbols::SymbolDirectory;

/// Resolves user input (company names, partial names, tickers) to ticker symbols.
#[derive(Debug, Clone)]
pub struct SymbolResolver {
    directory: Arc<SymbolDirectory>,
}

impl SymbolResolver {
    /// Creates a resolver backed by a shared directory.
    pub fn new(directory: Arc<SymbolDirectory>) -> Self {
        Self { directory }
    }

    /// Shared directory this resolver reads from.
    pub fn directory(&self) -> &SymbolDirectory {
        &self.directory
    }

    /// Best-guess ticker for `input`.
    ///
    /// Order of precedence:
    /// 1. exact company name (case-insensitive) -> mapped symbol
    /// 2. exact symbol (case-insensitive) -> upper-cased input
    /// 3. input already upper-case -> returned verbatim (blank input ends here as `""`)
    /// 4. first company name containing the input -> its symbol
    /// 5. upper-cased input
    pub fn resolve(&self, input: &str) -> String {
        let trimmed = input.trim();
        let normalized = trimmed.to_lowercase();

        if let Some(symbol) = self.directory.symbol_for_name(&normalized) {
            return symbol.to_string();
        }

        if self.directory.name_for_symbol(&normalized).is_some() {
            return normalized.to_uppercase();
        }

        if trimmed.to_uppercase() == trimmed {
            return trimmed.to_string();
        }

        if let Some(entry) = self.directory.find_by_name_fragment(&normalized) {
            return entry.symbol.clone();
        }

        trimmed.to_uppercase()
    }

    /// Resolves every input, preserving order.
    pub fn resolve_all<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<String> {
        inputs
            .iter()
            .map(|input| self.resolve(input.as_ref()))
            .collect()
    }
}

impl Default for SymbolResolver {
    fn default() -> Self {
        Self::new(Arc::new(SymbolDirectory::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::label_symbol;

    fn resolver() -> SymbolResolver {
        SymbolResolver::default()
    }

    #[test]
    fn exact_company_name() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("Tesla"), "TSLA");
        assert_eq!(resolver.resolve("  alphabet (google) "), "GOOGL");
        assert_eq!(resolver.resolve("AT&T"), "T");
    }

    #[test]
    fn symbol_is_case_insensitive() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("tsla"), "TSLA");
        assert_eq!(resolver.resolve("mbg.de"), "MBG.DE");
        assert_eq!(resolver.resolve("Msft"), "MSFT");
    }

    #[test]
    fn unmatched_upper_case_passes_through() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("ZZZZ"), "ZZZZ");
        assert_eq!(resolver.resolve(" BRK.B "), "BRK.B");
    }

    #[test]
    fn partial_name_uses_first_table_match() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("micro"), "MSFT");
        assert_eq!(resolver.resolve("goldman"), "GS");
        assert_eq!(resolver.resolve("Air"), "DAL");
    }

    #[test]
    fn unknown_mixed_case_is_upper_cased() {
        assert_eq!(resolver().resolve("Rivian"), "RIVIAN");
    }

    #[test]
    fn blank_input_resolves_to_empty() {
        let resolver = resolver();
        assert_eq!(resolver.resolve(""), "");
        assert_eq!(resolver.resolve("   "), "");
    }

    #[test]
    fn every_listed_symbol_round_trips() {
        let resolver = resolver();
        for label in resolver.directory().list_all() {
            let symbol = label_symbol(&label);
            assert_eq!(resolver.resolve(symbol), symbol, "{label}");
        }
    }

    #[test]
    fn resolve_all_keeps_order() {
        let resolved = resolver().resolve_all(&["apple", "ZZZZ", "nvidia"]);
        assert_eq!(resolved, vec!["AAPL", "ZZZZ", "NVDA"]);
    }
}
