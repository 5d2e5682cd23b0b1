//! Provider configuration assembled from CLI flags and the environment.
use secrecy::SecretString;
use stock_fetcher::ProviderKind;

use crate::args::Args;

/// Everything needed to talk to the active provider.
#[derive(Debug)]
pub struct TrackerConfig {
    /// Active provider.
    pub provider: ProviderKind,
    /// API key, if one was supplied.
    pub api_key: Option<SecretString>,
    /// Optional API root override.
    pub base_url: Option<String>,
    /// Explicit delay between quote requests; `None` keeps the provider default.
    pub pacing_ms: Option<u64>,
}

impl TrackerConfig {
    /// Builds the configuration. A blank API key counts as missing.
    pub fn from_args(args: &Args) -> Self {
        TrackerConfig {
            provider: args.provider,
            api_key: args
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(|key| SecretString::from(key.to_string())),
            base_url: args.base_url.clone(),
            pacing_ms: args.pacing_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use secrecy::ExposeSecret;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn pacing_is_unset_without_flag() {
        let args = parse(&[
            "stock_tracker",
            "--provider",
            "alpha-vantage",
            "--api-key",
            "k",
            "quotes",
            "ibm",
        ]);
        let config = TrackerConfig::from_args(&args);
        assert_eq!(config.provider, ProviderKind::AlphaVantage);
        assert_eq!(config.pacing_ms, None);
        assert_eq!(config.api_key.unwrap().expose_secret(), "k");
    }

    #[test]
    fn explicit_pacing_and_blank_key() {
        let args = parse(&[
            "stock_tracker",
            "--api-key",
            "  ",
            "--pacing-ms",
            "0",
            "search",
        ]);
        let config = TrackerConfig::from_args(&args);
        assert_eq!(config.pacing_ms, Some(0));
        assert!(config.api_key.is_none());
    }
}
