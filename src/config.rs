use anyhow::{Context, Result};
use dotenv::dotenv;
use nonzero_ext::nonzero;
use std::env;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.dexscreener.com/latest/dex";
pub const DEFAULT_OUTPUT_DIR: &str = "./data";
pub const DEFAULT_USER_AGENT: &str = "dexsnap/0.1 (pair-snapshot-collector)";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_CHAIN_ID: &str = "solana";

// Solana-focused defaults that cover a wide slice of pairs.
pub const DEFAULT_QUERIES: &[&str] = &[
    "solana",
    "raydium solana",
    "orca solana",
    "meteora solana",
    "SOL/USDC",
];

#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub rate_limit_per_minute: NonZeroU32,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS must be a number of seconds, got '{}'", raw))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let rate_limit_per_minute = match lookup("RATE_LIMIT_PER_MINUTE") {
            Some(raw) => raw
                .trim()
                .parse::<NonZeroU32>()
                .with_context(|| format!("RATE_LIMIT_PER_MINUTE must be a positive integer, got '{}'", raw))?,
            // DexScreener allows 300 requests per minute on its pair endpoints.
            None => nonzero!(300u32),
        };

        Ok(Settings {
            base_url: lookup("DEXSCREENER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            output_dir: PathBuf::from(
                lookup("OUTPUT_DIR").unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            ),
            user_agent: lookup("DEXSCREENER_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            request_timeout: Duration::from_secs(request_timeout_secs),
            rate_limit_per_minute,
        })
    }
}

/// Splits a comma-separated list, dropping blank entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.output_dir, PathBuf::from("./data"));
        assert_eq!(settings.request_timeout, Duration::from_secs(20));
        assert_eq!(settings.rate_limit_per_minute.get(), 300);
    }

    #[test]
    fn overrides_are_read() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("DEXSCREENER_BASE_URL", "http://localhost:8080/dex"),
            ("OUTPUT_DIR", "/var/lib/dexsnap"),
            ("REQUEST_TIMEOUT_SECS", " 5 "),
            ("RATE_LIMIT_PER_MINUTE", "60"),
        ]))
        .unwrap();
        assert_eq!(settings.base_url, "http://localhost:8080/dex");
        assert_eq!(settings.output_dir, PathBuf::from("/var/lib/dexsnap"));
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.rate_limit_per_minute.get(), 60);
    }

    #[test]
    fn malformed_numbers_fail_startup() {
        assert!(Settings::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECS", "soon")])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[("RATE_LIMIT_PER_MINUTE", "0")])).is_err());
    }

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(
            split_list(" solana, ,SOL/USDC ,,"),
            vec!["solana".to_string(), "SOL/USDC".to_string()]
        );
        assert!(split_list("").is_empty());
    }
}
