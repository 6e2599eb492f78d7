use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::api::client::FetchMode;
use crate::config::{split_list, DEFAULT_CHAIN_ID, DEFAULT_QUERIES};

/// Collect DEX pair snapshots from DexScreener into daily CSV files.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seconds between snapshots (0 or less = run once and exit)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub interval: i64,
    /// Output directory for daily CSVs (defaults to OUTPUT_DIR)
    #[arg(long)]
    pub outdir: Option<PathBuf>,
    /// Comma-separated search queries
    #[arg(long, default_value_t = DEFAULT_QUERIES.join(","))]
    pub queries: String,
    /// Chain ID for exact pair lookups
    #[arg(long, default_value = DEFAULT_CHAIN_ID)]
    pub chain_id: String,
    /// Comma-separated pair IDs; overrides search mode when given
    #[arg(long)]
    pub pair_ids: Option<String>,
}

impl Cli {
    /// Polling period, or `None` when a single snapshot was asked for.
    pub fn poll_interval(&self) -> Option<Duration> {
        u64::try_from(self.interval)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn fetch_mode(&self) -> FetchMode {
        let pair_ids = self.pair_ids.as_deref().map(split_list).unwrap_or_default();
        if pair_ids.is_empty() {
            FetchMode::Search { queries: split_list(&self.queries) }
        } else {
            FetchMode::Pairs { chain_id: self.chain_id.clone(), pair_ids }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_once_in_search_mode() {
        let cli = Cli::try_parse_from(["dexsnap"]).unwrap();
        assert_eq!(cli.interval, 0);
        assert!(cli.outdir.is_none());
        assert_eq!(
            cli.fetch_mode(),
            FetchMode::Search { queries: DEFAULT_QUERIES.iter().map(|q| q.to_string()).collect() }
        );
    }

    #[test]
    fn pair_ids_switch_to_lookup_mode() {
        let cli = Cli::try_parse_from([
            "dexsnap", "--interval", "300", "--outdir", "/tmp/x", "--pair-ids", "A, B", "--chain-id", "base",
        ])
        .unwrap();
        assert_eq!(cli.interval, 300);
        assert_eq!(cli.outdir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(
            cli.fetch_mode(),
            FetchMode::Pairs { chain_id: "base".to_string(), pair_ids: vec!["A".to_string(), "B".to_string()] }
        );
    }

    #[test]
    fn blank_pair_ids_keep_search_mode() {
        let cli = Cli::try_parse_from(["dexsnap", "--pair-ids", " , ", "--queries", "bonk,wif"]).unwrap();
        assert_eq!(
            cli.fetch_mode(),
            FetchMode::Search { queries: vec!["bonk".to_string(), "wif".to_string()] }
        );
    }

    #[test]
    fn non_positive_interval_runs_once() {
        let cli = Cli::try_parse_from(["dexsnap", "--interval", "-5"]).unwrap();
        assert_eq!(cli.interval, -5);
        assert_eq!(cli.poll_interval(), None);

        let cli = Cli::try_parse_from(["dexsnap", "--interval=0"]).unwrap();
        assert_eq!(cli.poll_interval(), None);
    }

    #[test]
    fn positive_interval_polls() {
        let cli = Cli::try_parse_from(["dexsnap", "--interval", "300"]).unwrap();
        assert_eq!(cli.poll_interval(), Some(Duration::from_secs(300)));
    }
}
