use governor::{clock::DefaultClock, state::{InMemoryState, NotKeyed}, Quota, RateLimiter};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use serde_json::Value;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use crate::api::error::FetchError;
use crate::api::handlers::{extract_pairs, merge_unique_pairs};
use crate::api::routes::{pair_url, search_url};
use crate::types::models::RawPair;

/// Anything that can produce one snapshot's worth of raw pair records.
#[allow(async_fn_in_trait)]
pub trait PairSource {
    async fn fetch_pairs(&self) -> Result<Vec<RawPair>, FetchError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchMode {
    Search { queries: Vec<String> },
    Pairs { chain_id: String, pair_ids: Vec<String> },
}

pub struct DexScreenerClient {
    http: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    mode: FetchMode,
}

impl DexScreenerClient {
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
        requests_per_minute: NonZeroU32,
        mode: FetchMode,
    ) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            rate_limiter: Arc::new(RateLimiter::direct(Quota::per_minute(requests_per_minute))),
            mode,
        })
    }

    async fn get_pairs(&self, url: Url, query: &[(&str, &str)]) -> Result<Vec<RawPair>, FetchError> {
        self.rate_limiter.until_ready().await;
        tracing::debug!("GET {} {:?}", url, query);

        let body: Value = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        extract_pairs(body)
    }

    async fn search(&self, queries: &[String]) -> Result<Vec<RawPair>, FetchError> {
        let url = search_url(&self.base_url)?;
        let mut batches = Vec::new();
        for query in queries.iter().map(|q| q.trim()).filter(|q| !q.is_empty()) {
            let pairs = self.get_pairs(url.clone(), &[("q", query)]).await?;
            tracing::info!("Query '{}' returned {} pairs", query, pairs.len());
            batches.push(pairs);
        }
        Ok(merge_unique_pairs(batches))
    }

    async fn lookup(&self, chain_id: &str, pair_ids: &[String]) -> Result<Vec<RawPair>, FetchError> {
        let mut batches = Vec::new();
        for pair_id in pair_ids.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
            let url = pair_url(&self.base_url, chain_id, pair_id)?;
            batches.push(self.get_pairs(url, &[]).await?);
        }
        Ok(merge_unique_pairs(batches))
    }
}

impl PairSource for DexScreenerClient {
    async fn fetch_pairs(&self) -> Result<Vec<RawPair>, FetchError> {
        match &self.mode {
            FetchMode::Search { queries } => self.search(queries).await,
            FetchMode::Pairs { chain_id, pair_ids } => self.lookup(chain_id, pair_ids).await,
        }
    }
}
