use serde::Serialize;
use crate::types::models::FieldValue;

/// Flattened pair snapshot. Field order is the on-disk column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSnapshotRow {
    pub snapshot_ts: String,
    #[serde(rename = "pairAddress")]
    pub pair_address: FieldValue,
    #[serde(rename = "chainId")]
    pub chain_id: FieldValue,
    #[serde(rename = "dexId")]
    pub dex_id: FieldValue,
    pub url: FieldValue,
    #[serde(rename = "baseToken_symbol")]
    pub base_token_symbol: FieldValue,
    #[serde(rename = "baseToken_address")]
    pub base_token_address: FieldValue,
    #[serde(rename = "quoteToken_symbol")]
    pub quote_token_symbol: FieldValue,
    #[serde(rename = "quoteToken_address")]
    pub quote_token_address: FieldValue,
    #[serde(rename = "priceNative")]
    pub price_native: FieldValue,
    #[serde(rename = "priceUsd")]
    pub price_usd: FieldValue,
    #[serde(rename = "priceChange_h1")]
    pub price_change_h1: FieldValue,
    #[serde(rename = "priceChange_h6")]
    pub price_change_h6: FieldValue,
    #[serde(rename = "priceChange_h24")]
    pub price_change_h24: FieldValue,
    pub txns_m5_buys: FieldValue,
    pub txns_m5_sells: FieldValue,
    pub txns_h1_buys: FieldValue,
    pub txns_h1_sells: FieldValue,
    pub txns_h6_buys: FieldValue,
    pub txns_h6_sells: FieldValue,
    pub txns_h24_buys: FieldValue,
    pub txns_h24_sells: FieldValue,
    pub volume_m5: FieldValue,
    pub volume_h1: FieldValue,
    pub volume_h6: FieldValue,
    pub volume_h24: FieldValue,
    pub liquidity_base: FieldValue,
    pub liquidity_quote: FieldValue,
    pub liquidity_usd: FieldValue,
    #[serde(rename = "pairCreatedAt")]
    pub pair_created_at: FieldValue,
}

/// Identity of a row within one partition: `(pairAddress, snapshot_ts)` as cell text.
///
/// The same pair fetched twice under one snapshot timestamp is one record, whatever
/// its other fields say; the later occurrence is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub pair_address: String,
    pub snapshot_ts: String,
}

impl DedupKey {
    pub fn new(pair_address: impl Into<String>, snapshot_ts: impl Into<String>) -> Self {
        Self {
            pair_address: pair_address.into(),
            snapshot_ts: snapshot_ts.into(),
        }
    }
}

impl PairSnapshotRow {
    /// Blank row for one snapshot; every source field starts out missing.
    pub fn empty(snapshot_ts: &str) -> Self {
        Self {
            snapshot_ts: snapshot_ts.to_string(),
            pair_address: FieldValue::Missing,
            chain_id: FieldValue::Missing,
            dex_id: FieldValue::Missing,
            url: FieldValue::Missing,
            base_token_symbol: FieldValue::Missing,
            base_token_address: FieldValue::Missing,
            quote_token_symbol: FieldValue::Missing,
            quote_token_address: FieldValue::Missing,
            price_native: FieldValue::Missing,
            price_usd: FieldValue::Missing,
            price_change_h1: FieldValue::Missing,
            price_change_h6: FieldValue::Missing,
            price_change_h24: FieldValue::Missing,
            txns_m5_buys: FieldValue::Missing,
            txns_m5_sells: FieldValue::Missing,
            txns_h1_buys: FieldValue::Missing,
            txns_h1_sells: FieldValue::Missing,
            txns_h6_buys: FieldValue::Missing,
            txns_h6_sells: FieldValue::Missing,
            txns_h24_buys: FieldValue::Missing,
            txns_h24_sells: FieldValue::Missing,
            volume_m5: FieldValue::Missing,
            volume_h1: FieldValue::Missing,
            volume_h6: FieldValue::Missing,
            volume_h24: FieldValue::Missing,
            liquidity_base: FieldValue::Missing,
            liquidity_quote: FieldValue::Missing,
            liquidity_usd: FieldValue::Missing,
            pair_created_at: FieldValue::Missing,
        }
    }

    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::new(self.pair_address.to_string(), self.snapshot_ts.clone())
    }
}
