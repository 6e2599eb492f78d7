use crate::db::models::PairSnapshotRow;
use crate::services::extract::get_nested;
use crate::types::models::RawPair;

/// Flattens one upstream pair record into the fixed row schema.
/// Any field the record does not carry comes out as `FieldValue::Missing`.
pub fn normalize_record(pair: &RawPair, snapshot_ts: &str) -> PairSnapshotRow {
    PairSnapshotRow {
        snapshot_ts: snapshot_ts.to_string(),
        pair_address: get_nested(pair, "pairAddress"),
        chain_id: get_nested(pair, "chainId"),
        dex_id: get_nested(pair, "dexId"),
        url: get_nested(pair, "url"),
        base_token_symbol: get_nested(pair, "baseToken.symbol"),
        base_token_address: get_nested(pair, "baseToken.address"),
        quote_token_symbol: get_nested(pair, "quoteToken.symbol"),
        quote_token_address: get_nested(pair, "quoteToken.address"),
        price_native: get_nested(pair, "priceNative"),
        price_usd: get_nested(pair, "priceUsd"),
        price_change_h1: get_nested(pair, "priceChange.h1"),
        price_change_h6: get_nested(pair, "priceChange.h6"),
        price_change_h24: get_nested(pair, "priceChange.h24"),
        txns_m5_buys: get_nested(pair, "txns.m5.buys"),
        txns_m5_sells: get_nested(pair, "txns.m5.sells"),
        txns_h1_buys: get_nested(pair, "txns.h1.buys"),
        txns_h1_sells: get_nested(pair, "txns.h1.sells"),
        txns_h6_buys: get_nested(pair, "txns.h6.buys"),
        txns_h6_sells: get_nested(pair, "txns.h6.sells"),
        txns_h24_buys: get_nested(pair, "txns.h24.buys"),
        txns_h24_sells: get_nested(pair, "txns.h24.sells"),
        volume_m5: get_nested(pair, "volume.m5"),
        volume_h1: get_nested(pair, "volume.h1"),
        volume_h6: get_nested(pair, "volume.h6"),
        volume_h24: get_nested(pair, "volume.h24"),
        liquidity_base: get_nested(pair, "liquidity.base"),
        liquidity_quote: get_nested(pair, "liquidity.quote"),
        liquidity_usd: get_nested(pair, "liquidity.usd"),
        pair_created_at: get_nested(pair, "pairCreatedAt"),
    }
}

pub fn normalize_records(pairs: &[RawPair], snapshot_ts: &str) -> Vec<PairSnapshotRow> {
    pairs
        .iter()
        .map(|pair| normalize_record(pair, snapshot_ts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::models::{FieldValue, Node};
    use serde_json::json;

    const TS: &str = "2024-01-01T00:00:00+00:00";

    fn sample_pair() -> RawPair {
        Node::from(json!({
            "pairAddress": "P1",
            "chainId": "solana",
            "dexId": "raydium",
            "baseToken": {"symbol": "FOO"},
            "quoteToken": {"symbol": "USDC"},
            "priceUsd": "1.23",
            "liquidity": {"usd": 5000},
            "txns": {"h1": {"buys": 10, "sells": 4}}
        }))
    }

    #[test]
    fn normalizes_sample_pair() {
        let row = normalize_record(&sample_pair(), TS);

        let mut expected = PairSnapshotRow::empty(TS);
        expected.pair_address = FieldValue::from("P1");
        expected.chain_id = FieldValue::from("solana");
        expected.dex_id = FieldValue::from("raydium");
        expected.base_token_symbol = FieldValue::from("FOO");
        expected.quote_token_symbol = FieldValue::from("USDC");
        expected.price_usd = FieldValue::from("1.23");
        expected.liquidity_usd = FieldValue::from(5000);
        expected.txns_h1_buys = FieldValue::from(10);
        expected.txns_h1_sells = FieldValue::from(4);

        assert_eq!(row, expected);
    }

    #[test]
    fn tolerates_missing_nested_objects() {
        let pair = Node::from(json!({
            "pairAddress": "P2",
            "liquidity": {"base": 12.5},
            "txns": {"h1": 7}
        }));
        let row = normalize_record(&pair, TS);

        assert_eq!(row.pair_address, FieldValue::from("P2"));
        assert!(row.liquidity_usd.is_missing());
        assert!(row.base_token_symbol.is_missing());
        assert!(row.base_token_address.is_missing());
        assert!(row.txns_h1_buys.is_missing());
        assert_eq!(row.snapshot_ts, TS);
    }

    #[test]
    fn non_mapping_record_is_all_missing() {
        let row = normalize_record(&Node::from(json!("not a pair")), TS);
        assert_eq!(row, PairSnapshotRow::empty(TS));
    }

    #[test]
    fn preserves_input_order() {
        let pairs = vec![
            Node::from(json!({"pairAddress": "B"})),
            Node::from(json!({"pairAddress": "A"})),
            Node::from(json!({"pairAddress": "C"})),
        ];
        let addresses: Vec<String> = normalize_records(&pairs, TS)
            .iter()
            .map(|row| row.pair_address.to_string())
            .collect();
        assert_eq!(addresses, vec!["B", "A", "C"]);
    }
}
