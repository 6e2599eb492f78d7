use serde_json::Value;
use std::collections::HashSet;
use crate::api::error::FetchError;
use crate::types::models::{Node, RawPair};

/// Pulls the `pairs` list out of a response body. A body without one counts as no pairs.
pub fn extract_pairs(body: Value) -> Result<Vec<RawPair>, FetchError> {
    let Value::Object(mut root) = body else {
        return Err(FetchError::Data("response is not a JSON object".to_string()));
    };
    match root.remove("pairs") {
        Some(Value::Array(pairs)) => Ok(pairs.into_iter().map(Node::from).collect()),
        Some(Value::Null) | None => {
            tracing::warn!("Response carried no pairs list; treating as empty");
            Ok(Vec::new())
        }
        Some(other) => Err(FetchError::Data(format!(
            "expected pairs to be a list, got {}",
            other
        ))),
    }
}

/// Merges batches in order, keeping the first record seen for each `pairAddress`.
/// Records without an address are dropped.
pub fn merge_unique_pairs(batches: impl IntoIterator<Item = Vec<RawPair>>) -> Vec<RawPair> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for pair in batches.into_iter().flatten() {
        let address = match pair.get("pairAddress").map(Node::to_field_value) {
            Some(value) if !value.is_missing() => value.to_string(),
            _ => continue,
        };
        if !address.is_empty() && seen.insert(address) {
            merged.push(pair);
        }
    }
    merged
}
