use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A single cell value taken from an upstream pair record.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Missing,
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Missing => Ok(()),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Missing => serializer.serialize_none(),
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) => n.serialize(serializer),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n.into())
    }
}

/// Loosely-typed tree for one upstream record. Absence is modelled by `Option<&Node>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(FieldValue),
    Mapping(BTreeMap<String, Node>),
}

pub type RawPair = Node;

impl Node {
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(children) => children.get(key),
            Node::Scalar(_) => None,
        }
    }

    pub fn to_field_value(&self) -> FieldValue {
        match self {
            Node::Scalar(value) => value.clone(),
            Node::Mapping(_) => FieldValue::Text(self.to_json().to_string()),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Node::Scalar(FieldValue::Missing) => Value::Null,
            Node::Scalar(FieldValue::Text(s)) => Value::String(s.clone()),
            Node::Scalar(FieldValue::Number(n)) => Value::Number(n.clone()),
            Node::Scalar(FieldValue::Bool(b)) => Value::Bool(*b),
            Node::Mapping(children) => Value::Object(
                children
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Scalar(FieldValue::Missing),
            Value::Bool(b) => Node::Scalar(FieldValue::Bool(b)),
            Value::Number(n) => Node::Scalar(FieldValue::Number(n)),
            Value::String(s) => Node::Scalar(FieldValue::Text(s)),
            // Lists are never walked into; keep them as their JSON text.
            arr @ Value::Array(_) => Node::Scalar(FieldValue::Text(arr.to_string())),
            Value::Object(map) => Node::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Node::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_null_becomes_missing() {
        let node = Node::from(json!({"liquidity": null}));
        assert_eq!(
            node.get("liquidity").map(Node::to_field_value),
            Some(FieldValue::Missing)
        );
    }

    #[test]
    fn arrays_are_kept_as_text() {
        let node = Node::from(json!({"labels": ["v2", "clmm"]}));
        assert_eq!(
            node.get("labels").map(Node::to_field_value),
            Some(FieldValue::from(r#"["v2","clmm"]"#))
        );
    }

    #[test]
    fn scalar_has_no_children() {
        let node = Node::from(json!("P1"));
        assert!(node.get("anything").is_none());
    }

    #[test]
    fn mapping_leaf_renders_as_json() {
        let node = Node::from(json!({"info": {"imageUrl": "x"}}));
        assert_eq!(
            node.get("info").map(Node::to_field_value),
            Some(FieldValue::from(r#"{"imageUrl":"x"}"#))
        );
    }

    #[test]
    fn display_matches_csv_cell() {
        assert_eq!(FieldValue::Missing.to_string(), "");
        assert_eq!(FieldValue::from(5000).to_string(), "5000");
        assert_eq!(FieldValue::from("1.23").to_string(), "1.23");
    }
}
