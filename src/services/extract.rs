use crate::types::models::{FieldValue, Node};

/// Walks a dot-separated path through nested mappings. Stops at the first
/// segment that is absent or whose parent is not a mapping.
pub fn lookup<'a>(record: &'a Node, path: &str) -> Option<&'a Node> {
    path.split('.')
        .try_fold(record, |current, segment| current.get(segment))
}

pub fn get_nested(record: &Node, path: &str) -> FieldValue {
    lookup(record, path)
        .map(Node::to_field_value)
        .unwrap_or_default()
}
