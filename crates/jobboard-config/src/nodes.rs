//! Helper functions for extracting values from KDL nodes.

use kdl::{KdlNode, KdlValue};

pub(crate) fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    first_arg(node)
        .and_then(|v| v.as_string())
        .map(|s| s.to_string())
}

/// First positional argument rendered as text; integers are accepted too.
pub(crate) fn get_first_scalar_arg(node: &KdlNode) -> Option<String> {
    first_arg(node).and_then(|v| match v {
        KdlValue::String(s) => Some(s.clone()),
        KdlValue::Integer(i) => Some(i.to_string()),
        _ => None,
    })
}

pub(crate) fn get_first_integer_arg(node: &KdlNode) -> Option<i128> {
    first_arg(node).and_then(|v| v.as_integer())
}

pub(crate) fn get_all_string_args(node: &KdlNode) -> Vec<String> {
    node.entries()
        .iter()
        .filter(|e| e.name().is_none())
        .filter_map(|e| e.value().as_string())
        .map(|s| s.to_string())
        .collect()
}

fn first_arg(node: &KdlNode) -> Option<&KdlValue> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .map(|e| e.value())
}
