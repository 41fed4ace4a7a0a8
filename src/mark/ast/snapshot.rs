//! Snapshot - a normalized, serializable view of a node tree
//!
//! Serializers consume a [`Snapshot`] rather than walking nodes themselves, so each format
//! only deals with presentation. A snapshot drops everything that only matters while
//! lexing (nested token sets, parent descriptors) and keeps what a reader cares about.

use super::node::Node;
use super::range::Range;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The node kind (e.g., "paragraph", "strong")
    pub kind: String,

    pub range: Range,

    /// The matched text
    pub text: String,

    /// Named capture groups that participated in the match
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub groups: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Snapshot>,
}

/// Snapshot a node and all its descendants
pub fn snapshot_from_node(node: &Node) -> Snapshot {
    Snapshot {
        kind: node.kind().to_string(),
        range: node.range(),
        text: node.text().to_string(),
        groups: node
            .groups()
            .named()
            .map(|(name, group)| (name.to_string(), group.text.clone()))
            .collect(),
        children: node.children().iter().map(snapshot_from_node).collect(),
    }
}
