//! Read-only views of external chains for visualization.

use hashviz_core::Key;
use serde::Serialize;

/// One node of a chain view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainNodeView {
    /// Key stored in the node.
    pub key: Key,
    /// `true` if the key equals the highlighted key.
    pub is_highlighted: bool,
}

/// View of the chain anchored at one slot.
///
/// Views are rebuilt on demand and never feed back into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainEntry {
    /// Slot the chain is anchored at.
    pub index: usize,
    /// Nodes from head to tail.
    pub nodes: Vec<ChainNodeView>,
    /// `true` if any node is highlighted.
    pub is_highlighted: bool,
}

impl ChainEntry {
    /// Builds a view from a slot's keys in chain order.
    ///
    /// Returns `None` for an empty chain.
    pub fn from_keys<'a, I>(index: usize, keys: I, highlight: Option<&Key>) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Key>,
    {
        let nodes: Vec<ChainNodeView> = keys
            .into_iter()
            .map(|key| ChainNodeView {
                key: key.clone(),
                is_highlighted: highlight == Some(key),
            })
            .collect();

        if nodes.is_empty() {
            return None;
        }

        let is_highlighted = nodes.iter().any(|node| node.is_highlighted);
        Some(Self {
            index,
            nodes,
            is_highlighted,
        })
    }

    /// Returns the keys of the chain in order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.nodes.iter().map(|node| &node.key)
    }

    /// Returns the number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the chain has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
