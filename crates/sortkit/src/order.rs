#![forbid(unsafe_code)]

//! Order serialization and reconciliation.
//!
//! An order is a sequence of item identifiers: the host-assigned stable id
//! when one exists, otherwise an id generated from the node handle (which
//! is stable for the node's lifetime). Applying an order reconciles the
//! container's children to match — applying the order a container already
//! has performs zero node moves.

use sortkit_core::event::NodeId;

use crate::tree::VisualTree;

/// The identifier used for an item in serialized orders.
pub(crate) fn identifier<T: VisualTree>(tree: &T, node: NodeId) -> String {
    tree.item_id(node)
        .unwrap_or_else(|| format!("sk-{:x}", node.0))
}

/// A serialized container order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct OrderSnapshot {
    /// Item identifiers in visual order.
    pub items: Vec<String>,
}

impl OrderSnapshot {
    /// Wrap an identifier sequence.
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl From<Vec<String>> for OrderSnapshot {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

/// The nodes a desired order refers to, in desired order, or `None` when
/// the container already matches (in which case nothing must be touched —
/// not even an animation capture).
pub(crate) fn plan<T: VisualTree>(
    tree: &T,
    items: &[NodeId],
    desired: &[String],
) -> Option<Vec<NodeId>> {
    let ids: Vec<(String, NodeId)> = items
        .iter()
        .map(|&n| (identifier(tree, n), n))
        .collect();
    let mut listed: Vec<NodeId> = Vec::with_capacity(desired.len());
    for id in desired {
        if let Some(&(_, node)) = ids.iter().find(|(i, _)| i == id)
            && !listed.contains(&node)
        {
            listed.push(node);
        }
    }
    let current_listed: Vec<NodeId> = items
        .iter()
        .copied()
        .filter(|n| listed.contains(n))
        .collect();
    if current_listed == listed {
        return None;
    }
    Some(listed)
}
