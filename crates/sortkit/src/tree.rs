#![forbid(unsafe_code)]

//! The visual-tree capability: everything the engine needs from its host.
//!
//! The engine owns no nodes and renders nothing. It reasons about opaque
//! [`NodeId`] handles and asks the host to measure, enumerate, and move
//! them through this trait. Every method is synchronous; mutation methods
//! follow insert-moves semantics (inserting an attached node detaches it
//! from its old parent first), matching how retained-mode UI trees behave.
//!
//! # Contract
//!
//! - `rect` returning `None` means measurement is unavailable right now;
//!   the engine degrades to a no-op for that candidate, it never fails.
//! - `children` reports *all* child nodes in order. The engine filters by
//!   visibility, element-ness, and the container's item selector itself.
//!   If the host parents a drag proxy ("ghost") inside a container, it
//!   must report that node as not visible.
//! - `matches` interprets selector strings; the engine never parses them.
//! - `observe`/`unobserve` are subscription bookkeeping: the engine calls
//!   them at container registration and teardown so the host knows when to
//!   attach and detach its capture-phase input listeners.

use sortkit_core::event::NodeId;
use sortkit_core::geometry::Rect;

/// Host-implemented access to the rendered tree.
pub trait VisualTree {
    /// Whether the handle refers to an element node (as opposed to text or
    /// a dead handle). Container roots must be elements.
    fn is_element(&self, node: NodeId) -> bool;

    /// The node's parent, if attached.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// All child nodes of `container`, in visual order.
    fn children(&self, container: NodeId) -> Vec<NodeId>;

    /// The node's bounding box in the shared coordinate space, or `None`
    /// when it cannot be measured.
    fn rect(&self, node: NodeId) -> Option<Rect>;

    /// Whether the node currently participates in layout.
    fn is_visible(&self, node: NodeId) -> bool;

    /// Whether the node is mid-animation. Animating nodes are skipped as
    /// swap targets so a tween never gets re-targeted halfway.
    fn is_animating(&self, _node: NodeId) -> bool {
        false
    }

    /// Whether the node hosts editable text. Presses on editable content
    /// never start a drag.
    fn is_text_editable(&self, _node: NodeId) -> bool {
        false
    }

    /// Whether the node matches a host-interpreted selector string.
    fn matches(&self, node: NodeId, selector: &str) -> bool;

    /// A host-assigned stable identifier for serialization, if one exists.
    fn item_id(&self, _node: NodeId) -> Option<String> {
        None
    }

    /// Insert `node` into `container` before `reference` (append when
    /// `reference` is `None`). Detaches `node` from its previous parent.
    fn insert_before(&mut self, container: NodeId, node: NodeId, reference: Option<NodeId>);

    /// Detach `node` from the tree.
    fn remove(&mut self, node: NodeId);

    /// Produce a detached copy of `node`. The engine inserts it explicitly.
    fn clone_node(&mut self, node: NodeId) -> NodeId;

    /// Toggle a presentation class on the node.
    fn set_class(&mut self, node: NodeId, class: &str, on: bool);

    /// The engine is interested in input events under `root`.
    fn observe(&mut self, _root: NodeId) {}

    /// The engine no longer needs events under `root`.
    fn unobserve(&mut self, _root: NodeId) {}

    /// Whether `node` is `root` or a descendant of it.
    fn contains(&self, root: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == root {
                return true;
            }
            cur = self.parent(n);
        }
        false
    }

    /// Nearest ancestor-or-self of `node` satisfying `pred`, searching no
    /// higher than `root`. Returns `None` when `node` is not under `root`.
    fn closest_by(
        &self,
        node: NodeId,
        root: NodeId,
        pred: &dyn Fn(NodeId) -> bool,
    ) -> Option<NodeId> {
        let mut chain = Vec::new();
        let mut cur = Some(node);
        let mut bounded = false;
        while let Some(n) = cur {
            chain.push(n);
            if n == root {
                bounded = true;
                break;
            }
            cur = self.parent(n);
        }
        if !bounded {
            return None;
        }
        chain.into_iter().find(|&n| pred(n))
    }

    /// Nearest ancestor-or-self of `node` matching `selector`, bounded by
    /// `root`.
    fn closest_matching(&self, node: NodeId, root: NodeId, selector: &str) -> Option<NodeId> {
        self.closest_by(node, root, &|n| self.matches(n, selector))
    }
}

/// Position of `node` among the raw children of `parent`.
pub(crate) fn index_of(tree: &impl VisualTree, parent: NodeId, node: NodeId) -> Option<usize> {
    tree.children(parent).iter().position(|&c| c == node)
}

/// The raw child of `parent` immediately following `node`, if any.
pub(crate) fn next_sibling(
    tree: &impl VisualTree,
    parent: NodeId,
    node: NodeId,
) -> Option<NodeId> {
    let children = tree.children(parent);
    let idx = children.iter().position(|&c| c == node)?;
    children.get(idx + 1).copied()
}
