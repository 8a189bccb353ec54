#![forbid(unsafe_code)]

//! An in-memory visual tree for tests and harnesses.
//!
//! [`MockTree`] implements [`VisualTree`] over plain data: nodes with
//! parents, ordered children, rects, classes, and host-selector sets. It
//! is the test double every suite in this workspace drives the engine
//! against, and it is exported so downstream hosts can test their own
//! delegates without a real UI.
//!
//! Containers created with [`MockTree::stacked_container`] restack their
//! visible children after every mutation, emulating the reflow a real
//! host performs — which is exactly what the placement silence window and
//! the swap hysteresis exist to cope with.
//!
//! Selector matching is literal: `matches(node, s)` is true iff `s` was
//! added to the node with [`MockTree::add_selector`].

use ahash::AHashMap;
use std::collections::BTreeSet;

use sortkit_core::event::NodeId;
use sortkit_core::geometry::{Axis, Point, Rect};

use crate::tree::VisualTree;

#[derive(Debug, Clone, Default)]
struct MockNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Option<Rect>,
    visible: bool,
    element: bool,
    animating: bool,
    editable: bool,
    classes: BTreeSet<String>,
    selectors: BTreeSet<String>,
    item_id: Option<String>,
}

/// Auto-layout parameters for a stacked container.
#[derive(Debug, Clone, Copy)]
struct StackLayout {
    axis: Axis,
    origin: Point,
    item_span: f64,
    cross_span: f64,
    gap: f64,
}

/// In-memory [`VisualTree`] implementation.
#[derive(Debug, Default)]
pub struct MockTree {
    nodes: AHashMap<NodeId, MockNode>,
    layouts: AHashMap<NodeId, StackLayout>,
    observed: Vec<NodeId>,
    next: u64,
    mutations: usize,
}

impl MockTree {
    /// An empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, node: MockNode) -> NodeId {
        self.next += 1;
        let id = NodeId(self.next);
        self.nodes.insert(id, node);
        id
    }

    /// A detached element node with no rect.
    pub fn add_element(&mut self) -> NodeId {
        self.alloc(MockNode {
            visible: true,
            element: true,
            ..MockNode::default()
        })
    }

    /// A non-element node (text-like), attached under `parent`.
    pub fn add_text(&mut self, parent: NodeId) -> NodeId {
        let id = self.alloc(MockNode {
            visible: true,
            element: false,
            ..MockNode::default()
        });
        self.attach(parent, id, None);
        id
    }

    /// An element child of `parent` (no auto-layout participation of its
    /// own; useful for handles and wrappers).
    pub fn add_child(&mut self, parent: NodeId) -> NodeId {
        let id = self.add_element();
        self.attach(parent, id, None);
        id
    }

    /// A container element whose visible children restack along `axis`
    /// from `origin`, each `item_span` long and `cross_span` wide, with
    /// `gap` pixels between them.
    pub fn stacked_container(
        &mut self,
        axis: Axis,
        origin: Point,
        item_span: f64,
        cross_span: f64,
        gap: f64,
    ) -> NodeId {
        let id = self.add_element();
        self.layouts.insert(
            id,
            StackLayout {
                axis,
                origin,
                item_span,
                cross_span,
                gap,
            },
        );
        self.set_container_rect(id);
        id
    }

    /// Append an item element with the given stable identifier to a
    /// container and restack.
    pub fn push_item(&mut self, container: NodeId, item_id: &str) -> NodeId {
        let id = self.alloc(MockNode {
            visible: true,
            element: true,
            item_id: Some(item_id.to_owned()),
            ..MockNode::default()
        });
        self.attach(container, id, None);
        id
    }

    /// Override a node's rect (sticks until the next relayout).
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.rect = Some(rect);
        }
    }

    /// Make a node unmeasurable.
    pub fn clear_rect(&mut self, node: NodeId) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.rect = None;
        }
    }

    /// Show or hide a node (restacks its container).
    pub fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.visible = visible;
        }
        if let Some(parent) = self.nodes.get(&node).and_then(|n| n.parent) {
            self.relayout(parent);
        }
    }

    /// Mark a node as mid-animation.
    pub fn set_animating(&mut self, node: NodeId, animating: bool) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.animating = animating;
        }
    }

    /// Mark a node as hosting editable text.
    pub fn set_editable(&mut self, node: NodeId, editable: bool) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.editable = editable;
        }
    }

    /// Make `matches(node, selector)` true.
    pub fn add_selector(&mut self, node: NodeId, selector: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.selectors.insert(selector.to_owned());
        }
    }

    /// Assign a stable identifier.
    pub fn set_item_id(&mut self, node: NodeId, item_id: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.item_id = Some(item_id.to_owned());
        }
    }

    /// Remove the stable identifier.
    pub fn clear_item_id(&mut self, node: NodeId) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.item_id = None;
        }
    }

    /// Whether the node currently carries a class.
    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.classes.contains(class))
    }

    /// Total insert/remove mutations performed so far.
    #[must_use]
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    /// Whether `root` has an active observation.
    #[must_use]
    pub fn is_observed(&self, root: NodeId) -> bool {
        self.observed.contains(&root)
    }

    /// Item identifiers of a container's visible element children, in
    /// order (test convenience).
    #[must_use]
    pub fn ids_in(&self, container: NodeId) -> Vec<String> {
        self.children(container)
            .into_iter()
            .filter(|&c| self.is_visible(c) && self.is_element(c))
            .filter_map(|c| self.item_id(c))
            .collect()
    }

    fn detach(&mut self, node: NodeId) {
        let parent = self.nodes.get(&node).and_then(|n| n.parent);
        if let Some(p) = parent {
            if let Some(pn) = self.nodes.get_mut(&p) {
                pn.children.retain(|&c| c != node);
            }
            if let Some(n) = self.nodes.get_mut(&node) {
                n.parent = None;
            }
            self.relayout(p);
        }
    }

    fn attach(&mut self, parent: NodeId, node: NodeId, before: Option<NodeId>) {
        self.detach(node);
        if let Some(pn) = self.nodes.get_mut(&parent) {
            let idx = before
                .and_then(|b| pn.children.iter().position(|&c| c == b))
                .unwrap_or(pn.children.len());
            pn.children.insert(idx, node);
        }
        if let Some(n) = self.nodes.get_mut(&node) {
            n.parent = Some(parent);
        }
        self.relayout(parent);
    }

    fn set_container_rect(&mut self, container: NodeId) {
        let Some(layout) = self.layouts.get(&container).copied() else {
            return;
        };
        let count = self
            .nodes
            .get(&container)
            .map_or(0, |n| n.children.iter().filter(|&&c| self.is_visible(c)).count());
        let main = if count == 0 {
            0.0
        } else {
            count as f64 * layout.item_span + (count as f64 - 1.0) * layout.gap
        };
        let rect = match layout.axis {
            Axis::Vertical => Rect::new(layout.origin.x, layout.origin.y, layout.cross_span, main),
            Axis::Horizontal => {
                Rect::new(layout.origin.x, layout.origin.y, main, layout.cross_span)
            }
        };
        if let Some(n) = self.nodes.get_mut(&container) {
            n.rect = Some(rect);
        }
    }

    fn relayout(&mut self, container: NodeId) {
        let Some(layout) = self.layouts.get(&container).copied() else {
            return;
        };
        let children: Vec<NodeId> = self
            .nodes
            .get(&container)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        let mut cursor = layout.origin.along(layout.axis);
        for child in children {
            if !self.is_visible(child) || !self.is_element(child) {
                continue;
            }
            let rect = match layout.axis {
                Axis::Vertical => Rect::new(
                    layout.origin.x,
                    cursor,
                    layout.cross_span,
                    layout.item_span,
                ),
                Axis::Horizontal => Rect::new(
                    cursor,
                    layout.origin.y,
                    layout.item_span,
                    layout.cross_span,
                ),
            };
            if let Some(n) = self.nodes.get_mut(&child) {
                n.rect = Some(rect);
            }
            cursor += layout.item_span + layout.gap;
        }
        self.set_container_rect(container);
    }
}

impl VisualTree for MockTree {
    fn is_element(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.element)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    fn children(&self, container: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&container)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn rect(&self, node: NodeId) -> Option<Rect> {
        self.nodes.get(&node).and_then(|n| n.rect)
    }

    fn is_visible(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.visible)
    }

    fn is_animating(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.animating)
    }

    fn is_text_editable(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.editable)
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.selectors.contains(selector))
    }

    fn item_id(&self, node: NodeId) -> Option<String> {
        self.nodes.get(&node).and_then(|n| n.item_id.clone())
    }

    fn insert_before(&mut self, container: NodeId, node: NodeId, reference: Option<NodeId>) {
        self.mutations += 1;
        self.attach(container, node, reference);
    }

    fn remove(&mut self, node: NodeId) {
        self.mutations += 1;
        self.detach(node);
    }

    fn clone_node(&mut self, node: NodeId) -> NodeId {
        let copied = self.nodes.get(&node).map_or_else(MockNode::default, |n| MockNode {
            parent: None,
            children: Vec::new(),
            rect: n.rect,
            visible: n.visible,
            element: n.element,
            animating: false,
            editable: n.editable,
            classes: n.classes.clone(),
            selectors: n.selectors.clone(),
            item_id: n.item_id.clone(),
        });
        self.alloc(copied)
    }

    fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
        if let Some(n) = self.nodes.get_mut(&node) {
            if on {
                n.classes.insert(class.to_owned());
            } else {
                n.classes.remove(class);
            }
        }
    }

    fn observe(&mut self, root: NodeId) {
        self.observed.push(root);
    }

    fn unobserve(&mut self, root: NodeId) {
        self.observed.retain(|&r| r != root);
    }
}
