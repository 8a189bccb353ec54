#![forbid(unsafe_code)]

//! The drag-session controller and container registry.
//!
//! [`Sorter`] owns everything mutable: the registered containers, the at
//! most one live [`DragSession`], and the placement silence deadline. All
//! input funnels through [`Sorter::handle_event`], an explicit transition
//! function over [`InputEvent`]; [`Sorter::poll`] fires the start delay
//! when no movement arrives to do it.
//!
//! # State Machine
//!
//! - **Idle** (no session): a qualifying primary-button press on a
//!   draggable item creates a `Pending` session.
//! - **Pending**: waits out the configured start delay. Movement beyond
//!   the cancellation threshold, or any release, drops back to Idle
//!   without a drag (the press was a click or a scroll).
//! - **Dragging**: every movement runs hit-testing, permission
//!   arbitration, and placement. Release (or platform cancellation, or an
//!   abort verdict from the veto hook) finalizes to **Dropped**, which
//!   reports the final resting place and resets to Idle.
//!
//! # Invariants
//!
//! 1. A second pointer-down while a session exists is ignored entirely.
//! 2. Movement events are processed in arrival order; each yields at most
//!    one placement.
//! 3. Every exit path clears the session's timers; nothing fires after
//!    Idle is reached.
//!
//! # Failure Modes
//!
//! - Presses failing the filter/handle/editable/disabled gates are silent
//!   no-ops, not errors.
//! - A container unregistered mid-session takes the session down with it
//!   (references cleared, classes removed, no notifications).

use ahash::AHashMap;
use sortkit_core::event::{InputEvent, Modifiers, NodeId, PointerButton};
use sortkit_core::geometry::{Axis, Point};
use sortkit_core::timer::Deadline;
use web_time::Instant;

use crate::delegate::{SessionContext, SortDelegate};
use crate::group::{self, GroupDescriptor, GroupQuery, PullMode};
use crate::options::{Direction, DirectionQuery, Filter, SortableOptions};
use crate::order;
use crate::placement::{self, Applied};
use crate::resolver::{self, Decision};
use crate::session::{DragSession, Phase};
use crate::tree::{self, VisualTree};
use crate::{empty, Error, Result};

/// Handle to a registered container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub u64);

/// A registered container: its root node, options, and normalized group.
#[derive(Debug, Clone)]
pub(crate) struct Container {
    pub root: NodeId,
    pub options: SortableOptions,
    pub group: GroupDescriptor,
}

impl Container {
    /// The container's visible items, in order: element children matching
    /// the item selector (all visible element children when none is set).
    pub fn items<T: VisualTree>(&self, tree: &T) -> Vec<NodeId> {
        tree.children(self.root)
            .into_iter()
            .filter(|&c| tree.is_element(c) && tree.is_visible(c))
            .filter(|&c| {
                self.options
                    .draggable
                    .as_deref()
                    .is_none_or(|sel| tree.matches(c, sel))
            })
            .collect()
    }

    /// Resolve the container's layout axis for this movement.
    pub fn axis<T: VisualTree>(&self, tree: &T, pointer: Point, target: Option<NodeId>) -> Axis {
        match &self.options.direction {
            Direction::Vertical => Axis::Vertical,
            Direction::Horizontal => Axis::Horizontal,
            Direction::Resolver(resolve) => resolve(&DirectionQuery { pointer, target }),
            Direction::Auto => {
                let items = self.items(tree);
                let first = items.first().and_then(|&n| tree.rect(n));
                let second = items.get(1).and_then(|&n| tree.rect(n));
                match (first, second) {
                    (Some(a), Some(b)) if b.top >= a.bottom() - 1e-6 => Axis::Vertical,
                    (Some(_), Some(_)) => Axis::Horizontal,
                    _ => Axis::Vertical,
                }
            }
        }
    }
}

/// The engine: container registry plus the single optional drag session.
#[derive(Debug, Default)]
pub struct Sorter {
    containers: AHashMap<ContainerId, Container>,
    session: Option<DragSession>,
    silence: Option<Deadline>,
    next_id: u64,
}

impl Sorter {
    /// An engine with no registered containers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- registry ----------------------------------------------------------

    /// Register a container root.
    ///
    /// Fails fast with [`Error::InvalidRoot`] when `root` is not an
    /// element. On success the host is signaled to observe input under
    /// the root, and a persisted order is applied when the options enable
    /// the store.
    pub fn register<T: VisualTree, D: SortDelegate + ?Sized>(
        &mut self,
        root: NodeId,
        options: SortableOptions,
        tree: &mut T,
        delegate: &mut D,
    ) -> Result<ContainerId> {
        if !tree.is_element(root) {
            return Err(Error::InvalidRoot(root));
        }
        let group = options.group.normalize();
        self.next_id += 1;
        let id = ContainerId(self.next_id);
        let store = options.store;
        self.containers.insert(
            id,
            Container {
                root,
                options,
                group,
            },
        );
        tree.observe(root);
        tracing::debug!(message = "container.register", container = id.0, root = root.0);
        if store && let Some(order) = delegate.load_order(id) {
            // Best effort: the container is known to exist at this point.
            let _ = self.sort(id, &order, false, tree, delegate);
        }
        Ok(id)
    }

    /// Tear down a container: stop observing its root and clear any
    /// session that references it.
    pub fn unregister<T: VisualTree>(&mut self, id: ContainerId, tree: &mut T) -> Result<()> {
        let container = self
            .containers
            .remove(&id)
            .ok_or(Error::UnknownContainer(id))?;
        tree.unobserve(container.root);
        if self
            .session
            .as_ref()
            .is_some_and(|s| s.origin == id || s.current == id)
        {
            if let Some(session) = self.session.take() {
                self.clear_item_classes(&session, tree);
            }
            self.silence = None;
            tracing::debug!(message = "session.discarded_with_container", container = id.0);
        }
        tracing::debug!(message = "container.unregister", container = id.0);
        Ok(())
    }

    /// A registered container's options.
    #[must_use]
    pub fn options(&self, id: ContainerId) -> Option<&SortableOptions> {
        self.containers.get(&id).map(|c| &c.options)
    }

    /// A registered container's root node.
    #[must_use]
    pub fn root_of(&self, id: ContainerId) -> Option<NodeId> {
        self.containers.get(&id).map(|c| c.root)
    }

    /// Update a container's options in place. The group descriptor is
    /// re-derived afterwards, so group changes take effect immediately.
    pub fn update_options(
        &mut self,
        id: ContainerId,
        update: impl FnOnce(&mut SortableOptions),
    ) -> Result<()> {
        let container = self
            .containers
            .get_mut(&id)
            .ok_or(Error::UnknownContainer(id))?;
        update(&mut container.options);
        container.group = container.options.group.normalize();
        Ok(())
    }

    // -- queries -----------------------------------------------------------

    /// Serialize the container's current order as item identifiers.
    pub fn to_array<T: VisualTree>(&self, id: ContainerId, tree: &T) -> Result<Vec<String>> {
        let container = self.containers.get(&id).ok_or(Error::UnknownContainer(id))?;
        Ok(container
            .items(tree)
            .into_iter()
            .map(|n| order::identifier(tree, n))
            .collect())
    }

    /// Whether a drag session is live.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.phase == Phase::Dragging)
    }

    /// The dragged item, while a session exists.
    #[must_use]
    pub fn active_item(&self) -> Option<NodeId> {
        self.session.as_ref().map(|s| s.item)
    }

    /// The container the dragged item currently rests in.
    #[must_use]
    pub fn active_container(&self) -> Option<ContainerId> {
        self.session.as_ref().map(|s| s.current)
    }

    /// Pointer offset within the dragged item at press time. Hosts use
    /// this to position a drag proxy under the pointer.
    #[must_use]
    pub fn anchor_offset(&self) -> Option<Point> {
        self.session.as_ref().map(|s| s.anchor)
    }

    // -- imperative operations ---------------------------------------------

    /// Apply an externally supplied order by reconciliation.
    ///
    /// Identifiers not present in the container are skipped; items not
    /// mentioned keep their relative position ahead of the mentioned ones.
    /// Applying the order the container already has performs zero node
    /// moves and requests no animation capture.
    pub fn sort<T: VisualTree, D: SortDelegate + ?Sized>(
        &mut self,
        id: ContainerId,
        desired: &[String],
        animate: bool,
        tree: &mut T,
        delegate: &mut D,
    ) -> Result<()> {
        let container = self.containers.get(&id).ok_or(Error::UnknownContainer(id))?;
        let root = container.root;
        let animation = container.options.animation;
        let items = container.items(tree);
        let Some(listed) = order::plan(tree, &items, desired) else {
            return Ok(());
        };
        if animate {
            delegate.capture_state(&[id]);
        }
        for node in &listed {
            tree.insert_before(root, *node, None);
        }
        if animate {
            delegate.animate(&[id], animation);
        }
        tracing::debug!(message = "order.applied", container = id.0, moves = listed.len());
        Ok(())
    }

    /// Persist the container's current order through the delegate's store.
    pub fn save<T: VisualTree, D: SortDelegate + ?Sized>(
        &mut self,
        id: ContainerId,
        tree: &T,
        delegate: &mut D,
    ) -> Result<()> {
        let order = self.to_array(id, tree)?;
        delegate.save_order(id, &order);
        Ok(())
    }

    // -- event handling ----------------------------------------------------

    /// The controller's transition function. Call for every input event,
    /// in arrival order.
    pub fn handle_event<T: VisualTree, D: SortDelegate + ?Sized>(
        &mut self,
        event: &InputEvent,
        now: Instant,
        tree: &mut T,
        delegate: &mut D,
    ) {
        match *event {
            InputEvent::PointerDown {
                pos,
                button,
                target,
                modifiers,
                touch,
            } => self.on_pointer_down(pos, button, target, modifiers, touch, now, tree, delegate),
            InputEvent::PointerMove { pos, modifiers }
            | InputEvent::DragOver { pos, modifiers } => {
                self.on_movement(pos, modifiers, now, tree, delegate);
            }
            InputEvent::PointerUp { .. }
            | InputEvent::DragDrop { .. }
            | InputEvent::PointerCancel
            | InputEvent::DragEnd => self.on_release(now, tree, delegate),
        }
    }

    /// Fire due timers (the start delay) when no movement event arrives to
    /// do it. Call periodically, e.g. on an animation tick.
    pub fn poll<T: VisualTree, D: SortDelegate + ?Sized>(
        &mut self,
        now: Instant,
        tree: &mut T,
        delegate: &mut D,
    ) {
        let due = self.session.as_ref().is_some_and(|s| {
            s.phase == Phase::Pending && s.delay.is_some_and(|d| d.is_expired(now))
        });
        if due {
            self.promote(tree, delegate);
        }
    }

    // -- press -------------------------------------------------------------

    #[allow(clippy::too_many_arguments)]
    fn on_pointer_down<T: VisualTree, D: SortDelegate + ?Sized>(
        &mut self,
        pos: Point,
        button: PointerButton,
        target: NodeId,
        _modifiers: Modifiers,
        touch: bool,
        now: Instant,
        tree: &mut T,
        delegate: &mut D,
    ) {
        if self.session.is_some() {
            tracing::trace!(message = "press.ignored_active_session");
            return;
        }
        if button != PointerButton::Primary {
            return;
        }
        let Some(id) = self.container_of_node(target, tree) else {
            return;
        };
        let Some(container) = self.containers.get(&id) else {
            return;
        };
        if container.options.disabled || tree.is_text_editable(target) {
            return;
        }
        let Some(item) = press_item(tree, container, target) else {
            return;
        };
        match &container.options.filter {
            Filter::None => {}
            Filter::Selector(sel) => {
                if tree.closest_matching(target, container.root, sel).is_some() {
                    return;
                }
            }
            Filter::Predicate(excluded) => {
                if excluded(target) {
                    return;
                }
            }
        }
        if let Some(handle) = &container.options.handle
            && tree.closest_matching(target, item, handle).is_none()
        {
            return;
        }

        let anchor = tree
            .rect(item)
            .map_or_else(Point::default, |r| Point::new(pos.x - r.left, pos.y - r.top));
        let origin_index = tree::index_of(tree, container.root, item).unwrap_or(0);
        let origin_draggable_index = container
            .items(tree)
            .iter()
            .position(|&n| n == item)
            .unwrap_or(0);
        let delayed = !container.options.delay.is_zero()
            && (!container.options.delay_on_touch_only || touch);
        let delay = delayed.then(|| Deadline::after(now, container.options.delay));
        let chosen_class = container.options.chosen_class.clone();

        tree.set_class(item, &chosen_class, true);
        self.session = Some(DragSession::pending(
            item,
            id,
            origin_index,
            origin_draggable_index,
            anchor,
            pos,
            delay,
        ));
        tracing::debug!(
            message = "session.pending",
            item = item.0,
            container = id.0,
            index = origin_index,
            delayed
        );
        if !delayed {
            self.promote(tree, delegate);
        }
    }

    fn promote<T: VisualTree, D: SortDelegate + ?Sized>(
        &mut self,
        tree: &mut T,
        delegate: &mut D,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.phase = Phase::Dragging;
        session.delay = None;
        let (item, origin) = (session.item, session.origin);
        if let Some(container) = self.containers.get(&origin) {
            tree.set_class(item, &container.options.ghost_class, true);
            tree.set_class(item, &container.options.drag_class, true);
        }
        tracing::debug!(message = "session.start", item = item.0, container = origin.0);
        if let Some(ctx) = self.context() {
            delegate.on_start(&ctx);
        }
    }

    // -- movement ----------------------------------------------------------

    fn on_movement<T: VisualTree, D: SortDelegate + ?Sized>(
        &mut self,
        pos: Point,
        modifiers: Modifiers,
        now: Instant,
        tree: &mut T,
        delegate: &mut D,
    ) {
        let Some(phase) = self.session.as_ref().map(|s| s.phase) else {
            return;
        };
        match phase {
            Phase::Pending => {
                let (deadline, press_pos, origin) = {
                    let Some(s) = self.session.as_ref() else {
                        return;
                    };
                    (s.delay, s.press_pos, s.origin)
                };
                let Some(deadline) = deadline else {
                    // No-delay sessions promote at press time.
                    return;
                };
                if deadline.is_expired(now) {
                    self.promote(tree, delegate);
                    self.drag_to(pos, modifiers, now, tree, delegate);
                    return;
                }
                let threshold = self
                    .containers
                    .get(&origin)
                    .map_or(0.0, |c| c.options.touch_start_threshold);
                if press_pos.chebyshev_distance(pos) >= threshold {
                    self.cancel_pending(tree);
                }
            }
            Phase::Dragging => self.drag_to(pos, modifiers, now, tree, delegate),
            Phase::Dropped => {}
        }
    }

    fn drag_to<T: VisualTree, D: SortDelegate + ?Sized>(
        &mut self,
        pos: Point,
        modifiers: Modifiers,
        now: Instant,
        tree: &mut T,
        delegate: &mut D,
    ) {
        if let Some(guard) = self.silence {
            if !guard.is_expired(now) {
                return;
            }
            self.silence = None;
        }
        let Some(mut session) = self.session.take() else {
            return;
        };
        session.moved = true;

        let (dest, decision, pull, axis) = self.decide(&mut session, pos, modifiers, tree);

        match decision {
            Decision::None => {
                self.session = Some(session);
            }
            decision => {
                let applied = placement::apply(
                    &self.containers,
                    &mut session,
                    &mut self.silence,
                    dest,
                    decision,
                    pull,
                    axis,
                    pos,
                    now,
                    tree,
                    delegate,
                );
                match applied {
                    Applied::Aborted => self.finalize(session, tree, delegate),
                    Applied::Committed => {
                        self.session = Some(session);
                        if let Some(ctx) = self.context() {
                            delegate.on_change(&ctx);
                        }
                    }
                    Applied::Rejected => self.session = Some(session),
                }
            }
        }
    }

    /// Resolve one movement into (destination, decision, pull verdict,
    /// axis). Pure with respect to the tree; only the session's swap state
    /// may change.
    fn decide<T: VisualTree>(
        &self,
        session: &mut DragSession,
        pos: Point,
        modifiers: Modifiers,
        tree: &T,
    ) -> (ContainerId, Decision, Option<PullMode>, Axis) {
        let none = (session.current, Decision::None, None, Axis::Vertical);

        let hovered = self.container_at_point(pos, tree);
        let Some(dest) = hovered else {
            // Not over any container: a nearby empty container may attract
            // the drop.
            if let Some(empty_id) = empty::nearest_empty_container(&self.containers, tree, pos) {
                if let Some(pull) = self.arbitrate(session, empty_id, modifiers) {
                    return (empty_id, Decision::AppendInto, pull, Axis::Vertical);
                }
            }
            return none;
        };
        let Some(container) = self.containers.get(&dest) else {
            return none;
        };
        let Some(pull) = self.arbitrate(session, dest, modifiers) else {
            tracing::trace!(message = "move.denied_by_group", to = dest.0);
            return none;
        };
        if dest == session.current && !container.options.sort {
            return none;
        }

        let items = container.items(tree);
        let foreign: Vec<NodeId> = items
            .iter()
            .copied()
            .filter(|&n| n != session.item)
            .collect();
        if foreign.is_empty() {
            if items.is_empty() {
                return (dest, Decision::AppendInto, pull, Axis::Vertical);
            }
            // Only the dragged item itself: nothing to reorder.
            return none;
        }

        let axis = container.axis(tree, pos, None);
        let different_level = tree.parent(session.item) != Some(container.root);
        let item = session.item;
        let decision = resolver::resolve(
            tree,
            item,
            &items,
            pos,
            axis,
            &container.options,
            different_level,
            &mut session.swap,
        );
        (dest, decision, pull, axis)
    }

    /// Permission check for placing into `dest`. `Some(None)` would be
    /// ambiguous, so: returns `None` when denied, `Some(pull)` when
    /// allowed (`pull` is `Some` only when entering a foreign container
    /// under an explicit verdict).
    fn arbitrate(
        &self,
        session: &DragSession,
        dest: ContainerId,
        modifiers: Modifiers,
    ) -> Option<Option<PullMode>> {
        if dest == session.current {
            return Some(None);
        }
        if dest == session.origin {
            // Returning home is a revert, always permitted.
            return Some(None);
        }
        let origin = self.containers.get(&session.origin)?;
        let target = self.containers.get(&dest)?;
        let query = GroupQuery {
            from: session.origin,
            from_group: origin.group.name.as_deref(),
            to: dest,
            to_group: target.group.name.as_deref(),
            item: session.item,
            modifiers,
        };
        group::authorize(&origin.group, &target.group, &query).map(Some)
    }

    // -- release -----------------------------------------------------------

    fn on_release<T: VisualTree, D: SortDelegate + ?Sized>(
        &mut self,
        _now: Instant,
        tree: &mut T,
        delegate: &mut D,
    ) {
        let Some(session) = self.session.take() else {
            return;
        };
        match session.phase {
            Phase::Pending => {
                if let Some(container) = self.containers.get(&session.origin) {
                    tree.set_class(session.item, &container.options.chosen_class, false);
                }
                tracing::trace!(message = "session.click", item = session.item.0);
            }
            Phase::Dragging | Phase::Dropped => self.finalize(session, tree, delegate),
        }
    }

    fn cancel_pending<T: VisualTree>(&mut self, tree: &mut T) {
        if let Some(session) = self.session.take() {
            if let Some(container) = self.containers.get(&session.origin) {
                tree.set_class(session.item, &container.options.chosen_class, false);
            }
            tracing::trace!(
                message = "session.canceled_before_start",
                item = session.item.0
            );
        }
        self.silence = None;
    }

    fn finalize<T: VisualTree, D: SortDelegate + ?Sized>(
        &mut self,
        mut session: DragSession,
        tree: &mut T,
        delegate: &mut D,
    ) {
        session.phase = Phase::Dropped;
        self.silence = None;
        self.clear_item_classes(&session, tree);

        if let Some(container) = self.containers.get(&session.current) {
            session.current_index = tree::index_of(tree, container.root, session.item)
                .unwrap_or(session.origin_index);
            session.current_draggable_index = container
                .items(tree)
                .iter()
                .position(|&n| n == session.item)
                .unwrap_or(session.origin_draggable_index);
        }
        if !session.moved {
            session.current_index = session.origin_index;
            session.current_draggable_index = session.origin_draggable_index;
        }

        // Clone retention: an item resting in a foreign container under
        // clone-pull leaves its duplicate at the origin slot.
        if let Some(clone) = session.clone {
            if session.current != session.origin && session.pull_mode == Some(PullMode::Clone) {
                if let Some(origin) = self.containers.get(&session.origin) {
                    let children = tree.children(origin.root);
                    let reference = children.get(session.origin_index).copied();
                    tree.insert_before(origin.root, clone, reference);
                }
            } else {
                tree.remove(clone);
                session.clone = None;
            }
        }

        for id in [session.origin, session.current] {
            if let Some(container) = self.containers.get(&id) {
                if container.options.store {
                    let order: Vec<String> = container
                        .items(tree)
                        .into_iter()
                        .map(|n| order::identifier(tree, n))
                        .collect();
                    delegate.save_order(id, &order);
                }
            }
            if session.origin == session.current {
                break;
            }
        }

        let ctx = context_of(&session, &self.containers);
        tracing::debug!(
            message = "session.end",
            item = session.item.0,
            from = session.origin.0,
            to = session.current.0,
            old_index = session.origin_index,
            new_index = session.current_index,
            moved = session.moved
        );
        delegate.on_end(&ctx);
    }

    // -- helpers -----------------------------------------------------------

    fn clear_item_classes<T: VisualTree>(&self, session: &DragSession, tree: &mut T) {
        if let Some(container) = self.containers.get(&session.origin) {
            tree.set_class(session.item, &container.options.chosen_class, false);
            tree.set_class(session.item, &container.options.ghost_class, false);
            tree.set_class(session.item, &container.options.drag_class, false);
        }
    }

    /// Session snapshot for notifications.
    fn context(&self) -> Option<SessionContext> {
        self.session.as_ref().map(|s| context_of(s, &self.containers))
    }

    /// The registered container owning `node`: the nearest ancestor (or
    /// self) that is a registered root.
    fn container_of_node<T: VisualTree>(&self, node: NodeId, tree: &T) -> Option<ContainerId> {
        let mut cur = Some(node);
        while let Some(n) = cur {
            let mut owner: Option<ContainerId> = None;
            for (&id, container) in &self.containers {
                if container.root == n && owner.is_none_or(|best| id.0 < best.0) {
                    owner = Some(id);
                }
            }
            if owner.is_some() {
                return owner;
            }
            cur = tree.parent(n);
        }
        None
    }

    /// The innermost registered container whose root box contains the
    /// point. Nesting depth wins; ties resolve to the earliest
    /// registration.
    fn container_at_point<T: VisualTree>(&self, pos: Point, tree: &T) -> Option<ContainerId> {
        let mut best: Option<(usize, ContainerId)> = None;
        for (&id, container) in &self.containers {
            let Some(rect) = tree.rect(container.root) else {
                continue;
            };
            if !rect.contains(pos) {
                continue;
            }
            let depth = self
                .containers
                .values()
                .filter(|other| {
                    other.root != container.root && tree.contains(other.root, container.root)
                })
                .count();
            let better = match best {
                None => true,
                Some((best_depth, best_id)) => {
                    depth > best_depth || (depth == best_depth && id.0 < best_id.0)
                }
            };
            if better {
                best = Some((depth, id));
            }
        }
        best.map(|(_, id)| id)
    }
}

/// The session's direct item under a press: the ancestor-or-self of the
/// press target that is a direct child of the container root, provided it
/// is a visible element matching the item selector.
fn press_item<T: VisualTree>(
    tree: &T,
    container: &Container,
    target: NodeId,
) -> Option<NodeId> {
    let root = container.root;
    let item = tree.closest_by(target, root, &|n| tree.parent(n) == Some(root))?;
    let eligible = tree.is_element(item)
        && tree.is_visible(item)
        && container
            .options
            .draggable
            .as_deref()
            .is_none_or(|sel| tree.matches(item, sel));
    eligible.then_some(item)
}

fn context_of(
    session: &DragSession,
    containers: &AHashMap<ContainerId, Container>,
) -> SessionContext {
    let revert_clone = containers
        .get(&session.origin)
        .is_some_and(|c| c.group.revert_clone);
    SessionContext {
        item: session.item,
        from: session.origin,
        to: session.current,
        old_index: session.origin_index,
        new_index: session.current_index,
        old_draggable_index: session.origin_draggable_index,
        new_draggable_index: session.current_draggable_index,
        moved: session.moved,
        clone: session.clone,
        revert_clone,
    }
}
