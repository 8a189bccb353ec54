#![forbid(unsafe_code)]

//! Host hooks: lifecycle notifications, the move veto, and the animation
//! and persistence collaborators.
//!
//! Everything is delivered synchronously while an input event is being
//! processed. All methods have no-op defaults so hosts implement only what
//! they care about.
//!
//! # Failure Modes
//!
//! - [`SortDelegate::on_move`] returning [`MoveVerdict::Reject`] discards
//!   the pending placement; the session stays live and later movements are
//!   evaluated normally.
//! - [`MoveVerdict::AbortSession`] ends the whole session at the item's
//!   current resting place, exactly as if the pointer had been released
//!   without any further movement.

use sortkit_core::event::NodeId;
use sortkit_core::geometry::Point;
use web_time::Duration;

use crate::sorter::ContainerId;

/// Snapshot of a session delivered with start/change/end notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    /// The dragged item.
    pub item: NodeId,
    /// Container the drag started in.
    pub from: ContainerId,
    /// Container the item currently rests in.
    pub to: ContainerId,
    /// Raw child index at drag start.
    pub old_index: usize,
    /// Raw child index now.
    pub new_index: usize,
    /// Index among draggable items at drag start.
    pub old_draggable_index: usize,
    /// Index among draggable items now.
    pub new_draggable_index: usize,
    /// Whether any movement was processed during the session.
    pub moved: bool,
    /// The parked duplicate under clone-pull, if one exists.
    pub clone: Option<NodeId>,
    /// Whether the origin group asks the clone to snap back visually.
    pub revert_clone: bool,
}

/// Context for the move-veto hook, delivered before any mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveContext {
    /// The dragged item.
    pub item: NodeId,
    /// Container the item currently rests in.
    pub from: ContainerId,
    /// Container the pending placement targets.
    pub to: ContainerId,
    /// The sibling the placement is relative to (`None` when inserting
    /// into an empty container).
    pub related: Option<NodeId>,
    /// Sibling-relation hint: whether the item would land after `related`.
    pub will_insert_after: bool,
    /// Pointer position driving the placement.
    pub pointer: Point,
}

/// Answer from the move-veto hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveVerdict {
    /// Apply the placement as decided.
    #[default]
    Allow,
    /// Discard this placement; keep dragging.
    Reject,
    /// Apply, but force insertion before the related sibling.
    InsertBefore,
    /// Apply, but force insertion after the related sibling.
    InsertAfter,
    /// End the session here with no further mutation.
    AbortSession,
}

/// Host-implemented hooks. Every method defaults to a no-op (and
/// [`MoveVerdict::Allow`] for the veto).
pub trait SortDelegate {
    /// A drag session entered its live phase.
    fn on_start(&mut self, _ctx: &SessionContext) {}

    /// A placement is about to be applied. The verdict may cancel it,
    /// force the insertion side, or abort the session.
    fn on_move(&mut self, _ctx: &MoveContext) -> MoveVerdict {
        MoveVerdict::Allow
    }

    /// A placement was committed.
    fn on_change(&mut self, _ctx: &SessionContext) {}

    /// The session ended; `ctx` carries the final resting place.
    fn on_end(&mut self, _ctx: &SessionContext) {}

    /// Record current geometry of the listed containers ahead of a
    /// mutation (animation collaborator; no-op hosts simply skip tweens).
    fn capture_state(&mut self, _containers: &[ContainerId]) {}

    /// Animate from the captured geometry to the current one.
    fn animate(&mut self, _containers: &[ContainerId], _duration: Duration) {}

    /// Load a persisted order for a container, if one exists.
    fn load_order(&mut self, _container: ContainerId) -> Option<Vec<String>> {
        None
    }

    /// Persist a container's current order.
    fn save_order(&mut self, _container: ContainerId, _order: &[String]) {}
}

/// A delegate that accepts everything and records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDelegate;

impl SortDelegate for NoopDelegate {}
