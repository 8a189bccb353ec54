#![forbid(unsafe_code)]

//! The placement engine: turns a resolver decision into tree mutation.
//!
//! Order of operations per committed placement:
//!
//! 1. consult the move-veto hook (which may also force the insertion side),
//! 2. ask the animation collaborator to capture geometry of the involved
//!    containers,
//! 3. mutate the destination's child order (one insert; the tree's
//!    insert-moves semantics handle the removal),
//! 4. update the session's current container/indices,
//! 5. arm the silence deadline that swallows reflow-induced movement
//!    events for the next ~30 ms,
//! 6. release the captured geometry (animate) and notify the change.
//!
//! A rejected move leaves the tree, the session, and the silence deadline
//! untouched; the session keeps dragging.

use ahash::AHashMap;
use sortkit_core::geometry::{Axis, Point};
use sortkit_core::timer::Deadline;
use web_time::{Duration, Instant};

use crate::delegate::{MoveContext, MoveVerdict, SortDelegate};
use crate::group::PullMode;
use crate::resolver::Decision;
use crate::session::DragSession;
use crate::sorter::{Container, ContainerId};
use crate::tree::{self, VisualTree};

/// How long placement suppresses further resolver/placement runs. Reflow
/// after a mutation can synthesize movement events; processing them would
/// feed the placement's own effect back into the resolver.
pub(crate) const SILENCE_WINDOW: Duration = Duration::from_millis(30);

/// Outcome of one placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Applied {
    /// The mutation was committed.
    Committed,
    /// The veto hook rejected the move; nothing changed.
    Rejected,
    /// The veto hook aborted the session; the caller must finalize.
    Aborted,
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn apply<T: VisualTree, D: SortDelegate + ?Sized>(
    containers: &AHashMap<ContainerId, Container>,
    session: &mut DragSession,
    silence: &mut Option<Deadline>,
    dest: ContainerId,
    decision: Decision,
    pull: Option<PullMode>,
    axis: Axis,
    pointer: Point,
    now: Instant,
    tree: &mut T,
    delegate: &mut D,
) -> Applied {
    let Some(dest_container) = containers.get(&dest) else {
        return Applied::Rejected;
    };
    let item = session.item;

    let (related, mut after) = match decision {
        Decision::None => return Applied::Rejected,
        Decision::AppendInto => (None, true),
        Decision::AppendLast { last } => (Some(last), true),
        Decision::InsertFirst { first } => (Some(first), false),
        Decision::Swap { target, after } => (Some(target), after),
    };

    let ctx = MoveContext {
        item,
        from: session.current,
        to: dest,
        related,
        will_insert_after: after,
        pointer,
    };
    match delegate.on_move(&ctx) {
        MoveVerdict::Allow => {}
        MoveVerdict::Reject => {
            tracing::trace!(message = "placement.vetoed", item = item.0, to = dest.0);
            return Applied::Rejected;
        }
        MoveVerdict::AbortSession => {
            tracing::debug!(message = "placement.abort_session", item = item.0);
            return Applied::Aborted;
        }
        MoveVerdict::InsertBefore => after = false,
        MoveVerdict::InsertAfter => after = true,
    }

    let involved: Vec<ContainerId> = if session.current == dest {
        vec![dest]
    } else {
        vec![session.current, dest]
    };
    delegate.capture_state(&involved);

    // Clone-pull bookkeeping: duplicate the item the moment it first
    // leaves its origin under a clone verdict; the duplicate stays
    // detached until drop decides whether the origin keeps it.
    if session.current == session.origin
        && dest != session.origin
        && pull == Some(PullMode::Clone)
        && session.clone.is_none()
    {
        session.clone = Some(tree.clone_node(item));
    }
    if dest == session.origin
        && let Some(clone) = session.clone.take()
    {
        tree.remove(clone);
        session.pull_mode = None;
    }

    let reference = match (related, after) {
        (None, _) => None,
        (Some(r), false) => Some(r),
        (Some(r), true) => tree::next_sibling(tree, dest_container.root, r),
    };
    tree.insert_before(dest_container.root, item, reference);

    if session.current != dest {
        session.pull_mode = if dest == session.origin { None } else { pull };
        session.current = dest;
    }
    session.current_index =
        tree::index_of(tree, dest_container.root, item).unwrap_or(session.current_index);
    session.current_draggable_index = dest_container
        .items(tree)
        .iter()
        .position(|&n| n == item)
        .unwrap_or(session.current_draggable_index);

    // First-encounter swaps record how far the target's box moved; the
    // hysteresis shadow is sized from this.
    if let Decision::Swap { target, .. } = decision
        && let Some(before) = session.swap.target_start_before_swap.take()
        && !session.swap.circumstantial_invert
        && let Some(target_rect) = tree.rect(target)
    {
        session.swap.target_move_distance = (before - target_rect.start(axis)).abs();
    }

    *silence = Some(Deadline::after(now, SILENCE_WINDOW));
    delegate.animate(&involved, dest_container.options.animation);

    tracing::debug!(
        message = "placement.commit",
        item = item.0,
        to = dest.0,
        index = session.current_index
    );
    Applied::Committed
}
