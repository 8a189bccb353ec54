#![forbid(unsafe_code)]

//! The drag session: the one piece of mutable state in the engine.
//!
//! At most one [`DragSession`] exists process-wide; it lives in an
//! `Option` owned by the registry, which is the only code that creates or
//! destroys it. Idle is the absence of a session. The other lifecycle
//! phases are explicit:
//!
//! Idle → [`Phase::Pending`] → [`Phase::Dragging`] → [`Phase::Dropped`] → Idle
//!
//! # Invariants
//!
//! 1. `origin_*` fields never change after construction; `current_*`
//!    fields are updated only by the placement engine's commit step.
//! 2. `swap` is meaningful only while `phase == Dragging` and resets
//!    whenever the hovered target changes.
//! 3. `delay` is `Some` only while `phase == Pending`; every exit from
//!    Pending clears it (explicit cancellation, never a dangling timer).
//! 4. A session in `Phase::Dropped` is already unreachable from input
//!    handling; the phase exists so finalization code can observe it.

use sortkit_core::event::NodeId;
use sortkit_core::geometry::Point;
use sortkit_core::timer::Deadline;

use crate::group::PullMode;
use crate::sorter::ContainerId;

/// Lifecycle phase of an existing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Press accepted; waiting for the start delay (or an immediate
    /// promotion when no delay is configured).
    Pending,
    /// Live drag: every movement runs the resolver and placement engine.
    Dragging,
    /// Terminal: finalization in progress.
    Dropped,
}

/// Per-hovered-target swap bookkeeping.
///
/// Reset whenever the candidate target changes; carries the hysteresis
/// state that keeps reordering stable when the just-swapped target's own
/// box shifts under the pointer.
#[derive(Debug, Clone, Default)]
pub(crate) struct SwapState {
    /// Target of the last *fired* swap decision. Updated only when a
    /// non-adjacent, non-neutral direction is decided, so the hysteresis
    /// branch keys off the pair that actually swapped.
    pub last_target: Option<NodeId>,
    /// Last non-neutral direction decided for that target (−1 or +1; 0
    /// until a swap has fired).
    pub last_direction: i8,
    /// Whether this pair uses the inverted threshold interpretation
    /// (configured inversion or irregular geometry).
    pub circumstantial_invert: bool,
    /// Set once the pointer crosses the first-invert threshold after a
    /// swap; from then on the pair is judged with inverted semantics.
    pub past_first_invert: bool,
    /// How far the target's leading edge moved as a result of the swap
    /// that fired on first encounter.
    pub target_move_distance: f64,
    /// Leading edge of the target when it first became the candidate;
    /// consumed by the commit step to compute `target_move_distance`.
    pub target_start_before_swap: Option<f64>,
}

impl SwapState {
    /// Begin evaluating a candidate other than the last fired target.
    ///
    /// Does not touch `last_target`/`last_direction`: those track the last
    /// committed swap and are assigned by the resolver when a decision
    /// actually fires.
    pub fn retarget(&mut self, leading_edge: f64, invert: bool) {
        self.circumstantial_invert = invert;
        self.past_first_invert = false;
        self.target_start_before_swap = Some(leading_edge);
    }
}

/// The single active drag.
#[derive(Debug)]
pub(crate) struct DragSession {
    /// The dragged item.
    pub item: NodeId,
    /// Container the drag started in.
    pub origin: ContainerId,
    /// Raw child index at start.
    pub origin_index: usize,
    /// Index among draggable items at start.
    pub origin_draggable_index: usize,
    /// Container the item currently rests in.
    pub current: ContainerId,
    /// Raw child index now.
    pub current_index: usize,
    /// Index among draggable items now.
    pub current_draggable_index: usize,
    /// Pointer offset within the item at press time.
    pub anchor: Point,
    /// Pointer position at press time.
    pub press_pos: Point,
    /// Lifecycle phase.
    pub phase: Phase,
    /// Whether any movement event was processed while dragging. A session
    /// that never moves is a click, and reports its origin index at drop.
    pub moved: bool,
    /// Start-delay deadline (Pending only).
    pub delay: Option<Deadline>,
    /// Latched pull mode once the item has left its origin container.
    pub pull_mode: Option<PullMode>,
    /// Parked duplicate at the origin position under clone-pull.
    pub clone: Option<NodeId>,
    /// Swap bookkeeping for the currently hovered target.
    pub swap: SwapState,
}

impl DragSession {
    /// A fresh session in `Pending`, anchored at the press.
    #[allow(clippy::too_many_arguments)]
    pub fn pending(
        item: NodeId,
        origin: ContainerId,
        origin_index: usize,
        origin_draggable_index: usize,
        anchor: Point,
        press_pos: Point,
        delay: Option<Deadline>,
    ) -> Self {
        Self {
            item,
            origin,
            origin_index,
            origin_draggable_index,
            current: origin,
            current_index: origin_index,
            current_draggable_index: origin_draggable_index,
            anchor,
            press_pos,
            phase: Phase::Pending,
            moved: false,
            delay,
            pull_mode: None,
            clone: None,
            swap: SwapState::default(),
        }
    }
}
