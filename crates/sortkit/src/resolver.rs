#![forbid(unsafe_code)]

//! Hit-test and direction resolution.
//!
//! Given the pointer, the dragged item, and the hovered container's items,
//! [`resolve`] produces at most one placement decision per movement. Three
//! disjoint cases are tried in order: past-the-end, before-the-start, and
//! a mid-list swap against the sibling under the pointer.
//!
//! # Invariants
//!
//! 1. `resolve` mutates only the session's [`SwapState`]; the tree is read,
//!    never written.
//! 2. A decision that would have no visible effect (the dragged item is
//!    already adjacent to the target on the decided side, or already sits
//!    at the end/start) degrades to [`Decision::None`].
//! 3. Unmeasurable candidates degrade: a target without a rect yields
//!    `None`, a dragged item without a rect is treated as not sharing the
//!    target's row/column.
//!
//! # Failure Modes
//!
//! - Immediately after a swap the target's own box moves, putting the
//!   pointer on the "wrong" side of its new midpoint. The hysteresis state
//!   (shadow region + first-invert threshold) keeps such frames from
//!   firing the reverse swap until the pointer genuinely travels; see
//!   `swap_direction`.

use sortkit_core::event::NodeId;
use sortkit_core::geometry::{Axis, Point, Rect};

use crate::options::SortableOptions;
use crate::session::SwapState;
use crate::tree::VisualTree;

/// Dead band past the item run's far edges, in pixels.
const SPACER: f64 = 10.0;

/// One placement decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    /// Nothing to do for this movement.
    None,
    /// Drop into a container with no reorderable items: append at the end.
    AppendInto,
    /// Pointer is past the last item: append at the end.
    AppendLast {
        /// The current last item (the related sibling for the veto hook).
        last: NodeId,
    },
    /// Pointer is before the first item: insert at the start.
    InsertFirst {
        /// The current first item.
        first: NodeId,
    },
    /// Place the dragged item beside a specific sibling.
    Swap {
        /// The sibling under the pointer.
        target: NodeId,
        /// Place after it (`true`) or before it (`false`).
        after: bool,
    },
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Whether the dragged box and the target box share a row/column on the
/// axis perpendicular to the layout axis: aligned leading edges, aligned
/// trailing edges, or aligned centers.
fn in_row_column(drag: Rect, target: Rect, axis: Axis) -> bool {
    let cross = axis.cross();
    approx_eq(drag.start(cross), target.start(cross))
        || approx_eq(drag.end(cross), target.end(cross))
        || approx_eq(drag.mid(cross), target.mid(cross))
}

/// Union of the measurable item boxes.
fn items_bounds<T: VisualTree>(tree: &T, items: &[NodeId]) -> Option<Rect> {
    let mut bounds: Option<Rect> = None;
    for &item in items {
        if let Some(r) = tree.rect(item) {
            bounds = Some(match bounds {
                Some(b) => b.union(&r),
                None => r,
            });
        }
    }
    bounds
}

/// Pointer is beyond the item run's trailing edge (orientation-aware).
fn past_end(pointer: Point, axis: Axis, last: Rect, bounds: Rect) -> bool {
    match axis {
        Axis::Vertical => {
            pointer.y > bounds.bottom() + SPACER
                || (pointer.x > last.right() && pointer.y > last.top)
        }
        Axis::Horizontal => {
            pointer.x > bounds.right() + SPACER
                || (pointer.y > last.bottom() && pointer.x > last.left)
        }
    }
}

/// Pointer is before the item run's leading edge (orientation-aware).
fn before_start(pointer: Point, axis: Axis, first: Rect, bounds: Rect) -> bool {
    match axis {
        Axis::Vertical => {
            pointer.x < bounds.left - SPACER
                || (pointer.y < first.top && pointer.x < first.right())
        }
        Axis::Horizontal => {
            pointer.y < bounds.top - SPACER
                || (pointer.x < first.left && pointer.y < first.bottom())
        }
    }
}

/// Decide the swap direction against `target_rect`.
///
/// Regular interpretation: the firing region is the central band covering
/// `threshold` of the span; the direction is the side of the midpoint the
/// pointer is on. Inverted interpretation: the firing regions are the two
/// edge bands of `inverted_threshold / 2` each, with the same midpoint
/// rule; the center is neutral.
///
/// When re-evaluating the pair that just swapped (`is_same_target`) and the
/// target's box moved less than the firing band, the vacated span acts as a
/// shadow that only fires the reverse of the last direction; once the
/// pointer crosses the first-invert threshold on the far side, the pair
/// switches to the inverted interpretation, whose neutral center absorbs
/// the post-swap jitter.
fn swap_direction(
    pointer_on_axis: f64,
    target_rect: Rect,
    axis: Axis,
    threshold: f64,
    inverted_threshold: f64,
    swap: &mut SwapState,
    is_same_target: bool,
) -> i8 {
    let s1 = target_rect.start(axis);
    let s2 = target_rect.end(axis);
    let len = target_rect.span(axis);
    let mid = target_rect.mid(axis);
    let mut invert = swap.circumstantial_invert;

    if !swap.circumstantial_invert {
        if is_same_target && swap.target_move_distance < len * threshold {
            if !swap.past_first_invert {
                let crossed = if swap.last_direction == 1 {
                    pointer_on_axis > s1 + len * inverted_threshold / 2.0
                } else {
                    pointer_on_axis < s2 - len * inverted_threshold / 2.0
                };
                if crossed {
                    swap.past_first_invert = true;
                }
            }
            if !swap.past_first_invert {
                let over_shadow = if swap.last_direction == 1 {
                    pointer_on_axis < s1 + swap.target_move_distance
                } else {
                    pointer_on_axis > s2 - swap.target_move_distance
                };
                return if over_shadow { -swap.last_direction } else { 0 };
            }
            invert = true;
        } else {
            if pointer_on_axis > s1 + len * (1.0 - threshold) / 2.0
                && pointer_on_axis < s2 - len * (1.0 - threshold) / 2.0
            {
                return if pointer_on_axis > mid { 1 } else { -1 };
            }
            return 0;
        }
    }

    if invert
        && (pointer_on_axis < s1 + len * inverted_threshold / 2.0
            || pointer_on_axis > s2 - len * inverted_threshold / 2.0)
    {
        return if pointer_on_axis > mid { 1 } else { -1 };
    }
    0
}

/// Resolve one movement into a placement decision.
///
/// `items` is the hovered container's ordered run of visible items (the
/// dragged item included when it currently rests there). `different_level`
/// is true when the dragged item's parent is not the hovered container
/// root.
pub(crate) fn resolve<T: VisualTree>(
    tree: &T,
    dragged: NodeId,
    items: &[NodeId],
    pointer: Point,
    axis: Axis,
    opts: &SortableOptions,
    different_level: bool,
    swap: &mut SwapState,
) -> Decision {
    let Some(bounds) = items_bounds(tree, items) else {
        return Decision::None;
    };

    if let Some(&last) = items.last()
        && last != dragged
        && let Some(last_rect) = tree.rect(last)
        && past_end(pointer, axis, last_rect, bounds)
    {
        return Decision::AppendLast { last };
    }

    if let Some(&first) = items.first()
        && first != dragged
        && let Some(first_rect) = tree.rect(first)
        && before_start(pointer, axis, first_rect, bounds)
    {
        return Decision::InsertFirst { first };
    }

    let target = items.iter().copied().find(|&n| {
        n != dragged && !tree.is_animating(n) && tree.rect(n).is_some_and(|r| r.contains(pointer))
    });
    let Some(target) = target else {
        return Decision::None;
    };
    let Some(target_rect) = tree.rect(target) else {
        return Decision::None;
    };

    let different_row_col = match tree.rect(dragged) {
        Some(drag_rect) => !in_row_column(drag_rect, target_rect, axis),
        None => true,
    };

    let is_same_target = swap.last_target == Some(target);
    if !is_same_target {
        swap.retarget(target_rect.start(axis), opts.invert_swap || different_level);
    }

    let threshold = if different_row_col {
        1.0
    } else {
        opts.swap_threshold
    };
    let direction = swap_direction(
        pointer.along(axis),
        target_rect,
        axis,
        threshold,
        opts.effective_inverted_threshold(),
        swap,
        is_same_target,
    );
    if direction == 0 {
        return Decision::None;
    }

    // No-op guard: already adjacent to the target on the decided side
    // (walking past hidden siblings).
    if let Some(parent) = tree.parent(dragged) {
        let siblings = tree.children(parent);
        if let Some(idx) = siblings.iter().position(|&c| c == dragged) {
            let mut cursor = idx as isize;
            let sibling = loop {
                cursor -= isize::from(direction);
                if cursor < 0 || cursor as usize >= siblings.len() {
                    break None;
                }
                let s = siblings[cursor as usize];
                if tree.is_visible(s) {
                    break Some(s);
                }
            };
            if sibling == Some(target) {
                return Decision::None;
            }
        }
    }

    swap.last_target = Some(target);
    swap.last_direction = direction;

    Decision::Swap {
        target,
        after: direction == 1,
    }
}
