#![forbid(unsafe_code)]

//! Per-container configuration.
//!
//! [`SortableOptions`] is the full bag a host hands over at registration.
//! Thresholds are plain numbers in the shared pixel space; durations are
//! real `Duration`s; selector strings are host-interpreted (see
//! [`crate::tree::VisualTree::matches`]). Options may be updated at
//! runtime through the registry, which re-derives the group descriptor
//! when the group changes.

use std::fmt;
use std::sync::Arc;

use sortkit_core::event::NodeId;
use sortkit_core::geometry::{Axis, Point};
use web_time::Duration;

use crate::group::GroupSpec;

/// Context handed to a [`Direction::Resolver`] callback.
#[derive(Debug, Clone, Copy)]
pub struct DirectionQuery {
    /// Current pointer position.
    pub pointer: Point,
    /// The candidate target under the pointer, when one exists.
    pub target: Option<NodeId>,
}

/// How a container's layout axis is determined.
#[derive(Clone, Default)]
pub enum Direction {
    /// Fixed vertical stacking.
    Vertical,
    /// Fixed horizontal flow.
    Horizontal,
    /// Inferred from the first two item boxes (vertical when the second
    /// starts at or below the first one's bottom edge). Single-item and
    /// empty containers infer vertical.
    #[default]
    Auto,
    /// Host decides per movement, given pointer/target context.
    Resolver(Arc<dyn Fn(&DirectionQuery) -> Axis + Send + Sync>),
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => f.write_str("Vertical"),
            Self::Horizontal => f.write_str("Horizontal"),
            Self::Auto => f.write_str("Auto"),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

/// Press-target exclusion: matching presses never start a drag.
#[derive(Clone, Default)]
pub enum Filter {
    /// No filtering.
    #[default]
    None,
    /// Exclude presses whose target has an ancestor matching the selector
    /// (bounded by the container root).
    Selector(String),
    /// Host-supplied predicate over the press target.
    Predicate(Arc<dyn Fn(NodeId) -> bool + Send + Sync>),
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Selector(s) => f.debug_tuple("Selector").field(s).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Configuration for one registered container.
#[derive(Debug, Clone)]
pub struct SortableOptions {
    /// Group membership and pull/put policy shorthand.
    pub group: GroupSpec,
    /// Whether items may be reordered within this container. Dragging
    /// *out* is still possible when false (the group permitting).
    pub sort: bool,
    /// Disabled containers never start a drag.
    pub disabled: bool,
    /// Selector an element must match to count as an item. When `None`,
    /// every visible element child is an item.
    pub draggable: Option<String>,
    /// When set, a press must land inside a descendant matching this
    /// selector for the drag to start.
    pub handle: Option<String>,
    /// Press-target exclusion.
    pub filter: Filter,
    /// Hold time before a press may become a drag.
    pub delay: Duration,
    /// Apply `delay` only to touch presses.
    pub delay_on_touch_only: bool,
    /// Movement (Chebyshev pixels) that cancels a delayed press before the
    /// delay elapses.
    pub touch_start_threshold: f64,
    /// Fraction of the target's span, centered on its midpoint, that
    /// triggers a swap. Clamped to [0, 1] by the builder.
    pub swap_threshold: f64,
    /// Use the inverted (edge-zone) threshold interpretation always.
    pub invert_swap: bool,
    /// Edge-zone fraction for the inverted interpretation; defaults to
    /// `swap_threshold` when unset.
    pub inverted_swap_threshold: Option<f64>,
    /// Pixel distance within which an empty container attracts a drop.
    /// Zero disables empty-container detection for this container.
    pub empty_insert_threshold: f64,
    /// Layout axis determination.
    pub direction: Direction,
    /// Duration the animation collaborator is asked to tween moved boxes.
    pub animation: Duration,
    /// Class toggled on the item from press to drop.
    pub chosen_class: String,
    /// Class toggled on the item while it is the in-list placeholder.
    pub ghost_class: String,
    /// Class toggled on the item while a drag is live.
    pub drag_class: String,
    /// Whether the delegate's order store is consulted (load at
    /// registration, save at drop).
    pub store: bool,
}

impl Default for SortableOptions {
    fn default() -> Self {
        Self {
            group: GroupSpec::default(),
            sort: true,
            disabled: false,
            draggable: None,
            handle: None,
            filter: Filter::None,
            delay: Duration::ZERO,
            delay_on_touch_only: false,
            touch_start_threshold: 1.0,
            swap_threshold: 1.0,
            invert_swap: false,
            inverted_swap_threshold: None,
            empty_insert_threshold: 5.0,
            direction: Direction::Auto,
            animation: Duration::ZERO,
            chosen_class: "sortkit-chosen".into(),
            ghost_class: "sortkit-ghost".into(),
            drag_class: "sortkit-drag".into(),
            store: false,
        }
    }
}

impl SortableOptions {
    /// Set the group.
    #[must_use]
    pub fn group(mut self, group: GroupSpec) -> Self {
        self.group = group;
        self
    }

    /// Enable or disable in-container sorting.
    #[must_use]
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Disable the container entirely.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the item selector.
    #[must_use]
    pub fn draggable(mut self, selector: impl Into<String>) -> Self {
        self.draggable = Some(selector.into());
        self
    }

    /// Require presses to land inside a handle.
    #[must_use]
    pub fn handle(mut self, selector: impl Into<String>) -> Self {
        self.handle = Some(selector.into());
        self
    }

    /// Set the press filter.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the start delay.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Apply the start delay only to touch presses.
    #[must_use]
    pub fn delay_on_touch_only(mut self, only: bool) -> Self {
        self.delay_on_touch_only = only;
        self
    }

    /// Set the delayed-press cancellation distance.
    #[must_use]
    pub fn touch_start_threshold(mut self, px: f64) -> Self {
        self.touch_start_threshold = px.max(0.0);
        self
    }

    /// Set the swap threshold, clamped to [0, 1].
    #[must_use]
    pub fn swap_threshold(mut self, fraction: f64) -> Self {
        self.swap_threshold = fraction.clamp(0.0, 1.0);
        self
    }

    /// Always use the inverted threshold interpretation.
    #[must_use]
    pub fn invert_swap(mut self, invert: bool) -> Self {
        self.invert_swap = invert;
        self
    }

    /// Override the inverted-threshold fraction, clamped to [0, 1].
    #[must_use]
    pub fn inverted_swap_threshold(mut self, fraction: f64) -> Self {
        self.inverted_swap_threshold = Some(fraction.clamp(0.0, 1.0));
        self
    }

    /// Set the empty-container attraction distance (zero disables).
    #[must_use]
    pub fn empty_insert_threshold(mut self, px: f64) -> Self {
        self.empty_insert_threshold = px.max(0.0);
        self
    }

    /// Set the layout axis determination.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the animation duration hint.
    #[must_use]
    pub fn animation(mut self, duration: Duration) -> Self {
        self.animation = duration;
        self
    }

    /// Consult the delegate's order store for this container.
    #[must_use]
    pub fn store(mut self, store: bool) -> Self {
        self.store = store;
        self
    }

    /// The inverted-threshold fraction actually in effect.
    #[must_use]
    pub(crate) fn effective_inverted_threshold(&self) -> f64 {
        self.inverted_swap_threshold.unwrap_or(self.swap_threshold)
    }
}
