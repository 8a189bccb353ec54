#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the tagged event union the engine's transition
//! function consumes. Hosts translate whatever raw input they receive
//! (pointer events, platform drag-and-drop notifications) into these
//! variants; the engine never dispatches on an untyped event kind.
//!
//! # Design Notes
//!
//! - Coordinates are `f64` pixels in one consistent space shared with the
//!   geometry reported by the host's visual tree.
//! - `PointerDown` carries the deepest node under the pointer so the engine
//!   can run filter/handle checks without a second hit-test.
//! - Platform drag movement (`DragOver`) and synthesized fallback movement
//!   (`PointerMove`) drive the same placement path; only the start and
//!   teardown differ between the two gesture families.

use bitflags::bitflags;

use crate::geometry::Point;

/// Opaque handle to a node in the host's visual tree.
///
/// The engine never interprets the value; it only passes it back to the
/// host's tree capability and compares handles for identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

bitflags! {
    /// Modifier keys held during a pointer or drag event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually left). The only button that starts a drag.
    Primary,

    /// Secondary button (usually right).
    Secondary,

    /// Auxiliary button (usually middle/wheel).
    Auxiliary,
}

/// Canonical input event.
///
/// One variant per distinct input the drag-session controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed.
    PointerDown {
        /// Pointer position.
        pos: Point,
        /// Which button went down.
        button: PointerButton,
        /// Deepest node under the pointer at press time.
        target: NodeId,
        /// Modifier keys held.
        modifiers: Modifiers,
        /// Whether the press came from a touch contact (affects delay gating).
        touch: bool,
    },

    /// The pointer moved (synthesized/fallback drag path).
    PointerMove {
        /// Pointer position.
        pos: Point,
        /// Modifier keys held.
        modifiers: Modifiers,
    },

    /// A pointer button was released.
    PointerUp {
        /// Pointer position at release.
        pos: Point,
    },

    /// The pointer gesture was canceled by the platform.
    PointerCancel,

    /// Platform drag moved over the page (native drag path).
    DragOver {
        /// Pointer position.
        pos: Point,
        /// Modifier keys held.
        modifiers: Modifiers,
    },

    /// Platform drop occurred.
    DragDrop {
        /// Pointer position at drop.
        pos: Point,
    },

    /// Platform drag ended without a drop (aborted native drag).
    DragEnd,
}

impl InputEvent {
    /// Convenience constructor for a primary-button, no-modifier press.
    #[must_use]
    pub const fn pointer_down(pos: Point, target: NodeId) -> Self {
        Self::PointerDown {
            pos,
            button: PointerButton::Primary,
            target,
            modifiers: Modifiers::NONE,
            touch: false,
        }
    }

    /// Convenience constructor for a no-modifier move.
    #[must_use]
    pub const fn pointer_move(pos: Point) -> Self {
        Self::PointerMove {
            pos,
            modifiers: Modifiers::NONE,
        }
    }

    /// Convenience constructor for a release.
    #[must_use]
    pub const fn pointer_up(pos: Point) -> Self {
        Self::PointerUp { pos }
    }

    /// The pointer position carried by this event, if any.
    #[must_use]
    pub const fn pos(&self) -> Option<Point> {
        match self {
            Self::PointerDown { pos, .. }
            | Self::PointerMove { pos, .. }
            | Self::PointerUp { pos }
            | Self::DragOver { pos, .. }
            | Self::DragDrop { pos } => Some(*pos),
            Self::PointerCancel | Self::DragEnd => None,
        }
    }

    /// True for the movement variants of either gesture family.
    #[must_use]
    pub const fn is_movement(&self) -> bool {
        matches!(self, Self::PointerMove { .. } | Self::DragOver { .. })
    }

    /// True for the variants that terminate a gesture (release, drop,
    /// cancellation).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::PointerUp { .. } | Self::PointerCancel | Self::DragDrop { .. } | Self::DragEnd
        )
    }
}
