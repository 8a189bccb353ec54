#![forbid(unsafe_code)]

//! SortKit engine: drag-to-reorder for host-rendered lists.
//!
//! # Role in SortKit
//! This crate owns the drag-session state machine, the geometric
//! hit-test/direction resolver, the group permission arbiter, and the
//! placement engine. It consumes normalized events from `sortkit-core`
//! and drives the host's tree through the [`VisualTree`] capability.
//!
//! # How it fits in the system
//! The host registers container roots with a [`Sorter`], feeds it every
//! pointer/platform-drag event (plus an occasional [`Sorter::poll`] tick
//! for the start delay), and implements [`SortDelegate`] for lifecycle
//! notifications, the move veto, animation capture, and order
//! persistence. The engine decides *where items go*; everything visual —
//! proxies, tweens, scrolling — stays on the host side.
//!
//! Only construction can fail. Once a container is registered, every
//! uncertain condition during a drag (unmeasurable boxes, denied
//! permissions, filtered presses) degrades to a silent no-op.

use std::fmt;

pub mod delegate;
pub mod group;
pub mod mock;
pub mod options;
pub mod sorter;
pub mod tree;

mod empty;
mod order;
mod placement;
mod resolver;
mod session;

// --- Core re-exports -------------------------------------------------------

pub use sortkit_core::event::{InputEvent, Modifiers, NodeId, PointerButton};
pub use sortkit_core::geometry::{Axis, Point, Rect};
pub use sortkit_core::timer::Deadline;

// --- Engine re-exports -----------------------------------------------------

pub use delegate::{MoveContext, MoveVerdict, NoopDelegate, SessionContext, SortDelegate};
pub use group::{GroupDescriptor, GroupSpec, PullMode, PullPolicy, PullVerdict, PutPolicy};
pub use mock::MockTree;
pub use options::{Direction, DirectionQuery, Filter, SortableOptions};
pub use order::OrderSnapshot;
pub use sorter::{ContainerId, Sorter};
pub use tree::VisualTree;

// --- Errors ----------------------------------------------------------------

/// Construction-time failures. Nothing else in the engine errors; see the
/// crate docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The registered root is not an element node.
    InvalidRoot(NodeId),
    /// An operation referenced a container that is not registered.
    UnknownContainer(ContainerId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRoot(node) => {
                write!(f, "container root {} is not an element", node.0)
            }
            Self::UnknownContainer(id) => write!(f, "unknown container {}", id.0),
        }
    }
}

impl std::error::Error for Error {}

/// Standard result type for SortKit APIs.
pub type Result<T> = std::result::Result<T, Error>;
