#![forbid(unsafe_code)]

//! Group policy: who may leave a container, and who may enter.
//!
//! Every container carries a [`GroupDescriptor`]. When a drag hovers a
//! container other than the item's current one, the arbiter evaluates the
//! *origin* group's pull policy and the *destination* group's put policy;
//! the move is permitted iff both agree. A pull of [`PullPolicy::Clone`]
//! authorizes the move in duplicate-and-keep mode, which the session
//! latches so drop-time logic leaves the origin copy in place.
//!
//! # Invariants
//!
//! 1. `authorize` is a pure function of the two descriptors and the query;
//!    it never mutates anything.
//! 2. Containers configured with the default group (no name) never
//!    interoperate: the default put policy requires a shared, non-empty
//!    group name.
//! 3. A denied put always wins: clone-pull against a refusing destination
//!    yields no verdict at all.

use std::fmt;
use std::sync::Arc;

use sortkit_core::event::{Modifiers, NodeId};

use crate::sorter::ContainerId;

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// What a pull predicate may answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullVerdict {
    /// Refuse to let the item leave.
    Deny,
    /// Let the item move out.
    Move,
    /// Let a duplicate move out; the original stays.
    Clone,
}

/// How a committed cross-container move treats the origin copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullMode {
    /// The item itself relocates.
    Move,
    /// A duplicate relocates; the origin keeps its copy.
    Clone,
}

/// Everything a policy predicate may inspect.
#[derive(Debug, Clone, Copy)]
pub struct GroupQuery<'a> {
    /// Container the item would leave.
    pub from: ContainerId,
    /// Group name of the origin container.
    pub from_group: Option<&'a str>,
    /// Container the item would enter.
    pub to: ContainerId,
    /// Group name of the destination container.
    pub to_group: Option<&'a str>,
    /// The dragged item.
    pub item: NodeId,
    /// Modifier keys held on the triggering event.
    pub modifiers: Modifiers,
}

/// Whether items may be pulled out of a container.
#[derive(Clone, Default)]
pub enum PullPolicy {
    /// Items may always leave.
    #[default]
    Always,
    /// Items may never leave.
    Never,
    /// Items leave as duplicates; the origin copy stays.
    Clone,
    /// Items may leave only toward groups named in the list.
    Names(Vec<String>),
    /// Host-supplied decision per attempt.
    Predicate(Arc<dyn Fn(&GroupQuery<'_>) -> PullVerdict + Send + Sync>),
}

impl fmt::Debug for PullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("Always"),
            Self::Never => f.write_str("Never"),
            Self::Clone => f.write_str("Clone"),
            Self::Names(names) => f.debug_tuple("Names").field(names).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Whether items may be put into a container.
#[derive(Clone, Default)]
pub enum PutPolicy {
    /// Accept only from containers sharing this container's (non-empty)
    /// group name. This is the default: unnamed groups accept nothing
    /// from outside.
    #[default]
    SameName,
    /// Accept from anywhere.
    Always,
    /// Accept nothing.
    Never,
    /// Accept only from groups named in the list.
    Names(Vec<String>),
    /// Host-supplied decision per attempt.
    Predicate(Arc<dyn Fn(&GroupQuery<'_>) -> bool + Send + Sync>),
}

impl fmt::Debug for PutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameName => f.write_str("SameName"),
            Self::Always => f.write_str("Always"),
            Self::Never => f.write_str("Never"),
            Self::Names(names) => f.debug_tuple("Names").field(names).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Descriptor and construction shorthand
// ---------------------------------------------------------------------------

/// Shorthand used at configuration time; normalized into a
/// [`GroupDescriptor`] when the container is registered (and again
/// whenever the group option is changed at runtime).
#[derive(Debug, Clone, Default)]
pub struct GroupSpec {
    name: Option<String>,
    pull: Option<PullPolicy>,
    put: Option<PutPolicy>,
    revert_clone: bool,
}

impl GroupSpec {
    /// A named group with default pull/put.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the pull policy.
    #[must_use]
    pub fn pull(mut self, pull: PullPolicy) -> Self {
        self.pull = Some(pull);
        self
    }

    /// Set the put policy.
    #[must_use]
    pub fn put(mut self, put: PutPolicy) -> Self {
        self.put = Some(put);
        self
    }

    /// Whether a clone visually snaps back after a clone-pull.
    #[must_use]
    pub fn revert_clone(mut self, revert: bool) -> Self {
        self.revert_clone = revert;
        self
    }
}

/// A container's normalized group policy.
#[derive(Debug, Clone)]
pub struct GroupDescriptor {
    /// Group name; `None` means the container interoperates with nobody
    /// under the default put policy.
    pub name: Option<String>,
    /// Pull policy, evaluated on the origin side.
    pub pull: PullPolicy,
    /// Put policy, evaluated on the destination side.
    pub put: PutPolicy,
    /// Whether a clone snaps back visually after a cross-container
    /// clone-pull; reported to the animation collaborator at drop.
    pub revert_clone: bool,
}

impl Default for GroupDescriptor {
    fn default() -> Self {
        GroupSpec::default().normalize()
    }
}

impl GroupSpec {
    /// Fill unset policies with their defaults.
    #[must_use]
    pub(crate) fn normalize(&self) -> GroupDescriptor {
        GroupDescriptor {
            name: self.name.clone(),
            pull: self.pull.clone().unwrap_or_default(),
            put: self.put.clone().unwrap_or_default(),
            revert_clone: self.revert_clone,
        }
    }
}

// ---------------------------------------------------------------------------
// Arbiter
// ---------------------------------------------------------------------------

/// Evaluate a cross-container move.
///
/// Returns the pull mode when both sides authorize it, `None` otherwise.
pub(crate) fn authorize(
    origin: &GroupDescriptor,
    dest: &GroupDescriptor,
    query: &GroupQuery<'_>,
) -> Option<PullMode> {
    let mode = check_pull(origin, dest, query)?;
    check_put(dest, origin, query).then_some(mode)
}

fn check_pull(
    origin: &GroupDescriptor,
    dest: &GroupDescriptor,
    query: &GroupQuery<'_>,
) -> Option<PullMode> {
    match &origin.pull {
        PullPolicy::Always => Some(PullMode::Move),
        PullPolicy::Never => None,
        PullPolicy::Clone => Some(PullMode::Clone),
        PullPolicy::Names(names) => {
            let dest_name = dest.name.as_deref()?;
            names
                .iter()
                .any(|n| n == dest_name)
                .then_some(PullMode::Move)
        }
        PullPolicy::Predicate(pred) => match pred(query) {
            PullVerdict::Deny => None,
            PullVerdict::Move => Some(PullMode::Move),
            PullVerdict::Clone => Some(PullMode::Clone),
        },
    }
}

fn check_put(dest: &GroupDescriptor, origin: &GroupDescriptor, query: &GroupQuery<'_>) -> bool {
    match &dest.put {
        PutPolicy::SameName => match (&dest.name, &origin.name) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        PutPolicy::Always => true,
        PutPolicy::Never => false,
        PutPolicy::Names(names) => origin
            .name
            .as_deref()
            .is_some_and(|name| names.iter().any(|n| n == name)),
        PutPolicy::Predicate(pred) => pred(query),
    }
}
