#![forbid(unsafe_code)]

//! Cancelable deadlines.
//!
//! The engine needs two timed behaviors: the optional start delay before a
//! press becomes a drag, and the short silence window after each placement
//! that absorbs reflow-induced movement events. Both are represented as
//! [`Deadline`] tokens stored in `Option` fields — cancellation is
//! `Option::take`, and expiry is a pure comparison against a
//! caller-supplied `Instant`. No ambient clocks, no background timers.
//!
//! # Invariants
//!
//! 1. A deadline never fires on its own; the owner must poll it with the
//!    current time.
//! 2. Expiry is edge-inclusive: a deadline created `after(now, d)` is
//!    expired at exactly `now + d`.
//! 3. Dropping (or `take`ing) the token is a complete cancellation; there
//!    is no other state to clean up.

use web_time::{Duration, Instant};

/// A point in time the owner checks against explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// A deadline `delay` after `now`.
    #[must_use]
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self { at: now + delay }
    }

    /// A deadline at an absolute instant.
    #[must_use]
    pub const fn at(instant: Instant) -> Self {
        Self { at: instant }
    }

    /// True once `now` has reached the deadline.
    #[must_use]
    pub fn is_expired(self, now: Instant) -> bool {
        now >= self.at
    }

    /// Time left until expiry (zero if already expired).
    #[must_use]
    pub fn remaining(self, now: Instant) -> Duration {
        self.at.saturating_duration_since(now)
    }
}
