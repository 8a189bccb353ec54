#![forbid(unsafe_code)]

//! Core: canonical input events, geometry, and deadlines.
//!
//! # Role in SortKit
//! `sortkit-core` is the input layer. It owns the normalized event types the
//! engine consumes, the `f64` pixel geometry used for hit-testing, and the
//! cancelable deadline tokens that replace ad hoc timer flags.
//!
//! # How it fits in the system
//! The engine (`sortkit`) consumes `sortkit_core::event::InputEvent` values
//! and drives a drag session against host-supplied geometry. Nothing in this
//! crate touches a clock on its own: callers pass `Instant` values in, which
//! keeps every decision sequence reproducible.

pub mod event;
pub mod geometry;
pub mod timer;
