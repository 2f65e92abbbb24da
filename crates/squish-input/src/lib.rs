//! # squish-input
//!
//! Pointer input for the Squish engine.
//!
//! - [`PointerSet`]: The active pointer records the force model reads.
//!   Driven by discrete [`PointerEvent`]s in local surface coordinates.
//! - [`TouchTracker`]: Turns anonymous per-frame touch samples into
//!   identified down/drag/up events.

pub mod pointer;
pub mod tracker;

pub use pointer::{PointerEvent, PointerRecord, PointerSet};
pub use tracker::TouchTracker;
