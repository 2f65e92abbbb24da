//! # squish-debug
//!
//! Inspection hooks and state snapshots for debugging surface behaviour.
//! Snapshots serialize the per-vertex simulation buffers to binary so a
//! frame can be inspected offline.

pub mod hooks;
pub mod snapshot;

pub use hooks::{tick_with_hooks, InspectionHook, TelemetryHook};
pub use snapshot::{SnapshotSummary, StateSnapshot};
