//! Simulation event types.
//!
//! Structured events emitted by the surface at various points in each
//! frame. Events are lightweight value types that carry just enough data
//! to be useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with a frame index and carry domain-specific data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame number (0-indexed).
    pub frame: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Frame started.
    FrameBegin {
        /// Simulation time at the start of the frame (seconds).
        sim_time: f64,
    },

    /// Frame pipeline completed.
    FrameEnd {
        /// Wall-clock time for the whole pipeline (seconds).
        wall_time: f64,
        /// Pointers that were active during the frame.
        active_pointers: u32,
    },

    /// Grid topology was regenerated.
    Rebuild {
        x_size: u32,
        y_size: u32,
        vertex_count: u32,
        triangle_count: u32,
    },

    /// A rebuild request was refused; previous geometry is kept.
    RebuildRejected {
        reason: String,
    },

    /// A pointer started touching the surface.
    PointerDown {
        id: i32,
    },

    /// A pointer left the surface.
    PointerUp {
        id: i32,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u64, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
