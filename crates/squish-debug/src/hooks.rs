//! Inspection hooks for live debugging.
//!
//! Hooks observe the frame loop at defined points without touching the
//! surface itself.

use squish_solver::{FrameStats, SlimeSurface};
use squish_telemetry::{EventKind, SimulationEvent};

/// Trait for frame inspection hooks.
///
/// # Lifecycle
///
/// ```text
/// for each frame:
///   hook.on_frame_begin(...)
///   surface.tick(...)
///   hook.on_frame_end(...)
/// hook.on_simulation_end()
/// ```
pub trait InspectionHook: Send {
    /// Called before a frame runs.
    fn on_frame_begin(&mut self, frame: u64, sim_time: f64) {
        let _ = (frame, sim_time);
    }

    /// Called after a frame completed.
    fn on_frame_end(&mut self, stats: &FrameStats) {
        let _ = stats;
    }

    /// Called when the run completes.
    fn on_simulation_end(&mut self) {}

    /// Returns the hook's name for logging.
    fn name(&self) -> &str;
}

/// Ticks `surface` once, notifying every hook around the frame.
pub fn tick_with_hooks(
    surface: &mut SlimeSurface,
    dt: f32,
    hooks: &mut [Box<dyn InspectionHook>],
) -> FrameStats {
    let (frame, sim_time) = (surface.frame(), surface.sim_time());
    for hook in hooks.iter_mut() {
        hook.on_frame_begin(frame, sim_time);
    }
    let stats = surface.tick(dt);
    for hook in hooks.iter_mut() {
        hook.on_frame_end(&stats);
    }
    stats
}

/// Hook that records frame lifecycle calls as telemetry events.
pub struct TelemetryHook {
    events: Vec<SimulationEvent>,
}

impl TelemetryHook {
    /// Creates a new telemetry hook.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Drains collected events for dispatch.
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for TelemetryHook {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectionHook for TelemetryHook {
    fn on_frame_begin(&mut self, frame: u64, sim_time: f64) {
        self.events
            .push(SimulationEvent::new(frame, EventKind::FrameBegin { sim_time }));
    }

    fn on_frame_end(&mut self, stats: &FrameStats) {
        self.events.push(SimulationEvent::new(
            stats.frame,
            EventKind::FrameEnd {
                wall_time: stats.wall_time,
                active_pointers: stats.active_pointers as u32,
            },
        ));
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}
