//! Benchmark scenarios: scripted pointer strokes over a fixed viewport.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Poke**: One pointer pressed and held at the centre, then released
//! 2. **Swipe**: One pointer dragged across the surface
//! 3. **Multi-touch**: Two pointers dragged along crossing paths

use serde::{Deserialize, Serialize};

use squish_input::PointerEvent;
use squish_math::Vec2;
use squish_solver::SlimeConfig;
use squish_types::constants::DEFAULT_DT;
use squish_types::PointerId;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Press and hold at the centre.
    Poke,
    /// Single drag across the surface.
    Swipe,
    /// Two overlapping drags.
    MultiTouch,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[ScenarioKind::Poke, ScenarioKind::Swipe, ScenarioKind::MultiTouch]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Poke => "poke",
            ScenarioKind::Swipe => "swipe",
            ScenarioKind::MultiTouch => "multi_touch",
        }
    }

    /// Looks a scenario up by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// One pointer going down, moving in a straight line and lifting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub id: PointerId,
    pub start: Vec2,
    pub end: Vec2,
    /// Frame of the `Down` event.
    pub down_frame: u32,
    /// Frame of the `Up` event. Clamped to at least `down_frame + 1`.
    pub up_frame: u32,
}

impl Stroke {
    /// Frame of the `Up` event. A pointer stays down for at least one frame.
    pub fn release_frame(&self) -> u32 {
        self.up_frame.max(self.down_frame.saturating_add(1))
    }

    /// Events this stroke produces before frame `frame` runs.
    fn event_at(&self, frame: u32) -> Option<PointerEvent> {
        let up_frame = self.release_frame();
        if frame == self.down_frame {
            Some(PointerEvent::Down { id: self.id, position: self.start })
        } else if frame == up_frame {
            Some(PointerEvent::Up { id: self.id })
        } else if frame > self.down_frame && frame < up_frame {
            let t = (frame - self.down_frame) as f32 / (up_frame - self.down_frame) as f32;
            Some(PointerEvent::Drag {
                id: self.id,
                position: self.start.lerp(self.end, t),
            })
        } else {
            None
        }
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Surface configuration.
    pub config: SlimeConfig,
    /// World rectangle.
    pub width: f32,
    pub height: f32,
    /// Scripted pointer strokes.
    pub strokes: Vec<Stroke>,
    /// Number of frames to simulate.
    pub frames: u32,
    /// Frame timestep (seconds).
    pub dt: f32,
}

impl Scenario {
    /// Create the poke scenario.
    ///
    /// A single press held at the centre for 1.5 seconds, then 1 second
    /// of recovery at 60fps.
    pub fn poke() -> Self {
        Self {
            kind: ScenarioKind::Poke,
            config: SlimeConfig::default(),
            width: 6.0,
            height: 4.0,
            strokes: vec![Stroke {
                id: PointerId(0),
                start: Vec2::ZERO,
                end: Vec2::ZERO,
                down_frame: 0,
                up_frame: 90,
            }],
            frames: 150,
            dt: DEFAULT_DT,
        }
    }

    /// Create the swipe scenario.
    ///
    /// One pointer dragged from left to right over one second.
    pub fn swipe() -> Self {
        Self {
            kind: ScenarioKind::Swipe,
            config: SlimeConfig::default(),
            width: 6.0,
            height: 4.0,
            strokes: vec![Stroke {
                id: PointerId(0),
                start: Vec2::new(-2.0, 0.0),
                end: Vec2::new(2.0, 0.0),
                down_frame: 0,
                up_frame: 60,
            }],
            frames: 120,
            dt: DEFAULT_DT,
        }
    }

    /// Create the multi-touch scenario.
    ///
    /// Two pointers on crossing diagonals whose influence discs overlap
    /// for most of the stroke.
    pub fn multi_touch() -> Self {
        Self {
            kind: ScenarioKind::MultiTouch,
            config: SlimeConfig::default(),
            width: 6.0,
            height: 4.0,
            strokes: vec![
                Stroke {
                    id: PointerId(0),
                    start: Vec2::new(-1.5, -0.5),
                    end: Vec2::new(1.5, 0.5),
                    down_frame: 0,
                    up_frame: 60,
                },
                Stroke {
                    id: PointerId(1),
                    start: Vec2::new(1.5, -0.5),
                    end: Vec2::new(-1.5, 0.5),
                    down_frame: 10,
                    up_frame: 70,
                },
            ],
            frames: 120,
            dt: DEFAULT_DT,
        }
    }

    /// Create a scenario from its kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::Poke => Self::poke(),
            ScenarioKind::Swipe => Self::swipe(),
            ScenarioKind::MultiTouch => Self::multi_touch(),
        }
    }

    /// Replaces the surface configuration.
    pub fn with_config(mut self, config: SlimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Pointer events to apply before frame `frame` runs, in stroke order.
    pub fn events_at(&self, frame: u32) -> Vec<PointerEvent> {
        self.strokes.iter().filter_map(|s| s.event_at(frame)).collect()
    }
}
