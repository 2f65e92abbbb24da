//! Touch tracking for input sources that report bare positions.
//!
//! Some gesture sources only deliver "a touch is at p" each frame. The
//! tracker correlates those samples with existing tracks greedily: each
//! sample joins the first track whose last point lies within
//! `max_track_distance`, otherwise it opens a new track. This is a simple
//! nearest-within-threshold heuristic, not a globally optimal assignment.

use squish_math::Vec2;
use squish_types::PointerId;

use crate::pointer::PointerEvent;

/// Largest pointer id handed out before ids wrap back to zero.
const MAX_POINTER_ID: i32 = 10;

#[derive(Debug, Clone, Copy)]
struct Track {
    id: PointerId,
    new_point: Vec2,
    previous_point: Vec2,
    has_new_point: bool,
    is_new: bool,
}

/// Correlates unlabelled touch samples into pointer events.
#[derive(Debug, Clone)]
pub struct TouchTracker {
    max_track_distance: f32,
    next_id: i32,
    pending: Vec<Vec2>,
    tracks: Vec<Track>,
}

impl TouchTracker {
    /// Creates a tracker. Samples farther than `max_track_distance` from
    /// every track start a new pointer.
    pub fn new(max_track_distance: f32) -> Self {
        Self {
            max_track_distance,
            next_id: 0,
            pending: Vec::new(),
            tracks: Vec::new(),
        }
    }

    /// Queues a touch sample for the next [`update`](Self::update).
    pub fn push_point(&mut self, p: Vec2) {
        self.pending.push(p);
    }

    /// Number of live tracks.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Consumes the queued samples and returns the resulting events.
    ///
    /// Tracks that received no sample this update emit `Up` and are dropped;
    /// tracks that did emit `Drag`; freshly opened tracks emit `Down`.
    pub fn update(&mut self) -> Vec<PointerEvent> {
        self.assign_samples();
        self.fire_events()
    }

    fn assign_samples(&mut self) {
        // Latest sample first
        while let Some(p) = self.pending.pop() {
            let max = self.max_track_distance;
            match self
                .tracks
                .iter_mut()
                .find(|t| p.distance(t.previous_point) <= max)
            {
                Some(track) => {
                    track.has_new_point = true;
                    track.new_point = p;
                }
                None => {
                    let id = self.allocate_id();
                    self.tracks.push(Track {
                        id,
                        new_point: p,
                        previous_point: p,
                        has_new_point: true,
                        is_new: true,
                    });
                }
            }
        }
    }

    fn fire_events(&mut self) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        for i in (0..self.tracks.len()).rev() {
            let track = &mut self.tracks[i];
            if track.is_new {
                track.is_new = false;
                track.has_new_point = false;
                track.previous_point = track.new_point;
                events.push(PointerEvent::Down {
                    id: track.id,
                    position: track.new_point,
                });
            } else if track.has_new_point {
                track.has_new_point = false;
                track.previous_point = track.new_point;
                events.push(PointerEvent::Drag {
                    id: track.id,
                    position: track.new_point,
                });
            } else {
                events.push(PointerEvent::Up { id: track.id });
                self.tracks.remove(i);
            }
        }
        events
    }

    fn allocate_id(&mut self) -> PointerId {
        if self.next_id > MAX_POINTER_ID {
            self.next_id = 0;
        }
        let id = PointerId(self.next_id);
        self.next_id += 1;
        id
    }
}
