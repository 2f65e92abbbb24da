//! Pointer records and their lifecycle.
//!
//! ```text
//! absent ──down──▶ down ──drag──▶ dragging ──up──▶ absent
//! ```
//!
//! Removal is purely event-driven; there is no timeout. A `down` for an id
//! that is already tracked resets that record in place.

use serde::{Deserialize, Serialize};
use squish_math::Vec2;
use squish_types::PointerId;

/// A discrete input event in local surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// A pointer touched the surface.
    Down { id: PointerId, position: Vec2 },
    /// A tracked pointer moved.
    Drag { id: PointerId, position: Vec2 },
    /// A pointer left the surface.
    Up { id: PointerId },
}

impl PointerEvent {
    /// The pointer this event refers to.
    pub fn id(&self) -> PointerId {
        match *self {
            PointerEvent::Down { id, .. } | PointerEvent::Drag { id, .. } | PointerEvent::Up { id } => id,
        }
    }
}

/// One tracked pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerRecord {
    pub id: PointerId,
    /// Latest reported position.
    pub position: Vec2,
    /// Position at the previous frame boundary.
    pub previous_position: Vec2,
    /// Movement over the last frame, derived by [`PointerSet::advance_frame`].
    pub delta: Vec2,
}

impl PointerRecord {
    fn pressed_at(id: PointerId, position: Vec2) -> Self {
        Self {
            id,
            position,
            previous_position: position,
            delta: Vec2::ZERO,
        }
    }
}

/// The active pointers, in insertion order.
///
/// The force model visits pointers in this order, so overlapping pointers
/// compound in the order they went down.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointerSet {
    pointers: Vec<PointerRecord>,
}

impl PointerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `id` at `position`.
    ///
    /// Returns `true` when a new pointer was created, `false` when an
    /// already tracked pointer was reset in place.
    pub fn down(&mut self, id: PointerId, position: Vec2) -> bool {
        let record = PointerRecord::pressed_at(id, position);
        if let Some(existing) = self.pointers.iter_mut().find(|p| p.id == id) {
            *existing = record;
            return false;
        }
        tracing::trace!(pointer = id.0, x = position.x, y = position.y, "pointer down");
        self.pointers.push(record);
        true
    }

    /// Moves a tracked pointer. Unknown ids are ignored and yield `false`.
    pub fn drag(&mut self, id: PointerId, position: Vec2) -> bool {
        match self.pointers.iter_mut().find(|p| p.id == id) {
            Some(record) => {
                record.position = position;
                true
            }
            None => false,
        }
    }

    /// Stops tracking `id`. Returns whether a pointer was removed.
    pub fn up(&mut self, id: PointerId) -> bool {
        match self.pointers.iter().position(|p| p.id == id) {
            Some(index) => {
                self.pointers.remove(index);
                tracing::trace!(pointer = id.0, "pointer up");
                true
            }
            None => false,
        }
    }

    /// Applies one event. Returns whether the pointer set changed.
    pub fn apply(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { id, position } => {
                self.down(id, position);
                true
            }
            PointerEvent::Drag { id, position } => self.drag(id, position),
            PointerEvent::Up { id } => self.up(id),
        }
    }

    /// Frame boundary: derive each delta and shift position into previous.
    ///
    /// Must run once per frame, before the force model reads the records.
    pub fn advance_frame(&mut self) {
        for p in &mut self.pointers {
            p.delta = p.position - p.previous_position;
            p.previous_position = p.position;
        }
    }

    /// Looks up a pointer by id.
    pub fn get(&self, id: PointerId) -> Option<&PointerRecord> {
        self.pointers.iter().find(|p| p.id == id)
    }

    #[inline]
    pub fn as_slice(&self) -> &[PointerRecord] {
        &self.pointers
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointerRecord> {
        self.pointers.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// Number of pointers that moved during the last frame.
    pub fn moving_count(&self) -> usize {
        self.pointers.iter().filter(|p| p.delta != Vec2::ZERO).count()
    }
}
