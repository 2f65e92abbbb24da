//! State snapshot serialization for offline inspection.
//!
//! Snapshots capture the per-vertex simulation buffers of a surface at a
//! frame boundary, enabling diff-based debugging between runs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use squish_solver::SlimeSurface;
use squish_types::{SquishError, SquishResult};

/// A complete surface state snapshot.
///
/// Serialized with `bincode` for compact binary output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Frames run when this snapshot was taken.
    pub frame: u64,
    /// Simulation time in seconds.
    pub sim_time: f64,
    /// Grid dimensions in quads.
    pub x_size: usize,
    pub y_size: usize,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Live positions (flat: [x0, y0, z0, x1, y1, z1, ...]).
    pub positions: Vec<f32>,
    /// Target positions (flat, same layout).
    pub targets: Vec<f32>,
    pub elasticity: Vec<f32>,
    /// Press amount per vertex.
    pub press: Vec<f32>,
}

/// Headline numbers of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotSummary {
    pub max_press: f32,
    pub min_elasticity: f32,
    /// Largest distance between a live position and its target.
    pub max_target_gap: f32,
}

impl StateSnapshot {
    /// Captures the current state of `surface`.
    pub fn capture(surface: &SlimeSurface) -> Self {
        let state = surface.state();
        let dims = surface.dims();
        Self {
            frame: surface.frame(),
            sim_time: surface.sim_time(),
            x_size: dims.x_size,
            y_size: dims.y_size,
            vertex_count: state.vertex_count,
            positions: state.vertices.iter().flat_map(|v| v.position).collect(),
            targets: state.targets.iter().flat_map(|t| t.to_array()).collect(),
            elasticity: state.elasticity.clone(),
            press: state.vertices.iter().map(|v| v.press_amount()).collect(),
        }
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> SquishResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| {
            SquishError::Serialization(format!("Snapshot serialization failed: {e}"))
        })
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> SquishResult<Self> {
        let snapshot: Self = bincode::deserialize(data).map_err(|e| {
            SquishError::Serialization(format!("Snapshot deserialization failed: {e}"))
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Writes the snapshot to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> SquishResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    /// Reads a snapshot from a file.
    pub fn load(path: impl AsRef<Path>) -> SquishResult<Self> {
        Self::from_bytes(&std::fs::read(path)?)
    }

    /// Checks that every buffer matches the vertex count.
    pub fn validate(&self) -> SquishResult<()> {
        let n = self.vertex_count;
        if (self.x_size + 1) * (self.y_size + 1) != n
            || self.positions.len() != n * 3
            || self.targets.len() != n * 3
            || self.elasticity.len() != n
            || self.press.len() != n
        {
            return Err(SquishError::InvariantViolation(format!(
                "Snapshot buffers do not match {n} vertices"
            )));
        }
        Ok(())
    }

    pub fn summary(&self) -> SnapshotSummary {
        let max_target_gap = self
            .positions
            .chunks_exact(3)
            .zip(self.targets.chunks_exact(3))
            .map(|(p, t)| {
                let d = [p[0] - t[0], p[1] - t[1], p[2] - t[2]];
                (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
            })
            .fold(0.0, f32::max);
        SnapshotSummary {
            max_press: self.press.iter().copied().fold(0.0, f32::max),
            min_elasticity: self.elasticity.iter().copied().fold(1.0, f32::min),
            max_target_gap,
        }
    }
}
