//! Simulation state: per-vertex buffers advanced every frame.
//!
//! The vertex records are the output buffer handed to the renderer. The
//! remaining arrays are private to the pipeline.

use squish_math::Vec3;
use squish_mesh::{SurfaceMesh, VertexData};

/// Per-vertex simulation buffers.
///
/// All arrays have length `vertex_count` and share vertex indexing:
/// ```text
/// vertices:   [v0, v1, v2, ...]   live position, normal, aux
/// targets:    [t0, t1, t2, ...]   where each vertex is heading
/// rest:       [r0, r1, r2, ...]   generated position, never mutated
/// elasticity: [e0, e1, e2, ...]   drag responsiveness in [0, 1]
/// locks:      [l0, l1, l2, ...]   0 on the outer ring, 1 inside
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    /// Number of vertices.
    pub vertex_count: usize,

    pub vertices: Vec<VertexData>,
    pub targets: Vec<Vec3>,
    pub rest: Vec<Vec3>,
    pub elasticity: Vec<f32>,
    pub locks: Vec<f32>,
}

impl SimulationState {
    /// Initializes the state from a freshly generated mesh.
    ///
    /// Positions, targets and rest all start at the generated positions;
    /// elasticity starts at `1`.
    pub fn from_mesh(mesh: &SurfaceMesh) -> Self {
        let rest: Vec<Vec3> = mesh.vertices.iter().map(VertexData::position).collect();
        let n = rest.len();
        Self {
            vertex_count: n,
            vertices: mesh.vertices.clone(),
            targets: rest.clone(),
            rest,
            elasticity: vec![1.0; n],
            locks: mesh.locks.clone(),
        }
    }

    /// Largest distance between a live position and its rest position.
    pub fn max_displacement(&self) -> f32 {
        self.vertices
            .iter()
            .zip(&self.rest)
            .map(|(v, r)| (v.position() - *r).length())
            .fold(0.0, f32::max)
    }

    /// Largest press amount currently published.
    pub fn max_press(&self) -> f32 {
        self.vertices
            .iter()
            .map(VertexData::press_amount)
            .fold(0.0, f32::max)
    }

    /// Smallest elasticity value, `1` for an empty state.
    pub fn min_elasticity(&self) -> f32 {
        self.elasticity.iter().copied().fold(1.0, f32::min)
    }
}
