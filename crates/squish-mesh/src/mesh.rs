//! Surface mesh: the vertex records and index buffer of one grid build.

use serde::{Deserialize, Serialize};
use squish_math::Vec3;
use squish_types::{SquishError, SquishResult};

use crate::generators::GridDims;
use crate::vertex::VertexData;

/// A generated triangulated plane.
///
/// `vertices` doubles as the rest state right after generation: the
/// solver copies positions out of it into its rest and target arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMesh {
    /// Grid dimensions in quads.
    pub dims: GridDims,
    /// Vertex records in row-major order (`y * (x_size + 1) + x`).
    pub vertices: Vec<VertexData>,
    /// Triangle indices, stored flat: `[t0v0, t0v1, t0v2, t1v0, ...]`.
    pub indices: Vec<u32>,
    /// Per-vertex lock mask: `0.0` on the outer ring, `1.0` elsewhere.
    pub locks: Vec<f32>,
}

impl SurfaceMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        self.vertices[i].position()
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Raw vertex buffer bytes, `VertexData::STRIDE` bytes per vertex.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw 32-bit index buffer bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Vertex and lock arrays have the same length
    /// - Vertex count matches the grid dimensions
    /// - Triangle indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> SquishResult<()> {
        let n = self.vertices.len();

        if self.locks.len() != n {
            return Err(SquishError::InvalidMesh(format!(
                "Lock mask length ({}) != vertex count ({})",
                self.locks.len(),
                n
            )));
        }

        if self.dims.vertex_count() != n {
            return Err(SquishError::InvalidMesh(format!(
                "Grid {}x{} expects {} vertices, found {}",
                self.dims.x_size,
                self.dims.y_size,
                self.dims.vertex_count(),
                n
            )));
        }

        if self.indices.len() % 3 != 0 {
            return Err(SquishError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(SquishError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(SquishError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }
}
