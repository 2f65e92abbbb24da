//! Read-only access to a live surface for consumers such as decorations.

use squish_math::Vec3;

use crate::mesh::SurfaceMesh;
use crate::vertex::VertexData;

/// Per-vertex read access to a surface.
///
/// Indices are in `0..vertex_count()`; out-of-range access panics like
/// slice indexing does.
pub trait SurfaceView {
    fn vertex_count(&self) -> usize;
    fn position(&self, i: usize) -> Vec3;
    fn normal(&self, i: usize) -> Vec3;
    /// Press amount in `[0, 1]`.
    fn press_amount(&self, i: usize) -> f32;
}

impl SurfaceView for [VertexData] {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn position(&self, i: usize) -> Vec3 {
        self[i].position()
    }

    fn normal(&self, i: usize) -> Vec3 {
        self[i].normal()
    }

    fn press_amount(&self, i: usize) -> f32 {
        self[i].press_amount()
    }
}

impl SurfaceView for SurfaceMesh {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn position(&self, i: usize) -> Vec3 {
        self.vertices[i].position()
    }

    fn normal(&self, i: usize) -> Vec3 {
        self.vertices[i].normal()
    }

    fn press_amount(&self, i: usize) -> f32 {
        self.vertices[i].press_amount()
    }
}
