//! Normal recomputation from the deformed surface.
//!
//! Two passes, strictly ordered: flat per-triangle normals from the live
//! positions, then a per-vertex average over the adjacency slots. Both
//! passes fan out over a rayon pool; each work item writes only its own
//! element.

use rayon::prelude::*;
use squish_math::Vec3;
use squish_types::constants::{ADJACENCY_WIDTH, PARALLEL_CHUNK};

use crate::topology::Adjacency;
use crate::vertex::VertexData;

/// Flat normal of triangle `(a, b, c)`: `normalize(cross(b − a, c − a))`,
/// or the zero vector when the triangle is degenerate.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// Recomputes one normal per triangle into `out`.
///
/// `out.len()` must equal `indices.len() / 3`.
pub fn compute_triangle_normals(vertices: &[VertexData], indices: &[u32], out: &mut [Vec3]) {
    debug_assert_eq!(out.len(), indices.len() / 3);

    out.par_iter_mut()
        .with_min_len(PARALLEL_CHUNK)
        .enumerate()
        .for_each(|(t, normal)| {
            let base = t * 3;
            let a = vertices[indices[base] as usize].position();
            let b = vertices[indices[base + 1] as usize].position();
            let c = vertices[indices[base + 2] as usize].position();
            *normal = face_normal(a, b, c);
        });
}

/// Sets every vertex normal to the normalized, unweighted sum of the
/// triangle normals referenced by its adjacency slots.
pub fn compute_vertex_normals(
    vertices: &mut [VertexData],
    triangle_normals: &[Vec3],
    adjacency: &Adjacency,
) {
    debug_assert_eq!(vertices.len(), adjacency.vertex_count());
    let slots = adjacency.slots();

    vertices
        .par_iter_mut()
        .with_min_len(PARALLEL_CHUNK)
        .enumerate()
        .for_each(|(i, vertex)| {
            let start = i * ADJACENCY_WIDTH;
            let sum = slots[start..start + ADJACENCY_WIDTH]
                .iter()
                .fold(Vec3::ZERO, |acc, &t| acc + triangle_normals[t as usize]);
            vertex.set_normal(sum.normalize_or_zero());
        });
}

/// Runs both passes. `triangle_normals` is resized to the triangle count.
pub fn recompute_normals(
    vertices: &mut [VertexData],
    indices: &[u32],
    adjacency: &Adjacency,
    triangle_normals: &mut Vec<Vec3>,
) {
    triangle_normals.resize(indices.len() / 3, Vec3::ZERO);
    compute_triangle_normals(vertices, indices, triangle_normals);
    compute_vertex_normals(vertices, triangle_normals, adjacency);
}
