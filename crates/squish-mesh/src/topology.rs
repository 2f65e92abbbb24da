//! Vertex-to-triangle adjacency.
//!
//! The normal recomputation pass averages exactly [`ADJACENCY_WIDTH`]
//! triangle normals per vertex. Vertices touching fewer triangles cycle
//! through their own list to fill the remaining slots (`list[k % len]`), so
//! edge and corner vertices count some triangles more than once. Every
//! slot always references a real triangle touching the vertex.

use squish_types::constants::ADJACENCY_WIDTH;
use squish_types::{SquishError, SquishResult, TriangleId, VertexId};

/// Fixed-width vertex → triangle table.
///
/// Rebuilt when the grid topology changes, never per frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    /// `ADJACENCY_WIDTH` triangle indices per vertex, flat.
    slots: Vec<u32>,
    /// Number of triangles actually touching each vertex.
    degrees: Vec<u32>,
}

impl Adjacency {
    /// Builds the table from a flat triangle index buffer.
    ///
    /// Triangles are recorded per vertex in natural face order. Fails with
    /// [`SquishError::InvalidMesh`] when an index is out of range or when a
    /// vertex is not referenced by any triangle.
    pub fn build(indices: &[u32], vertex_count: usize) -> SquishResult<Self> {
        if indices.len() % 3 != 0 {
            return Err(SquishError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        let mut vertex_triangles: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
        for (i, &v) in indices.iter().enumerate() {
            let list = vertex_triangles.get_mut(v as usize).ok_or_else(|| {
                SquishError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    v, i, vertex_count
                ))
            })?;
            list.push((i / 3) as u32);
        }

        let mut slots = Vec::with_capacity(vertex_count * ADJACENCY_WIDTH);
        let mut degrees = Vec::with_capacity(vertex_count);
        for (v, tris) in vertex_triangles.iter().enumerate() {
            if tris.is_empty() {
                return Err(SquishError::InvalidMesh(format!(
                    "Vertex {} is not part of any triangle",
                    v
                )));
            }
            for k in 0..ADJACENCY_WIDTH {
                slots.push(tris[k % tris.len()]);
            }
            degrees.push(tris.len() as u32);
        }

        Ok(Self { slots, degrees })
    }

    /// Number of vertices covered by the table.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.degrees.len()
    }

    /// The six triangle slots of vertex `v`.
    #[inline]
    pub fn triangles_of(&self, v: VertexId) -> &[u32] {
        let start = v.index() * ADJACENCY_WIDTH;
        &self.slots[start..start + ADJACENCY_WIDTH]
    }

    /// Iterates the slots of vertex `v` as typed triangle ids.
    pub fn triangle_ids(&self, v: VertexId) -> impl Iterator<Item = TriangleId> + '_ {
        self.triangles_of(v).iter().map(|&t| TriangleId(t))
    }

    /// Number of distinct triangle references touching vertex `v`.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.degrees[v.index()] as usize
    }

    /// The whole table, `ADJACENCY_WIDTH` entries per vertex.
    #[inline]
    pub fn slots(&self) -> &[u32] {
        &self.slots
    }
}
