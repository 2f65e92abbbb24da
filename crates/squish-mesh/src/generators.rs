//! Procedural generation of the deformable plane.
//!
//! The plane is tiled with equilateral triangles rather than right
//! triangles: rows are `spacing · √3/2` apart and every even row is shifted
//! by half a spacing (brick pattern). Deformation of such a grid has no
//! preferred axis, so strokes in any direction look alike.

use serde::{Deserialize, Serialize};
use squish_math::{Vec2, Vec3};
use squish_types::constants::{MAX_GRID_SIZE, ROW_HEIGHT_FACTOR};
use squish_types::{SquishError, SquishResult};

use crate::mesh::SurfaceMesh;
use crate::vertex::VertexData;

/// Inputs of the grid generator.
///
/// `width`/`height` are the visible world rectangle; `border`, `spacing`
/// are given unscaled and multiplied by `scale` during generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    /// Visible world width.
    pub width: f32,
    /// Visible world height.
    pub height: f32,
    /// Master scale applied to border and spacing.
    pub scale: f32,
    /// Margin generated outside the visible rectangle on every side.
    pub border: f32,
    /// Distance between neighbouring vertices in a row.
    pub spacing: f32,
}

/// Grid dimensions in quads. The grid has `(x_size + 1) · (y_size + 1)` vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    pub x_size: usize,
    pub y_size: usize,
}

impl GridDims {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        (self.x_size + 1) * (self.y_size + 1)
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.x_size * self.y_size * 2
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangle_count() * 3
    }
}

impl GridParams {
    /// Scaled vertex spacing.
    #[inline]
    pub fn scaled_spacing(&self) -> f32 {
        self.spacing * self.scale
    }

    /// Scaled border margin.
    #[inline]
    pub fn scaled_border(&self) -> f32 {
        self.border * self.scale
    }

    /// Visible rectangle in scale-normalized local units: `(min_x, min_y, max_x, max_y)`.
    pub fn local_bounds(&self) -> [f32; 4] {
        let hw = self.width * 0.5 / self.scale;
        let hh = self.height * 0.5 / self.scale;
        [-hw, -hh, hw, hh]
    }

    /// Checks the parameters and computes the grid dimensions.
    ///
    /// Fails with [`SquishError::InvalidConfig`] when scale or spacing is not
    /// strictly positive, when the rectangle is degenerate, or when either
    /// dimension would exceed [`MAX_GRID_SIZE`].
    pub fn dimensions(&self) -> SquishResult<GridDims> {
        if !(self.scale > 0.0) || !self.scale.is_finite() {
            return Err(SquishError::InvalidConfig(format!(
                "Scaling must be greater than zero, got {}",
                self.scale
            )));
        }
        if !(self.spacing > 0.0) || !self.spacing.is_finite() {
            return Err(SquishError::InvalidConfig(format!(
                "Vertex spacing must be greater than zero, got {}",
                self.spacing
            )));
        }
        if !(self.width > 0.0 && self.height > 0.0) || !(self.width * self.height).is_finite() {
            return Err(SquishError::InvalidConfig(format!(
                "Surface rectangle must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.border >= 0.0) || !self.border.is_finite() {
            return Err(SquishError::InvalidConfig(format!(
                "Border must be non-negative, got {}",
                self.border
            )));
        }

        let spacing = self.scaled_spacing();
        let border = self.scaled_border();

        let x = ((self.width + border * 2.0) / spacing).round_ties_even();
        let y = (((self.height + border * 2.0) / ROW_HEIGHT_FACTOR) / spacing).round_ties_even();

        if !(x <= MAX_GRID_SIZE as f32) || !(y <= MAX_GRID_SIZE as f32) {
            return Err(SquishError::InvalidConfig(format!(
                "Requested mesh size too large: {}x{} (max {})",
                x, y, MAX_GRID_SIZE
            )));
        }

        Ok(GridDims {
            x_size: (x as usize).max(1),
            y_size: (y as usize).max(1),
        })
    }
}

/// Generates the brick-pattern plane described by `params`.
///
/// The output is a pure function of `params`: identical inputs produce
/// byte-identical vertex and index buffers.
///
/// # Example
/// ```
/// use squish_mesh::generators::{build_grid, GridParams};
/// let params = GridParams { width: 2.0, height: 2.0, scale: 1.0, border: 0.0, spacing: 1.0 };
/// let mesh = build_grid(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn build_grid(params: &GridParams) -> SquishResult<SurfaceMesh> {
    let dims = params.dimensions()?;
    let GridDims { x_size, y_size } = dims;

    let spacing = params.scaled_spacing();
    let border = params.scaled_border();
    let half_w = params.width * 0.5;
    let half_h = params.height * 0.5;

    let mut vertices = Vec::with_capacity(dims.vertex_count());
    let mut locks = Vec::with_capacity(dims.vertex_count());

    // Generate vertices
    for y in 0..=y_size {
        let row_shift = if y % 2 == 0 { spacing * 0.5 } else { 0.0 };
        let py = (y as f32 * spacing) * ROW_HEIGHT_FACTOR - border - half_h;
        for x in 0..=x_size {
            let px = x as f32 * spacing - half_w - border + row_shift;
            let position = Vec3::new(px, py, 0.0);
            let uv = Vec2::new(px / params.scale, py / params.scale);
            vertices.push(VertexData::new(position, uv));

            let on_border = x == 0 || x == x_size || y == 0 || y == y_size;
            locks.push(if on_border { 0.0 } else { 1.0 });
        }
    }

    // Generate triangles (two per quad, winding follows row parity)
    let row = x_size as u32;
    let mut indices = Vec::with_capacity(dims.index_count());
    let mut vi = 0u32;
    for y in 0..y_size {
        for _ in 0..x_size {
            if y % 2 == 0 {
                indices.extend_from_slice(&[vi, vi + row + 2, vi + 1]);
                indices.extend_from_slice(&[vi, vi + row + 1, vi + row + 2]);
            } else {
                indices.extend_from_slice(&[vi, vi + row + 1, vi + 1]);
                indices.extend_from_slice(&[vi + 1, vi + row + 1, vi + row + 2]);
            }
            vi += 1;
        }
        // Skip the last vertex of the row
        vi += 1;
    }

    tracing::debug!(
        x_size,
        y_size,
        vertices = vertices.len(),
        triangles = indices.len() / 3,
        "generated surface grid"
    );

    Ok(SurfaceMesh {
        dims,
        vertices,
        indices,
        locks,
    })
}
