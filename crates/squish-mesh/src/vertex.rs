//! The vertex record shared with the render consumer.
//!
//! Layout is fixed: position `3×f32`, normal `3×f32`, auxiliary `4×f32`.
//! The auxiliary channel carries the world-projected UV in `x`/`y` and the
//! live press amount in `z`; `w` is reserved and kept at zero.

use serde::{Deserialize, Serialize};
use squish_math::{Vec2, Vec3};

/// One entry of the Surface State Buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
pub struct VertexData {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub aux: [f32; 4],
}

impl VertexData {
    /// Size of one record in bytes (the vertex buffer stride).
    pub const STRIDE: usize = std::mem::size_of::<VertexData>();

    /// Creates a record with a `+Z` normal and zero press amount.
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: [0.0, 0.0, 1.0],
            aux: [uv.x, uv.y, 0.0, 0.0],
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    #[inline]
    pub fn set_position(&mut self, p: Vec3) {
        self.position = p.to_array();
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    #[inline]
    pub fn set_normal(&mut self, n: Vec3) {
        self.normal = n.to_array();
    }

    /// World-projected, scale-normalized texture coordinate.
    #[inline]
    pub fn uv(&self) -> Vec2 {
        Vec2::new(self.aux[0], self.aux[1])
    }

    /// How far this vertex is pressed in, in `[0, 1]`.
    #[inline]
    pub fn press_amount(&self) -> f32 {
        self.aux[2]
    }

    #[inline]
    pub fn set_press_amount(&mut self, amount: f32) {
        self.aux[2] = amount;
    }
}
