//! Decoration descriptors and per-frame instance transforms.

use serde::{Deserialize, Serialize};
use squish_math::{Quat, Vec3};

/// One kind of decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationInfo {
    /// Label used by the caller to pick a mesh and material.
    pub name: String,
    /// Share of surface vertices carrying this decoration, in `[0, 1]`.
    pub fill: f32,
    /// Offset along the vertex normal.
    pub normal_offset: f32,
    /// Inward offset at full press.
    pub press_offset: f32,
    /// Lower bound of the random Euler rotation (degrees). `z` spins
    /// around the vertex normal.
    pub min_rotation: Vec3,
    /// Upper bound of the random Euler rotation (degrees).
    pub max_rotation: Vec3,
    /// Instance size.
    pub scale: f32,
}

impl Default for DecorationInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            fill: 0.1,
            normal_offset: 0.0,
            press_offset: 0.0,
            min_rotation: Vec3::ZERO,
            max_rotation: Vec3::new(0.0, 0.0, 360.0),
            scale: 0.1,
        }
    }
}

/// Transform of one placed decoration for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecorationInstance {
    /// Vertex the decoration is pinned to.
    pub vertex: usize,
    pub position: Vec3,
    pub rotation: Quat,
    /// Uniform size.
    pub size: f32,
}
