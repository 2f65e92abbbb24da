//! # squish-math
//!
//! Math primitives for the Squish deformable surface engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`, `Quat`, etc.)
//! - Scalar helpers (`lerp`, `saturate`) and the falloff curves used by
//!   the pointer force model
//! - Orientation helpers for placing decorations along surface normals

pub mod easing;
pub mod orient;

pub use easing::{ease_out_falloff, lerp, lerp_vec3, saturate, smootherstep_falloff};
pub use orient::{euler_degrees_to_quat, look_rotation_safe};

// Re-export glam types as the canonical math types for Squish.
pub use glam::{EulerRot, Mat3, Quat, Vec2, Vec3, Vec4};
