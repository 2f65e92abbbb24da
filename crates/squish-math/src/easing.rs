//! Scalar interpolation and falloff curves.
//!
//! Both falloffs map a normalized distance `t ∈ [0, 1]` to a weight that is
//! `1` at the centre of the influence disc and `0` at its rim.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

/// Linear interpolation `a + (b - a) * t`. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Component-wise [`lerp`]. Yields `a` exactly when `a == b`.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Clamps `x` to `[0, 1]`. NaN maps to `0`.
#[inline]
pub fn saturate(x: f32) -> f32 {
    if x > 0.0 {
        x.min(1.0)
    } else {
        0.0
    }
}

/// Ease-out falloff: `lerp(1, 0, sin(t · π/2))`.
///
/// Drops slowly near the centre and quickly toward the rim. Used for drag.
#[inline]
pub fn ease_out_falloff(t: f32) -> f32 {
    lerp(1.0, 0.0, (t * FRAC_PI_2).sin())
}

/// Smootherstep falloff: `lerp(1, 0, 6t⁵ − 15t⁴ + 10t³)`.
///
/// Zero first and second derivatives at both ends. Used for press depth.
#[inline]
pub fn smootherstep_falloff(t: f32) -> f32 {
    lerp(1.0, 0.0, t * t * t * (t * (6.0 * t - 15.0) + 10.0))
}
