//! Pointer force model.
//!
//! Each vertex gathers the contribution of every active pointer, in list
//! order, into its target position:
//!
//! - **Drag** moves the target in the pointer's direction of travel with an
//!   ease-out falloff over `drag_radius`, scaled by the vertex's remaining
//!   elasticity. Each drag drains elasticity in proportion to the distance
//!   moved.
//! - **Press** pushes the target along `+Z` (into the surface). Inside the
//!   inner radius the target is held at a firm floor; out to the outer
//!   radius it sinks toward a ceiling at a rate set by `press_force`.
//!
//! Only targets and elasticity are written here; live positions follow in
//! the relaxation stage.

use rayon::prelude::*;
use squish_input::PointerRecord;
use squish_math::{ease_out_falloff, lerp, saturate, smootherstep_falloff, Vec2, Vec3};
use squish_types::constants::PARALLEL_CHUNK;

use crate::config::ForceParams;
use crate::state::SimulationState;

/// Applies every pointer to every vertex target.
///
/// Pointers compound: later pointers see the target already moved by
/// earlier ones.
pub fn apply_pointer_forces(
    state: &mut SimulationState,
    pointers: &[PointerRecord],
    params: &ForceParams,
    dt: f32,
) {
    if pointers.is_empty() {
        return;
    }
    let params = params.sanitized();
    let press_rate = saturate(dt * params.press_force);

    let SimulationState {
        targets,
        elasticity,
        rest,
        locks,
        ..
    } = state;

    targets
        .par_iter_mut()
        .zip(elasticity.par_iter_mut())
        .zip(rest.par_iter())
        .zip(locks.par_iter())
        .with_min_len(PARALLEL_CHUNK)
        .for_each(|(((target, elasticity), &rest), &lock)| {
            for pointer in pointers {
                apply_pointer(target, elasticity, rest, lock, pointer, &params, press_rate);
            }
        });
}

impl ForceParams {
    /// Clamps the parameters into the ranges the force model can use.
    ///
    /// Negative radii collapse to zero (disabled) and the inner press radius
    /// never exceeds the outer one.
    pub fn sanitized(&self) -> Self {
        let press_radius_max = self.press_radius_max.max(0.0);
        Self {
            drag_radius: self.drag_radius.max(0.0),
            press_radius_max,
            press_radius_min: self.press_radius_min.clamp(0.0, press_radius_max),
            press_depth: self.press_depth.max(0.0),
            ..*self
        }
    }
}

#[inline]
fn apply_pointer(
    target: &mut Vec3,
    elasticity: &mut f32,
    rest: Vec3,
    lock: f32,
    pointer: &PointerRecord,
    params: &ForceParams,
    press_rate: f32,
) {
    let distance = Vec2::new(target.x, target.y).distance(pointer.position);

    // Drag
    if params.drag_radius > 0.0 && distance <= params.drag_radius {
        let ease = ease_out_falloff(distance / params.drag_radius);
        let offset = pointer.delta * (*elasticity * ease * params.drag_force * lock);
        if params.drag_elasticity_distance > 0.0 {
            *elasticity = (*elasticity - offset.length() / params.drag_elasticity_distance).max(0.0);
        }
        target.x += offset.x;
        target.y += offset.y;
    }

    // Press
    let r_max = params.press_radius_max;
    if r_max > 0.0 && distance <= r_max {
        let r_min = params.press_radius_min;
        let near = if r_min > 0.0 { saturate(distance / r_min) } else { 1.0 };
        let far = saturate(distance / r_max);
        let curve_min = smootherstep_falloff(near) * lock;
        let curve_max = smootherstep_falloff(far) * lock;

        let floor = rest.z + curve_min * params.press_depth * (r_min / r_max);
        let ceil = rest.z + curve_max * params.press_depth;

        target.z = target.z.max(floor);
        if ceil > target.z {
            target.z = lerp(target.z, ceil, press_rate);
        }
    }
}
