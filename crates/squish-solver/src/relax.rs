//! Relaxation and integration.
//!
//! Per vertex: the target drifts back toward rest, elasticity recovers,
//! the live position chases the target and the press amount is published
//! into the auxiliary channel.

use rayon::prelude::*;
use squish_math::{lerp_vec3, saturate, Vec3};
use squish_types::constants::PARALLEL_CHUNK;

use crate::config::RelaxParams;
use crate::state::SimulationState;

/// Runs the relaxation stage over every vertex.
pub fn relax_and_integrate(state: &mut SimulationState, params: &RelaxParams, dt: f32) {
    let regen = params.regenerate_speed.max(0.0);
    let regen_rate = saturate(dt * regen);
    let follow_rate = saturate(dt * params.update_speed);
    let press_depth = params.press_depth;

    let SimulationState {
        vertices,
        targets,
        rest,
        elasticity,
        ..
    } = state;

    vertices
        .par_iter_mut()
        .zip(targets.par_iter_mut())
        .zip(elasticity.par_iter_mut())
        .zip(rest.par_iter())
        .with_min_len(PARALLEL_CHUNK)
        .for_each(|(((vertex, target), elasticity), &rest)| {
            *target = lerp_vec3(*target, rest, regen_rate);
            *elasticity = (*elasticity + dt * regen).min(1.0);

            let position = lerp_vec3(vertex.position(), *target, follow_rate);
            vertex.set_position(position);
            vertex.set_press_amount(press_amount(rest, position, press_depth));
        });
}

/// `saturate(|rest.z − position.z| / press_depth)`, zero for a
/// non-positive depth.
#[inline]
pub fn press_amount(rest: Vec3, position: Vec3, press_depth: f32) -> f32 {
    if press_depth > 0.0 {
        saturate((rest.z - position.z).abs() / press_depth)
    } else {
        0.0
    }
}
