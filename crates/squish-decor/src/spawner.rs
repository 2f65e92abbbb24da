//! Decoration spawner: vertex assignment and per-frame placement.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use squish_math::{euler_degrees_to_quat, lerp, look_rotation_safe, saturate, Quat, Vec3};
use squish_mesh::SurfaceView;

use crate::info::{DecorationInfo, DecorationInstance};

/// A vertex chosen for a decoration, with its fixed random rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    vertex: usize,
    rotation: Vec3,
}

/// Places decorations on random distinct vertices of a surface.
///
/// The number of chosen vertices is `round(vertex_count · max fill)`; they
/// are shared between the infos in proportion to each info's fill. The
/// overall [`fill`](Self::fill) then selects how many of the assigned
/// instances are shown, without reassigning vertices.
#[derive(Debug, Clone)]
pub struct DecorationSpawner {
    /// Overall scale of size, normal offset and press offset.
    pub scale: f32,
    /// Share of assigned decorations shown, in `[0, 1]`.
    pub fill: f32,
    /// Decoration kinds. Edits are picked up by the next rebuild check.
    pub infos: Vec<DecorationInfo>,
    seed: u64,
    rng: ChaCha8Rng,
    built_infos: Vec<DecorationInfo>,
    built_vertex_count: usize,
    chosen: usize,
    placements: Vec<Vec<Placement>>,
}

impl DecorationSpawner {
    /// Creates a spawner; the same seed and call sequence give the same
    /// placements.
    pub fn new(infos: Vec<DecorationInfo>, seed: u64) -> Self {
        Self {
            scale: 1.0,
            fill: 1.0,
            infos,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            built_infos: Vec::new(),
            built_vertex_count: 0,
            chosen: 0,
            placements: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of vertices chosen at the last rebuild.
    pub fn chosen_count(&self) -> usize {
        self.chosen
    }

    /// Vertices assigned to info `info`, in placement order.
    pub fn assigned_vertices(&self, info: usize) -> Vec<usize> {
        self.placements
            .get(info)
            .map(|p| p.iter().map(|p| p.vertex).collect())
            .unwrap_or_default()
    }

    /// Reassigns vertices when the infos, the required vertex count or the
    /// surface size changed, or when `force` is set. Returns whether a
    /// rebuild took place.
    pub fn rebuild_if_needed<V: SurfaceView + ?Sized>(&mut self, surface: &V, force: bool) -> bool {
        let vertex_count = surface.vertex_count();
        let highest_fill = self.infos.iter().map(|i| saturate(i.fill)).fold(0.0, f32::max);
        let wanted = ((vertex_count as f32 * highest_fill).round_ties_even() as usize).min(vertex_count);

        let stale = self.built_infos != self.infos
            || wanted != self.chosen
            || vertex_count != self.built_vertex_count;
        if !stale && !force {
            return false;
        }

        self.built_infos = self.infos.clone();
        self.built_vertex_count = vertex_count;
        self.chosen = wanted;

        let vertices = rand::seq::index::sample(&mut self.rng, vertex_count, wanted).into_vec();

        let total_fill: f32 = self.infos.iter().map(|i| saturate(i.fill)).sum();
        let mut remaining = wanted;
        let mut next = 0;
        let mut placements = Vec::with_capacity(self.infos.len());
        for info in &self.infos {
            let share = if total_fill > 0.0 {
                (wanted as f32 * (saturate(info.fill) / total_fill)).round_ties_even() as usize
            } else {
                0
            };
            let take = share.min(remaining);
            remaining = remaining.saturating_sub(share);

            let list: Vec<Placement> = vertices[next..next + take]
                .iter()
                .map(|&vertex| Placement {
                    vertex,
                    rotation: random_rotation(&mut self.rng, info.min_rotation, info.max_rotation),
                })
                .collect();
            next += take;
            placements.push(list);
        }
        self.placements = placements;

        tracing::debug!(
            vertices = vertex_count,
            chosen = wanted,
            infos = self.infos.len(),
            "decorations reassigned"
        );
        true
    }

    /// Rebuilds if needed, then computes the transform of every visible
    /// decoration, grouped by info.
    pub fn update<V: SurfaceView + ?Sized>(&mut self, surface: &V) -> Vec<Vec<DecorationInstance>> {
        self.rebuild_if_needed(surface, false);

        let fill = saturate(self.fill);
        self.built_infos
            .iter()
            .zip(&self.placements)
            .map(|(info, placements)| {
                let visible = (fill * placements.len() as f32).round_ties_even() as usize;
                let normal_offset = info.normal_offset * self.scale;
                let press_offset = info.press_offset * self.scale;
                let size = info.scale * self.scale;

                placements[..visible.min(placements.len())]
                    .iter()
                    .map(|p| {
                        let normal = surface.normal(p.vertex);
                        let press = surface.press_amount(p.vertex);
                        let position = surface.position(p.vertex) - normal * press * press_offset
                            + normal * normal_offset;
                        let rotation = if normal != Vec3::ZERO {
                            look_rotation_safe(normal, Vec3::Y) * euler_degrees_to_quat(p.rotation)
                        } else {
                            Quat::IDENTITY
                        };
                        DecorationInstance {
                            vertex: p.vertex,
                            position,
                            rotation,
                            size,
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

fn random_rotation(rng: &mut ChaCha8Rng, min: Vec3, max: Vec3) -> Vec3 {
    Vec3::new(
        lerp(min.x, max.x, rng.gen::<f32>()),
        lerp(min.y, max.y, rng.gen::<f32>()),
        lerp(min.z, max.z, rng.gen::<f32>()),
    )
}
