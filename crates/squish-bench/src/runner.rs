//! Benchmark runner: drives a surface through a scenario and collects metrics.

use std::time::Instant;

use squish_solver::SlimeSurface;
use squish_types::SquishResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario on a fresh surface.
    ///
    /// Returns metrics for the completed run.
    pub fn run(scenario: &Scenario) -> SquishResult<BenchmarkMetrics> {
        let mut surface =
            SlimeSurface::new(scenario.config.clone(), scenario.width, scenario.height)?;
        Self::run_on(scenario, &mut surface)
    }

    /// Run a scenario on an existing surface.
    pub fn run_on(scenario: &Scenario, surface: &mut SlimeSurface) -> SquishResult<BenchmarkMetrics> {
        let mut frame_times: Vec<f64> = Vec::with_capacity(scenario.frames as usize);
        let mut max_displacement = 0.0f32;
        let mut max_press = 0.0f32;

        let total_start = Instant::now();

        for frame in 0..scenario.frames {
            for event in scenario.events_at(frame) {
                surface.handle_event(event);
            }
            let stats = surface.tick(scenario.dt);
            frame_times.push(stats.wall_time);

            let state = surface.state();
            max_displacement = max_displacement.max(state.max_displacement());
            max_press = max_press.max(state.max_press());
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let avg_frame = if frame_times.is_empty() {
            0.0
        } else {
            frame_times.iter().sum::<f64>() / frame_times.len() as f64
        };
        let min_frame = frame_times.iter().copied().fold(f64::MAX, f64::min);
        let max_frame = frame_times.iter().copied().fold(0.0, f64::max);

        let dims = surface.dims();
        tracing::info!(
            scenario = scenario.kind.name(),
            frames = scenario.frames,
            total_wall_time,
            "benchmark finished"
        );

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            total_wall_time,
            frames: scenario.frames,
            avg_frame_time: avg_frame,
            min_frame_time: if frame_times.is_empty() { 0.0 } else { min_frame },
            max_frame_time: max_frame,
            max_displacement,
            max_press,
            final_min_elasticity: surface.state().min_elasticity(),
            final_displacement: surface.state().max_displacement(),
            vertex_count: dims.vertex_count(),
            triangle_count: dims.triangle_count(),
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> SquishResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
