//! CLI command implementations.

use squish_bench::metrics::BenchmarkMetrics;
use squish_bench::runner::BenchmarkRunner;
use squish_bench::scenarios::{Scenario, ScenarioKind};
use squish_debug::hooks::{tick_with_hooks, InspectionHook, TelemetryHook};
use squish_debug::snapshot::StateSnapshot;
use squish_decor::{DecorationInfo, DecorationSpawner};
use squish_mesh::GridParams;
use squish_render::renderer::{HeadlessRenderer, RenderFrame, Renderer};
use squish_render::JsonFrameExporter;
use squish_solver::{SlimeConfig, SlimeSurface};
use squish_telemetry::{EventBus, TracingSink};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Options of the `simulate` command.
pub struct SimulateArgs<'a> {
    pub config: Option<&'a str>,
    pub scenario: &'a str,
    pub frames: Option<u32>,
    pub export: Option<&'a str>,
    pub snapshot: Option<&'a str>,
    pub decorations: Option<f32>,
}

fn scenario_kind(name: &str) -> Result<ScenarioKind, Box<dyn std::error::Error>> {
    ScenarioKind::from_name(name).ok_or_else(|| {
        let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
        format!("Unknown scenario: '{name}'. Available: {}", available.join(", ")).into()
    })
}

/// Run a scripted scenario.
pub fn simulate(args: SimulateArgs<'_>) -> CommandResult {
    println!("Squish Simulation");
    println!("─────────────────");

    let config = match args.config {
        Some(path) => {
            println!("Config:    {path}");
            SlimeConfig::load(path)?
        }
        None => SlimeConfig::default(),
    };

    let mut scenario = Scenario::from_kind(scenario_kind(args.scenario)?).with_config(config);
    if let Some(frames) = args.frames {
        scenario.frames = frames;
    }

    let mut surface =
        SlimeSurface::new(scenario.config.clone(), scenario.width, scenario.height)?;
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::DEBUG)));
    surface.attach_event_bus(bus);

    let dims = surface.dims();
    println!("Scenario:  {}", scenario.kind.name());
    println!("Grid:      {}x{} ({} verts, {} tris)", dims.x_size, dims.y_size, dims.vertex_count(), dims.triangle_count());
    println!("Frames:    {}", scenario.frames);
    println!();

    let mut renderer: Box<dyn Renderer> = match args.export {
        Some(path) => Box::new(JsonFrameExporter::new(path)),
        None => Box::new(HeadlessRenderer::new()),
    };
    renderer.upload_topology(surface.vertices(), surface.indices())?;

    let mut spawner = args.decorations.map(|fill| {
        DecorationSpawner::new(
            vec![DecorationInfo {
                name: "sprinkle".into(),
                fill,
                ..Default::default()
            }],
            0,
        )
    });

    let mut hooks: Vec<Box<dyn InspectionHook>> = vec![Box::new(TelemetryHook::new())];
    let mut max_press = 0.0f32;
    let mut decorations_shown = 0;

    for frame in 0..scenario.frames {
        for event in scenario.events_at(frame) {
            surface.handle_event(event);
        }
        tick_with_hooks(&mut surface, scenario.dt, &mut hooks);
        renderer.submit_frame(&RenderFrame::new(surface.frame(), surface.vertices()))?;
        max_press = max_press.max(surface.state().max_press());

        if let Some(spawner) = spawner.as_mut() {
            decorations_shown = spawner.update(&surface).iter().map(Vec::len).sum();
        }
    }
    for hook in hooks.iter_mut() {
        hook.on_simulation_end();
    }
    renderer.finalize()?;
    if let Some(mut bus) = surface.take_event_bus() {
        bus.finalize();
    }

    println!("Sim time:       {:.3}s", surface.sim_time());
    println!("Max press:      {:.4}", max_press);
    println!("Displacement:   {:.4}", surface.state().max_displacement());
    println!("Min elasticity: {:.4}", surface.state().min_elasticity());
    if spawner.is_some() {
        println!("Decorations:    {decorations_shown}");
    }

    if let Some(path) = args.export {
        println!("Frames written to: {path}");
    }
    if let Some(path) = args.snapshot {
        StateSnapshot::capture(&surface).save(path)?;
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>) -> CommandResult {
    println!("Squish Benchmark Suite");
    println!("══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        vec![scenario_kind(scenario_name)?]
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({} pointers, {} frames)",
            kind.name(),
            scenario.strokes.len(),
            scenario.frames,
        );

        let metrics =
            BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Grid:          {} verts, {} tris", metrics.vertex_count, metrics.triangle_count);
        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg frame:     {:.3}ms", metrics.avg_frame_time * 1000.0);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!("  Max press:     {:.4}", metrics.max_press);
        println!();

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &str) -> CommandResult {
    println!("Squish Snapshot Inspector");
    println!("─────────────────────────");
    println!();

    let snapshot =
        StateSnapshot::load(path).map_err(|e| format!("Failed to read snapshot: {e}"))?;
    let summary = snapshot.summary();

    println!("Frame:          {}", snapshot.frame);
    println!("Sim time:       {:.4}s", snapshot.sim_time);
    println!("Grid:           {}x{}", snapshot.x_size, snapshot.y_size);
    println!("Vertices:       {}", snapshot.vertex_count);
    println!("Max press:      {:.4}", summary.max_press);
    println!("Min elasticity: {:.4}", summary.min_elasticity);
    println!("Target gap:     {:.4}", summary.max_target_gap);

    Ok(())
}

/// Validate a config.
pub fn validate(path: &str, width: f32, height: f32) -> CommandResult {
    println!("Squish Validator");
    println!("────────────────");
    println!();

    if !path.ends_with(".toml") {
        return Err("Unsupported file format. Use .toml (config).".into());
    }

    println!("Validating config: {path}");
    let config = SlimeConfig::load(path)?;
    let params = GridParams {
        width,
        height,
        scale: config.scale,
        border: config.border,
        spacing: config.vertex_spacing,
    };
    let dims = params.dimensions()?;
    println!(
        "✅ Config is valid ({}x{} grid, {} verts for a {width}x{height} viewport).",
        dims.x_size,
        dims.y_size,
        dims.vertex_count()
    );

    Ok(())
}
