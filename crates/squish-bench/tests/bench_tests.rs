//! Integration tests for squish-bench.

use squish_bench::metrics::BenchmarkMetrics;
use squish_bench::runner::BenchmarkRunner;
use squish_bench::scenarios::{Scenario, ScenarioKind, Stroke};
use squish_input::PointerEvent;
use squish_math::Vec2;
use squish_solver::SlimeConfig;
use squish_types::PointerId;

fn metrics(scenario: &str) -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: scenario.into(),
        total_wall_time: 1.5,
        frames: 100,
        avg_frame_time: 0.015,
        min_frame_time: 0.01,
        max_frame_time: 0.02,
        max_displacement: 0.5,
        max_press: 0.9,
        final_min_elasticity: 0.4,
        final_displacement: 0.01,
        vertex_count: 441,
        triangle_count: 800,
    }
}

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 3);
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
        assert_eq!(Scenario::from_kind(kind).kind, kind);
    }
    assert_eq!(ScenarioKind::from_name("drape"), None);
}

#[test]
fn poke_script() {
    let s = Scenario::poke();
    assert_eq!(
        s.events_at(0),
        vec![PointerEvent::Down { id: PointerId(0), position: Vec2::ZERO }]
    );
    assert!(matches!(s.events_at(45)[0], PointerEvent::Drag { .. }));
    assert_eq!(s.events_at(90), vec![PointerEvent::Up { id: PointerId(0) }]);
    assert!(s.events_at(100).is_empty());
}

#[test]
fn swipe_moves_across() {
    let s = Scenario::swipe();
    match s.events_at(30)[0] {
        PointerEvent::Drag { position, .. } => assert!(position.x.abs() < 1e-6),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn multi_touch_overlaps() {
    let s = Scenario::multi_touch();
    assert_eq!(s.events_at(20).len(), 2);
    assert_eq!(s.events_at(65), vec![PointerEvent::Drag {
        id: PointerId(1),
        position: s.strokes[1].start.lerp(s.strokes[1].end, 55.0 / 60.0),
    }]);
}

#[test]
fn zero_length_stroke_still_lifts() {
    let mut scenario = Scenario::poke();
    scenario.strokes = vec![Stroke {
        id: PointerId(2),
        start: Vec2::ONE,
        end: Vec2::ONE,
        down_frame: 5,
        up_frame: 5,
    }];
    assert_eq!(scenario.strokes[0].release_frame(), 6);
    assert_eq!(
        scenario.events_at(5),
        vec![PointerEvent::Down { id: PointerId(2), position: Vec2::ONE }]
    );
    assert_eq!(scenario.events_at(6), vec![PointerEvent::Up { id: PointerId(2) }]);
    assert!(scenario.events_at(7).is_empty());
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_poke() {
    let mut scenario = Scenario::poke();
    scenario.frames = 10;
    let m = BenchmarkRunner::run(&scenario).unwrap();
    assert_eq!(m.scenario, "poke");
    assert_eq!(m.frames, 10);
    assert!(m.total_wall_time > 0.0);
    assert!(m.max_press > 0.0);
    assert!(m.max_displacement > 0.0);
    assert_eq!(m.final_min_elasticity, 1.0);
}

#[test]
fn run_swipe_drains_elasticity() {
    let mut scenario = Scenario::swipe();
    scenario.frames = 30;
    let m = BenchmarkRunner::run(&scenario).unwrap();
    assert!(m.final_min_elasticity < 1.0);
    assert!(m.max_displacement > 0.0);
}

#[test]
fn run_all_scenarios() {
    for &kind in ScenarioKind::all() {
        let mut scenario = Scenario::from_kind(kind).with_config(SlimeConfig {
            vertex_spacing: 0.4,
            ..Default::default()
        });
        scenario.frames = 3;
        let m = BenchmarkRunner::run(&scenario).unwrap();
        assert_eq!(m.scenario, kind.name());
        assert!(m.total_wall_time >= 0.0);
        assert!(m.min_frame_time <= m.max_frame_time);
    }
}

#[test]
fn invalid_config_is_reported() {
    let scenario = Scenario::poke().with_config(SlimeConfig {
        vertex_spacing: 0.0,
        ..Default::default()
    });
    assert!(BenchmarkRunner::run(&scenario).is_err());
}

// ─── Metrics Tests ────────────────────────────────────────────

#[test]
fn metrics_csv_output() {
    let csv_row = metrics("test").to_csv_row();
    assert!(csv_row.contains("test"));
    assert!(csv_row.contains("441"));
    assert!(csv_row.contains("800"));
}

#[test]
fn metrics_csv_multi() {
    let csv = BenchmarkMetrics::to_csv(&[metrics("a"), metrics("b")]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3); // Header + 2 data rows
    assert!(lines[0].contains("scenario"));
    assert_eq!(
        lines[0].split(',').count(),
        lines[1].split(',').count()
    );
}

#[test]
fn metrics_json_round_trip() {
    let m = metrics("test");
    let json = serde_json::to_string(&m).unwrap();
    let recovered: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, m);
}
