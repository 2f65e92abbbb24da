//! Integration tests for squish-debug.

use squish_debug::hooks::{tick_with_hooks, InspectionHook, TelemetryHook};
use squish_debug::snapshot::StateSnapshot;
use squish_math::Vec2;
use squish_solver::{SlimeConfig, SlimeSurface};
use squish_telemetry::EventKind;
use squish_types::{PointerId, SquishError};

fn surface() -> SlimeSurface {
    let config = SlimeConfig { vertex_spacing: 0.3, ..Default::default() };
    SlimeSurface::new(config, 3.0, 2.0).unwrap()
}

// ─── Hook Tests ───────────────────────────────────────────────

#[test]
fn telemetry_hook_collects_events() {
    let mut s = surface();
    let mut hooks: Vec<Box<dyn InspectionHook>> = vec![Box::new(TelemetryHook::new())];
    tick_with_hooks(&mut s, 1.0 / 60.0, &mut hooks);
    tick_with_hooks(&mut s, 1.0 / 60.0, &mut hooks);
    assert_eq!(s.frame(), 2);
    assert_eq!(hooks[0].name(), "telemetry_hook");
}

#[test]
fn telemetry_hook_records_frames() {
    let mut s = surface();
    let mut hook = TelemetryHook::new();
    hook.on_frame_begin(s.frame(), s.sim_time());
    let stats = s.tick(1.0 / 60.0);
    hook.on_frame_end(&stats);

    let events = hook.drain_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].frame, 0);
    assert!(matches!(events[1].kind, EventKind::FrameEnd { active_pointers: 0, .. }));
}

#[test]
fn hook_drain_clears() {
    let mut hook = TelemetryHook::new();
    hook.on_frame_begin(0, 0.0);
    let _ = hook.drain_events();
    assert!(hook.drain_events().is_empty());
}

// ─── Snapshot Tests ───────────────────────────────────────────

#[test]
fn snapshot_round_trip() {
    let mut s = surface();
    s.pointer_down(PointerId(0), Vec2::ZERO);
    for _ in 0..5 {
        s.tick(1.0 / 60.0);
    }
    let snap = StateSnapshot::capture(&s);
    let recovered = StateSnapshot::from_bytes(&snap.to_bytes().unwrap()).unwrap();
    assert_eq!(recovered, snap);
    assert_eq!(recovered.frame, 5);
    assert_eq!(recovered.positions.len(), s.vertices().len() * 3);
}

#[test]
fn snapshot_layout_is_interleaved() {
    let s = surface();
    let snap = StateSnapshot::capture(&s);
    let v = s.vertices()[3].position;
    assert_eq!(&snap.positions[9..12], &v);
    assert_eq!(snap.vertex_count, s.dims().vertex_count());
}

#[test]
fn snapshot_summary_reflects_press() {
    let mut s = surface();
    let idle = StateSnapshot::capture(&s).summary();
    assert_eq!(idle.max_press, 0.0);
    assert_eq!(idle.min_elasticity, 1.0);
    assert_eq!(idle.max_target_gap, 0.0);

    s.pointer_down(PointerId(0), Vec2::ZERO);
    s.tick(1.0 / 60.0);
    let pressed = StateSnapshot::capture(&s).summary();
    assert!(pressed.max_press > 0.0);
    assert!(pressed.max_target_gap > 0.0);
}

#[test]
fn snapshot_rejects_garbage() {
    let err = StateSnapshot::from_bytes(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, SquishError::Serialization(_)));
}

#[test]
fn snapshot_rejects_mismatched_buffers() {
    let mut snap = StateSnapshot::capture(&surface());
    snap.press.pop();
    let bytes = snap.to_bytes().unwrap();
    assert!(matches!(
        StateSnapshot::from_bytes(&bytes),
        Err(SquishError::InvariantViolation(_))
    ));
}

#[test]
fn snapshot_file_round_trip() {
    let path = std::env::temp_dir().join("squish_debug_snapshot_test.bin");
    let snap = StateSnapshot::capture(&surface());
    snap.save(&path).unwrap();
    let loaded = StateSnapshot::load(&path).unwrap();
    assert_eq!(loaded, snap);
    let _ = std::fs::remove_file(&path);
}
