//! Integration tests for squish-decor.

use std::collections::HashSet;

use squish_decor::{DecorationInfo, DecorationSpawner};
use squish_math::{Quat, Vec2, Vec3};
use squish_mesh::{build_grid, GridParams, SurfaceMesh, SurfaceView};
use squish_solver::{SlimeConfig, SlimeSurface};
use squish_types::PointerId;

fn mesh() -> SurfaceMesh {
    build_grid(&GridParams {
        width: 4.0,
        height: 4.0,
        scale: 1.0,
        border: 0.0,
        spacing: 0.5,
    })
    .unwrap()
}

fn info(name: &str, fill: f32) -> DecorationInfo {
    DecorationInfo {
        name: name.into(),
        fill,
        ..Default::default()
    }
}

// ─── Assignment Tests ─────────────────────────────────────────

#[test]
fn chosen_count_follows_highest_fill() {
    let mesh = mesh();
    let n = mesh.vertex_count();
    let mut spawner = DecorationSpawner::new(vec![info("a", 0.2), info("b", 0.5)], 7);
    assert!(spawner.rebuild_if_needed(&mesh, false));
    assert_eq!(spawner.chosen_count(), (n as f32 * 0.5).round() as usize);
}

#[test]
fn vertices_are_distinct_and_in_range() {
    let mesh = mesh();
    let mut spawner = DecorationSpawner::new(vec![info("a", 0.6), info("b", 0.6)], 1);
    spawner.rebuild_if_needed(&mesh, false);
    let mut seen = HashSet::new();
    for i in 0..2 {
        for v in spawner.assigned_vertices(i) {
            assert!(v < mesh.vertex_count());
            assert!(seen.insert(v), "vertex {v} assigned twice");
        }
    }
}

#[test]
fn split_is_proportional_to_fill() {
    let mesh = mesh();
    let mut spawner = DecorationSpawner::new(vec![info("a", 0.75), info("b", 0.25)], 3);
    spawner.rebuild_if_needed(&mesh, false);
    let chosen = spawner.chosen_count();
    let a = spawner.assigned_vertices(0).len();
    let b = spawner.assigned_vertices(1).len();
    assert_eq!(a, (chosen as f32 * 0.75).round() as usize);
    assert!(a + b <= chosen);
    assert!(b > 0);
}

#[test]
fn no_rebuild_without_changes() {
    let mesh = mesh();
    let mut spawner = DecorationSpawner::new(vec![info("a", 0.3)], 9);
    assert!(spawner.rebuild_if_needed(&mesh, false));
    assert!(!spawner.rebuild_if_needed(&mesh, false));
    assert!(spawner.rebuild_if_needed(&mesh, true));

    spawner.infos[0].normal_offset = 0.2;
    assert!(spawner.rebuild_if_needed(&mesh, false));
}

#[test]
fn same_seed_same_placement() {
    let mesh = mesh();
    let mut a = DecorationSpawner::new(vec![info("a", 0.4)], 42);
    let mut b = DecorationSpawner::new(vec![info("a", 0.4)], 42);
    a.rebuild_if_needed(&mesh, false);
    b.rebuild_if_needed(&mesh, false);
    assert_eq!(a.seed(), 42);
    assert_eq!(a.assigned_vertices(0), b.assigned_vertices(0));
    assert_eq!(a.update(&mesh), b.update(&mesh));
}

#[test]
fn zero_fill_places_nothing() {
    let mesh = mesh();
    let mut spawner = DecorationSpawner::new(vec![info("a", 0.0)], 0);
    let instances = spawner.update(&mesh);
    assert_eq!(instances.len(), 1);
    assert!(instances[0].is_empty());
}

// ─── Update Tests ─────────────────────────────────────────────

#[test]
fn overall_fill_limits_visible_instances() {
    let mesh = mesh();
    let mut spawner = DecorationSpawner::new(vec![info("a", 0.5)], 5);
    let all = spawner.update(&mesh)[0].len();
    spawner.fill = 0.4;
    let shown = spawner.update(&mesh)[0].len();
    assert_eq!(shown, (all as f32 * 0.4).round() as usize);
    assert_eq!(spawner.chosen_count(), all);
}

#[test]
fn instances_follow_vertex_and_normal() {
    let mesh = mesh();
    let mut spawner = DecorationSpawner::new(
        vec![DecorationInfo {
            normal_offset: 0.1,
            scale: 0.5,
            min_rotation: Vec3::ZERO,
            max_rotation: Vec3::ZERO,
            ..info("a", 0.2)
        }],
        11,
    );
    spawner.scale = 2.0;
    for instance in &spawner.update(&mesh)[0] {
        // Generated normals point along +Z
        let expected = mesh.position(instance.vertex) + Vec3::Z * 0.2;
        assert!((instance.position - expected).length() < 1e-6);
        assert_eq!(instance.size, 1.0);
        let forward = instance.rotation * Vec3::Z;
        assert!((forward - Vec3::Z).length() < 1e-5);
    }
}

#[test]
fn pressed_decorations_sink() {
    let mut surface = SlimeSurface::new(SlimeConfig::default(), 4.0, 3.0).unwrap();
    let mut spawner = DecorationSpawner::new(
        vec![DecorationInfo {
            press_offset: 0.5,
            ..info("a", 1.0)
        }],
        2,
    );
    surface.pointer_down(PointerId(0), Vec2::ZERO);
    for _ in 0..30 {
        surface.tick(1.0 / 60.0);
    }
    let instances = spawner.update(&surface);
    assert_eq!(instances[0].len(), surface.vertex_count());
    let pressed = instances[0]
        .iter()
        .find(|d| surface.press_amount(d.vertex) > 0.5)
        .unwrap();
    let v = pressed.vertex;
    let expected =
        surface.position(v) - surface.normal(v) * surface.press_amount(v) * 0.5;
    assert!((pressed.position - expected).length() < 1e-5);
    assert!((pressed.rotation.length() - 1.0).abs() < 1e-4);
}

#[test]
fn zero_normal_gives_identity_rotation() {
    let mut mesh = mesh();
    for v in &mut mesh.vertices {
        v.set_normal(Vec3::ZERO);
    }
    let mut spawner = DecorationSpawner::new(vec![info("a", 0.3)], 4);
    for instance in &spawner.update(&mesh)[0] {
        assert_eq!(instance.rotation, Quat::IDENTITY);
    }
}

#[test]
fn surface_resize_reassigns() {
    let mut surface = SlimeSurface::new(SlimeConfig::default(), 4.0, 3.0).unwrap();
    let mut spawner = DecorationSpawner::new(vec![info("a", 0.25)], 8);
    spawner.update(&surface);
    let before = spawner.chosen_count();
    surface.set_viewport(6.0, 3.0).unwrap();
    let instances = spawner.update(&surface);
    assert!(spawner.chosen_count() > before);
    assert!(instances[0].iter().all(|d| d.vertex < surface.vertex_count()));
}

#[test]
fn info_serialization() {
    let original = DecorationInfo {
        name: "sprinkle".into(),
        fill: 0.3,
        normal_offset: 0.05,
        press_offset: 0.2,
        min_rotation: Vec3::new(-10.0, 0.0, 0.0),
        max_rotation: Vec3::new(10.0, 0.0, 360.0),
        scale: 0.08,
    };
    let json = serde_json::to_string(&original).unwrap();
    let recovered: DecorationInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, original);
}
