//! Integration tests for squish-mesh.

use squish_math::Vec3;
use squish_mesh::generators::{build_grid, GridDims, GridParams};
use squish_mesh::normals::{compute_triangle_normals, face_normal, recompute_normals};
use squish_mesh::topology::Adjacency;
use squish_mesh::{SurfaceMesh, VertexData};
use squish_types::constants::ADJACENCY_WIDTH;
use squish_types::{SquishError, VertexId};

fn params(width: f32, height: f32, spacing: f32, border: f32) -> GridParams {
    GridParams {
        width,
        height,
        scale: 1.0,
        border,
        spacing,
    }
}

// ─── VertexData Tests ─────────────────────────────────────────

#[test]
fn vertex_layout_is_forty_bytes() {
    assert_eq!(VertexData::STRIDE, 40);
    assert_eq!(std::mem::align_of::<VertexData>(), 4);
}

#[test]
fn vertex_accessors() {
    let mut v = VertexData::new(Vec3::new(1.0, 2.0, 3.0), squish_math::Vec2::new(0.5, 0.25));
    assert_eq!(v.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(v.normal(), Vec3::Z);
    assert_eq!(v.uv(), squish_math::Vec2::new(0.5, 0.25));
    assert_eq!(v.press_amount(), 0.0);
    v.set_press_amount(0.75);
    assert_eq!(v.aux, [0.5, 0.25, 0.75, 0.0]);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn grid_2x2_unit_spacing() {
    let mesh = build_grid(&params(2.0, 2.0, 1.0, 0.0)).unwrap();
    assert_eq!(mesh.dims, GridDims { x_size: 2, y_size: 2 });
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    assert_eq!(mesh.indices.len(), 24);
    assert!(mesh.validate().is_ok());
}

#[test]
fn grid_counts_follow_dimensions() {
    for &(w, h, s, b) in &[(4.0, 3.0, 0.5, 0.0), (10.0, 6.0, 0.19, 0.4), (1.0, 5.0, 0.3, 0.2)] {
        let mesh = build_grid(&params(w, h, s, b)).unwrap();
        let GridDims { x_size, y_size } = mesh.dims;
        assert_eq!(mesh.vertex_count(), (x_size + 1) * (y_size + 1));
        assert_eq!(mesh.triangle_count(), x_size * y_size * 2);
        assert_eq!(mesh.indices.len(), mesh.triangle_count() * 3);
        assert!(mesh.validate().is_ok());
    }
}

#[test]
fn grid_dimensions_use_equilateral_rows() {
    // (2 + 2·0.4) / 0.2 = 14 columns; (2.8 / (√3/2)) / 0.2 ≈ 16.17 rows
    let dims = params(2.0, 2.0, 0.2, 0.4).dimensions().unwrap();
    assert_eq!(dims.x_size, 14);
    assert_eq!(dims.y_size, 16);
}

#[test]
fn grid_dimension_rounding_to_zero_becomes_one() {
    // 0.1 / 1.0 rounds to 0 columns
    let p = params(0.1, 2.0, 1.0, 0.0);
    let dims = p.dimensions().unwrap();
    assert_eq!(dims.x_size, 1);
    let mesh = build_grid(&p).unwrap();
    assert_eq!(mesh.dims.x_size, 1);
    assert_eq!(mesh.vertex_count(), 2 * (dims.y_size + 1));
    assert!(mesh.validate().is_ok());
}

#[test]
fn grid_brick_pattern_offsets_even_rows() {
    let mesh = build_grid(&params(2.0, 2.0, 1.0, 0.0)).unwrap();
    // Row 0 is shifted by half a spacing, row 1 is not.
    assert!((mesh.position(0).x - (-0.5)).abs() < 1e-6);
    assert!((mesh.position(3).x - (-1.0)).abs() < 1e-6);
    let row_height = 3.0f32.sqrt() / 2.0;
    assert!((mesh.position(3).y - (row_height - 1.0)).abs() < 1e-6);
}

#[test]
fn grid_locks_outer_ring_only() {
    let mesh = build_grid(&params(3.0, 3.0, 0.5, 0.0)).unwrap();
    let GridDims { x_size, y_size } = mesh.dims;
    for y in 0..=y_size {
        for x in 0..=x_size {
            let i = y * (x_size + 1) + x;
            let border = x == 0 || x == x_size || y == 0 || y == y_size;
            assert_eq!(mesh.locks[i], if border { 0.0 } else { 1.0 }, "vertex ({x}, {y})");
        }
    }
}

#[test]
fn grid_uv_is_scale_normalized() {
    let mut p = params(2.0, 2.0, 0.5, 0.0);
    p.scale = 2.0;
    let mesh = build_grid(&p).unwrap();
    for v in &mesh.vertices {
        assert!((v.uv().x - v.position[0] / 2.0).abs() < 1e-6);
        assert!((v.uv().y - v.position[1] / 2.0).abs() < 1e-6);
        assert_eq!(v.aux[2], 0.0);
        assert_eq!(v.aux[3], 0.0);
    }
}

#[test]
fn grid_rebuild_is_byte_identical() {
    let p = params(5.0, 3.0, 0.19, 0.4);
    let a = build_grid(&p).unwrap();
    let b = build_grid(&p).unwrap();
    assert_eq!(a.vertex_bytes(), b.vertex_bytes());
    assert_eq!(a.index_bytes(), b.index_bytes());
}

#[test]
fn grid_rejects_non_positive_spacing() {
    let err = build_grid(&params(2.0, 2.0, 0.0, 0.0)).unwrap_err();
    assert!(matches!(err, SquishError::InvalidConfig(_)));
    assert!(build_grid(&params(2.0, 2.0, -1.0, 0.0)).is_err());
}

#[test]
fn grid_rejects_non_positive_scale() {
    let mut p = params(2.0, 2.0, 1.0, 0.0);
    p.scale = 0.0;
    assert!(matches!(p.dimensions(), Err(SquishError::InvalidConfig(_))));
}

#[test]
fn grid_rejects_oversized_request() {
    let err = build_grid(&params(100.0, 1.0, 0.05, 0.0)).unwrap_err();
    assert!(err.to_string().contains("too large"));
}

#[test]
fn local_bounds_divide_by_scale() {
    let mut p = params(4.0, 2.0, 1.0, 0.0);
    p.scale = 2.0;
    assert_eq!(p.local_bounds(), [-1.0, -0.5, 1.0, 0.5]);
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = build_grid(&params(2.0, 2.0, 1.0, 0.0)).unwrap();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_degenerate() {
    let mut mesh = build_grid(&params(2.0, 2.0, 1.0, 0.0)).unwrap();
    mesh.indices[0] = mesh.indices[1];
    assert!(mesh.validate().is_err());
}

#[test]
fn mesh_serialization() {
    let mesh = build_grid(&params(1.0, 1.0, 0.5, 0.0)).unwrap();
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: SurfaceMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.dims, mesh.dims);
    assert_eq!(recovered.indices, mesh.indices);
    assert_eq!(recovered.locks, mesh.locks);
    for (a, b) in recovered.vertices.iter().zip(&mesh.vertices) {
        assert!((a.position() - b.position()).length() < 1e-6);
    }
}

// ─── Adjacency Tests ──────────────────────────────────────────

#[test]
fn adjacency_slots_reference_touching_triangles() {
    let mesh = build_grid(&params(3.0, 3.0, 0.5, 0.0)).unwrap();
    let adj = Adjacency::build(&mesh.indices, mesh.vertex_count()).unwrap();
    assert_eq!(adj.slots().len(), mesh.vertex_count() * ADJACENCY_WIDTH);
    for v in 0..mesh.vertex_count() {
        for &t in adj.triangles_of(VertexId(v as u32)) {
            assert!(mesh.triangle(t as usize).contains(&(v as u32)));
        }
    }
}

#[test]
fn adjacency_interior_vertex_has_six_triangles() {
    let mesh = build_grid(&params(3.0, 3.0, 0.5, 0.0)).unwrap();
    let adj = Adjacency::build(&mesh.indices, mesh.vertex_count()).unwrap();
    let x_size = mesh.dims.x_size;
    let interior = VertexId((2 * (x_size + 1) + 2) as u32);
    assert_eq!(adj.degree(interior), 6);
    let mut tris = adj.triangles_of(interior).to_vec();
    tris.sort_unstable();
    tris.dedup();
    assert_eq!(tris.len(), 6);
}

#[test]
fn adjacency_wraps_for_low_degree_vertices() {
    // Two triangles sharing vertices 1 and 2.
    let indices = [0, 1, 2, 2, 1, 3];
    let adj = Adjacency::build(&indices, 4).unwrap();
    assert_eq!(adj.triangles_of(VertexId(0)), &[0, 0, 0, 0, 0, 0]);
    assert_eq!(adj.triangles_of(VertexId(1)), &[0, 1, 0, 1, 0, 1]);
    assert_eq!(adj.triangles_of(VertexId(3)), &[1, 1, 1, 1, 1, 1]);
    assert_eq!(adj.degree(VertexId(2)), 2);
    let ids: Vec<_> = adj.triangle_ids(VertexId(1)).map(|t| t.index()).collect();
    assert_eq!(ids, vec![0, 1, 0, 1, 0, 1]);
}

#[test]
fn adjacency_rejects_orphan_vertex() {
    let indices = [0, 1, 2];
    assert!(Adjacency::build(&indices, 4).is_err());
}

#[test]
fn adjacency_rejects_oob_index() {
    let indices = [0, 1, 7];
    assert!(Adjacency::build(&indices, 3).is_err());
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn face_normal_degenerate_is_zero() {
    let p = Vec3::new(1.0, 1.0, 0.0);
    assert_eq!(face_normal(p, p, Vec3::ZERO), Vec3::ZERO);
}

#[test]
fn flat_grid_normals_are_unit_and_perpendicular() {
    let mut mesh = build_grid(&params(3.0, 2.0, 0.25, 0.1)).unwrap();
    let adj = Adjacency::build(&mesh.indices, mesh.vertex_count()).unwrap();
    let mut tri_normals = Vec::new();
    recompute_normals(&mut mesh.vertices, &mesh.indices, &adj, &mut tri_normals);

    assert_eq!(tri_normals.len(), mesh.triangle_count());
    let first = tri_normals[0];
    for n in &tri_normals {
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!((n.z.abs() - 1.0).abs() < 1e-4);
        // Consistent winding across the brick pattern
        assert!((*n - first).length() < 1e-4);
    }
    for v in &mesh.vertices {
        assert!((v.normal().length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn deformed_grid_normals_stay_unit() {
    let mut mesh = build_grid(&params(3.0, 3.0, 0.25, 0.0)).unwrap();
    for (i, v) in mesh.vertices.iter_mut().enumerate() {
        let mut p = v.position();
        p.z = ((i as f32) * 0.37).sin() * 0.2;
        v.set_position(p);
    }
    let adj = Adjacency::build(&mesh.indices, mesh.vertex_count()).unwrap();
    let mut tri_normals = vec![Vec3::ZERO; mesh.triangle_count()];
    compute_triangle_normals(&mesh.vertices, &mesh.indices, &mut tri_normals);
    recompute_normals(&mut mesh.vertices, &mesh.indices, &adj, &mut tri_normals);
    for v in &mesh.vertices {
        let len = v.normal().length();
        assert!(len == 0.0 || (len - 1.0).abs() < 1e-4, "normal length {len}");
    }
}

// ─── SurfaceView Tests ────────────────────────────────────────

#[test]
fn surface_view_over_mesh_and_slice() {
    use squish_mesh::SurfaceView;

    let mesh = build_grid(&params(2.0, 2.0, 1.0, 0.0)).unwrap();
    assert_eq!(SurfaceView::vertex_count(&mesh), 9);
    assert_eq!(SurfaceView::position(&mesh, 4), mesh.position(4));

    let slice: &[VertexData] = &mesh.vertices;
    assert_eq!(slice.vertex_count(), 9);
    assert_eq!(slice.normal(0), Vec3::Z);
    assert_eq!(slice.press_amount(0), 0.0);
}
