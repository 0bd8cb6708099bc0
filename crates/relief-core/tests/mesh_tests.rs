use glam::Vec3;
use relief_core::export::{export_mesh, ExportFormat};
use relief_core::mesh::*;
use relief_core::ExportError;

fn face_normal(m: &MeshData, tri: usize) -> Vec3 {
    let p = |i: usize| Vec3::from_array(m.vertices[m.indices[tri * 3 + i] as usize].position);
    (p(1) - p(0)).cross(p(2) - p(0))
}

#[test]
fn plane_grid_counts() {
    let m = plane(1.0, 1.0, 4, 2);
    assert_eq!(m.vertices.len(), 5 * 3);
    assert_eq!(m.triangle_count(), 4 * 2 * 2);
    assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
}

#[test]
fn plane_uv_origin_is_top_left() {
    let m = plane(2.0, 1.0, 1, 1);
    let first = m.vertices[0];
    assert_eq!(first.uv, [0.0, 0.0]);
    assert_eq!(first.position, [-1.0, 0.5, 0.0]);
    let last = m.vertices[m.vertices.len() - 1];
    assert_eq!(last.uv, [1.0, 1.0]);
    assert_eq!(last.position, [1.0, -0.5, 0.0]);
}

#[test]
fn plane_faces_positive_z() {
    let m = plane(1.0, 1.0, 3, 3);
    for tri in 0..m.triangle_count() {
        assert!(face_normal(&m, tri).z > 0.0);
    }
}

#[test]
fn zero_segments_still_make_a_quad() {
    let m = plane(1.0, 1.0, 0, 0);
    assert_eq!(m.vertices.len(), 4);
    assert_eq!(m.triangle_count(), 2);
}

#[test]
fn cuboid_winding_is_outward() {
    let size = Vec3::new(7.0, 0.5, 14.0);
    let m = cuboid(size);
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.triangle_count(), 12);
    for tri in 0..m.triangle_count() {
        let v = m.vertices[m.indices[tri * 3] as usize];
        let n = Vec3::from_array(v.normal);
        assert!(
            face_normal(&m, tri).dot(n) > 0.0,
            "triangle {tri} faces inward"
        );
    }
    for v in &m.vertices {
        let p = Vec3::from_array(v.position).abs();
        assert!(p.cmple(size * 0.5 + Vec3::splat(1e-5)).all());
    }
}

#[test]
fn export_is_not_available_yet() {
    assert_eq!(
        export_mesh(ExportFormat::Stl).unwrap_err(),
        ExportError::Unimplemented("STL")
    );
    assert_eq!(
        export_mesh(ExportFormat::Obj).unwrap_err().to_string(),
        "OBJ export is not implemented yet"
    );
}
