//! # Geometry Engine Properties
//!
//! End-to-end checks across normalization, synthesis and containment on a
//! family of convex and concave rings.

use approx::assert_abs_diff_eq;
use glam::Vec3;
use zone_geometry::{
    build, build_zone_mesh, locate, signed_area_xz, triangulate, BoundaryRing, ZoneSpec,
    ZoneVolume,
};

fn regular_polygon(sides: usize, radius: f32) -> Vec<Vec3> {
    (0..sides)
        .map(|i| {
            let a = i as f32 * std::f32::consts::TAU / sides as f32;
            Vec3::new(radius * a.cos(), 0.0, radius * a.sin())
        })
        .collect()
}

/// Star with alternating outer/inner radii: every other corner is reflex.
fn star(points: usize, outer: f32, inner: f32) -> Vec<Vec3> {
    (0..points * 2)
        .map(|i| {
            let a = i as f32 * std::f32::consts::PI / points as f32;
            let r = if i % 2 == 0 { outer } else { inner };
            Vec3::new(r * a.cos(), 0.0, r * a.sin())
        })
        .collect()
}

fn rings() -> Vec<Vec<Vec3>> {
    vec![
        regular_polygon(3, 1.0),
        regular_polygon(4, 2.0),
        regular_polygon(12, 5.0),
        star(5, 4.0, 1.5),
        star(7, 3.0, 2.0),
    ]
}

fn cap_area(ring: &[Vec3]) -> f32 {
    triangulate(ring)
        .chunks(3)
        .map(|t| {
            let (a, b, c) = (ring[t[0]], ring[t[1]], ring[t[2]]);
            ((b.x - a.x) * (c.z - a.z) - (b.z - a.z) * (c.x - a.x)) * 0.5
        })
        .sum()
}

#[test]
fn normalized_rings_have_non_negative_area_in_both_windings() {
    for mut points in rings() {
        for _ in 0..2 {
            let ring = BoundaryRing::new(points.clone()).normalized();
            assert!(ring.signed_area() >= 0.0);
            assert_eq!(ring.clone().normalized(), ring);
            points.reverse();
        }
    }
}

#[test]
fn cap_triangulation_covers_ring_area() {
    for points in rings() {
        let ring = BoundaryRing::new(points).normalized();
        let indices = triangulate(ring.points());
        assert_eq!(indices.len(), (ring.len() - 2) * 3);
        assert_abs_diff_eq!(
            cap_area(ring.points()),
            signed_area_xz(ring.points()),
            epsilon = 1e-3
        );
    }
}

#[test]
fn cap_triangles_stay_inside_concave_star() {
    let ring = BoundaryRing::new(star(5, 4.0, 1.5)).normalized();
    let zone = ZoneSpec::new(ring.clone(), 1.0);
    let points = ring.points();
    for t in triangulate(points).chunks(3) {
        let centroid = (points[t[0]] + points[t[1]] + points[t[2]]) / 3.0;
        assert!(zone.contains(centroid), "centroid {centroid:?} escapes the star");
    }
}

#[test]
fn mesh_counts_scale_with_ring_size() {
    for points in rings() {
        let n = points.len();
        let mesh = build_zone_mesh(&ZoneSpec::new(points, 2.0)).unwrap();
        assert_eq!(mesh.vertex_count(), n * 5);
        assert_eq!(mesh.triangle_count(), n * 2 + (n - 2));
        assert!(mesh.indices().iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }
}

#[test]
fn mesh_bounds_enclose_every_vertex() {
    for points in rings() {
        let mesh = build_zone_mesh(&ZoneSpec::new(points, 3.0)).unwrap();
        let bbox = mesh.bounding_box();
        let sphere = mesh.bounding_sphere();
        for v in mesh.vertices() {
            assert!(bbox.contains(v.position()));
            assert!(v.position().distance(sphere.center) <= sphere.radius + 1e-4);
        }
        assert_abs_diff_eq!(bbox.max.y - bbox.min.y, 3.0, epsilon = 1e-6);
    }
}

#[test]
fn unit_square_zone_end_to_end() {
    let square = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    let mesh = build(&square, 1.0).unwrap();
    assert_eq!(mesh.vertex_count(), 20);
    assert_eq!(mesh.bounding_box().min, Vec3::ZERO);
    assert_eq!(mesh.bounding_box().max, Vec3::ONE);

    let zones = [ZoneSpec::new(square, 1.0)];
    assert!(locate(Vec3::new(0.5, 0.5, 0.5), &zones).is_some());
    assert!(locate(Vec3::new(0.5, 1.5, 0.5), &zones).is_none());
    assert!(locate(Vec3::new(0.0, 0.0, 0.0), &zones).is_some());
}

#[test]
fn identical_input_rebuilds_identically() {
    for points in rings() {
        let zone = ZoneSpec::new(points, 1.5);
        let a = build_zone_mesh(&zone).unwrap();
        let b = build_zone_mesh(&zone).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.vertex_bytes(), b.vertex_bytes());
    }
}
