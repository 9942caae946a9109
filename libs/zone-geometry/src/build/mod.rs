//! # Prism Mesh Synthesis
//!
//! Extrudes a normalized boundary ring upward into a flat-shaded prism:
//! vertical walls plus a flat top cap. There is no bottom cap.
//!
//! ## Vertex Layout
//!
//! ```text
//! [ wall quad 0 | wall quad 1 | ... | wall quad n-1 | cap 0 .. cap n-1 ]
//!   b0 b1 t0 t1   b1 b2 t1 t2                          t0 .. tn-1
//! ```
//!
//! Each wall quad owns 4 vertices sharing that face's normal; the cap owns
//! one vertex per ring point with normal +Y. Nothing is shared, so
//! `vertex_count == 5 * n`.

use crate::error::{GeometryError, GeometryResult};
use crate::mesh::{AbstractMesh, BoundingBox, BoundingSphere, MeshVertex};
use crate::triangulate::{expected_index_count, triangulate};
use crate::zone::ZoneSpec;
use config::constants::{MAX_MESH_VERTICES, MIN_BOUNDARY_POINTS, VERTICES_PER_WALL_QUAD};
use glam::Vec3;

/// Normalizes a copy of the zone's ring and builds its mesh.
///
/// The zone itself is left in authoring order.
pub fn build_zone_mesh(zone: &ZoneSpec) -> GeometryResult<AbstractMesh> {
    let ring = zone.ring.clone().normalized();
    build(ring.points(), zone.height)
}

/// Builds the prism mesh for a normalized ring.
///
/// # Arguments
///
/// * `ring` - Boundary points, already normalized (see [`crate::normalize`])
/// * `height` - Extrusion distance along +Y
///
/// # Errors
///
/// Fails when the ring has fewer than three points, when `height` is not
/// finite, or when the mesh would not fit 16-bit indices.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use zone_geometry::build;
///
/// let square = [
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 1.0),
///     Vec3::new(0.0, 0.0, 1.0),
/// ];
/// let mesh = build(&square, 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 16 + 4);
/// assert_eq!(mesh.bounding_box().max, Vec3::ONE);
/// ```
pub fn build(ring: &[Vec3], height: f32) -> GeometryResult<AbstractMesh> {
    build_with_limit(ring, height, MAX_MESH_VERTICES)
}

/// [`build`] with a caller-chosen vertex limit, capped at the 16-bit range.
pub fn build_with_limit(
    ring: &[Vec3],
    height: f32,
    max_vertices: usize,
) -> GeometryResult<AbstractMesh> {
    let n = ring.len();
    if n < MIN_BOUNDARY_POINTS {
        return Err(GeometryError::insufficient(n));
    }
    if !height.is_finite() {
        return Err(GeometryError::NonFiniteHeight(height));
    }

    let max = max_vertices.min(MAX_MESH_VERTICES);
    let count = n * (VERTICES_PER_WALL_QUAD + 1);
    if count > max {
        return Err(GeometryError::TooManyVertices { count, max });
    }

    let lift = Vec3::new(0.0, height, 0.0);
    let bottom = ring;
    let top: Vec<Vec3> = ring.iter().map(|&p| p + lift).collect();

    let mut vertices = Vec::with_capacity(count);
    let mut indices = Vec::with_capacity(n * 6 + expected_index_count(n));

    // Side walls
    for i in 0..n {
        let next = (i + 1) % n;
        let (b0, b1) = (bottom[i], bottom[next]);
        let (t0, t1) = (top[i], top[next]);

        let normal = (t0 - b0).cross(b1 - b0).normalize_or_zero();

        let v0 = push_vertex(&mut vertices, b0, normal);
        let v1 = push_vertex(&mut vertices, b1, normal);
        let v2 = push_vertex(&mut vertices, t0, normal);
        let v3 = push_vertex(&mut vertices, t1, normal);

        indices.extend_from_slice(&[v0, v1, v2]);
        indices.extend_from_slice(&[v1, v3, v2]);
    }

    // Top cap
    let cap_start = vertices.len();
    for &t in &top {
        push_vertex(&mut vertices, t, Vec3::Y);
    }

    let cap = triangulate(&top);
    if cap.len() < expected_index_count(n) {
        log::warn!(
            "partial cap triangulation: {} of {} triangles for a {}-point ring",
            cap.len() / 3,
            n - 2,
            n
        );
    }
    indices.extend(cap.iter().map(|&i| (cap_start + i) as u16));

    let mut corners = Vec::with_capacity(n * 2);
    corners.extend_from_slice(bottom);
    corners.extend_from_slice(&top);
    let (Some(bounding_box), Some(bounding_sphere)) = (
        BoundingBox::from_points(&corners),
        BoundingSphere::from_points(&corners),
    ) else {
        return Err(GeometryError::insufficient(n));
    };

    log::trace!(
        "built zone mesh: {} vertices, {} triangles",
        vertices.len(),
        indices.len() / 3
    );

    Ok(AbstractMesh::from_parts(
        vertices,
        indices,
        bounding_box,
        bounding_sphere,
    ))
}

/// Appends a vertex and returns its 16-bit index.
///
/// The caller has already checked the vertex count against the index range.
fn push_vertex(vertices: &mut Vec<MeshVertex>, position: Vec3, normal: Vec3) -> u16 {
    let index = vertices.len() as u16;
    vertices.push(MeshVertex::new(position, normal));
    index
}
