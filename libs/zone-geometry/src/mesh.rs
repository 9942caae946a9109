//! # Abstract Mesh
//!
//! Renderer-agnostic output of the mesh synthesizer: interleaved
//! position/normal vertices, 16-bit triangle indices and bounding volumes.
//!
//! The vertex layout is `#[repr(C)]` and `Pod`, so an upload collaborator can
//! hand [`AbstractMesh::vertex_bytes`] and [`AbstractMesh::index_bytes`]
//! straight to a GPU buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// VERTEX
// =============================================================================

/// A mesh vertex with position and normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct MeshVertex {
    /// Position in world units.
    pub position: [f32; 3],
    /// Unit normal, or zero for degenerate faces.
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// Creates a vertex from glam vectors.
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    /// Returns the position as a vector.
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Returns the normal as a vector.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

// =============================================================================
// BOUNDING VOLUMES
// =============================================================================

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` when empty.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half of the box size along each axis.
    #[inline]
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Returns true if the point lies inside or on the box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Bounding sphere centred on the centroid of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    /// Centroid of the points.
    pub center: Vec3,
    /// Largest distance from the centroid to any point.
    pub radius: f32,
}

impl BoundingSphere {
    /// Sphere around the centroid of `points`, or `None` when empty.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let center = points.iter().copied().sum::<Vec3>() / points.len() as f32;
        let radius_sq = points
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(0.0_f32, f32::max);
        Some(Self {
            center,
            radius: radius_sq.sqrt(),
        })
    }

    /// Returns true if the point lies inside or on the sphere.
    pub fn contains(&self, point: Vec3) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }
}

// =============================================================================
// MESH
// =============================================================================

/// Immutable triangle mesh produced by one rebuild.
///
/// Vertices are never shared between wall quads or between walls and cap,
/// so every face keeps its own normal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbstractMesh {
    vertices: Vec<MeshVertex>,
    indices: Vec<u16>,
    bounding_box: BoundingBox,
    bounding_sphere: BoundingSphere,
}

impl AbstractMesh {
    pub(crate) fn from_parts(
        vertices: Vec<MeshVertex>,
        indices: Vec<u16>,
        bounding_box: BoundingBox,
        bounding_sphere: BoundingSphere,
    ) -> Self {
        Self {
            vertices,
            indices,
            bounding_box,
            bounding_sphere,
        }
    }

    /// Returns the vertices.
    #[inline]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Returns the triangle index list (3 per triangle).
    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Returns the triangle at `index` as three vertex indices.
    pub fn triangle(&self, index: usize) -> Option<[u16; 3]> {
        let start = index.checked_mul(3)?;
        let tri = self.indices.get(start..start + 3)?;
        Some([tri[0], tri[1], tri[2]])
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Axis-aligned bounds of every emitted vertex.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Bounding sphere of the prism corners.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere
    }

    /// Raw vertex buffer contents.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw 16-bit index buffer contents.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_from_points() {
        let bbox = BoundingBox::from_points(&[
            Vec3::new(1.0, -1.0, 2.0),
            Vec3::new(-3.0, 4.0, 0.5),
        ])
        .unwrap();
        assert_eq!(bbox.min, Vec3::new(-3.0, -1.0, 0.5));
        assert_eq!(bbox.max, Vec3::new(1.0, 4.0, 2.0));
        assert!(bbox.contains(Vec3::new(0.0, 0.0, 1.0)));
        assert!(!bbox.contains(Vec3::new(0.0, 5.0, 1.0)));
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounding_sphere_centered_on_centroid() {
        let sphere = BoundingSphere::from_points(&[
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(sphere.center, Vec3::ZERO);
        assert_eq!(sphere.radius, 1.0);
        assert!(sphere.contains(Vec3::new(0.0, 1.0, 0.0)));
        assert!(BoundingSphere::from_points(&[]).is_none());
    }

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
        let v = MeshVertex::new(Vec3::X, Vec3::Y);
        assert_eq!(v.position(), Vec3::X);
        assert_eq!(v.normal(), Vec3::Y);
    }

    #[test]
    fn test_byte_views_match_counts() {
        let bbox = BoundingBox::from_points(&[Vec3::ZERO]).unwrap();
        let sphere = BoundingSphere::from_points(&[Vec3::ZERO]).unwrap();
        let mesh = AbstractMesh::from_parts(
            vec![MeshVertex::new(Vec3::ZERO, Vec3::Y); 3],
            vec![0, 1, 2],
            bbox,
            sphere,
        );
        assert_eq!(mesh.vertex_bytes().len(), 3 * 24);
        assert_eq!(mesh.index_bytes().len(), 3 * 2);
        assert_eq!(mesh.triangle(0), Some([0, 1, 2]));
        assert_eq!(mesh.triangle(1), None);
        assert_eq!(mesh.triangles().count(), 1);
    }
}
