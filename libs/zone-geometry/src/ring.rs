//! # Boundary Rings
//!
//! Ordered rings of ground-plane points and their winding normalization.
//!
//! All planar math projects onto X/Z; Y is elevation and is ignored here.
//! After [`normalize`], a ring has non-negative signed area, which is the
//! winding every later stage assumes: wall normals face outward and the cap
//! faces up.

use config::constants::MIN_BOUNDARY_POINTS;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ordered ring of ground-plane points, implicitly closed.
///
/// Consecutive duplicate points are kept as-is.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use zone_geometry::BoundaryRing;
///
/// let mut ring = BoundaryRing::new(vec![
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(0.0, 0.0, 1.0),
///     Vec3::new(1.0, 0.0, 0.0),
/// ]);
/// assert!(ring.signed_area() < 0.0);
/// ring.normalize();
/// assert!(ring.signed_area() > 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRing {
    points: Vec<Vec3>,
}

impl BoundaryRing {
    /// Creates a ring from points in authoring order.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Returns the ring points.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Consumes the ring, returning its points.
    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the ring has enough points to enclose an area.
    #[inline]
    pub fn is_meshable(&self) -> bool {
        self.points.len() >= MIN_BOUNDARY_POINTS
    }

    /// Signed area of the X/Z projection. See [`signed_area_xz`].
    pub fn signed_area(&self) -> f32 {
        signed_area_xz(&self.points)
    }

    /// Reverses the ring in place if its signed area is negative.
    ///
    /// Returns true if the ring was reversed.
    pub fn normalize(&mut self) -> bool {
        normalize(&mut self.points)
    }

    /// Consuming variant of [`BoundaryRing::normalize`].
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

impl From<Vec<Vec3>> for BoundaryRing {
    fn from(points: Vec<Vec3>) -> Self {
        Self::new(points)
    }
}

/// 2D cross product of two X/Z vectors.
#[inline]
pub(crate) fn cross_xz(u: Vec3, v: Vec3) -> f32 {
    u.x * v.z - u.z * v.x
}

/// Signed area of a ring projected onto the X/Z plane.
///
/// Shoelace formula `½ Σ (xᵢ·zᵢ₊₁ − xᵢ₊₁·zᵢ)` with wraparound. Positive for
/// the winding the mesh synthesizer expects.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use zone_geometry::signed_area_xz;
///
/// let square = [
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(2.0, 0.0, 0.0),
///     Vec3::new(2.0, 0.0, 2.0),
///     Vec3::new(0.0, 0.0, 2.0),
/// ];
/// assert_eq!(signed_area_xz(&square), 4.0);
/// ```
pub fn signed_area_xz(points: &[Vec3]) -> f32 {
    let n = points.len();
    let twice_area: f32 = (0..n)
        .map(|i| cross_xz(points[i], points[(i + 1) % n]))
        .sum();
    twice_area * 0.5
}

/// Reverses `points` in place when their signed area is negative.
///
/// Rings with fewer than three points are left untouched. Idempotent.
/// Returns true if the points were reversed.
pub fn normalize(points: &mut [Vec3]) -> bool {
    if points.len() < MIN_BOUNDARY_POINTS {
        return false;
    }
    if signed_area_xz(points) < 0.0 {
        points.reverse();
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clockwise_square() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_signed_area_sign_follows_winding() {
        let mut points = clockwise_square();
        assert_eq!(signed_area_xz(&points), -1.0);
        points.reverse();
        assert_eq!(signed_area_xz(&points), 1.0);
    }

    #[test]
    fn test_signed_area_ignores_elevation() {
        let mut points = clockwise_square();
        points[1].y = 10.0;
        points[3].y = -3.0;
        assert_eq!(signed_area_xz(&points), -1.0);
    }

    #[test]
    fn test_normalize_reverses_negative_ring() {
        let mut points = clockwise_square();
        assert!(normalize(&mut points));
        assert!(signed_area_xz(&points) > 0.0);
        assert_eq!(points[0], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut once = BoundaryRing::new(clockwise_square());
        once.normalize();
        let twice = once.clone().normalized();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_leaves_short_rings_alone() {
        let mut points = vec![Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO];
        assert!(!normalize(&mut points));
        assert_eq!(points[0], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_ring_has_zero_area() {
        assert_eq!(signed_area_xz(&[]), 0.0);
        assert!(!BoundaryRing::default().is_meshable());
    }
}
