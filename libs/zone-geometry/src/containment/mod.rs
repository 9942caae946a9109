//! # Containment Queries
//!
//! Answers "which zone, if any, contains this position" from the authoring
//! ring and height alone. Mesh state is never consulted.
//!
//! A zone contains a position when the position's elevation lies within
//! `[min ring Y, max ring Y + height]` and its X/Z projection passes an
//! even-odd ray casting test against the ring. Positions exactly on a ring
//! vertex, or exactly on an axis-aligned edge, count as inside.

use crate::zone::{vertical_span, ZoneSpec};
use config::constants::MIN_BOUNDARY_POINTS;
use glam::Vec3;

/// Anything with a boundary ring and an extrusion height.
pub trait ZoneVolume {
    /// Ground-plane boundary points.
    fn boundary(&self) -> &[Vec3];

    /// Extrusion distance along +Y.
    fn height(&self) -> f32;

    /// Returns true if the volume contains `position`.
    fn contains(&self, position: Vec3) -> bool {
        zone_contains(self.boundary(), self.height(), position)
    }
}

impl ZoneVolume for ZoneSpec {
    fn boundary(&self) -> &[Vec3] {
        self.ring.points()
    }

    fn height(&self) -> f32 {
        self.height
    }
}

/// Returns the first zone containing `position`.
///
/// Zones may overlap; iteration order is the only tie-break, so callers
/// wanting a particular priority must order the zones themselves.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use zone_geometry::{locate, ZoneSpec};
///
/// let square = vec![
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 1.0),
///     Vec3::new(0.0, 0.0, 1.0),
/// ];
/// let zones = [ZoneSpec::new(square, 1.0)];
/// assert!(locate(Vec3::new(0.5, 1.5, 0.5), &zones).is_none());
/// ```
pub fn locate<'a, Z, I>(position: Vec3, zones: I) -> Option<&'a Z>
where
    Z: ZoneVolume + 'a,
    I: IntoIterator<Item = &'a Z>,
{
    zones.into_iter().find(|zone| zone.contains(position))
}

/// Vertical prefilter followed by the ground-plane test.
///
/// Rings with fewer than three points never contain anything.
pub fn zone_contains(ring: &[Vec3], height: f32, position: Vec3) -> bool {
    if ring.len() < MIN_BOUNDARY_POINTS {
        return false;
    }
    match vertical_span(ring, height) {
        Some((min_y, max_y)) if position.y >= min_y && position.y <= max_y => {
            contains_xz(ring, position)
        }
        _ => false,
    }
}

/// Even-odd point-in-polygon test on the X/Z projection.
///
/// Elevation is ignored. Exact hits on a vertex or on an axis-aligned edge
/// return true before the parity test runs.
pub fn contains_xz(ring: &[Vec3], position: Vec3) -> bool {
    let Some(first) = ring.first() else {
        return false;
    };

    let (min, max) = ring
        .iter()
        .fold((*first, *first), |(min, max), &p| (min.min(p), max.max(p)));
    if position.x < min.x || position.x > max.x || position.z < min.z || position.z > max.z {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (pi, pj) = (ring[i], ring[j]);

        if on_boundary(pi, pj, position) {
            return true;
        }

        if (pi.z > position.z) != (pj.z > position.z)
            && position.x < (pj.x - pi.x) * (position.z - pi.z) / (pj.z - pi.z) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Exact vertex hit, or a hit within the span of an axis-aligned edge.
fn on_boundary(pi: Vec3, pj: Vec3, p: Vec3) -> bool {
    let same_xz = |v: Vec3| v.x == p.x && v.z == p.z;
    if same_xz(pi) || same_xz(pj) {
        return true;
    }

    if pi.x == pj.x && p.x == pi.x && p.z >= pi.z.min(pj.z) && p.z <= pi.z.max(pj.z) {
        return true;
    }

    pi.z == pj.z && p.z == pi.z && p.x >= pi.x.min(pj.x) && p.x <= pi.x.max(pj.x)
}
