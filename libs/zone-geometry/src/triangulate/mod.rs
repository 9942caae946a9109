//! # Ear Clipping
//!
//! Triangulates a simple ring (convex or concave) projected onto the X/Z
//! plane. The ring must already be normalized (non-negative signed area), so
//! a convex corner is a strictly positive turn.
//!
//! The scan runs under a fixed attempt budget of n² steps. Self-intersecting
//! or degenerate rings may exhaust it; the triangles found so far are then
//! returned as-is. A result shorter than `3 * (n - 2)` indices marks such a
//! partial triangulation.

use crate::ring::cross_xz;
use config::constants::{ear_clip_attempt_budget, MIN_BOUNDARY_POINTS};
use glam::Vec3;

/// Triangulates `ring` by ear clipping.
///
/// Returns indices into `ring`, three per triangle, each triangle wound like
/// the ring itself.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use zone_geometry::triangulate;
///
/// let square = [
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 1.0),
///     Vec3::new(0.0, 0.0, 1.0),
/// ];
/// assert_eq!(triangulate(&square).len(), 6);
/// ```
pub fn triangulate(ring: &[Vec3]) -> Vec<usize> {
    let n = ring.len();
    let mut triangles = Vec::with_capacity(expected_index_count(n));
    if n < MIN_BOUNDARY_POINTS {
        return triangles;
    }

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut attempts = ear_clip_attempt_budget(n);
    let mut cursor = 0;

    while remaining.len() > 2 && attempts > 0 {
        attempts -= 1;
        let count = remaining.len();
        let prev = (cursor + count - 1) % count;
        let next = (cursor + 1) % count;

        if is_ear(ring, &remaining, prev, cursor, next) {
            triangles.extend_from_slice(&[remaining[prev], remaining[cursor], remaining[next]]);
            remaining.remove(cursor);
            cursor = 0;
        } else {
            cursor = (cursor + 1) % count;
        }
    }

    triangles
}

/// Number of indices a complete triangulation of `point_count` points has.
#[inline]
pub fn expected_index_count(point_count: usize) -> usize {
    point_count.saturating_sub(2) * 3
}

/// `remaining[curr]` is an ear when its corner is convex and no other
/// remaining vertex lies inside or on the candidate triangle.
fn is_ear(ring: &[Vec3], remaining: &[usize], prev: usize, curr: usize, next: usize) -> bool {
    let a = ring[remaining[prev]];
    let b = ring[remaining[curr]];
    let c = ring[remaining[next]];

    if !is_convex(a, b, c) {
        return false;
    }

    !remaining
        .iter()
        .enumerate()
        .filter(|&(slot, _)| slot != prev && slot != curr && slot != next)
        .any(|(_, &index)| point_in_triangle(ring[index], a, b, c))
}

/// Strictly positive turn at `b`.
#[inline]
fn is_convex(a: Vec3, b: Vec3, c: Vec3) -> bool {
    cross_xz(b - a, c - b) > 0.0
}

/// Same-sign test against all three edges; points on an edge count as inside.
pub(crate) fn point_in_triangle(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> bool {
    let d1 = cross_xz(b - a, p - a);
    let d2 = cross_xz(c - b, p - b);
    let d3 = cross_xz(a - c, p - c);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}
