//! Zone specifications: the read-only snapshot the engine consumes.

use crate::ring::BoundaryRing;
use serde::{Deserialize, Serialize};

/// Opaque reference to a material owned by the rendering layer.
///
/// The geometry engine never looks inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialHandle(pub u64);

/// A boundary ring extruded upward by `height`, plus an optional material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpec {
    /// Ground-plane boundary in authoring order.
    pub ring: BoundaryRing,
    /// Extrusion distance along +Y.
    pub height: f32,
    /// Material applied to the volume mesh, if any.
    pub material: Option<MaterialHandle>,
}

impl ZoneSpec {
    /// Creates a zone without a material.
    pub fn new(ring: impl Into<BoundaryRing>, height: f32) -> Self {
        Self {
            ring: ring.into(),
            height,
            material: None,
        }
    }

    /// Sets the material.
    #[must_use]
    pub fn with_material(mut self, material: MaterialHandle) -> Self {
        self.material = Some(material);
        self
    }

    /// Lowest and highest elevation covered by the volume.
    ///
    /// Returns `None` for an empty ring.
    pub fn vertical_span(&self) -> Option<(f32, f32)> {
        vertical_span(self.ring.points(), self.height)
    }
}

/// `[min ring Y, max ring Y + height]` for a ring, or `None` when empty.
pub(crate) fn vertical_span(points: &[glam::Vec3], height: f32) -> Option<(f32, f32)> {
    let first = points.first()?;
    let (min_y, max_y) = points
        .iter()
        .fold((first.y, first.y), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
    Some((min_y, max_y + height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_vertical_span_uses_lowest_and_highest_points() {
        let zone = ZoneSpec::new(
            vec![
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, -2.0, 0.0),
                Vec3::new(1.0, 3.0, 1.0),
            ],
            2.0,
        );
        assert_eq!(zone.vertical_span(), Some((-2.0, 5.0)));
    }

    #[test]
    fn test_vertical_span_empty_ring() {
        let zone = ZoneSpec::new(Vec::new(), 2.0);
        assert_eq!(zone.vertical_span(), None);
    }

    #[test]
    fn test_with_material() {
        let zone = ZoneSpec::new(Vec::new(), 1.0).with_material(MaterialHandle(7));
        assert_eq!(zone.material, Some(MaterialHandle(7)));
    }
}
