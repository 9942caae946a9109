//! # Zone Geometry
//!
//! Geometry engine behind zone authoring: a closed ring of ground-plane
//! points plus a height becomes a renderable prism mesh and a containment
//! oracle.
//!
//! ## Architecture
//!
//! ```text
//! BoundaryRing ─ normalize ─→ build ─→ AbstractMesh (walls + cap, bounds)
//!      │
//!      └─ + position ─→ locate ─→ owning zone | none
//! ```
//!
//! ## Algorithms
//!
//! - **Winding**: shoelace signed area on the X/Z plane
//! - **Walls**: one unshared, flat-shaded quad per ring edge
//! - **Cap**: ear clipping with a bounded attempt budget
//! - **Containment**: vertical prefilter, then even-odd ray casting
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec3;
//! use zone_geometry::{build_zone_mesh, locate, BoundaryRing, ZoneSpec};
//!
//! let ring = BoundaryRing::new(vec![
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 1.0),
//!     Vec3::new(0.0, 0.0, 1.0),
//! ]);
//! let zone = ZoneSpec::new(ring, 1.0);
//!
//! let mesh = build_zone_mesh(&zone).unwrap();
//! assert_eq!(mesh.vertex_count(), 20);
//!
//! let zones = [zone];
//! assert!(locate(Vec3::new(0.5, 0.5, 0.5), &zones).is_some());
//! ```

pub mod build;
pub mod containment;
pub mod error;
pub mod mesh;
pub mod ring;
pub mod triangulate;
pub mod zone;

pub use build::{build, build_with_limit, build_zone_mesh};
pub use containment::{contains_xz, locate, zone_contains, ZoneVolume};
pub use error::{GeometryError, GeometryResult};
pub use mesh::{AbstractMesh, BoundingBox, BoundingSphere, MeshVertex};
pub use ring::{normalize, signed_area_xz, BoundaryRing};
pub use triangulate::triangulate;
pub use zone::{MaterialHandle, ZoneSpec};
