//! # Zone Runtime
//!
//! Keeps zone volume meshes in sync with their boundary markers, once per
//! frame, and answers "which zone contains this position".
//!
//! ## Architecture
//!
//! ```text
//! NodeArena (host-owned marker positions)
//!      │
//! Zone (boundary node handles, height, material, revision)
//!      │
//! ZoneProcessor::draw ─ DirtyState ─→ zone_geometry::build ─→ RenderBackend
//! ZoneProcessor::locate ─→ zone_geometry::ZoneVolume::contains
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec3;
//! use zone_runtime::{NodeArena, ZoneProcessor};
//!
//! let mut nodes = NodeArena::new();
//! let mut zones: ZoneProcessor<()> = ZoneProcessor::default();
//!
//! let id = zones.create_zone();
//! let zone = zones.zone_mut(id).unwrap();
//! for (x, z) in [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)] {
//!     zone.push_node(nodes.insert(Vec3::new(x, 0.0, z)));
//! }
//!
//! assert_eq!(zones.locate(&nodes, Vec3::new(1.0, 1.0, 1.0)), Some(id));
//! ```

pub mod arena;
pub mod backend;
pub mod error;
pub mod processor;
pub mod tracker;
pub mod zone;

pub use arena::{NodeArena, NodeKey};
pub use backend::{RenderBackend, RenderProxy, UploadError};
pub use error::{ZoneError, ZoneResult};
pub use processor::{DrawReport, ZoneId, ZoneProcessor, ZoneRenderData};
pub use tracker::DirtyState;
pub use zone::Zone;
