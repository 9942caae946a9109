//! # Runtime Errors
//!
//! Everything that can stop a single zone from being rebuilt or queried.
//! The per-frame pass logs these and moves on to the next zone.

use crate::arena::NodeKey;
use crate::backend::UploadError;
use crate::processor::ZoneId;
use thiserror::Error;
use zone_geometry::GeometryError;

/// Errors raised while resolving or rebuilding a zone.
#[derive(Debug, Error)]
pub enum ZoneError {
    /// A boundary entry refers to a node that no longer exists.
    #[error("Boundary node #{index} ({key:?}) no longer exists")]
    MissingNode {
        /// Position of the entry in the zone's boundary list.
        index: usize,
        /// The dangling handle.
        key: NodeKey,
    },

    /// The zone has too few boundary nodes to enclose an area.
    #[error("Insufficient geometry: zone has {count} boundary nodes (min: {min})")]
    InsufficientNodes {
        /// Number of boundary nodes.
        count: usize,
        /// Minimum required.
        min: usize,
    },

    /// No zone is registered under this id.
    #[error("Unknown zone: {0:?}")]
    UnknownZone(ZoneId),

    /// Mesh synthesis rejected the resolved ring.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The render backend could not take the mesh.
    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Result type alias for runtime operations.
pub type ZoneResult<T> = Result<T, ZoneError>;
