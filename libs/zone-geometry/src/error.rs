//! # Geometry Errors
//!
//! Error types for mesh synthesis. None of these abort a frame: callers log
//! them and skip the affected zone for the current cycle.

use thiserror::Error;

/// Errors that can occur while synthesizing a zone mesh.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// The ring cannot enclose an area.
    #[error("Insufficient geometry: ring has {count} points (min: {min})")]
    InsufficientPoints {
        /// Number of points supplied.
        count: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// The mesh would overflow its 16-bit index buffer.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Number of vertices the mesh would need.
        count: usize,
        /// Largest vertex count allowed.
        max: usize,
    },

    /// The extrusion height is NaN or infinite.
    #[error("Extrusion height must be finite: {0}")]
    NonFiniteHeight(f32),
}

impl GeometryError {
    /// Creates an insufficient points error for a ring of `count` points.
    pub fn insufficient(count: usize) -> Self {
        Self::InsufficientPoints {
            count,
            min: config::constants::MIN_BOUNDARY_POINTS,
        }
    }
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::insufficient(2);
        assert!(err.to_string().contains("2 points"));
        assert!(err.to_string().contains("min: 3"));

        let err = GeometryError::TooManyVertices {
            count: 70_000,
            max: 65_536,
        };
        assert!(err.to_string().contains("70000"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
    }
}
