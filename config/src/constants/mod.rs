//! Centralized configuration values shared across the zone geometry pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Minimum number of boundary points required to form a meshable ring.
///
/// # Examples
/// ```
/// use config::constants::MIN_BOUNDARY_POINTS;
/// assert_eq!(MIN_BOUNDARY_POINTS, 3);
/// ```
pub const MIN_BOUNDARY_POINTS: usize = 3;

/// Extrusion height assigned to freshly authored zones.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_BOUNDARY_HEIGHT;
/// assert!(DEFAULT_BOUNDARY_HEIGHT > 0.0);
/// ```
pub const DEFAULT_BOUNDARY_HEIGHT: f32 = 5.0;

/// Number of unshared vertices emitted for each wall quad.
///
/// # Examples
/// ```
/// use config::constants::VERTICES_PER_WALL_QUAD;
/// assert_eq!(VERTICES_PER_WALL_QUAD, 4);
/// ```
pub const VERTICES_PER_WALL_QUAD: usize = 4;

/// Largest vertex count addressable by a 16-bit index buffer.
///
/// # Examples
/// ```
/// use config::constants::MAX_MESH_VERTICES;
/// assert_eq!(MAX_MESH_VERTICES, u16::MAX as usize + 1);
/// ```
pub const MAX_MESH_VERTICES: usize = 65_536;

/// Number of scan attempts the ear clipper may spend on a ring of
/// `point_count` vertices before giving up with a partial triangulation.
///
/// # Examples
/// ```
/// use config::constants::ear_clip_attempt_budget;
/// assert_eq!(ear_clip_attempt_budget(4), 16);
/// ```
pub const fn ear_clip_attempt_budget(point_count: usize) -> usize {
    point_count.saturating_mul(point_count)
}

// =============================================================================
// RENDERING CONSTANTS
// =============================================================================

/// Material slot receiving the zone material.
///
/// # Examples
/// ```
/// use config::constants::ZONE_MATERIAL_SLOT;
/// assert_eq!(ZONE_MATERIAL_SLOT, 0);
/// ```
pub const ZONE_MATERIAL_SLOT: u32 = 0;

/// Whether zones show their debug volume mesh when first authored.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SHOW_DEBUG_MESH;
/// assert!(DEFAULT_SHOW_DEBUG_MESH);
/// ```
pub const DEFAULT_SHOW_DEBUG_MESH: bool = true;

/// Whether zone volume meshes participate in shadow casting.
///
/// # Examples
/// ```
/// use config::constants::ZONE_CASTS_SHADOWS;
/// assert!(!ZONE_CASTS_SHADOWS);
/// ```
pub const ZONE_CASTS_SHADOWS: bool = false;

/// Immutable snapshot of zone settings that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::ZoneConfig;
/// let config = ZoneConfig::default();
/// assert!(config.default_height > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneConfig {
    /// Height given to zones created without an explicit height.
    pub default_height: f32,
    /// Initial debug mesh visibility for new zones.
    pub show_debug_mesh: bool,
    /// Shadow casting flag applied to every zone render proxy.
    pub cast_shadows: bool,
    /// Upper bound on vertices per synthesized mesh.
    pub max_mesh_vertices: usize,
}

impl ZoneConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// height and vertex limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ZoneConfig;
    /// let cfg = ZoneConfig::new(2.5, 1024).expect("valid config");
    /// assert_eq!(cfg.max_mesh_vertices, 1024);
    /// ```
    pub fn new(default_height: f32, max_mesh_vertices: usize) -> Result<Self, ConfigError> {
        if !default_height.is_finite() || default_height < 0.0 {
            return Err(ConfigError::InvalidHeight(default_height));
        }
        let smallest_mesh = MIN_BOUNDARY_POINTS * (VERTICES_PER_WALL_QUAD + 1);
        if max_mesh_vertices < smallest_mesh || max_mesh_vertices > MAX_MESH_VERTICES {
            return Err(ConfigError::InvalidVertexLimit(max_mesh_vertices));
        }
        Ok(Self {
            default_height,
            max_mesh_vertices,
            ..Self::default()
        })
    }
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            default_height: DEFAULT_BOUNDARY_HEIGHT,
            show_debug_mesh: DEFAULT_SHOW_DEBUG_MESH,
            cast_shadows: ZONE_CASTS_SHADOWS,
            max_mesh_vertices: MAX_MESH_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the default height is negative or not finite.
    InvalidHeight(f32),
    /// Raised when the vertex limit cannot hold a triangle prism or exceeds
    /// the 16-bit index range.
    InvalidVertexLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidHeight(value) => {
                write!(f, "default_height must be finite and >= 0: {value}")
            }
            ConfigError::InvalidVertexLimit(value) => {
                write!(
                    f,
                    "max_mesh_vertices must be within [{}, {MAX_MESH_VERTICES}]: {value}",
                    MIN_BOUNDARY_POINTS * (VERTICES_PER_WALL_QUAD + 1)
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
