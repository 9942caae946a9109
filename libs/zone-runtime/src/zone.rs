//! # Zone Authoring Record
//!
//! What a designer edits: an ordered list of boundary node handles, a
//! height, an optional material and debug mesh visibility.
//!
//! Every mutation bumps a monotonic revision. The processor compares it with
//! the revision its current mesh was built from, so structural edits are
//! never missed. Node movement is not a mutation of the zone; see
//! [`crate::DirtyState`].

use crate::arena::{NodeArena, NodeKey};
use crate::error::{ZoneError, ZoneResult};
use config::constants::{ZoneConfig, MIN_BOUNDARY_POINTS};
use glam::Vec3;
use zone_geometry::{BoundaryRing, MaterialHandle, ZoneSpec};

/// Authored zone volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    boundary: Vec<NodeKey>,
    height: f32,
    material: Option<MaterialHandle>,
    show_debug_mesh: bool,
    revision: u64,
}

impl Default for Zone {
    fn default() -> Self {
        Self::with_config(&ZoneConfig::default())
    }
}

impl Zone {
    /// Creates an empty zone with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty zone using the defaults in `config`.
    pub fn with_config(config: &ZoneConfig) -> Self {
        Self {
            boundary: Vec::new(),
            height: config.default_height,
            material: None,
            show_debug_mesh: config.show_debug_mesh,
            revision: 0,
        }
    }

    /// Creates a zone bounded by `nodes`, in order.
    pub fn from_nodes(nodes: impl IntoIterator<Item = NodeKey>) -> Self {
        Self {
            boundary: nodes.into_iter().collect(),
            ..Self::default()
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Boundary node handles in authoring order.
    #[inline]
    pub fn boundary(&self) -> &[NodeKey] {
        &self.boundary
    }

    /// Extrusion height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Material for slot 0, if any.
    #[inline]
    pub fn material(&self) -> Option<MaterialHandle> {
        self.material
    }

    /// Whether the volume mesh should be shown.
    #[inline]
    pub fn show_debug_mesh(&self) -> bool {
        self.show_debug_mesh
    }

    /// Revision counter, bumped by every mutation.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Forces a rebuild on the next frame.
    pub fn mark_dirty(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Sets the extrusion height.
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        self.mark_dirty();
    }

    /// Sets or clears the material.
    pub fn set_material(&mut self, material: Option<MaterialHandle>) {
        self.material = material;
        self.mark_dirty();
    }

    /// Shows or hides the volume mesh.
    pub fn set_show_debug_mesh(&mut self, show: bool) {
        self.show_debug_mesh = show;
        self.mark_dirty();
    }

    /// Replaces the whole boundary list.
    pub fn set_boundary(&mut self, nodes: Vec<NodeKey>) {
        self.boundary = nodes;
        self.mark_dirty();
    }

    /// Appends a node to the boundary.
    pub fn push_node(&mut self, node: NodeKey) {
        self.boundary.push(node);
        self.mark_dirty();
    }

    /// Inserts a node at `index`. Returns false if `index` is out of range.
    pub fn insert_node(&mut self, index: usize, node: NodeKey) -> bool {
        if index > self.boundary.len() {
            return false;
        }
        self.boundary.insert(index, node);
        self.mark_dirty();
        true
    }

    /// Removes the node at `index`.
    pub fn remove_node(&mut self, index: usize) -> Option<NodeKey> {
        if index >= self.boundary.len() {
            return None;
        }
        let node = self.boundary.remove(index);
        self.mark_dirty();
        Some(node)
    }

    /// Swaps the node at `index` for another, returning the old handle.
    pub fn replace_node(&mut self, index: usize, node: NodeKey) -> Option<NodeKey> {
        let slot = self.boundary.get_mut(index)?;
        let old = std::mem::replace(slot, node);
        self.mark_dirty();
        Some(old)
    }

    /// Removes every boundary node.
    pub fn clear_boundary(&mut self) {
        self.boundary.clear();
        self.mark_dirty();
    }

    // =========================================================================
    // RESOLUTION
    // =========================================================================

    /// Current position of every boundary node, keyed by handle.
    ///
    /// # Errors
    ///
    /// Fails when there are fewer than three nodes or when a handle no
    /// longer resolves.
    pub fn resolve(&self, nodes: &NodeArena) -> ZoneResult<Vec<(NodeKey, Vec3)>> {
        if self.boundary.len() < MIN_BOUNDARY_POINTS {
            return Err(ZoneError::InsufficientNodes {
                count: self.boundary.len(),
                min: MIN_BOUNDARY_POINTS,
            });
        }
        self.boundary
            .iter()
            .enumerate()
            .map(|(index, &key)| {
                nodes
                    .position(key)
                    .map(|pos| (key, pos))
                    .ok_or(ZoneError::MissingNode { index, key })
            })
            .collect()
    }

    /// Read-only geometry snapshot for this frame.
    pub fn snapshot(&self, nodes: &NodeArena) -> ZoneResult<ZoneSpec> {
        let resolved = self.resolve(nodes)?;
        Ok(self.spec_from(&resolved))
    }

    pub(crate) fn spec_from(&self, resolved: &[(NodeKey, Vec3)]) -> ZoneSpec {
        ZoneSpec {
            ring: BoundaryRing::new(resolved.iter().map(|&(_, pos)| pos).collect()),
            height: self.height,
            material: self.material,
        }
    }
}
