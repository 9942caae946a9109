//! # Change Tracker
//!
//! Decides once per frame whether a zone needs a new mesh.
//!
//! Two signals force a rebuild:
//!
//! 1. The zone's revision differs from the one the current mesh was built
//!    from (any authoring edit).
//! 2. A boundary node has moved since the last build, or was never seen.
//!
//! The position check stops at the first mismatch and records that node's
//! new position. After a successful build, [`DirtyState::mark_clean`]
//! replaces the whole cache with the positions that went into the mesh.

use crate::arena::NodeKey;
use glam::Vec3;
use slotmap::SecondaryMap;

/// Per-zone rebuild bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct DirtyState {
    built_revision: Option<u64>,
    positions: SecondaryMap<NodeKey, Vec3>,
}

impl DirtyState {
    /// Creates a tracker that reports dirty on first check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a zone at `revision` with these boundary nodes must
    /// be rebuilt.
    pub fn needs_rebuild(&mut self, revision: u64, nodes: &[(NodeKey, Vec3)]) -> bool {
        if self.built_revision != Some(revision) {
            log::trace!(
                "zone revision {revision} differs from built {:?}",
                self.built_revision
            );
            return true;
        }

        for &(key, pos) in nodes {
            match self.positions.get(key) {
                Some(&cached) if cached == pos => {}
                previous => {
                    log::trace!("boundary node {key:?} moved from {previous:?} to {pos}");
                    self.positions.insert(key, pos);
                    return true;
                }
            }
        }
        false
    }

    /// Records that a mesh was built from exactly these nodes at `revision`.
    pub fn mark_clean(&mut self, revision: u64, nodes: &[(NodeKey, Vec3)]) {
        self.built_revision = Some(revision);
        self.positions.clear();
        for &(key, pos) in nodes {
            self.positions.insert(key, pos);
        }
    }

    /// Forces the next check to report dirty.
    pub fn invalidate(&mut self) {
        self.built_revision = None;
    }

    /// Last position recorded for `key`.
    #[inline]
    pub fn cached_position(&self, key: NodeKey) -> Option<Vec3> {
        self.positions.get(key).copied()
    }

    /// Revision the current mesh was built from.
    #[inline]
    pub fn built_revision(&self) -> Option<u64> {
        self.built_revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::NodeArena;

    fn square(arena: &mut NodeArena) -> Vec<NodeKey> {
        [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
            .into_iter()
            .map(|(x, z)| arena.insert(Vec3::new(x, 0.0, z)))
            .collect()
    }

    fn resolve(arena: &NodeArena, keys: &[NodeKey]) -> Vec<(NodeKey, Vec3)> {
        keys.iter()
            .map(|&k| (k, arena.position(k).unwrap()))
            .collect()
    }

    #[test]
    fn test_fresh_state_is_dirty() {
        let mut arena = NodeArena::new();
        let keys = square(&mut arena);
        let mut state = DirtyState::new();
        assert!(state.needs_rebuild(0, &resolve(&arena, &keys)));
    }

    #[test]
    fn test_clean_after_rebuild_with_unchanged_points() {
        let mut arena = NodeArena::new();
        let keys = square(&mut arena);
        let nodes = resolve(&arena, &keys);
        let mut state = DirtyState::new();

        state.mark_clean(3, &nodes);
        assert!(!state.needs_rebuild(3, &nodes));
        assert!(!state.needs_rebuild(3, &nodes));
    }

    #[test]
    fn test_single_moved_point_is_dirty() {
        let mut arena = NodeArena::new();
        let keys = square(&mut arena);
        let mut state = DirtyState::new();
        state.mark_clean(0, &resolve(&arena, &keys));

        arena.translate(keys[2], Vec3::new(0.0, 0.0, 0.5));
        assert!(state.needs_rebuild(0, &resolve(&arena, &keys)));
    }

    #[test]
    fn test_revision_change_is_dirty_without_movement() {
        let mut arena = NodeArena::new();
        let keys = square(&mut arena);
        let nodes = resolve(&arena, &keys);
        let mut state = DirtyState::new();
        state.mark_clean(0, &nodes);

        assert!(state.needs_rebuild(1, &nodes));
    }

    #[test]
    fn test_unseen_point_is_dirty() {
        let mut arena = NodeArena::new();
        let mut keys = square(&mut arena);
        let mut state = DirtyState::new();
        state.mark_clean(0, &resolve(&arena, &keys));

        keys.push(arena.insert(Vec3::new(0.5, 0.0, 2.0)));
        assert!(state.needs_rebuild(0, &resolve(&arena, &keys)));
    }

    #[test]
    fn test_mismatch_updates_only_first_discrepancy() {
        let mut arena = NodeArena::new();
        let keys = square(&mut arena);
        let mut state = DirtyState::new();
        state.mark_clean(0, &resolve(&arena, &keys));

        arena.translate(keys[1], Vec3::X);
        arena.translate(keys[3], Vec3::X);
        let moved = resolve(&arena, &keys);

        assert!(state.needs_rebuild(0, &moved));
        assert_eq!(state.cached_position(keys[1]), Some(Vec3::new(2.0, 0.0, 0.0)));
        assert_eq!(state.cached_position(keys[3]), Some(Vec3::new(0.0, 0.0, 1.0)));

        // Second check catches the remaining node, third finds nothing.
        assert!(state.needs_rebuild(0, &moved));
        assert!(!state.needs_rebuild(0, &moved));
    }

    #[test]
    fn test_mark_clean_drops_stale_entries() {
        let mut arena = NodeArena::new();
        let keys = square(&mut arena);
        let mut state = DirtyState::new();
        state.mark_clean(0, &resolve(&arena, &keys));

        state.mark_clean(1, &resolve(&arena, &keys[..3]));
        assert_eq!(state.cached_position(keys[3]), None);
        assert_eq!(state.built_revision(), Some(1));
    }

    #[test]
    fn test_invalidate_forces_rebuild() {
        let mut arena = NodeArena::new();
        let keys = square(&mut arena);
        let nodes = resolve(&arena, &keys);
        let mut state = DirtyState::new();
        state.mark_clean(0, &nodes);

        state.invalidate();
        assert!(state.needs_rebuild(0, &nodes));
    }
}
