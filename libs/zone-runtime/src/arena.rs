//! Host-owned boundary node positions keyed by stable handles.
//!
//! A [`NodeKey`] stays valid while its node lives, however often the node
//! moves. Once removed, the key never resolves again, even if the slot is
//! reused, so zones holding it see a missing reference.

use glam::Vec3;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a boundary node.
    pub struct NodeKey;
}

/// Arena of boundary node positions.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: SlotMap<NodeKey, Vec3>,
}

impl NodeArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its handle.
    pub fn insert(&mut self, position: Vec3) -> NodeKey {
        self.nodes.insert(position)
    }

    /// Removes a node, returning its last position.
    pub fn remove(&mut self, key: NodeKey) -> Option<Vec3> {
        self.nodes.remove(key)
    }

    /// Current position of a node.
    #[inline]
    pub fn position(&self, key: NodeKey) -> Option<Vec3> {
        self.nodes.get(key).copied()
    }

    /// Moves a node. Returns false if the node does not exist.
    ///
    /// Moving never touches zone revisions; drift is picked up by each
    /// zone's change tracker.
    pub fn set_position(&mut self, key: NodeKey, position: Vec3) -> bool {
        match self.nodes.get_mut(key) {
            Some(slot) => {
                *slot = position;
                true
            }
            None => false,
        }
    }

    /// Offsets a node by `delta`. Returns false if the node does not exist.
    pub fn translate(&mut self, key: NodeKey, delta: Vec3) -> bool {
        match self.nodes.get_mut(key) {
            Some(slot) => {
                *slot += delta;
                true
            }
            None => false,
        }
    }

    /// Returns true if the node exists.
    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if there are no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates live nodes and their positions.
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, Vec3)> + '_ {
        self.nodes.iter().map(|(key, &pos)| (key, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_move() {
        let mut arena = NodeArena::new();
        let key = arena.insert(Vec3::ZERO);
        assert_eq!(arena.position(key), Some(Vec3::ZERO));

        assert!(arena.set_position(key, Vec3::X));
        assert!(arena.translate(key, Vec3::Z));
        assert_eq!(arena.position(key), Some(Vec3::new(1.0, 0.0, 1.0)));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_removed_key_stays_dead_after_slot_reuse() {
        let mut arena = NodeArena::new();
        let old = arena.insert(Vec3::ZERO);
        assert_eq!(arena.remove(old), Some(Vec3::ZERO));

        let new = arena.insert(Vec3::ONE);
        assert_ne!(old, new);
        assert!(!arena.contains(old));
        assert_eq!(arena.position(old), None);
        assert!(!arena.set_position(old, Vec3::X));
        assert_eq!(arena.position(new), Some(Vec3::ONE));
    }

    #[test]
    fn test_iter_lists_live_nodes() {
        let mut arena = NodeArena::new();
        let a = arena.insert(Vec3::X);
        let b = arena.insert(Vec3::Y);
        arena.remove(a);
        let live: Vec<_> = arena.iter().collect();
        assert_eq!(live, vec![(b, Vec3::Y)]);
        assert!(!arena.is_empty());
    }
}
