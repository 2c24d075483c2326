use glam::Vec2;
use std::{
    fmt,
    sync::atomic::{AtomicU32, Ordering},
};

/// A 2-D point in figure space.
pub type Point = Vec2;

/// Identity of one [`crate::tree::Tree`] arena.
///
/// Every tree, including clones and copies, draws a fresh id, so a
/// [`NodeId`] handed out by one tree is never accepted by another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeId(u32);

static NEXT_TREE_ID: AtomicU32 = AtomicU32::new(0);

impl TreeId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identifier for a node in a [`crate::tree::Tree`].
///
/// Pairs the owning tree's [`TreeId`] with the node's index in that
/// tree's arena. Ids stay valid for as long as the tree they came from;
/// once a figure is moved into another or copied, its old ids are
/// rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) tree: TreeId,
    pub(crate) index: usize,
}

impl NodeId {
    /// Position of the node in its tree's arena.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    #[inline]
    pub fn tree(self) -> TreeId {
        self.tree
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@tree{}", self.index, self.tree.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tree_ids_are_distinct() {
        let a = TreeId::fresh();
        let b = TreeId::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn node_id_display_names_index_and_tree() {
        let id = NodeId {
            tree: TreeId(7),
            index: 3,
        };
        assert_eq!(id.to_string(), "3@tree7");
        assert_eq!(id.index(), 3);
        assert_eq!(id.tree(), TreeId(7));
    }
}
