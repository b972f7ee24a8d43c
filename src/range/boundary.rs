//! Boundary points
//!
//! A boundary point names a position inside the tree, analogous to a text
//! cursor location.

use crate::dom::{NodeId, Tree};

/// A position inside the tree: a container node plus an offset within it.
///
/// The offset is a child index when the container is an element or shadow
/// root, and a byte offset into the payload when the container is character
/// data; the interpretation follows the container's kind and is not stored.
/// Offsets are not validated at construction; the named constructors always
/// produce in-bounds points.
///
/// A point names a position at capture time only. Mutating the tree
/// afterwards silently changes what the position means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryPoint {
    /// Node the position lies within
    pub container: NodeId,
    /// Child index, or byte offset for character data
    pub offset: u32,
}

impl BoundaryPoint {
    /// Create a point from raw parts
    #[inline]
    pub const fn new(container: NodeId, offset: u32) -> Self {
        Self { container, offset }
    }

    /// Point in `node`'s parent immediately before `node`; `None` when the
    /// node has no parent
    pub fn before_node(tree: &Tree, node: NodeId) -> Option<Self> {
        let parent = tree.parent(node)?;
        Some(Self::new(parent, tree.index_among_siblings(node)))
    }

    /// Point in `node`'s parent immediately after `node`; `None` when the
    /// node has no parent
    pub fn after_node(tree: &Tree, node: NodeId) -> Option<Self> {
        let parent = tree.parent(node)?;
        Some(Self::new(parent, tree.index_among_siblings(node) + 1))
    }

    /// Point before the first child (or first byte) of `node`
    #[inline]
    pub const fn before_node_contents(node: NodeId) -> Self {
        Self::new(node, 0)
    }

    /// Point after the last child of `node`, or after its last byte for
    /// character data
    pub fn after_node_contents(tree: &Tree, node: NodeId) -> Self {
        let length = if tree.is_character_data(node) {
            tree.data_length(node)
        } else {
            tree.child_count(node)
        };
        Self::new(node, length)
    }
}
