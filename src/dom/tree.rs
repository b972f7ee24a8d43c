//! Tree - arena-based node tree
//!
//! Storage layout follows the arena pattern:
//! - Nodes live in a single `Vec`, addressed by `NodeId` indices
//! - Parent/child/sibling links are ids, so every hop is bounds-checked
//! - Shadow roots hang off their host element and are reached only through
//!   the composed-parent query
//!
//! The range algebra in [`crate::range`] never mutates the tree; the mutation
//! methods here exist so callers can build and rearrange trees between range
//! operations. A boundary point captured before a mutation names a stale
//! position afterwards, which is the caller's problem by contract.

use smol_str::SmolStr;
use tracing::trace;

use super::node::{Node, NodeId, NodeKind};
use super::traversal;
use crate::error::TreeError;

/// An arena-allocated node tree.
///
/// Freshly created nodes are detached roots until attached with
/// [`append_child`](Tree::append_child) or
/// [`insert_before`](Tree::insert_before). Nodes are never deallocated, so a
/// `NodeId` minted by this tree stays valid for the tree's lifetime.
#[derive(Debug, Default)]
pub struct Tree {
    /// Arena of nodes
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Tree {
            nodes: Vec::with_capacity(256),
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    /// Create a detached element node
    pub fn new_element(&mut self, name: &str) -> NodeId {
        self.push(Node::element(SmolStr::new(name)))
    }

    /// Create a detached text node
    pub fn new_text(&mut self, data: &str) -> NodeId {
        self.push(Node::text(SmolStr::new(data)))
    }

    /// Create a detached comment node
    pub fn new_comment(&mut self, data: &str) -> NodeId {
        self.push(Node::comment(SmolStr::new(data)))
    }

    /// Get a node by id
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// Total number of nodes ever created in this tree
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Parent in the plain tree (shadow roots have none)
    #[inline]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.parent)
    }

    /// Parent in the composed tree: a shadow root resolves to its host,
    /// every other node to its plain parent
    #[inline]
    pub fn composed_parent(&self, node: NodeId) -> Option<NodeId> {
        let n = self.get(node)?;
        match n.kind {
            NodeKind::ShadowRoot => n.host,
            _ => n.parent,
        }
    }

    /// First child
    #[inline]
    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.first_child)
    }

    /// Last child
    #[inline]
    pub fn last_child(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.last_child)
    }

    /// Next sibling
    #[inline]
    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.next_sibling)
    }

    /// Previous sibling
    #[inline]
    pub fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.prev_sibling)
    }

    /// Shadow root hosted by this element, if any
    #[inline]
    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.get(host).and_then(|n| n.shadow_root)
    }

    /// Host element of this shadow root, if it is one
    #[inline]
    pub fn host(&self, shadow: NodeId) -> Option<NodeId> {
        self.get(shadow).and_then(|n| n.host)
    }

    /// Index of this node among its parent's children (0 when detached)
    pub fn index_among_siblings(&self, node: NodeId) -> u32 {
        let mut index = 0;
        let mut current = self.prev_sibling(node);
        while let Some(sibling) = current {
            index += 1;
            current = self.prev_sibling(sibling);
        }
        index
    }

    /// Child of `container` at `offset`, if one exists
    pub fn child_at(&self, container: NodeId, offset: u32) -> Option<NodeId> {
        let mut child = self.first_child(container);
        for _ in 0..offset {
            child = self.next_sibling(child?);
        }
        child
    }

    /// Number of children of `node`
    pub fn child_count(&self, node: NodeId) -> u32 {
        self.children(node).count() as u32
    }

    /// Check if `node` holds character data
    #[inline]
    pub fn is_character_data(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(Node::is_character_data)
    }

    /// Byte length of a character-data payload (0 for other kinds)
    #[inline]
    pub fn data_length(&self, node: NodeId) -> u32 {
        self.get(node)
            .filter(|n| n.is_character_data())
            .map_or(0, |n| n.data.len() as u32)
    }

    /// Kind of the node, if the id is valid
    #[inline]
    pub fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.get(node).map(Node::kind)
    }

    /// Iterate over the children of a node
    pub fn children(&self, node: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.first_child(node),
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    fn check_insertion(&self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let parent_node = self.get(parent).ok_or(TreeError::UnknownNode)?;
        let child_node = self.get(child).ok_or(TreeError::UnknownNode)?;
        if parent_node.is_character_data() {
            return Err(TreeError::NotAContainer);
        }
        if child_node.parent.is_some() || child_node.kind == NodeKind::ShadowRoot {
            return Err(TreeError::AlreadyAttached);
        }
        // A detached child roots its own subtree; the parent must not be in it.
        if traversal::contains(self, child, parent) {
            return Err(TreeError::WouldCreateCycle);
        }
        Ok(())
    }

    /// Append a detached node as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.check_insertion(parent, child)?;

        let previous_last = self.nodes[parent as usize].last_child;
        match previous_last {
            Some(last) => {
                self.nodes[last as usize].next_sibling = Some(child);
                self.nodes[child as usize].prev_sibling = Some(last);
            }
            None => self.nodes[parent as usize].first_child = Some(child),
        }
        self.nodes[parent as usize].last_child = Some(child);
        self.nodes[child as usize].parent = Some(parent);

        trace!(parent, child, "appended child");
        Ok(())
    }

    /// Insert a detached node before `reference`, which must be a child of
    /// `parent`
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: NodeId,
    ) -> Result<(), TreeError> {
        self.check_insertion(parent, child)?;
        if self.parent(reference) != Some(parent) {
            return Err(TreeError::NotAChild);
        }

        let before = self.nodes[reference as usize].prev_sibling;
        match before {
            Some(prev) => self.nodes[prev as usize].next_sibling = Some(child),
            None => self.nodes[parent as usize].first_child = Some(child),
        }
        self.nodes[child as usize].prev_sibling = before;
        self.nodes[child as usize].next_sibling = Some(reference);
        self.nodes[reference as usize].prev_sibling = Some(child);
        self.nodes[child as usize].parent = Some(parent);

        trace!(parent, child, reference, "inserted child");
        Ok(())
    }

    /// Unlink a node from its parent; the node becomes the root of its own
    /// subtree. Detaching a root is a no-op.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        let prev = self.nodes[node as usize].prev_sibling;
        let next = self.nodes[node as usize].next_sibling;

        match prev {
            Some(p) => self.nodes[p as usize].next_sibling = next,
            None => self.nodes[parent as usize].first_child = next,
        }
        match next {
            Some(n) => self.nodes[n as usize].prev_sibling = prev,
            None => self.nodes[parent as usize].last_child = prev,
        }
        let n = &mut self.nodes[node as usize];
        n.parent = None;
        n.prev_sibling = None;
        n.next_sibling = None;

        trace!(parent, node, "detached node");
    }

    /// Attach a shadow root to an element that does not host one yet
    pub fn attach_shadow_root(&mut self, host: NodeId) -> Result<NodeId, TreeError> {
        let host_node = self.get(host).ok_or(TreeError::UnknownNode)?;
        if !host_node.is_element() {
            return Err(TreeError::NotAnElement);
        }
        if host_node.shadow_root.is_some() {
            return Err(TreeError::ShadowRootAlreadyAttached);
        }
        let shadow = self.push(Node::shadow_root(host));
        self.nodes[host as usize].shadow_root = Some(shadow);

        trace!(host, shadow, "attached shadow root");
        Ok(shadow)
    }
}

/// Iterator over child nodes
pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}
