//! Intersecting node iterator
//!
//! Lazily enumerates the nodes whose extent intersects a range, in tree
//! order, without materializing the node list. Single-pass, forward-only,
//! and finite; it does not tolerate tree mutation while iterating.

use crate::dom::{traversal, NodeId, Tree};
use crate::range::simple::SimpleRange;

/// Initial-position rule for the iterator.
///
/// A closed set of traversal behaviors dispatched by a single match.
/// `DeprecatedZeroOffset` preserves the historical handling of degenerate
/// zero-offset ranges for legacy callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartBehavior {
    /// Start at the first node whose extent intersects the range
    Standard,
    /// Like `Standard`, but a start boundary at offset 0 of a childless
    /// container falls back to the container itself
    DeprecatedZeroOffset,
}

fn first_intersecting_node(
    tree: &Tree,
    range: &SimpleRange,
    behavior: StartBehavior,
) -> Option<NodeId> {
    let start = range.start;
    if tree.is_character_data(start.container) {
        return Some(start.container);
    }
    if let Some(child) = tree.child_at(start.container, start.offset) {
        return Some(child);
    }
    match behavior {
        StartBehavior::DeprecatedZeroOffset if start.offset == 0 => Some(start.container),
        _ => traversal::next_skipping_subtree(tree, start.container),
    }
}

fn node_past_last_intersecting_node(tree: &Tree, range: &SimpleRange) -> Option<NodeId> {
    let end = range.end;
    if tree.is_character_data(end.container) {
        return traversal::next_skipping_subtree(tree, end.container);
    }
    if let Some(child) = tree.child_at(end.container, end.offset) {
        return Some(child);
    }
    traversal::next_skipping_subtree(tree, end.container)
}

/// Iterator over the nodes intersecting a range, in tree order.
///
/// The past-the-end marker is computed once at construction and only ever
/// compared against, never yielded. Once the iterator reaches the marker (or
/// runs out of tree) it stays at the end.
#[derive(Debug, Clone)]
pub struct IntersectingNodes<'a> {
    tree: &'a Tree,
    node: Option<NodeId>,
    past_last: Option<NodeId>,
}

impl<'a> IntersectingNodes<'a> {
    /// Iterator over the nodes intersecting `range`
    pub fn new(tree: &'a Tree, range: &SimpleRange) -> Self {
        Self::with_start_behavior(tree, range, StartBehavior::Standard)
    }

    /// Iterator with the legacy zero-offset start fallback
    pub fn with_zero_offset_quirk(tree: &'a Tree, range: &SimpleRange) -> Self {
        Self::with_start_behavior(tree, range, StartBehavior::DeprecatedZeroOffset)
    }

    /// Iterator with an explicit start behavior
    pub fn with_start_behavior(
        tree: &'a Tree,
        range: &SimpleRange,
        behavior: StartBehavior,
    ) -> Self {
        let mut iter = IntersectingNodes {
            tree,
            node: first_intersecting_node(tree, range, behavior),
            past_last: node_past_last_intersecting_node(tree, range),
        };
        iter.enforce_end_invariant();
        iter
    }

    /// Node the iterator is positioned at; `None` at the end
    #[inline]
    pub fn current(&self) -> Option<NodeId> {
        self.node
    }

    /// Check if the iterator has passed the last intersecting node
    #[inline]
    pub fn at_end(&self) -> bool {
        self.node.is_none()
    }

    /// Move to the next node in tree order
    pub fn advance(&mut self) {
        debug_assert!(self.node.is_some());
        if let Some(node) = self.node {
            self.node = traversal::next_in_tree_order(self.tree, node);
        }
        self.enforce_end_invariant();
    }

    /// Move past the current node's subtree. When the past-the-end marker is
    /// inside that subtree, every following node is provably outside the
    /// range and the iterator goes straight to the end.
    pub fn advance_skipping_children(&mut self) {
        debug_assert!(self.node.is_some());
        if let Some(node) = self.node {
            self.node = match self.past_last {
                Some(past_last) if traversal::contains(self.tree, node, past_last) => None,
                _ => traversal::next_skipping_subtree(self.tree, node),
            };
        }
        self.enforce_end_invariant();
    }

    fn enforce_end_invariant(&mut self) {
        if self.node == self.past_last || self.node.is_none() {
            self.node = None;
            self.past_last = None;
        }
    }
}

impl Iterator for IntersectingNodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.node?;
        self.advance();
        Some(current)
    }
}
