//! Simple ranges and range algebra
//!
//! A range is an ordered pair of boundary points. Containment, intersection,
//! union, and the node predicates are all derived from the document-order
//! comparator, so they stay mutually consistent for any pair of well-formed
//! ranges over the same tree.

use std::cmp::Ordering;

use crate::dom::{traversal, NodeId, Tree};
use crate::error::RangeError;
use crate::range::boundary::BoundaryPoint;
use crate::range::iter::IntersectingNodes;
use crate::range::order::{document_order, is_gteq, is_lt, is_lteq};

/// An ordered pair of boundary points spanning the content between them.
///
/// A well-formed range has `start` not after `end` in document order. The
/// named constructors guarantee that implicitly; [`new`](SimpleRange::new)
/// does not check it, and the algebra produces well-defined but non-useful
/// results for a reversed pair. [`try_new`](SimpleRange::try_new) validates
/// and fails fast instead.
///
/// Ranges are plain values. Mutating the tree after capture leaves the range
/// naming stale positions; re-capture it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleRange {
    pub start: BoundaryPoint,
    pub end: BoundaryPoint,
}

/// A clamp window into a character-data payload.
///
/// `end` is `u32::MAX` when the window extends to the end of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OffsetRange {
    pub start: u32,
    pub end: u32,
}

fn min_by_document_order(tree: &Tree, a: BoundaryPoint, b: BoundaryPoint) -> BoundaryPoint {
    if is_lt(document_order(tree, b, a)) {
        b
    } else {
        a
    }
}

fn max_by_document_order(tree: &Tree, a: BoundaryPoint, b: BoundaryPoint) -> BoundaryPoint {
    if is_lt(document_order(tree, a, b)) {
        b
    } else {
        a
    }
}

impl SimpleRange {
    /// Create a range from two points without checking their order
    #[inline]
    pub const fn new(start: BoundaryPoint, end: BoundaryPoint) -> Self {
        Self { start, end }
    }

    /// Create a range from two points, rejecting reversed or disconnected
    /// pairs
    pub fn try_new(
        tree: &Tree,
        start: BoundaryPoint,
        end: BoundaryPoint,
    ) -> Result<Self, RangeError> {
        match document_order(tree, start, end) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { start, end }),
            Some(Ordering::Greater) => Err(RangeError::ReversedRange),
            None => Err(RangeError::Disconnected),
        }
    }

    /// Range spanning exactly the child slot occupied by `node`; `None` when
    /// the node has no parent
    pub fn selecting_node(tree: &Tree, node: NodeId) -> Option<Self> {
        let parent = tree.parent(node)?;
        let offset = tree.index_among_siblings(node);
        Some(Self {
            start: BoundaryPoint::new(parent, offset),
            end: BoundaryPoint::new(parent, offset + 1),
        })
    }

    /// Range spanning everything inside `node`: all child slots, or the whole
    /// text span for character data
    pub fn selecting_node_contents(tree: &Tree, node: NodeId) -> Self {
        Self {
            start: BoundaryPoint::before_node_contents(node),
            end: BoundaryPoint::after_node_contents(tree, node),
        }
    }

    /// Check if the range is collapsed to a single point
    #[inline]
    pub fn collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Check if this range contains `other`: both endpoints of `other` lie
    /// within `[start, end]`
    pub fn contains_range(&self, tree: &Tree, other: &SimpleRange) -> bool {
        is_lteq(document_order(tree, self.start, other.start))
            && is_gteq(document_order(tree, self.end, other.end))
    }

    /// Check if this range and `other` overlap, sharing at least a point
    pub fn intersects_range(&self, tree: &Tree, other: &SimpleRange) -> bool {
        is_lteq(document_order(tree, self.start, other.end))
            && is_lteq(document_order(tree, other.start, self.end))
    }

    /// Smallest range containing both `self` and `other`
    pub fn union_range(&self, tree: &Tree, other: &SimpleRange) -> SimpleRange {
        SimpleRange {
            start: min_by_document_order(tree, self.start, other.start),
            end: max_by_document_order(tree, self.end, other.end),
        }
    }

    /// Overlap of `self` and `other`; `None` when they do not intersect
    pub fn intersection(&self, tree: &Tree, other: &SimpleRange) -> Option<SimpleRange> {
        if !self.intersects_range(tree, other) {
            return None;
        }
        Some(SimpleRange {
            start: max_by_document_order(tree, self.start, other.start),
            end: min_by_document_order(tree, self.end, other.end),
        })
    }

    /// Check if the child slot occupied by `node` lies entirely within the
    /// range. A node with no parent occupies no slot and is never contained.
    pub fn contains_node(&self, tree: &Tree, node: NodeId) -> bool {
        SimpleRange::selecting_node(tree, node)
            .is_some_and(|node_range| self.contains_range(tree, &node_range))
    }

    /// Check if any part of `node`'s extent overlaps the range. For a node
    /// with no parent the check falls back to ancestry: such a node
    /// intersects every range rooted inside it.
    pub fn intersects_node(&self, tree: &Tree, node: NodeId) -> bool {
        match SimpleRange::selecting_node(tree, node) {
            None => traversal::contains(tree, node, self.start.container),
            Some(node_range) => {
                is_lt(document_order(tree, node_range.start, self.end))
                    && is_lt(document_order(tree, self.start, node_range.end))
            }
        }
    }

    /// Deepest node containing both endpoints; `None` when the endpoints do
    /// not share a root
    pub fn common_inclusive_ancestor(&self, tree: &Tree) -> Option<NodeId> {
        traversal::common_inclusive_ancestor(tree, self.start.container, self.end.container)
    }

    /// Window of `node`'s character data covered by the range: the start
    /// offset applies only in the start container, the end offset only in the
    /// end container
    pub fn character_data_offset_range(&self, node: NodeId) -> OffsetRange {
        OffsetRange {
            start: if node == self.start.container {
                self.start.offset
            } else {
                0
            },
            end: if node == self.end.container {
                self.end.offset
            } else {
                u32::MAX
            },
        }
    }

    /// Lazily enumerate the nodes whose extent intersects the range, in tree
    /// order
    pub fn intersecting_nodes<'a>(&self, tree: &'a Tree) -> IntersectingNodes<'a> {
        IntersectingNodes::new(tree, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Tree;

    fn sibling_tree() -> (Tree, NodeId, NodeId, NodeId, NodeId) {
        // p[a, b, c]
        let mut tree = Tree::new();
        let p = tree.new_element("p");
        let a = tree.new_element("a");
        let b = tree.new_element("b");
        let c = tree.new_element("c");
        tree.append_child(p, a).unwrap();
        tree.append_child(p, b).unwrap();
        tree.append_child(p, c).unwrap();
        (tree, p, a, b, c)
    }

    #[test]
    fn test_selecting_node() {
        let (tree, p, _a, b, _c) = sibling_tree();
        let range = SimpleRange::selecting_node(&tree, b).unwrap();
        assert_eq!(range.start, BoundaryPoint::new(p, 1));
        assert_eq!(range.end, BoundaryPoint::new(p, 2));
        assert!(!range.collapsed());

        assert_eq!(SimpleRange::selecting_node(&tree, p), None);
    }

    #[test]
    fn test_selecting_node_contents() {
        let (mut tree, p, _a, b, _c) = sibling_tree();
        let contents = SimpleRange::selecting_node_contents(&tree, p);
        assert_eq!(contents.start, BoundaryPoint::new(p, 0));
        assert_eq!(contents.end, BoundaryPoint::new(p, 3));

        let text = tree.new_text("hello");
        tree.append_child(b, text).unwrap();
        let text_span = SimpleRange::selecting_node_contents(&tree, text);
        assert_eq!(text_span.start, BoundaryPoint::new(text, 0));
        assert_eq!(text_span.end, BoundaryPoint::new(text, 5));
    }

    #[test]
    fn test_range_contains_itself() {
        let (tree, _p, _a, b, _c) = sibling_tree();
        let range = SimpleRange::selecting_node(&tree, b).unwrap();
        assert!(range.contains_range(&tree, &range));
        assert!(range.intersects_range(&tree, &range));
    }

    #[test]
    fn test_overlapping_ranges() {
        let (tree, p, _a, _b, _c) = sibling_tree();
        // range1 covers a,b; range2 covers b,c.
        let range1 = SimpleRange::new(BoundaryPoint::new(p, 0), BoundaryPoint::new(p, 2));
        let range2 = SimpleRange::new(BoundaryPoint::new(p, 1), BoundaryPoint::new(p, 3));

        assert!(range1.intersects_range(&tree, &range2));
        assert!(!range1.contains_range(&tree, &range2));

        let overlap = range1.intersection(&tree, &range2).unwrap();
        assert_eq!(overlap.start, BoundaryPoint::new(p, 1));
        assert_eq!(overlap.end, BoundaryPoint::new(p, 2));
        assert!(range1.contains_range(&tree, &overlap));
        assert!(range2.contains_range(&tree, &overlap));

        let merged = range1.union_range(&tree, &range2);
        assert_eq!(merged.start, BoundaryPoint::new(p, 0));
        assert_eq!(merged.end, BoundaryPoint::new(p, 3));
        assert!(merged.contains_range(&tree, &range1));
        assert!(merged.contains_range(&tree, &range2));
    }

    #[test]
    fn test_disjoint_ranges() {
        let (tree, p, a, _b, c) = sibling_tree();
        let first = SimpleRange::selecting_node(&tree, a).unwrap();
        let last = SimpleRange::selecting_node(&tree, c).unwrap();
        assert!(!first.intersects_range(&tree, &last));
        assert_eq!(first.intersection(&tree, &last), None);
        // Adjacent slots still touch at the shared boundary point.
        let second = SimpleRange::new(BoundaryPoint::new(p, 1), BoundaryPoint::new(p, 2));
        assert!(first.intersects_range(&tree, &second));
    }

    #[test]
    fn test_union_across_subtrees() {
        let (mut tree, p, a, _b, c) = sibling_tree();
        let x = tree.new_text("x");
        let y = tree.new_text("y");
        tree.append_child(a, x).unwrap();
        tree.append_child(c, y).unwrap();

        let in_a = SimpleRange::selecting_node_contents(&tree, x);
        let in_c = SimpleRange::selecting_node_contents(&tree, y);
        let merged = in_a.union_range(&tree, &in_c);
        assert_eq!(merged.start, in_a.start);
        assert_eq!(merged.end, in_c.end);
        assert!(merged.contains_range(&tree, &in_a));
        assert!(merged.contains_range(&tree, &in_c));
        assert_eq!(merged.common_inclusive_ancestor(&tree), Some(p));
    }

    #[test]
    fn test_node_predicates() {
        let (mut tree, p, a, b, _c) = sibling_tree();
        let x = tree.new_text("x");
        tree.append_child(a, x).unwrap();

        let covers_ab = SimpleRange::new(BoundaryPoint::new(p, 0), BoundaryPoint::new(p, 2));
        assert!(covers_ab.contains_node(&tree, a));
        assert!(covers_ab.contains_node(&tree, b));
        assert!(covers_ab.intersects_node(&tree, x));
        assert!(!covers_ab.contains_node(&tree, p));

        let collapsed = SimpleRange::new(BoundaryPoint::new(p, 2), BoundaryPoint::new(p, 2));
        assert!(!collapsed.intersects_node(&tree, a));
        assert!(!collapsed.contains_node(&tree, a));

        // The root occupies no child slot but still intersects a range it
        // contains.
        assert!(covers_ab.intersects_node(&tree, p));
    }

    #[test]
    fn test_root_fallback_for_intersects_node() {
        let (mut tree, p, a, _b, _c) = sibling_tree();
        let inside = SimpleRange::selecting_node(&tree, a).unwrap();
        // p has no parent: the ancestry fallback applies.
        assert!(inside.intersects_node(&tree, p));
        assert!(!inside.contains_node(&tree, p));

        // A detached root unrelated to the range intersects nothing.
        let stray = tree.new_element("stray");
        assert!(!inside.intersects_node(&tree, stray));
        assert!(!inside.contains_node(&tree, stray));
    }

    #[test]
    fn test_try_new_validates() {
        let (tree, p, _a, _b, _c) = sibling_tree();
        let start = BoundaryPoint::new(p, 1);
        let end = BoundaryPoint::new(p, 2);
        assert!(SimpleRange::try_new(&tree, start, end).is_ok());
        assert!(SimpleRange::try_new(&tree, start, start).is_ok());
        assert_eq!(
            SimpleRange::try_new(&tree, end, start),
            Err(RangeError::ReversedRange)
        );
    }

    #[test]
    fn test_try_new_rejects_disconnected() {
        let mut tree = Tree::new();
        let p = tree.new_element("p");
        let q = tree.new_element("q");
        assert_eq!(
            SimpleRange::try_new(
                &tree,
                BoundaryPoint::new(p, 0),
                BoundaryPoint::new(q, 0)
            ),
            Err(RangeError::Disconnected)
        );
    }

    #[test]
    fn test_character_data_offset_range() {
        let (mut tree, _p, a, b, _c) = sibling_tree();
        let x = tree.new_text("hello");
        let y = tree.new_text("world");
        tree.append_child(a, x).unwrap();
        tree.append_child(b, y).unwrap();

        let range = SimpleRange::new(BoundaryPoint::new(x, 2), BoundaryPoint::new(y, 3));
        assert_eq!(
            range.character_data_offset_range(x),
            OffsetRange { start: 2, end: u32::MAX }
        );
        assert_eq!(
            range.character_data_offset_range(y),
            OffsetRange { start: 0, end: 3 }
        );
        assert_eq!(
            range.character_data_offset_range(a),
            OffsetRange { start: 0, end: u32::MAX }
        );
    }
}
