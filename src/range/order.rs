//! Document-order comparator
//!
//! Computes the relative order of two boundary points by walking
//! composed-tree ancestor chains and counting sibling slots on demand; no
//! ancestor path is materialized up front.
//!
//! Order is reported as `Option<Ordering>`: `None` means the points share no
//! root and are unordered. The predicate combinators treat unordered as
//! false, so every boolean derived from the comparator is well defined for
//! any pair of points.

use std::cmp::Ordering;

use crate::dom::{traversal, NodeId, Tree};
use crate::range::boundary::BoundaryPoint;
use crate::range::simple::SimpleRange;

#[inline]
pub(crate) fn is_lt(order: Option<Ordering>) -> bool {
    matches!(order, Some(Ordering::Less))
}

#[inline]
pub(crate) fn is_gt(order: Option<Ordering>) -> bool {
    matches!(order, Some(Ordering::Greater))
}

#[inline]
pub(crate) fn is_lteq(order: Option<Ordering>) -> bool {
    matches!(order, Some(Ordering::Less | Ordering::Equal))
}

#[inline]
pub(crate) fn is_gteq(order: Option<Ordering>) -> bool {
    matches!(order, Some(Ordering::Greater | Ordering::Equal))
}

/// Decide whether `offset` within `container` falls before the child slot
/// occupied by `child`.
///
/// `child` may be a shadow-tree participant whose plain parent is not
/// `container`; such nodes sort between offset 0 and offset 1 of the host.
fn is_offset_before_child(tree: &Tree, container: NodeId, offset: u32, child: NodeId) -> bool {
    if offset == 0 {
        return true;
    }
    if tree.parent(child) != Some(container) {
        return false;
    }
    let mut current_offset = 0;
    let mut current = tree.first_child(container);
    while let Some(node) = current {
        if node == child {
            break;
        }
        current_offset += 1;
        if offset <= current_offset {
            return true;
        }
        current = tree.next_sibling(node);
    }
    false
}

/// Relative document order of two boundary points.
///
/// Same-container points compare by offset. Otherwise the composed-tree
/// ancestor chain of each container is walked looking for a frame whose
/// composed parent is the other point's container, and the offset is tested
/// against that frame's child slot. When neither container frames the other,
/// the containers themselves are ordered via their composed-tree ancestor
/// chains.
pub fn document_order(tree: &Tree, a: BoundaryPoint, b: BoundaryPoint) -> Option<Ordering> {
    if a.container == b.container {
        return Some(a.offset.cmp(&b.offset));
    }

    let mut ancestor = Some(b.container);
    while let Some(node) = ancestor {
        let next = tree.composed_parent(node);
        if next == Some(a.container) {
            return Some(
                if is_offset_before_child(tree, a.container, a.offset, node) {
                    Ordering::Less
                } else {
                    Ordering::Greater
                },
            );
        }
        ancestor = next;
    }

    let mut ancestor = Some(a.container);
    while let Some(node) = ancestor {
        let next = tree.composed_parent(node);
        if next == Some(b.container) {
            return Some(
                if is_offset_before_child(tree, b.container, b.offset, node) {
                    Ordering::Greater
                } else {
                    Ordering::Less
                },
            );
        }
        ancestor = next;
    }

    traversal::tree_order_in_composed_tree(tree, a.container, b.container)
}

/// Check if `point` lies within `range`, inclusive on both ends
pub fn is_point_in_range(tree: &Tree, range: &SimpleRange, point: BoundaryPoint) -> bool {
    is_lteq(document_order(tree, range.start, point))
        && is_lteq(document_order(tree, point, range.end))
}

/// Order of `range`, treated as the closed span `[start, end]`, relative to
/// `point`: `Greater` when the point is strictly before the span, `Less` when
/// strictly after, `Equal` when inside
pub fn document_order_range_to_point(
    tree: &Tree,
    range: &SimpleRange,
    point: BoundaryPoint,
) -> Option<Ordering> {
    let order = document_order(tree, range.start, point);
    if !is_lt(order) {
        return order;
    }
    let order = document_order(tree, range.end, point);
    if !is_gt(order) {
        return order;
    }
    Some(Ordering::Equal)
}

/// Order of `point` relative to the closed span `[start, end]` of `range`
pub fn document_order_point_to_range(
    tree: &Tree,
    point: BoundaryPoint,
    range: &SimpleRange,
) -> Option<Ordering> {
    let order = document_order(tree, point, range.start);
    if !is_gt(order) {
        return order;
    }
    let order = document_order(tree, point, range.end);
    if !is_lt(order) {
        return order;
    }
    Some(Ordering::Equal)
}
