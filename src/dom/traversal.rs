//! Tree-order traversal
//!
//! Free functions over the tree covering the axes the range algebra needs:
//! preorder stepping, subtree skipping, ancestry checks, and node-vs-node
//! ordering in the composed tree.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::node::NodeId;
use super::tree::Tree;

/// Next node in depth-first preorder (document order)
pub fn next_in_tree_order(tree: &Tree, node: NodeId) -> Option<NodeId> {
    if let Some(child) = tree.first_child(node) {
        return Some(child);
    }
    next_skipping_subtree(tree, node)
}

/// Next node in preorder that is not a descendant of `node`
pub fn next_skipping_subtree(tree: &Tree, node: NodeId) -> Option<NodeId> {
    let mut current = Some(node);
    while let Some(n) = current {
        if let Some(sibling) = tree.next_sibling(n) {
            return Some(sibling);
        }
        current = tree.parent(n);
    }
    None
}

/// Inclusive ancestry check in the plain tree
pub fn contains(tree: &Tree, ancestor: NodeId, node: NodeId) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        if n == ancestor {
            return true;
        }
        current = tree.parent(n);
    }
    false
}

/// Deepest node that is an inclusive ancestor of both `a` and `b`, or `None`
/// when they do not share a root
pub fn common_inclusive_ancestor(tree: &Tree, a: NodeId, b: NodeId) -> Option<NodeId> {
    let mut seen = HashSet::new();
    let mut current = Some(a);
    while let Some(n) = current {
        seen.insert(n);
        current = tree.parent(n);
    }
    let mut current = Some(b);
    while let Some(n) = current {
        if seen.contains(&n) {
            return Some(n);
        }
        current = tree.parent(n);
    }
    None
}

/// Inclusive composed-tree ancestor chain, root first
fn inclusive_composed_ancestors(tree: &Tree, node: NodeId) -> Vec<NodeId> {
    let mut chain = vec![node];
    let mut current = tree.composed_parent(node);
    while let Some(n) = current {
        chain.push(n);
        current = tree.composed_parent(n);
    }
    chain.reverse();
    chain
}

/// Order two distinct composed-tree children of the same parent.
///
/// A shadow root is not a plain child of its host; it sorts as if inserted at
/// the start of the host's child list. A host has at most one shadow root, so
/// at most one of the two nodes can be one.
fn composed_sibling_order(tree: &Tree, parent: NodeId, x: NodeId, y: NodeId) -> Ordering {
    let x_in_shadow = tree.parent(x) != Some(parent);
    let y_in_shadow = tree.parent(y) != Some(parent);
    match (x_in_shadow, y_in_shadow) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => tree
            .index_among_siblings(x)
            .cmp(&tree.index_among_siblings(y)),
    }
}

/// Document order of two nodes resolved over their composed-tree ancestor
/// chains. `None` when the nodes do not share a root.
pub fn tree_order_in_composed_tree(tree: &Tree, a: NodeId, b: NodeId) -> Option<Ordering> {
    if a == b {
        return Some(Ordering::Equal);
    }
    let chain_a = inclusive_composed_ancestors(tree, a);
    let chain_b = inclusive_composed_ancestors(tree, b);
    if chain_a.first() != chain_b.first() {
        return None;
    }
    let mut i = 1;
    loop {
        match (chain_a.get(i), chain_b.get(i)) {
            // One chain is a prefix of the other: the ancestor comes first.
            (None, _) => return Some(Ordering::Less),
            (_, None) => return Some(Ordering::Greater),
            (Some(&x), Some(&y)) if x != y => {
                return Some(composed_sibling_order(tree, chain_a[i - 1], x, y));
            }
            _ => i += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> (Tree, NodeId, NodeId, NodeId, NodeId, NodeId) {
        // p[a[x], b, c]
        let mut tree = Tree::new();
        let p = tree.new_element("p");
        let a = tree.new_element("a");
        let x = tree.new_text("x");
        let b = tree.new_element("b");
        let c = tree.new_element("c");
        tree.append_child(p, a).unwrap();
        tree.append_child(a, x).unwrap();
        tree.append_child(p, b).unwrap();
        tree.append_child(p, c).unwrap();
        (tree, p, a, x, b, c)
    }

    #[test]
    fn test_preorder_walk() {
        let (tree, p, a, x, b, c) = sample_tree();
        let mut order = vec![p];
        let mut current = p;
        while let Some(next) = next_in_tree_order(&tree, current) {
            order.push(next);
            current = next;
        }
        assert_eq!(order, vec![p, a, x, b, c]);
    }

    #[test]
    fn test_skipping_subtree() {
        let (tree, p, a, x, b, _c) = sample_tree();
        assert_eq!(next_skipping_subtree(&tree, a), Some(b));
        assert_eq!(next_skipping_subtree(&tree, x), Some(b));
        assert_eq!(next_skipping_subtree(&tree, p), None);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let (tree, p, a, x, b, _c) = sample_tree();
        assert!(contains(&tree, p, x));
        assert!(contains(&tree, a, x));
        assert!(contains(&tree, a, a));
        assert!(!contains(&tree, b, x));
        assert!(!contains(&tree, x, a));
    }

    #[test]
    fn test_common_inclusive_ancestor() {
        let (tree, p, a, x, b, _c) = sample_tree();
        assert_eq!(common_inclusive_ancestor(&tree, x, b), Some(p));
        assert_eq!(common_inclusive_ancestor(&tree, x, a), Some(a));
        assert_eq!(common_inclusive_ancestor(&tree, p, p), Some(p));
    }

    #[test]
    fn test_disconnected_roots() {
        let mut tree = Tree::new();
        let p = tree.new_element("p");
        let q = tree.new_element("q");
        assert_eq!(common_inclusive_ancestor(&tree, p, q), None);
        assert_eq!(tree_order_in_composed_tree(&tree, p, q), None);
    }

    #[test]
    fn test_tree_order_cousins() {
        let (tree, p, a, x, b, c) = sample_tree();
        use std::cmp::Ordering::*;
        assert_eq!(tree_order_in_composed_tree(&tree, x, b), Some(Less));
        assert_eq!(tree_order_in_composed_tree(&tree, c, x), Some(Greater));
        assert_eq!(tree_order_in_composed_tree(&tree, p, x), Some(Less));
        assert_eq!(tree_order_in_composed_tree(&tree, b, a), Some(Greater));
        assert_eq!(tree_order_in_composed_tree(&tree, b, b), Some(Equal));
    }

    #[test]
    fn test_tree_order_shadow_content_first() {
        let mut tree = Tree::new();
        let host = tree.new_element("host");
        let light = tree.new_element("light");
        tree.append_child(host, light).unwrap();
        let shadow = tree.attach_shadow_root(host).unwrap();
        let inner = tree.new_element("inner");
        tree.append_child(shadow, inner).unwrap();

        use std::cmp::Ordering::*;
        assert_eq!(tree_order_in_composed_tree(&tree, inner, light), Some(Less));
        assert_eq!(tree_order_in_composed_tree(&tree, light, inner), Some(Greater));
        assert_eq!(tree_order_in_composed_tree(&tree, host, inner), Some(Less));
    }
}
