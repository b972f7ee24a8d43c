//! Node representation
//!
//! Uses NodeId (u32) for compact, cache-friendly node references.

use smol_str::SmolStr;

/// Compact node identifier (index into the tree arena)
pub type NodeId = u32;

/// Type of tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Element node (container)
    Element,
    /// Text content
    Text,
    /// Comment
    Comment,
    /// Shadow root attached to a host element
    ShadowRoot,
}

impl NodeKind {
    /// Character-data kinds carry a text payload instead of children
    #[inline]
    pub fn is_character_data(self) -> bool {
        matches!(self, NodeKind::Text | NodeKind::Comment)
    }
}

/// A node in the tree arena.
///
/// Sibling and parent links are maintained by [`Tree`](super::Tree) mutation
/// methods; navigation goes through the tree so every hop stays
/// bounds-checked.
#[derive(Debug, Clone)]
pub struct Node {
    /// Type of this node
    pub(crate) kind: NodeKind,
    /// Parent node (None for a root; shadow roots never have one)
    pub(crate) parent: Option<NodeId>,
    /// First child node
    pub(crate) first_child: Option<NodeId>,
    /// Last child node
    pub(crate) last_child: Option<NodeId>,
    /// Previous sibling
    pub(crate) prev_sibling: Option<NodeId>,
    /// Next sibling
    pub(crate) next_sibling: Option<NodeId>,
    /// Tag name (elements only)
    pub(crate) name: SmolStr,
    /// Text payload (character-data nodes only)
    pub(crate) data: SmolStr,
    /// Shadow root attached to this element
    pub(crate) shadow_root: Option<NodeId>,
    /// Host element when this node is a shadow root
    pub(crate) host: Option<NodeId>,
}

impl Node {
    fn detached(kind: NodeKind) -> Self {
        Node {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name: SmolStr::default(),
            data: SmolStr::default(),
            shadow_root: None,
            host: None,
        }
    }

    /// Create a new element node
    pub(crate) fn element(name: SmolStr) -> Self {
        Node {
            name,
            ..Self::detached(NodeKind::Element)
        }
    }

    /// Create a new text node
    pub(crate) fn text(data: SmolStr) -> Self {
        Node {
            data,
            ..Self::detached(NodeKind::Text)
        }
    }

    /// Create a new comment node
    pub(crate) fn comment(data: SmolStr) -> Self {
        Node {
            data,
            ..Self::detached(NodeKind::Comment)
        }
    }

    /// Create a new shadow root for `host`
    pub(crate) fn shadow_root(host: NodeId) -> Self {
        Node {
            host: Some(host),
            ..Self::detached(NodeKind::ShadowRoot)
        }
    }

    /// Type of this node
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Tag name (empty for non-elements)
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text payload (empty for non-character-data nodes)
    #[inline]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Check if this node carries character data
    #[inline]
    pub fn is_character_data(&self) -> bool {
        self.kind.is_character_data()
    }

    /// Check if this node has children
    #[inline]
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_node() {
        let elem = Node::element("div".into());
        assert_eq!(elem.kind(), NodeKind::Element);
        assert_eq!(elem.name(), "div");
        assert!(elem.parent.is_none());
        assert!(!elem.has_children());
    }

    #[test]
    fn test_character_data_kinds() {
        assert!(Node::text("hi".into()).is_character_data());
        assert!(Node::comment("hi".into()).is_character_data());
        assert!(!Node::element("p".into()).is_character_data());
        assert!(!NodeKind::ShadowRoot.is_character_data());
    }
}
