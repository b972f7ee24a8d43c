//! domrange - document range algebra over an arena node tree
//!
//! Names positions in a mutable, hierarchical node tree and derives ordering
//! and range operations from them:
//! - dom: arena-allocated node tree with shadow-root hosts, navigation, and
//!   preorder traversal
//! - range: boundary points, the document-order comparator, range algebra
//!   (containment, intersection, union), and the intersecting-node iterator
//!
//! Everything is synchronous and single-threaded; the algebra borrows the
//! tree immutably, so the borrow checker rules out mutation during a
//! traversal. Positions captured before a mutation name stale locations
//! afterwards and must be re-captured by the caller.

pub mod dom;
pub mod error;
pub mod range;

pub use dom::{Node, NodeId, NodeKind, Tree};
pub use error::{RangeError, TreeError};
pub use range::{
    document_order, is_point_in_range, BoundaryPoint, IntersectingNodes, OffsetRange, SimpleRange,
    StartBehavior,
};
