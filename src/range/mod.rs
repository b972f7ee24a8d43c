//! Range Module - boundary points and the algebra over them
//!
//! - BoundaryPoint: a (container, offset) position in the tree
//! - Document-order comparator: partial order between arbitrary positions,
//!   composed-tree aware
//! - SimpleRange: an ordered pair of points with containment, intersection,
//!   and union derived from the comparator
//! - IntersectingNodes: lazy tree-order iterator over the nodes a range
//!   touches

pub mod boundary;
pub mod iter;
pub mod order;
pub mod simple;

pub use boundary::BoundaryPoint;
pub use iter::{IntersectingNodes, StartBehavior};
pub use order::{
    document_order, document_order_point_to_range, document_order_range_to_point,
    is_point_in_range,
};
pub use simple::{OffsetRange, SimpleRange};
