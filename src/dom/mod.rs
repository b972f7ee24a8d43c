//! DOM Module - arena-based node tree
//!
//! Implements the node-tree collaborator the range algebra navigates:
//! - Arena allocation for nodes
//! - NodeId (u32) indices for cache-friendly traversal
//! - Shadow-root host links for composed-tree parent lookup
//! - Preorder traversal and ancestry queries

pub mod node;
pub mod traversal;
pub mod tree;

pub use node::{Node, NodeId, NodeKind};
pub use tree::{Children, Tree};
