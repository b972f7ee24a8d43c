//! Error types
//!
//! Structural precondition failures are reported as values, never panics.
//! Operations whose only failure mode is "no such position" return `Option`
//! instead and do not appear here.

use thiserror::Error;

/// Errors from tree mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The node id does not belong to this tree
    #[error("unknown node id")]
    UnknownNode,
    /// The child is already attached to a parent
    #[error("node is already attached to a parent")]
    AlreadyAttached,
    /// Attaching here would make a node its own ancestor
    #[error("insertion would create a cycle")]
    WouldCreateCycle,
    /// Character-data nodes cannot hold children
    #[error("node cannot hold children")]
    NotAContainer,
    /// Shadow roots attach to elements only
    #[error("node is not an element")]
    NotAnElement,
    /// The reference node is not a child of the given parent
    #[error("reference node is not a child of the parent")]
    NotAChild,
    /// An element hosts at most one shadow root
    #[error("element already hosts a shadow root")]
    ShadowRootAlreadyAttached,
}

/// Errors from checked range construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The start point is after the end point in document order
    #[error("range start is after its end")]
    ReversedRange,
    /// The two endpoints do not share a root
    #[error("range endpoints are in disconnected trees")]
    Disconnected,
}
