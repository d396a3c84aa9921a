//! Definition of the interfaces shared by the arena and the traversal engines
use crate::{arena::ArenaIndex, ArborError};

/// Container that holds data in an arena
pub trait NodeLike<Load> {
    /// Position in the arena. Never changes during the node's lifetime.
    fn index(&self) -> ArenaIndex;
    fn is_leaf(&self) -> bool;
    fn has_value(&self) -> bool;
    /// Fails with [ArborError::MissingValue] for structural nodes without payload.
    fn value(&self) -> Result<&Load, ArborError>;
}

/// Anything the traversal engines can walk.
///
/// The engines only ever see indices; the successors of a node are interpreted
/// by the implementor (tree children, directed out-edges or undirected edges).
pub trait Successors {
    fn node_count(&self) -> usize;
    /// Ordered successors of `index`. Out of bound indices have none.
    fn successors(&self, index: ArenaIndex) -> &[ArenaIndex];
}
