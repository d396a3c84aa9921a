//! The arena slot: a stable index, an optional payload and the edge lists.

use crate::{ArborError, NodeLike};
use core::fmt;

/// Stable position of a node inside its [Arena](super::Arena).
///
/// Only meaningful together with the arena that handed it out.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct ArenaIndex(pub usize);

impl ArenaIndex {
    /// Sentinel reported by exhausted cursors
    pub const EXHAUSTED: ArenaIndex = ArenaIndex(usize::MAX);
}

impl From<usize> for ArenaIndex {
    fn from(value: usize) -> Self {
        ArenaIndex(value)
    }
}

impl fmt::Display for ArenaIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node structure to be used in an arena allocated tree or graph.
///
/// The edge lists are interpreted by the arena's [EdgeModel](super::EdgeModel):
/// `edges` holds the children of a tree node, the out-edges of a directed node or the
/// symmetric edges of an undirected node. `in_edges` is only filled in directed graphs
/// and `parent` only in trees.
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaNode<Load> {
    /// The user-defined load that the node owns (if any)
    pub(super) value: Option<Load>,
    /// Index in the arena allocation
    pub(super) index: ArenaIndex,
    pub(super) parent: Option<ArenaIndex>,
    pub(super) edges: Vec<ArenaIndex>,
    pub(super) in_edges: Vec<ArenaIndex>,
}

impl<Load> ArenaNode<Load> {
    pub(super) fn new(value: Option<Load>, index: ArenaIndex, parent: Option<ArenaIndex>) -> Self {
        ArenaNode {
            value,
            index,
            parent,
            edges: vec![],
            in_edges: vec![],
        }
    }

    pub fn value_mut(&mut self) -> Result<&mut Load, ArborError> {
        self.value.as_mut().ok_or(ArborError::MissingValue(self.index))
    }

    /// Replaces the payload and returns the previous one
    pub fn set_value(&mut self, value: Load) -> Option<Load> {
        self.value.replace(value)
    }

    pub fn take_value(&mut self) -> Option<Load> {
        self.value.take()
    }

    /// Parent of a tree node. `None` for the root and for graph nodes.
    pub fn parent(&self) -> Option<ArenaIndex> {
        self.parent
    }

    /// Children of a tree node in sibling order
    pub fn children(&self) -> &[ArenaIndex] {
        &self.edges
    }

    pub fn out_edges(&self) -> &[ArenaIndex] {
        &self.edges
    }

    pub fn in_edges(&self) -> &[ArenaIndex] {
        &self.in_edges
    }

    /// Symmetric edge list of an undirected node
    pub fn edges(&self) -> &[ArenaIndex] {
        &self.edges
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none() && self.index == ArenaIndex(0)
    }
}

impl<Load> NodeLike<Load> for ArenaNode<Load> {
    fn index(&self) -> ArenaIndex {
        self.index
    }

    fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }

    fn value(&self) -> Result<&Load, ArborError> {
        self.value.as_ref().ok_or(ArborError::MissingValue(self.index))
    }
}

impl<Load> fmt::Display for ArenaNode<Load>
where
    Load: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Arena index {}, edges: {:?}, payload: {}", self.index, self.edges, value),
            None => write!(f, "Arena index {}, edges: {:?}, no payload", self.index, self.edges),
        }
    }
}
