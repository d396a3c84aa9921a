//! The arena itself: the sole owner of node storage.

use super::{ArenaIndex, ArenaNode, EdgeModel};
use crate::{ArborError, NodeLike, Successors};

/// Insertion-ordered, growable sequence of nodes addressed by [ArenaIndex].
///
/// Indices are handed out monotonically and are never reused. The backing vector may
/// reallocate on insertion, so references into it must be re-fetched by index afterwards
/// (the borrow checker enforces this). There is no removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Arena<Load> {
    /// Memory allocated area for nodes
    pub(super) nodes: Vec<ArenaNode<Load>>,
    pub(super) model: EdgeModel,
}

impl<Load> Arena<Load> {
    /// Contructor for an empty arena with the given edge model. The capacity is a hint
    /// for the number of nodes.
    pub fn with_capacity(model: EdgeModel, capacity: usize) -> Self {
        Arena {
            nodes: Vec::with_capacity(capacity),
            model,
        }
    }

    /// Empty tree. Call [Arena::insert_root] first.
    pub fn tree() -> Self {
        Self::with_capacity(EdgeModel::Tree, 0)
    }

    /// Tree consisting of a single root holding `value`
    pub fn with_root(value: Load) -> Self {
        let mut tree = Self::tree();
        tree.nodes.push(ArenaNode::new(Some(value), ArenaIndex(0), None));
        tree
    }

    pub fn directed() -> Self {
        Self::with_capacity(EdgeModel::Directed, 0)
    }

    pub fn undirected() -> Self {
        Self::with_capacity(EdgeModel::Undirected, 0)
    }

    pub fn model(&self) -> EdgeModel {
        self.model
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in storage (i.e., insertion) order
    pub fn nodes(&self) -> &[ArenaNode<Load>] {
        &self.nodes
    }

    /// Iterates in storage order. Use a [Cursor](crate::Cursor) for structural orders.
    pub fn iter(&self) -> impl Iterator<Item = &ArenaNode<Load>> {
        self.nodes.iter()
    }

    pub(crate) fn check(&self, index: ArenaIndex) -> Result<(), ArborError> {
        if index.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(ArborError::IndexOutOfBound {
                index: index.0,
                len: self.nodes.len(),
            })
        }
    }

    pub fn get(&self, index: ArenaIndex) -> Result<&ArenaNode<Load>, ArborError> {
        let len = self.nodes.len();
        self.nodes
            .get(index.0)
            .ok_or(ArborError::IndexOutOfBound { index: index.0, len })
    }

    pub fn get_mut(&mut self, index: ArenaIndex) -> Result<&mut ArenaNode<Load>, ArborError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(index.0)
            .ok_or(ArborError::IndexOutOfBound { index: index.0, len })
    }

    /// The root of a tree (or the first node of a graph)
    pub fn root(&self) -> Result<&ArenaNode<Load>, ArborError> {
        self.get(ArenaIndex(0))
    }

    pub fn value(&self, index: ArenaIndex) -> Result<&Load, ArborError> {
        self.get(index)?.value()
    }

    pub fn value_mut(&mut self, index: ArenaIndex) -> Result<&mut Load, ArborError> {
        self.get_mut(index)?.value_mut()
    }

    /// The `nth` child of a tree node. Fails with [ArborError::StructuralMisuse] if the node
    /// has fewer children.
    pub fn child(&self, index: ArenaIndex, nth: usize) -> Result<ArenaIndex, ArborError> {
        self.require_model("child", EdgeModel::Tree)?;
        self.get(index)?
            .children()
            .get(nth)
            .copied()
            .ok_or(ArborError::StructuralMisuse {
                index,
                reason: "node has no such child",
            })
    }

    /// First child, for trees used as binary trees
    pub fn left(&self, index: ArenaIndex) -> Result<ArenaIndex, ArborError> {
        self.child(index, 0)
    }

    /// Second child, for trees used as binary trees
    pub fn right(&self, index: ArenaIndex) -> Result<ArenaIndex, ArborError> {
        self.child(index, 1)
    }

    /// Payload of a tree leaf. Interior nodes are structural and fail fast.
    pub fn leaf_value(&self, index: ArenaIndex) -> Result<&Load, ArborError> {
        self.require_model("leaf_value", EdgeModel::Tree)?;
        let node = self.get(index)?;
        if !node.is_leaf() {
            return Err(ArborError::StructuralMisuse {
                index,
                reason: "leaf value requested on an interior node",
            });
        }
        node.value()
    }

    /// Distance of a tree node to the root
    pub fn depth(&self, index: ArenaIndex) -> Result<usize, ArborError> {
        self.require_model("depth", EdgeModel::Tree)?;
        let mut node = self.get(index)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = self.get(parent)?;
            depth += 1;
        }
        Ok(depth)
    }

    pub(crate) fn require_model(&self, operation: &'static str, model: EdgeModel) -> Result<(), ArborError> {
        if self.model == model {
            Ok(())
        } else {
            Err(ArborError::UnsupportedByModel {
                operation,
                model: self.model,
            })
        }
    }
}

impl<Load> Default for Arena<Load> {
    fn default() -> Self {
        Self::tree()
    }
}

impl<Load> Successors for Arena<Load> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn successors(&self, index: ArenaIndex) -> &[ArenaIndex] {
        self.nodes.get(index.0).map(|node| node.edges.as_slice()).unwrap_or(&[])
    }
}
