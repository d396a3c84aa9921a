//! Edge models and the structural mutations they allow.
//!
//! Every mutation validates all indices involved before touching any node, so a failed
//! call never leaves a half-applied edit behind.

use super::{Arena, ArenaIndex, ArenaNode};
use crate::ArborError;
use tracing::debug;
use tracing_attributes::instrument;

/// How the edge lists of the nodes in an [Arena] are written and read.
/// Chosen once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeModel {
    /// One parent per non-root node; children are created with [Arena::insert_child] only
    Tree,
    /// Separate out- and in-edge lists, duplicates permitted
    Directed,
    /// One symmetric edge list per node
    Undirected,
}

impl<Load> Arena<Load> {
    /// Inserts the root of an empty tree and returns its index (always `0`)
    #[instrument(level = "trace", skip_all)]
    pub fn insert_root(&mut self, value: Option<Load>) -> Result<ArenaIndex, ArborError> {
        self.require_model("insert_root", EdgeModel::Tree)?;
        if !self.nodes.is_empty() {
            return Err(ArborError::RootAlreadySet);
        }
        self.nodes.push(ArenaNode::new(value, ArenaIndex(0), None));
        debug!("Inserted root");
        Ok(ArenaIndex(0))
    }

    /// Appends a new node below `parent` (after its existing children) and returns its index.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert_child(&mut self, parent: ArenaIndex, value: Option<Load>) -> Result<ArenaIndex, ArborError> {
        self.require_model("insert_child", EdgeModel::Tree)?;
        let index = ArenaIndex(self.nodes.len());
        self.get_mut(parent)?.edges.push(index);
        self.nodes.push(ArenaNode::new(value, index, Some(parent)));
        debug!(%parent, %index, "Inserted child");
        Ok(index)
    }

    /// Appends an unconnected node to a graph and returns its index
    #[instrument(level = "trace", skip_all)]
    pub fn insert_node(&mut self, value: Option<Load>) -> Result<ArenaIndex, ArborError> {
        if self.model == EdgeModel::Tree {
            return Err(ArborError::UnsupportedByModel {
                operation: "insert_node",
                model: self.model,
            });
        }
        let index = ArenaIndex(self.nodes.len());
        self.nodes.push(ArenaNode::new(value, index, None));
        debug!(%index, "Inserted node");
        Ok(index)
    }

    /// Connects two existing graph nodes.
    ///
    /// Directed: `to` is appended to the out-edges of `from` and `from` to the in-edges of `to`.
    /// Undirected: each endpoint is appended to the other's edge list (once for self-loops).
    #[instrument(level = "trace", skip(self))]
    pub fn add_edge(&mut self, from: ArenaIndex, to: ArenaIndex) -> Result<(), ArborError> {
        if self.model == EdgeModel::Tree {
            return Err(ArborError::UnsupportedByModel {
                operation: "add_edge",
                model: self.model,
            });
        }
        self.check(to)?;
        self.check(from)?;
        self.nodes[from.0].edges.push(to);
        if self.model == EdgeModel::Directed {
            self.nodes[to.0].in_edges.push(from);
        } else if from != to {
            self.nodes[to.0].edges.push(from);
        }
        debug!(%from, %to, "Added edge");
        Ok(())
    }
}
