//! Post-order traversal. A node can only be emitted after all its descendants, which
//! does not fit the push-on-visit scheme: the stack holds the path from the start node
//! down to the next node to emit.

use crate::{arena::ArenaIndex, Successors};

/// A node on the current path and the position of the next successor to descend into
#[derive(Debug, Clone, Copy)]
struct Frame {
    index: ArenaIndex,
    next: usize,
}

#[derive(Debug, Clone)]
pub struct PostOrder {
    stack: Vec<Frame>,
    /// Marked when pushed, see [PushOnVisit](super::PushOnVisit)
    discovered: Vec<bool>,
}

impl PostOrder {
    pub fn new<G: Successors>(graph: &G, start: Option<ArenaIndex>) -> Self {
        let mut traversal = PostOrder {
            stack: vec![],
            discovered: vec![],
        };
        if let Some(start) = start.filter(|start| start.0 < graph.node_count()) {
            traversal.discovered = vec![false; graph.node_count()];
            traversal.descend(graph, start);
        }
        traversal
    }

    pub fn advance<G: Successors>(&mut self, graph: &G) -> Option<ArenaIndex> {
        let current = self.stack.pop()?.index;
        if self.discovered.len() < graph.node_count() {
            self.discovered.resize(graph.node_count(), false);
        }
        // The new top is the parent of `current`; continue with the next sibling's subtree
        if let Some(sibling) = self.next_successor(graph) {
            self.descend(graph, sibling);
        }
        Some(current)
    }

    /// Pushes `index` and keeps following the first undiscovered successor down to a leaf
    fn descend<G: Successors>(&mut self, graph: &G, mut index: ArenaIndex) {
        loop {
            self.discovered[index.0] = true;
            self.stack.push(Frame { index, next: 0 });
            match self.next_successor(graph) {
                Some(successor) => index = successor,
                None => break,
            }
        }
    }

    /// Next undiscovered successor of the stack top (advancing its position)
    fn next_successor<G: Successors>(&mut self, graph: &G) -> Option<ArenaIndex> {
        let frame = self.stack.last_mut()?;
        let successors = graph.successors(frame.index);
        while let Some(&candidate) = successors.get(frame.next) {
            frame.next += 1;
            if self.discovered.get(candidate.0) == Some(&false) {
                return Some(candidate);
            }
        }
        None
    }
}
