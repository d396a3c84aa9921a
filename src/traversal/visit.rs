//! The "push on visit" family: pre-order, reverse pre-order, breadth-first and reverse
//! breadth-first differ only in the frontier discipline and the order children are pushed.

use super::Frontier;
use crate::{arena::ArenaIndex, Successors};

#[derive(Debug, Clone)]
pub struct PushOnVisit {
    frontier: Frontier,
    /// Push successors last-to-first
    reversed: bool,
    /// A node is marked when it enters the frontier. Keeps graphs with cycles or shared
    /// successors finite; in trees every node is discovered exactly once anyway.
    /// Grows with the graph, so nodes appended between advances are picked up.
    discovered: Vec<bool>,
}

impl PushOnVisit {
    /// Seeds the frontier with `start`. Without a (valid) start the traversal is exhausted
    /// on its first advance.
    pub fn new<G: Successors>(graph: &G, mut frontier: Frontier, reversed: bool, start: Option<ArenaIndex>) -> Self {
        let mut discovered = vec![];
        if let Some(start) = start.filter(|start| start.0 < graph.node_count()) {
            discovered = vec![false; graph.node_count()];
            discovered[start.0] = true;
            frontier.push(start);
        }
        PushOnVisit {
            frontier,
            reversed,
            discovered,
        }
    }

    pub fn advance<G: Successors>(&mut self, graph: &G) -> Option<ArenaIndex> {
        let current = self.frontier.pop()?;
        if self.discovered.len() < graph.node_count() {
            self.discovered.resize(graph.node_count(), false);
        }
        let successors = graph.successors(current);
        if self.reversed {
            for next in successors.iter().rev() {
                self.discover(*next);
            }
        } else {
            for next in successors {
                self.discover(*next);
            }
        }
        Some(current)
    }

    fn discover(&mut self, index: ArenaIndex) {
        if let Some(seen) = self.discovered.get_mut(index.0) {
            if !*seen {
                *seen = true;
                self.frontier.push(index);
            }
        }
    }
}
