//! Pending node indices of a push-on-visit traversal.

use crate::arena::ArenaIndex;
use std::collections::VecDeque;

/// Either a stack (depth-first) or a queue (breadth-first)
#[derive(Debug, Clone)]
pub enum Frontier {
    Stack(Vec<ArenaIndex>),
    Queue(VecDeque<ArenaIndex>),
}

impl Frontier {
    pub fn stack() -> Self {
        Frontier::Stack(vec![])
    }

    pub fn queue() -> Self {
        Frontier::Queue(VecDeque::new())
    }

    pub fn push(&mut self, index: ArenaIndex) {
        match self {
            Frontier::Stack(stack) => stack.push(index),
            Frontier::Queue(queue) => queue.push_back(index),
        }
    }

    /// Removes the next index according to the discipline (LIFO or FIFO)
    pub fn pop(&mut self) -> Option<ArenaIndex> {
        match self {
            Frontier::Stack(stack) => stack.pop(),
            Frontier::Queue(queue) => queue.pop_front(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Stack(stack) => stack.len(),
            Frontier::Queue(queue) => queue.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
