//! Traversal engines. Each [Traversal] owns its own frontier and yields arena indices only;
//! resolving them to nodes is the job of the [cursors](crate::cursor).
//!
//! A bare [Traversal] does not borrow what it walks, so nodes may be appended between two
//! calls to [Traversal::advance]. New successors of nodes still waiting in the frontier (or
//! on the post-order path) are visited; those of nodes already emitted are not.

mod frontier;
mod post;
mod visit;

pub use frontier::Frontier;
pub use post::PostOrder;
pub use visit::PushOnVisit;

use crate::{arena::ArenaIndex, Successors};

/// Order of iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    PreOrder,
    /// Pre-order visiting the last child first
    ReversePreOrder,
    PostOrder,
    BreadthFirst,
    /// Level by level, last sibling before first sibling at every depth
    ReverseBreadthFirst,
}

impl Order {
    pub const ALL: [Order; 5] = [
        Order::PreOrder,
        Order::ReversePreOrder,
        Order::PostOrder,
        Order::BreadthFirst,
        Order::ReverseBreadthFirst,
    ];
}

/// One traversal in progress, tagged by its kind
#[derive(Debug, Clone)]
pub enum Traversal {
    PreOrder(PushOnVisit),
    ReversePreOrder(PushOnVisit),
    PostOrder(PostOrder),
    BreadthFirst(PushOnVisit),
    ReverseBreadthFirst(PushOnVisit),
}

impl Traversal {
    /// Seeds a traversal of `graph` at `start`. `None` (or an index out of bound) yields a
    /// traversal that is exhausted right away.
    pub fn new<G: Successors>(order: Order, graph: &G, start: Option<ArenaIndex>) -> Self {
        match order {
            Order::PreOrder => Traversal::PreOrder(PushOnVisit::new(graph, Frontier::stack(), true, start)),
            Order::ReversePreOrder => {
                Traversal::ReversePreOrder(PushOnVisit::new(graph, Frontier::stack(), false, start))
            }
            Order::PostOrder => Traversal::PostOrder(PostOrder::new(graph, start)),
            Order::BreadthFirst => Traversal::BreadthFirst(PushOnVisit::new(graph, Frontier::queue(), false, start)),
            Order::ReverseBreadthFirst => {
                Traversal::ReverseBreadthFirst(PushOnVisit::new(graph, Frontier::queue(), true, start))
            }
        }
    }

    pub fn order(&self) -> Order {
        match self {
            Traversal::PreOrder(_) => Order::PreOrder,
            Traversal::ReversePreOrder(_) => Order::ReversePreOrder,
            Traversal::PostOrder(_) => Order::PostOrder,
            Traversal::BreadthFirst(_) => Order::BreadthFirst,
            Traversal::ReverseBreadthFirst(_) => Order::ReverseBreadthFirst,
        }
    }

    /// Next index to visit, `None` once exhausted (and on every call after that)
    pub fn advance<G: Successors>(&mut self, graph: &G) -> Option<ArenaIndex> {
        match self {
            Traversal::PreOrder(engine)
            | Traversal::ReversePreOrder(engine)
            | Traversal::BreadthFirst(engine)
            | Traversal::ReverseBreadthFirst(engine) => engine.advance(graph),
            Traversal::PostOrder(engine) => engine.advance(graph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adjacency lists standing in for an arena
    struct Adjacency(Vec<Vec<ArenaIndex>>);

    impl Adjacency {
        fn new(lists: &[&[usize]]) -> Self {
            Adjacency(
                lists
                    .iter()
                    .map(|list| list.iter().map(|i| ArenaIndex(*i)).collect())
                    .collect(),
            )
        }
    }

    impl Successors for Adjacency {
        fn node_count(&self) -> usize {
            self.0.len()
        }

        fn successors(&self, index: ArenaIndex) -> &[ArenaIndex] {
            self.0.get(index.0).map(Vec::as_slice).unwrap_or(&[])
        }
    }

    fn run(order: Order, graph: &Adjacency, start: Option<usize>) -> Vec<usize> {
        let mut traversal = Traversal::new(order, graph, start.map(ArenaIndex));
        assert_eq!(traversal.order(), order);
        let mut result = vec![];
        while let Some(index) = traversal.advance(graph) {
            result.push(index.0);
        }
        result
    }

    fn fixture() -> Adjacency {
        Adjacency::new(&[&[1, 2], &[3, 4], &[5, 6], &[], &[], &[], &[]])
    }

    #[test_log::test]
    fn test_orders() {
        let tree = fixture();
        assert_eq!(run(Order::PreOrder, &tree, Some(0)), &[0, 1, 3, 4, 2, 5, 6]);
        assert_eq!(run(Order::ReversePreOrder, &tree, Some(0)), &[0, 2, 6, 5, 1, 4, 3]);
        assert_eq!(run(Order::PostOrder, &tree, Some(0)), &[3, 4, 1, 5, 6, 2, 0]);
        assert_eq!(run(Order::BreadthFirst, &tree, Some(0)), &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(run(Order::ReverseBreadthFirst, &tree, Some(0)), &[0, 2, 1, 6, 5, 4, 3]);
    }

    #[test_log::test]
    fn test_subtree() {
        let tree = fixture();
        assert_eq!(run(Order::PreOrder, &tree, Some(2)), &[2, 5, 6]);
        assert_eq!(run(Order::PostOrder, &tree, Some(1)), &[3, 4, 1]);
        assert_eq!(run(Order::PostOrder, &tree, Some(6)), &[6]);
    }

    #[test_log::test]
    fn test_no_start() {
        let tree = fixture();
        for order in Order::ALL {
            assert!(run(order, &tree, None).is_empty());
            assert!(run(order, &tree, Some(7)).is_empty());
            assert!(run(order, &Adjacency(vec![]), Some(0)).is_empty());
        }
    }

    #[test_log::test]
    fn test_exhaustion_is_terminal() {
        let tree = fixture();
        for order in Order::ALL {
            let mut traversal = Traversal::new(order, &tree, Some(ArenaIndex(0)));
            while traversal.advance(&tree).is_some() {}
            for _ in 0..3 {
                assert_eq!(traversal.advance(&tree), None);
            }
        }
    }

    #[test_log::test]
    fn test_appending_between_advances() {
        use crate::Arena;

        let mut tree = Arena::with_root(0);
        tree.insert_child(ArenaIndex(0), Some(1)).unwrap();
        let mut traversal = Traversal::new(Order::BreadthFirst, &tree, Some(ArenaIndex(0)));
        assert_eq!(traversal.advance(&tree), Some(ArenaIndex(0)));
        tree.insert_child(ArenaIndex(1), Some(2)).unwrap();
        let mut rest = vec![];
        while let Some(index) = traversal.advance(&tree) {
            rest.push(index.0);
        }
        assert_eq!(rest, &[1, 2]);

        // 0 -> 1 -> 2, then 3 is appended below the root while 0 waits on the path
        let mut tree = Arena::with_root(0);
        let first = tree.insert_child(ArenaIndex(0), Some(1)).unwrap();
        tree.insert_child(first, Some(2)).unwrap();
        let mut traversal = Traversal::new(Order::PostOrder, &tree, Some(ArenaIndex(0)));
        tree.insert_child(ArenaIndex(0), Some(3)).unwrap();
        let mut result = vec![];
        while let Some(index) = traversal.advance(&tree) {
            result.push(index.0);
        }
        assert_eq!(result, &[2, 1, 3, 0]);
    }

    #[test_log::test]
    fn test_cycles_terminate() {
        // 0 -> 1 -> 2 -> 0, 1 -> 1, 0 -> 2 twice
        let graph = Adjacency::new(&[&[1, 2, 2], &[2, 1], &[0]]);
        assert_eq!(run(Order::PreOrder, &graph, Some(0)), &[0, 1, 2]);
        assert_eq!(run(Order::BreadthFirst, &graph, Some(0)), &[0, 1, 2]);
        assert_eq!(run(Order::ReverseBreadthFirst, &graph, Some(0)), &[0, 2, 1]);
        assert_eq!(run(Order::PostOrder, &graph, Some(0)), &[2, 1, 0]);
        assert_eq!(run(Order::PostOrder, &graph, Some(1)), &[0, 2, 1]);
    }
}
