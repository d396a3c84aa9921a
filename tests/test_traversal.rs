use arbor::{ArborError, Arena, ArenaIndex, NodeLike, Order, Traversable};
use itertools::Itertools;
use proptest::prelude::*;

// Layout of the fixture tree
//        0
//      /   \
//     1     2
//    / \   / \
//   3   4 5   6
fn fixture() -> Arena<String> {
    let mut tree = Arena::with_root("0".to_string());
    let root = ArenaIndex(0);
    let first = tree.insert_child(root, Some("1".to_string())).unwrap();
    let second = tree.insert_child(root, Some("2".to_string())).unwrap();
    tree.insert_child(first, Some("3".to_string())).unwrap();
    tree.insert_child(first, Some("4".to_string())).unwrap();
    tree.insert_child(second, Some("5".to_string())).unwrap();
    tree.insert_child(second, Some("6".to_string())).unwrap();
    tree
}

fn values(tree: &Arena<String>, order: Order) -> Vec<&str> {
    tree.traverse(order).map(|n| n.value().unwrap().as_str()).collect_vec()
}

#[test_log::test]
fn test_pre_order() {
    assert_eq!(values(&fixture(), Order::PreOrder), &["0", "1", "3", "4", "2", "5", "6"]);
}

#[test_log::test]
fn test_reverse_pre_order() {
    assert_eq!(
        values(&fixture(), Order::ReversePreOrder),
        &["0", "2", "6", "5", "1", "4", "3"]
    );
}

#[test_log::test]
fn test_post_order() {
    assert_eq!(values(&fixture(), Order::PostOrder), &["3", "4", "1", "5", "6", "2", "0"]);
}

#[test_log::test]
fn test_breadth_first() {
    assert_eq!(values(&fixture(), Order::BreadthFirst), &["0", "1", "2", "3", "4", "5", "6"]);
}

#[test_log::test]
fn test_reverse_breadth_first() {
    assert_eq!(
        values(&fixture(), Order::ReverseBreadthFirst),
        &["0", "2", "1", "6", "5", "4", "3"]
    );
}

#[test_log::test]
fn test_begin_end_pairs() {
    let tree = fixture();
    for order in Order::ALL {
        let mut cursor = tree.begin(order);
        let end = tree.end(order);
        let mut visited = vec![];
        while cursor != end {
            visited.push(cursor.node().unwrap().value().unwrap().as_str());
            cursor.advance();
        }
        assert_eq!(visited, values(&tree, order));
    }
}

#[test_log::test]
fn test_exhausted_cursor_stays_exhausted() {
    let tree = fixture();
    for order in Order::ALL {
        let mut cursor = tree.begin(order);
        while !cursor.is_exhausted() {
            cursor.advance();
        }
        for _ in 0..5 {
            assert_eq!(cursor.advance(), None);
            assert_eq!(cursor, tree.end(order));
            assert!(matches!(cursor.node(), Err(ArborError::IndexOutOfBound { .. })));
        }
    }
}

#[test_log::test]
fn test_bounds_right_after_construction() {
    let tree = Arena::with_root(());
    assert_eq!(tree.len(), 1);
    assert!(tree.get(ArenaIndex(0)).is_ok());
    assert_eq!(
        tree.get(ArenaIndex(1)),
        Err(ArborError::IndexOutOfBound { index: 1, len: 1 })
    );
}

#[test_log::test]
fn test_undirected_insert_is_atomic() {
    let mut graph = Arena::undirected();
    let a = graph.insert_node(Some('a')).unwrap();
    let b = graph.insert_node(Some('b')).unwrap();
    graph.add_edge(a, b).unwrap();

    let before = graph.clone();
    assert!(graph.add_edge(a, ArenaIndex(2)).is_err());
    assert!(graph.add_edge(ArenaIndex(7), a).is_err());
    assert_eq!(graph, before);
    assert_eq!(graph.get(a).unwrap().edges(), &[b]);
}

proptest! {
    /// Builds a random tree: every entry picks a parent among the already inserted nodes
    #[test]
    fn test_index_stability(parents in prop::collection::vec(any::<prop::sample::Index>(), 0..64)) {
        let mut tree = Arena::with_root(0usize);
        for (value, parent) in parents.iter().enumerate() {
            let parent = ArenaIndex(parent.index(tree.len()));
            let index = tree.insert_child(parent, Some(value + 1)).unwrap();
            prop_assert_eq!(index, ArenaIndex(value + 1));
            for i in 0..tree.len() {
                prop_assert_eq!(tree.get(ArenaIndex(i)).unwrap().index(), ArenaIndex(i));
            }
        }
        for order in Order::ALL {
            let visited = tree.traverse(order).map(|n| n.index()).sorted().collect_vec();
            prop_assert_eq!(visited, (0..tree.len()).map(ArenaIndex).collect_vec());
        }
    }

    #[test]
    fn test_out_of_bound_lookup(inserts in 0usize..32, k in 0usize..1000) {
        let mut tree = Arena::with_root(());
        for _ in 0..inserts {
            tree.insert_child(ArenaIndex(0), None).unwrap();
        }
        let index = tree.len() + k;
        prop_assert_eq!(
            tree.get(ArenaIndex(index)),
            Err(ArborError::IndexOutOfBound { index, len: inserts + 1 })
        );
        prop_assert!(tree.get_mut(ArenaIndex(index)).is_err());
        prop_assert!(tree.value(ArenaIndex(index)).is_err());
    }

    #[test]
    fn test_directed_edge_counts(edges in prop::collection::vec((0usize..6, 0usize..6), 1..40)) {
        let mut graph = Arena::directed();
        for i in 0..6 {
            graph.insert_node(Some(i)).unwrap();
        }
        for (from, to) in edges {
            let (a, b) = (ArenaIndex(from), ArenaIndex(to));
            let out_a = graph.get(a).unwrap().out_edges().len();
            let in_a = graph.get(a).unwrap().in_edges().len();
            let out_b = graph.get(b).unwrap().out_edges().len();
            let in_b = graph.get(b).unwrap().in_edges().len();

            graph.add_edge(a, b).unwrap();

            if a == b {
                prop_assert_eq!(graph.get(a).unwrap().out_edges().len(), out_a + 1);
                prop_assert_eq!(graph.get(a).unwrap().in_edges().len(), in_a + 1);
            } else {
                prop_assert_eq!(graph.get(a).unwrap().out_edges().len(), out_a + 1);
                prop_assert_eq!(graph.get(b).unwrap().in_edges().len(), in_b + 1);
                prop_assert_eq!(graph.get(a).unwrap().in_edges().len(), in_a);
                prop_assert_eq!(graph.get(b).unwrap().out_edges().len(), out_b);
            }
        }
    }
}
