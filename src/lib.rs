//! ## About
//!
//! This crate contains [arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! trees and graphs whose nodes are addressed by stable indices instead of references, and
//! restartable cursors for traversing them in pre-order, reverse pre-order, post-order,
//! breadth-first and reverse breadth-first order.
//!
//! See the [Arena] struct and the [Traversable] trait to get started.
//!
//! ```
//! use arbor::{Arena, ArenaIndex, NodeLike, Order, Traversable};
//!
//! let mut tree = Arena::with_root(0);
//! let root = ArenaIndex(0);
//! let left = tree.insert_child(root, Some(1)).unwrap();
//! tree.insert_child(root, Some(2)).unwrap();
//! tree.insert_child(left, Some(3)).unwrap();
//!
//! let order: Vec<i32> = tree.traverse(Order::PreOrder).map(|n| *n.value().unwrap()).collect();
//! assert_eq!(order, [0, 1, 3, 2]);
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms (`insert_child`, `advance`), except for getters and factories,
//!             which omit a `get_` prefix like the standard library (`get` itself is the
//!             bounds-checked lookup).

pub mod arena;
pub mod cursor;
pub mod errors;
pub mod iterables;
pub mod traversal;

pub use arena::{Arena, ArenaIndex, ArenaNode, EdgeModel};
pub use cursor::{Cursor, CursorMut, Traversable};
pub use errors::ArborError;
pub use iterables::{NodeLike, Successors};
pub use traversal::{Order, Traversal};
