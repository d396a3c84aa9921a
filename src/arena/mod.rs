//! [Arena memory allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! trees and graphs addressed by stable indices.
//!
//! One [Arena] type serves all three [EdgeModel]s. Nodes never point back to their arena;
//! operations that need the container take it explicitly.

mod edges;
mod node;
mod storage;

pub use edges::EdgeModel;
pub use node::{ArenaIndex, ArenaNode};
pub use storage::Arena;
