//! Single-pass, forward-only cursors over an arena.
//!
//! A cursor owns one [Traversal] and borrows the arena it walks. The current position is
//! an index only and is resolved against the arena on every dereference. Since the borrow
//! lasts as long as the cursor, structural mutation of the arena mid-traversal is rejected
//! at compile time.
//!
//! ```
//! use arbor::{Arena, ArenaIndex, NodeLike, Order, Traversable};
//!
//! let mut tree = Arena::with_root("0");
//! let first = tree.insert_child(ArenaIndex(0), Some("1")).unwrap();
//! tree.insert_child(ArenaIndex(0), Some("2")).unwrap();
//! tree.insert_child(first, Some("3")).unwrap();
//!
//! let visited: Vec<_> = tree.traverse(Order::PostOrder).map(|n| *n.value().unwrap()).collect();
//! assert_eq!(visited, ["3", "1", "2", "0"]);
//!
//! let mut cursor = tree.begin(Order::BreadthFirst);
//! let end = tree.end(Order::BreadthFirst);
//! let mut count = 0;
//! while cursor != end {
//!     count += 1;
//!     cursor.advance();
//! }
//! assert_eq!(count, 4);
//! ```

use crate::{
    arena::{Arena, ArenaIndex, ArenaNode},
    traversal::{Order, Traversal},
    ArborError,
};
use tracing::trace;

/// Read-only cursor. Also an [Iterator] yielding the current node before advancing.
#[derive(Debug, Clone)]
pub struct Cursor<'a, Load> {
    arena: &'a Arena<Load>,
    traversal: Traversal,
    current: Option<ArenaIndex>,
}

impl<'a, Load> Cursor<'a, Load> {
    /// Cursor positioned on the first node of the traversal seeded at `start`.
    /// `None` gives the end cursor.
    fn seeded(arena: &'a Arena<Load>, order: Order, start: Option<ArenaIndex>) -> Self {
        let mut cursor = Cursor {
            arena,
            traversal: Traversal::new(order, arena, start),
            current: None,
        };
        trace!(?order, ?start, "Seeded cursor");
        cursor.advance();
        cursor
    }

    pub fn begin(arena: &'a Arena<Load>, order: Order) -> Self {
        Self::seeded(arena, order, Some(ArenaIndex(0)))
    }

    pub fn begin_from(arena: &'a Arena<Load>, order: Order, start: ArenaIndex) -> Result<Self, ArborError> {
        arena.check(start)?;
        Ok(Self::seeded(arena, order, Some(start)))
    }

    pub fn end(arena: &'a Arena<Load>, order: Order) -> Self {
        Self::seeded(arena, order, None)
    }

    /// Moves to the next node and returns its index. Once exhausted, stays exhausted.
    pub fn advance(&mut self) -> Option<ArenaIndex> {
        let was_active = self.current.is_some();
        self.current = self.traversal.advance(self.arena);
        if was_active && self.current.is_none() {
            trace!(order = ?self.traversal.order(), "Cursor exhausted");
        }
        self.current
    }

    pub fn current(&self) -> Option<ArenaIndex> {
        self.current
    }

    /// Current index or [ArenaIndex::EXHAUSTED]
    pub fn index(&self) -> ArenaIndex {
        self.current.unwrap_or(ArenaIndex::EXHAUSTED)
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    pub fn order(&self) -> Order {
        self.traversal.order()
    }

    /// Resolves the current index. Fails with [ArborError::IndexOutOfBound] when exhausted.
    pub fn node(&self) -> Result<&'a ArenaNode<Load>, ArborError> {
        self.arena.get(self.index())
    }
}

impl<'a, Load> Iterator for Cursor<'a, Load> {
    type Item = &'a ArenaNode<Load>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node().ok()?;
        self.advance();
        Some(node)
    }
}

impl<'a, 'b, Load> PartialEq<Cursor<'b, Load>> for Cursor<'a, Load> {
    fn eq(&self, other: &Cursor<'b, Load>) -> bool {
        self.current == other.current
    }
}

impl<'a, Load> PartialEq<ArenaIndex> for Cursor<'a, Load> {
    fn eq(&self, other: &ArenaIndex) -> bool {
        self.index() == *other
    }
}

/// Cursor over a mutable arena. Payloads can be changed through it, the structure cannot:
/// [ArenaNode] exposes its edge lists read-only.
///
/// As no second cursor can borrow the arena at the same time, the end of a mutable
/// traversal is detected with [CursorMut::is_exhausted] or by comparing against
/// [ArenaIndex::EXHAUSTED].
#[derive(Debug)]
pub struct CursorMut<'a, Load> {
    arena: &'a mut Arena<Load>,
    traversal: Traversal,
    current: Option<ArenaIndex>,
}

impl<'a, Load> CursorMut<'a, Load> {
    fn seeded(arena: &'a mut Arena<Load>, order: Order, start: Option<ArenaIndex>) -> Self {
        let traversal = Traversal::new(order, &*arena, start);
        let mut cursor = CursorMut {
            arena,
            traversal,
            current: None,
        };
        trace!(?order, ?start, "Seeded mutable cursor");
        cursor.advance();
        cursor
    }

    pub fn begin(arena: &'a mut Arena<Load>, order: Order) -> Self {
        Self::seeded(arena, order, Some(ArenaIndex(0)))
    }

    pub fn begin_from(arena: &'a mut Arena<Load>, order: Order, start: ArenaIndex) -> Result<Self, ArborError> {
        arena.check(start)?;
        Ok(Self::seeded(arena, order, Some(start)))
    }

    pub fn advance(&mut self) -> Option<ArenaIndex> {
        let was_active = self.current.is_some();
        self.current = self.traversal.advance(&*self.arena);
        if was_active && self.current.is_none() {
            trace!(order = ?self.traversal.order(), "Mutable cursor exhausted");
        }
        self.current
    }

    pub fn current(&self) -> Option<ArenaIndex> {
        self.current
    }

    pub fn index(&self) -> ArenaIndex {
        self.current.unwrap_or(ArenaIndex::EXHAUSTED)
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    pub fn order(&self) -> Order {
        self.traversal.order()
    }

    pub fn node(&self) -> Result<&ArenaNode<Load>, ArborError> {
        self.arena.get(self.index())
    }

    pub fn node_mut(&mut self) -> Result<&mut ArenaNode<Load>, ArborError> {
        let index = self.index();
        self.arena.get_mut(index)
    }

    pub fn value_mut(&mut self) -> Result<&mut Load, ArborError> {
        self.node_mut()?.value_mut()
    }

    /// Visits the remaining nodes, starting with the current one
    pub fn for_each_node<F>(mut self, mut f: F)
    where
        F: FnMut(&mut ArenaNode<Load>),
    {
        while let Ok(node) = self.node_mut() {
            f(node);
            self.advance();
        }
    }
}

impl<'a, Load> PartialEq<ArenaIndex> for CursorMut<'a, Load> {
    fn eq(&self, other: &ArenaIndex) -> bool {
        self.index() == *other
    }
}

/// Begin/end cursor pairs for every [Order], on shared and on mutable arenas
pub trait Traversable<Load> {
    fn begin(&self, order: Order) -> Cursor<'_, Load>;
    /// Traversal of the sub-tree (or reachable sub-graph) below `start`
    fn begin_from(&self, order: Order, start: ArenaIndex) -> Result<Cursor<'_, Load>, ArborError>;
    fn end(&self, order: Order) -> Cursor<'_, Load>;
    fn begin_mut(&mut self, order: Order) -> CursorMut<'_, Load>;
    fn begin_from_mut(&mut self, order: Order, start: ArenaIndex) -> Result<CursorMut<'_, Load>, ArborError>;

    /// Same as [Traversable::begin], reads better when used as an iterator
    fn traverse(&self, order: Order) -> Cursor<'_, Load> {
        self.begin(order)
    }
}

impl<Load> Traversable<Load> for Arena<Load> {
    fn begin(&self, order: Order) -> Cursor<'_, Load> {
        Cursor::begin(self, order)
    }

    fn begin_from(&self, order: Order, start: ArenaIndex) -> Result<Cursor<'_, Load>, ArborError> {
        Cursor::begin_from(self, order, start)
    }

    fn end(&self, order: Order) -> Cursor<'_, Load> {
        Cursor::end(self, order)
    }

    fn begin_mut(&mut self, order: Order) -> CursorMut<'_, Load> {
        CursorMut::begin(self, order)
    }

    fn begin_from_mut(&mut self, order: Order, start: ArenaIndex) -> Result<CursorMut<'_, Load>, ArborError> {
        CursorMut::begin_from(self, order, start)
    }
}
