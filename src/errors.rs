//! Provides the error type used throughout this crate.

use crate::arena::{ArenaIndex, EdgeModel};
use thiserror::Error;

/// The error type used throughout this crate.
///
/// None of the variants is fatal: the arena stays valid and usable after any of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArborError {
    #[error("Node index {index} is out of bound (arena holds {len} nodes)")]
    IndexOutOfBound { index: usize, len: usize },
    #[error("Node {0} holds no value")]
    MissingValue(ArenaIndex),
    #[error("Structural misuse at node {index}: {reason}")]
    StructuralMisuse { index: ArenaIndex, reason: &'static str },
    #[error("Operation `{operation}` is not supported by the {model:?} edge model")]
    UnsupportedByModel { operation: &'static str, model: EdgeModel },
    #[error("Root node already set")]
    RootAlreadySet,
}
