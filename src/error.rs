//! Errors surfaced by [`Tree`](crate::Tree) operations.
//!
//! Not finding a value is not an error: [`Tree::find`](crate::Tree::find)
//! returns an `Option` for that.

use thiserror::Error;

/// Node storage could not be obtained during an insertion. The tree is left
/// exactly as it was before the call.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("failed to allocate {bytes} bytes for a tree node")]
pub struct AllocationError {
    /// Size of the allocation that failed.
    pub bytes: usize,
}

/// An output buffer handed to a collection operation cannot hold every node
/// of the tree. The buffer's contents must not be relied upon.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("buffer capacity {capacity} is smaller than tree size {size}")]
pub struct CapacityError {
    /// Number of slots in the buffer that was passed in.
    pub capacity: usize,
    /// Number of nodes in the tree at the time of the call.
    pub size: usize,
}
