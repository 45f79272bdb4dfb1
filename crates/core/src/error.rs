//! Recoverable container errors.
//!
//! None of these are fatal: the container that reports one is left exactly as
//! it was before the call.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue is full (capacity {capacity})")]
pub struct QueueFull {
    pub capacity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stack is full (capacity {capacity})")]
pub struct StackFull {
    pub capacity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("nothing to undo")]
pub struct NothingToUndo;
