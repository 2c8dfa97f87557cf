//! Capability contracts for sequence containers.
//!
//! Containers implement the contracts they can honour; the conformance
//! helpers in `unroll-test-utils` are written against these traits so the
//! same workload runs over every implementation.

use crate::error::ContainerError;

/// Last-in, first-out access.
pub trait Stack<T> {
    /// Push a value onto the top of the stack.
    fn push(&mut self, value: T);

    /// Remove and return the top value.
    ///
    /// Returns [`ContainerError::Empty`] if the stack holds nothing.
    fn pop(&mut self) -> Result<T, ContainerError>;

    /// Borrow the top value without removing it.
    fn top(&self) -> Result<&T, ContainerError>;

    /// Number of values currently stored.
    fn size(&self) -> usize;

    /// Remove every value.
    fn clear(&mut self);
}

/// Indexed sequence access with insertion and removal at both ends.
///
/// Indices are logical positions in `0..size()`, independent of how the
/// implementation lays the elements out in memory.
pub trait List<T> {
    /// Append a value after the last element.
    fn push_back(&mut self, value: T);

    /// Insert a value before the first element.
    fn push_front(&mut self, value: T);

    /// Remove and return the last element.
    fn pop_back(&mut self) -> Result<T, ContainerError>;

    /// Remove and return the first element.
    fn pop_front(&mut self) -> Result<T, ContainerError>;

    /// Borrow the element at `index`.
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] when `index >= size()`.
    fn at(&self, index: usize) -> Result<&T, ContainerError>;

    /// Logical index of the first element equal to `value`, or `size()`
    /// when no element matches.
    fn find(&self, value: &T) -> usize
    where
        T: PartialEq;

    /// Whether any element equals `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value) != self.size()
    }

    /// Insert `value` so that it ends up at logical position `index`.
    ///
    /// `index == size()` appends. Larger indices are rejected.
    fn insert(&mut self, value: T, index: usize) -> Result<(), ContainerError>;

    /// Remove and return the element at `index`.
    fn erase(&mut self, index: usize) -> Result<T, ContainerError>;

    /// Number of elements currently stored.
    fn size(&self) -> usize;

    /// Remove every element.
    fn clear(&mut self);
}
