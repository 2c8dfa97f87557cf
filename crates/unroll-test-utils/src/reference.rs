//! `Vec`-backed reference container.

use unroll_core::{ContainerError, List, Stack};

/// Straightforward [`List`] and [`Stack`] implementation over a `Vec`.
///
/// Used to validate the conformance helpers themselves and as a model to
/// compare other containers against.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VecList<T> {
    items: Vec<T>,
}

impl<T> List<T> for VecList<T> {
    fn push_back(&mut self, value: T) {
        self.items.push(value);
    }

    fn push_front(&mut self, value: T) {
        self.items.insert(0, value);
    }

    fn pop_back(&mut self) -> Result<T, ContainerError> {
        self.items.pop().ok_or(ContainerError::Empty)
    }

    fn pop_front(&mut self) -> Result<T, ContainerError> {
        if self.items.is_empty() {
            return Err(ContainerError::Empty);
        }
        Ok(self.items.remove(0))
    }

    fn at(&self, index: usize) -> Result<&T, ContainerError> {
        self.items
            .get(index)
            .ok_or(ContainerError::out_of_range(index, self.items.len()))
    }

    fn find(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.items
            .iter()
            .position(|candidate| candidate == value)
            .unwrap_or(self.items.len())
    }

    fn insert(&mut self, value: T, index: usize) -> Result<(), ContainerError> {
        if index > self.items.len() {
            return Err(ContainerError::out_of_range(index, self.items.len()));
        }
        self.items.insert(index, value);
        Ok(())
    }

    fn erase(&mut self, index: usize) -> Result<T, ContainerError> {
        if index >= self.items.len() {
            return Err(ContainerError::out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Stack<T> for VecList<T> {
    fn push(&mut self, value: T) {
        self.items.push(value);
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        self.items.pop().ok_or(ContainerError::Empty)
    }

    fn top(&self) -> Result<&T, ContainerError> {
        self.items.last().ok_or(ContainerError::Empty)
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
