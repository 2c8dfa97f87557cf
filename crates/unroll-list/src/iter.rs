//! Iterators over an [`UnrolledList`](crate::UnrolledList).

use std::iter::FusedIterator;
use std::mem;
use std::slice;

use crate::node::Node;
use crate::slots::{self, Slots};

/// Borrowing iterator over the elements of a list, front to back.
pub struct Iter<'a, T, const N: usize> {
    current: slice::Iter<'a, T>,
    next_node: Option<&'a Node<T, N>>,
    remaining: usize,
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    pub(crate) fn new(head: &'a Node<T, N>, len: usize) -> Self {
        Self {
            current: Default::default(),
            next_node: Some(head),
            remaining: len,
        }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            let node = self.next_node?;
            self.current = node.slots.as_slice().iter();
            self.next_node = node.next.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            next_node: self.next_node,
            remaining: self.remaining,
        }
    }
}

/// Mutably borrowing iterator over the elements of a list, front to back.
pub struct IterMut<'a, T, const N: usize> {
    current: slice::IterMut<'a, T>,
    next_node: Option<&'a mut Node<T, N>>,
    remaining: usize,
}

impl<'a, T, const N: usize> IterMut<'a, T, N> {
    pub(crate) fn new(head: &'a mut Node<T, N>, len: usize) -> Self {
        Self {
            current: Default::default(),
            next_node: Some(head),
            remaining: len,
        }
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            let Node { slots, next } = self.next_node.take()?;
            self.current = slots.as_mut_slice().iter_mut();
            self.next_node = next.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N> {}

impl<T, const N: usize> FusedIterator for IterMut<'_, T, N> {}

/// Owning iterator over the elements of a list, front to back.
///
/// Each node is released as soon as its last element has been yielded.
pub struct IntoIter<T, const N: usize> {
    current: slots::IntoIter<T, N>,
    rest: Option<Box<Node<T, N>>>,
    remaining: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(crate) fn new(head: Box<Node<T, N>>, len: usize) -> Self {
        Self {
            current: Slots::new().into_iter(),
            rest: Some(head),
            remaining: len,
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            let mut node = self.rest.take()?;
            self.rest = node.next.take();
            self.current = mem::replace(&mut node.slots, Slots::new()).into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

/// Iterator over the populated slice of each node, head first.
///
/// An empty list yields one empty slice: its head node.
pub struct Chunks<'a, T, const N: usize> {
    next_node: Option<&'a Node<T, N>>,
}

impl<'a, T, const N: usize> Chunks<'a, T, N> {
    pub(crate) fn new(head: &'a Node<T, N>) -> Self {
        Self {
            next_node: Some(head),
        }
    }
}

impl<'a, T, const N: usize> Iterator for Chunks<'a, T, N> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        let node = self.next_node?;
        self.next_node = node.next.as_deref();
        Some(node.slots.as_slice())
    }
}

impl<T, const N: usize> FusedIterator for Chunks<'_, T, N> {}
