//! The [`UnrolledList`] container.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use tracing::{debug, trace};
use unroll_core::{ContainerError, List, Stack};

use crate::config::NodeLayout;
use crate::iter::{Chunks, IntoIter, Iter, IterMut};
use crate::node::Node;

/// A sequence stored as a chain of fixed-capacity nodes.
///
/// `N` is the number of elements per node; [`unrolled!`](crate::unrolled)
/// picks the cache-line fitted value for an element type. Operations at
/// the back walk the chain to the tail (O(len / N)); operations at the
/// front or in the middle shift later elements across nodes (O(len)).
///
/// The list tracks its length separately from the chain, so [`len`]
/// and [`is_empty`] are O(1).
///
/// [`len`]: UnrolledList::len
/// [`is_empty`]: UnrolledList::is_empty
pub struct UnrolledList<T, const N: usize> {
    head: Box<Node<T, N>>,
    len: usize,
}

impl<T, const N: usize> UnrolledList<T, N> {
    const CAPACITY_IS_NONZERO: () = assert!(N > 0, "unrolled list nodes need at least one slot");

    /// Elements held by each node.
    pub const NODE_CAPACITY: usize = N;

    /// Create an empty list with a single, empty head node.
    pub fn new() -> Self {
        let () = Self::CAPACITY_IS_NONZERO;
        Self {
            head: Box::new(Node::new()),
            len: 0,
        }
    }

    /// Memory geometry of this list's nodes.
    pub const fn layout() -> NodeLayout {
        NodeLayout::for_capacity::<T, N>()
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes, including the always-present head.
    pub fn node_count(&self) -> usize {
        self.head.chain_len()
    }

    /// Append `value` after the last element.
    pub fn push_back(&mut self, value: T) {
        if self.head.push_back(value) {
            trace!(len = self.len + 1, capacity = N, "chain grew by one node");
        }
        self.len += 1;
        self.check_chain();
    }

    /// Remove and return the last element.
    ///
    /// Returns [`ContainerError::Empty`] if the list holds nothing.
    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        if self.len == 0 {
            return Err(ContainerError::Empty);
        }
        let removal = self
            .head
            .pop_back()
            .expect("a non-empty list has a populated chain");
        self.len -= 1;
        self.check_chain();
        Ok(removal.value)
    }

    /// Insert `value` before the first element.
    pub fn push_front(&mut self, value: T) {
        self.insert_within(0, value);
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        if self.len == 0 {
            return Err(ContainerError::Empty);
        }
        self.erase(0)
    }

    /// Insert `value` at logical position `index`; `index == len` appends.
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] when `index > len`,
    /// leaving the list unchanged.
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), ContainerError> {
        if index > self.len {
            return Err(ContainerError::out_of_range(index, self.len));
        }
        self.insert_within(index, value);
        Ok(())
    }

    fn insert_within(&mut self, index: usize, value: T) {
        if self.head.insert(index, value) {
            trace!(len = self.len + 1, capacity = N, "chain grew by one node");
        }
        self.len += 1;
        self.check_chain();
    }

    /// Remove and return the element at `index`.
    pub fn erase(&mut self, index: usize) -> Result<T, ContainerError> {
        if index >= self.len {
            return Err(ContainerError::out_of_range(index, self.len));
        }
        let value = self
            .head
            .erase(index)
            .expect("every index below len is populated");
        self.len -= 1;
        self.check_chain();
        Ok(value)
    }

    /// Borrow the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        if index >= self.len {
            return Err(ContainerError::out_of_range(index, self.len));
        }
        let (node, offset) = self
            .head
            .locate(index)
            .expect("every index below len is populated");
        Ok(&node.slots.as_slice()[offset])
    }

    /// Mutably borrow the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        if index >= self.len {
            return Err(ContainerError::out_of_range(index, self.len));
        }
        let (node, offset) = self
            .head
            .locate_mut(index)
            .expect("every index below len is populated");
        Ok(&mut node.slots.as_mut_slice()[offset])
    }

    /// Borrow the first element.
    pub fn front(&self) -> Result<&T, ContainerError> {
        self.head.slots.as_slice().first().ok_or(ContainerError::Empty)
    }

    /// Borrow the last element.
    pub fn back(&self) -> Result<&T, ContainerError> {
        match self.len {
            0 => Err(ContainerError::Empty),
            len => self.at(len - 1),
        }
    }

    /// Logical index of the first element equal to `value`, or [`len`]
    /// when there is none.
    ///
    /// [`len`]: UnrolledList::len
    pub fn find(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter()
            .position(|candidate| candidate == value)
            .unwrap_or(self.len)
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value) != self.len
    }

    /// Remove every element, releasing the whole chain and starting over
    /// with a fresh head node.
    pub fn clear(&mut self) {
        if self.len > 0 {
            debug!(len = self.len, nodes = self.node_count(), "clearing list");
        }
        self.head = Box::new(Node::new());
        self.len = 0;
    }

    /// Iterate over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(&self.head, self.len)
    }

    /// Iterate mutably over the elements front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut::new(&mut self.head, self.len)
    }

    /// Iterate over the populated slice of every node, head first.
    pub fn chunks(&self) -> Chunks<'_, T, N> {
        Chunks::new(&self.head)
    }

    fn check_chain(&self) {
        strict_assert!(
            self.head.is_compact(),
            "chain holds a non-full interior node or an empty tail"
        );
        strict_assert!(
            self.head.element_count() == self.len,
            "tracked len {} disagrees with the chain",
            self.len
        );
    }
}

impl<T, const N: usize> Default for UnrolledList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for UnrolledList<T, N> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.deep_clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for UnrolledList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<UnrolledList<T, M>>
    for UnrolledList<T, N>
{
    fn eq(&self, other: &UnrolledList<T, M>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for UnrolledList<T, N> {}

impl<T: Hash, const N: usize> Hash for UnrolledList<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T, const N: usize> Extend<T> for UnrolledList<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let before = self.len;
        self.head.extend(values, &mut self.len);
        trace!(appended = self.len - before, len = self.len, "extended chain");
        self.check_chain();
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for UnrolledList<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, values: I) {
        self.extend(values.into_iter().copied());
    }
}

impl<T, const N: usize> FromIterator<T> for UnrolledList<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::new();
        list.extend(values);
        list
    }
}

impl<T, const N: usize> IntoIterator for UnrolledList<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> IntoIter<T, N> {
        IntoIter::new(self.head, self.len)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a UnrolledList<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Iter<'a, T, N> {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut UnrolledList<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> IterMut<'a, T, N> {
        self.iter_mut()
    }
}

impl<T, const N: usize> Index<usize> for UnrolledList<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for UnrolledList<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize> Stack<T> for UnrolledList<T, N> {
    fn push(&mut self, value: T) {
        UnrolledList::push_back(self, value);
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        UnrolledList::pop_back(self)
    }

    fn top(&self) -> Result<&T, ContainerError> {
        self.back()
    }

    fn size(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        UnrolledList::clear(self);
    }
}

impl<T, const N: usize> List<T> for UnrolledList<T, N> {
    fn push_back(&mut self, value: T) {
        UnrolledList::push_back(self, value);
    }

    fn push_front(&mut self, value: T) {
        UnrolledList::push_front(self, value);
    }

    fn pop_back(&mut self) -> Result<T, ContainerError> {
        UnrolledList::pop_back(self)
    }

    fn pop_front(&mut self) -> Result<T, ContainerError> {
        UnrolledList::pop_front(self)
    }

    fn at(&self, index: usize) -> Result<&T, ContainerError> {
        UnrolledList::at(self, index)
    }

    fn find(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        UnrolledList::find(self, value)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        UnrolledList::contains(self, value)
    }

    fn insert(&mut self, value: T, index: usize) -> Result<(), ContainerError> {
        UnrolledList::insert(self, value, index)
    }

    fn erase(&mut self, index: usize) -> Result<T, ContainerError> {
        UnrolledList::erase(self, index)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        UnrolledList::clear(self);
    }
}
