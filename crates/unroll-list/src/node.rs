//! Fixed-capacity chain nodes.
//!
//! A [`Node`] owns a [`Slots`] block and, optionally, the next node in the
//! chain. Chain operations are written as loops over the links so stack
//! usage stays constant however long the chain grows.
//!
//! Every operation here leaves the chain compact: all nodes except the
//! tail are full, and the tail is empty only when it is also the head.

use tracing::trace;

use crate::slots::Slots;

/// One block of the chain.
pub(crate) struct Node<T, const N: usize> {
    pub(crate) slots: Slots<T, N>,
    pub(crate) next: Option<Box<Node<T, N>>>,
}

/// An element taken from the end of a node, and whether that left the
/// node with no elements.
///
/// The owner of the node uses `drained` to decide whether to drop it.
pub(crate) struct Removal<T> {
    pub(crate) value: T,
    pub(crate) drained: bool,
}

impl<T, const N: usize> Node<T, N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Slots::new(),
            next: None,
        }
    }

    fn holding(value: T) -> Self {
        let mut node = Self::new();
        if node.slots.push(value).is_err() {
            unreachable!("a fresh node has room for one element");
        }
        node
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Last node of the chain rooted here.
    fn tail_mut(&mut self) -> &mut Self {
        let mut node = self;
        while node.next.is_some() {
            node = node.next.as_deref_mut().expect("successor checked above");
        }
        node
    }

    /// Node whose successor is the tail. Requires `self.next` to be set.
    fn tail_parent_mut(&mut self) -> &mut Self {
        let mut node = self;
        while node.next.as_ref().is_some_and(|next| next.next.is_some()) {
            node = node.next.as_deref_mut().expect("successor checked above");
        }
        node
    }

    /// Node holding logical position `index`, and the offset within it.
    ///
    /// Subtracts each node's actual count, so partially filled nodes are
    /// skipped correctly.
    pub(crate) fn locate(&self, mut index: usize) -> Option<(&Self, usize)> {
        let mut node = self;
        while index >= node.len() {
            index -= node.len();
            node = node.next.as_deref()?;
        }
        Some((node, index))
    }

    pub(crate) fn locate_mut(&mut self, mut index: usize) -> Option<(&mut Self, usize)> {
        let mut node = self;
        while index >= node.len() {
            index -= node.len();
            node = node.next.as_deref_mut()?;
        }
        Some((node, index))
    }

    /// Append `value` at the end of the chain.
    ///
    /// Returns `true` when a new tail node had to be allocated.
    pub(crate) fn push_back(&mut self, value: T) -> bool {
        let tail = self.tail_mut();
        match tail.slots.push(value) {
            Ok(()) => false,
            Err(value) => {
                tail.next = Some(Box::new(Self::holding(value)));
                true
            }
        }
    }

    /// Append every value from `values`, walking to the tail only once.
    ///
    /// `len` is raised as each value lands, so it matches the chain even if
    /// `values` panics partway through.
    pub(crate) fn extend<I: IntoIterator<Item = T>>(&mut self, values: I, len: &mut usize) {
        let mut tail = self.tail_mut();
        for value in values {
            if let Err(value) = tail.slots.push(value) {
                tail = &mut **tail.next.insert(Box::new(Self::holding(value)));
            }
            *len += 1;
        }
    }

    fn take_last(&mut self) -> Option<Removal<T>> {
        let value = self.slots.pop()?;
        Some(Removal {
            value,
            drained: self.slots.is_empty(),
        })
    }

    /// Remove the last element of the chain rooted here.
    ///
    /// A tail drained by the removal is dropped by its parent. The root
    /// itself is never released; its `drained` flag tells the caller the
    /// whole chain is now empty.
    pub(crate) fn pop_back(&mut self) -> Option<Removal<T>> {
        if self.next.is_none() {
            return self.take_last();
        }
        let parent = self.tail_parent_mut();
        let tail = parent
            .next
            .as_deref_mut()
            .expect("tail parent has a successor");
        let removal = tail.take_last()?;
        if removal.drained {
            parent.next = None;
            trace!(capacity = N, "released drained tail node");
        }
        Some(Removal {
            value: removal.value,
            drained: false,
        })
    }

    /// Insert `value` at logical position `index`, shifting later elements
    /// toward the tail. Positions past the end append.
    ///
    /// Returns `true` when a new tail node had to be allocated.
    pub(crate) fn insert(&mut self, index: usize, value: T) -> bool {
        let Some((mut node, offset)) = self.locate_mut(index) else {
            return self.push_back(value);
        };
        let mut carry = node.slots.insert(offset, value);
        while let Some(overflow) = carry {
            if node.next.is_none() {
                node.next = Some(Box::new(Self::holding(overflow)));
                return true;
            }
            node = node.next.as_deref_mut().expect("successor checked above");
            carry = node.slots.insert(0, overflow);
        }
        false
    }

    /// Remove the element at logical position `index`, pulling later
    /// elements back so every non-tail node stays full.
    pub(crate) fn erase(&mut self, index: usize) -> Option<T> {
        let (node, offset) = self.locate(index)?;
        if node.next.is_none() && offset + 1 == node.len() {
            return self.pop_back().map(|removal| removal.value);
        }

        let (mut node, offset) = self.locate_mut(index)?;
        let removed = node.slots.remove(offset)?;
        loop {
            let successor_len = match node.next.as_deref() {
                Some(next) => next.len(),
                None => break,
            };
            if successor_len <= 1 {
                let mut successor = node.next.take().expect("successor checked above");
                if let Some(first) = successor.slots.pop() {
                    Self::refill(&mut node.slots, first);
                }
                node.next = successor.next.take();
                trace!(capacity = N, "released drained node");
                break;
            }
            let next = node.next.as_deref_mut().expect("successor checked above");
            let first = next
                .slots
                .remove(0)
                .expect("successor holds more than one element");
            Self::refill(&mut node.slots, first);
            node = next;
        }
        Some(removed)
    }

    fn refill(slots: &mut Slots<T, N>, value: T) {
        if slots.push(value).is_err() {
            unreachable!("a node that just gave up an element has a free slot");
        }
    }

    /// Number of nodes in the chain rooted here.
    pub(crate) fn chain_len(&self) -> usize {
        let mut count = 1;
        let mut node = self;
        while let Some(next) = node.next.as_deref() {
            count += 1;
            node = next;
        }
        count
    }

    /// Total populated slots across the chain rooted here.
    pub(crate) fn element_count(&self) -> usize {
        let mut total = self.len();
        let mut node = self;
        while let Some(next) = node.next.as_deref() {
            total += next.len();
            node = next;
        }
        total
    }

    /// Whether every linked node is full and no empty node trails the root.
    pub(crate) fn is_compact(&self) -> bool {
        let mut node = self;
        while let Some(next) = node.next.as_deref() {
            if !node.slots.is_full() || next.slots.is_empty() {
                return false;
            }
            node = next;
        }
        true
    }
}

impl<T: Clone, const N: usize> Node<T, N> {
    /// Independent copy of the chain rooted here, node by node.
    pub(crate) fn deep_clone(&self) -> Box<Self> {
        let mut root = Box::new(Self {
            slots: self.slots.clone(),
            next: None,
        });
        let mut tail = &mut *root;
        let mut source = self.next.as_deref();
        while let Some(node) = source {
            tail = &mut **tail.next.insert(Box::new(Self {
                slots: node.slots.clone(),
                next: None,
            }));
            source = node.next.as_deref();
        }
        root
    }
}

impl<T, const N: usize> Drop for Node<T, N> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop would use one stack
        // frame per node.
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain<const N: usize>(values: impl IntoIterator<Item = i32>) -> Node<i32, N> {
        let mut root = Node::new();
        let mut len = 0;
        root.extend(values, &mut len);
        root
    }

    fn shape<const N: usize>(root: &Node<i32, N>) -> Vec<Vec<i32>> {
        let mut out = vec![root.slots.as_slice().to_vec()];
        let mut node = root;
        while let Some(next) = node.next.as_deref() {
            out.push(next.slots.as_slice().to_vec());
            node = next;
        }
        out
    }

    #[test]
    fn push_back_fills_before_linking() {
        let mut root: Node<i32, 2> = Node::new();
        assert!(!root.push_back(1));
        assert!(!root.push_back(2));
        assert!(root.push_back(3));
        assert!(!root.push_back(4));
        assert_eq!(shape(&root), vec![vec![1, 2], vec![3, 4]]);
        assert!(root.is_compact());
    }

    #[test]
    fn extend_matches_repeated_push_back() {
        let root = chain::<3>(0..8);
        let mut pushed: Node<i32, 3> = Node::new();
        for v in 0..8 {
            pushed.push_back(v);
        }
        assert_eq!(shape(&root), shape(&pushed));
        assert_eq!(root.chain_len(), 3);
        assert_eq!(root.element_count(), 8);
    }

    #[test]
    fn pop_back_releases_drained_tail() {
        let mut root = chain::<2>(0..3);
        assert_eq!(root.chain_len(), 2);
        let removal = root.pop_back().unwrap();
        assert_eq!(removal.value, 2);
        assert!(!removal.drained);
        assert_eq!(root.chain_len(), 1);
        assert!(root.is_compact());
    }

    #[test]
    fn pop_back_reports_drained_root() {
        let mut root = chain::<2>([7]);
        let removal = root.pop_back().unwrap();
        assert_eq!(removal.value, 7);
        assert!(removal.drained);
        assert!(root.pop_back().is_none());
    }

    #[test]
    fn locate_walks_actual_counts() {
        let root = chain::<3>(0..7);
        let (node, offset) = root.locate(4).unwrap();
        assert_eq!(node.slots.as_slice()[offset], 4);
        let (node, offset) = root.locate(6).unwrap();
        assert_eq!(node.slots.as_slice()[offset], 6);
        assert!(root.locate(7).is_none());
    }

    #[test]
    fn locate_skips_partially_filled_root() {
        // A hand-built chain whose root is not full: a capacity-based walk
        // would look for index 1 in the root and read past its count.
        let mut root: Node<i32, 3> = Node::new();
        root.slots.push(10).unwrap();
        let mut tail: Node<i32, 3> = Node::new();
        tail.slots.push(20).unwrap();
        tail.slots.push(30).unwrap();
        root.next = Some(Box::new(tail));

        let (node, offset) = root.locate(1).unwrap();
        assert_eq!(node.slots.as_slice()[offset], 20);
        let (node, offset) = root.locate(2).unwrap();
        assert_eq!(node.slots.as_slice()[offset], 30);
        assert!(!root.is_compact());
    }

    #[test]
    fn insert_cascades_overflow_to_new_tail() {
        let mut root = chain::<2>(0..4);
        assert!(root.insert(1, 9));
        assert_eq!(shape(&root), vec![vec![0, 9], vec![1, 2], vec![3]]);
        assert!(root.is_compact());
    }

    #[test]
    fn insert_stops_at_partial_tail() {
        let mut root = chain::<3>(0..4);
        assert!(!root.insert(0, 9));
        assert_eq!(shape(&root), vec![vec![9, 0, 1], vec![2, 3]]);
    }

    #[test]
    fn insert_past_end_appends() {
        let mut root = chain::<2>(0..2);
        assert!(root.insert(2, 5));
        assert_eq!(shape(&root), vec![vec![0, 1], vec![5]]);
    }

    #[test]
    fn erase_pulls_elements_forward() {
        let mut root = chain::<3>(0..7);
        assert_eq!(root.erase(1), Some(1));
        assert_eq!(shape(&root), vec![vec![0, 2, 3], vec![4, 5, 6]]);
        assert!(root.is_compact());
    }

    #[test]
    fn erase_single_slot_nodes_splices_chain() {
        let mut root = chain::<1>(0..4);
        assert_eq!(root.erase(0), Some(0));
        assert_eq!(shape(&root), vec![vec![1], vec![2], vec![3]]);
        assert_eq!(root.erase(1), Some(2));
        assert_eq!(shape(&root), vec![vec![1], vec![3]]);
        assert!(root.is_compact());
    }

    #[test]
    fn erase_last_element_releases_tail() {
        let mut root = chain::<2>(0..3);
        assert_eq!(root.erase(2), Some(2));
        assert_eq!(root.chain_len(), 1);
        assert_eq!(root.erase(5), None);
    }

    #[test]
    fn deep_clone_copies_every_node() {
        let root = chain::<2>(0..5);
        let mut copy = root.deep_clone();
        copy.push_back(5);
        copy.slots.as_mut_slice()[0] = 100;
        assert_eq!(shape(&root), vec![vec![0, 1], vec![2, 3], vec![4]]);
        assert_eq!(shape(&*copy), vec![vec![100, 1], vec![2, 3], vec![4, 5]]);
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        let root = chain::<1>(0..200_000);
        assert_eq!(root.chain_len(), 200_000);
        assert_eq!(root.element_count(), 200_000);
        drop(root);
    }
}
