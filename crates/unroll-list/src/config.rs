//! Node geometry description.

use std::mem::{align_of, size_of};

use crate::capacity::{node_capacity, required_lines, CACHE_LINE_SIZE, NODE_HEADER_BYTES};
use crate::node::Node;

/// Memory geometry of a single chain node.
///
/// Produced from an element type and a capacity; all values are fixed at
/// compile time for a given `UnrolledList<T, N>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeLayout {
    /// Size of one element in bytes.
    pub element_bytes: usize,
    /// Bytes spent on the slot counter and successor link.
    pub header_bytes: usize,
    /// Number of element slots per node.
    pub capacity: usize,
    /// Size of a whole node in bytes, including alignment padding.
    pub node_bytes: usize,
    /// Number of cache lines a node spans.
    pub lines: usize,
}

impl NodeLayout {
    /// Layout of a node for `T` at the calculated [`node_capacity`].
    pub const fn of<T>() -> Self {
        let capacity = node_capacity::<T>();
        let align = if align_of::<T>() > align_of::<usize>() {
            align_of::<T>()
        } else {
            align_of::<usize>()
        };
        let raw = NODE_HEADER_BYTES + capacity * size_of::<T>();
        Self::describe(size_of::<T>(), capacity, raw.div_ceil(align) * align)
    }

    /// Layout of the node actually used by `UnrolledList<T, N>`.
    pub const fn for_capacity<T, const N: usize>() -> Self {
        Self::describe(size_of::<T>(), N, size_of::<Node<T, N>>())
    }

    const fn describe(element_bytes: usize, capacity: usize, node_bytes: usize) -> Self {
        Self {
            element_bytes,
            header_bytes: NODE_HEADER_BYTES,
            capacity,
            node_bytes,
            lines: node_bytes.div_ceil(CACHE_LINE_SIZE),
        }
    }

    /// Whether the node occupies no more lines than the capacity calculation
    /// budgeted for one element of this size.
    pub const fn fits_lines(&self) -> bool {
        self.lines <= required_lines(self.element_bytes, self.header_bytes, 1)
    }

    /// Unused bytes between the end of the node and its last cache line.
    pub const fn slack_bytes(&self) -> usize {
        self.lines * CACHE_LINE_SIZE - self.node_bytes
    }
}
