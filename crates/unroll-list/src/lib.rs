//! Cache-conscious unrolled linked list.
//!
//! An [`UnrolledList`] is a singly linked chain of nodes, each holding a
//! small inline array of elements. The array length is chosen by
//! [`node_capacity`] so that a node (elements, slot counter and successor
//! link) fills as few 64-byte cache lines as possible, which keeps
//! traversal close to `Vec` speed while growth never reallocates.
//!
//! # Architecture
//!
//! ```text
//! UnrolledList<T, N>
//! ├── len (tracked total, equal to the sum of node counts)
//! └── head: Box<Node>
//!     ├── Slots<T, N> (inline [MaybeUninit<T>; N] + count)
//!     └── next: Option<Box<Node>> ─► Node ─► ... ─► tail
//! ```
//!
//! Every node except the tail is full, and the tail is only empty when
//! the list is. The head node is always allocated.
//!
//! # Capacity
//!
//! The capacity is a const generic. [`unrolled!`] spells the list type
//! with the calculated capacity for an element type:
//!
//! ```
//! use unroll_list::{node_capacity, unrolled, UnrolledList};
//!
//! let mut list: unrolled!(u64) = UnrolledList::new();
//! list.extend(0..10);
//! assert_eq!(list.len(), 10);
//! assert_eq!(UnrolledList::<u64, { node_capacity::<u64>() }>::NODE_CAPACITY, 6);
//! ```
//!
//! # Safety
//!
//! Uninitialised slot memory is confined to the private `slots` module;
//! the rest of the crate is safe code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// `assert!` with the `strict_assertions` feature, `debug_assert!` otherwise.
macro_rules! strict_assert {
    ($($arg:tt)*) => {
        if cfg!(feature = "strict_assertions") {
            assert!($($arg)*);
        } else {
            debug_assert!($($arg)*);
        }
    };
}

pub mod capacity;
pub mod config;
pub mod iter;
pub mod list;
mod node;
mod slots;

pub use capacity::{efficient_amount, node_capacity, CACHE_LINE_SIZE};
pub use config::NodeLayout;
pub use iter::{Chunks, IntoIter, Iter, IterMut};
pub use list::UnrolledList;
pub use unroll_core::{ContainerError, List, Stack};

/// The [`UnrolledList`] type for an element type, with the node capacity
/// calculated for that type.
///
/// `unrolled!(T)` expands to `UnrolledList<T, { node_capacity::<T>() }>`.
#[macro_export]
macro_rules! unrolled {
    ($t:ty) => {
        $crate::UnrolledList<$t, { $crate::node_capacity::<$t>() }>
    };
}
