//! Unroll: a cache-conscious unrolled linked list.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the unroll sub-crates. For most users, adding `unroll` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use unroll::prelude::*;
//!
//! // Node capacity calculated for i32 elements.
//! let mut list: unrolled!(i32) = UnrolledList::new();
//! for i in 0..100 {
//!     list.push_back(i);
//! }
//! assert_eq!(list.len(), 100);
//! assert_eq!(list.at(99), Ok(&99));
//! assert_eq!(list.at(100), Err(ContainerError::out_of_range(100, 100)));
//!
//! list.push_front(-1);
//! assert_eq!(list.find(&-1), 0);
//! assert_eq!(list.pop_back(), Ok(99));
//!
//! // The same list through the Stack contract.
//! fn drain<S: Stack<i32>>(stack: &mut S) -> Vec<i32> {
//!     let mut out = Vec::new();
//!     while let Ok(value) = stack.pop() {
//!         out.push(value);
//!     }
//!     out
//! }
//! assert_eq!(drain(&mut list).len(), 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Container contracts and errors (`unroll-core`).
///
/// Contains the [`types::List`] and [`types::Stack`] traits and
/// [`types::ContainerError`].
pub use unroll_core as types;

/// The unrolled list (`unroll-list`).
///
/// [`list::UnrolledList`] with its iterators, the capacity calculation in
/// [`list::capacity`] and the node geometry in [`list::NodeLayout`].
pub use unroll_list as list;

pub use unroll_list::unrolled;

/// Common imports for typical usage.
///
/// ```rust
/// use unroll::prelude::*;
/// ```
pub mod prelude {
    // Contracts and errors
    pub use unroll_core::{ContainerError, List, Stack};

    // The list, its capacity calculation and layout
    pub use unroll_list::{node_capacity, unrolled, NodeLayout, UnrolledList};
}
