//! Node capacity calculation.
//!
//! A node holds a fixed array of elements plus a small header (its element
//! count and the link to its successor). The capacity is the largest element
//! count for which the whole node fits in the fewest cache lines that can
//! hold at least one element.

use std::mem::size_of;

/// Assumed cache line size in bytes.
pub const CACHE_LINE_SIZE: usize = 64;

/// Size of a node's successor link. `Option<Box<_>>` is pointer-sized.
pub const LINK_BYTES: usize = size_of::<Option<Box<()>>>();

/// Size of a node's populated-slot counter.
pub const COUNT_BYTES: usize = size_of::<usize>();

/// Bytes of every node spent on bookkeeping rather than elements.
pub const NODE_HEADER_BYTES: usize = LINK_BYTES + COUNT_BYTES;

/// Number of cache lines needed before one `element_size` element fits
/// beside `link_size` bytes of header, starting the search at `lines`.
///
/// Zero-sized elements are treated as one byte wide. The search always
/// terminates because the line budget grows while `element_size` is fixed.
pub const fn required_lines(element_size: usize, link_size: usize, lines: usize) -> usize {
    let element_size = if element_size == 0 { 1 } else { element_size };
    let mut lines = if lines == 0 { 1 } else { lines };
    while element_size > (CACHE_LINE_SIZE * lines).saturating_sub(link_size) {
        lines += 1;
    }
    lines
}

/// Maximum number of `element_size` elements that fit, together with
/// `link_size` header bytes, in the smallest usable number of cache lines
/// (searching upward from `lines`).
///
/// ```
/// use unroll_list::capacity::efficient_amount;
///
/// // 8-byte elements beside a 16-byte header: (64 - 16) / 8.
/// assert_eq!(efficient_amount(8, 16, 1), 6);
/// // 100-byte elements need a second line: (128 - 16) / 100.
/// assert_eq!(efficient_amount(100, 16, 1), 1);
/// ```
pub const fn efficient_amount(element_size: usize, link_size: usize, lines: usize) -> usize {
    let lines = required_lines(element_size, link_size, lines);
    let element_size = if element_size == 0 { 1 } else { element_size };
    (CACHE_LINE_SIZE * lines - link_size) / element_size
}

/// Node capacity for element type `T`, evaluated at compile time.
pub const fn node_capacity<T>() -> usize {
    efficient_amount(size_of::<T>(), NODE_HEADER_BYTES, 1)
}
