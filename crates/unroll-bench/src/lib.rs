//! Benchmark workloads for the unroll collections.
//!
//! - [`Fitted`]: the unrolled list at its calculated node capacity
//! - [`filled`]: a list holding `0..len`
//! - [`probe_indices`]: deterministic pseudo-random positions via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use unroll_list::unrolled;

/// Element type used by every workload.
pub type Element = u64;

/// Unrolled list of [`Element`] at the calculated node capacity.
pub type Fitted = unrolled!(Element);

/// Workload sizes swept by the benchmarks.
pub const SIZES: [usize; 3] = [100, 10_000, 100_000];

/// A [`Fitted`] list holding `0..len`.
pub fn filled(len: usize) -> Fitted {
    (0..len as Element).collect()
}

/// `count` positions in `0..len`, spread deterministically from `seed`.
///
/// # Panics
///
/// Panics if `len == 0`.
pub fn probe_indices(len: usize, count: usize, seed: u64) -> Vec<usize> {
    assert!(len > 0, "cannot probe an empty sequence");
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % len as u64) as usize
        })
        .collect()
}
