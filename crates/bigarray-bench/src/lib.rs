//! Benchmark fixtures for paged big arrays.
//!
//! - [`scattered_indices`]: deterministic pseudo-random access pattern
//! - [`counting_array`]: an array pre-filled with its own indices

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bigarray::{ArrayError, BigIntArray};

/// Generate `count` indices in `0..size`, spread across pages.
///
/// Uses a fixed LCG so runs with the same seed touch the same slots.
pub fn scattered_indices(count: usize, size: u64, seed: u64) -> Vec<u64> {
    assert!(size > 0, "cannot index an empty array");
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) % size
        })
        .collect()
}

/// Build an array of `size` ints where each slot holds its index (truncated).
pub fn counting_array(size: u64) -> Result<BigIntArray, ArrayError> {
    let mut array = BigIntArray::new(size)?;
    for i in 0..size {
        array.set(i, i as i32)?;
    }
    Ok(array)
}
