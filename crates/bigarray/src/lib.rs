//! Paged arrays indexed by `u64`.
//!
//! [`BigArray<T>`] stores a logically contiguous sequence in fixed-size
//! pages (16 KiB by default), so it can address far more elements than one
//! allocation allows and grows incrementally instead of reallocating its
//! contents.
//!
//! # Architecture
//!
//! ```text
//! BigArray<T>
//! ├── PageGeometry (index -> (page, offset), byte accounting)
//! ├── size: u64
//! └── PageTable<T> → [Option<Page<T>>; oversized]
//!     ├── Some(Page)  slots 0..num_pages(size), each Box<[T]> of page_size
//!     └── None        spare slots kept for amortised growth
//! ```
//!
//! # Example
//!
//! ```
//! use bigarray::BigIntArray;
//!
//! let mut counts = BigIntArray::new(0)?;
//! counts.resize(40_000)?;
//! counts.set(39_999, 99)?;
//! assert_eq!(counts.increment(39_999, 1)?, 100);
//! assert_eq!(counts.get(20_000)?, 0);
//! # Ok::<(), bigarray::ArrayError>(())
//! ```
//!
//! Arrays are single-owner and unsynchronised.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod iter;
pub mod page;
pub mod table;

pub use array::BigArray;
pub use bigarray_core::{ArrayError, ConfigError, Element, PageConfig, PageGeometry, MAX_SIZE};
pub use iter::Iter;

/// Paged array of bytes.
pub type BigByteArray = BigArray<i8>;
/// Paged array of 32-bit integers.
pub type BigIntArray = BigArray<i32>;
/// Paged array of 64-bit integers.
pub type BigLongArray = BigArray<i64>;
/// Paged array of 32-bit floats.
pub type BigFloatArray = BigArray<f32>;
/// Paged array of 64-bit floats.
pub type BigDoubleArray = BigArray<f64>;
