//! Index translation and byte accounting for fixed-size pages.
//!
//! A logical index `i` lives in page `i >> shift` at offset `i & mask`,
//! where `1 << shift` is the page size in elements. Every access therefore
//! costs one shift, one mask and one page-table dereference regardless of
//! how large the array is.

use crate::config::PageConfig;
use crate::element::Element;
use crate::error::{ArrayError, ConfigError};

/// Largest logical size a big array accepts (`2^63 - 1`).
pub const MAX_SIZE: u64 = i64::MAX as u64;

/// Page layout for one element type: page size, shift and mask.
///
/// Immutable after construction. All methods are pure; bounds are the
/// caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageGeometry {
    page_shift: u32,
    page_mask: u64,
    bytes_per_element: u32,
}

impl PageGeometry {
    /// Build a geometry from a page size in bytes and an element size.
    pub fn new(page_size_bytes: usize, bytes_per_element: usize) -> Result<Self, ConfigError> {
        let page_size = PageConfig::new(page_size_bytes).validate_for(bytes_per_element)?;
        // Both sizes are powers of two, so their quotient is too.
        let page_size = page_size as u64;
        Ok(Self {
            page_shift: page_size.trailing_zeros(),
            page_mask: page_size - 1,
            bytes_per_element: bytes_per_element as u32,
        })
    }

    /// Geometry for element type `T` under `config`.
    pub fn for_element<T: Element>(config: &PageConfig) -> Result<Self, ConfigError> {
        Self::new(config.page_size_bytes, T::BYTES)
    }

    /// Number of elements per page.
    #[inline]
    pub fn page_size(&self) -> u64 {
        1 << self.page_shift
    }

    /// Size of one element in bytes.
    #[inline]
    pub fn bytes_per_element(&self) -> u32 {
        self.bytes_per_element
    }

    /// Page holding logical index `index`.
    #[inline]
    pub fn page_index(&self, index: u64) -> u64 {
        index >> self.page_shift
    }

    /// Offset of logical index `index` within its page.
    #[inline]
    pub fn index_in_page(&self, index: u64) -> u32 {
        (index & self.page_mask) as u32
    }

    /// Pages needed to back `size` elements: `ceil(size / page_size)`.
    #[inline]
    pub fn num_pages(&self, size: u64) -> u64 {
        if size == 0 {
            0
        } else {
            ((size - 1) >> self.page_shift) + 1
        }
    }

    /// Payload bytes of the pages backing `size` elements.
    ///
    /// No table or allocator overhead is included.
    pub fn estimate_bytes(&self, size: u64) -> u64 {
        self.num_pages(size)
            .saturating_mul(self.page_size())
            .saturating_mul(u64::from(self.bytes_per_element))
    }

    /// Bytes in one page.
    #[inline]
    pub fn page_bytes(&self) -> u64 {
        self.page_size() * u64::from(self.bytes_per_element)
    }

    /// Page count for `size` as a native slot count.
    ///
    /// Fails with [`ArrayError::CapacityOverflow`] when `size` exceeds
    /// [`MAX_SIZE`] or its page count does not fit in `usize`.
    pub fn pages_for_len(&self, size: u64) -> Result<usize, ArrayError> {
        if size > MAX_SIZE {
            return Err(ArrayError::CapacityOverflow {
                requested_size: size,
            });
        }
        usize::try_from(self.num_pages(size)).map_err(|_| ArrayError::CapacityOverflow {
            requested_size: size,
        })
    }
}
