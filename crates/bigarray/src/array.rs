//! [`BigArray`]: a `u64`-indexed array stored in fixed-size pages.

use std::fmt;
use std::ops::Range;

use bigarray_core::{ArrayError, Element, PageConfig, PageGeometry};
use log::{debug, warn};

use crate::iter::Iter;
use crate::table::PageTable;

/// A logically contiguous array of `T` addressed by `u64` indices.
///
/// Storage is a table of equal-sized pages (16 KiB each by default), so the
/// array can hold more elements than a single allocation allows and grows
/// one page at a time instead of reallocating its contents. Every access is
/// a shift, a mask and one table lookup.
///
/// Not synchronised: callers sharing an array across threads must lock it
/// themselves. [`increment`](Self::increment) in particular is a plain
/// read-modify-write.
#[derive(Clone)]
pub struct BigArray<T> {
    geometry: PageGeometry,
    size: u64,
    pages: PageTable<T>,
}

impl<T: Element> BigArray<T> {
    /// Create an array of `size` zeroed elements with the default page size.
    ///
    /// All pages needed for `size` are allocated up front.
    pub fn new(size: u64) -> Result<Self, ArrayError> {
        Self::with_config(size, &PageConfig::default())
    }

    /// Create an array of `size` zeroed elements with a custom page layout.
    pub fn with_config(size: u64, config: &PageConfig) -> Result<Self, ArrayError> {
        let geometry = PageGeometry::for_element::<T>(config)?;
        let count = geometry.pages_for_len(size)?;
        let pages = PageTable::with_pages(count, geometry.page_size() as usize)
            .inspect_err(|err| warn!("big array construction failed for size {size}: {err}"))?;
        debug!(
            "created big array: size={size}, pages={count}, page_size={}",
            geometry.page_size()
        );
        Ok(Self {
            geometry,
            size,
            pages,
        })
    }

    /// Logical length.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Elements per page.
    #[inline]
    pub fn page_size(&self) -> u64 {
        self.geometry.page_size()
    }

    /// Bytes per element; `4` for `i32`.
    #[inline]
    pub fn num_bytes_per_element() -> u32 {
        T::BYTES as u32
    }

    /// Value at `index`.
    #[inline]
    pub fn get(&self, index: u64) -> Result<T, ArrayError> {
        let (page, offset) = self.locate(index)?;
        Ok(self.pages.page(page).get(offset))
    }

    /// Store `value` at `index` and return the value it replaced.
    #[inline]
    pub fn set(&mut self, index: u64, value: T) -> Result<T, ArrayError> {
        let (page, offset) = self.locate(index)?;
        Ok(self.pages.page_mut(page).replace(offset, value))
    }

    /// Add `delta` to the value at `index` and return the new value.
    ///
    /// Integer types wrap on overflow.
    #[inline]
    pub fn increment(&mut self, index: u64, delta: T) -> Result<T, ArrayError> {
        let (page, offset) = self.locate(index)?;
        Ok(self.pages.page_mut(page).add(offset, delta))
    }

    /// Set every element in `range` to `value`.
    pub fn fill(&mut self, range: Range<u64>, value: T) -> Result<(), ArrayError> {
        let Range { start, end } = range;
        if start > end {
            return Err(ArrayError::InvalidRange { start, end });
        }
        if end > self.size {
            return Err(ArrayError::IndexOutOfRange {
                index: end - 1,
                size: self.size,
            });
        }

        self.fill_pages(start, end, value);
        Ok(())
    }

    /// Fill `start..end` page slice by page slice. Bounds are not checked
    /// against `size`, only against the allocated pages.
    fn fill_pages(&mut self, start: u64, end: u64, value: T) {
        let page_size = self.geometry.page_size();
        let mut index = start;
        while index < end {
            let page = self.geometry.page_index(index) as usize;
            let offset = self.geometry.index_in_page(index) as usize;
            let len = (page_size - offset as u64).min(end - index) as usize;
            self.pages.page_mut(page).as_mut_slice()[offset..offset + len].fill(value);
            index += len as u64;
        }
    }

    /// Change the logical length to `new_size`.
    ///
    /// Values below `min(size, new_size)` are preserved; growing exposes
    /// zeroed elements, including any cut off by an earlier shrink. Growing
    /// allocates exactly the missing pages (the slot table itself is
    /// oversized to amortise later grows); shrinking releases pages past the
    /// new page count and clears the cut-off tail of the last kept page.
    ///
    /// On error nothing changes: size, pages and contents are as before.
    pub fn resize(&mut self, new_size: u64) -> Result<(), ArrayError> {
        let old_size = self.size;
        let count = self.geometry.pages_for_len(new_size)?;
        let allocated = self.pages.grow_to(count).inspect_err(|err| {
            warn!("big array resize {old_size} -> {new_size} failed: {err}");
        })?;
        let released = self.pages.release_from(count);
        if new_size < old_size {
            // The last kept page may hold stale values past the new end;
            // clear them so a later grow exposes zeros.
            let kept_end = old_size.min(count as u64 * self.geometry.page_size());
            self.fill_pages(new_size, kept_end, T::ZERO);
        }
        self.size = new_size;
        debug!(
            "resized big array {old_size} -> {new_size}: pages={count}, allocated={allocated}, released={released}"
        );
        Ok(())
    }

    /// Estimated memory held by pages, in bytes.
    ///
    /// Counts `num_pages(size) * page_size * bytes_per_element`; the page
    /// table and allocator overhead are not included.
    pub fn ram_bytes_used(&self) -> u64 {
        self.geometry.estimate_bytes(self.size)
    }

    /// Number of pages currently allocated.
    pub fn allocated_pages(&self) -> usize {
        self.pages.allocated()
    }

    /// Number of page slots, allocated or not.
    pub fn page_table_capacity(&self) -> usize {
        self.pages.slot_count()
    }

    /// Iterate over all values in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.pages, self.size)
    }

    #[inline]
    fn locate(&self, index: u64) -> Result<(usize, u32), ArrayError> {
        if index >= self.size {
            return Err(ArrayError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        // index < size, and the page count for size fits in usize.
        Ok((
            self.geometry.page_index(index) as usize,
            self.geometry.index_in_page(index),
        ))
    }
}

impl<'a, T: Element> IntoIterator for &'a BigArray<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> fmt::Debug for BigArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigArray")
            .field("size", &self.size)
            .field("page_size", &self.geometry.page_size())
            .field("allocated_pages", &self.pages.allocated())
            .field("page_table_capacity", &self.pages.slot_count())
            .finish()
    }
}
