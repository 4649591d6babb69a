//! The page table: an ordered, oversized vector of optional pages.
//!
//! Slots `0..n` hold allocated pages and every slot from `n` upward is
//! absent. Absent slots are only created by [`PageTable::release_from`],
//! which walks upward from the new page count, so the allocated slots always
//! form a prefix.

use bigarray_core::growth::oversize;
use bigarray_core::{ArrayError, Element};
use log::trace;

use crate::page::Page;

/// Growable table of page slots.
#[derive(Clone)]
pub struct PageTable<T> {
    slots: Vec<Option<Page<T>>>,
    /// Elements per page.
    page_len: usize,
}

impl<T: Element> PageTable<T> {
    /// Create a table with exactly `count` allocated pages and no spare slots.
    pub fn with_pages(count: usize, page_len: usize) -> Result<Self, ArrayError> {
        let pages = Self::allocate(count, page_len)?;
        Ok(Self {
            slots: pages.into_iter().map(Some).collect(),
            page_len,
        })
    }

    /// Total slots, allocated or absent.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of allocated pages.
    pub fn allocated(&self) -> usize {
        self.first_missing_below(self.slots.len())
    }

    /// The page in slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if the slot is absent. Callers only ask for pages below the
    /// array's page count, which are always allocated.
    #[inline]
    pub fn page(&self, index: usize) -> &Page<T> {
        self.slots[index]
            .as_ref()
            .expect("slots below the page count are always allocated")
    }

    /// The page in slot `index`, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the slot is absent.
    #[inline]
    pub fn page_mut(&mut self, index: usize) -> &mut Page<T> {
        self.slots[index]
            .as_mut()
            .expect("slots below the page count are always allocated")
    }

    /// Lowest slot of the absent run that ends at `count`.
    ///
    /// Scans down from `count - 1` while slots are absent (or past the end of
    /// the table). Every slot below the returned index is allocated.
    pub fn first_missing_below(&self, count: usize) -> usize {
        let mut index = count;
        while index > 0 && self.slots.get(index - 1).is_none_or(Option::is_none) {
            index -= 1;
        }
        index
    }

    /// Make slots `0..count` allocated.
    ///
    /// Enlarges the slot vector to an oversized length when `count` exceeds
    /// it, then fills the absent tail below `count` with zeroed pages. All
    /// memory is obtained before any slot changes, so on error the table is
    /// untouched. Returns the number of pages allocated.
    pub fn grow_to(&mut self, count: usize) -> Result<usize, ArrayError> {
        let slot_len = if count > self.slots.len() {
            let slot_len = oversize(count, std::mem::size_of::<Option<Page<T>>>());
            let additional = slot_len - self.slots.len();
            self.slots
                .try_reserve_exact(additional)
                .map_err(|_| ArrayError::AllocationFailure {
                    requested_bytes: (additional as u64)
                        .saturating_mul(std::mem::size_of::<Option<Page<T>>>() as u64),
                })?;
            slot_len
        } else {
            self.slots.len()
        };

        let start = self.first_missing_below(count);
        let fresh = Self::allocate(count - start, self.page_len)?;
        let allocated = fresh.len();

        if slot_len > self.slots.len() {
            self.slots.resize_with(slot_len, || None);
        }
        for (slot, page) in self.slots[start..count].iter_mut().zip(fresh) {
            *slot = Some(page);
        }
        Ok(allocated)
    }

    /// Release every page from slot `count` upward.
    ///
    /// Stops at the first slot that is already absent: everything past it
    /// was released by an earlier call. Slot capacity is kept. Returns the
    /// number of pages released.
    pub fn release_from(&mut self, count: usize) -> usize {
        let mut released = 0;
        for slot in self.slots.iter_mut().skip(count) {
            if slot.take().is_none() {
                break;
            }
            released += 1;
        }
        released
    }

    /// Allocate `count` zeroed pages into a staging vector.
    fn allocate(count: usize, page_len: usize) -> Result<Vec<Page<T>>, ArrayError> {
        let mut pages: Vec<Page<T>> = Vec::new();
        pages
            .try_reserve_exact(count)
            .map_err(|_| ArrayError::AllocationFailure {
                requested_bytes: (count as u64)
                    .saturating_mul(page_len as u64)
                    .saturating_mul(T::BYTES as u64),
            })?;
        for _ in 0..count {
            pages.push(Page::zeroed(page_len)?);
        }
        if count > 0 {
            trace!("allocated {count} pages of {page_len} elements");
        }
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pages: usize) -> PageTable<i32> {
        PageTable::with_pages(pages, 16).unwrap()
    }

    #[test]
    fn with_pages_is_exact_fit() {
        let t = table(3);
        assert_eq!(t.slot_count(), 3);
        assert_eq!(t.allocated(), 3);
    }

    #[test]
    fn grow_oversizes_slots_but_allocates_exactly() {
        let mut t = table(1);
        assert_eq!(t.grow_to(5).unwrap(), 4);
        assert_eq!(t.allocated(), 5);
        assert!(t.slot_count() > 5);
    }

    #[test]
    fn grow_within_capacity_reuses_slots() {
        let mut t = table(0);
        t.grow_to(10).unwrap();
        let slots = t.slot_count();
        t.release_from(2);
        assert_eq!(t.grow_to(6).unwrap(), 4);
        assert_eq!(t.slot_count(), slots);
        assert_eq!(t.allocated(), 6);
    }

    #[test]
    fn grow_to_smaller_count_is_a_no_op() {
        let mut t = table(4);
        assert_eq!(t.grow_to(2).unwrap(), 0);
        assert_eq!(t.allocated(), 4);
    }

    #[test]
    fn release_nulls_tail_and_keeps_slots() {
        let mut t = table(0);
        t.grow_to(8).unwrap();
        let slots = t.slot_count();
        assert_eq!(t.release_from(3), 5);
        assert_eq!(t.allocated(), 3);
        assert_eq!(t.slot_count(), slots);
        assert_eq!(t.release_from(3), 0);
    }

    #[test]
    fn first_missing_below_finds_end_of_prefix() {
        let mut t = table(0);
        t.grow_to(4).unwrap();
        assert_eq!(t.first_missing_below(t.slot_count()), 4);
        assert_eq!(t.first_missing_below(2), 2);
        assert_eq!(t.first_missing_below(100), 4);
    }

    #[test]
    fn kept_pages_keep_their_contents() {
        let mut t = table(2);
        t.page_mut(1).replace(5, 42);
        t.grow_to(6).unwrap();
        t.release_from(2);
        assert_eq!(t.page(1).get(5), 42);
    }

    #[test]
    fn failed_grow_leaves_table_untouched() {
        let mut t = table(2);
        let result = t.grow_to(usize::MAX / 64);
        assert!(matches!(result, Err(ArrayError::AllocationFailure { .. })));
        assert_eq!(t.slot_count(), 2);
        assert_eq!(t.allocated(), 2);
    }
}
