//! Iteration over big array values.

use std::iter::FusedIterator;
use std::slice;

use bigarray_core::Element;

use crate::table::PageTable;

/// Iterator over the values of a [`BigArray`](crate::BigArray), in index
/// order. Created by [`BigArray::iter`](crate::BigArray::iter).
pub struct Iter<'a, T> {
    table: &'a PageTable<T>,
    next_page: usize,
    current: slice::Iter<'a, T>,
    remaining: u64,
}

impl<'a, T: Element> Iter<'a, T> {
    pub(crate) fn new(table: &'a PageTable<T>, size: u64) -> Self {
        Self {
            table,
            next_page: 0,
            current: <&[T]>::default().iter(),
            remaining: size,
        }
    }
}

impl<T: Element> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if let Some(&value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            // remaining > 0, so the next page lies below the page count.
            self.current = self.table.page(self.next_page).as_slice().iter();
            self.next_page += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: Element> FusedIterator for Iter<'_, T> {}
