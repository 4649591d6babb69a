//! Fixed-length blocks of elements.

use bigarray_core::{ArrayError, Element};

/// A contiguous, zero-initialised block of exactly one page of elements.
///
/// Owned by exactly one page-table slot; never shared.
#[derive(Clone)]
pub struct Page<T> {
    data: Box<[T]>,
}

impl<T: Element> Page<T> {
    /// Allocate a page of `len` elements, all set to [`Element::ZERO`].
    ///
    /// Returns [`ArrayError::AllocationFailure`] instead of aborting when
    /// the allocator refuses the request.
    pub fn zeroed(len: usize) -> Result<Self, ArrayError> {
        let mut data: Vec<T> = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ArrayError::AllocationFailure {
                requested_bytes: (len as u64).saturating_mul(T::BYTES as u64),
            })?;
        data.resize(len, T::ZERO);
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Number of elements in the page.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` for a zero-length page.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= len()`.
    #[inline]
    pub fn get(&self, offset: u32) -> T {
        self.data[offset as usize]
    }

    /// Store `value` at `offset`, returning the value it replaced.
    #[inline]
    pub fn replace(&mut self, offset: u32, value: T) -> T {
        std::mem::replace(&mut self.data[offset as usize], value)
    }

    /// Add `delta` to the value at `offset` in place, returning the new value.
    #[inline]
    pub fn add(&mut self, offset: u32, delta: T) -> T {
        let slot = &mut self.data[offset as usize];
        *slot = slot.wrapping_add(delta);
        *slot
    }

    /// The page's elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The page's elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_page_reads_zero() {
        let page = Page::<i32>::zeroed(4096).unwrap();
        assert_eq!(page.len(), 4096);
        assert!(page.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn replace_returns_previous_value() {
        let mut page = Page::<i64>::zeroed(8).unwrap();
        assert_eq!(page.replace(3, 11), 0);
        assert_eq!(page.replace(3, 12), 11);
        assert_eq!(page.get(3), 12);
    }

    #[test]
    fn add_returns_new_value_and_wraps() {
        let mut page = Page::<i32>::zeroed(4).unwrap();
        page.replace(0, i32::MAX);
        assert_eq!(page.add(0, 1), i32::MIN);
        assert_eq!(page.get(0), i32::MIN);
    }

    #[test]
    fn absurd_request_fails_without_aborting() {
        let result = Page::<i64>::zeroed(usize::MAX / 2);
        assert!(matches!(result, Err(ArrayError::AllocationFailure { .. })));
    }

    #[test]
    #[should_panic]
    fn offset_past_end_panics() {
        let page = Page::<i8>::zeroed(4).unwrap();
        page.get(4);
    }
}
