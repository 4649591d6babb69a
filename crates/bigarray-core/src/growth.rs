//! Amortised capacity for growable slot tables.

/// Capacity to allocate for a table that must hold at least `min_len`
/// slots of `bytes_per_slot` bytes each.
///
/// Grows by one eighth (at least 3 slots) so that repeated small grows
/// cost amortised O(1) copies, then rounds up so the table's byte length
/// stays word aligned for small slot types. The result is always
/// `>= min_len`, and saturates at `usize::MAX`.
pub fn oversize(min_len: usize, bytes_per_slot: usize) -> usize {
    if min_len == 0 {
        return 0;
    }
    let extra = (min_len >> 3).max(3);
    let len = min_len.saturating_add(extra);

    let align_slots = if cfg!(target_pointer_width = "64") {
        match bytes_per_slot {
            1 => 8,
            2 => 4,
            4 => 2,
            _ => 1,
        }
    } else {
        match bytes_per_slot {
            1 => 4,
            2 => 2,
            _ => 1,
        }
    };

    match len.checked_next_multiple_of(align_slots) {
        Some(aligned) => aligned,
        None => len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stays_zero() {
        assert_eq!(oversize(0, 8), 0);
    }

    #[test]
    fn small_tables_get_at_least_three_extra_slots() {
        assert_eq!(oversize(1, 16), 4);
        assert_eq!(oversize(10, 16), 13);
    }

    #[test]
    fn large_tables_grow_by_an_eighth() {
        assert_eq!(oversize(800, 16), 900);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn narrow_slots_round_to_word_multiples() {
        assert_eq!(oversize(10, 1) % 8, 0);
        assert_eq!(oversize(10, 2) % 4, 0);
        assert_eq!(oversize(10, 4) % 2, 0);
    }

    #[test]
    fn saturates_near_usize_max() {
        assert_eq!(oversize(usize::MAX - 1, 1), usize::MAX);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_below_request(min_len in 0usize..(1 << 40), bytes in 1usize..32) {
                prop_assert!(oversize(min_len, bytes) >= min_len);
            }

            #[test]
            fn monotonic_in_request(a in 0usize..(1 << 40), b in 0usize..(1 << 40)) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(oversize(lo, 16) <= oversize(hi, 16));
            }
        }
    }
}
