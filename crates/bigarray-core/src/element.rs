//! Value types that can be stored in big array pages.

use std::fmt;

/// A fixed-width value stored in a page.
///
/// Pages are zero-initialised with [`ZERO`](Element::ZERO) and
/// `increment` is expressed through [`wrapping_add`](Element::wrapping_add),
/// so integer types wrap at their native width instead of panicking.
pub trait Element: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Size of one value in bytes. Always a power of two.
    const BYTES: usize = std::mem::size_of::<Self>();

    /// Value of a freshly allocated slot.
    const ZERO: Self;

    /// Add `delta`, wrapping on overflow for integer types.
    fn wrapping_add(self, delta: Self) -> Self;
}

macro_rules! int_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn wrapping_add(self, delta: Self) -> Self {
                    <$ty>::wrapping_add(self, delta)
                }
            }
        )*
    };
}

macro_rules! float_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn wrapping_add(self, delta: Self) -> Self {
                    self + delta
                }
            }
        )*
    };
}

int_element!(i8, i32, i64);
float_element!(f32, f64);
