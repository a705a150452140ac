use core::fmt;
use core::mem::MaybeUninit;

use const_default::ConstDefault;

/// A fixed-size array of uninitialized element slots, used as the inline
/// slab by [`InlineStore`](super::InlineStore) and
/// [`SmallStore`](super::SmallStore).
#[repr(transparent)]
pub struct ArrayStore<T, const N: usize>(pub(crate) [MaybeUninit<T>; N]);

impl<T, const N: usize> ArrayStore<T, N> {
    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.0.as_ptr().cast()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.0.as_mut_ptr().cast()
    }
}

impl<T, const N: usize> fmt::Debug for ArrayStore<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStore").finish_non_exhaustive()
    }
}

impl<T, const N: usize> ConstDefault for ArrayStore<T, N> {
    const DEFAULT: Self = Self(unsafe { MaybeUninit::uninit().assume_init() });
}

impl<T, const N: usize> Default for ArrayStore<T, N> {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(feature = "zeroize")]
impl<T, const N: usize> zeroize::Zeroize for ArrayStore<T, N> {
    #[inline]
    fn zeroize(&mut self) {
        self.0.zeroize()
    }
}
