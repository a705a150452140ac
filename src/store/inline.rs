use const_default::ConstDefault;

use super::{array::ArrayStore, RawStore, Store, StoreNew, StoreSpawn};
use crate::error::StorageError;

/// A marker type used to indicate the inline storage strategy, which keeps
/// up to `N` elements within the collection handle itself.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Inline<const N: usize>;

/// An inline storage buffer. The capacity is fixed at `N` and never
/// involves the heap.
#[derive(Debug)]
pub struct InlineStore<T, const N: usize> {
    data: ArrayStore<T, N>,
    length: usize,
}

impl<T, const N: usize> ConstDefault for InlineStore<T, N> {
    const DEFAULT: Self = Self {
        data: ArrayStore::DEFAULT,
        length: 0,
    };
}

impl<T, const N: usize> Default for InlineStore<T, N> {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<T, const N: usize> RawStore for InlineStore<T, N> {
    type Item = T;

    #[inline]
    fn data_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline]
    fn data_ptr_mut(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }
}

impl<T, const N: usize> Store for InlineStore<T, N> {
    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }

    #[inline]
    unsafe fn set_length(&mut self, len: usize) {
        self.length = len;
    }

    #[inline]
    fn try_resize(&mut self, capacity: usize) -> Result<(), StorageError> {
        if capacity <= N {
            Ok(())
        } else {
            Err(StorageError::CapacityLimit)
        }
    }
}

impl<T, const N: usize> StoreNew for InlineStore<T, N> {
    const NEW: Self = Self::DEFAULT;

    #[inline]
    fn try_for_capacity(capacity: usize) -> Result<Self, StorageError> {
        if capacity <= N {
            Ok(Self::NEW)
        } else {
            Err(StorageError::CapacityLimit)
        }
    }
}

impl<T, const N: usize> StoreSpawn for InlineStore<T, N> {
    #[inline]
    fn try_spawn(&self, capacity: usize) -> Result<Self, StorageError> {
        Self::try_for_capacity(capacity)
    }
}
