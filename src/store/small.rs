use core::fmt;
use core::mem::{self, size_of};
use core::ptr::{self, NonNull};

use const_default::ConstDefault;

use crate::alloc::{Allocator, AllocatorDefault, Global};
use crate::error::StorageError;

use super::utils::{dealloc_array, try_alloc_array};
use super::{array::ArrayStore, RawStore, Store, StoreNew, StoreSpawn};

/// A marker type used to indicate the hybrid storage strategy: elements
/// start out in `N` inline slots and spill into an allocation from `A` when
/// a larger capacity is requested.
///
/// The contained allocator instance is only consulted when a value of this
/// type is passed to one of the `_in` constructors.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Small<const N: usize, A = Global>(
    /// The allocator elements spill into.
    pub A,
);

/// The current placement of a [`SmallStore`]'s slots. Which mode is active
/// is carried by the variant tag, never derived from pointer identity, so
/// the store remains freely movable in both modes.
enum SmallData<T, const N: usize> {
    Inline(ArrayStore<T, N>),
    Spilled { data: NonNull<T>, capacity: usize },
}

/// Storage holding up to `N` elements inline and promoting to a heap
/// allocation when a capacity beyond `N` is requested.
///
/// Promotion is driven purely by requested capacity: asking for exactly `N`
/// slots stays inline, `N + 1` spills. Shrinking the live length never
/// demotes; only an explicit [`try_resize`](Store::try_resize) back to a
/// capacity within `N` returns the elements to the inline slots.
pub struct SmallStore<T, const N: usize, A: Allocator = Global> {
    data: SmallData<T, N>,
    length: usize,
    alloc: A,
}

impl<T, const N: usize, A: Allocator> SmallStore<T, N, A> {
    /// Create an empty store able to hold `capacity` elements, spilling
    /// into an allocation from `alloc` if `capacity` exceeds `N`.
    pub fn try_for_capacity_in(capacity: usize, alloc: A) -> Result<Self, StorageError> {
        let data = if capacity <= N || size_of::<T>() == 0 {
            SmallData::Inline(ArrayStore::DEFAULT)
        } else {
            SmallData::Spilled {
                data: try_alloc_array(&alloc, capacity)?,
                capacity,
            }
        };
        Ok(Self {
            data,
            length: 0,
            alloc,
        })
    }

    /// Whether the elements currently reside in a heap allocation rather
    /// than the inline slots.
    #[inline]
    pub fn is_spilled(&self) -> bool {
        matches!(self.data, SmallData::Spilled { .. })
    }

    /// Access the allocator instance backing this store.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }
}

impl<T, const N: usize, A: Allocator> Drop for SmallStore<T, N, A> {
    fn drop(&mut self) {
        // live elements are destroyed by the owning container
        if let SmallData::Spilled { data, capacity } = &self.data {
            unsafe { dealloc_array(&self.alloc, *data, *capacity) };
        }
    }
}

impl<T, const N: usize, A: Allocator> fmt::Debug for SmallStore<T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmallStore")
            .field("capacity", &self.capacity())
            .field("length", &self.length)
            .field("spilled", &self.is_spilled())
            .finish_non_exhaustive()
    }
}

impl<T, const N: usize, A: Allocator> RawStore for SmallStore<T, N, A> {
    type Item = T;

    #[inline]
    fn data_ptr(&self) -> *const T {
        match &self.data {
            SmallData::Inline(array) => array.as_ptr(),
            SmallData::Spilled { data, .. } => data.as_ptr(),
        }
    }

    #[inline]
    fn data_ptr_mut(&mut self) -> *mut T {
        match &mut self.data {
            SmallData::Inline(array) => array.as_mut_ptr(),
            SmallData::Spilled { data, .. } => data.as_ptr(),
        }
    }
}

impl<T, const N: usize, A: Allocator> Store for SmallStore<T, N, A> {
    #[inline]
    fn capacity(&self) -> usize {
        match &self.data {
            SmallData::Inline(_) => {
                if size_of::<T>() == 0 {
                    usize::MAX
                } else {
                    N
                }
            }
            SmallData::Spilled { capacity, .. } => *capacity,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }

    #[inline]
    unsafe fn set_length(&mut self, len: usize) {
        self.length = len;
    }

    fn try_resize(&mut self, capacity: usize) -> Result<(), StorageError> {
        debug_assert!(capacity >= self.length);
        if size_of::<T>() == 0 {
            return Ok(());
        }
        match &self.data {
            SmallData::Inline(_) if capacity <= N => return Ok(()),
            SmallData::Spilled { capacity: cur, .. } if capacity == *cur => return Ok(()),
            _ => (),
        }
        // recompute placement, carrying the live elements across
        let mut next = if capacity <= N {
            SmallData::Inline(ArrayStore::DEFAULT)
        } else {
            SmallData::Spilled {
                data: try_alloc_array(&self.alloc, capacity)?,
                capacity,
            }
        };
        let dst = match &mut next {
            SmallData::Inline(array) => array.as_mut_ptr(),
            SmallData::Spilled { data, .. } => data.as_ptr(),
        };
        unsafe { ptr::copy_nonoverlapping(self.data_ptr(), dst, self.length) };
        if let SmallData::Spilled { data, capacity } = mem::replace(&mut self.data, next) {
            unsafe { dealloc_array(&self.alloc, data, capacity) };
        }
        Ok(())
    }
}

impl<T, const N: usize, A: AllocatorDefault> StoreNew for SmallStore<T, N, A> {
    const NEW: Self = Self {
        data: SmallData::Inline(ArrayStore::DEFAULT),
        length: 0,
        alloc: A::DEFAULT,
    };

    #[inline]
    fn try_for_capacity(capacity: usize) -> Result<Self, StorageError> {
        Self::try_for_capacity_in(capacity, A::DEFAULT)
    }
}

impl<T, const N: usize, A: Allocator + Clone> StoreSpawn for SmallStore<T, N, A> {
    #[inline]
    fn try_spawn(&self, capacity: usize) -> Result<Self, StorageError> {
        Self::try_for_capacity_in(capacity, self.alloc.clone())
    }
}

unsafe impl<T: Send, const N: usize, A: Allocator + Send> Send for SmallStore<T, N, A> {}
unsafe impl<T: Sync, const N: usize, A: Allocator + Sync> Sync for SmallStore<T, N, A> {}
