use core::fmt;
use core::mem::size_of;
use core::ptr::{self, NonNull};

use crate::alloc::{Allocator, AllocatorDefault, Global};
use crate::error::StorageError;

use super::utils::{dealloc_array, try_alloc_array};
use super::{RawStore, Store, StoreNew, StoreSpawn};

/// Storage backed by a single owned heap allocation sized to its capacity.
///
/// A capacity of zero holds no allocation; the data pointer is dangling.
/// Zero-sized element types never allocate and report a capacity of
/// `usize::MAX`.
pub struct HeapStore<T, A: Allocator = Global> {
    data: NonNull<T>,
    capacity: usize,
    length: usize,
    alloc: A,
}

impl<T, A: Allocator> HeapStore<T, A> {
    /// Create an empty store holding `capacity` slots allocated from
    /// `alloc`.
    pub fn try_for_capacity_in(capacity: usize, alloc: A) -> Result<Self, StorageError> {
        let capacity = adjusted_capacity::<T>(capacity);
        let data = try_alloc_array(&alloc, capacity)?;
        Ok(Self {
            data,
            capacity,
            length: 0,
            alloc,
        })
    }

    /// Access the allocator instance backing this store.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }
}

#[inline]
fn adjusted_capacity<T>(capacity: usize) -> usize {
    if size_of::<T>() == 0 && capacity > 0 {
        usize::MAX
    } else {
        capacity
    }
}

impl<T, A: Allocator> Drop for HeapStore<T, A> {
    fn drop(&mut self) {
        // live elements are destroyed by the owning container
        unsafe { dealloc_array(&self.alloc, self.data, self.capacity) };
    }
}

impl<T, A: Allocator> fmt::Debug for HeapStore<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapStore")
            .field("capacity", &self.capacity)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl<T, A: Allocator> RawStore for HeapStore<T, A> {
    type Item = T;

    #[inline]
    fn data_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline]
    fn data_ptr_mut(&mut self) -> *mut T {
        self.data.as_ptr()
    }
}

impl<T, A: Allocator> Store for HeapStore<T, A> {
    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
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
        let capacity = adjusted_capacity::<T>(capacity);
        if capacity == self.capacity {
            return Ok(());
        }
        if self.length == 0 {
            // release before allocating: nothing to carry over
            unsafe { dealloc_array(&self.alloc, self.data, self.capacity) };
            self.data = NonNull::dangling();
            self.capacity = 0;
            self.data = try_alloc_array(&self.alloc, capacity)?;
        } else {
            let data = try_alloc_array(&self.alloc, capacity)?;
            unsafe {
                ptr::copy_nonoverlapping(self.data.as_ptr(), data.as_ptr(), self.length);
                dealloc_array(&self.alloc, self.data, self.capacity);
            }
            self.data = data;
        }
        self.capacity = capacity;
        Ok(())
    }
}

impl<T, A: AllocatorDefault> StoreNew for HeapStore<T, A> {
    const NEW: Self = Self {
        data: NonNull::dangling(),
        capacity: 0,
        length: 0,
        alloc: A::DEFAULT,
    };

    #[inline]
    fn try_for_capacity(capacity: usize) -> Result<Self, StorageError> {
        Self::try_for_capacity_in(capacity, A::DEFAULT)
    }
}

impl<T, A: Allocator + Clone> StoreSpawn for HeapStore<T, A> {
    #[inline]
    fn try_spawn(&self, capacity: usize) -> Result<Self, StorageError> {
        Self::try_for_capacity_in(capacity, self.alloc.clone())
    }
}

unsafe impl<T: Send, A: Allocator + Send> Send for HeapStore<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for HeapStore<T, A> {}
