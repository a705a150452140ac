use core::alloc::Layout;
use core::mem::size_of;
use core::ptr::NonNull;

use crate::alloc::Allocator;
use crate::error::StorageError;

#[inline]
pub fn array_layout<T>(count: usize) -> Result<Layout, StorageError> {
    Layout::array::<T>(count).map_err(StorageError::LayoutError)
}

/// Allocate a block sized for `capacity` elements of `T`. Zero-sized
/// requests (a zero capacity or a zero-sized element type) perform no
/// allocation and produce a dangling pointer.
pub fn try_alloc_array<T, A: Allocator>(
    alloc: &A,
    capacity: usize,
) -> Result<NonNull<T>, StorageError> {
    let layout = array_layout::<T>(capacity)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    match alloc.allocate(layout) {
        Ok(data) => Ok(data.cast()),
        Err(_) => Err(StorageError::AllocError),
    }
}

/// Release a block previously produced by [`try_alloc_array`] with the same
/// `capacity`.
///
/// # Safety
/// `data` must have been allocated by `alloc` for exactly `capacity`
/// elements of `T`, and must not be used afterward.
pub unsafe fn dealloc_array<T, A: Allocator>(alloc: &A, data: NonNull<T>, capacity: usize) {
    // the layout was validated when the block was allocated
    if let Ok(layout) = Layout::array::<T>(capacity) {
        if layout.size() > 0 {
            alloc.deallocate(data.cast(), layout);
        }
    }
}

pub const fn min_non_zero_cap<T>() -> usize {
    if size_of::<T>() == 1 {
        8
    } else if size_of::<T>() <= 1024 {
        4
    } else {
        1
    }
}
