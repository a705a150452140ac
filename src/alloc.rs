//! Support for memory allocation.

#[cfg(any(not(feature = "allocator-api2"), not(feature = "alloc"), feature = "zeroize"))]
use core::alloc::Layout;
#[cfg(not(feature = "allocator-api2"))]
use core::fmt;
#[cfg(any(not(feature = "allocator-api2"), not(feature = "alloc"), feature = "zeroize"))]
use core::ptr::NonNull;
#[cfg(feature = "zeroize")]
use core::slice;

#[cfg(all(feature = "alloc", not(feature = "allocator-api2")))]
use alloc_crate::alloc::{alloc as raw_alloc, dealloc as raw_dealloc};

#[cfg(all(feature = "alloc", feature = "allocator-api2"))]
pub use allocator_api2::alloc::Global;
#[cfg(feature = "allocator-api2")]
pub use allocator_api2::alloc::{AllocError, Allocator};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// The error produced when an allocator cannot satisfy a request, whether
/// due to resource exhaustion or an unsupported layout.
#[cfg(not(feature = "allocator-api2"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AllocError;

#[cfg(not(feature = "allocator-api2"))]
impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("memory allocation failed")
    }
}

#[cfg(all(feature = "std", not(feature = "allocator-api2")))]
impl std::error::Error for AllocError {}

/// An implementation of `Allocator` can allocate and deallocate arbitrary
/// blocks of memory described via `Layout`.
///
/// Unlike `GlobalAlloc`, zero-sized allocations are allowed and must produce
/// a valid (dangling) pointer. When the `allocator-api2` feature is enabled
/// this trait is replaced by a re-export of `allocator_api2::alloc::Allocator`,
/// so custom allocators written against either surface interoperate.
///
/// # Safety
/// Memory blocks returned from an allocator must point to valid memory and
/// retain their validity until released. Cloning or moving the allocator must
/// not invalidate blocks returned from it; a cloned allocator must behave
/// like the same allocator.
#[cfg(not(feature = "allocator-api2"))]
pub unsafe trait Allocator {
    /// Try to allocate a block of memory matching `layout`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Release an allocation produced by this allocator.
    ///
    /// # Safety
    /// The value `ptr` must represent a live allocation produced by this
    /// allocator, and `layout` must correspond to the layout used to
    /// produce it.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

#[cfg(all(feature = "alloc", not(feature = "allocator-api2")))]
#[inline]
fn layout_dangling(layout: Layout) -> NonNull<u8> {
    // SAFETY: layout alignments are guaranteed to be non-zero.
    unsafe { NonNull::new_unchecked(layout.align() as *mut u8) }
}

/// The global memory allocator.
///
/// When the `alloc` feature is enabled, this type forwards calls to the
/// allocator registered with the `#[global_allocator]` attribute if there is
/// one, or the `std` crate's default.
#[cfg(any(not(feature = "alloc"), not(feature = "allocator-api2")))]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "alloc", derive(Default, Copy))]
pub struct Global;

#[cfg(all(feature = "alloc", not(feature = "allocator-api2")))]
unsafe impl Allocator for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let ptr = if layout.size() == 0 {
            layout_dangling(layout)
        } else {
            let Some(ptr) = NonNull::new(unsafe { raw_alloc(layout) }) else {
                return Err(AllocError);
            };
            ptr
        };
        Ok(NonNull::slice_from_raw_parts(ptr, layout.size()))
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() > 0 {
            raw_dealloc(ptr.as_ptr(), layout);
        }
    }
}

#[cfg(not(feature = "alloc"))]
// Stub implementation to allow Global as the default allocator type
// even when the `alloc` feature is not enabled. Any usage as an allocator
// will result in a panic.
unsafe impl Allocator for Global {
    fn allocate(&self, _layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        unimplemented!();
    }

    unsafe fn deallocate(&self, _ptr: NonNull<u8>, _layout: Layout) {
        unimplemented!();
    }
}

/// A trait implemented by allocators supporting a constant initializer.
/// This cannot use `ConstDefault` as it is not implemented for the external
/// `Global` allocator.
pub trait AllocatorDefault: Allocator + Clone + Default {
    /// The constant initializer for this allocator.
    const DEFAULT: Self;
}

#[cfg(feature = "alloc")]
impl AllocatorDefault for Global {
    const DEFAULT: Self = Global;
}

/// An allocator which allocates via `A` and zeroizes all buffers when they
/// are released.
#[cfg(feature = "zeroize")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroizingAlloc<A>(pub A);

#[cfg(feature = "zeroize")]
unsafe impl<A: Allocator> Allocator for ZeroizingAlloc<A> {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        self.0.allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() > 0 {
            let mem = slice::from_raw_parts_mut(ptr.as_ptr(), layout.size());
            mem.zeroize();
        }
        self.0.deallocate(ptr, layout)
    }
}

#[cfg(feature = "zeroize")]
impl<A: AllocatorDefault> AllocatorDefault for ZeroizingAlloc<A> {
    const DEFAULT: Self = ZeroizingAlloc(A::DEFAULT);
}
