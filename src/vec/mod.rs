//! A growable, contiguous vector type generic over its storage strategy.
//!
//! [`Vec<T, C>`](Vec) exposes one operation set regardless of whether the
//! elements live inline, in a heap allocation, or in hybrid storage which
//! promotes from inline slots to the heap. The strategy is selected by the
//! [`StoreConfig`] parameter; see the [`InlineVec`] and [`SmallVec`]
//! aliases.

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::iter::repeat;
use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};
use core::ptr;

use crate::alloc::{Allocator, Global};
use crate::error::{InsertionError, StorageError};
use crate::grow::Grow;
use crate::store::{Inline, RawStore, Slots, Small, Store};

use self::config::{StoreConfig, StoreConfigNew, StoreConfigSpawn, StoreIn};

pub use self::into_iter::IntoIter;

pub mod config;

mod into_iter;

/// A `Vec` which stores its elements inline, using no heap allocation.
pub type InlineVec<T, const N: usize> = Vec<T, Inline<N>>;

/// A `Vec` which stores up to `N` elements inline and spills into a heap
/// allocation when a larger capacity is requested.
pub type SmallVec<T, const N: usize> = Vec<T, Small<N>>;

/// A `Vec` which zeroizes its buffer when it is released.
#[cfg(feature = "zeroize")]
pub type ZeroizingVec<T> = Vec<T, crate::alloc::ZeroizingAlloc<Global>>;

/// Create a `Vec` from a cloneable element and a count of the number of
/// elements.
pub fn from_elem<T: Clone, C: StoreConfigNew<T>>(elem: T, count: usize) -> Vec<T, C> {
    let mut vec = Vec::with_capacity(count);
    vec.extend(repeat(elem).take(count));
    vec
}

/// A contiguous growable collection, generic over its storage strategy.
#[repr(transparent)]
pub struct Vec<T, C: StoreConfig = Global> {
    store: C::Store<T>,
}

impl<T, C: StoreConfigNew<T>> Vec<T, C> {
    /// Constructs a new, empty `Vec<T, C>`.
    ///
    /// No heap allocation is performed until a capacity is requested.
    pub const fn new() -> Self {
        Self { store: C::NEW }
    }

    /// Constructs an empty `Vec<T, C>` able to hold at least `capacity`
    /// elements, or fail with a [`StorageError`].
    ///
    /// For the hybrid strategy this is the promotion point: a capacity
    /// within the inline limit keeps the elements inline, anything larger
    /// allocates.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Ok(Self {
            store: C::store_try_new(capacity)?,
        })
    }

    /// Constructs an empty `Vec<T, C>` able to hold at least `capacity`
    /// elements.
    ///
    /// Panics on allocation failure, and for fixed-capacity storage when
    /// `capacity` exceeds its limit.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Constructs a `Vec<T, C>` by cloning the elements of a slice.
    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        match Self::try_from_slice(data) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Fallible form of [`from_slice`](Self::from_slice).
    pub fn try_from_slice(data: &[T]) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        let mut vec = Self::try_with_capacity(data.len())?;
        vec.try_extend_from_slice(data)?;
        Ok(vec)
    }
}

impl<T, C: StoreConfig> Vec<T, C> {
    /// Constructs a new, empty `Vec<T, C>` from an allocator instance or a
    /// storage strategy value.
    pub fn new_in<I>(alloc_in: I) -> Self
    where
        I: StoreIn<T, Config = C>,
    {
        match Self::try_new_in(alloc_in) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Fallible form of [`new_in`](Self::new_in).
    pub fn try_new_in<I>(alloc_in: I) -> Result<Self, StorageError>
    where
        I: StoreIn<T, Config = C>,
    {
        Ok(Self {
            store: alloc_in.store_try_new_in(0)?,
        })
    }

    /// Constructs an empty `Vec<T, C>` with the given capacity from an
    /// allocator instance or a storage strategy value.
    pub fn with_capacity_in<I>(capacity: usize, alloc_in: I) -> Self
    where
        I: StoreIn<T, Config = C>,
    {
        match Self::try_with_capacity_in(capacity, alloc_in) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Fallible form of [`with_capacity_in`](Self::with_capacity_in).
    pub fn try_with_capacity_in<I>(capacity: usize, alloc_in: I) -> Result<Self, StorageError>
    where
        I: StoreIn<T, Config = C>,
    {
        Ok(Self {
            store: alloc_in.store_try_new_in(capacity)?,
        })
    }
}

impl<T, A: Allocator> Vec<T, A> {
    /// Access the allocator instance backing this vector.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.store.allocator()
    }
}

impl<T, const N: usize, A: Allocator> Vec<T, Small<N, A>> {
    /// Whether the elements currently reside in a heap allocation rather
    /// than the inline slots.
    #[inline]
    pub fn is_spilled(&self) -> bool {
        self.store.is_spilled()
    }
}

impl<T, C: StoreConfig> Vec<T, C> {
    #[inline]
    fn into_inner(self) -> C::Store<T> {
        let me = ManuallyDrop::new(self);
        unsafe { ptr::read(&me.store) }
    }

    /// Access the elements as a readonly pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.store.data_ptr()
    }

    /// Access the elements as a mutable pointer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.store.data_ptr_mut()
    }

    /// View the current elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    /// View the current elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.store.as_mut_slice()
    }

    /// The number of elements the vector can hold without resizing its
    /// storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// The number of elements currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.length()
    }

    /// Whether the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Update the element count directly.
    ///
    /// # Safety
    /// `length` must not exceed the capacity, and every slot in
    /// `[0, length)` must hold a live, initialized value.
    #[inline]
    pub unsafe fn set_len(&mut self, length: usize) {
        self.store.set_length(length);
    }

    /// Remove all elements. Storage is retained.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shorten the vector to at most `length` elements, destroying the
    /// excess from the tail. Storage is retained.
    pub fn truncate(&mut self, length: usize) {
        let old_len = self.store.length();
        if length >= old_len {
            return;
        }
        unsafe {
            self.store.set_length(length);
            for index in (length..old_len).rev() {
                self.store.destroy(index);
            }
        }
    }

    /// Ensure capacity for at least `additional` elements beyond the
    /// current length, growing the storage according to the configuration's
    /// growth policy. Panics when the storage cannot grow.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        match self.try_reserve(additional) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Fallible form of [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), StorageError> {
        let length = self.store.length();
        let Some(needed) = length.checked_add(additional) else {
            return Err(StorageError::CapacityLimit);
        };
        let capacity = self.store.capacity();
        if capacity >= needed {
            return Ok(());
        }
        self.store
            .try_resize(C::Grow::next_capacity::<T>(capacity, needed))
    }

    /// Re-place the storage at the smallest capacity holding the current
    /// elements. For the hybrid strategy this demotes back to the inline
    /// slots when the elements fit.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        match self.try_shrink_to_fit() {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Fallible form of [`shrink_to_fit`](Self::shrink_to_fit).
    pub fn try_shrink_to_fit(&mut self) -> Result<(), StorageError> {
        let length = self.store.length();
        if self.store.capacity() != length {
            self.store.try_resize(length)?;
        }
        Ok(())
    }

    /// Append an element, growing the storage if required. Panics when the
    /// storage cannot grow.
    pub fn push(&mut self, item: T) {
        match self.try_push(item) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Append an element, growing the storage if required. On failure the
    /// element is handed back inside the error.
    pub fn try_push(&mut self, item: T) -> Result<(), InsertionError<T>> {
        if let Err(error) = self.try_reserve(1) {
            return Err(InsertionError::new(error, item));
        }
        unsafe { self.push_unchecked(item) };
        Ok(())
    }

    /// Append an element without checking or growing the capacity.
    ///
    /// # Safety
    /// The length must be strictly less than the capacity.
    #[inline]
    pub unsafe fn push_unchecked(&mut self, item: T) {
        let length = self.store.length();
        self.store.construct(length, item);
        self.store.set_length(length + 1);
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let length = self.store.length();
        if length == 0 {
            None
        } else {
            unsafe {
                self.store.set_length(length - 1);
                Some(self.store.take(length - 1))
            }
        }
    }

    /// Append clones of all elements of a slice. Panics when the storage
    /// cannot grow to hold them.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        match self.try_extend_from_slice(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Fallible form of [`extend_from_slice`](Self::extend_from_slice).
    ///
    /// The length advances one element at a time, so a panicking element
    /// clone leaves the vector holding the elements appended so far.
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), StorageError>
    where
        T: Clone,
    {
        self.try_reserve(items.len())?;
        for item in items {
            unsafe { self.push_unchecked(item.clone()) };
        }
        Ok(())
    }

    /// Rewrite the contents to clones of `source`.
    ///
    /// Slots holding a live element are reused by assignment; construction
    /// and destruction are confined to the difference between the two
    /// lengths. A panicking element clone leaves the prefix written so far.
    pub fn assign_from_slice(&mut self, source: &[T])
    where
        T: Clone,
    {
        match self.try_assign_from_slice(source) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Fallible form of [`assign_from_slice`](Self::assign_from_slice).
    pub fn try_assign_from_slice(&mut self, source: &[T]) -> Result<(), StorageError>
    where
        T: Clone,
    {
        let length = self.len();
        if source.len() > length {
            self.try_reserve(source.len() - length)?;
        }
        for (slot, item) in self.as_mut_slice().iter_mut().zip(source) {
            slot.clone_from(item);
        }
        if source.len() > length {
            for item in &source[length..] {
                unsafe { self.push_unchecked(item.clone()) };
            }
        } else {
            self.truncate(source.len());
        }
        Ok(())
    }

    /// Rewrite the contents from an iterator of owned elements, reusing
    /// live slots by assignment as in
    /// [`assign_from_slice`](Self::assign_from_slice).
    pub fn assign<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = source.into_iter();
        let length = self.len();
        let mut index = 0;
        while index < length {
            let Some(item) = iter.next() else {
                self.truncate(index);
                return;
            };
            self.as_mut_slice()[index] = item;
            index += 1;
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: StoreConfig> AsRef<[T]> for Vec<T, C> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, C: StoreConfig> AsMut<[T]> for Vec<T, C> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, C: StoreConfig> Borrow<[T]> for Vec<T, C> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, C: StoreConfig> BorrowMut<[T]> for Vec<T, C> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone, C: StoreConfigSpawn<T>> Clone for Vec<T, C> {
    /// The clone's storage is created at the source's *capacity*, not its
    /// length, so capacity is preserved across copies.
    fn clone(&self) -> Self {
        let mut vec = Self {
            store: match C::store_try_spawn(&self.store, self.capacity()) {
                Ok(store) => store,
                Err(error) => error.panic(),
            },
        };
        vec.extend_from_slice(self.as_slice());
        vec
    }

    /// When the capacities differ, the target storage is first re-placed at
    /// exactly the source's capacity; otherwise the existing storage is
    /// kept and live slots are reused by assignment.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() != source.capacity() {
            self.clear();
            if let Err(error) = self.store.try_resize(source.capacity()) {
                error.panic();
            }
        }
        self.assign_from_slice(source.as_slice());
    }
}

impl<T: fmt::Debug, C: StoreConfig> fmt::Debug for Vec<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T, C: StoreConfigNew<T>> Default for Vec<T, C> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: StoreConfig> Deref for Vec<T, C> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, C: StoreConfig> DerefMut for Vec<T, C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, C: StoreConfig> Drop for Vec<T, C> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

impl<T, C: StoreConfig> Extend<T> for Vec<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Clone + 'a, C: StoreConfig> Extend<&'a T> for Vec<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, C: StoreConfigNew<T>> FromIterator<T> for Vec<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = Self::with_capacity(iter.size_hint().0);
        vec.extend(iter);
        vec
    }
}

impl<T: Clone, C: StoreConfigNew<T>> From<&[T]> for Vec<T, C> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, C: StoreConfigNew<T>> From<&mut [T]> for Vec<T, C> {
    #[inline]
    fn from(data: &mut [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, C: StoreConfigNew<T>, const N: usize> From<&[T; N]> for Vec<T, C> {
    #[inline]
    fn from(data: &[T; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<T, C: StoreConfigNew<T>, const N: usize> From<[T; N]> for Vec<T, C> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_iter(data)
    }
}

impl<T, C: StoreConfig> IntoIterator for Vec<T, C> {
    type Item = T;
    type IntoIter = IntoIter<C::Store<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into_inner())
    }
}

impl<'a, T, C: StoreConfig> IntoIterator for &'a Vec<T, C> {
    type Item = &'a T;
    type IntoIter = <&'a [T] as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, C: StoreConfig> IntoIterator for &'a mut Vec<T, C> {
    type Item = &'a mut T;
    type IntoIter = <&'a mut [T] as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T1, C1, T2, C2> PartialEq<Vec<T2, C2>> for Vec<T1, C1>
where
    C1: StoreConfig,
    C2: StoreConfig,
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &Vec<T2, C2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq, C: StoreConfig> Eq for Vec<T, C> {}

impl<T1, C1, T2> PartialEq<&[T2]> for Vec<T1, C1>
where
    T1: PartialEq<T2>,
    C1: StoreConfig,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, C1, T2> PartialEq<[T2]> for Vec<T1, C1>
where
    T1: PartialEq<T2>,
    C1: StoreConfig,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, C1, T2, const N: usize> PartialEq<[T2; N]> for Vec<T1, C1>
where
    T1: PartialEq<T2>,
    C1: StoreConfig,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, C1, T2, const N: usize> PartialEq<&[T2; N]> for Vec<T1, C1>
where
    T1: PartialEq<T2>,
    C1: StoreConfig,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T, C1, C2> PartialOrd<Vec<T, C2>> for Vec<T, C1>
where
    T: PartialOrd,
    C1: StoreConfig,
    C2: StoreConfig,
{
    #[inline]
    fn partial_cmp(&self, other: &Vec<T, C2>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, C: StoreConfig> Ord for Vec<T, C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

#[cfg(feature = "std")]
impl<C: StoreConfig> std::io::Write for Vec<u8, C> {
    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.try_reserve(buf.len()) {
            Ok(_) => {
                for item in buf {
                    unsafe { self.push_unchecked(*item) };
                }
                Ok(buf.len())
            }
            Err(StorageError::CapacityLimit) => {
                let spare = self.capacity() - self.len();
                for item in &buf[..spare] {
                    unsafe { self.push_unchecked(*item) };
                }
                Ok(spare)
            }
            Err(err) => Err(std::io::Error::new(std::io::ErrorKind::Other, err)),
        }
    }
}

#[cfg(feature = "zeroize")]
impl<T, A: Allocator> zeroize::Zeroize for Vec<T, crate::alloc::ZeroizingAlloc<A>> {
    /// Drops all elements and releases the storage, which the zeroizing
    /// allocator wipes before handing it back.
    fn zeroize(&mut self) {
        self.clear();
        self.shrink_to_fit();
    }
}

#[cfg(feature = "zeroize")]
impl<T, A: Allocator> zeroize::ZeroizeOnDrop for Vec<T, crate::alloc::ZeroizingAlloc<A>> {}
