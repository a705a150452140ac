//! Selection of a storage strategy and growth policy for a [`Vec`](super::Vec).

use crate::alloc::Allocator;
use crate::error::StorageError;
use crate::grow::{Grow, GrowDoubling, GrowExact};
use crate::store::{HeapStore, Inline, InlineStore, Small, SmallStore, Store, StoreNew, StoreSpawn};

/// Determines the storage strategy and growth behavior of a
/// [`Vec`](super::Vec).
///
/// Any allocator is itself a configuration, selecting heap storage from
/// that allocator; [`Inline<N>`] selects fixed inline storage; and
/// [`Small<N, A>`] selects the hybrid strategy.
pub trait StoreConfig {
    /// The growth pattern applied when additional capacity is reserved.
    type Grow: Grow;

    /// The concrete storage type for element type `T`.
    type Store<T>: Store<Item = T>;
}

impl<A: Allocator> StoreConfig for A {
    type Grow = GrowDoubling;
    type Store<T> = HeapStore<T, A>;
}

impl<const N: usize> StoreConfig for Inline<N> {
    type Grow = GrowExact;
    type Store<T> = InlineStore<T, N>;
}

impl<const N: usize, A: Allocator> StoreConfig for Small<N, A> {
    type Grow = GrowDoubling;
    type Store<T> = SmallStore<T, N, A>;
}

/// A value which can be consumed to select the storage of a new vector:
/// an allocator instance, or a strategy marker carrying one.
pub trait StoreIn<T> {
    /// The storage configuration this value produces.
    type Config: StoreConfig;

    /// Create an empty storage able to hold at least `capacity` elements.
    fn store_try_new_in(
        self,
        capacity: usize,
    ) -> Result<<Self::Config as StoreConfig>::Store<T>, StorageError>;
}

impl<T, A: Allocator> StoreIn<T> for A {
    type Config = A;

    #[inline]
    fn store_try_new_in(self, capacity: usize) -> Result<HeapStore<T, A>, StorageError> {
        HeapStore::try_for_capacity_in(capacity, self)
    }
}

impl<T, const N: usize> StoreIn<T> for Inline<N> {
    type Config = Inline<N>;

    #[inline]
    fn store_try_new_in(self, capacity: usize) -> Result<InlineStore<T, N>, StorageError> {
        InlineStore::try_for_capacity(capacity)
    }
}

impl<T, const N: usize, A: Allocator> StoreIn<T> for Small<N, A> {
    type Config = Small<N, A>;

    #[inline]
    fn store_try_new_in(self, capacity: usize) -> Result<SmallStore<T, N, A>, StorageError> {
        SmallStore::try_for_capacity_in(capacity, self.0)
    }
}

/// A configuration whose storage can be created without an allocator
/// instance, including in const context.
pub trait StoreConfigNew<T>: StoreConfig {
    /// An empty storage instance.
    const NEW: Self::Store<T>;

    /// Create an empty storage able to hold at least `capacity` elements.
    fn store_try_new(capacity: usize) -> Result<Self::Store<T>, StorageError>;
}

impl<T, C: StoreConfig> StoreConfigNew<T> for C
where
    C::Store<T>: StoreNew,
{
    const NEW: Self::Store<T> = <Self::Store<T>>::NEW;

    #[inline]
    fn store_try_new(capacity: usize) -> Result<Self::Store<T>, StorageError> {
        <Self::Store<T>>::try_for_capacity(capacity)
    }
}

/// A configuration whose storage can create an empty sibling sharing its
/// allocator, enabling `Clone` for the containing vector.
pub trait StoreConfigSpawn<T>: StoreConfig {
    /// Create a new, empty storage of the same kind with the given capacity.
    fn store_try_spawn(store: &Self::Store<T>, capacity: usize)
        -> Result<Self::Store<T>, StorageError>;
}

impl<T, C: StoreConfig> StoreConfigSpawn<T> for C
where
    C::Store<T>: StoreSpawn,
{
    #[inline]
    fn store_try_spawn(
        store: &Self::Store<T>,
        capacity: usize,
    ) -> Result<Self::Store<T>, StorageError> {
        store.try_spawn(capacity)
    }
}
