//! Vector types with selectable element storage.
//!
//! Every vector in this crate shares one generic algorithm layer and one
//! public surface; what differs is where the element slots live, chosen by
//! a storage configuration parameter:
//!
//! - [`Vec<T>`](vec::Vec) — a single owned heap allocation sized to the
//!   capacity (any [`Allocator`](alloc::Allocator) may be selected in place
//!   of the global one).
//! - [`InlineVec<T, N>`](vec::InlineVec) — `N` element slots embedded in
//!   the vector itself; fixed capacity, no heap use at all.
//! - [`SmallVec<T, N>`](vec::SmallVec) — starts inline and promotes to a
//!   heap allocation when a capacity beyond `N` is requested.
//!
//! ```
//! use packvec::{pvec, SmallVec};
//!
//! let mut buf: SmallVec<u32, 7> = pvec![1, 2, 3, 4, 5];
//! assert_eq!(buf.capacity(), 7);
//! assert!(!buf.is_spilled());
//! buf.extend([6, 7, 8]);
//! assert!(buf.is_spilled());
//! ```
//!
//! The crate is `no_std` by default; enable `alloc` (default) for the
//! global allocator, `allocator-api2` to interoperate with the ecosystem
//! allocator trait, and `zeroize` for storage wiped on release.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc as alloc_crate;

pub mod alloc;

pub(crate) mod error;

pub mod grow;

pub mod store;

pub mod vec;

#[macro_use]
mod macros;

pub use self::{
    error::{InsertionError, StorageError},
    store::{Inline, Small},
    vec::{InlineVec, SmallVec, Vec},
};
