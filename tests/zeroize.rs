#![cfg(feature = "zeroize")]

use packvec::alloc::{Global, ZeroizingAlloc};
use packvec::vec::ZeroizingVec;
use packvec::Vec as PackVec;
use zeroize::Zeroize;

#[test]
fn zeroizing_vec_releases_storage() {
    let mut vec: ZeroizingVec<u32> = ZeroizingVec::new();
    vec.extend([1, 2, 3, 4]);
    vec.zeroize();
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn zeroizing_alloc_behaves_like_inner() {
    let mut vec = PackVec::<u32, ZeroizingAlloc<Global>>::new_in(ZeroizingAlloc(Global));
    vec.extend([1, 2, 3]);
    assert_eq!(vec, [1, 2, 3]);
    vec.shrink_to_fit();
    assert_eq!(vec.capacity(), 3);
}
