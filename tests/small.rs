use core::mem;

use packvec::{pvec, SmallVec};

#[test]
fn small_starts_inline() {
    let vec: SmallVec<u32, 7> = SmallVec::new();
    assert_eq!(vec.capacity(), 7);
    assert!(vec.is_empty());
    assert!(!vec.is_spilled());
}

#[test]
fn small_promotion_boundary() {
    // a request of exactly N stays inline, N + 1 allocates
    let vec = SmallVec::<u32, 7>::with_capacity(7);
    assert_eq!(vec.capacity(), 7);
    assert!(!vec.is_spilled());

    let vec = SmallVec::<u32, 7>::with_capacity(8);
    assert_eq!(vec.capacity(), 8);
    assert!(vec.is_spilled());
}

#[test]
fn small_within_inline_capacity() {
    let vec: SmallVec<u32, 7> = pvec![1, 2, 3, 4, 5];
    assert_eq!(vec.len(), 5);
    assert_eq!(vec.capacity(), 7);
    assert!(!vec.is_spilled());
    assert_eq!(vec, [1, 2, 3, 4, 5]);
}

#[test]
fn small_literal_past_inline_capacity() {
    let vec: SmallVec<u32, 7> = pvec![1, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(vec.len(), 8);
    assert_eq!(vec.capacity(), 8);
    assert!(vec.is_spilled());
    assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn small_push_spills_preserving_elements() {
    let mut vec: SmallVec<u32, 4> = SmallVec::new();
    for value in 0..4 {
        vec.push(value);
    }
    assert!(!vec.is_spilled());
    vec.push(4);
    assert!(vec.is_spilled());
    assert_eq!(vec, [0, 1, 2, 3, 4]);
    assert!(vec.capacity() >= 5);
}

#[test]
fn small_move_steals_spilled_allocation() {
    let mut vec: SmallVec<u32, 7> = pvec![1, 2, 3, 4, 5, 6, 7, 8];
    let data = vec.as_ptr();
    let moved = mem::take(&mut vec);
    // the allocation is transferred, not copied
    assert_eq!(moved.as_ptr(), data);
    assert_eq!(moved, [1, 2, 3, 4, 5, 6, 7, 8]);
    assert!(vec.is_empty());
    assert!(!vec.is_spilled());
    assert_eq!(vec.capacity(), 7);
}

#[test]
fn small_move_inline_resets_source() {
    let mut vec: SmallVec<u32, 7> = pvec![1, 2, 3];
    let moved = mem::take(&mut vec);
    assert_eq!(moved, [1, 2, 3]);
    assert!(!moved.is_spilled());
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 7);
}

#[test]
fn small_truncate_never_demotes() {
    let mut vec: SmallVec<u32, 7> = (0..20).collect();
    assert!(vec.is_spilled());
    vec.truncate(3);
    assert!(vec.is_spilled());
    assert_eq!(vec.capacity(), 20);
    vec.clear();
    assert!(vec.is_spilled());
}

#[test]
fn small_shrink_to_fit_demotes() {
    let mut vec: SmallVec<u32, 7> = (0..20).collect();
    vec.truncate(3);
    vec.shrink_to_fit();
    assert!(!vec.is_spilled());
    assert_eq!(vec.capacity(), 7);
    assert_eq!(vec, [0, 1, 2]);
}

#[test]
fn small_shrink_to_fit_spilled() {
    let mut vec: SmallVec<u32, 4> = (0..16).collect();
    vec.truncate(10);
    vec.shrink_to_fit();
    assert!(vec.is_spilled());
    assert_eq!(vec.capacity(), 10);
    assert_eq!(vec.len(), 10);
}

#[test]
fn small_clone_preserves_capacity_and_mode() {
    let inline: SmallVec<u32, 7> = pvec![1, 2, 3];
    let copy = inline.clone();
    assert!(!copy.is_spilled());
    assert_eq!(copy.capacity(), 7);
    assert_eq!(copy, inline);

    let spilled = SmallVec::<u32, 7>::from_slice(&[0; 12]);
    let copy = spilled.clone();
    assert!(copy.is_spilled());
    assert_eq!(copy.capacity(), 12);
    assert_eq!(copy, spilled);
}

#[test]
fn small_clone_from_recomputes_placement() {
    let source: SmallVec<u32, 7> = pvec![1, 2, 3];
    let mut target: SmallVec<u32, 7> = (0..20).collect();
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.capacity(), 7);
    assert!(!target.is_spilled());

    let source: SmallVec<u32, 7> = (0..10).collect();
    let mut target: SmallVec<u32, 7> = pvec![5];
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.capacity(), 10);
    assert!(target.is_spilled());
}

#[test]
fn small_reserve_promotes_exactly() {
    let mut vec: SmallVec<u32, 4> = SmallVec::new();
    vec.try_reserve(4).unwrap();
    assert!(!vec.is_spilled());
    vec.extend([1, 2]);
    // growth keeps the live elements intact across the spill
    vec.try_reserve(10).unwrap();
    assert!(vec.is_spilled());
    assert_eq!(vec, [1, 2]);
    assert!(vec.capacity() >= 12);
}

#[test]
fn small_zst_never_spills() {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Zst;

    let mut vec: SmallVec<Zst, 4> = SmallVec::new();
    for _ in 0..100 {
        vec.push(Zst);
    }
    assert_eq!(vec.len(), 100);
    assert!(!vec.is_spilled());
    assert_eq!(vec.capacity(), usize::MAX);
}
