//! Tests for the Frozen type

use core::cell::RefCell;
use std::collections::HashSet;

use expect_test::expect;
use pretty_assertions::assert_eq;

use crate::{Frozen, Settled, claim_sole_ownership, copy_of, frozen};

#[test]
fn test_indexing_and_iteration_follow_insertion_order() {
    let words = claim_sole_ownership(vec!["one", "two", "three"]);

    assert_eq!(words[0], "one");
    assert_eq!(words[2], "three");
    assert_eq!(&words[1..], &["two", "three"]);
    assert_eq!(words.iter().copied().collect::<Vec<_>>(), vec!["one", "two", "three"]);

    let mut seen = Vec::new();
    for word in &words {
        seen.push(*word);
    }
    assert_eq!(seen, vec!["one", "two", "three"]);
}

#[test]
#[should_panic]
fn test_index_out_of_bounds_panics_like_vec() {
    let words = frozen!["one"];
    let _ = words[1];
}

#[test]
fn test_empty_is_canonical() {
    let a: Frozen<String> = Frozen::EMPTY;
    let b: Frozen<String> = Frozen::default();
    let c: Frozen<String> = Frozen::empty();

    assert!(Frozen::ptr_eq(&a, &b));
    assert!(Frozen::ptr_eq(&b, &c));
    assert!(a.is_canonical_empty());
}

#[test]
fn test_claimed_empty_with_capacity_is_not_canonical() {
    // Claiming never reallocates, so the spare capacity stays with the value.
    let frozen: Frozen<u32> = claim_sole_ownership(Vec::with_capacity(16));
    assert!(frozen.is_empty());
    assert!(!frozen.is_canonical_empty());
}

#[test]
fn test_clone_is_equal_but_not_identical() {
    let original = frozen![1, 2, 3];
    let copy = original.clone();

    assert_eq!(copy, original);
    assert!(!Frozen::ptr_eq(&copy, &original));
    assert!(Frozen::ptr_eq(&original, &original));
}

/// Zero-sized elements never allocate, so independent values of the same
/// length share a dangling pointer and look identical.
#[test]
fn test_zero_sized_copies_are_indistinguishable() {
    let first: Frozen<()> = copy_of(&[(), ()]);
    let second: Frozen<()> = copy_of(&[(), ()]);
    assert!(Frozen::ptr_eq(&first, &second));

    let shorter: Frozen<()> = copy_of(&[()]);
    assert!(!Frozen::ptr_eq(&first, &shorter));
    assert!(!first.is_canonical_empty());
}

#[test]
fn test_clone_of_empty_is_canonical() {
    let empty: Frozen<u8> = claim_sole_ownership(Vec::with_capacity(4));
    assert!(empty.clone().is_canonical_empty());
}

#[test]
fn test_equality_against_other_sequences() {
    let numbers = frozen![1, 2, 3];

    assert_eq!(numbers, [1, 2, 3]);
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(numbers, &[1, 2, 3][..]);
    assert_ne!(numbers, [1, 2]);
}

#[test]
fn test_ordering_and_hashing_match_vec() {
    assert!(frozen![1, 2] < frozen![1, 3]);
    assert!(frozen![1, 2, 3] > frozen![1, 2]);

    let mut set = HashSet::new();
    set.insert(frozen!["a", "b"]);
    assert!(set.contains(&frozen!["a", "b"]));
    assert!(!set.contains(&frozen!["b", "a"]));
}

#[test]
fn test_from_conversions() {
    let from_array = Frozen::from([1, 2, 3]);
    assert_eq!(from_array, [1, 2, 3]);

    let from_empty_array: Frozen<i32> = Frozen::from([]);
    assert!(from_empty_array.is_canonical_empty());

    let collected: Frozen<i32> = (1..=3).collect();
    assert_eq!(collected, from_array);

    let collected_empty: Frozen<i32> = core::iter::empty().collect();
    assert!(collected_empty.is_canonical_empty());
}

#[test]
fn test_from_vec_reuses_storage() {
    let items = vec![10, 20, 30];
    let ptr = items.as_ptr();
    let frozen = Frozen::from(items);
    assert_eq!(frozen.as_ptr(), ptr);
}

#[test]
fn test_owned_iteration_yields_elements() {
    let words = frozen![String::from("a"), String::from("b")];
    let owned: Vec<String> = words.into_iter().collect();
    assert_eq!(owned, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_frozen_is_always_settled() {
    assert!(frozen![1].is_settled());
    assert!(Frozen::<u8>::EMPTY.is_settled());
    assert!(!vec![1].is_settled());
}

#[test]
fn test_debug_matches_vec() {
    let words = frozen!["one", "two"];
    expect![[r#"["one", "two"]"#]].assert_eq(&format!("{words:?}"));
}

/// Freezing is shallow: interior mutability inside elements is not prevented.
#[test]
fn test_interior_mutability_is_not_frozen() {
    let cells = frozen![RefCell::new(1), RefCell::new(2)];
    *cells[0].borrow_mut() = 10;
    assert_eq!(*cells[0].borrow(), 10);
}
