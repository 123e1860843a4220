//! Tests for the build-once sequence builder

use expect_test::expect;
use pretty_assertions::assert_eq;

use crate::test_utils::init_test_logging;
use crate::verify::{Checked, Seal, SealState, Unchecked, is_settled};
use crate::{Error, SeqBuilder, frozen};

type CheckedBuilder<T> = SeqBuilder<T, Checked>;
type UncheckedBuilder<T> = SeqBuilder<T, Unchecked>;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_empty_builder_builds_empty_value() {
    let mut builder = CheckedBuilder::<String>::with_policy();
    let built = builder.build().unwrap();
    assert_eq!(built.len(), 0);
    assert!(built.is_canonical_empty());
}

#[test]
fn test_default_policy_builder() {
    let mut builder: SeqBuilder<i32> = SeqBuilder::new();
    builder.push(1).unwrap();
    assert_eq!(builder.build().unwrap(), [1]);
}

#[test]
fn test_with_capacity() {
    let mut builder = SeqBuilder::with_capacity(3);
    builder.append([1, 2, 3]).unwrap();
    assert_eq!(builder.build().unwrap(), [1, 2, 3]);
}

#[test]
fn test_from_frozen_copies_the_view() {
    let view = frozen![String::from("one"), String::from("two")];
    let mut builder = SeqBuilder::from_frozen(&view);
    builder.push(String::from("three")).unwrap();

    let built = builder.build().unwrap();
    assert_eq!(built, ["one", "two", "three"]);
    assert_eq!(view, ["one", "two"]);
    assert!(!core::ptr::eq(built.as_ptr(), view.as_ptr()));
}

// ============================================================================
// Appending
// ============================================================================

#[test]
fn test_push_individually() {
    let mut builder = CheckedBuilder::with_policy();
    builder.push("one").unwrap();
    builder.push("two").unwrap();
    builder.push("three").unwrap();

    let built = builder.build().unwrap();
    assert_eq!(built.len(), 3);
    assert_eq!(built, ["one", "two", "three"]);
}

#[test]
fn test_append_several_at_once_matches_individual_pushes() {
    let mut one_by_one = CheckedBuilder::with_policy();
    for word in ["one", "two", "three"] {
        one_by_one.push(word).unwrap();
    }

    let mut at_once = CheckedBuilder::with_policy();
    at_once.append(["one", "two", "three"]).unwrap();

    assert_eq!(at_once.build().unwrap(), one_by_one.build().unwrap());
}

#[test]
fn test_append_all_from_collection() {
    let source = vec!["one", "two", "three"];
    let mut builder = CheckedBuilder::with_policy();
    builder.append(source.iter().copied()).unwrap();
    assert_eq!(builder.build().unwrap(), ["one", "two", "three"]);

    let mut builder = CheckedBuilder::with_policy();
    builder.append(source).unwrap();
    assert_eq!(builder.build().unwrap(), ["one", "two", "three"]);
}

#[test]
fn test_append_preserves_order_across_calls() {
    let mut builder = CheckedBuilder::with_policy();
    builder.append([1, 2]).unwrap();
    builder.push(3).unwrap();
    builder.append(vec![4, 5]).unwrap();
    assert_eq!(builder.build().unwrap(), [1, 2, 3, 4, 5]);
}

#[test]
fn test_appending_nothing_is_a_no_op() {
    let mut builder = CheckedBuilder::<u8>::with_policy();
    builder.append([]).unwrap();
    builder.append(Vec::new()).unwrap();
    assert_eq!(builder.seal.state(), SealState::Open);
    assert!(builder.build().unwrap().is_canonical_empty());
}

// ============================================================================
// Build-once enforcement
// ============================================================================

#[test]
fn test_build_twice_fails() {
    init_test_logging();
    let mut builder = CheckedBuilder::with_policy();
    builder.push("one").unwrap();

    assert_eq!(builder.build().unwrap(), ["one"]);
    assert_eq!(builder.build(), Err(Error::AlreadyBuilt));
    assert_eq!(builder.build(), Err(Error::AlreadyBuilt));
}

#[test]
fn test_push_after_build_fails() {
    let mut builder = CheckedBuilder::with_policy();
    builder.push("one").unwrap();
    let built = builder.build().unwrap();

    assert_eq!(builder.push("two"), Err(Error::AlreadyBuilt));
    assert_eq!(builder.append(["two"]), Err(Error::AlreadyBuilt));
    assert_eq!(built, ["one"]);
}

#[test]
fn test_empty_build_still_settles() {
    let mut builder = CheckedBuilder::<u8>::with_policy();
    builder.build().unwrap();
    assert_eq!(builder.push(1), Err(Error::AlreadyBuilt));
}

#[test]
fn test_seal_state_transitions() {
    let mut builder = CheckedBuilder::<u8>::with_policy();
    assert_eq!(builder.seal.state(), SealState::Open);
    builder.build().unwrap();
    assert_eq!(builder.seal.state(), SealState::Settled);
    assert!(is_settled(&builder.seal));
}

#[test]
fn test_unchecked_builder_proceeds_after_build() {
    let mut builder = UncheckedBuilder::with_policy();
    builder.push("one").unwrap();
    let first = builder.build().unwrap();

    // No verification: the calls succeed against the storage left behind,
    // and never touch the value already built.
    builder.push("two").unwrap();
    let second = builder.build().unwrap();

    assert_eq!(first, ["one"]);
    assert_eq!(second, ["two"]);
    assert_eq!(builder.seal.state(), SealState::Unknown);
}

#[test]
fn test_debug_shows_policy_only() {
    let mut builder = CheckedBuilder::with_policy();
    builder.push(42).unwrap();
    expect![[r#"SeqBuilder { policy: "checked", .. }"#]].assert_eq(&format!("{builder:?}"));

    builder.build().unwrap();
    expect![[r#"SeqBuilder { policy: "checked", .. }"#]].assert_eq(&format!("{builder:?}"));

    let unchecked = UncheckedBuilder::<u8>::with_policy();
    expect![[r#"SeqBuilder { policy: "unchecked", .. }"#]].assert_eq(&format!("{unchecked:?}"));
}
