//! Conversions between mutable and frozen sequences.
//!
//! | Function | Cost | When to use |
//! |---|---|---|
//! | [`claim_sole_ownership`] | O(1), no copy | you own the `Vec` and are done mutating it |
//! | [`copy_of`] | O(1) or O(n) | you only have a borrow, or you don't know |
//! | [`to_mutable_copy`] | O(n) | you need a `Vec` to edit, starting from a frozen value |
//!
//! `claim_sole_ownership` takes the vector by value, so "nobody else can still
//! mutate it" is checked by the borrow checker rather than trusted.

use crate::Vec;
use crate::frozen::Frozen;

/// Freezes `seq` in place. No copy, no allocation.
///
/// ```
/// use frost_core::{Frozen, claim_sole_ownership};
///
/// let mut scratch = Vec::with_capacity(3);
/// scratch.extend([1, 2, 3]);
/// let ptr = scratch.as_ptr();
///
/// let frozen: Frozen<i32> = claim_sole_ownership(scratch);
/// assert_eq!(frozen.as_ptr(), ptr);
/// ```
///
/// The vector is moved, so no alias survives to mutate the frozen value:
///
/// ```compile_fail
/// # use frost_core::claim_sole_ownership;
/// let mut scratch = vec![3, 1, 2];
/// let frozen = claim_sole_ownership(scratch);
/// scratch.push(4); // ERROR: borrow of moved value `scratch`
/// # drop(frozen);
/// ```
#[inline]
pub fn claim_sole_ownership<T>(seq: Vec<T>) -> Frozen<T> {
    tracing::trace!(len = seq.len(), strategy = "alias", "froze sequence");
    Frozen::settle(seq)
}

/// Produces a frozen sequence from `source`, copying only when it must.
///
/// In order:
/// 1. an empty source yields [`Frozen::EMPTY`];
/// 2. an already frozen source (passed by value) is returned unchanged;
/// 3. an owned `Vec` is frozen in place, ownership being proven by the move;
/// 4. a borrowed source is cloned element by element into new storage.
///
/// ```
/// use frost_core::{Frozen, copy_of};
///
/// let source = vec![1, 2, 3];
/// let first = copy_of(&source);
/// assert!(!core::ptr::eq(first.as_ptr(), source.as_ptr()));
///
/// let ptr = first.as_ptr();
/// let again = copy_of(first);
/// assert_eq!(again.as_ptr(), ptr);
///
/// let empty: Vec<i32> = Vec::with_capacity(8);
/// assert!(copy_of(&empty).is_canonical_empty());
/// ```
#[inline]
pub fn copy_of<T, S: CopySource<T>>(source: S) -> Frozen<T> {
    source.copy_frozen()
}

/// Clones every element of `view` into a new, independent `Vec`.
pub fn to_mutable_copy<T: Clone>(view: &Frozen<T>) -> Vec<T> {
    tracing::trace!(len = view.len(), "thawed copy of frozen sequence");
    view.as_slice().to_vec()
}

/// Values accepted by [`copy_of`].
///
/// Borrowed sources (`&[T]`, `&[T; N]`, `&Vec<T>`) are copied. Owned sources
/// (`Vec<T>`, `Frozen<T>`) are reused. To copy a frozen value you only hold by
/// reference, pass `frozen.as_slice()` or clone it.
pub trait CopySource<T> {
    fn copy_frozen(self) -> Frozen<T>;
}

impl<T> CopySource<T> for Frozen<T> {
    fn copy_frozen(self) -> Frozen<T> {
        if self.is_empty() {
            tracing::trace!(strategy = "canonical-empty", "froze sequence");
            return Frozen::EMPTY;
        }
        tracing::trace!(len = self.len(), strategy = "settled", "froze sequence");
        self
    }
}

impl<T> CopySource<T> for Vec<T> {
    fn copy_frozen(self) -> Frozen<T> {
        if self.is_empty() {
            tracing::trace!(strategy = "canonical-empty", "froze sequence");
            return Frozen::EMPTY;
        }
        claim_sole_ownership(self)
    }
}

impl<T: Clone> CopySource<T> for &[T] {
    fn copy_frozen(self) -> Frozen<T> {
        copy_slice(self)
    }
}

impl<T: Clone> CopySource<T> for &Vec<T> {
    fn copy_frozen(self) -> Frozen<T> {
        copy_slice(self)
    }
}

impl<T: Clone, const N: usize> CopySource<T> for &[T; N] {
    fn copy_frozen(self) -> Frozen<T> {
        copy_slice(self)
    }
}

fn copy_slice<T: Clone>(items: &[T]) -> Frozen<T> {
    if items.is_empty() {
        tracing::trace!(strategy = "canonical-empty", "froze sequence");
        return Frozen::EMPTY;
    }
    tracing::trace!(len = items.len(), strategy = "copy", "froze sequence");
    claim_sole_ownership(items.to_vec())
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod convert_test;
