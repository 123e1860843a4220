//! The immutable-view sequence type.
//!
//! `Frozen<T>` is a `Vec<T>` that has been committed to the immutable
//! contract. It has exactly the size and layout of `Vec<T>`: no wrapper
//! allocation, no indirection, no extra word. Read access goes through
//! [`Deref<Target = [T]>`](core::ops::Deref) and the [`SeqView`](crate::SeqView)
//! capability set; there is no `DerefMut` and no method that hands out
//! `&mut T`.
//!
//! ```text
//! Vec<T>     [ptr | cap | len] ──▶ [t0, t1, ...]
//! Frozen<T>  [ptr | cap | len] ──▶ [t0, t1, ...]   same bytes, read-only type
//! ```
//!
//! # Gotchas
//!
//! - **Shallow**: interior mutability inside `T` (`Cell`, `RefCell`, atomics)
//!   is not prevented. `Frozen<RefCell<U>>` can still change what it observes.
//! - **Identity of zero-sized types**: all `Frozen<T>` of a zero-sized `T` with
//!   the same length compare identical under [`Frozen::ptr_eq`].

use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, Index};
use core::slice::SliceIndex;

use crate::convert::claim_sole_ownership;
use crate::verify::{SealState, Settled};
use crate::{Vec, vec};

/// An owned, read-only sequence backed by the same storage as a `Vec<T>`.
///
/// Construct one with [`claim_sole_ownership`], [`copy_of`](crate::copy_of),
/// [`SeqBuilder::build`](crate::SeqBuilder::build) or the
/// [`frozen!`](crate::frozen) macro.
///
/// # Example
///
/// ```
/// use frost_core::{Frozen, SeqView, claim_sole_ownership};
///
/// let names = claim_sole_ownership(vec!["one", "two", "three"]);
/// assert_eq!(names.len(), 3);
/// assert_eq!(names[1], "two");
/// assert_eq!(names.index_of(&"three"), Some(2));
///
/// let upper: Frozen<String> = names.map(|s, _, _| s.to_uppercase());
/// assert_eq!(upper, ["ONE", "TWO", "THREE"]);
/// ```
///
/// # Read-only
///
/// Even an owned, `mut` binding cannot change the elements or the length:
///
/// ```compile_fail
/// # use frost_core::frozen;
/// let mut numbers = frozen![3, 1, 2];
/// numbers.push(1); // ERROR: no method `push` on `Frozen<i32>`
/// ```
///
/// ```compile_fail
/// # use frost_core::frozen;
/// let mut numbers = frozen![3, 1, 2];
/// numbers[0] = 1; // ERROR: `IndexMut` is not implemented
/// ```
///
/// ```compile_fail
/// # use frost_core::frozen;
/// let mut numbers = frozen![3, 1, 2];
/// numbers.sort(); // ERROR: cannot borrow data in dereference as mutable
/// ```
///
/// ```compile_fail
/// # use frost_core::frozen;
/// let mut numbers = frozen![3, 1, 2];
/// let slice: &mut [i32] = &mut *numbers; // ERROR: `DerefMut` is not implemented
/// slice[0] = 0;
/// ```
#[repr(transparent)]
pub struct Frozen<T> {
    items: Vec<T>,
}

static_assertions::assert_eq_size!(Frozen<u8>, Vec<u8>);
static_assertions::assert_eq_size!(Frozen<u64>, Vec<u64>);
static_assertions::assert_eq_size!(Frozen<crate::String>, Vec<crate::String>);
static_assertions::assert_eq_align!(Frozen<u64>, Vec<u64>);

impl<T> Frozen<T> {
    /// The canonical empty sequence.
    ///
    /// Never allocates. Every canonical empty value of a given `T` is identical
    /// under [`Frozen::ptr_eq`].
    pub const EMPTY: Self = Frozen { items: Vec::new() };

    /// Returns the canonical empty sequence.
    #[inline]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Freezes `items` without copying. Same as [`claim_sole_ownership`].
    #[inline]
    pub fn from_vec(items: Vec<T>) -> Self {
        claim_sole_ownership(items)
    }

    /// Wraps `items` with no logging. Only conversion code should call this.
    #[inline(always)]
    pub(crate) const fn settle(items: Vec<T>) -> Self {
        Frozen { items }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns `true` if both values are backed by the same storage.
    ///
    /// This is reference identity, not element equality: `copy_of` of an
    /// already frozen value is identical to it, a fresh copy is not.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        core::ptr::eq(this.items.as_ptr(), other.items.as_ptr())
            && this.items.len() == other.items.len()
    }

    /// Returns `true` if this is the canonical empty sequence.
    #[inline]
    pub fn is_canonical_empty(&self) -> bool {
        Self::ptr_eq(self, &Self::EMPTY)
    }
}

impl<T> Deref for Frozen<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for Frozen<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Borrow<[T]> for Frozen<T> {
    #[inline]
    fn borrow(&self) -> &[T] {
        &self.items
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Frozen<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T> Default for Frozen<T> {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Deep copy. The clone owns new storage and is not identical to `self`.
impl<T: Clone> Clone for Frozen<T> {
    fn clone(&self) -> Self {
        if self.items.is_empty() {
            return Self::EMPTY;
        }
        Frozen::settle(self.items.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Frozen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: Hash> Hash for Frozen<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

// --- Equality and ordering, mirroring Vec ---

impl<T: PartialEq<U>, U> PartialEq<Frozen<U>> for Frozen<T> {
    #[inline]
    fn eq(&self, other: &Frozen<U>) -> bool {
        self.items[..] == other.items[..]
    }
}

impl<T: Eq> Eq for Frozen<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Frozen<T> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.items[..] == other[..]
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for Frozen<T> {
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.items[..] == other[..]
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Frozen<T> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.items[..] == other[..]
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Frozen<T> {
    #[inline]
    fn eq(&self, other: &Vec<U>) -> bool {
        self.items[..] == other[..]
    }
}

impl<T: PartialOrd> PartialOrd for Frozen<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.items.partial_cmp(&other.items)
    }
}

impl<T: Ord> Ord for Frozen<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.items.cmp(&other.items)
    }
}

// --- Conversions ---

impl<T> From<Vec<T>> for Frozen<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        claim_sole_ownership(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Frozen<T> {
    fn from(items: [T; N]) -> Self {
        if N == 0 {
            return Self::EMPTY;
        }
        claim_sole_ownership(Vec::from(items))
    }
}

impl<T> FromIterator<T> for Frozen<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        if items.is_empty() {
            return Self::EMPTY;
        }
        Frozen::settle(items)
    }
}

impl<T> IntoIterator for Frozen<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Frozen<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Settled for Frozen<T> {
    #[inline]
    fn seal_state(&self) -> SealState {
        SealState::Settled
    }
}

#[cfg(test)]
#[path = "frozen_test.rs"]
mod frozen_test;
