//! Read-only capability set of a frozen sequence.
//!
//! [`SeqView`] and the shared slice behind `Deref` are the complete, closed
//! list of operations a receiver of a [`Frozen`] sequence can perform. The
//! trait is sealed: `Frozen<T>` is the only implementor, and no method in it
//! can mutate the sequence.
//!
//! Operations the native slice already offers (`len`, `get`, `iter`,
//! `contains`, `join`, ...) are reached through `Deref<Target = [T]>` and are
//! not repeated here, so importing this trait never hides them.
//!
//! The higher-order operations follow the conventions of array callbacks: the
//! closure receives the element, its index and the sequence itself.

use core::fmt::{Display, Write};
use core::ops::{Bound, RangeBounds};

use crate::String;
use crate::frozen::Frozen;

mod private {
    pub trait Sealed {}
}

impl<T> private::Sealed for Frozen<T> {}

/// Read-only operations on an immutable sequence.
pub trait SeqView<T>: private::Sealed + Sized {
    fn as_slice(&self) -> &[T];

    // --- Search ---

    /// Index of the first element equal to `needle`.
    fn index_of(&self, needle: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|item| item == needle)
    }

    /// Index of the last element equal to `needle`.
    fn last_index_of(&self, needle: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().rposition(|item| item == needle)
    }

    // --- Extraction ---

    /// Copies the elements in `range` into a new frozen sequence.
    ///
    /// Bounds are clamped to the length, so out-of-range or inverted bounds
    /// produce a shorter or empty result instead of panicking.
    fn subrange(&self, range: impl RangeBounds<usize>) -> Frozen<T>
    where
        T: Clone,
    {
        let len = self.as_slice().len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        }
        .min(len);
        if start >= end {
            return Frozen::EMPTY;
        }
        self.as_slice()[start..end].iter().cloned().collect()
    }

    /// Renders every element with `Display`, separated by `separator`.
    ///
    /// Distinct from the slice `join`, which concatenates elements that are
    /// themselves sequences or strings.
    fn join_display(&self, separator: &str) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        for (i, item) in self.as_slice().iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{item}");
        }
        out
    }

    // --- Traversal ---

    fn for_each(&self, mut f: impl FnMut(&T, usize, &Self)) {
        for (i, item) in self.as_slice().iter().enumerate() {
            f(item, i, self);
        }
    }

    /// Builds a new frozen sequence from the results of `f`, in order.
    fn map<U>(&self, mut f: impl FnMut(&T, usize, &Self) -> U) -> Frozen<U> {
        self.as_slice()
            .iter()
            .enumerate()
            .map(|(i, item)| f(item, i, self))
            .collect()
    }

    /// Copies the elements for which `predicate` holds into a new frozen sequence.
    fn filter(&self, mut predicate: impl FnMut(&T, usize, &Self) -> bool) -> Frozen<T>
    where
        T: Clone,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .filter(|&(i, item)| predicate(item, i, self))
            .map(|(_, item)| item.clone())
            .collect()
    }

    fn find(&self, mut predicate: impl FnMut(&T, usize, &Self) -> bool) -> Option<&T> {
        self.as_slice()
            .iter()
            .enumerate()
            .find(|&(i, item)| predicate(item, i, self))
            .map(|(_, item)| item)
    }

    fn find_index(&self, mut predicate: impl FnMut(&T, usize, &Self) -> bool) -> Option<usize> {
        self.as_slice()
            .iter()
            .enumerate()
            .position(|(i, item)| predicate(item, i, self))
    }

    /// `true` if `predicate` holds for every element (vacuously for an empty sequence).
    fn every(&self, mut predicate: impl FnMut(&T, usize, &Self) -> bool) -> bool {
        self.as_slice()
            .iter()
            .enumerate()
            .all(|(i, item)| predicate(item, i, self))
    }

    /// `true` if `predicate` holds for at least one element.
    fn some(&self, mut predicate: impl FnMut(&T, usize, &Self) -> bool) -> bool {
        self.as_slice()
            .iter()
            .enumerate()
            .any(|(i, item)| predicate(item, i, self))
    }

    /// Left fold starting from `init`.
    fn reduce<A>(&self, init: A, mut f: impl FnMut(A, &T, usize, &Self) -> A) -> A {
        self.as_slice()
            .iter()
            .enumerate()
            .fold(init, |acc, (i, item)| f(acc, item, i, self))
    }

    /// Right fold starting from `init`: visits the last element first.
    fn reduce_right<A>(&self, init: A, mut f: impl FnMut(A, &T, usize, &Self) -> A) -> A {
        self.as_slice()
            .iter()
            .enumerate()
            .rev()
            .fold(init, |acc, (i, item)| f(acc, item, i, self))
    }
}

impl<T> SeqView<T> for Frozen<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        Frozen::as_slice(self)
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
