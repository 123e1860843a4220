//! Build-once accumulator for frozen sequences.
//!
//! A [`SeqBuilder`] is `Open` until [`build`](SeqBuilder::build) is called, then
//! `Settled` forever. `build` hands the builder's own storage to the returned
//! [`Frozen`] value; nothing is copied.
//!
//! ```text
//!   new() / from_frozen()
//!            │
//!            ▼
//!        ┌───────┐  push / append
//!        │ Open  │◀──────────────┐
//!        └───┬───┘───────────────┘
//!            │ build()
//!            ▼
//!        ┌─────────┐  push / append / build
//!        │ Settled │──────────────────────▶ Error::AlreadyBuilt   (Checked)
//!        └─────────┘                        silently proceeds     (Unchecked)
//! ```
//!
//! With [`Unchecked`](crate::verify::Unchecked) the seal is `()`, so the builder
//! is exactly a `Vec<T>` and every check is compiled out. Calls after `build`
//! then act on the (empty) storage left behind, which is memory safe but
//! almost certainly a bug in the caller.

use core::fmt;
use core::marker::PhantomData;

use crate::Vec;
use crate::convert::{claim_sole_ownership, to_mutable_copy};
use crate::error::Result;
use crate::frozen::Frozen;
use crate::verify::{DefaultPolicy, Policy, ensure_open, mark_settled};

/// Incrementally builds a [`Frozen`] sequence, exactly once.
///
/// The builder exposes no length, indexing, iteration or seal state: the
/// elements are only observable through the value `build` returns, and a
/// settled builder only through the errors its methods report.
///
/// ```compile_fail
/// # use frost_core::{SeqBuilder, Settled};
/// let builder = SeqBuilder::<u8>::new();
/// builder.is_settled(); // ERROR: `Settled` is not implemented for `SeqBuilder`
/// ```
///
/// # Example
///
/// ```
/// use frost_core::{Error, SeqBuilder, verify::Checked};
///
/// let mut builder = SeqBuilder::<&str, Checked>::with_policy();
/// builder.push("one")?;
/// builder.append(["two", "three"])?;
///
/// let numbers = builder.build()?;
/// assert_eq!(numbers, ["one", "two", "three"]);
///
/// assert_eq!(builder.push("four"), Err(Error::AlreadyBuilt));
/// assert_eq!(builder.build(), Err(Error::AlreadyBuilt));
/// # Ok::<(), Error>(())
/// ```
pub struct SeqBuilder<T, P: Policy = DefaultPolicy> {
    items: Vec<T>,
    seal: P::Seal,
    _policy: PhantomData<P>,
}

impl<T> SeqBuilder<T> {
    /// Creates an empty, open builder using [`DefaultPolicy`]. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy()
    }

    /// Creates an empty, open builder with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity)
    }

    /// Creates an open builder seeded with a copy of every element of `view`.
    ///
    /// `view` is left untouched and stays valid; the builder owns new storage.
    pub fn from_frozen(view: &Frozen<T>) -> Self
    where
        T: Clone,
    {
        Self::from_frozen_with_policy(view)
    }
}

impl<T, P: Policy> SeqBuilder<T, P> {
    /// Like [`SeqBuilder::new`], with the policy chosen by the caller.
    #[inline]
    pub fn with_policy() -> Self {
        Self::from_vec(Vec::new())
    }

    pub fn with_capacity_and_policy(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    pub fn from_frozen_with_policy(view: &Frozen<T>) -> Self
    where
        T: Clone,
    {
        Self::from_vec(to_mutable_copy(view))
    }

    fn from_vec(items: Vec<T>) -> Self {
        SeqBuilder {
            items,
            seal: P::Seal::default(),
            _policy: PhantomData,
        }
    }

    /// Appends one element.
    #[inline]
    pub fn push(&mut self, item: T) -> Result<()> {
        ensure_open::<P>(&self.seal)?;
        self.items.push(item);
        Ok(())
    }

    /// Appends every element of `items`, in order.
    ///
    /// Accepts anything iterable: an array literal for a handful of values, or
    /// another collection for a bulk append. An empty source is a no-op.
    pub fn append<I: IntoIterator<Item = T>>(&mut self, items: I) -> Result<()> {
        ensure_open::<P>(&self.seal)?;
        self.items.extend(items);
        Ok(())
    }

    /// Settles the builder and returns its storage as a frozen sequence.
    ///
    /// An empty builder yields [`Frozen::EMPTY`].
    pub fn build(&mut self) -> Result<Frozen<T>> {
        ensure_open::<P>(&self.seal)?;
        mark_settled(&mut self.seal);
        let items = core::mem::take(&mut self.items);
        tracing::debug!(len = items.len(), policy = P::NAME, "built frozen sequence");
        if items.is_empty() {
            return Ok(Frozen::EMPTY);
        }
        Ok(claim_sole_ownership(items))
    }
}

impl<T, P: Policy> Default for SeqBuilder<T, P> {
    fn default() -> Self {
        Self::with_policy()
    }
}

impl<T, P: Policy> fmt::Debug for SeqBuilder<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqBuilder")
            .field("policy", &P::NAME)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_eq_size!(SeqBuilder<u8, crate::verify::Unchecked>, Vec<u8>);

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
