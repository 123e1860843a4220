//! Invariant verification.
//!
//! The type system is the primary enforcement: a [`Frozen`](crate::Frozen)
//! sequence has no mutable access at all, so it is always settled. The runtime
//! tier only exists for values that are still reachable through `&mut` after
//! they were settled, i.e. a [`SeqBuilder`](crate::SeqBuilder) that was built.
//!
//! The strength of that runtime tier is a compile-time [`Policy`] injected as a
//! type parameter:
//!
//! | Policy | `VERIFY` | Seal storage | Violations |
//! |---|---|---|---|
//! | [`Checked`] | `true` | [`Sentinel`] (one `bool`) | reported as [`Error::AlreadyBuilt`] |
//! | [`Unchecked`] | `false` | `()` | not detected |
//!
//! [`DefaultPolicy`] is `Checked` in builds with debug assertions and
//! `Unchecked` otherwise. The `verify-invariants` feature forces `Checked`, the
//! `no-verify` feature forces `Unchecked` (`verify-invariants` wins when both
//! are enabled).

use core::fmt::Debug;

use crate::Vec;
use crate::error::{Error, Result};

/// Whether [`DefaultPolicy`] verifies invariants.
pub const VERIFY_INVARIANTS: bool = <DefaultPolicy as Policy>::VERIFY;

/// Policy used when none is named: [`Checked`] in this build.
#[cfg(any(
    feature = "verify-invariants",
    all(debug_assertions, not(feature = "no-verify"))
))]
pub type DefaultPolicy = Checked;

#[cfg(not(any(
    feature = "verify-invariants",
    all(debug_assertions, not(feature = "no-verify"))
)))]
/// Policy used when none is named: [`Unchecked`] in this build.
pub type DefaultPolicy = Unchecked;

/// What a seal knows about the value it guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SealState {
    /// Still accepting mutation.
    Open,
    /// Committed to the immutable contract. Irreversible.
    Settled,
    /// Verification is disabled; nothing is known.
    Unknown,
}

/// Storage for the "has this been settled" marker.
pub trait Seal: Default + Debug {
    /// Marks the guarded value as settled.
    fn settle(&mut self);

    fn state(&self) -> SealState;
}

/// Runtime marker used when verification is enabled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel {
    settled: bool,
}

impl Seal for Sentinel {
    #[inline]
    fn settle(&mut self) {
        self.settled = true;
    }

    #[inline]
    fn state(&self) -> SealState {
        if self.settled {
            SealState::Settled
        } else {
            SealState::Open
        }
    }
}

/// Zero-sized seal used when verification is disabled.
impl Seal for () {
    #[inline(always)]
    fn settle(&mut self) {}

    #[inline(always)]
    fn state(&self) -> SealState {
        SealState::Unknown
    }
}

static_assertions::assert_eq_size!((), <Unchecked as Policy>::Seal);

mod private {
    pub trait Sealed {}
}

/// Compile-time verification policy.
///
/// This is a sealed trait: the only policies are [`Checked`] and [`Unchecked`].
pub trait Policy: private::Sealed + 'static {
    const VERIFY: bool;

    /// Name used in log events.
    const NAME: &'static str;

    type Seal: Seal;
}

/// Verifies invariants at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checked;

/// Skips runtime verification; seals and checks compile away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unchecked;

impl private::Sealed for Checked {}
impl private::Sealed for Unchecked {}

impl Policy for Checked {
    const VERIFY: bool = true;
    const NAME: &'static str = "checked";
    type Seal = Sentinel;
}

impl Policy for Unchecked {
    const VERIFY: bool = false;
    const NAME: &'static str = "unchecked";
    type Seal = ();
}

/// Marks `seal` as settled. A no-op for the `()` seal.
#[inline]
pub fn mark_settled<S: Seal>(seal: &mut S) {
    seal.settle();
}

/// Returns `true` only if `seal` knows its value was settled.
///
/// A disabled seal always answers `false`: verification is skipped rather
/// than reported as passed.
#[inline]
pub fn is_settled<S: Seal>(seal: &S) -> bool {
    seal.state() == SealState::Settled
}

/// Fails with [`Error::AlreadyBuilt`] if `P` verifies and `seal` is settled.
#[inline]
pub(crate) fn ensure_open<P: Policy>(seal: &P::Seal) -> Result<()> {
    if P::VERIFY && is_settled(seal) {
        tracing::debug!(policy = P::NAME, "rejected use of a settled builder");
        return Err(Error::AlreadyBuilt);
    }
    Ok(())
}

/// Query for values that may or may not have been committed to the immutable
/// contract.
pub trait Settled {
    fn seal_state(&self) -> SealState;

    fn is_settled(&self) -> bool {
        self.seal_state() == SealState::Settled
    }
}

impl<T> Settled for Vec<T> {
    #[inline]
    fn seal_state(&self) -> SealState {
        SealState::Open
    }
}

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;
