//! Frost - Zero-cost immutable sequences
//!
//! # Overview
//!
//! Frost lets components hand sequences to each other with a compile-time
//! guarantee that the receiver cannot mutate them, without paying for it at
//! runtime. A [`Frozen<T>`] is a `Vec<T>` with a read-only type: same size,
//! same layout, same heap buffer, no wrapper allocation.
//!
//! # Quick Start
//!
//! ```
//! use frost::{Frozen, SeqView, claim_sole_ownership, copy_of, to_mutable_copy};
//!
//! // Done mutating? Freeze in place, no copy.
//! let mut scratch = vec!["b", "a"];
//! scratch.sort();
//! let sorted: Frozen<&str> = claim_sole_ownership(scratch);
//!
//! // Read-only operations only.
//! assert_eq!(sorted[0], "a");
//! assert_eq!(sorted.join(","), "a,b");
//! assert!(sorted.every(|s, _, _| s.len() == 1));
//!
//! // Only have a borrow? Copy once; already frozen values pass through.
//! let shared = vec![1, 2, 3];
//! let frozen = copy_of(&shared);
//! let same = copy_of(frozen);
//!
//! // Need to edit? Thaw a copy; the frozen value never changes.
//! let mut edited = to_mutable_copy(&same);
//! edited.push(4);
//! assert_eq!(same, [1, 2, 3]);
//! ```
//!
//! # Building Incrementally
//!
//! [`SeqBuilder`] accumulates elements and is built exactly once. Building
//! hands its storage to the result, so nothing is copied.
//!
//! ```
//! use frost::{Error, SeqBuilder, Checked};
//!
//! let mut builder = SeqBuilder::<_, Checked>::with_policy();
//! builder.push("one")?;
//! builder.append(["two", "three"])?;
//! let numbers = builder.build()?;
//!
//! assert_eq!(numbers, ["one", "two", "three"]);
//! assert_eq!(builder.build(), Err(Error::AlreadyBuilt));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Verification Policies
//!
//! Use-after-build is reported at runtime only under a verifying policy. The
//! policy is a type parameter, so a non-verifying builder carries no seal and
//! performs no check:
//!
//! - [`Checked`]: reports [`Error::AlreadyBuilt`].
//! - [`Unchecked`]: calls after `build` proceed silently.
//! - [`DefaultPolicy`]: `Checked` with debug assertions, `Unchecked` in
//!   release. Override with the `verify-invariants` or `no-verify` features.
//!
//! # Ownership
//!
//! [`claim_sole_ownership`] consumes its `Vec`, so no alias able to mutate the
//! frozen value can survive the call. Freezing is shallow: elements with
//! interior mutability (`Cell`, `RefCell`, atomics) can still change.

pub use frost_core::verify::{self, SealState};
pub use frost_core::{
    Checked, CopySource, DefaultPolicy, Error, Frozen, Policy, Result, SeqBuilder, SeqView,
    Settled, Unchecked, VERIFY_INVARIANTS, claim_sole_ownership, copy_of, frozen,
    to_mutable_copy,
};

/// Everything needed to consume and produce frozen sequences.
pub mod prelude {
    pub use frost_core::{
        Frozen, SeqBuilder, SeqView, claim_sole_ownership, copy_of, frozen, to_mutable_copy,
    };
}
