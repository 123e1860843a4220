//! Error type for the builder API.
//!
//! Conversions never fail. The only runtime violation this crate reports is a
//! builder being used after it was built, and only when the active
//! [`Policy`](crate::verify::Policy) verifies invariants.

use thiserror::Error;

/// Errors reported by [`SeqBuilder`](crate::builder::SeqBuilder).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// `push`, `append` or `build` was called on a builder that was already built.
    #[error("sequence builder was already built")]
    AlreadyBuilt,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
