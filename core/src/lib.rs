#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Zero-cost immutable sequences over `Vec<T>`.
//!
//! See the `frost` crate for the user-facing overview.

// Needed so that macros can uniformly refer to `::frost_core` and still work
// from within this crate or a different one.
extern crate self as frost_core;

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly basically so that macros can always refer to these.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{string::String, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod builder;
pub mod convert;
pub mod error;
pub mod frozen;
pub mod macros;
#[cfg(feature = "serde")]
mod serialize;
pub mod verify;
pub mod view;

pub use builder::SeqBuilder;
pub use convert::{CopySource, claim_sole_ownership, copy_of, to_mutable_copy};
pub use error::{Error, Result};
pub use frozen::Frozen;
pub use verify::{Checked, DefaultPolicy, Policy, Settled, Unchecked, VERIFY_INVARIANTS};
pub use view::SeqView;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with TRACE level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_copy_of_borrowed() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
