//! Construction macros.
//!
//! # Example
//!
//! ```
//! use frost_core::{Frozen, frozen};
//!
//! let empty: Frozen<i32> = frozen![];
//! assert!(empty.is_canonical_empty());
//!
//! let zeros = frozen![0u8; 4];
//! assert_eq!(zeros, [0, 0, 0, 0]);
//!
//! let words = frozen!["one", "two", "three"];
//! assert_eq!(words.len(), 3);
//! ```

/// Creates a [`Frozen`](crate::Frozen) sequence with `vec!` syntax.
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `frozen![]` | the canonical empty sequence |
/// | `frozen![x; n]` | `n` clones of `x` |
/// | `frozen![a, b, c]` | the listed elements, in order |
///
/// The backing vector is frozen in place with
/// [`claim_sole_ownership`](crate::claim_sole_ownership); nothing is copied.
#[macro_export]
macro_rules! frozen {
    () => {
        $crate::Frozen::EMPTY
    };

    ($elem:expr; $n:expr) => {
        $crate::copy_of($crate::shim::vec![$elem; $n])
    };

    ($($item:expr),+ $(,)?) => {
        $crate::claim_sole_ownership($crate::shim::vec![$($item),+])
    };
}
