//! `serde` support, enabled by the `serde` feature.
//!
//! A frozen sequence serializes exactly like the `Vec<T>` it wraps.
//! Deserializing builds a fresh `Vec<T>` and freezes it in place, so the
//! decoded value is owned by nobody else.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Vec;
use crate::convert::copy_of;
use crate::frozen::Frozen;

impl<T: Serialize> Serialize for Frozen<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Frozen<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(copy_of(items))
    }
}
