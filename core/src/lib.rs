#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Sparse, index-addressable storage with negative indices and gaps.
//!
//! An [`ArrayMap`] behaves like an array whose extent can grow in both
//! directions: [`push`](ArrayMap::push) writes just above the upper bound,
//! [`unshift`](ArrayMap::unshift) just below the lower bound, and
//! [`set`](ArrayMap::set) writes anywhere, widening the bounds as needed.
//! Slots inside the extent may be empty; reading one yields `None`.
//!
//! Traversal goes through a [`Cursor`], which owns a snapshot of the extent
//! taken when it was created. Mutating the map afterwards never affects a
//! cursor that already exists.
//!
//! ```
//! use arraymap_core::ArrayMap;
//!
//! let mut map = ArrayMap::new();
//! map.push(1).push(2).unshift(0);
//!
//! assert_eq!(map.lower_bound(), -1);
//! assert_eq!(map.upper_bound(), 2);
//! assert_eq!(map.to_vec(), vec![Some(0), None, Some(1), Some(2)]);
//! ```

extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{fmt, format, string::String, string::ToString, vec, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod array_map;
pub mod cursor;
pub mod error;
pub mod index;

pub use array_map::{ArrayMap, Entries, Iter};
pub use cursor::{Cursor, IntoIter};
pub use error::{Error, Result};
pub use index::IntoIndex;
