//! ArrayMap - an array that tolerates negative indices and gaps
//!
//! # Overview
//!
//! [`ArrayMap`] stores values by `i64` index. Unlike a `Vec`, indices may be
//! negative, slots may be left empty, and the collection grows at both ends:
//!
//! - [`push`](ArrayMap::push) / [`pop`](ArrayMap::pop) work at the upper bound
//! - [`unshift`](ArrayMap::unshift) / [`shift`](ArrayMap::shift) work at the lower bound
//! - [`set`](ArrayMap::set) writes anywhere and widens the bounds to match
//!
//! Reading an empty slot is never an error; it yields `None`.
//!
//! # Quick Start
//!
//! ```
//! use arraymap::ArrayMap;
//!
//! let mut map = ArrayMap::new();
//! map.push("one").push("two").unshift("zero");
//! map.set("-5", "far below")?;
//!
//! assert_eq!(map.lower_bound(), -5);
//! assert_eq!(map.upper_bound(), 2);
//! assert_eq!(map.count(), 4);
//! assert_eq!(map.length(), 8);
//! assert_eq!(map.first(), Some(&"far below"));
//! # Ok::<(), arraymap::Error>(())
//! ```
//!
//! # Cursors
//!
//! [`ArrayMap::iterator`] and [`ArrayMap::reverse_iterator`] return a
//! [`Cursor`] over a copy of the extent. Later writes to the map do not show
//! up in a cursor that already exists:
//!
//! ```
//! use arraymap::ArrayMap;
//!
//! let mut map: ArrayMap<i32> = [1, 2].into_iter().collect();
//! let mut cursor = map.iterator();
//! map.push(3);
//!
//! let mut seen = Vec::new();
//! while cursor.has_next() {
//!     seen.push(cursor.next().copied());
//! }
//! assert_eq!(seen, vec![None, Some(1), Some(2)]);
//! ```
//!
//! # Features
//!
//! - `std` (default): build `arraymap-core` against `std`. Without it the crate
//!   is `no_std` and only needs `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

pub use arraymap_core::{
    ArrayMap, Cursor, Entries, Error, IntoIndex, IntoIter, Iter, Result, array_map, cursor,
    index,
};

/// Glob-importable set of the commonly used names.
pub mod prelude {
    pub use arraymap_core::{ArrayMap, Cursor, IntoIndex};
}
