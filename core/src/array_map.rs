//! `ArrayMap`: an array that tolerates negative indices and gaps.
//!
//! Storage is a hash map from `i64` to `T` plus two inclusive bounds. The
//! bounds describe the *declared* extent, which is not the same thing as the
//! set of occupied slots:
//!
//! - `push` and `unshift` move a bound outward by one and write the new slot.
//! - `set` writes anywhere and widens whichever bound it has to. It never
//!   narrows them.
//! - `shift` and `pop` remove whatever sits on a bound and then move that bound
//!   inward by one, even if the slot was empty.
//!
//! A fresh map has both bounds at 0 and no entries, so the first `push` lands
//! on index 1, not 0.

use crate::{Cursor, IntoIndex, Result, Vec, fmt};
use core::ops::{Index, RangeInclusive};
use hashbrown::HashMap;

/// Sparse, index-addressable collection with a lower and an upper bound.
///
/// See the [module documentation](self) for how the bounds move.
#[derive(Clone, PartialEq, Eq)]
pub struct ArrayMap<T> {
    entries: HashMap<i64, T>,
    lower_bound: i64,
    upper_bound: i64,
}

impl<T> ArrayMap<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            lower_bound: 0,
            upper_bound: 0,
        }
    }

    /// Moves the upper bound up by one and stores `value` there.
    ///
    /// # Panics
    ///
    /// Panics if the upper bound is already `i64::MAX`, the same way
    /// `Vec::push` panics on capacity overflow. There is no slot left to write
    /// to, and saturating would overwrite the value at `i64::MAX`.
    pub fn push(&mut self, value: T) -> &mut Self {
        self.upper_bound = self
            .upper_bound
            .checked_add(1)
            .expect("upper bound overflow");
        self.entries.insert(self.upper_bound, value);
        self
    }

    /// Moves the lower bound down by one and stores `value` there.
    ///
    /// # Panics
    ///
    /// Panics if the lower bound is already `i64::MIN`. See [`push`](Self::push).
    pub fn unshift(&mut self, value: T) -> &mut Self {
        self.lower_bound = self
            .lower_bound
            .checked_sub(1)
            .expect("lower bound overflow");
        self.entries.insert(self.lower_bound, value);
        self
    }

    /// Stores `value` at `index`, converting the index first.
    ///
    /// Fails with [`Error::InvalidIndex`](crate::Error::InvalidIndex) if
    /// `index` is not an integer. Otherwise behaves like
    /// [`insert`](Self::insert).
    ///
    /// ```
    /// use arraymap_core::{ArrayMap, Error};
    ///
    /// let mut map = ArrayMap::new();
    /// map.set("7", 'a')?.set(-2.5, 'b')?;
    /// assert_eq!(map.get(7), Some(&'a'));
    /// assert_eq!(map.get(-2), Some(&'b'));
    ///
    /// assert!(matches!(map.set("seven", 'c'), Err(Error::InvalidIndex { .. })));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn set(&mut self, index: impl IntoIndex, value: T) -> Result<&mut Self> {
        let index = index.into_index()?;
        Ok(self.insert(index, value))
    }

    /// Stores `value` at `index`, overwriting any previous value and widening
    /// the bounds to include `index`.
    pub fn insert(&mut self, index: i64, value: T) -> &mut Self {
        if index < self.lower_bound {
            tracing::debug!(from = self.lower_bound, to = index, "Widened lower bound");
            self.lower_bound = index;
        }
        if index > self.upper_bound {
            tracing::debug!(from = self.upper_bound, to = index, "Widened upper bound");
            self.upper_bound = index;
        }
        self.entries.insert(index, value);
        self
    }

    #[inline]
    pub fn get(&self, index: i64) -> Option<&T> {
        self.entries.get(&index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: i64) -> Option<&mut T> {
        self.entries.get_mut(&index)
    }

    #[inline]
    pub fn has(&self, index: i64) -> bool {
        self.entries.contains_key(&index)
    }

    /// Removes and returns the value at the lower bound, then moves the lower
    /// bound up by one.
    ///
    /// The bound moves even when the slot was empty, so repeated shifts can
    /// walk the bounds past the data (and the lower bound past the upper).
    ///
    /// # Panics
    ///
    /// Panics if the lower bound is already `i64::MAX`.
    pub fn shift(&mut self) -> Option<T> {
        let value = self.entries.remove(&self.lower_bound);
        if value.is_none() {
            tracing::debug!(index = self.lower_bound, "Shifted an empty slot");
        }
        self.lower_bound = self
            .lower_bound
            .checked_add(1)
            .expect("lower bound overflow");
        value
    }

    /// Removes and returns the value at the upper bound, then moves the upper
    /// bound down by one. Counterpart of [`shift`](Self::shift).
    ///
    /// # Panics
    ///
    /// Panics if the upper bound is already `i64::MIN`.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.entries.remove(&self.upper_bound);
        if value.is_none() {
            tracing::debug!(index = self.upper_bound, "Popped an empty slot");
        }
        self.upper_bound = self
            .upper_bound
            .checked_sub(1)
            .expect("upper bound overflow");
        value
    }

    /// Number of occupied slots.
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Width of the declared extent: `|lower - upper| + 1`.
    ///
    /// Independent of how many slots are occupied; an empty map has length 1.
    /// Saturates at `u64::MAX` for the full `i64` range.
    pub fn length(&self) -> u64 {
        self.lower_bound
            .abs_diff(self.upper_bound)
            .saturating_add(1)
    }

    #[inline(always)]
    pub fn lower_bound(&self) -> i64 {
        self.lower_bound
    }

    #[inline(always)]
    pub fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    /// True when no slot is occupied, whatever the bounds say.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry and resets both bounds to 0.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lower_bound = 0;
        self.upper_bound = 0;
    }

    /// Every index of the extent in ascending order, with its value if any.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            entries: &self.entries,
            range: self.lower_bound..=self.upper_bound,
        }
    }

    /// Occupied slots only, in ascending index order.
    pub fn entries(&self) -> Entries<'_, T> {
        let mut occupied: Vec<(i64, &T)> = self
            .entries
            .iter()
            .map(|(index, value)| (*index, value))
            .collect();
        occupied.sort_unstable_by_key(|(index, _)| *index);
        Entries {
            inner: occupied.into_iter(),
        }
    }

    /// Calls `f` with the value (or `None`) and index of every slot from the
    /// lower to the upper bound, both inclusive.
    pub fn iterate<F>(&self, mut f: F)
    where
        F: FnMut(Option<&T>, i64),
    {
        for (index, value) in self.iter() {
            f(value, index);
        }
    }

    /// First occupied value in the extent, scanning up from the lower bound.
    ///
    /// Values stranded outside the bounds by `shift`/`pop` are not seen.
    pub fn first(&self) -> Option<&T> {
        self.iter().find_map(|(_, value)| value)
    }

    /// First occupied value in the extent, scanning down from the upper bound.
    pub fn last(&self) -> Option<&T> {
        self.iter().rev().find_map(|(_, value)| value)
    }
}

impl<T: Clone> ArrayMap<T> {
    /// Copies the extent into a vector, `None` for empty slots.
    ///
    /// Element `0` corresponds to [`lower_bound`](Self::lower_bound).
    pub fn to_vec(&self) -> Vec<Option<T>> {
        self.iter().map(|(_, value)| value.cloned()).collect()
    }

    /// A cursor over a snapshot of the extent, lower bound first.
    pub fn iterator(&self) -> Cursor<T> {
        Cursor::new(self.to_vec())
    }

    /// A cursor over a snapshot of the extent, upper bound first.
    pub fn reverse_iterator(&self) -> Cursor<T> {
        let mut snapshot = self.to_vec();
        snapshot.reverse();
        Cursor::new(snapshot)
    }
}

impl<T> Default for ArrayMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayMap")
            .field("lower_bound", &self.lower_bound)
            .field("upper_bound", &self.upper_bound)
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, T>(&'a ArrayMap<T>);

impl<T: fmt::Debug> fmt::Debug for DebugEntries<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.entries()).finish()
    }
}

impl<T> Index<i64> for ArrayMap<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if nothing is stored at `index`.
    fn index(&self, index: i64) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("no entry at index {index}"),
        }
    }
}

impl<T> FromIterator<T> for ArrayMap<T> {
    /// Pushes every item, so the first one lands on index 1.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<T> Extend<T> for ArrayMap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayMap<T> {
    type Item = (i64, Option<&'a T>);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over the whole extent of an [`ArrayMap`].
///
/// Created by [`ArrayMap::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    entries: &'a HashMap<i64, T>,
    range: RangeInclusive<i64>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (i64, Option<&'a T>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        Some((index, self.entries.get(&index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.range.next_back()?;
        Some((index, self.entries.get(&index)))
    }
}

/// Iterator over the occupied slots of an [`ArrayMap`], ascending.
///
/// Created by [`ArrayMap::entries`].
#[derive(Debug)]
pub struct Entries<'a, T> {
    inner: crate::vec::IntoIter<(i64, &'a T)>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (i64, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Entries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

static_assertions::assert_impl_all!(ArrayMap<u8>: Send, Sync, Clone, Default);

#[cfg(test)]
#[path = "array_map_test.rs"]
mod array_map_test;
