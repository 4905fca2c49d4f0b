//! One-shot traversal over a snapshot of an `ArrayMap`.
//!
//! A `Cursor` owns its data. It is built from a copy of the map's extent, so
//! writes to the map after the cursor exists are invisible to it.
//!
//! The position starts *before* the first element. [`Cursor::next`] moves
//! forward and then reads; [`Cursor::previous`] reads and then moves back.
//! The two are deliberately not mirror images:
//!
//! ```text
//! data:      [10, 20, 30]
//! position:  -1 ─next→ 0 (10) ─next→ 1 (20) ─previous→ 0 (returned 20)
//! ```

use crate::Vec;
use alloc::vec;

/// Cursor over an owned snapshot of optional values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<T> {
    data: Vec<Option<T>>,
    position: isize,
}

impl<T> Cursor<T> {
    /// Creates a cursor positioned before the first element of `data`.
    pub fn new(data: Vec<Option<T>>) -> Self {
        tracing::trace!(len = data.len(), "Created cursor");
        Self { data, position: -1 }
    }

    /// Number of elements in the snapshot, absent slots included.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The current position, or `None` while the cursor sits before the
    /// first element.
    ///
    /// Past the end this keeps counting, so it may be `>= len()`.
    pub fn position(&self) -> Option<usize> {
        usize::try_from(self.position).ok()
    }

    /// Whether a call to [`next`](Self::next) would land on an element.
    pub fn has_next(&self) -> bool {
        self.is_valid(self.position.saturating_add(1))
    }

    /// Whether the cursor currently sits on an element, i.e. a call to
    /// [`previous`](Self::previous) would read one.
    pub fn has_previous(&self) -> bool {
        self.is_valid(self.position)
    }

    /// Advances by one and returns the element there.
    ///
    /// Returns `None` both for an absent slot and for a read past the end;
    /// use [`has_next`](Self::has_next) to tell them apart.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        self.position = self.position.saturating_add(1);
        self.read(self.position)
    }

    /// Returns the element at the current position, then steps back by one.
    pub fn previous(&mut self) -> Option<&T> {
        let current = self.position;
        self.position = self.position.saturating_sub(1);
        self.read(current)
    }

    /// Calls `f` with every element of the snapshot and its offset, in order.
    ///
    /// Independent of, and does not move, the cursor position.
    pub fn iterate<F>(&self, mut f: F)
    where
        F: FnMut(Option<&T>, usize),
    {
        for (offset, value) in self.data.iter().enumerate() {
            f(value.as_ref(), offset);
        }
    }

    /// True once the position has moved strictly beyond `len()`.
    ///
    /// A cursor sitting on `len()` (one read past the last element) has not
    /// reached the end yet; it takes one more [`next`](Self::next).
    pub fn has_reached_end(&self) -> bool {
        usize::try_from(self.position).is_ok_and(|position| position > self.data.len())
    }

    #[inline(always)]
    fn is_valid(&self, position: isize) -> bool {
        usize::try_from(position).is_ok_and(|position| position < self.data.len())
    }

    #[inline]
    fn read(&self, position: isize) -> Option<&T> {
        let position = usize::try_from(position).ok()?;
        self.data.get(position)?.as_ref()
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for Cursor<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values.into_iter().map(Some).collect())
    }
}

impl<T> IntoIterator for Cursor<T> {
    type Item = Option<T>;
    type IntoIter = IntoIter<T>;

    /// Consumes the elements after the current position.
    fn into_iter(self) -> IntoIter<T> {
        let skip = usize::try_from(self.position.saturating_add(1)).unwrap_or(0);
        IntoIter {
            inner: self.data.into_iter().skip(skip),
        }
    }
}

/// Owning iterator over the unread part of a [`Cursor`].
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: core::iter::Skip<vec::IntoIter<Option<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = Option<T>;

    #[inline]
    fn next(&mut self) -> Option<Option<T>> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Option<T>> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

static_assertions::assert_impl_all!(Cursor<u8>: Send, Sync, Clone);

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
