//! Read-only sequence view.

use std::fmt;
use std::ops::Index;

use super::{check_index, check_window};
use crate::error::SequenceError;

/// A read-only `offset`/`count` window over a slice.
///
/// The view remembers the whole container it was cut from, so sub-windows can
/// be re-based and two views can tell whether they cover the exact same
/// region.
///
/// # Examples
///
/// ```rust
/// use seqview::view::SequenceView;
///
/// let values = [10, 20, 30, 40];
/// let view = SequenceView::with_range(&values, 1, 2).unwrap();
///
/// assert_eq!(view.offset(), 1);
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.get(0), Some(&20));
/// assert_eq!(view.get(2), None);
/// assert!(view.at(2).is_err());
/// ```
pub struct SequenceView<'a, T> {
    items: &'a [T],
    offset: usize,
    count: usize,
}

impl<T> Clone for SequenceView<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SequenceView<'_, T> {}

impl<'a, T> SequenceView<'a, T> {
    /// Creates a view over the whole container.
    #[must_use]
    pub const fn new(items: &'a [T]) -> Self {
        Self {
            items,
            offset: 0,
            count: items.len(),
        }
    }

    /// Creates a view over `items[offset..offset + count]`.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::OutOfRange`] if `offset > items.len()`.
    /// - [`SequenceError::InvalidArgument`] if `count` does not fit after `offset`.
    pub fn with_range(items: &'a [T], offset: usize, count: usize) -> Result<Self, SequenceError> {
        check_window("SequenceView::with_range", items.len(), offset, count)?;
        Ok(Self {
            items,
            offset,
            count,
        })
    }

    /// Builds a view without validation. Callers guarantee the window fits.
    #[inline]
    pub(crate) const fn from_parts(items: &'a [T], offset: usize, count: usize) -> Self {
        Self {
            items,
            offset,
            count,
        }
    }

    /// Offset of the window inside its container.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of elements in the window.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the window is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Length of the whole container behind the window.
    #[inline]
    #[must_use]
    pub const fn container_len(&self) -> usize {
        self.items.len()
    }

    /// The window's elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        &self.items[self.offset..self.offset + self.count]
    }

    /// Returns the element at `index`, or `None` outside the window.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&'a T, SequenceError> {
        check_index("SequenceView::at", index, self.count)?;
        Ok(&self.items[self.offset + index])
    }

    /// First element of the window.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&'a T> {
        self.as_slice().first()
    }

    /// Last element of the window.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&'a T> {
        self.as_slice().last()
    }

    /// Returns an iterator over the window.
    #[inline]
    pub fn iter(&self) -> SequenceViewIterator<'a, T> {
        SequenceViewIterator {
            inner: self.as_slice().iter(),
        }
    }

    /// Returns the sub-window `[start, start + count)` of this window.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::OutOfRange`] if `start > self.len()`.
    /// - [`SequenceError::InvalidArgument`] if `count` does not fit after `start`.
    pub fn window(&self, start: usize, count: usize) -> Result<Self, SequenceError> {
        check_window("SequenceView::window", self.count, start, count)?;
        Ok(Self::from_parts(self.items, self.offset + start, count))
    }

    /// Drops the first `count` elements.
    ///
    /// This is how an interrupted copy is resumed: re-base each source at the
    /// offset reported by the previous call.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `count > self.len()`.
    pub fn skip(&self, count: usize) -> Result<Self, SequenceError> {
        if count > self.count {
            return Err(SequenceError::out_of_range(
                "SequenceView::skip",
                "count",
                count,
                self.count,
            ));
        }
        Ok(Self::from_parts(
            self.items,
            self.offset + count,
            self.count - count,
        ))
    }

    /// Returns `true` if both views cover the same elements of the same storage.
    ///
    /// Views over different windows of one container are not the same region,
    /// even when their contents happen to be equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::view::SequenceView;
    ///
    /// let values = [1, 1, 1, 1];
    /// let left = SequenceView::with_range(&values, 0, 2).unwrap();
    /// let right = SequenceView::with_range(&values, 2, 2).unwrap();
    ///
    /// assert!(left.is_same_region(&left));
    /// assert!(!left.is_same_region(&right));
    /// ```
    #[must_use]
    pub fn is_same_region(&self, other: &Self) -> bool {
        self.count == other.count && std::ptr::eq(self.as_slice().as_ptr(), other.as_slice().as_ptr())
    }
}

impl<T> Index<usize> for SequenceView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a, T> From<&'a [T]> for SequenceView<'a, T> {
    #[inline]
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for SequenceView<'a, T> {
    #[inline]
    fn from(items: &'a [T; N]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for SequenceView<'a, T> {
    #[inline]
    fn from(items: &'a Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for SequenceView<'a, T> {
    type Item = &'a T;
    type IntoIter = SequenceViewIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &SequenceView<'a, T> {
    type Item = &'a T;
    type IntoIter = SequenceViewIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SequenceView<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SequenceView")
            .field("offset", &self.offset)
            .field("count", &self.count)
            .field("items", &self.as_slice())
            .finish()
    }
}

/// Iterator over the elements of a [`SequenceView`].
pub struct SequenceViewIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SequenceViewIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SequenceViewIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SequenceViewIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}
