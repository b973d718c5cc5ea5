//! In-place mutable sequence view.

use std::fmt;
use std::ops::{Index, IndexMut};

use super::{SequenceView, check_index, check_window};
use crate::error::SequenceError;

/// A fixed-length `offset`/`count` window whose elements can be written.
///
/// The window can never be resized; use [`ExpandableView`](super::ExpandableView)
/// for that.
///
/// # Examples
///
/// ```rust
/// use seqview::view::SequenceViewMut;
///
/// let mut values = [1, 2, 3, 4];
/// let mut view = SequenceViewMut::with_range(&mut values, 1, 2).unwrap();
///
/// let previous = view.set(1, 30).unwrap();
/// assert_eq!(previous, 3);
/// assert!(view.set(2, 0).is_err());
/// assert_eq!(values, [1, 2, 30, 4]);
/// ```
pub struct SequenceViewMut<'a, T> {
    items: &'a mut [T],
    offset: usize,
    count: usize,
}

impl<'a, T> SequenceViewMut<'a, T> {
    /// Creates a view over the whole container.
    #[must_use]
    pub fn new(items: &'a mut [T]) -> Self {
        let count = items.len();
        Self {
            items,
            offset: 0,
            count,
        }
    }

    /// Creates a view over `items[offset..offset + count]`.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::OutOfRange`] if `offset > items.len()`.
    /// - [`SequenceError::InvalidArgument`] if `count` does not fit after `offset`.
    pub fn with_range(items: &'a mut [T], offset: usize, count: usize) -> Result<Self, SequenceError> {
        check_window("SequenceViewMut::with_range", items.len(), offset, count)?;
        Ok(Self {
            items,
            offset,
            count,
        })
    }

    #[inline]
    pub(crate) const fn from_parts(items: &'a mut [T], offset: usize, count: usize) -> Self {
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

    /// Reborrows the window read-only.
    #[inline]
    #[must_use]
    pub fn as_view(&self) -> SequenceView<'_, T> {
        SequenceView::from_parts(&*self.items, self.offset, self.count)
    }

    /// Reborrows the window mutably for a shorter lifetime.
    #[inline]
    pub fn reborrow(&mut self) -> SequenceViewMut<'_, T> {
        SequenceViewMut::from_parts(&mut *self.items, self.offset, self.count)
    }

    /// The window's elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items[self.offset..self.offset + self.count]
    }

    /// The window's elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items[self.offset..self.offset + self.count]
    }

    /// Consumes the view, returning the window's elements for the full lifetime.
    #[inline]
    #[must_use]
    pub fn into_mut_slice(self) -> &'a mut [T] {
        let Self {
            items,
            offset,
            count,
        } = self;
        &mut items[offset..offset + count]
    }

    /// Returns the element at `index`, or `None` outside the window.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index` mutably, or `None` outside the window.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&T, SequenceError> {
        check_index("SequenceViewMut::at", index, self.count)?;
        Ok(&self.items[self.offset + index])
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, SequenceError> {
        check_index("SequenceViewMut::set", index, self.count)?;
        Ok(std::mem::replace(&mut self.items[self.offset + index], value))
    }

    /// Swaps two elements of the window.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if either position is outside the window.
    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), SequenceError> {
        check_index("SequenceViewMut::swap", first, self.count)?;
        check_index("SequenceViewMut::swap", second, self.count)?;
        self.as_mut_slice().swap(first, second);
        Ok(())
    }

    /// Overwrites every element of the window with clones of `value`.
    pub fn fill(&mut self, value: &T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value.clone());
    }

    /// Returns the mutable sub-window `[start, start + count)` of this window.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::OutOfRange`] if `start > self.len()`.
    /// - [`SequenceError::InvalidArgument`] if `count` does not fit after `start`.
    pub fn window_mut(&mut self, start: usize, count: usize) -> Result<SequenceViewMut<'_, T>, SequenceError> {
        check_window("SequenceViewMut::window_mut", self.count, start, count)?;
        Ok(SequenceViewMut::from_parts(
            &mut *self.items,
            self.offset + start,
            count,
        ))
    }

    /// Drops the first `count` elements, keeping the rest writable.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `count > self.len()`.
    pub fn skip_mut(&mut self, count: usize) -> Result<SequenceViewMut<'_, T>, SequenceError> {
        if count > self.count {
            return Err(SequenceError::out_of_range(
                "SequenceViewMut::skip_mut",
                "count",
                count,
                self.count,
            ));
        }
        Ok(SequenceViewMut::from_parts(
            &mut *self.items,
            self.offset + count,
            self.count - count,
        ))
    }

    /// Returns an iterator over the window.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the window.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Index<usize> for SequenceViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for SequenceViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> From<&'a mut [T]> for SequenceViewMut<'a, T> {
    #[inline]
    fn from(items: &'a mut [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for SequenceViewMut<'a, T> {
    #[inline]
    fn from(items: &'a mut [T; N]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a mut Vec<T>> for SequenceViewMut<'a, T> {
    #[inline]
    fn from(items: &'a mut Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: fmt::Debug> fmt::Debug for SequenceViewMut<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SequenceViewMut")
            .field("offset", &self.offset)
            .field("count", &self.count)
            .field("items", &self.as_slice())
            .finish()
    }
}
