//! Growable sequence view.

use std::fmt;

use super::{GrowableContainer, SequenceView, SequenceViewMut, check_index, check_window};
use crate::error::SequenceError;

/// An `offset`/`count` window that can grow and shrink.
///
/// Inserting into or removing from the window edits the host container:
/// elements after the window shift along, and the container's length
/// changes by the same amount as the window's.
///
/// # Examples
///
/// ```rust
/// use seqview::view::ExpandableView;
///
/// let mut values = vec![1, 2, 3, 4, 5];
/// let mut view = ExpandableView::with_range(&mut values, 1, 3).unwrap();
///
/// view.remove_range(0, 2).unwrap();
/// assert_eq!(view.as_slice(), &[4]);
///
/// view.insert(0, 9).unwrap();
/// view.push(8);
/// assert_eq!(view.as_slice(), &[9, 4, 8]);
/// assert_eq!(values, vec![1, 9, 4, 8, 5]);
/// ```
pub struct ExpandableView<'a, C: GrowableContainer> {
    container: &'a mut C,
    offset: usize,
    count: usize,
}

impl<'a, C: GrowableContainer> ExpandableView<'a, C> {
    /// Creates a view over the whole container.
    #[must_use]
    pub fn new(container: &'a mut C) -> Self {
        let count = container.len();
        Self {
            container,
            offset: 0,
            count,
        }
    }

    /// Creates an empty window at the end of the container.
    ///
    /// This is the usual destination for the `add_*` algorithms: everything
    /// they produce is appended after the existing elements.
    #[must_use]
    pub fn at_end(container: &'a mut C) -> Self {
        let offset = container.len();
        Self {
            container,
            offset,
            count: 0,
        }
    }

    /// Creates a view over the container's `[offset, offset + count)` range.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::OutOfRange`] if `offset` is past the end.
    /// - [`SequenceError::InvalidArgument`] if `count` does not fit after `offset`.
    pub fn with_range(container: &'a mut C, offset: usize, count: usize) -> Result<Self, SequenceError> {
        check_window("ExpandableView::with_range", container.len(), offset, count)?;
        Ok(Self {
            container,
            offset,
            count,
        })
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
    pub fn container_len(&self) -> usize {
        self.container.len()
    }

    /// The window's elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[C::Item] {
        &self.container.as_slice()[self.offset..self.offset + self.count]
    }

    /// The window's elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [C::Item] {
        &mut self.container.as_mut_slice()[self.offset..self.offset + self.count]
    }

    /// Reborrows the window read-only.
    #[inline]
    #[must_use]
    pub fn as_view(&self) -> SequenceView<'_, C::Item> {
        SequenceView::from_parts(self.container.as_slice(), self.offset, self.count)
    }

    /// Reborrows the window as a fixed-length mutable view.
    #[inline]
    pub fn as_view_mut(&mut self) -> SequenceViewMut<'_, C::Item> {
        SequenceViewMut::from_parts(self.container.as_mut_slice(), self.offset, self.count)
    }

    /// Returns the element at `index`, or `None` outside the window.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&C::Item> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&C::Item, SequenceError> {
        check_index("ExpandableView::at", index, self.count)?;
        Ok(&self.container.as_slice()[self.offset + index])
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: C::Item) -> Result<C::Item, SequenceError> {
        check_index("ExpandableView::set", index, self.count)?;
        let position = self.offset + index;
        Ok(std::mem::replace(
            &mut self.container.as_mut_slice()[position],
            value,
        ))
    }

    /// Appends `item` at the end of the window.
    pub fn push(&mut self, item: C::Item) {
        self.container.insert_at(self.offset + self.count, item);
        self.count += 1;
    }

    /// Appends every item of `items` at the end of the window, in order.
    /// Returns the number appended.
    pub fn extend_from_iter<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = C::Item>,
    {
        let inserted = self
            .container
            .insert_iter_at(self.offset + self.count, items);
        self.count += inserted;
        inserted
    }

    /// Inserts `item` at `index`, where `index` may equal `self.len()`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `index > self.len()`.
    pub fn insert(&mut self, index: usize, item: C::Item) -> Result<(), SequenceError> {
        if index > self.count {
            return Err(SequenceError::out_of_range(
                "ExpandableView::insert",
                "index",
                index,
                self.count,
            ));
        }
        self.container.insert_at(self.offset + index, item);
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `index >= self.len()`.
    pub fn remove(&mut self, index: usize) -> Result<C::Item, SequenceError> {
        check_index("ExpandableView::remove", index, self.count)?;
        let item = self.container.remove_at(self.offset + index);
        self.count -= 1;
        Ok(item)
    }

    /// Removes `count` elements starting at `start`; survivors keep their order.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::OutOfRange`] if `start > self.len()`.
    /// - [`SequenceError::InvalidArgument`] if `count` does not fit after `start`.
    pub fn remove_range(&mut self, start: usize, count: usize) -> Result<(), SequenceError> {
        check_window("ExpandableView::remove_range", self.count, start, count)?;
        if count > 0 {
            let begin = self.offset + start;
            self.container.remove_range(begin..begin + count);
            self.count -= count;
        }
        Ok(())
    }

    /// Shortens the window to `count` elements, removing the rest from the
    /// container. Does nothing if the window is already that short.
    pub fn truncate(&mut self, count: usize) {
        if count < self.count {
            let begin = self.offset + count;
            self.container.remove_range(begin..self.offset + self.count);
            self.count = count;
        }
    }

    /// Removes every element of the window from the container.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Returns an iterator over the window.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, C::Item> {
        self.as_slice().iter()
    }
}

impl<C> fmt::Debug for ExpandableView<'_, C>
where
    C: GrowableContainer,
    C::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ExpandableView")
            .field("offset", &self.offset)
            .field("count", &self.count)
            .field("items", &self.as_slice())
            .finish()
    }
}
