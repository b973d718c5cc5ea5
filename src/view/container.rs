//! Host container boundary for expandable views.

use std::ops::Range;

/// A random-access container whose length can change.
///
/// This is everything an [`ExpandableView`](super::ExpandableView) needs from
/// the storage it edits. Implementations are provided for `Vec<T>` and, with
/// the `smallvec` feature, for `smallvec::SmallVec`.
///
/// All positions are absolute container positions. Callers (the views)
/// validate them before calling.
pub trait GrowableContainer {
    /// The element type.
    type Item;

    /// The container's elements.
    fn as_slice(&self) -> &[Self::Item];

    /// The container's elements, mutably.
    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    /// Number of elements in the container.
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `item` at `index`, shifting later elements right.
    fn insert_at(&mut self, index: usize, item: Self::Item);

    /// Inserts every item of `items` starting at `index`, preserving their
    /// order. Returns the number inserted.
    fn insert_iter_at<I>(&mut self, index: usize, items: I) -> usize
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let mut position = index;
        for item in items {
            self.insert_at(position, item);
            position += 1;
        }
        position - index
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    fn remove_at(&mut self, index: usize) -> Self::Item;

    /// Removes the elements in `range`; survivors keep their order.
    fn remove_range(&mut self, range: Range<usize>);
}

impl<T> GrowableContainer for Vec<T> {
    type Item = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    #[inline]
    fn insert_at(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }

    fn insert_iter_at<I>(&mut self, index: usize, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.len();
        self.splice(index..index, items);
        self.len() - before
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> T {
        self.remove(index)
    }

    #[inline]
    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }
}

#[cfg(feature = "smallvec")]
impl<T, const N: usize> GrowableContainer for smallvec::SmallVec<[T; N]>
where
    [T; N]: smallvec::Array<Item = T>,
{
    type Item = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    #[inline]
    fn insert_at(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }

    fn insert_iter_at<I>(&mut self, index: usize, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let before = smallvec::SmallVec::len(self);
        self.insert_many(index, items);
        smallvec::SmallVec::len(self) - before
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> T {
        self.remove(index)
    }

    #[inline]
    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }
}
