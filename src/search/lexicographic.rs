//! Element-by-element comparison of two views.
//!
//! Views are compared by position and value. Two views cut from the same
//! container are still compared element by element unless they are the very
//! same region, in which case [`are_equal`] answers without looking at the
//! elements.

use std::cmp::Ordering;

use crate::compare::{Comparator, Equivalence};
use crate::view::SequenceView;

/// Index of the first position where the views differ.
///
/// If one view is a prefix of the other, this is the shorter length.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::NaturalEquality;
/// use seqview::search::mismatch;
/// use seqview::view::SequenceView;
///
/// assert_eq!(mismatch(SequenceView::new(&[1, 2, 3]), SequenceView::new(&[1, 2, 4]), &NaturalEquality), 2);
/// assert_eq!(mismatch(SequenceView::new(&[1, 2]), SequenceView::new(&[1, 2, 4]), &NaturalEquality), 2);
/// ```
pub fn mismatch<T, E>(first: SequenceView<'_, T>, second: SequenceView<'_, T>, equivalence: &E) -> usize
where
    E: Equivalence<T> + ?Sized,
{
    first
        .iter()
        .zip(second.iter())
        .position(|(left, right)| !equivalence.equivalent(left, right))
        .unwrap_or_else(|| first.len().min(second.len()))
}

/// Lexicographic three-way comparison.
///
/// The first non-equal pair decides. If there is none, the shorter view
/// orders first.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use seqview::compare::NaturalOrder;
/// use seqview::search::compare_to;
/// use seqview::view::SequenceView;
///
/// let ordering = compare_to(SequenceView::new(&[1, 9]), SequenceView::new(&[2]), &NaturalOrder);
/// assert_eq!(ordering, Ordering::Less);
/// ```
pub fn compare_to<T, C>(first: SequenceView<'_, T>, second: SequenceView<'_, T>, comparator: &C) -> Ordering
where
    C: Comparator<T> + ?Sized,
{
    first
        .iter()
        .zip(second.iter())
        .map(|(left, right)| comparator.compare(left, right))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| first.len().cmp(&second.len()))
}

/// Whether both views have the same length and pairwise equivalent elements.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::NaturalEquality;
/// use seqview::search::are_equal;
/// use seqview::view::SequenceView;
///
/// let values = [7, 7, 7, 7];
/// let left = SequenceView::with_range(&values, 0, 2).unwrap();
/// let right = SequenceView::with_range(&values, 2, 2).unwrap();
/// assert!(are_equal(left, right, &NaturalEquality));
///
/// let shorter = SequenceView::with_range(&values, 2, 1).unwrap();
/// assert!(!are_equal(left, shorter, &NaturalEquality));
/// ```
pub fn are_equal<T, E>(first: SequenceView<'_, T>, second: SequenceView<'_, T>, equivalence: &E) -> bool
where
    E: Equivalence<T> + ?Sized,
{
    if first.len() != second.len() {
        return false;
    }
    if first.is_same_region(&second) {
        return true;
    }
    mismatch(first, second, equivalence) == first.len()
}
