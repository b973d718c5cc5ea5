//! Ordered subset tests over sorted, duplicate-free views.

use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::result::SubsetResult;
use crate::view::SequenceView;

/// Checks whether every element of `subset` occurs in `superset`, walking
/// both ascending views once.
///
/// On failure `index` is the position in `subset` of the first element that
/// the rest of `superset` does not contain. On success it is `subset.len()`.
/// An empty `subset` always succeeds.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::NaturalOrder;
/// use seqview::search::is_subset_until;
/// use seqview::view::SequenceView;
///
/// let superset = [1, 2, 4, 8, 16];
/// let result = is_subset_until(SequenceView::new(&[2, 8, 9]), SequenceView::new(&superset), &NaturalOrder);
/// assert!(!result.success);
/// assert_eq!(result.index, 2);
/// ```
pub fn is_subset_until<T, C>(subset: SequenceView<'_, T>, superset: SequenceView<'_, T>, comparator: &C) -> SubsetResult
where
    C: Comparator<T> + ?Sized,
{
    let needles = subset.as_slice();
    let haystack = superset.as_slice();
    let mut haystack_index = 0;

    for (needle_index, needle) in needles.iter().enumerate() {
        loop {
            let Some(candidate) = haystack.get(haystack_index) else {
                return SubsetResult {
                    index: needle_index,
                    success: false,
                };
            };
            match comparator.compare(candidate, needle) {
                Ordering::Less => haystack_index += 1,
                Ordering::Equal => {
                    haystack_index += 1;
                    break;
                }
                Ordering::Greater => {
                    return SubsetResult {
                        index: needle_index,
                        success: false,
                    };
                }
            }
        }
    }

    SubsetResult {
        index: needles.len(),
        success: true,
    }
}

/// Whether every element of `subset` occurs in `superset`.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::NaturalOrder;
/// use seqview::search::is_subset;
/// use seqview::view::SequenceView;
///
/// assert!(is_subset(SequenceView::new(&[1, 4]), SequenceView::new(&[1, 2, 4]), &NaturalOrder));
/// ```
pub fn is_subset<T, C>(subset: SequenceView<'_, T>, superset: SequenceView<'_, T>, comparator: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    is_subset_until(subset, superset, comparator).success
}
