//! Binary search for equal-ranges in sorted views.

use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::result::LowerAndUpperBoundResult;
use crate::view::SequenceView;

/// First position whose element is not less than `value`.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::NaturalOrder;
/// use seqview::search::lower_bound;
/// use seqview::view::SequenceView;
///
/// let values = [1, 2, 2, 2, 5];
/// assert_eq!(lower_bound(SequenceView::new(&values), &2, &NaturalOrder), 1);
/// assert_eq!(lower_bound(SequenceView::new(&values), &3, &NaturalOrder), 4);
/// ```
pub fn lower_bound<T, C>(view: SequenceView<'_, T>, value: &T, comparator: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    view.as_slice()
        .partition_point(|element| comparator.less(element, value))
}

/// First position whose element is greater than `value`.
pub fn upper_bound<T, C>(view: SequenceView<'_, T>, value: &T, comparator: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    view.as_slice()
        .partition_point(|element| !comparator.less(value, element))
}

/// Both bounds of the run of elements equal to `value`, in O(log n).
///
/// The search narrows the range until it hits an equal element, then finishes
/// the lower bound in the left half and the upper bound in the right half.
/// When no element is equal both bounds are the insertion point.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::NaturalOrder;
/// use seqview::search::lower_and_upper_bound;
/// use seqview::view::SequenceView;
///
/// let values = [1, 3, 3, 3, 8];
/// let bounds = lower_and_upper_bound(SequenceView::new(&values), &3, &NaturalOrder);
/// assert_eq!(bounds.as_range(), 1..4);
///
/// let missing = lower_and_upper_bound(SequenceView::new(&values), &5, &NaturalOrder);
/// assert!(missing.is_empty());
/// assert_eq!(missing.lower_bound, 4);
/// ```
pub fn lower_and_upper_bound<T, C>(view: SequenceView<'_, T>, value: &T, comparator: &C) -> LowerAndUpperBoundResult
where
    C: Comparator<T> + ?Sized,
{
    let items = view.as_slice();
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let middle = low + (high - low) / 2;
        match comparator.compare(&items[middle], value) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => {
                let lower = low
                    + items[low..middle].partition_point(|element| comparator.less(element, value));
                let upper = middle
                    + 1
                    + items[middle + 1..high]
                        .partition_point(|element| !comparator.less(value, element));
                return LowerAndUpperBoundResult {
                    lower_bound: lower,
                    upper_bound: upper,
                };
            }
        }
    }

    LowerAndUpperBoundResult {
        lower_bound: low,
        upper_bound: low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NaturalOrder;
    use rstest::rstest;

    #[rstest]
    #[case(&[], 1, 0, 0)]
    #[case(&[1], 1, 0, 1)]
    #[case(&[2, 2, 2], 2, 0, 3)]
    #[case(&[1, 2, 3], 0, 0, 0)]
    #[case(&[1, 2, 3], 4, 3, 3)]
    #[case(&[1, 2, 2, 3, 3, 3, 4], 3, 3, 6)]
    #[case(&[1, 3, 5, 7], 4, 2, 2)]
    fn test_equal_range(
        #[case] values: &[i32],
        #[case] value: i32,
        #[case] lower: usize,
        #[case] upper: usize,
    ) {
        let bounds = lower_and_upper_bound(SequenceView::new(values), &value, &NaturalOrder);
        assert_eq!((bounds.lower_bound, bounds.upper_bound), (lower, upper));
        assert_eq!(lower_bound(SequenceView::new(values), &value, &NaturalOrder), lower);
        assert_eq!(upper_bound(SequenceView::new(values), &value, &NaturalOrder), upper);
    }

    #[rstest]
    fn test_bounds_are_relative_to_window() {
        let values = [0, 5, 5, 9, 5];
        let view = SequenceView::with_range(&values, 1, 3).unwrap();
        let bounds = lower_and_upper_bound(view, &5, &NaturalOrder);
        assert_eq!(bounds.as_range(), 0..2);
    }
}
